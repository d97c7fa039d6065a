//! Tests for the combat engine: command handling, projectile lifecycle, homing, and determinism.

use std::rc::Rc;

use glam::Vec3;

use autoduel_core::commands::PlayerCommand;
use autoduel_core::constants::DT;
use autoduel_core::enums::*;
use autoduel_core::events::ProjectileEvent;
use autoduel_core::state::CombatSnapshot;

use crate::clock::ManualClock;
use crate::engine::{CombatEngine, EngineError, SimConfig};
use crate::projectile::{Projectile, ProjectileError};

fn engine_with_clock(seed: u64) -> (CombatEngine, Rc<ManualClock>) {
    let clock = Rc::new(ManualClock::new(0));
    let engine = CombatEngine::new(
        SimConfig {
            seed,
            ..Default::default()
        },
        Rc::clone(&clock),
    );
    (engine, clock)
}

fn spawn(engine: &mut CombatEngine, vehicle_id: u32, skin_id: &str, position: Vec3) {
    engine.queue_command(PlayerCommand::SpawnVehicle {
        vehicle_id,
        skin_id: skin_id.to_string(),
        position,
    });
}

fn fire(engine: &mut CombatEngine, vehicle_id: u32, kind: ProjectileKind, direction: Vec3) {
    engine.queue_command(PlayerCommand::Fire {
        vehicle_id,
        kind,
        direction,
    });
}

fn expired_events(snap: &CombatSnapshot) -> Vec<(u32, Termination)> {
    snap.events
        .iter()
        .filter_map(|event| match event {
            ProjectileEvent::Expired {
                projectile_id,
                reason,
                ..
            } => Some((*projectile_id, *reason)),
            _ => None,
        })
        .collect()
}

// ---- Firing ----

#[test]
fn test_fire_emits_event_and_spawns_at_anchor() {
    let (mut engine, _clock) = engine_with_clock(1);
    spawn(&mut engine, 7, "auger", Vec3::new(3.0, 0.0, -2.0));
    engine.tick(DT);

    fire(&mut engine, 7, ProjectileKind::Special, Vec3::Z);
    let snap = engine.tick(DT);

    assert_eq!(
        snap.events,
        vec![ProjectileEvent::Fired {
            projectile_id: 0,
            kind: ProjectileKind::Special,
            shooter_id: 7,
            shape: ShapeKey::Drill,
        }]
    );
    assert_eq!(snap.projectiles.len(), 1);

    let p = &snap.projectiles[0];
    assert_eq!(p.shooter_id, Some(7));
    assert_eq!(p.damage, 50);
    assert_eq!(p.scale, 2.0);
    // One tick of flight at speed 1 from the anchor.
    assert!((p.position - Vec3::new(3.0, 0.0, -1.0)).length() < 1e-4);
}

#[test]
fn test_basic_shot_uses_tracer_regardless_of_skin() {
    let (mut engine, _clock) = engine_with_clock(1);
    spawn(&mut engine, 1, "clubKid", Vec3::ZERO);
    fire(&mut engine, 1, ProjectileKind::Basic, Vec3::X);
    let snap = engine.tick(DT);

    assert_eq!(snap.projectiles[0].shape, ShapeKey::Tracer);
    assert_eq!(snap.projectiles[0].damage, 5);
}

#[test]
fn test_unknown_skin_falls_back_to_energy_orb() {
    let (mut engine, _clock) = engine_with_clock(1);
    spawn(&mut engine, 1, "notARealSkin", Vec3::ZERO);
    fire(&mut engine, 1, ProjectileKind::Special, Vec3::X);
    let snap = engine.tick(DT);

    assert_eq!(snap.projectiles[0].shape, ShapeKey::EnergyOrb);
}

#[test]
fn test_projectile_ids_are_sequential() {
    let (mut engine, _clock) = engine_with_clock(1);
    spawn(&mut engine, 1, "auger", Vec3::ZERO);
    for _ in 0..3 {
        fire(&mut engine, 1, ProjectileKind::Basic, Vec3::X);
    }
    let snap = engine.tick(DT);

    let ids: Vec<u32> = snap.projectiles.iter().map(|p| p.projectile_id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
}

#[test]
fn test_fire_from_unknown_vehicle_is_dropped() {
    let (mut engine, _clock) = engine_with_clock(1);
    fire(&mut engine, 99, ProjectileKind::Basic, Vec3::X);
    let snap = engine.tick(DT);

    assert!(snap.projectiles.is_empty());
    assert!(snap.events.is_empty());
    assert!(matches!(
        engine.fire(99, ProjectileKind::Basic, Vec3::X),
        Err(EngineError::UnknownVehicle(99))
    ));
}

#[test]
fn test_fire_without_anchor_is_rejected() {
    let (mut engine, _clock) = engine_with_clock(1);
    spawn(&mut engine, 1, "auger", Vec3::ZERO);
    engine.tick(DT);
    engine.hide_vehicle(1);

    assert!(matches!(
        engine.fire(1, ProjectileKind::Special, Vec3::X),
        Err(EngineError::NoAnchor(1))
    ));
    assert_eq!(engine.projectile_count(), 0);
}

#[test]
fn test_degenerate_direction_is_rejected() {
    let (mut engine, _clock) = engine_with_clock(1);
    spawn(&mut engine, 1, "auger", Vec3::ZERO);
    engine.tick(DT);

    let result = engine.fire(1, ProjectileKind::Basic, Vec3::ZERO);
    assert!(matches!(
        result,
        Err(EngineError::Projectile(ProjectileError::DegenerateDirection(_)))
    ));
    assert_eq!(engine.projectile_count(), 0);
}

#[test]
fn test_launch_without_shooter() {
    let (mut engine, _clock) = engine_with_clock(1);
    let id = engine
        .launch(ProjectileKind::Special, Vec3::ONE, Vec3::NEG_X, None)
        .unwrap();
    let snap = engine.tick(DT);

    // No shooter, no Fired event.
    assert!(snap.events.is_empty());
    assert_eq!(snap.projectiles[0].projectile_id, id);
    assert_eq!(snap.projectiles[0].shooter_id, None);
    assert_eq!(snap.projectiles[0].shape, ShapeKey::EnergyOrb);
}

#[test]
fn test_launch_ignores_shooter_anchor_for_position() {
    let (mut engine, _clock) = engine_with_clock(1);
    spawn(&mut engine, 1, "axel", Vec3::new(100.0, 0.0, 0.0));
    engine.tick(DT);

    engine
        .launch(ProjectileKind::Basic, Vec3::ZERO, Vec3::Z, Some(1))
        .unwrap();
    let snap = engine.tick(DT);
    let p = &snap.projectiles[0];
    assert!(p.position.x.abs() < 1e-4);
    assert_eq!(p.shooter_id, Some(1));
}

// ---- Lifecycle ----

#[test]
fn test_basic_shot_ends_out_of_range() {
    let (mut engine, _clock) = engine_with_clock(1);
    spawn(&mut engine, 1, "auger", Vec3::ZERO);
    fire(&mut engine, 1, ProjectileKind::Basic, Vec3::X);

    // 2 units per tick against a 50 unit range.
    for _ in 0..24 {
        let snap = engine.tick(DT);
        assert_eq!(snap.projectiles.len(), 1);
    }

    let mut ended = Vec::new();
    for _ in 0..3 {
        ended.extend(expired_events(&engine.tick(DT)));
    }
    assert_eq!(ended, vec![(0, Termination::OutOfRange)]);
    assert_eq!(engine.projectile_count(), 0);
}

#[test]
fn test_lifetime_expiry_beats_range() {
    let (mut engine, clock) = engine_with_clock(1);
    spawn(&mut engine, 1, "auger", Vec3::ZERO);
    fire(&mut engine, 1, ProjectileKind::Special, Vec3::X);
    engine.tick(DT);

    clock.advance(4500);
    let snap = engine.tick(DT);

    assert_eq!(expired_events(&snap), vec![(0, Termination::Expired)]);
    assert!(snap.projectiles.is_empty());
}

#[test]
fn test_lifetime_is_wall_clock_not_ticks() {
    let (mut engine, clock) = engine_with_clock(1);
    spawn(&mut engine, 1, "auger", Vec3::ZERO);
    fire(&mut engine, 1, ProjectileKind::Basic, Vec3::X);
    engine.tick(DT);

    clock.advance(2999);
    assert_eq!(engine.tick(DT).projectiles.len(), 1);
    assert_eq!(engine.tick(DT).projectiles[0].age_ms, 2999);

    clock.advance(1);
    let snap = engine.tick(DT);
    assert_eq!(expired_events(&snap), vec![(0, Termination::Expired)]);
}

#[test]
fn test_zero_delta_stalls_projectiles() {
    let (mut engine, _clock) = engine_with_clock(1);
    spawn(&mut engine, 1, "auger", Vec3::ZERO);
    fire(&mut engine, 1, ProjectileKind::Basic, Vec3::X);
    fire(&mut engine, 1, ProjectileKind::Special, Vec3::X);
    let snap = engine.tick(0.0);

    assert_eq!(
        expired_events(&snap),
        vec![(0, Termination::Stalled), (1, Termination::Stalled)]
    );
    assert!(snap.projectiles.is_empty());
}

#[test]
fn test_projectile_outlives_despawned_shooter() {
    let (mut engine, _clock) = engine_with_clock(1);
    spawn(&mut engine, 1, "auger", Vec3::ZERO);
    fire(&mut engine, 1, ProjectileKind::Special, Vec3::X);
    engine.tick(DT);

    engine.queue_command(PlayerCommand::DespawnVehicle { vehicle_id: 1 });
    let snap = engine.tick(DT);

    assert!(snap.vehicles.is_empty());
    assert_eq!(snap.projectiles.len(), 1);
    assert_eq!(snap.projectiles[0].shooter_id, None);
    assert_eq!(snap.projectiles[0].shape, ShapeKey::Drill);
}

// ---- Homing ----

#[test]
fn test_special_homes_on_target() {
    let (mut engine, _clock) = engine_with_clock(1);
    spawn(&mut engine, 1, "auger", Vec3::ZERO);
    spawn(&mut engine, 2, "axel", Vec3::new(20.0, 0.0, 20.0));
    engine.queue_command(PlayerCommand::SetHomingTarget { vehicle_id: 2 });
    fire(&mut engine, 1, ProjectileKind::Special, Vec3::Z);

    let snap = engine.tick(DT);
    assert_eq!(snap.homing_target, Some(2));
    let dir = snap.projectiles[0].direction;
    assert!(dir.x > 0.0, "should turn toward the target, got {dir}");
    assert!((dir.length() - 1.0).abs() < 1e-5);
}

#[test]
fn test_basic_shot_ignores_homing_target() {
    let (mut engine, _clock) = engine_with_clock(1);
    spawn(&mut engine, 1, "auger", Vec3::ZERO);
    spawn(&mut engine, 2, "axel", Vec3::new(20.0, 0.0, 0.0));
    engine.queue_command(PlayerCommand::SetHomingTarget { vehicle_id: 2 });
    fire(&mut engine, 1, ProjectileKind::Basic, Vec3::Z);

    for _ in 0..5 {
        let snap = engine.tick(DT);
        assert_eq!(snap.projectiles[0].direction, Vec3::Z);
    }
}

#[test]
fn test_owner_is_never_its_own_target() {
    let (mut engine, _clock) = engine_with_clock(1);
    spawn(&mut engine, 1, "auger", Vec3::new(5.0, 0.0, 0.0));
    engine.queue_command(PlayerCommand::SetHomingTarget { vehicle_id: 1 });
    fire(&mut engine, 1, ProjectileKind::Special, Vec3::Z);

    for _ in 0..10 {
        engine.queue_command(PlayerCommand::MoveVehicle {
            vehicle_id: 1,
            position: Vec3::new(-30.0, 0.0, 0.0),
        });
        let snap = engine.tick(DT);
        assert_eq!(snap.projectiles[0].direction, Vec3::Z);
    }
}

#[test]
fn test_despawned_target_stops_homing() {
    let (mut engine, _clock) = engine_with_clock(1);
    spawn(&mut engine, 1, "auger", Vec3::ZERO);
    spawn(&mut engine, 2, "axel", Vec3::new(30.0, 0.0, 0.0));
    engine.queue_command(PlayerCommand::SetHomingTarget { vehicle_id: 2 });
    fire(&mut engine, 1, ProjectileKind::Special, Vec3::Z);
    let snap = engine.tick(DT);
    let turned = snap.projectiles[0].direction;
    assert_ne!(turned, Vec3::Z);

    engine.queue_command(PlayerCommand::DespawnVehicle { vehicle_id: 2 });
    for _ in 0..5 {
        let snap = engine.tick(DT);
        assert_eq!(snap.homing_target, None);
        assert_eq!(snap.projectiles[0].direction, turned);
    }
}

#[test]
fn test_hidden_target_stops_homing_until_moved() {
    let (mut engine, _clock) = engine_with_clock(1);
    spawn(&mut engine, 1, "auger", Vec3::ZERO);
    spawn(&mut engine, 2, "axel", Vec3::new(30.0, 0.0, 0.0));
    engine.queue_command(PlayerCommand::SetHomingTarget { vehicle_id: 2 });
    engine.tick(DT);
    engine.hide_vehicle(2);

    fire(&mut engine, 1, ProjectileKind::Special, Vec3::Z);
    let snap = engine.tick(DT);
    assert_eq!(snap.homing_target, Some(2));
    assert_eq!(snap.vehicles[1].position, None);
    assert_eq!(snap.projectiles[0].direction, Vec3::Z);

    engine.queue_command(PlayerCommand::MoveVehicle {
        vehicle_id: 2,
        position: Vec3::new(30.0, 0.0, 0.0),
    });
    let snap = engine.tick(DT);
    assert!(snap.projectiles[0].direction.x > 0.0);
}

#[test]
fn test_clear_homing_target() {
    let (mut engine, _clock) = engine_with_clock(1);
    spawn(&mut engine, 1, "auger", Vec3::ZERO);
    spawn(&mut engine, 2, "axel", Vec3::X * 10.0);
    engine.queue_command(PlayerCommand::SetHomingTarget { vehicle_id: 2 });
    engine.tick(DT);
    assert!(engine.homing_target().is_some());

    engine.queue_command(PlayerCommand::ClearHomingTarget);
    fire(&mut engine, 1, ProjectileKind::Special, Vec3::Z);
    let snap = engine.tick(DT);
    assert_eq!(snap.homing_target, None);
    assert_eq!(snap.projectiles[0].direction, Vec3::Z);
}

#[test]
fn test_unknown_homing_target_is_ignored() {
    let (mut engine, _clock) = engine_with_clock(1);
    engine.queue_command(PlayerCommand::SetHomingTarget { vehicle_id: 42 });
    let snap = engine.tick(DT);
    assert_eq!(snap.homing_target, None);
    assert!(engine.homing_target().is_none());
}

// ---- Vehicles ----

#[test]
fn test_duplicate_vehicle_id_is_ignored() {
    let (mut engine, _clock) = engine_with_clock(1);
    spawn(&mut engine, 1, "auger", Vec3::ZERO);
    spawn(&mut engine, 1, "axel", Vec3::X);
    let snap = engine.tick(DT);

    assert_eq!(snap.vehicles.len(), 1);
    assert_eq!(snap.vehicles[0].skin_id, "auger");
}

#[test]
fn test_time_advances_by_delta() {
    let (mut engine, _clock) = engine_with_clock(1);
    for _ in 0..60 {
        engine.tick(DT);
    }
    assert_eq!(engine.time().tick, 60);
    assert!((engine.time().elapsed_secs - 1.0).abs() < 1e-4);
}

// ---- Determinism ----

fn disco_volley(seed: u64) -> (Vec<String>, Vec<Projectile>) {
    let (mut engine, clock) = engine_with_clock(seed);
    spawn(&mut engine, 1, "clubKid", Vec3::ZERO);
    spawn(&mut engine, 2, "auger", Vec3::new(0.0, 0.0, 40.0));
    engine.queue_command(PlayerCommand::SetHomingTarget { vehicle_id: 2 });

    let mut snapshots = Vec::new();
    for tick in 0..40 {
        if tick % 10 == 0 {
            fire(&mut engine, 1, ProjectileKind::Special, Vec3::X);
            fire(&mut engine, 1, ProjectileKind::Basic, Vec3::Z);
        }
        clock.advance(16);
        let snap = engine.tick(DT);
        snapshots.push(serde_json::to_string(&snap).unwrap());
    }

    let mut live: Vec<_> = engine
        .world()
        .query::<(&autoduel_core::components::ProjectileId, &Projectile)>()
        .iter()
        .map(|(_, (id, projectile))| (id.0, projectile.clone()))
        .collect();
    live.sort_by_key(|(id, _)| *id);
    (snapshots, live.into_iter().map(|(_, p)| p).collect())
}

#[test]
fn test_determinism_same_seed() {
    let (snaps_a, live_a) = disco_volley(12345);
    let (snaps_b, live_b) = disco_volley(12345);

    assert_eq!(snaps_a, snaps_b, "Snapshots diverged with same seed");
    assert_eq!(live_a.len(), live_b.len());
    for (a, b) in live_a.iter().zip(&live_b) {
        assert_eq!(a.shape(), b.shape());
    }
}

#[test]
fn test_different_seeds_scatter_disco_tiles_differently() {
    let (_, live_a) = disco_volley(111);
    let (_, live_b) = disco_volley(222);

    let disco = |live: &[Projectile]| {
        live.iter()
            .find(|p| p.shape().shape.key == ShapeKey::DiscoBall)
            .map(|p| p.shape().shape.clone())
            .unwrap()
    };
    assert_ne!(disco(&live_a).root, disco(&live_b).root);
}
