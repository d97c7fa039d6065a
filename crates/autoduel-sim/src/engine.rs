//! Combat engine: the host-facing driver for projectiles.
//!
//! `CombatEngine` owns the hecs ECS world, processes queued commands,
//! runs the projectile systems, and produces `CombatSnapshot`s.
//! Completely headless, so it can be driven tick by tick from tests.

use std::collections::VecDeque;

use glam::Vec3;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::{debug, warn};

use autoduel_core::commands::PlayerCommand;
use autoduel_core::components::{Anchor, Vehicle};
use autoduel_core::constants::DEFAULT_SEED;
use autoduel_core::enums::ProjectileKind;
use autoduel_core::events::ProjectileEvent;
use autoduel_core::state::CombatSnapshot;
use autoduel_core::tuning::TuningTable;
use autoduel_core::types::SimTime;
use autoduel_visuals::VisualRegistry;

use crate::clock::Clock;
use crate::projectile::{OwnerRef, Projectile, ProjectileError, SpawnContext};
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new engine.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Seed for cosmetic randomness. Same seed = same visuals.
    pub seed: u64,
    pub tuning: TuningTable,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            tuning: TuningTable::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no vehicle with id {0}")]
    UnknownVehicle(u32),
    #[error("vehicle {0} has no visible anchor to fire from")]
    NoAnchor(u32),
    #[error(transparent)]
    Projectile(#[from] ProjectileError),
}

/// The combat engine. Owns the ECS world and all projectile state.
pub struct CombatEngine {
    world: World,
    time: SimTime,
    clock: Box<dyn Clock>,
    rng: ChaCha8Rng,
    tuning: TuningTable,
    visuals: VisualRegistry,
    homing_target: Option<Entity>,
    next_projectile_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<ProjectileEvent>,
}

impl CombatEngine {
    /// Create a new engine reading lifetimes from `clock`.
    pub fn new(config: SimConfig, clock: impl Clock + 'static) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            clock: Box::new(clock),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            tuning: config.tuning,
            visuals: VisualRegistry::default(),
            homing_target: None,
            next_projectile_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Replace the visual catalog (e.g. to add modded skins).
    pub fn with_visuals(mut self, visuals: VisualRegistry) -> Self {
        self.visuals = visuals;
        self
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance by one tick of `delta` seconds and return the resulting snapshot.
    pub fn tick(&mut self, delta: f32) -> CombatSnapshot {
        self.process_commands();

        systems::projectiles::run(&mut self.world, delta, self.homing_target, &*self.clock);
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer, &mut self.events);
        self.time.advance(delta);

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.homing_target,
            &*self.clock,
            events,
        )
    }

    /// Spawn a projectile at `position`, optionally on behalf of a vehicle.
    ///
    /// The shooter only supplies the skin and the no-self-homing rule; the
    /// projectile does not start at the shooter's anchor.
    pub fn launch(
        &mut self,
        kind: ProjectileKind,
        position: Vec3,
        direction: Vec3,
        shooter: Option<u32>,
    ) -> Result<u32, EngineError> {
        let shooter = match shooter {
            Some(vehicle_id) => {
                let entity = world_setup::find_vehicle(&self.world, vehicle_id)
                    .ok_or(EngineError::UnknownVehicle(vehicle_id))?;
                let skin_id = self
                    .world
                    .get::<&Vehicle>(entity)
                    .map(|vehicle| vehicle.skin_id.clone())
                    .map_err(|_| EngineError::UnknownVehicle(vehicle_id))?;
                Some((vehicle_id, entity, skin_id))
            }
            None => None,
        };

        let mut ctx = SpawnContext {
            tuning: &self.tuning,
            visuals: &self.visuals,
            clock: &*self.clock,
            rng: &mut self.rng,
        };
        let owner = shooter.as_ref().map(|(_, entity, skin_id)| OwnerRef {
            entity: *entity,
            skin_id,
        });
        let projectile = Projectile::new(kind, position, direction, owner, &mut ctx)?;

        let projectile_id = self.next_projectile_id;
        self.next_projectile_id = self.next_projectile_id.wrapping_add(1);

        let shape = projectile.shape().shape.key;
        let shooter_id = shooter.as_ref().map(|(vehicle_id, _, _)| *vehicle_id);
        debug!(
            projectile_id,
            ?kind,
            ?shape,
            ?shooter_id,
            "projectile fired"
        );
        if let Some(shooter_id) = shooter_id {
            self.events.push(ProjectileEvent::Fired {
                projectile_id,
                kind,
                shooter_id,
                shape,
            });
        }
        world_setup::spawn_projectile(&mut self.world, projectile_id, projectile);
        Ok(projectile_id)
    }

    /// Fire from a vehicle's anchor.
    pub fn fire(
        &mut self,
        vehicle_id: u32,
        kind: ProjectileKind,
        direction: Vec3,
    ) -> Result<u32, EngineError> {
        let entity = world_setup::find_vehicle(&self.world, vehicle_id)
            .ok_or(EngineError::UnknownVehicle(vehicle_id))?;
        let position =
            world_setup::anchor_of(&self.world, entity).ok_or(EngineError::NoAnchor(vehicle_id))?;
        self.launch(kind, position, direction, Some(vehicle_id))
    }

    /// Current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The tuning projectiles are spawned with.
    pub fn tuning(&self) -> &TuningTable {
        &self.tuning
    }

    /// Number of projectile entities currently in the world.
    pub fn projectile_count(&self) -> usize {
        self.world.query::<&Projectile>().iter().count()
    }

    /// Entity special attacks currently home on (it may have despawned).
    pub fn homing_target(&self) -> Option<Entity> {
        self.homing_target
    }

    /// Remove a vehicle's anchor, as when it is wrecked but not yet cleared.
    #[cfg(test)]
    pub fn hide_vehicle(&mut self, vehicle_id: u32) {
        if let Some(entity) = world_setup::find_vehicle(&self.world, vehicle_id) {
            let _ = self.world.remove_one::<Anchor>(entity);
        }
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command. Commands naming unknown vehicles are dropped.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SpawnVehicle {
                vehicle_id,
                skin_id,
                position,
            } => {
                if world_setup::find_vehicle(&self.world, vehicle_id).is_some() {
                    warn!(vehicle_id, "vehicle id already in use, spawn ignored");
                    return;
                }
                world_setup::spawn_vehicle(&mut self.world, vehicle_id, &skin_id, position);
            }
            PlayerCommand::DespawnVehicle { vehicle_id } => {
                match world_setup::find_vehicle(&self.world, vehicle_id) {
                    Some(entity) => {
                        let _ = self.world.despawn(entity);
                    }
                    None => warn!(vehicle_id, "despawn of unknown vehicle ignored"),
                }
            }
            PlayerCommand::MoveVehicle {
                vehicle_id,
                position,
            } => {
                let Some(entity) = world_setup::find_vehicle(&self.world, vehicle_id) else {
                    warn!(vehicle_id, "move of unknown vehicle ignored");
                    return;
                };
                // Moving also restores a hidden anchor.
                let _ = self.world.insert_one(entity, Anchor { position });
            }
            PlayerCommand::Fire {
                vehicle_id,
                kind,
                direction,
            } => {
                if let Err(err) = self.fire(vehicle_id, kind, direction) {
                    warn!(vehicle_id, ?kind, %err, "fire command dropped");
                }
            }
            PlayerCommand::SetHomingTarget { vehicle_id } => {
                match world_setup::find_vehicle(&self.world, vehicle_id) {
                    Some(entity) => self.homing_target = Some(entity),
                    None => warn!(vehicle_id, "homing target is not a known vehicle"),
                }
            }
            PlayerCommand::ClearHomingTarget => {
                self.homing_target = None;
            }
        }
    }
}
