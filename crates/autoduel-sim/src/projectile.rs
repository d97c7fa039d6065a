//! Projectile lifecycle: spawn-time state and the per-tick flight rule.
//!
//! A projectile knows nothing about the collection it lives in. The host
//! calls [`Projectile::update`] once per tick and drops the projectile the
//! first time it returns `false`.

use glam::Vec3;
use hecs::Entity;
use rand::RngCore;
use thiserror::Error;

use autoduel_core::constants::{HOMING_BLEND, MIN_MOVEMENT_SQ, SHAPE_SCALE, TICK_BASIS_HZ};
use autoduel_core::enums::{ProjectileKind, Termination};
use autoduel_core::tuning::{TuningTable, WeaponTuning};
use autoduel_core::types::Transform;
use autoduel_visuals::{Shape, VisualRegistry};

use crate::clock::Clock;
use crate::homing;

/// The firing vehicle, as seen at spawn time.
#[derive(Debug, Clone, Copy)]
pub struct OwnerRef<'a> {
    /// Lookup key only; the projectile never keeps the owner alive.
    pub entity: Entity,
    pub skin_id: &'a str,
}

/// Shared services needed to spawn a projectile.
pub struct SpawnContext<'a> {
    pub tuning: &'a TuningTable,
    pub visuals: &'a VisualRegistry,
    pub clock: &'a dyn Clock,
    pub rng: &'a mut dyn RngCore,
}

/// A projectile's visual and where it currently is.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeInstance {
    pub shape: Shape,
    pub transform: Transform,
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ProjectileError {
    #[error("projectile direction must be non-zero and finite, got {0}")]
    DegenerateDirection(Vec3),
    #[error("projectile position must be finite, got {0}")]
    NonFinitePosition(Vec3),
}

#[derive(Debug, Clone)]
pub struct Projectile {
    kind: ProjectileKind,
    owner: Option<Entity>,
    tuning: WeaponTuning,
    spawn_time_ms: u64,
    start_position: Vec3,
    /// Always unit length.
    direction: Vec3,
    shape: ShapeInstance,
    termination: Option<Termination>,
}

impl Projectile {
    /// Fire a projectile: look up tuning, pick the visual for the owner's
    /// skin, and stamp the spawn time.
    pub fn new(
        kind: ProjectileKind,
        position: Vec3,
        direction: Vec3,
        owner: Option<OwnerRef<'_>>,
        ctx: &mut SpawnContext<'_>,
    ) -> Result<Self, ProjectileError> {
        // Validate before building the visual so a rejected shot draws nothing from the rng.
        validate(position, direction)?;
        let shape = ctx
            .visuals
            .select(kind, owner.map(|o| o.skin_id), &mut *ctx.rng);
        Self::with_shape(
            kind,
            position,
            direction,
            owner.map(|o| o.entity),
            ctx.tuning.get(kind),
            shape,
            ctx.clock.now_ms(),
        )
    }

    /// Build a projectile around an already selected visual.
    pub fn with_shape(
        kind: ProjectileKind,
        position: Vec3,
        direction: Vec3,
        owner: Option<Entity>,
        tuning: WeaponTuning,
        shape: Shape,
        spawn_time_ms: u64,
    ) -> Result<Self, ProjectileError> {
        let direction = validate(position, direction)?;

        let mut transform = Transform::from_position(position);
        transform.scale = SHAPE_SCALE;
        transform.look_along(direction);

        Ok(Self {
            kind,
            owner,
            tuning,
            spawn_time_ms,
            start_position: position,
            direction,
            shape: ShapeInstance { shape, transform },
            termination: None,
        })
    }

    /// Advance one tick. Returns `false` once the projectile is done.
    ///
    /// `delta` is in seconds. `homing_target` is the target's anchor, if
    /// there is a live one; only special attacks use it.
    pub fn update(&mut self, delta: f32, homing_target: Option<Vec3>, clock: &dyn Clock) -> bool {
        if self.termination.is_some() {
            return false;
        }

        if self.kind.is_homing() {
            if let Some(target) = homing_target {
                self.direction =
                    homing::steer_toward(self.direction, self.position(), target, HOMING_BLEND);
                self.shape.transform.look_along(self.direction);
            }
        }

        let movement = self.direction * (self.tuning.speed * delta * TICK_BASIS_HZ);
        self.shape.transform.position += movement;

        self.termination = self.check_termination(movement, clock.now_ms());
        self.termination.is_none()
    }

    /// First end-of-life rule that applies, in priority order.
    fn check_termination(&self, movement: Vec3, now_ms: u64) -> Option<Termination> {
        if now_ms.saturating_sub(self.spawn_time_ms) >= self.tuning.lifetime_ms {
            Some(Termination::Expired)
        } else if movement.length_squared() < MIN_MOVEMENT_SQ {
            Some(Termination::Stalled)
        } else if self.distance_traveled() > self.tuning.max_distance {
            Some(Termination::OutOfRange)
        } else {
            None
        }
    }

    pub fn kind(&self) -> ProjectileKind {
        self.kind
    }

    pub fn owner(&self) -> Option<Entity> {
        self.owner
    }

    pub fn tuning(&self) -> WeaponTuning {
        self.tuning
    }

    pub fn damage(&self) -> u32 {
        self.tuning.damage
    }

    pub fn spawn_time_ms(&self) -> u64 {
        self.spawn_time_ms
    }

    pub fn start_position(&self) -> Vec3 {
        self.start_position
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn position(&self) -> Vec3 {
        self.shape.transform.position
    }

    /// Visual handle for the renderer.
    pub fn shape(&self) -> &ShapeInstance {
        &self.shape
    }

    pub fn distance_traveled(&self) -> f32 {
        self.start_position.distance(self.position())
    }

    pub fn age_ms(&self, clock: &dyn Clock) -> u64 {
        clock.now_ms().saturating_sub(self.spawn_time_ms)
    }

    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    pub fn is_alive(&self) -> bool {
        self.termination.is_none()
    }
}

/// Check spawn inputs and return the unit direction.
fn validate(position: Vec3, direction: Vec3) -> Result<Vec3, ProjectileError> {
    if !position.is_finite() {
        return Err(ProjectileError::NonFinitePosition(position));
    }
    if !direction.is_finite() {
        return Err(ProjectileError::DegenerateDirection(direction));
    }
    direction
        .try_normalize()
        .ok_or(ProjectileError::DegenerateDirection(direction))
}
