//! Homing guidance for special attacks.
//!
//! Pure pursuit with a lagged heading: each tick the heading moves a fixed
//! fraction of the way toward the line of sight, then is re-normalized.
//! The turn per tick shrinks as the heading converges, so there is no
//! separate turn-rate clamp.

use glam::Vec3;

/// Blend `direction` toward the line of sight from `from` to `target`.
///
/// Returns the new unit heading. Falls back to the current heading when the
/// target sits on the projectile or the blend cancels out (target exactly
/// behind with `blend == 0.5`).
pub fn steer_toward(direction: Vec3, from: Vec3, target: Vec3, blend: f32) -> Vec3 {
    let Some(line_of_sight) = (target - from).try_normalize() else {
        return direction;
    };
    direction
        .lerp(line_of_sight, blend)
        .try_normalize()
        .unwrap_or(direction)
}

/// Angle in radians between the heading and the line of sight.
pub fn off_boresight(direction: Vec3, from: Vec3, target: Vec3) -> f32 {
    match (target - from).try_normalize() {
        Some(los) => direction.angle_between(los),
        None => 0.0,
    }
}
