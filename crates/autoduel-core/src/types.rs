//! Fundamental geometric and simulation types.

use glam::{Mat3, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// World-space placement of a visual: translation, rotation, uniform scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: 1.0,
        }
    }
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Rotate so local +Z points along `direction`, keeping +Y as close to
    /// world up as possible. A zero direction leaves the rotation unchanged.
    pub fn look_along(&mut self, direction: Vec3) {
        if let Some(rotation) = look_rotation(direction) {
            self.rotation = rotation;
        }
    }

    /// Local +Z axis in world space.
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }
}

/// Rotation taking local +Z onto `direction` with +Y up.
///
/// Falls back to +Z as the up reference when `direction` is vertical.
pub fn look_rotation(direction: Vec3) -> Option<Quat> {
    let z = direction.try_normalize()?;
    let mut x = Vec3::Y.cross(z);
    if x.length_squared() < 1e-8 {
        x = Vec3::Z.cross(z);
    }
    let x = x.normalize();
    let y = z.cross(x);
    Some(Quat::from_mat3(&Mat3::from_cols(x, y, z)).normalize())
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Accumulated tick deltas in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `delta` seconds.
    pub fn advance(&mut self, delta: f32) {
        self.tick += 1;
        self.elapsed_secs += f64::from(delta);
    }
}
