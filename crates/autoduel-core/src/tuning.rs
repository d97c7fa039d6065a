//! Per-kind weapon tuning, with JSON overrides.
//!
//! Defaults come from [`crate::constants`]. A tuning file may override
//! either kind; an omitted kind keeps its built-in tuning.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::enums::ProjectileKind;

/// Flight parameters fixed on a projectile at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponTuning {
    /// Units per tick-basis frame.
    pub speed: f32,
    pub damage: u32,
    /// Wall-clock lifetime in milliseconds.
    pub lifetime_ms: u64,
    /// Maximum distance from the spawn point.
    pub max_distance: f32,
}

impl WeaponTuning {
    pub const BASIC: WeaponTuning = WeaponTuning {
        speed: BASIC_SPEED,
        damage: BASIC_DAMAGE,
        lifetime_ms: BASIC_LIFETIME_MS,
        max_distance: BASIC_MAX_DISTANCE,
    };

    pub const SPECIAL: WeaponTuning = WeaponTuning {
        speed: SPECIAL_SPEED,
        damage: SPECIAL_DAMAGE,
        lifetime_ms: SPECIAL_LIFETIME_MS,
        max_distance: SPECIAL_MAX_DISTANCE,
    };

    /// Built-in tuning for a projectile kind.
    pub fn for_kind(kind: ProjectileKind) -> WeaponTuning {
        match kind {
            ProjectileKind::Basic => WeaponTuning::BASIC,
            ProjectileKind::Special => WeaponTuning::SPECIAL,
        }
    }

    fn validate(&self, kind: ProjectileKind) -> Result<(), TuningError> {
        let reason = if !self.speed.is_finite() || self.speed <= 0.0 {
            "speed must be positive and finite"
        } else if !self.max_distance.is_finite() || self.max_distance <= 0.0 {
            "max_distance must be positive and finite"
        } else if self.lifetime_ms == 0 {
            "lifetime_ms must be non-zero"
        } else {
            return Ok(());
        };
        Err(TuningError::Invalid { kind, reason })
    }
}

/// Tuning for every projectile kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningTable {
    pub basic: WeaponTuning,
    pub special: WeaponTuning,
}

impl Default for TuningTable {
    fn default() -> Self {
        Self {
            basic: WeaponTuning::BASIC,
            special: WeaponTuning::SPECIAL,
        }
    }
}

impl TuningTable {
    /// Tuning for a projectile kind.
    pub fn get(&self, kind: ProjectileKind) -> WeaponTuning {
        match kind {
            ProjectileKind::Basic => self.basic,
            ProjectileKind::Special => self.special,
        }
    }

    /// Parse and validate a JSON tuning document.
    pub fn from_json_str(json: &str) -> Result<Self, TuningError> {
        let table: TuningTable = serde_json::from_str(json)?;
        table.basic.validate(ProjectileKind::Basic)?;
        table.special.validate(ProjectileKind::Special)?;
        Ok(table)
    }

    /// Load a JSON tuning file.
    pub fn load(path: &Path) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed tuning json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid {kind:?} tuning: {reason}")]
    Invalid {
        kind: ProjectileKind,
        reason: &'static str,
    },
}
