//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Projectile category fired by a vehicle weapon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Machine gun round: fast, cheap, short-lived, flies straight.
    #[default]
    #[serde(rename = "machineGun")]
    Basic,
    /// Special attack: slow, heavy, longer-lived, homes on a target.
    #[serde(rename = "specialAttack")]
    Special,
}

impl ProjectileKind {
    /// Whether this kind steers toward a homing target.
    pub fn is_homing(self) -> bool {
        matches!(self, ProjectileKind::Special)
    }
}

/// Vehicle skin (character identity) from the vehicle catalog.
///
/// Vehicles carry their skin as a free-form string id; this enum names
/// the ids the catalog knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Skin {
    Auger,
    Axel,
    ClubKid,
    Firestarter,
    FlowerPower,
    Hammerhead,
    MrGrimm,
    Outlaw,
    Roadkill,
    Spectre,
    Thumper,
    Warthog,
    SweetTooth,
}

impl Skin {
    /// Every skin in the catalog.
    pub const ALL: [Skin; 13] = [
        Skin::Auger,
        Skin::Axel,
        Skin::ClubKid,
        Skin::Firestarter,
        Skin::FlowerPower,
        Skin::Hammerhead,
        Skin::MrGrimm,
        Skin::Outlaw,
        Skin::Roadkill,
        Skin::Spectre,
        Skin::Thumper,
        Skin::Warthog,
        Skin::SweetTooth,
    ];

    /// Catalog id string, as carried by vehicles.
    pub fn as_str(self) -> &'static str {
        match self {
            Skin::Auger => "auger",
            Skin::Axel => "axel",
            Skin::ClubKid => "clubKid",
            Skin::Firestarter => "firestarter",
            Skin::FlowerPower => "flowerPower",
            Skin::Hammerhead => "hammerhead",
            Skin::MrGrimm => "mrGrimm",
            Skin::Outlaw => "outlaw",
            Skin::Roadkill => "roadkill",
            Skin::Spectre => "spectre",
            Skin::Thumper => "thumper",
            Skin::Warthog => "warthog",
            Skin::SweetTooth => "sweetTooth",
        }
    }

    /// Look up a skin by catalog id. Ids are case-sensitive.
    pub fn from_id(id: &str) -> Option<Skin> {
        Skin::ALL.into_iter().find(|skin| skin.as_str() == id)
    }
}

/// Stable identity of a projectile visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKey {
    /// Small emissive sphere shared by all machine gun rounds.
    Tracer,
    /// Default special attack orb (no owner, or unknown skin).
    EnergyOrb,
    Drill,
    ShockRing,
    DiscoBall,
    Flame,
    Flower,
    Ram,
    Scythe,
    Taser,
    RemoteBomb,
    GhostMissile,
    SoundWave,
    PatriotMissile,
    ClownHead,
}

/// Why a projectile stopped flying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Termination {
    /// Wall-clock lifetime ran out.
    Expired,
    /// Displacement this tick was effectively zero.
    Stalled,
    /// Traveled farther than the weapon's range.
    OutOfRange,
}
