//! Skin-keyed registration table for projectile visuals.
//!
//! Selection is total: every `(kind, skin)` pair resolves to either a
//! registered shape or the default orb, never an error.

use std::collections::HashMap;
use std::sync::OnceLock;

use rand::RngCore;

use autoduel_core::enums::{ProjectileKind, Skin};

use crate::catalog::{self, ShapeBuilder};
use crate::shape::Shape;

/// Maps skin ids to shape builders, with a default for everything else.
#[derive(Clone)]
pub struct VisualRegistry {
    tracer: ShapeBuilder,
    fallback: ShapeBuilder,
    skins: HashMap<String, ShapeBuilder>,
}

impl Default for VisualRegistry {
    /// Registry preloaded with the full skin catalog.
    fn default() -> Self {
        let mut registry = Self::empty();
        for skin in Skin::ALL {
            registry.register(skin.as_str(), catalog::builder_for(skin));
        }
        registry
    }
}

impl VisualRegistry {
    /// Registry with only the tracer and default orb.
    pub fn empty() -> Self {
        Self {
            tracer: catalog::tracer,
            fallback: catalog::energy_orb,
            skins: HashMap::new(),
        }
    }

    /// Add or replace the special attack visual for a skin id.
    pub fn register(&mut self, skin_id: impl Into<String>, builder: ShapeBuilder) {
        self.skins.insert(skin_id.into(), builder);
    }

    /// Replace the default special attack visual.
    pub fn set_fallback(&mut self, builder: ShapeBuilder) {
        self.fallback = builder;
    }

    pub fn is_registered(&self, skin_id: &str) -> bool {
        self.skins.contains_key(skin_id)
    }

    /// Builder that [`select`](Self::select) would invoke.
    pub fn resolve(&self, kind: ProjectileKind, owner_skin: Option<&str>) -> ShapeBuilder {
        match kind {
            ProjectileKind::Basic => self.tracer,
            ProjectileKind::Special => owner_skin
                .and_then(|skin| self.skins.get(skin))
                .copied()
                .unwrap_or(self.fallback),
        }
    }

    /// Build the visual for a projectile of `kind` fired by a vehicle with
    /// `owner_skin` (or no owner).
    pub fn select(
        &self,
        kind: ProjectileKind,
        owner_skin: Option<&str>,
        rng: &mut dyn RngCore,
    ) -> Shape {
        self.resolve(kind, owner_skin)(rng)
    }
}

/// Select a visual from the built-in catalog.
pub fn select_shape(
    kind: ProjectileKind,
    owner_skin: Option<&str>,
    rng: &mut dyn RngCore,
) -> Shape {
    static CATALOG: OnceLock<VisualRegistry> = OnceLock::new();
    CATALOG
        .get_or_init(VisualRegistry::default)
        .select(kind, owner_skin, rng)
}
