//! Projectile visuals for AUTODUEL.
//!
//! Picks a decorative shape for each projectile from its kind and the
//! firing vehicle's skin. Shapes are plain data; rendering is up to the host.

pub mod catalog;
pub mod registry;
pub mod shape;

pub use autoduel_core as core;
pub use registry::{select_shape, VisualRegistry};
pub use shape::{Material, Primitive, Shape, ShapeNode};
