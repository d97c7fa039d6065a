//! Renderer-agnostic shape descriptions.
//!
//! A [`Shape`] is a small tree of primitives with materials and local
//! transforms. Any scene graph can walk it to build real meshes.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use autoduel_core::enums::ShapeKey;

/// Geometric primitive, dimensions in local units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    Sphere {
        radius: f32,
    },
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
    },
    Cone {
        radius: f32,
        height: f32,
    },
    /// `arc` is the swept angle in radians (TAU for a full ring).
    Torus {
        radius: f32,
        tube: f32,
        arc: f32,
    },
    Circle {
        radius: f32,
    },
    Plane {
        width: f32,
        height: f32,
    },
}

/// Surface appearance. Colors are 0xRRGGBB.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub color: u32,
    pub emissive: u32,
    pub emissive_intensity: f32,
    pub opacity: f32,
    pub metalness: f32,
    pub roughness: f32,
    pub double_sided: bool,
}

impl Material {
    /// Opaque matte material glowing in `emissive`.
    pub const fn glowing(color: u32, emissive: u32, emissive_intensity: f32) -> Self {
        Self {
            color,
            emissive,
            emissive_intensity,
            opacity: 1.0,
            metalness: 0.0,
            roughness: 1.0,
            double_sided: false,
        }
    }

    /// Material glowing in its own color.
    pub const fn self_lit(color: u32, emissive_intensity: f32) -> Self {
        Self::glowing(color, color, emissive_intensity)
    }

    /// Non-emissive material.
    pub const fn plain(color: u32) -> Self {
        Self::glowing(color, 0x000000, 0.0)
    }

    pub const fn translucent(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub const fn metallic(mut self, metalness: f32) -> Self {
        self.metalness = metalness;
        self
    }

    pub const fn rough(mut self, roughness: f32) -> Self {
        self.roughness = roughness;
        self
    }

    pub const fn double_sided(mut self) -> Self {
        self.double_sided = true;
        self
    }

    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

/// One node of a shape tree. A node without a mesh is a pure group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeNode {
    pub mesh: Option<(Primitive, Material)>,
    pub offset: Vec3,
    pub rotation: Quat,
    /// Per-axis scale (the sweet tooth head is stretched vertically).
    pub scale: Vec3,
    pub children: Vec<ShapeNode>,
}

impl Default for ShapeNode {
    fn default() -> Self {
        Self {
            mesh: None,
            offset: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            children: Vec::new(),
        }
    }
}

impl ShapeNode {
    pub fn group() -> Self {
        Self::default()
    }

    pub fn mesh(primitive: Primitive, material: Material) -> Self {
        Self {
            mesh: Some((primitive, material)),
            ..Self::default()
        }
    }

    pub fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.offset = Vec3::new(x, y, z);
        self
    }

    pub fn rotated(mut self, rotation: Quat) -> Self {
        self.rotation = rotation * self.rotation;
        self
    }

    pub fn rotated_x(self, angle: f32) -> Self {
        self.rotated(Quat::from_rotation_x(angle))
    }

    pub fn rotated_y(self, angle: f32) -> Self {
        self.rotated(Quat::from_rotation_y(angle))
    }

    pub fn rotated_z(self, angle: f32) -> Self {
        self.rotated(Quat::from_rotation_z(angle))
    }

    pub fn scaled(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_child(mut self, child: ShapeNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = ShapeNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Number of mesh nodes in this subtree.
    pub fn mesh_count(&self) -> usize {
        usize::from(self.mesh.is_some())
            + self.children.iter().map(ShapeNode::mesh_count).sum::<usize>()
    }

    /// Whether any mesh in this subtree glows.
    pub fn is_emissive(&self) -> bool {
        self.mesh
            .as_ref()
            .is_some_and(|(_, m)| m.emissive != 0 && m.emissive_intensity > 0.0)
            || self.children.iter().any(ShapeNode::is_emissive)
    }
}

/// A complete projectile visual with its stable identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub key: ShapeKey,
    pub root: ShapeNode,
}

impl Shape {
    pub fn new(key: ShapeKey, root: ShapeNode) -> Self {
        Self { key, root }
    }
}
