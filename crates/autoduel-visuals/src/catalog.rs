//! Hand-authored projectile visuals, one per vehicle skin.
//!
//! Every builder has the [`ShapeBuilder`] signature so the registry can
//! store them uniformly. Only the disco ball consumes randomness.

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use rand::{Rng, RngCore};

use autoduel_core::enums::{ShapeKey, Skin};
use autoduel_core::types::look_rotation;

use crate::shape::{Material, Primitive, Shape, ShapeNode};

/// Builds a fresh shape. The RNG is only used for cosmetic scatter.
pub type ShapeBuilder = fn(&mut dyn RngCore) -> Shape;

/// Mirror tiles scattered over the disco ball.
pub const DISCO_TILE_COUNT: usize = 20;

/// Builder for a catalog skin.
pub fn builder_for(skin: Skin) -> ShapeBuilder {
    match skin {
        Skin::Auger => drill,
        Skin::Axel => shock_ring,
        Skin::ClubKid => disco_ball,
        Skin::Firestarter => flame,
        Skin::FlowerPower => flower,
        Skin::Hammerhead => ram,
        Skin::MrGrimm => scythe,
        Skin::Outlaw => taser,
        Skin::Roadkill => remote_bomb,
        Skin::Spectre => ghost_missile,
        Skin::Thumper => sound_wave,
        Skin::Warthog => patriot_missile,
        Skin::SweetTooth => clown_head,
    }
}

/// Machine gun round: small yellow glowing sphere.
pub fn tracer(_rng: &mut dyn RngCore) -> Shape {
    Shape::new(
        ShapeKey::Tracer,
        ShapeNode::mesh(
            Primitive::Sphere { radius: 0.15 },
            Material::glowing(0xffff00, 0x666600, 1.0),
        ),
    )
}

/// Default special attack: translucent cyan orb.
pub fn energy_orb(_rng: &mut dyn RngCore) -> Shape {
    Shape::new(
        ShapeKey::EnergyOrb,
        ShapeNode::mesh(
            Primitive::Sphere { radius: 0.4 },
            Material::self_lit(0x00ffff, 0.5).translucent(0.8),
        ),
    )
}

fn drill(_rng: &mut dyn RngCore) -> Shape {
    let base = ShapeNode::mesh(
        Primitive::Cylinder {
            radius_top: 0.3,
            radius_bottom: 0.3,
            height: 0.6,
        },
        Material::glowing(0xf4a460, 0xa0522d, 0.3),
    );
    let tip = ShapeNode::mesh(
        Primitive::Cone {
            radius: 0.3,
            height: 0.8,
        },
        Material::glowing(0x808080, 0x505050, 0.3).metallic(0.8),
    )
    .at(0.0, 0.7, 0.0)
    .rotated_x(PI);

    Shape::new(
        ShapeKey::Drill,
        ShapeNode::group().with_children([base, tip]),
    )
}

fn shock_ring(_rng: &mut dyn RngCore) -> Shape {
    let ring = ShapeNode::mesh(
        Primitive::Torus {
            radius: 0.5,
            tube: 0.1,
            arc: TAU,
        },
        Material::self_lit(0x00ffff, 0.5).translucent(0.8),
    )
    .rotated_x(PI / 2.0);

    Shape::new(ShapeKey::ShockRing, ring)
}

fn disco_ball(rng: &mut dyn RngCore) -> Shape {
    const RADIUS: f32 = 0.4;

    let tile_material = Material::self_lit(0xffffff, 1.0).double_sided();
    let tiles = (0..DISCO_TILE_COUNT).map(|_| {
        let phi = rng.gen::<f32>() * TAU;
        let theta = rng.gen::<f32>() * PI;
        let position = Vec3::new(
            RADIUS * theta.sin() * phi.cos(),
            RADIUS * theta.sin() * phi.sin(),
            RADIUS * theta.cos(),
        );
        let tile = ShapeNode::mesh(
            Primitive::Plane {
                width: 0.1,
                height: 0.1,
            },
            tile_material,
        )
        .at(position.x, position.y, position.z);
        // Face the center so the mirror side points outward.
        match look_rotation(-position) {
            Some(rotation) => tile.rotated(rotation),
            None => tile,
        }
    });

    let ball = ShapeNode::mesh(
        Primitive::Sphere { radius: RADIUS },
        Material::glowing(0xc0c0c0, 0x808080, 0.7)
            .metallic(1.0)
            .rough(0.2),
    )
    .with_children(tiles.collect::<Vec<_>>());

    Shape::new(ShapeKey::DiscoBall, ball)
}

fn flame(_rng: &mut dyn RngCore) -> Shape {
    let cone = ShapeNode::mesh(
        Primitive::Cone {
            radius: 0.3,
            height: 0.8,
        },
        Material::self_lit(0xff4500, 0.7).translucent(0.9),
    )
    .rotated_x(PI);

    Shape::new(ShapeKey::Flame, cone)
}

fn flower(_rng: &mut dyn RngCore) -> Shape {
    const PETALS: usize = 8;

    let petal_material = Material::self_lit(0xff69b4, 0.3).double_sided();
    let petals = (0..PETALS).map(|i| {
        let angle = i as f32 / PETALS as f32 * TAU;
        ShapeNode::mesh(Primitive::Circle { radius: 0.25 }, petal_material)
            .at(angle.cos() * 0.3, 0.0, angle.sin() * 0.3)
            .rotated_y(PI / 2.0 - angle)
    });
    let center = ShapeNode::mesh(
        Primitive::Sphere { radius: 0.2 },
        Material::self_lit(0xffff00, 0.3),
    );

    Shape::new(
        ShapeKey::Flower,
        ShapeNode::group()
            .with_children(petals.collect::<Vec<_>>())
            .with_child(center),
    )
}

fn ram(_rng: &mut dyn RngCore) -> Shape {
    let spike_material = Material::glowing(0x888888, 0x666666, 0.3).metallic(0.8);
    let spikes = (0..4).map(|i| {
        ShapeNode::mesh(
            Primitive::Cone {
                radius: 0.05,
                height: 0.2,
            },
            spike_material,
        )
        .at(0.4, 0.0, 0.0)
        .rotated_z(PI / 2.0)
        .rotated_y(i as f32 / 4.0 * TAU)
    });

    let body = ShapeNode::mesh(
        Primitive::Box {
            width: 0.7,
            height: 0.4,
            depth: 0.4,
        },
        Material::glowing(0x555555, 0x333333, 0.3).metallic(0.8),
    )
    .with_children(spikes.collect::<Vec<_>>());

    Shape::new(ShapeKey::Ram, body)
}

fn scythe(_rng: &mut dyn RngCore) -> Shape {
    let handle = ShapeNode::mesh(
        Primitive::Cylinder {
            radius_top: 0.05,
            radius_bottom: 0.05,
            height: 0.8,
        },
        Material::self_lit(0x4b0082, 0.3),
    )
    .rotated_x(PI / 2.0);
    let blade = ShapeNode::mesh(
        Primitive::Torus {
            radius: 0.3,
            tube: 0.05,
            arc: PI,
        },
        Material::self_lit(0xc0c0c0, 0.3).metallic(0.8),
    )
    .at(0.0, 0.0, -0.4)
    .rotated_x(PI / 2.0);

    Shape::new(
        ShapeKey::Scythe,
        ShapeNode::group().with_children([handle, blade]),
    )
}

fn taser(_rng: &mut dyn RngCore) -> Shape {
    let body = ShapeNode::mesh(
        Primitive::Box {
            width: 0.3,
            height: 0.15,
            depth: 0.5,
        },
        Material::glowing(0x000080, 0x000040, 0.3),
    );
    let prong = ShapeNode::mesh(
        Primitive::Cylinder {
            radius_top: 0.02,
            radius_bottom: 0.02,
            height: 0.2,
        },
        Material::self_lit(0xffff00, 0.7),
    );

    Shape::new(
        ShapeKey::Taser,
        ShapeNode::group().with_children([
            body,
            prong.clone().at(0.1, 0.0, 0.3),
            prong.at(-0.1, 0.0, 0.3),
        ]),
    )
}

fn remote_bomb(_rng: &mut dyn RngCore) -> Shape {
    let body = ShapeNode::mesh(
        Primitive::Sphere { radius: 0.3 },
        Material::glowing(0x202020, 0x101010, 0.3).metallic(0.8),
    );
    let light = ShapeNode::mesh(
        Primitive::Sphere { radius: 0.05 },
        Material::self_lit(0xff0000, 0.7),
    )
    .at(0.0, 0.25, 0.0);

    Shape::new(
        ShapeKey::RemoteBomb,
        ShapeNode::group().with_children([body, light]),
    )
}

fn ghost_missile(_rng: &mut dyn RngCore) -> Shape {
    let body = ShapeNode::mesh(
        Primitive::Cylinder {
            radius_top: 0.15,
            radius_bottom: 0.15,
            height: 0.6,
        },
        Material::self_lit(0xffffff, 0.3).translucent(0.7),
    )
    .rotated_x(PI / 2.0);
    let tip = ShapeNode::mesh(
        Primitive::Cone {
            radius: 0.15,
            height: 0.3,
        },
        Material::self_lit(0xadd8e6, 0.3).translucent(0.7),
    )
    .at(0.0, 0.0, 0.45)
    .rotated_x(PI / 2.0);

    Shape::new(
        ShapeKey::GhostMissile,
        ShapeNode::group().with_children([body, tip]),
    )
}

fn sound_wave(_rng: &mut dyn RngCore) -> Shape {
    let rings = (0..3).map(|i| {
        let i = i as f32;
        ShapeNode::mesh(
            Primitive::Torus {
                radius: 0.2 + i * 0.15,
                tube: 0.03,
                arc: TAU,
            },
            Material::self_lit(0x8a2be2, 0.5).translucent(1.0 - i * 0.2),
        )
        .at(0.0, 0.0, i * 0.1)
        .rotated_x(PI / 2.0)
    });

    Shape::new(
        ShapeKey::SoundWave,
        ShapeNode::group().with_children(rings.collect::<Vec<_>>()),
    )
}

fn patriot_missile(_rng: &mut dyn RngCore) -> Shape {
    let olive = Material::self_lit(0x556b2f, 0.3);
    let fins = (0..4).map(|i| {
        let angle = i as f32 / 4.0 * TAU;
        // Slide each fin outward along its own rotated x axis.
        let out = glam::Quat::from_rotation_y(angle) * Vec3::new(0.15, 0.0, 0.0);
        ShapeNode::mesh(
            Primitive::Box {
                width: 0.05,
                height: 0.15,
                depth: 0.15,
            },
            olive,
        )
        .at(out.x, out.y, out.z - 0.2)
        .rotated_y(angle)
    });

    let body = ShapeNode::mesh(
        Primitive::Cylinder {
            radius_top: 0.1,
            radius_bottom: 0.1,
            height: 0.7,
        },
        olive,
    )
    .rotated_x(PI / 2.0)
    .with_children(fins.collect::<Vec<_>>());
    let tip = ShapeNode::mesh(
        Primitive::Cone {
            radius: 0.1,
            height: 0.3,
        },
        Material::self_lit(0x8b0000, 0.3),
    )
    .at(0.0, 0.0, 0.5)
    .rotated_x(PI / 2.0);

    Shape::new(
        ShapeKey::PatriotMissile,
        ShapeNode::group().with_children([body, tip]),
    )
}

fn clown_head(_rng: &mut dyn RngCore) -> Shape {
    let white = Material::plain(0xffffff);
    let red_glow = Material::self_lit(0xff0000, 0.8);

    let head = ShapeNode::mesh(Primitive::Sphere { radius: 0.4 }, Material::plain(0x2a2a7d))
        .scaled(Vec3::new(1.0, 1.2, 1.0));
    let face = ShapeNode::mesh(Primitive::Sphere { radius: 0.41 }, white)
        .at(0.0, 0.0, -0.05)
        .scaled(Vec3::new(0.8, 0.7, 0.5))
        .rotated_y(PI);
    let eye = ShapeNode::mesh(Primitive::Sphere { radius: 0.08 }, red_glow);
    let mouth = ShapeNode::mesh(
        Primitive::Box {
            width: 0.25,
            height: 0.1,
            depth: 0.15,
        },
        Material::plain(0xff0000),
    )
    .at(0.0, -0.15, -0.33);
    let teeth = ShapeNode::mesh(
        Primitive::Box {
            width: 0.22,
            height: 0.05,
            depth: 0.16,
        },
        white,
    )
    .at(0.0, -0.14, -0.33);
    let fangs = (0..5).map(|i| {
        ShapeNode::mesh(
            Primitive::Cone {
                radius: 0.02,
                height: 0.05,
            },
            white,
        )
        .at(-0.08 + i as f32 * 0.04, -0.19, -0.33)
        .rotated_x(PI)
    });

    // Three nested flame cones, hottest innermost.
    let flames = [
        (0xff5500, 0.5, 0.9, 0.5, 1.1, 0.5),
        (0xff9500, 0.7, 0.9, 0.4, 1.2, 0.55),
        (0xffcc00, 0.9, 0.8, 0.3, 1.4, 0.6),
    ]
    .map(|(color, intensity, opacity, radius, height, lift)| {
        ShapeNode::mesh(
            Primitive::Cone { radius, height },
            Material::self_lit(color, intensity).translucent(opacity),
        )
        .at(0.0, lift, 0.0)
        .rotated_x(PI)
    });

    Shape::new(
        ShapeKey::ClownHead,
        ShapeNode::group()
            .with_children([
                head,
                face,
                eye.clone().at(-0.15, 0.08, -0.32),
                eye.at(0.15, 0.08, -0.32),
                mouth,
                teeth,
            ])
            .with_children(fangs.collect::<Vec<_>>())
            .with_children(flames),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_disco_tiles_sit_on_ball_surface() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let shape = disco_ball(&mut rng);
        assert_eq!(shape.root.children.len(), DISCO_TILE_COUNT);
        for tile in &shape.root.children {
            assert!((tile.offset.length() - 0.4).abs() < 1e-4);
        }
    }

    #[test]
    fn test_disco_ball_reproducible_per_seed() {
        let a = disco_ball(&mut ChaCha8Rng::seed_from_u64(1));
        let b = disco_ball(&mut ChaCha8Rng::seed_from_u64(1));
        let c = disco_ball(&mut ChaCha8Rng::seed_from_u64(2));
        assert_eq!(a, b);
        assert_ne!(a, c, "scatter should depend on the seed");
        assert_eq!(a.key, c.key);
    }

    #[test]
    fn test_every_skin_builder_has_meshes() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        for skin in Skin::ALL {
            let shape = builder_for(skin)(&mut rng);
            assert!(
                shape.root.mesh_count() > 0,
                "{skin:?} built an empty shape"
            );
            assert!(shape.root.is_emissive(), "{skin:?} should glow");
        }
    }

    #[test]
    fn test_tracer_is_small_and_emissive() {
        let shape = tracer(&mut ChaCha8Rng::seed_from_u64(0));
        assert_eq!(shape.key, ShapeKey::Tracer);
        match shape.root.mesh {
            Some((Primitive::Sphere { radius }, material)) => {
                assert!(radius < 0.2);
                assert_eq!(material.color, 0xffff00);
            }
            other => panic!("tracer should be a sphere, got {other:?}"),
        }
    }
}
