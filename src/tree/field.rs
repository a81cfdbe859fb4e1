//! Procedural particle field generation
//!
//! Two fixed sets laid out on a cone with golden-angle spacing:
//! ornaments (instanced spheres and cubes) and fairy lights. Static
//! attributes are drawn once at startup and never mutated; only the
//! derived per-frame transforms change.

use rand::Rng;

/// Number of ornament particles (spheres + cubes)
pub const ORNAMENT_COUNT: usize = 2500;

/// Number of fairy-light particles
pub const LIGHT_COUNT: usize = 1500;

/// Ornament cone dimensions
const TREE_HEIGHT: f32 = 9.0;
const MAX_RADIUS: f32 = 3.5;

/// Fairy-light cone is slightly taller and wider than the ornaments
const LIGHT_TREE_HEIGHT: f32 = 9.5;
const LIGHT_MAX_RADIUS: f32 = 3.8;

/// Angular step per ornament, close to the golden angle so the spiral
/// never bands into visible arms.
const ORNAMENT_ANGLE_STEP: f32 = 2.4;

/// Angular step per light (plus a random offset per particle)
const LIGHT_ANGLE_STEP: f32 = 0.5;

/// Warm ornament palette: gold, dark goldenrod, red, dark red, cornsilk
pub const ORNAMENT_PALETTE: [[f32; 3]; 5] = [
    [1.0, 0.843, 0.0],
    [0.722, 0.525, 0.043],
    [1.0, 0.0, 0.0],
    [0.545, 0.0, 0.0],
    [1.0, 0.973, 0.863],
];

/// Warm glow palette for the lights
pub const LIGHT_PALETTE: [[f32; 3]; 4] = [
    [1.0, 0.843, 0.0],
    [1.0, 0.8, 0.0],
    [1.0, 0.267, 0.0],
    [1.0, 1.0, 0.867],
];

/// Ornament mesh category; routed to separate instanced draws
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrnamentKind {
    Sphere,
    Cube,
}

/// Static attributes of one ornament particle
#[derive(Clone, Copy, Debug)]
pub struct Ornament {
    pub angle: f32,
    pub radius: f32,
    /// Height after vertical centering (y - tree_height/2)
    pub base_y: f32,
    pub size: f32,
    pub kind: OrnamentKind,
    pub color: [f32; 3],
    /// Phase multiplier for floating and self-rotation
    pub speed: f32,
}

/// Static attributes of one fairy light
#[derive(Clone, Copy, Debug)]
pub struct FairyLight {
    pub angle: f32,
    pub radius: f32,
    pub base_y: f32,
    pub size: f32,
    pub color: [f32; 3],
    pub speed: f32,
}

/// The full generated scene content, immutable after generation
pub struct ParticleField {
    pub ornaments: Vec<Ornament>,
    pub lights: Vec<FairyLight>,
}

impl ParticleField {
    /// Generate both particle sets.
    ///
    /// Generic over the RNG so tests can seed a `SmallRng` and assert
    /// on exact values; production seeds from the JS clock.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let mut ornaments = Vec::with_capacity(ORNAMENT_COUNT);
        for i in 0..ORNAMENT_COUNT {
            let y = rng.gen::<f32>() * TREE_HEIGHT;
            let radius_at_height = (TREE_HEIGHT - y) * (MAX_RADIUS / TREE_HEIGHT);

            let angle = i as f32 * ORNAMENT_ANGLE_STEP;
            let radius = radius_at_height + (rng.gen::<f32>() - 0.5) * 0.6;

            let size = rng.gen::<f32>() * 0.08 + 0.02;
            let kind = if rng.gen::<f32>() > 0.6 {
                OrnamentKind::Cube
            } else {
                OrnamentKind::Sphere
            };
            let color = ORNAMENT_PALETTE[rng.gen_range(0..ORNAMENT_PALETTE.len())];

            ornaments.push(Ornament {
                angle,
                radius,
                base_y: y - TREE_HEIGHT / 2.0,
                size,
                kind,
                color,
                speed: rng.gen::<f32>(),
            });
        }

        let mut lights = Vec::with_capacity(LIGHT_COUNT);
        for i in 0..LIGHT_COUNT {
            let y = rng.gen::<f32>() * LIGHT_TREE_HEIGHT;
            let radius_at_height = (LIGHT_TREE_HEIGHT - y) * (LIGHT_MAX_RADIUS / LIGHT_TREE_HEIGHT);

            let angle = i as f32 * LIGHT_ANGLE_STEP + rng.gen::<f32>();
            let radius = radius_at_height + (rng.gen::<f32>() - 0.5) * 0.4;

            lights.push(FairyLight {
                angle,
                radius,
                base_y: y - LIGHT_TREE_HEIGHT / 2.0,
                size: rng.gen::<f32>() * 0.04 + 0.01,
                color: LIGHT_PALETTE[rng.gen_range(0..LIGHT_PALETTE.len())],
                speed: rng.gen::<f32>() * 2.0 + 1.0,
            });
        }

        Self { ornaments, lights }
    }

    pub fn sphere_count(&self) -> usize {
        self.ornaments
            .iter()
            .filter(|o| o.kind == OrnamentKind::Sphere)
            .count()
    }

    pub fn cube_count(&self) -> usize {
        self.ornaments.len() - self.sphere_count()
    }
}
