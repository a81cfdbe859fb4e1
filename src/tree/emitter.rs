//! Instance transform emission
//!
//! Maps the particle field plus blended animation parameters into flat
//! per-instance transforms for the external renderer, one full rewrite
//! per frame. Buffers are owned here and reused across frames; callers
//! only ever see them as slices.

use bytemuck::{Pod, Zeroable};

use super::animation::AnimationState;
use super::field::{OrnamentKind, ParticleField};

/// Ornament color boost matching the renderer's emissive look
const COLOR_BOOST: f32 = 1.5;

/// Below this expansion the ornaments visibly shrink toward zero so
/// the tight-fist cluster never z-fights.
const ORNAMENT_SHRINK_BELOW: f32 = 0.2;

/// Below this expansion the lights vanish outright
const LIGHT_CUTOFF: f32 = 0.1;

/// One per-instance transform (28 bytes, castable to [f32; 7])
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, Pod, Zeroable)]
pub struct Instance {
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    pub scale: f32,
}

impl Instance {
    /// Floats per instance in the flat export
    pub const STRIDE: usize = 7;
}

/// Uniform transform of the photo reveal group
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RevealTransform {
    pub scale: f32,
    pub opacity: f32,
}

/// Reusable per-frame output buffers, one Vec per render group.
pub struct InstanceBuffers {
    pub spheres: Vec<Instance>,
    pub cubes: Vec<Instance>,
    pub lights: Vec<Instance>,
    pub reveal: RevealTransform,
}

impl InstanceBuffers {
    pub fn new(field: &ParticleField) -> Self {
        Self {
            spheres: Vec::with_capacity(field.sphere_count()),
            cubes: Vec::with_capacity(field.cube_count()),
            lights: Vec::with_capacity(field.lights.len()),
            reveal: RevealTransform::default(),
        }
    }

    /// Recompute every instance transform for elapsed time `time`
    /// (seconds) under the current animation parameters.
    pub fn emit(&mut self, field: &ParticleField, anim: &AnimationState, time: f32) {
        let exp = anim.expansion;

        self.spheres.clear();
        self.cubes.clear();
        for (i, o) in field.ornaments.iter().enumerate() {
            let current_r = o.radius * exp;
            // Compress height first so low expansion reads as a
            // cluster, not a column
            let current_y = o.base_y * if exp < 0.5 { 0.3 + exp } else { 1.0 };
            let float_y = (time * o.speed + i as f32 * 0.05).sin() * 0.1 * exp;

            let scale_factor = if exp < ORNAMENT_SHRINK_BELOW { exp * 5.0 } else { 1.0 };

            let instance = Instance {
                position: [
                    o.angle.cos() * current_r,
                    current_y + float_y,
                    o.angle.sin() * current_r,
                ],
                rotation: [time * 0.5 * o.speed, time * 0.3 * o.speed, 0.0],
                scale: o.size * scale_factor,
            };
            match o.kind {
                OrnamentKind::Sphere => self.spheres.push(instance),
                OrnamentKind::Cube => self.cubes.push(instance),
            }
        }

        self.lights.clear();
        for (i, l) in field.lights.iter().enumerate() {
            // Lights scatter slightly further than ornaments
            let current_r = l.radius * exp * 1.1;
            let current_y = l.base_y * if exp < 0.5 { 0.4 + exp } else { 1.0 };

            let orbit = l.angle + time * 0.1;
            let twinkle = (time * l.speed * 3.0 + i as f32).sin() * 0.3 + 0.7;
            let visible = if exp < LIGHT_CUTOFF { 0.0 } else { 1.0 };

            self.lights.push(Instance {
                position: [
                    orbit.cos() * current_r,
                    current_y + (time * l.speed).cos() * 0.1,
                    orbit.sin() * current_r,
                ],
                rotation: [0.0, 0.0, 0.0],
                scale: l.size * twinkle * visible,
            });
        }

        self.reveal = RevealTransform {
            scale: anim.pinch_reveal,
            opacity: anim.pinch_reveal,
        };
    }

    pub fn spheres_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.spheres)
    }

    pub fn cubes_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.cubes)
    }

    pub fn lights_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.lights)
    }
}

/// Static color buffer for one ornament group (3 floats per instance),
/// pre-boosted for the emissive material.
pub fn ornament_colors(field: &ParticleField, kind: OrnamentKind) -> Vec<f32> {
    let mut out = Vec::new();
    for o in field.ornaments.iter().filter(|o| o.kind == kind) {
        out.extend(o.color.iter().map(|c| c * COLOR_BOOST));
    }
    out
}

/// Static color buffer for the fairy lights
pub fn light_colors(field: &ParticleField) -> Vec<f32> {
    let mut out = Vec::with_capacity(field.lights.len() * 3);
    for l in &field.lights {
        out.extend_from_slice(&l.color);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::field::{LIGHT_COUNT, ORNAMENT_COUNT};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn test_field() -> ParticleField {
        ParticleField::generate(&mut SmallRng::seed_from_u64(99))
    }

    fn anim_with_expansion(expansion: f32) -> AnimationState {
        AnimationState { expansion, ..AnimationState::default() }
    }

    #[test]
    fn test_group_sizes_match_field() {
        let field = test_field();
        let mut buffers = InstanceBuffers::new(&field);
        buffers.emit(&field, &AnimationState::default(), 0.0);

        assert_eq!(buffers.spheres.len() + buffers.cubes.len(), ORNAMENT_COUNT);
        assert_eq!(buffers.lights.len(), LIGHT_COUNT);
        assert_eq!(buffers.spheres_flat().len(), buffers.spheres.len() * Instance::STRIDE);
    }

    #[test]
    fn test_buffer_sizes_stable_across_frames() {
        let field = test_field();
        let mut buffers = InstanceBuffers::new(&field);
        buffers.emit(&field, &AnimationState::default(), 0.0);
        let spheres = buffers.spheres.len();

        for frame in 1..100 {
            buffers.emit(&field, &AnimationState::default(), frame as f32 / 60.0);
            assert_eq!(buffers.spheres.len(), spheres);
        }
    }

    #[test]
    fn test_all_outputs_finite() {
        let field = test_field();
        let mut buffers = InstanceBuffers::new(&field);
        for &exp in &[0.0, 0.05, 0.1, 0.5, 1.0, 2.8] {
            buffers.emit(&field, &anim_with_expansion(exp), 123.4);
            for group in [&buffers.spheres, &buffers.cubes, &buffers.lights] {
                for inst in group.iter() {
                    assert!(inst.position.iter().all(|v| v.is_finite()));
                    assert!(inst.scale.is_finite());
                }
            }
        }
    }

    #[test]
    fn test_ornaments_shrink_to_zero_at_full_contraction() {
        let field = test_field();
        let mut buffers = InstanceBuffers::new(&field);
        buffers.emit(&field, &anim_with_expansion(0.0), 1.0);
        for inst in buffers.spheres.iter().chain(&buffers.cubes) {
            assert_eq!(inst.scale, 0.0);
        }
    }

    #[test]
    fn test_lights_vanish_below_cutoff() {
        let field = test_field();
        let mut buffers = InstanceBuffers::new(&field);

        buffers.emit(&field, &anim_with_expansion(0.05), 1.0);
        assert!(buffers.lights.iter().all(|l| l.scale == 0.0));

        buffers.emit(&field, &anim_with_expansion(1.0), 1.0);
        assert!(buffers.lights.iter().any(|l| l.scale > 0.0));
    }

    #[test]
    fn test_expansion_scales_radius() {
        let field = test_field();
        let mut buffers = InstanceBuffers::new(&field);

        buffers.emit(&field, &anim_with_expansion(1.0), 0.0);
        let rest: Vec<f32> = buffers
            .spheres
            .iter()
            .map(|s| (s.position[0].powi(2) + s.position[2].powi(2)).sqrt())
            .collect();

        buffers.emit(&field, &anim_with_expansion(2.8), 0.0);
        for (inst, r) in buffers.spheres.iter().zip(&rest) {
            let exploded = (inst.position[0].powi(2) + inst.position[2].powi(2)).sqrt();
            assert!((exploded - r * 2.8).abs() < 1e-3);
        }
    }

    #[test]
    fn test_reveal_follows_pinch_channel() {
        let field = test_field();
        let mut buffers = InstanceBuffers::new(&field);
        let anim = AnimationState { pinch_reveal: 0.6, ..AnimationState::default() };
        buffers.emit(&field, &anim, 0.0);
        assert_eq!(buffers.reveal, RevealTransform { scale: 0.6, opacity: 0.6 });
    }

    #[test]
    fn test_color_buffers() {
        let field = test_field();
        let spheres = ornament_colors(&field, OrnamentKind::Sphere);
        let cubes = ornament_colors(&field, OrnamentKind::Cube);
        assert_eq!(spheres.len() + cubes.len(), ORNAMENT_COUNT * 3);
        assert_eq!(light_colors(&field).len(), LIGHT_COUNT * 3);
        // Ornament colors carry the emissive boost
        assert!(spheres.iter().cloned().fold(0.0f32, f32::max) > 1.0);
    }
}
