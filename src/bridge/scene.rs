//! Scene bridge - lifecycle, per-frame tick, and buffer exports
//!
//! Owns the generated particle field, the animation state, and the
//! reusable instance buffers. JavaScript drives `advance_frame` from
//! requestAnimationFrame and pulls the flat transform buffers for its
//! three instanced draws plus the reveal group.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::hand::current_hand_state;
use crate::tree::{
    light_colors, ornament_colors, AnimationState, InstanceBuffers, OrnamentKind, ParticleField,
};

/// Everything the animation core owns for one session
struct SceneState {
    field: ParticleField,
    animation: AnimationState,
    buffers: InstanceBuffers,
    /// Accumulated elapsed time (s), clock for floating and twinkle
    clock: f32,
    /// Opaque photo handle for the reveal plane; JS loads the texture
    photo: Option<String>,
}

impl SceneState {
    fn new(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let field = ParticleField::generate(&mut rng);
        let buffers = InstanceBuffers::new(&field);
        Self {
            field,
            animation: AnimationState::new(),
            buffers,
            clock: 0.0,
            photo: None,
        }
    }
}

thread_local! {
    static SCENE: RefCell<Option<SceneState>> = RefCell::new(None);
}

fn with_scene<T>(f: impl FnOnce(&SceneState) -> T) -> Option<T> {
    SCENE.with(|cell| cell.borrow().as_ref().map(f))
}

// ============================================================================
// LIFECYCLE
// ============================================================================

/// Generate the particle field and reset the animation.
/// Must be called before `advance_frame`. Calling again rebuilds the
/// scene from scratch (and drops the previous one).
#[wasm_bindgen]
pub fn init_scene() {
    init_scene_seeded(js_sys::Date::now() as u64);
}

/// Deterministic variant for test harnesses and reproducible demos
#[wasm_bindgen]
pub fn init_scene_seeded(seed: u64) {
    SCENE.with(|cell| {
        *cell.borrow_mut() = Some(SceneState::new(seed));
    });
    web_sys::console::log_1(&"Particle field generated, scene ready".into());
}

// ============================================================================
// PER-FRAME TICK
// ============================================================================

/// Advance the animation by `dt` seconds and rewrite every instance
/// transform. Call once per rendered frame, then pull the buffers.
#[wasm_bindgen]
pub fn advance_frame(dt: f32) {
    let hand = current_hand_state();
    SCENE.with(|cell| {
        let mut scene = cell.borrow_mut();
        let Some(scene) = scene.as_mut() else {
            web_sys::console::warn_1(&"advance_frame called before init_scene".into());
            return;
        };

        scene.animation.update(&hand, dt);
        if dt.is_finite() && dt > 0.0 {
            scene.clock += dt;
        }
        let clock = scene.clock;
        let animation = scene.animation;
        scene.buffers.emit(&scene.field, &animation, clock);
    });
}

// ============================================================================
// BUFFER EXPORTS (7 floats per instance: pos xyz, rot xyz, scale)
// ============================================================================

#[wasm_bindgen]
pub fn sphere_instance_count() -> usize {
    with_scene(|s| s.buffers.spheres.len()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn cube_instance_count() -> usize {
    with_scene(|s| s.buffers.cubes.len()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn light_instance_count() -> usize {
    with_scene(|s| s.buffers.lights.len()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn sphere_instance_data() -> Option<Vec<f32>> {
    with_scene(|s| s.buffers.spheres_flat().to_vec())
}

#[wasm_bindgen]
pub fn cube_instance_data() -> Option<Vec<f32>> {
    with_scene(|s| s.buffers.cubes_flat().to_vec())
}

#[wasm_bindgen]
pub fn light_instance_data() -> Option<Vec<f32>> {
    with_scene(|s| s.buffers.lights_flat().to_vec())
}

/// Static per-instance colors, fetch once after `init_scene`
#[wasm_bindgen]
pub fn sphere_color_data() -> Option<Vec<f32>> {
    with_scene(|s| ornament_colors(&s.field, OrnamentKind::Sphere))
}

#[wasm_bindgen]
pub fn cube_color_data() -> Option<Vec<f32>> {
    with_scene(|s| ornament_colors(&s.field, OrnamentKind::Cube))
}

#[wasm_bindgen]
pub fn light_color_data() -> Option<Vec<f32>> {
    with_scene(|s| light_colors(&s.field))
}

/// [scale, opacity] of the photo reveal group
#[wasm_bindgen]
pub fn reveal_transform() -> Vec<f32> {
    with_scene(|s| vec![s.buffers.reveal.scale, s.buffers.reveal.opacity])
        .unwrap_or_else(|| vec![0.0, 0.0])
}

/// Y rotation of the whole tree group; applied by the renderer to the
/// parent group rather than baked into every instance.
#[wasm_bindgen]
pub fn tree_rotation() -> f32 {
    with_scene(|s| s.animation.rotation_angle).unwrap_or(0.0)
}

// ============================================================================
// PHOTO HANDLE
// ============================================================================

#[wasm_bindgen]
pub fn set_photo(url: &str) {
    SCENE.with(|cell| {
        if let Some(scene) = cell.borrow_mut().as_mut() {
            scene.photo = Some(url.to_string());
        }
    });
}

#[wasm_bindgen]
pub fn clear_photo() {
    SCENE.with(|cell| {
        if let Some(scene) = cell.borrow_mut().as_mut() {
            scene.photo = None;
        }
    });
}

#[wasm_bindgen]
pub fn photo_url() -> Option<String> {
    with_scene(|s| s.photo.clone()).flatten()
}
