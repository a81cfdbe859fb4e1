//! Tree Web - Gesture-Driven Particle Tree
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! JavaScript owns the collaborators: MediaPipe Hands detection, the
//! three.js renderer, webcam capture and UI. Rust owns the numeric
//! core: gesture classification, animation blending, and per-frame
//! instance transform emission.

mod bridge;
pub mod gesture;
pub mod tree;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    update_hand_landmarks,
    clear_hand_landmarks,
    get_hand_gesture,
    get_hand_position,
    init_scene,
    init_scene_seeded,
    advance_frame,
    sphere_instance_count,
    cube_instance_count,
    light_instance_count,
    sphere_instance_data,
    cube_instance_data,
    light_instance_data,
    sphere_color_data,
    cube_color_data,
    light_color_data,
    reveal_transform,
    tree_rotation,
    set_photo,
    clear_photo,
    photo_url,
};

// Re-export core types for Rust consumers (tests, benches)
pub use gesture::{Gesture, HandLandmarks, HandState, HandTracker, Landmark};
pub use tree::{AnimationState, Instance, InstanceBuffers, ParticleField};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
