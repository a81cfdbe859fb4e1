//! Bridge module - JS <-> Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod hand;
mod scene;

pub use hand::{
    // WASM entry points
    update_hand_landmarks,
    clear_hand_landmarks,
    get_hand_gesture,
    get_hand_position,
    // Internal API
    current_hand_state,
};

pub use scene::{
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
