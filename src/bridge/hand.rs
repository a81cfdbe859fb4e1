//! Hand tracking bridge - detector frames in, HandState out
//!
//! MediaPipe Hands runs in JavaScript at its own cadence and calls in
//! here with each result. The tracker cell is the single-slot channel
//! between that callback and the render frame: every write replaces
//! the whole record, the render tick reads the latest without
//! blocking, and wasm's single thread makes the pair tear-free.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use crate::gesture::{HandLandmarks, HandState, HandTracker, FLAT_LEN};

thread_local! {
    static TRACKER: RefCell<HandTracker> = RefCell::new(HandTracker::new());
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript with a flat Float32Array of 63 values
/// (21 landmarks x x, y, z) whenever the detector finds a hand.
///
/// A payload of any other length is logged and treated as a no-hand
/// frame; a malformed frame must never break the render loop.
#[wasm_bindgen]
pub fn update_hand_landmarks(data: &[f32]) {
    let hand = HandLandmarks::from_flat(data);
    if hand.is_none() {
        web_sys::console::warn_1(
            &format!(
                "Invalid hand landmark data length: {} (expected {})",
                data.len(),
                FLAT_LEN
            )
            .into(),
        );
    }

    TRACKER.with(|cell| cell.borrow_mut().update(hand.as_ref()));
}

/// Called from JavaScript when the detector reports no hand.
/// Gesture drops to NONE; position and rotation keep their last
/// valid values.
#[wasm_bindgen]
pub fn clear_hand_landmarks() {
    TRACKER.with(|cell| cell.borrow_mut().update(None));
}

/// Current gesture name for the UI overlay
#[wasm_bindgen]
pub fn get_hand_gesture() -> String {
    current_hand_state().gesture.name().to_string()
}

/// Current [x, y, rotation] for the UI overlay
#[wasm_bindgen]
pub fn get_hand_position() -> Vec<f32> {
    let state = current_hand_state();
    vec![state.x, state.y, state.rotation]
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

/// Latest hand state, read by the scene tick
pub fn current_hand_state() -> HandState {
    TRACKER.with(|cell| cell.borrow().state())
}
