//! Gesture module - landmark geometry and hand state
//!
//! Re-exports only. All logic in submodules.

mod classify;
pub mod landmarks;
mod state;

pub use classify::{classify, hand_rotation, Gesture};
pub use landmarks::{
    HandLandmarks, Landmark, FLAT_LEN, INDEX_TIP, LANDMARK_COUNT, MIDDLE_MCP, MIDDLE_TIP,
    PINKY_TIP, RING_TIP, THUMB_TIP, WRIST,
};
pub use state::{HandState, HandTracker};
