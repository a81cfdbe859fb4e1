//! Gesture classification from hand-landmark geometry
//!
//! Pure functions, no state. Two scale-invariant metrics drive the
//! decision: finger spread (average fingertip distance from the wrist)
//! and pinch distance (thumb tip to index tip), both normalized by the
//! palm scale (wrist to middle knuckle) so hand size and camera
//! distance cancel out.

use serde::{Deserialize, Serialize};

use super::landmarks::{
    HandLandmarks, INDEX_TIP, MIDDLE_MCP, MIDDLE_TIP, PINKY_TIP, RING_TIP, THUMB_TIP, WRIST,
};

/// Fingers curled: normalized spread below this is a fist.
/// Calibrated against live tracking; do not retune casually.
const FIST_SPREAD_THRESHOLD: f32 = 1.0;

/// Thumb and index tips closer than this (in palm scales) is a pinch
const PINCH_THRESHOLD: f32 = 0.2;

/// Below this the wrist and middle knuckle coincide and the frame
/// is degenerate; classification is skipped.
const MIN_PALM_SCALE: f32 = 1e-4;

/// Discrete hand pose
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gesture {
    /// No hand detected (or detection lost)
    #[default]
    None,
    /// Spread fingers - scatter the tree
    Open,
    /// Closed fist - contract the tree
    Fist,
    /// Index + thumb together - reveal the photo
    Pinch,
}

impl Gesture {
    /// Display name for the UI overlay
    pub fn name(&self) -> &'static str {
        match self {
            Gesture::None => "NONE",
            Gesture::Open => "OPEN",
            Gesture::Fist => "FIST",
            Gesture::Pinch => "PINCH",
        }
    }
}

/// Classify a hand pose from its landmarks.
///
/// Returns `None` when the palm scale is degenerate (wrist on top of
/// middle knuckle); the caller keeps its previous gesture for that
/// frame so NaN never enters the animation state.
///
/// Order matters: curled fingers override a pinch, a pinch overrides
/// an open hand.
pub fn classify(hand: &HandLandmarks) -> Option<Gesture> {
    let wrist = hand.point(WRIST);
    let thumb_tip = hand.point(THUMB_TIP);
    let index_tip = hand.point(INDEX_TIP);
    let middle_mcp = hand.point(MIDDLE_MCP);

    let palm_scale = wrist.distance_2d(&middle_mcp);
    if palm_scale < MIN_PALM_SCALE {
        return None;
    }

    let pinch_dist = thumb_tip.distance_2d(&index_tip);

    let tips = [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];
    let spread: f32 = tips
        .iter()
        .map(|&tip| hand.point(tip).distance_2d(&wrist))
        .sum::<f32>()
        / tips.len() as f32;

    let normalized_spread = spread / palm_scale;
    let normalized_pinch = pinch_dist / palm_scale;

    if normalized_spread < FIST_SPREAD_THRESHOLD {
        Some(Gesture::Fist)
    } else if normalized_pinch < PINCH_THRESHOLD {
        Some(Gesture::Pinch)
    } else {
        Some(Gesture::Open)
    }
}

/// Hand roll angle in radians from the wrist -> middle knuckle vector.
///
/// atan2(dx, -dy): zero when the hand points straight up in image
/// space, sign matching a mirrored webcam feed. Scale-invariant.
pub fn hand_rotation(hand: &HandLandmarks) -> f32 {
    let wrist = hand.point(WRIST);
    let middle_mcp = hand.point(MIDDLE_MCP);

    let dx = middle_mcp.x - wrist.x;
    let dy = middle_mcp.y - wrist.y;
    if dx.abs() < MIN_PALM_SCALE && dy.abs() < MIN_PALM_SCALE {
        return 0.0;
    }
    dx.atan2(-dy)
}
