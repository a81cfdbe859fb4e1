//! Hand state tracking
//!
//! Maintains the single record the animation reads each frame. The
//! tracker does NO temporal smoothing; raw classification jitter is
//! filtered downstream by the animation blender so the two concerns
//! stay independently tunable.

use serde::{Deserialize, Serialize};

use super::classify::{classify, hand_rotation, Gesture};
use super::landmarks::{HandLandmarks, MIDDLE_MCP};

/// Current hand pose, the sole channel between detection and animation.
///
/// x/y are normalized screen coordinates in [-1, 1] (center 0), x
/// flipped to compensate for the mirrored webcam view. rotation is the
/// hand roll in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HandState {
    pub gesture: Gesture,
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
}

/// Owns the current `HandState`; updated once per detector frame.
#[derive(Default)]
pub struct HandTracker {
    state: HandState,
}

impl HandTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> HandState {
        self.state
    }

    /// Apply one detector frame.
    ///
    /// With a hand present the whole record is recomputed and replaced.
    /// With no hand the gesture drops to NONE but x/y/rotation keep
    /// their last valid values, so the scene does not snap when
    /// tracking blips. A degenerate frame (palm scale ~ 0) keeps the
    /// entire previous record.
    pub fn update(&mut self, hand: Option<&HandLandmarks>) {
        let Some(hand) = hand else {
            self.state.gesture = Gesture::None;
            return;
        };

        let Some(gesture) = classify(hand) else {
            return;
        };

        let palm = hand.point(MIDDLE_MCP);
        self.state = HandState {
            gesture,
            x: (1.0 - palm.x) * 2.0 - 1.0,
            y: -(palm.y * 2.0 - 1.0),
            rotation: hand_rotation(hand),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::landmarks::{
        Landmark, INDEX_TIP, LANDMARK_COUNT, MIDDLE_TIP, PINKY_TIP, RING_TIP, THUMB_TIP, WRIST,
    };

    fn open_hand() -> HandLandmarks {
        let mut points = [Landmark::default(); LANDMARK_COUNT];
        points[WRIST] = Landmark { x: 0.5, y: 0.8, z: 0.0 };
        points[MIDDLE_MCP] = Landmark { x: 0.5, y: 0.7, z: 0.0 };
        for &tip in &[THUMB_TIP, INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP] {
            let spread = 0.15 + tip as f32 * 0.01;
            points[tip] = Landmark { x: 0.5 + spread, y: 0.8 - spread, z: 0.0 };
        }
        HandLandmarks::new(points)
    }

    #[test]
    fn test_update_maps_palm_to_screen_space() {
        let mut tracker = HandTracker::new();
        tracker.update(Some(&open_hand()));

        let state = tracker.state();
        assert_eq!(state.gesture, Gesture::Open);
        // palm at (0.5, 0.7): x = (1 - 0.5)*2 - 1 = 0, y = -(0.7*2 - 1) = -0.4
        assert!(state.x.abs() < 1e-6);
        assert!((state.y + 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_lost_hand_keeps_last_position() {
        let mut tracker = HandTracker::new();
        tracker.update(Some(&open_hand()));
        let before = tracker.state();

        tracker.update(None);
        let after = tracker.state();

        assert_eq!(after.gesture, Gesture::None);
        assert_eq!(after.x, before.x);
        assert_eq!(after.y, before.y);
        assert_eq!(after.rotation, before.rotation);
    }

    #[test]
    fn test_degenerate_frame_keeps_whole_record() {
        let mut tracker = HandTracker::new();
        tracker.update(Some(&open_hand()));
        let before = tracker.state();

        // Wrist collapsed onto the middle knuckle
        let mut points = *open_hand().points();
        points[MIDDLE_MCP] = points[WRIST];
        tracker.update(Some(&HandLandmarks::new(points)));

        assert_eq!(tracker.state(), before);
    }

    #[test]
    fn test_hand_state_serde_round_trip() {
        let state = HandState {
            gesture: Gesture::Pinch,
            x: -0.25,
            y: 0.5,
            rotation: 0.75,
        };
        let json = serde_json::to_string(&state).unwrap();
        let back: HandState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
