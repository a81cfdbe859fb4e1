//! Animation blending - discrete gestures to continuous motion
//!
//! Three independent first-order low-pass channels (expansion, spin,
//! pinch reveal) driven by the shared discrete gesture. All temporal
//! smoothing of detector jitter happens here, not in the tracker.

use crate::gesture::{Gesture, HandState};

/// Expansion targets per gesture
const EXPANSION_FIST: f32 = 0.1;
const EXPANSION_OPEN: f32 = 2.8;
const EXPANSION_REST: f32 = 1.0;

/// Channel rate constants (1/s)
const EXPANSION_RATE: f32 = 3.0;
const PINCH_RATE: f32 = 4.0;

/// Ambient spin (rad/s) applied regardless of gesture
const AUTO_SPIN: f32 = 0.05;

/// Hand tilt below this magnitude is sensor noise, not steering
const TILT_DEAD_ZONE: f32 = 0.3;

/// Manual spin gain applied to hand tilt outside the dead zone
const TILT_SPIN_GAIN: f32 = 0.5;

/// Fraction of the remaining gap the displayed rotation closes per
/// frame. Intentionally not dt-scaled: the shipped behavior couples
/// this chase to frame rate, and rescaling it would change the feel
/// at non-60Hz refresh.
const ROTATION_CHASE: f32 = 0.1;

/// Continuously evolving animation parameters, one per session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationState {
    /// Radial/vertical spread: 0 = collapsed, 1 = rest, >1 = exploded
    pub expansion: f32,
    /// Displayed tree Y rotation (chases `target_rotation`)
    pub rotation_angle: f32,
    /// Accumulated spin target
    pub target_rotation: f32,
    /// Photo reveal amount in [0, 1]
    pub pinch_reveal: f32,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            expansion: 1.0,
            rotation_angle: 0.0,
            target_rotation: 0.0,
            pinch_reveal: 0.0,
        }
    }
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance all channels by `dt` seconds under the given hand state.
    ///
    /// A zero, negative, or non-finite dt leaves every channel exactly
    /// unchanged (stalled tabs deliver dt = 0 frames).
    pub fn update(&mut self, hand: &HandState, dt: f32) {
        if !(dt > 0.0) || !dt.is_finite() {
            return;
        }

        let expansion_target = match hand.gesture {
            Gesture::Fist => EXPANSION_FIST,
            Gesture::Open => EXPANSION_OPEN,
            Gesture::Pinch | Gesture::None => EXPANSION_REST,
        };
        self.expansion += (expansion_target - self.expansion) * (dt * EXPANSION_RATE).min(1.0);

        let manual_spin = if hand.rotation.abs() > TILT_DEAD_ZONE {
            hand.rotation * TILT_SPIN_GAIN
        } else {
            0.0
        };
        self.target_rotation += (AUTO_SPIN + manual_spin) * dt;
        self.rotation_angle += (self.target_rotation - self.rotation_angle) * ROTATION_CHASE;

        let reveal_target = if hand.gesture == Gesture::Pinch { 1.0 } else { 0.0 };
        self.pinch_reveal += (reveal_target - self.pinch_reveal) * (dt * PINCH_RATE).min(1.0);
    }
}
