//! Hand landmark model - MediaPipe Hands topology
//!
//! A tracked hand is exactly 21 landmarks with fixed semantic indices.
//! `HandLandmarks` is the validated form; any payload that is not
//! 21 x 3 floats is rejected at this boundary and never reaches the
//! classifier.

use nalgebra::Vector2;

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Number of landmarks per hand
pub const LANDMARK_COUNT: usize = 21;

/// Expected flat payload length (21 landmarks x [x, y, z])
pub const FLAT_LEN: usize = LANDMARK_COUNT * 3;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single landmark point in normalized image coordinates.
///
/// x and y are in [0, 1] (image space, origin top-left). z is the
/// relative depth MediaPipe reports; classification only uses x/y.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    /// 2D projection for image-plane geometry
    pub fn xy(&self) -> Vector2<f32> {
        Vector2::new(self.x, self.y)
    }

    /// Euclidean distance in the image plane (z ignored)
    pub fn distance_2d(&self, other: &Landmark) -> f32 {
        (self.xy() - other.xy()).norm()
    }
}

/// A complete, validated set of 21 hand landmarks
#[derive(Clone, Copy, Debug)]
pub struct HandLandmarks {
    points: [Landmark; LANDMARK_COUNT],
}

impl HandLandmarks {
    pub fn new(points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Parse a flat `Float32Array` payload of exactly 63 values.
    ///
    /// Returns `None` for any other length; shape validation happens
    /// here so downstream geometry can index unconditionally.
    pub fn from_flat(data: &[f32]) -> Option<Self> {
        if data.len() != FLAT_LEN {
            return None;
        }

        let mut points = [Landmark::default(); LANDMARK_COUNT];
        for (i, point) in points.iter_mut().enumerate() {
            let base = i * 3;
            *point = Landmark {
                x: data[base],
                y: data[base + 1],
                z: data[base + 2],
            };
        }
        Some(Self { points })
    }

    pub fn point(&self, index: usize) -> Landmark {
        self.points[index]
    }

    pub fn points(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.points
    }
}
