//! Tree module - particle field, animation blending, instance emission
//!
//! Re-exports only. All logic in submodules.

mod animation;
pub mod field;
mod emitter;

pub use animation::AnimationState;
pub use emitter::{light_colors, ornament_colors, Instance, InstanceBuffers, RevealTransform};
pub use field::{FairyLight, Ornament, OrnamentKind, ParticleField, LIGHT_COUNT, ORNAMENT_COUNT};
