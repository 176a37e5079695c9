//! Bevy systems
//!
//! This module contains the systems that attach behaviours to their targets,
//! turn pointer moves into rotation deltas, and apply them every frame.

pub mod attach;
pub mod pointer;
pub mod rotation;

pub use attach::{attach_behaviours, detach_behaviours};
pub use pointer::handle_pointer_moves;
pub use rotation::apply_rotation_delta;
