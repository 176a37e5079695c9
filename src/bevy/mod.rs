//! Bevy engine integration
//!
//! This module contains all Bevy-related code including components,
//! systems, the plugin, and command helpers.

pub mod commands;
pub mod components;
pub mod plugins;
pub mod systems;

// Re-export commonly used items
pub use commands::MoveCameraByPointerCommandsExt;
pub use components::{MoveCameraByPointer, RotationProxy};
pub use plugins::MoveCameraByPointerPlugin;
