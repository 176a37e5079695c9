//! Bevy plugins
//!
//! This module contains the plugin that wires the pointer-driven camera
//! behaviour into an app.

pub mod move_camera_by_pointer;

pub use move_camera_by_pointer::MoveCameraByPointerPlugin;
