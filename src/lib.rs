//! Move Camera By Pointer: parallax camera behaviour for Bevy
//!
//! Attach [`MoveCameraByPointer`] to a camera entity and it leans away from the
//! pointer: the further the pointer is from the viewport center, the more the
//! camera turns, up to the configured force at the viewport edge.
//!
//! Architecture:
//! - A proxy node is inserted between the camera and its parent; the rotation
//!   lives on the proxy so the camera's own `Transform` stays untouched
//! - Pointer moves come from window `CursorMoved` messages, or from a
//!   [`SharedPointerSurface`] fed by the host (e.g. a Tauri webview)
//! - Each frame, before transform propagation, the proxy snaps to the latest
//!   rotation delta
//!
//! # Module Structure
//!
//! - `config`: Default force and normalization constants
//! - `mapping`: Pointer-to-rotation mapping and options
//! - `bridge`: Pointer surfaces shared with the host
//!   - `shared_state`: Thread-safe latest-move slot
//!   - `tauri_plugin`: Tauri plugin forwarding webview pointer moves (`tauri` feature)
//! - `bevy`: Bevy engine integration
//!   - `components`: The behaviour and proxy components
//!   - `systems`: Attach/detach, pointer and frame tick systems
//!   - `plugins`: Plugin registering the systems
//!   - `commands`: `attach`/`detach` helpers on `EntityCommands`
//!
//! ```ignore
//! use bevy::prelude::*;
//! use move_camera_by_pointer::{
//!     MoveCameraByPointerCommandsExt, MoveCameraByPointerOptions, MoveCameraByPointerPlugin,
//! };
//!
//! fn setup(mut commands: Commands) {
//!     commands
//!         .spawn((Camera3d::default(), Transform::from_xyz(0.0, 2.5, 6.0)))
//!         .attach_move_camera_by_pointer(
//!             MoveCameraByPointerOptions::default().with_direction_forces([0.05_f32, 0.02]),
//!         );
//! }
//!
//! App::new()
//!     .add_plugins((DefaultPlugins, MoveCameraByPointerPlugin))
//!     .add_systems(Startup, setup)
//!     .run();
//! ```

pub mod bevy;
pub mod bridge;
pub mod config;
pub mod mapping;

pub use crate::bevy::{
    MoveCameraByPointer, MoveCameraByPointerCommandsExt, MoveCameraByPointerPlugin,
    RotationProxy,
};
pub use crate::bridge::SharedPointerSurface;
pub use crate::mapping::{
    BeforeUpdateHook, DirectionForces, MoveCameraByPointerOptions, PointerCoords, PointerPayload,
    PointerToRotationMapper, RotationDelta,
};
