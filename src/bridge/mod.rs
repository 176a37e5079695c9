//! Bridge layer between pointer hosts and Bevy
//!
//! Hosts that own the pointer (a webview, a remote UI) push moves through the
//! shared surface; the optional Tauri plugin wires this up for Tauri apps.

pub mod shared_state;
#[cfg(feature = "tauri")]
pub mod tauri_plugin;

// Re-export commonly used types
pub use shared_state::{PointerSurface, SharedPointerSurface};
