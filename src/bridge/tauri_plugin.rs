//! Tauri plugin forwarding webview pointer events
//!
//! The frontend listens for `pointermove` on its own document and invokes
//! `plugin:move-camera-by-pointer|pointer_move` with the event's client
//! coordinates. The plugin manages the [`SharedPointerSurface`] handed to
//! [`init`], which is the same handle given to the behaviour's options.

use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime, State,
};

use super::shared_state::SharedPointerSurface;
use crate::mapping::PointerPayload;

/// Plugin name used in `invoke` calls
///
/// Arguments for `pointer_move` are sent as
/// `{ "payload": { "clientX": 120, "clientY": 48 } }`; the payload may also
/// nest the coordinates under `"event"`.
pub const PLUGIN_NAME: &str = "move-camera-by-pointer";

/// Receive a pointer move from the frontend
#[tauri::command]
pub fn pointer_move(
    state: State<'_, SharedPointerSurface>,
    payload: PointerPayload,
) -> Result<(), String> {
    state.push_pointer_move(payload)
}

/// Build the Tauri plugin feeding `surface`
pub fn init<R: Runtime>(surface: SharedPointerSurface) -> TauriPlugin<R> {
    Builder::new(PLUGIN_NAME)
        .invoke_handler(tauri::generate_handler![pointer_move])
        .setup(move |app, _api| {
            app.manage(surface);
            Ok(())
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::Vec2;
    use serde::Deserialize;

    /// Mirrors the argument object `invoke` sends for `pointer_move`
    #[derive(Deserialize)]
    struct PointerMoveArgs {
        payload: PointerPayload,
    }

    #[test]
    fn invoke_arguments_reach_the_surface() {
        let args: PointerMoveArgs =
            serde_json::from_str(r#"{ "payload": { "clientX": 120.0, "clientY": 48.0 } }"#)
                .unwrap();

        let surface = SharedPointerSurface::default();
        surface.push_pointer_move(args.payload).unwrap();

        let (_, payload) = surface.latest_since(0).unwrap();
        assert_eq!(payload.resolve_position(), Vec2::new(120.0, 48.0));
    }
}
