//! Pointer handling system
//!
//! Feeds pointer moves into attached behaviours: window cursor moves by
//! default, or the latest move on the behaviour's external surface when one
//! is configured.

use bevy::{prelude::*, window::CursorMoved};

use crate::bevy::components::MoveCameraByPointer;
use crate::mapping::PointerPayload;

/// Update rotation deltas from this frame's pointer moves
pub fn handle_pointer_moves(
    mut cursor_moves: MessageReader<CursorMoved>,
    cameras: Query<&Camera>,
    mut behaviours: Query<&mut MoveCameraByPointer>,
) {
    // Each move overwrites the rotation, so only the last one matters
    let scene_move = cursor_moves
        .read()
        .last()
        .map(|moved| PointerPayload::at(moved.position));

    for mut behaviour in &mut behaviours {
        if !behaviour.is_attached() {
            continue;
        }

        let surface_size = behaviour
            .camera()
            .and_then(|camera| cameras.get(camera).ok())
            .and_then(resolve_surface_size);

        let payload = if behaviour.options().pointer_source.is_some() {
            behaviour.take_surface_move()
        } else {
            scene_move
        };
        if let Some(payload) = payload {
            behaviour.handle_pointer(&payload, surface_size);
        }
    }
}

/// Logical size of the camera's render target, if it is active and resolved
fn resolve_surface_size(camera: &Camera) -> Option<Vec2> {
    if !camera.is_active {
        return None;
    }
    camera.logical_target_size()
}
