//! Frame tick system
//!
//! Writes each behaviour's rotation delta to its proxy node. There is no
//! smoothing: the proxy snaps to the latest delta every frame.

use bevy::prelude::*;

use crate::bevy::components::{MoveCameraByPointer, RotationProxy};

/// Apply stored rotation deltas to proxy nodes
pub fn apply_rotation_delta(
    behaviours: Query<&MoveCameraByPointer>,
    mut proxies: Query<&mut Transform, With<RotationProxy>>,
) {
    for behaviour in &behaviours {
        let Some(proxy) = behaviour.proxy() else {
            continue;
        };
        let Ok(mut transform) = proxies.get_mut(proxy) else {
            continue;
        };
        transform.rotation = behaviour.rotation().to_quat();
    }
}
