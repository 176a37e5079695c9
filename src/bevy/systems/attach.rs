//! Attach and detach systems
//!
//! Attaching inserts a proxy node between the target and its parent so the
//! pointer rotation never touches the target's own `Transform`. Detaching
//! puts the target back under its original parent and despawns the proxy.

use bevy::prelude::*;

use crate::bevy::components::{Attachment, MoveCameraByPointer, RotationProxy};
use crate::bridge::SharedPointerSurface;
use crate::config::PROXY_NODE_NAME;

/// Bind newly inserted behaviours to a proxy node
pub fn attach_behaviours(
    mut commands: Commands,
    mut behaviours: Query<
        (Entity, &mut MoveCameraByPointer, Option<&ChildOf>, Has<Camera>),
        Changed<MoveCameraByPointer>,
    >,
    proxies: Query<(Entity, &RotationProxy)>,
) {
    for (target, mut behaviour, child_of, is_camera) in &mut behaviours {
        if behaviour.is_attached() {
            continue;
        }

        // Re-inserting the behaviour keeps the proxy it already has
        let existing = proxies
            .iter()
            .find(|(_, link)| link.target == target)
            .map(|(proxy, _)| proxy);
        let proxy = match existing {
            Some(proxy) => proxy,
            None => spawn_proxy(&mut commands, target, child_of.map(ChildOf::parent)),
        };

        // Moves that happened before attaching are not replayed
        let generation = behaviour
            .options()
            .pointer_source
            .as_ref()
            .map_or(0, SharedPointerSurface::generation);

        behaviour.attach(
            Attachment {
                proxy,
                camera: is_camera.then_some(target),
            },
            generation,
        );

        debug!(
            "MoveCameraByPointer attached to {target} (proxy {proxy}, camera: {is_camera})"
        );
    }
}

fn spawn_proxy(commands: &mut Commands, target: Entity, original_parent: Option<Entity>) -> Entity {
    let proxy = {
        let mut proxy = commands.spawn((
            Name::new(PROXY_NODE_NAME),
            Transform::IDENTITY,
            Visibility::default(),
            RotationProxy {
                target,
                original_parent,
            },
        ));
        if let Some(parent) = original_parent {
            proxy.insert(ChildOf(parent));
        }
        proxy.id()
    };

    commands.entity(target).insert(ChildOf(proxy));
    proxy
}

/// Undo the reparenting of behaviours that were removed
pub fn detach_behaviours(
    mut commands: Commands,
    mut removed: RemovedComponents<MoveCameraByPointer>,
    proxies: Query<(Entity, &RotationProxy)>,
    still_attached: Query<(), With<MoveCameraByPointer>>,
) {
    for target in removed.read() {
        // Removed and inserted again within the same frame
        if still_attached.contains(target) {
            continue;
        }

        for (proxy, link) in proxies.iter().filter(|(_, link)| link.target == target) {
            if let Ok(mut entity) = commands.get_entity(target) {
                match link.original_parent {
                    Some(parent) => {
                        entity.try_insert(ChildOf(parent));
                    }
                    None => {
                        entity.remove::<ChildOf>();
                    }
                }
            }
            commands.entity(proxy).try_despawn();

            debug!("MoveCameraByPointer detached from {target} (proxy {proxy} despawned)");
        }
    }
}
