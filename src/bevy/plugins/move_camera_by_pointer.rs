//! Plugin registering the pointer-driven camera behaviour
//!
//! Scheduling:
//! - `PreUpdate`: detach removed behaviours, then attach new ones
//! - `Update`: turn pointer moves into rotation deltas
//! - `PostUpdate`: write deltas to proxy nodes before transforms propagate

use bevy::{prelude::*, transform::TransformSystems, window::CursorMoved};

use crate::bevy::systems::*;

/// Adds the systems driving [`MoveCameraByPointer`](crate::MoveCameraByPointer)
pub struct MoveCameraByPointerPlugin;

impl Plugin for MoveCameraByPointerPlugin {
    fn build(&self, app: &mut App) {
        // Registered by `WindowPlugin` too; adding it again is a no-op
        app.add_message::<CursorMoved>();

        app.add_systems(PreUpdate, (detach_behaviours, attach_behaviours).chain());
        app.add_systems(Update, handle_pointer_moves);
        app.add_systems(
            PostUpdate,
            apply_rotation_delta.before(TransformSystems::Propagate),
        );

        debug!("MoveCameraByPointer plugin configured");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bevy::commands::MoveCameraByPointerCommandsExt;
    use crate::bevy::components::{MoveCameraByPointer, RotationProxy};
    use crate::bridge::SharedPointerSurface;
    use crate::config::PROXY_NODE_NAME;
    use crate::mapping::{MoveCameraByPointerOptions, PointerPayload, RotationDelta};
    use bevy::camera::RenderTargetInfo;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, MoveCameraByPointerPlugin));
        app
    }

    fn behaviour(app: &App, entity: Entity) -> &MoveCameraByPointer {
        app.world()
            .get::<MoveCameraByPointer>(entity)
            .expect("behaviour should be present")
    }

    fn parent_of(app: &App, entity: Entity) -> Option<Entity> {
        app.world().get::<ChildOf>(entity).map(ChildOf::parent)
    }

    /// Camera whose render target is already resolved to 800x600
    fn sized_camera() -> Camera {
        let mut camera = Camera::default();
        camera.computed.target_info = Some(RenderTargetInfo {
            physical_size: UVec2::new(800, 600),
            scale_factor: 1.0,
        });
        camera
    }

    fn move_cursor(app: &mut App, position: Vec2) {
        app.world_mut().write_message(CursorMoved {
            window: Entity::PLACEHOLDER,
            position,
            delta: None,
        });
    }

    fn proxy_count(app: &mut App) -> usize {
        let mut query = app.world_mut().query::<&RotationProxy>();
        query.iter(app.world()).count()
    }

    #[test]
    fn attach_inserts_proxy_between_target_and_parent() {
        let mut app = test_app();
        let parent = app.world_mut().spawn(Transform::default()).id();
        let target = app
            .world_mut()
            .spawn((
                Transform::from_xyz(0.0, 2.5, 6.0),
                ChildOf(parent),
                MoveCameraByPointer::default(),
            ))
            .id();

        app.update();

        let proxy = behaviour(&app, target).proxy().expect("proxy should be set");
        assert_eq!(parent_of(&app, target), Some(proxy));
        assert_eq!(parent_of(&app, proxy), Some(parent));
        assert_eq!(
            app.world().get::<Name>(proxy).map(Name::as_str),
            Some(PROXY_NODE_NAME)
        );
        assert_eq!(
            app.world().get::<RotationProxy>(proxy),
            Some(&RotationProxy {
                target,
                original_parent: Some(parent),
            })
        );
        // The target keeps its own transform
        assert_eq!(
            app.world().get::<Transform>(target).map(|t| t.translation),
            Some(Vec3::new(0.0, 2.5, 6.0))
        );
    }

    #[test]
    fn attach_to_root_gives_root_proxy() {
        let mut app = test_app();
        let target = app
            .world_mut()
            .spawn((Transform::default(), MoveCameraByPointer::default()))
            .id();

        app.update();

        let proxy = behaviour(&app, target).proxy().expect("proxy should be set");
        assert_eq!(parent_of(&app, target), Some(proxy));
        assert_eq!(parent_of(&app, proxy), None);
        // Not a camera: pointer moves are ignored
        assert_eq!(behaviour(&app, target).camera(), None);
    }

    #[test]
    fn camera_target_is_recorded() {
        let mut app = test_app();
        let target = app
            .world_mut()
            .spawn((Camera::default(), MoveCameraByPointer::default()))
            .id();

        app.update();

        assert_eq!(behaviour(&app, target).camera(), Some(target));
    }

    #[test]
    fn detach_restores_parent_and_despawns_proxy() {
        let mut app = test_app();
        let parent = app.world_mut().spawn(Transform::default()).id();
        let target = app
            .world_mut()
            .spawn((Transform::default(), ChildOf(parent), MoveCameraByPointer::default()))
            .id();
        app.update();
        let proxy = behaviour(&app, target).proxy().expect("proxy should be set");

        app.world_mut()
            .entity_mut(target)
            .remove::<MoveCameraByPointer>();
        app.update();

        assert_eq!(parent_of(&app, target), Some(parent));
        assert!(app.world().get_entity(proxy).is_err());
        assert!(app.world().get_entity(target).is_ok());
        assert_eq!(proxy_count(&mut app), 0);
    }

    #[test]
    fn detach_of_root_target_clears_parent() {
        let mut app = test_app();
        let target = app
            .world_mut()
            .spawn((Transform::default(), MoveCameraByPointer::default()))
            .id();
        app.update();

        app.world_mut()
            .commands()
            .entity(target)
            .detach_move_camera_by_pointer();
        app.world_mut().flush();
        app.update();

        assert_eq!(parent_of(&app, target), None);
        assert_eq!(proxy_count(&mut app), 0);
    }

    #[test]
    fn detach_without_attach_is_noop() {
        let mut app = test_app();
        let parent = app.world_mut().spawn(Transform::default()).id();
        let target = app
            .world_mut()
            .spawn((Transform::default(), ChildOf(parent)))
            .id();

        app.world_mut()
            .commands()
            .entity(target)
            .detach_move_camera_by_pointer();
        app.world_mut().flush();
        app.update();

        assert_eq!(parent_of(&app, target), Some(parent));
        assert_eq!(proxy_count(&mut app), 0);
    }

    #[test]
    fn attaching_twice_keeps_one_proxy() {
        let mut app = test_app();
        let target = app.world_mut().spawn(Transform::default()).id();

        app.world_mut()
            .commands()
            .entity(target)
            .attach_move_camera_by_pointer(MoveCameraByPointerOptions::default());
        app.world_mut().flush();
        app.update();
        let first = behaviour(&app, target).proxy();

        app.world_mut()
            .commands()
            .entity(target)
            .attach_move_camera_by_pointer(
                MoveCameraByPointerOptions::default().with_direction_forces(0.1_f32),
            );
        app.world_mut().flush();
        app.update();

        assert!(first.is_some());
        assert_eq!(behaviour(&app, target).proxy(), first);
        assert_eq!(proxy_count(&mut app), 1);
        assert_eq!(parent_of(&app, target), first);
    }

    #[test]
    fn despawned_target_drops_its_proxy() {
        let mut app = test_app();
        let target = app
            .world_mut()
            .spawn((Transform::default(), MoveCameraByPointer::default()))
            .id();
        app.update();
        let proxy = behaviour(&app, target).proxy().expect("proxy should be set");

        app.world_mut().entity_mut(target).despawn();
        app.update();

        assert!(app.world().get_entity(proxy).is_err());
    }

    #[test]
    fn frame_tick_applies_rotation_to_proxy() {
        let mut app = test_app();
        let target = app
            .world_mut()
            .spawn((Transform::default(), MoveCameraByPointer::default()))
            .id();
        app.update();
        let proxy = behaviour(&app, target).proxy().expect("proxy should be set");

        let delta = RotationDelta { x: 0.03, y: -0.03 };
        app.world_mut()
            .get_mut::<MoveCameraByPointer>(target)
            .expect("behaviour should be present")
            .set_rotation(delta);
        app.update();

        let rotation = app.world().get::<Transform>(proxy).map(|t| t.rotation);
        assert_eq!(rotation, Some(delta.to_quat()));
        // The target's own rotation is untouched
        assert_eq!(
            app.world().get::<Transform>(target).map(|t| t.rotation),
            Some(Quat::IDENTITY)
        );
    }

    #[test]
    fn disabled_behaviour_still_applies_last_rotation() {
        let mut app = test_app();
        let target = app
            .world_mut()
            .spawn((Transform::default(), MoveCameraByPointer::default()))
            .id();
        app.update();
        let proxy = behaviour(&app, target).proxy().expect("proxy should be set");

        let delta = RotationDelta { x: -0.01, y: 0.02 };
        {
            let mut behaviour = app
                .world_mut()
                .get_mut::<MoveCameraByPointer>(target)
                .expect("behaviour should be present");
            behaviour.set_rotation(delta);
            behaviour.enabled = false;
        }
        app.update();

        let rotation = app.world().get::<Transform>(proxy).map(|t| t.rotation);
        assert_eq!(rotation, Some(delta.to_quat()));
    }

    #[test]
    fn surface_moves_ignored_until_size_resolves() {
        let mut app = test_app();
        let surface = SharedPointerSurface::default();
        let options = MoveCameraByPointerOptions::default().with_pointer_source(surface.clone());
        let target = app
            .world_mut()
            .spawn((Camera::default(), MoveCameraByPointer::new(options)))
            .id();
        app.update();

        // No render target has been resolved in a headless test app
        surface
            .push_pointer_move(PointerPayload::at(Vec2::new(800.0, 300.0)))
            .unwrap();
        app.update();

        assert_eq!(behaviour(&app, target).rotation(), RotationDelta::ZERO);
        assert_eq!(behaviour(&app, target).camera(), Some(target));
    }

    #[test]
    fn cursor_moves_drive_the_proxy() {
        let mut app = test_app();
        let target = app
            .world_mut()
            .spawn((sized_camera(), MoveCameraByPointer::default()))
            .id();
        app.update();
        let proxy = behaviour(&app, target).proxy().expect("proxy should be set");

        move_cursor(&mut app, Vec2::new(100.0, 100.0));
        move_cursor(&mut app, Vec2::new(800.0, 300.0));
        app.update();

        // The last move of the frame wins
        assert_eq!(
            behaviour(&app, target).rotation(),
            RotationDelta { x: 0.0, y: -0.03 }
        );
        let rotation = app
            .world()
            .get::<Transform>(proxy)
            .map(|t| t.rotation)
            .expect("proxy should have a transform");
        assert!(rotation.abs_diff_eq(Quat::from_rotation_y(-0.03), 1e-6));
    }

    #[test]
    fn inactive_camera_ignores_cursor_moves() {
        let mut app = test_app();
        let mut camera = sized_camera();
        camera.is_active = false;
        let target = app
            .world_mut()
            .spawn((camera, MoveCameraByPointer::default()))
            .id();
        app.update();

        move_cursor(&mut app, Vec2::new(800.0, 300.0));
        app.update();

        assert_eq!(behaviour(&app, target).rotation(), RotationDelta::ZERO);
    }

    #[test]
    fn surface_listeners_each_see_the_move() {
        let mut app = test_app();
        let surface = SharedPointerSurface::default();
        let options = MoveCameraByPointerOptions::default().with_pointer_source(surface.clone());
        let first = app
            .world_mut()
            .spawn((sized_camera(), MoveCameraByPointer::new(options.clone())))
            .id();
        let second = app
            .world_mut()
            .spawn((sized_camera(), MoveCameraByPointer::new(options)))
            .id();
        app.update();

        surface
            .push_pointer_move(PointerPayload::at(Vec2::new(400.0, 0.0)))
            .unwrap();
        // Cursor moves are not used by surface listeners
        move_cursor(&mut app, Vec2::new(800.0, 300.0));
        app.update();

        let expected = RotationDelta { x: 0.03, y: 0.0 };
        assert_eq!(behaviour(&app, first).rotation(), expected);
        assert_eq!(behaviour(&app, second).rotation(), expected);
    }
}
