//! Command helpers for attaching and detaching the behaviour

use bevy::ecs::system::EntityCommands;

use crate::bevy::components::MoveCameraByPointer;
use crate::mapping::MoveCameraByPointerOptions;

/// `attach`/`detach` on an entity, as an alternative to inserting and
/// removing [`MoveCameraByPointer`] by hand
pub trait MoveCameraByPointerCommandsExt {
    /// Attach the behaviour; attaching again replaces the options and keeps
    /// the existing proxy node
    fn attach_move_camera_by_pointer(&mut self, options: MoveCameraByPointerOptions)
        -> &mut Self;

    /// Detach the behaviour; does nothing if it was never attached
    fn detach_move_camera_by_pointer(&mut self) -> &mut Self;
}

impl MoveCameraByPointerCommandsExt for EntityCommands<'_> {
    fn attach_move_camera_by_pointer(
        &mut self,
        options: MoveCameraByPointerOptions,
    ) -> &mut Self {
        self.insert(MoveCameraByPointer::new(options))
    }

    fn detach_move_camera_by_pointer(&mut self) -> &mut Self {
        self.remove::<MoveCameraByPointer>()
    }
}
