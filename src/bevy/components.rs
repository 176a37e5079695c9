//! Bevy component definitions
//!
//! [`MoveCameraByPointer`] is the behaviour itself: inserting it on an entity
//! attaches it, removing it detaches it. [`RotationProxy`] marks the node the
//! behaviour inserts between the target and the target's original parent.

use bevy::prelude::*;

use crate::mapping::{
    MoveCameraByPointerOptions, PointerPayload, PointerToRotationMapper, RotationDelta,
};

/// Runtime binding created when the behaviour is attached
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Attachment {
    /// Proxy node carrying the rotation
    pub proxy: Entity,
    /// The target itself when it carries a `Camera`
    pub camera: Option<Entity>,
}

/// Leans the entity away from the pointer, parallax style
///
/// Pointer moves update a rotation delta; every frame the delta is written to
/// a proxy node inserted above the entity, leaving the entity's own
/// `Transform` untouched. Pointer moves are only picked up when the entity
/// is a camera whose render target size is known.
#[derive(Component, Debug)]
pub struct MoveCameraByPointer {
    /// Whether pointer moves update the rotation; the last rotation keeps
    /// being applied while disabled
    pub enabled: bool,
    mapper: PointerToRotationMapper,
    attachment: Option<Attachment>,
    rotation: RotationDelta,
    surface_generation: u64,
}

impl MoveCameraByPointer {
    pub fn new(options: MoveCameraByPointerOptions) -> Self {
        Self {
            enabled: true,
            mapper: PointerToRotationMapper::new(options),
            attachment: None,
            rotation: RotationDelta::ZERO,
            surface_generation: 0,
        }
    }

    pub fn options(&self) -> &MoveCameraByPointerOptions {
        self.mapper.options()
    }

    /// Latest rotation delta
    pub fn rotation(&self) -> RotationDelta {
        self.rotation
    }

    /// Override the stored rotation; the next pointer move replaces it
    pub fn set_rotation(&mut self, rotation: RotationDelta) {
        self.rotation = rotation;
    }

    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    /// Proxy node inserted above the target, once attached
    pub fn proxy(&self) -> Option<Entity> {
        self.attachment.map(|a| a.proxy)
    }

    /// Camera used to resolve the surface size, once attached
    pub fn camera(&self) -> Option<Entity> {
        self.attachment.and_then(|a| a.camera)
    }

    pub(crate) fn attach(&mut self, attachment: Attachment, surface_generation: u64) {
        self.attachment = Some(attachment);
        self.surface_generation = surface_generation;
    }

    /// Latest move on the external surface not yet seen by this behaviour
    pub(crate) fn take_surface_move(&mut self) -> Option<PointerPayload> {
        let surface = self.mapper.options().pointer_source.as_ref()?;
        let (generation, payload) = surface.latest_since(self.surface_generation)?;
        self.surface_generation = generation;
        Some(payload)
    }

    /// Update the rotation from a pointer move
    ///
    /// Returns `false` without touching the rotation when the behaviour is
    /// disabled, not attached to a camera, or the surface size is unknown.
    pub fn handle_pointer(&mut self, payload: &PointerPayload, surface_size: Option<Vec2>) -> bool {
        if !self.enabled || self.camera().is_none() {
            return false;
        }
        let Some(surface_size) = surface_size else {
            return false;
        };

        self.rotation = self.mapper.map(payload, surface_size);
        true
    }
}

impl Default for MoveCameraByPointer {
    fn default() -> Self {
        Self::new(MoveCameraByPointerOptions::default())
    }
}

/// Marker and bookkeeping for the node inserted above a behaviour's target
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationProxy {
    /// Entity the proxy rotates
    pub target: Entity,
    /// Parent the target had before attaching, restored on detach
    pub original_parent: Option<Entity>,
}
