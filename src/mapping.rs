//! Pointer-to-rotation mapping
//!
//! Turns a pointer position over a rendering surface into a small rotation
//! offset. The pointer is normalized to [-1, 1] around the viewport center,
//! and the configured force is applied against the direction of the offset,
//! growing linearly from nothing at the center to the full force at the edge.

use std::fmt;
use std::sync::Arc;

use bevy::math::{EulerRot, Quat, Vec2};
use serde::{Deserialize, Serialize};

use crate::bridge::SharedPointerSurface;
use crate::config::{pointer::*, DEFAULT_DIRECTION_FORCE};

// =============================================================================
// Options
// =============================================================================

/// Force applied at the viewport edge, either for both axes or per axis
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DirectionForces {
    /// Same force for the horizontal and vertical axes
    Uniform(f32),
    /// `[horizontal, vertical]`
    PerAxis([f32; 2]),
}

impl DirectionForces {
    /// Forces as `[horizontal, vertical]`
    pub fn per_axis(self) -> [f32; 2] {
        match self {
            // A NaN scalar reads as no force
            Self::Uniform(force) if force.is_nan() => [0.0, 0.0],
            Self::Uniform(force) => [force, force],
            Self::PerAxis(forces) => forces,
        }
    }
}

impl Default for DirectionForces {
    fn default() -> Self {
        Self::Uniform(DEFAULT_DIRECTION_FORCE)
    }
}

impl From<f32> for DirectionForces {
    fn from(force: f32) -> Self {
        Self::Uniform(force)
    }
}

impl From<[f32; 2]> for DirectionForces {
    fn from(forces: [f32; 2]) -> Self {
        Self::PerAxis(forces)
    }
}

/// Callback that receives the computed `[horizontal, vertical]` forces and
/// returns the pair that is actually stored
pub type BeforeUpdateHook = Arc<dyn Fn([f32; 2]) -> [f32; 2] + Send + Sync>;

/// Options for [`MoveCameraByPointer`](crate::MoveCameraByPointer)
///
/// Each behaviour owns its own copy; nothing here is shared or mutated once
/// the behaviour has been built.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveCameraByPointerOptions {
    /// Rotation force at the viewport edge
    pub direction_forces: DirectionForces,
    /// External pointer surface to listen on instead of the window cursor
    #[serde(skip)]
    pub pointer_source: Option<SharedPointerSurface>,
    /// Post-processing applied to the forces before they are stored
    #[serde(skip)]
    pub on_before_update: Option<BeforeUpdateHook>,
}

impl MoveCameraByPointerOptions {
    pub fn with_direction_forces(mut self, forces: impl Into<DirectionForces>) -> Self {
        self.direction_forces = forces.into();
        self
    }

    pub fn with_pointer_source(mut self, surface: SharedPointerSurface) -> Self {
        self.pointer_source = Some(surface);
        self
    }

    pub fn with_before_update(
        mut self,
        hook: impl Fn([f32; 2]) -> [f32; 2] + Send + Sync + 'static,
    ) -> Self {
        self.on_before_update = Some(Arc::new(hook));
        self
    }
}

impl fmt::Debug for MoveCameraByPointerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoveCameraByPointerOptions")
            .field("direction_forces", &self.direction_forces)
            .field("pointer_source", &self.pointer_source.is_some())
            .field("on_before_update", &self.on_before_update.is_some())
            .finish()
    }
}

// =============================================================================
// Pointer Payload
// =============================================================================

/// Client coordinates carried by a pointer event, in logical pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerCoords {
    pub client_x: Option<f32>,
    pub client_y: Option<f32>,
}

/// A pointer-move notification
///
/// Webview frontends forward either the raw DOM event or a wrapper holding it
/// under `event`; both shapes deserialize into this type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerPayload {
    /// Nested event whose coordinates take precedence
    #[serde(default)]
    pub event: Option<PointerCoords>,
    #[serde(flatten)]
    pub coords: PointerCoords,
}

impl PointerPayload {
    /// Payload with top-level coordinates at `position`
    pub fn at(position: Vec2) -> Self {
        Self {
            event: None,
            coords: PointerCoords {
                client_x: Some(position.x),
                client_y: Some(position.y),
            },
        }
    }

    /// Pointer position in surface pixels
    ///
    /// Each axis prefers the nested event and falls back to the top-level
    /// value only when the nested one is missing. When neither axis holds a
    /// usable (non-zero) value the origin is returned, so a pointer sitting
    /// exactly at (0, 0) reads the same as a payload with no coordinates.
    /// If only one axis is missing it reads as 0, not NaN.
    pub fn resolve_position(&self) -> Vec2 {
        let nested = self.event.unwrap_or_default();
        let x = nested.client_x.or(self.coords.client_x);
        let y = nested.client_y.or(self.coords.client_y);

        if !is_truthy(x) && !is_truthy(y) {
            return Vec2::ZERO;
        }

        Vec2::new(x.unwrap_or(0.0), y.unwrap_or(0.0))
    }
}

fn is_truthy(value: Option<f32>) -> bool {
    value.is_some_and(|v| v != 0.0 && !v.is_nan())
}

/// Map a pixel position to [-1, 1] on each axis, (0, 0) being the center
///
/// A zero-sized surface yields non-finite output rather than an error.
pub fn normalize_pointer(position: Vec2, surface_size: Vec2) -> Vec2 {
    (position / surface_size - Vec2::splat(VIEWPORT_CENTER)) * NORMALIZED_SCALE
}

// =============================================================================
// Rotation
// =============================================================================

/// Rotation offset (radians) applied to the proxy node every frame
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RotationDelta {
    /// Rotation around X, fed by the vertical force
    pub x: f32,
    /// Rotation around Y, fed by the horizontal force
    pub y: f32,
}

impl RotationDelta {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Build from `[horizontal, vertical]` forces; the axes swap because a
    /// horizontal lean is a turn around Y
    pub fn from_forces([horizontal, vertical]: [f32; 2]) -> Self {
        Self {
            x: vertical,
            y: horizontal,
        }
    }

    /// Orientation with yaw `y` and pitch `x`
    pub fn to_quat(self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.y, self.x, 0.0)
    }
}

/// Converts pointer positions into rotation deltas for one behaviour
#[derive(Clone, Debug, Default)]
pub struct PointerToRotationMapper {
    options: MoveCameraByPointerOptions,
}

impl PointerToRotationMapper {
    pub fn new(options: MoveCameraByPointerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &MoveCameraByPointerOptions {
        &self.options
    }

    /// `[horizontal, vertical]` forces for a normalized pointer position
    pub fn forces_for(&self, relative: Vec2) -> [f32; 2] {
        let [mut horizontal, mut vertical] = self.options.direction_forces.per_axis();

        // Push against the pointer's offset from the center
        if relative.x > 0.0 {
            horizontal = -horizontal;
        }
        if relative.y > 0.0 {
            vertical = -vertical;
        }

        let scaled = [horizontal * relative.x.abs(), vertical * relative.y.abs()];

        match &self.options.on_before_update {
            Some(hook) => hook(scaled),
            None => scaled,
        }
    }

    /// Rotation delta for a pointer event over a surface of `surface_size`
    pub fn map(&self, payload: &PointerPayload, surface_size: Vec2) -> RotationDelta {
        let relative = normalize_pointer(payload.resolve_position(), surface_size);
        RotationDelta::from_forces(self.forces_for(relative))
    }
}
