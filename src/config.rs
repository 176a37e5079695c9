//! Configuration constants for the pointer-driven camera behaviour
//!
//! This module contains the default force applied when no options are given,
//! plus the constants used to normalize pointer positions.

/// Default rotation force (radians at the viewport edge), used for both axes
pub const DEFAULT_DIRECTION_FORCE: f32 = 0.03;

/// Name given to the proxy node inserted above the target
pub const PROXY_NODE_NAME: &str = "rotationTarget";

/// Pointer normalization settings
pub mod pointer {
    /// Center of the viewport in unit coordinates
    pub const VIEWPORT_CENTER: f32 = 0.5;

    /// Scale that turns [-0.5, 0.5] into [-1, 1]
    pub const NORMALIZED_SCALE: f32 = 2.0;
}
