//! Screen size resource.
//!
//! Stores the current framebuffer dimensions in pixels. The pointer input
//! system uses the height to flip raylib's downward Y axis, and the debug
//! renderer uses both to lay out the HUD.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
