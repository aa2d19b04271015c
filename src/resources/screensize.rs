//! Screen size resource.
//!
//! Stores the current viewport dimensions in pixels. The camera system copies
//! it into [`CameraController`](crate::resources::camera2d::CameraController)
//! whenever it changes (window resize).

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
