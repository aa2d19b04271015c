//! Marker for the entity the camera should follow.
//!
//! When this component is added, [`follow_new_camera_targets`] points the
//! camera at the entity using the stored offset and smoothing.
//!
//! [`follow_new_camera_targets`]: crate::systems::camera::follow_new_camera_targets

use bevy_ecs::prelude::Component;
use glam::Vec2;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct CameraTarget {
    pub offset: Vec2,
    pub smoothing: f32,
}

impl CameraTarget {
    pub fn new(smoothing: f32) -> Self {
        Self {
            offset: Vec2::ZERO,
            smoothing,
        }
    }

    pub fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.offset = Vec2::new(x, y);
        self
    }
}
