//! World-space position component.
//!
//! [`MapPosition`] is the pivot of an entity in world coordinates. The camera
//! reads it to follow entities and the visibility pass reads it to cull them.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// World-space position (pivot) of an entity.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vec2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }
}
