//! Constant linear velocity for scene entities.
//!
//! Scene entities can drift at a fixed speed so that a headless run has a
//! moving follow target. There is no physics here: position is integrated
//! directly by [`movement`](crate::systems::movement::movement).

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Velocity in world units per second.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct Velocity(pub Vec2);
