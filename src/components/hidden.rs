//! Marker for entities that exist but are not drawn.
//!
//! Hidden entities and tile layers are skipped by the visibility pass, so
//! they never reach the draw list or the hitbox overlay. They still count as
//! entities in the debug metrics.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Hidden;
