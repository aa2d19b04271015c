//! Visible tiles and entities for the current frame.
//!
//! Rebuilt every tick by [`visibility_system`](crate::systems::visibility::visibility_system)
//! and consumed by the renderer. Entries are already culled against the
//! camera view. Tiles are drawn first, then entities back to front.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::zindex::ZIndex;

/// One entity to draw, with its world-space box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    pub entity: Entity,
    pub min: Vec2,
    pub max: Vec2,
    pub z: ZIndex,
}

/// One visible non-empty tile cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawTile {
    pub layer: Entity,
    pub column: i32,
    pub row: i32,
    pub id: u32,
    pub min: Vec2,
    pub max: Vec2,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct DrawList {
    pub tiles: Vec<DrawTile>,
    pub items: Vec<DrawItem>,
}

impl DrawList {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, entity: Entity) -> bool {
        self.items.iter().any(|item| item.entity == entity)
    }
}
