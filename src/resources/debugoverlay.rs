//! Renderer-independent debug overlay contents.
//!
//! Built by [`debug_overlay_system`](crate::systems::debugoverlay::debug_overlay_system)
//! while [`DebugMode`](crate::resources::debugmode::DebugMode) is present.
//! Everything here is already in screen space.

use bevy_ecs::prelude::*;
use glam::Vec2;

/// Screen-space rectangle with an optional label drawn above it.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayRect {
    pub min: Vec2,
    pub size: Vec2,
    pub labels: Vec<String>,
}

/// Inspector entry for an entity near the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct InspectedEntity {
    pub id: String,
    pub kind: String,
    pub pos: Vec2,
    pub details: Vec<String>,
}

#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct DebugOverlay {
    /// Metric lines (camera, zoom, counts, frame time, FPS).
    pub lines: Vec<String>,
    pub hitboxes: Vec<OverlayRect>,
    /// Camera bounds, only when every edge is finite.
    pub bounds: Option<OverlayRect>,
    /// Pointer position in screen and world space.
    pub pointer: Option<(Vec2, Vec2)>,
    pub inspected: Vec<InspectedEntity>,
}

impl DebugOverlay {
    pub fn clear(&mut self) {
        self.lines.clear();
        self.hitboxes.clear();
        self.bounds = None;
        self.pointer = None;
        self.inspected.clear();
    }
}
