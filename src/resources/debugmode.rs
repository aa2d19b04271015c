//! Debug toggle resource.
//!
//! The mere presence of this resource indicates that the debug overlay should
//! be built. Remove it to disable debug behavior. The flags inside switch
//! individual overlay sections.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the debug overlay is collected every frame.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct DebugMode {
    /// Draw entity hitboxes and their tags.
    pub show_hitboxes: bool,
    /// Show the inspector panel for entities near the pointer.
    pub show_entity_info: bool,
    /// Show the metric lines (camera, counts, frame time, FPS).
    pub show_performance: bool,
}

impl Default for DebugMode {
    fn default() -> Self {
        Self {
            show_hitboxes: true,
            show_entity_info: true,
            show_performance: true,
        }
    }
}
