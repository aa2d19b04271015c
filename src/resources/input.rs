//! Per-frame pointer state resource.
//!
//! Holds where the pointer is on screen so the debug inspector can look up
//! entities under it. Discrete gestures (wheel, drag, pinch) travel as
//! [`PointerGesture`](crate::events::input::PointerGesture) messages instead.

use bevy_ecs::prelude::*;
use glam::Vec2;

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// Last known pointer position in screen pixels, if the pointer is over
    /// the viewport.
    pub screen: Option<Vec2>,
}
