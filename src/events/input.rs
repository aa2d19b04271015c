//! Pointer gesture messages.
//!
//! The input layer reports discrete gestures; the camera turns them into
//! zoom and target changes in
//! [`pointer_gesture_system`](crate::systems::input::pointer_gesture_system).

use bevy_ecs::prelude::*;

#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum PointerGesture {
    /// Mouse wheel. Positive `delta_y` (scrolling down) zooms out.
    Wheel { delta_y: f32 },
    /// Drag by a screen-space distance in pixels.
    Pan { dx: f32, dy: f32 },
    /// Two-finger pinch; `scale` is the distance ratio since the last report.
    Pinch { scale: f32 },
}
