//! Camera command messages.
//!
//! Anything outside the camera (scripts, UI panels, gesture handlers) mutates
//! it by writing a [`CameraCommand`]. Commands are applied in arrival order by
//! [`apply_camera_commands`](crate::systems::camera::apply_camera_commands)
//! right before the camera update of the same tick.
//!
//! Commands deserialize from the JSON emitted for camera blocks:
//! `{ "type": "shake", "intensity": 10, "duration": 0.5 }`. Omitted arguments
//! take the same defaults as the block palette.

use bevy_ecs::prelude::*;
use serde::Deserialize;

use crate::resources::camera2d::easing::Easing;

fn default_shake_intensity() -> f32 {
    10.0
}

fn default_shake_duration() -> f32 {
    0.5
}

fn default_transition_duration() -> f32 {
    1.0
}

fn default_follow_smoothing() -> f32 {
    0.1
}

#[derive(Message, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum CameraCommand {
    SetPosition {
        x: f32,
        y: f32,
    },
    SetZoom {
        zoom: f32,
    },
    ZoomBy {
        delta: f32,
    },
    /// Missing edges are unbounded.
    SetBounds {
        #[serde(default)]
        min_x: Option<f32>,
        #[serde(default)]
        max_x: Option<f32>,
        #[serde(default)]
        min_y: Option<f32>,
        #[serde(default)]
        max_y: Option<f32>,
    },
    ClearBounds,
    /// Follow the entity spawned with this scene id.
    FollowEntity {
        id: String,
        #[serde(default)]
        offset_x: f32,
        #[serde(default)]
        offset_y: f32,
        #[serde(default = "default_follow_smoothing")]
        smoothing: f32,
    },
    StopFollow,
    Shake {
        #[serde(default = "default_shake_intensity")]
        intensity: f32,
        /// Seconds.
        #[serde(default = "default_shake_duration")]
        duration: f32,
    },
    Transition {
        x: f32,
        y: f32,
        /// Seconds.
        #[serde(default = "default_transition_duration")]
        duration: f32,
        #[serde(default)]
        easing: Easing,
    },
}
