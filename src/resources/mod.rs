//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: the camera, timing, configuration,
//! loaded scene data and the per-frame outputs of the visibility and debug
//! passes.
//!
//! Overview
//! - `camera2d` – camera controller: smoothing, bounds, follow, shake, transitions
//! - `camerascript` – timed camera commands loaded from JSON
//! - `debugmode` – presence toggles the debug overlay
//! - `debugoverlay` – text lines, hitboxes and inspector data for the overlay
//! - `drawlist` – entities that survived culling, in draw order
//! - `gameconfig` – INI-backed runtime configuration
//! - `input` – last known pointer position
//! - `scene` – scene description loaded from JSON
//! - `screensize` – current framebuffer dimensions in pixels
//! - `worldtime` – simulation time and delta
pub mod camera2d;
pub mod camerascript;
pub mod debugmode;
pub mod debugoverlay;
pub mod drawlist;
pub mod gameconfig;
pub mod input;
pub mod scene;
pub mod screensize;
pub mod worldtime;
