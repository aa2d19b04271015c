//! Runtime systems.
//!
//! This module groups the ECS systems that advance time, feed the camera and
//! produce per-frame outputs for the renderer.
//!
//! Submodules overview
//! - [`camera`] – apply commands, follow targets and advance the camera
//! - [`camerascript`] – issue scripted camera commands when they fall due
//! - [`debugoverlay`] – collect the debug overlay while debug mode is on
//! - [`gameconfig`] – push configuration changes into the camera
//! - [`input`] – turn pointer gestures into zoom and pan
//! - [`movement`] – integrate positions from velocities and time
//! - `render` – draw the draw list and overlay using Raylib (feature `raylib`)
//! - [`scene`] – spawn entities from scene data
//! - [`time`] – update simulation time and delta
//! - [`visibility`] – cull entities against the view and sort by z

pub mod camera;
pub mod camerascript;
pub mod debugoverlay;
pub mod gameconfig;
pub mod input;
pub mod movement;
#[cfg(feature = "raylib")]
pub mod render;
pub mod scene;
pub mod time;
pub mod visibility;
