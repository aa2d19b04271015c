//! Event and message types used by the runtime.
//!
//! Events (observer-triggered) and messages (queued per frame) let the input
//! layer, scripts and the camera talk without depending on each other.
//!
//! Submodules:
//! - [`camera`] – commands that mutate the camera
//! - [`input`] – pointer gestures reported by the input layer
//! - [`switchdebug`] – toggle the debug overlay and its sections
pub mod camera;
pub mod input;
pub mod switchdebug;
