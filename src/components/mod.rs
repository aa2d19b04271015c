//! ECS components for entities.
//!
//! This module groups the component types that scene entities carry. They
//! describe where an entity is, how big it is, how it is drawn relative to
//! others and whether the camera should track it.
//!
//! Submodules overview:
//! - [`boxcollider`] – axis-aligned rectangle used for culling and hitboxes
//! - [`cameratarget`] – marks an entity the camera should follow
//! - [`hidden`] – keeps an entity or layer out of the draw list
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`sceneinfo`] – scene id, kind and free-form properties
//! - [`tags`] – string tags shown in the debug overlay
//! - [`tilelayer`] – tile grid culled against the camera view
//! - [`velocity`] – constant world-space velocity
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod boxcollider;
pub mod cameratarget;
pub mod hidden;
pub mod mapposition;
pub mod sceneinfo;
pub mod tags;
pub mod tilelayer;
pub mod velocity;
pub mod zindex;
