//! stagecam library.
//!
//! This module exposes the runtime's ECS components, resources, systems, and
//! events for use in integration tests and as a reusable library. The heart
//! of it is [`resources::camera2d::CameraController`]; everything else feeds
//! it or consumes its transforms.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
