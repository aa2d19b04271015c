//! Position integration for drifting scene entities.
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::velocity::Velocity;
use crate::resources::worldtime::WorldTime;

/// Advance every [`MapPosition`] by its [`Velocity`] times the frame delta.
pub fn movement(mut query: Query<(&mut MapPosition, &Velocity)>, time: Res<WorldTime>) {
    for (mut position, velocity) in query.iter_mut() {
        position.pos += velocity.0 * time.delta;
    }
}
