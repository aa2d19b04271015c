//! Follow targets for the camera.
//!
//! The camera never owns what it follows. Shared targets are held through a
//! [`Weak`] reference to anything implementing [`HasPosition`]; ECS targets are
//! held by [`Entity`] id and resolved by the update system each tick.

use bevy_ecs::prelude::Entity;
use glam::Vec2;
use std::sync::{Mutex, RwLock, Weak};

use crate::components::mapposition::MapPosition;

/// Capability: something that may expose a world position.
///
/// Returning `None` means "no position this tick"; the camera skips the follow
/// step instead of failing.
pub trait HasPosition {
    fn position(&self) -> Option<Vec2>;
}

impl HasPosition for Vec2 {
    fn position(&self) -> Option<Vec2> {
        Some(*self)
    }
}

impl HasPosition for MapPosition {
    fn position(&self) -> Option<Vec2> {
        Some(self.pos)
    }
}

impl<T: HasPosition> HasPosition for Option<T> {
    fn position(&self) -> Option<Vec2> {
        self.as_ref().and_then(HasPosition::position)
    }
}

impl<T: HasPosition> HasPosition for RwLock<T> {
    fn position(&self) -> Option<Vec2> {
        self.read().ok().and_then(|inner| inner.position())
    }
}

impl<T: HasPosition> HasPosition for Mutex<T> {
    fn position(&self) -> Option<Vec2> {
        self.lock().ok().and_then(|inner| inner.position())
    }
}

/// What the camera is following.
#[derive(Clone, Debug)]
pub enum FollowTarget {
    /// Shared object outside the ECS world.
    Shared(Weak<dyn HasPosition + Send + Sync>),
    /// Entity with a [`MapPosition`].
    Entity(Entity),
}

/// Outcome of resolving a follow target for one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Resolved {
    /// Target position is available.
    At(Vec2),
    /// Target exists but has no position right now.
    Missing,
    /// Target is gone for good.
    Dropped,
}

/// Active follow relationship: target plus offset.
#[derive(Clone, Debug)]
pub(crate) struct Follow {
    pub target: FollowTarget,
    pub offset: Vec2,
}

impl Follow {
    /// Resolve the target position. A non-finite position counts as missing.
    pub fn resolve<F>(&self, resolve_entity: &mut F) -> Resolved
    where
        F: FnMut(Entity) -> Option<Vec2>,
    {
        let pos = match &self.target {
            FollowTarget::Shared(weak) => match weak.upgrade() {
                Some(target) => target.position(),
                None => return Resolved::Dropped,
            },
            FollowTarget::Entity(entity) => resolve_entity(*entity),
        };
        match pos {
            Some(pos) if pos.is_finite() => Resolved::At(pos),
            _ => Resolved::Missing,
        }
    }
}
