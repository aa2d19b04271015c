//! Scene metadata carried by spawned entities.
//!
//! - [`SceneId`] – the id given in the scene file, used by camera commands
//!   such as `followEntity` to find an entity
//! - [`Properties`] – extra key/value data shown by the debug inspector

use bevy_ecs::prelude::Component;
use rustc_hash::FxHashMap;

use crate::resources::scene::SceneValue;

/// Identifier and kind of an entity as written in the scene file.
#[derive(Component, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SceneId {
    pub id: String,
    pub kind: String,
}

/// Arbitrary per-entity properties from the scene file.
#[derive(Component, Clone, Debug, Default)]
pub struct Properties(pub FxHashMap<String, SceneValue>);

impl Properties {
    /// Properties as `key=value` strings, sorted by key.
    pub fn describe(&self) -> Vec<String> {
        let mut lines: Vec<String> = self
            .0
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect();
        lines.sort();
        lines
    }
}
