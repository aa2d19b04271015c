//! Scene description loaded from JSON.
//!
//! A scene is the entity source of the runtime: a flat list of drawable
//! entities with position, size, z-order, tags and free-form properties.
//! [`spawn_scene`](crate::systems::scene::spawn_scene) turns it into ECS
//! entities.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "entities": [
//!     { "id": "hero", "kind": "player", "x": 120.0, "y": 80.0,
//!       "width": 32.0, "height": 48.0, "z": 10, "tags": ["player"],
//!       "properties": { "health": 100 }, "follow": true, "velocity_x": 40.0 },
//!     { "id": "ghost", "x": 0.0, "y": 0.0, "visible": false }
//!   ],
//!   "layers": [
//!     { "name": "ground", "tile_width": 32.0, "tile_height": 32.0,
//!       "width": 4, "data": [1, 1, 0, 2, 1, 1, 1, 1] }
//!   ]
//! }
//! ```
//!
//! Missing sizes default to 50x50, the size of the runtime's placeholder box.
//! Layers are row-major tile grids `width` tiles wide, anchored at the world
//! origin; id `0` is an empty cell.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

fn default_size() -> f32 {
    50.0
}

fn default_kind() -> String {
    "entity".to_string()
}

fn default_follow_smoothing() -> f32 {
    0.1
}

fn default_visible() -> bool {
    true
}

/// Structure representing a whole scene file.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SceneData {
    #[serde(default)]
    pub entities: Vec<SceneEntity>,
    #[serde(default)]
    pub layers: Vec<SceneLayer>,
}

/// A tile layer in the scene file.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SceneLayer {
    #[serde(default)]
    pub name: String,
    pub tile_width: f32,
    pub tile_height: f32,
    /// Tiles per row.
    pub width: u32,
    #[serde(default)]
    pub data: Vec<u32>,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

/// A single entity in the scene file.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SceneEntity {
    #[serde(default)]
    pub id: String,
    #[serde(default = "default_kind")]
    pub kind: String,
    pub x: f32,
    pub y: f32,
    #[serde(default = "default_size")]
    pub width: f32,
    #[serde(default = "default_size")]
    pub height: f32,
    #[serde(default)]
    pub z: i32,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub properties: FxHashMap<String, SceneValue>,
    /// Make the camera follow this entity once spawned.
    #[serde(default)]
    pub follow: bool,
    #[serde(default = "default_follow_smoothing")]
    pub follow_smoothing: f32,
    #[serde(default)]
    pub velocity_x: f32,
    #[serde(default)]
    pub velocity_y: f32,
    /// Entities with `visible: false` are spawned but never drawn.
    #[serde(default = "default_visible")]
    pub visible: bool,
}

/// Enum representing possible value types for entity properties.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum SceneValue {
    Int(i64),
    Float(f64),
    String(String),
    Bool(bool),
}

impl fmt::Display for SceneValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneValue::Int(v) => write!(f, "{}", v),
            SceneValue::Float(v) => write!(f, "{:.2}", v),
            SceneValue::String(v) => write!(f, "{}", v),
            SceneValue::Bool(v) => write!(f, "{}", v),
        }
    }
}

impl SceneData {
    pub fn from_json_str(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse scene: {}", e))
    }

    /// Loads scene data from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read scene file {}: {}", path.display(), e))?;
        Self::from_json_str(&json)
    }
}
