//! Timed camera actions.
//!
//! A camera script is the action list an external block compiler produces
//! for camera blocks: each step carries the time (in seconds of world time)
//! at which its [`CameraCommand`] should be issued.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "steps": [
//!     { "at": 0.0, "command": { "type": "setBounds", "minX": 0, "maxX": 2000 } },
//!     { "at": 1.5, "command": { "type": "shake", "intensity": 12, "duration": 0.4 } },
//!     { "at": 2.0, "command": { "type": "transition", "x": 900, "y": 300,
//!                               "duration": 1.2, "easing": "easeInOut" } }
//!   ]
//! }
//! ```
//!
//! Steps fire in file order: a step never fires before the ones above it.

use bevy_ecs::prelude::*;
use serde::Deserialize;
use std::path::Path;

use crate::events::camera::CameraCommand;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScriptStep {
    pub at: f32,
    pub command: CameraCommand,
}

#[derive(Resource, Deserialize, Debug, Clone, Default)]
pub struct CameraScript {
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
    #[serde(skip)]
    next: usize,
}

impl CameraScript {
    pub fn new(steps: Vec<ScriptStep>) -> Self {
        Self { steps, next: 0 }
    }

    pub fn from_json_str(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse camera script: {}", e))
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read camera script {}: {}", path.display(), e))?;
        Self::from_json_str(&json)
    }

    /// Take every pending step whose time has come.
    pub fn take_due(&mut self, elapsed: f32) -> Vec<CameraCommand> {
        let mut due = Vec::new();
        while let Some(step) = self.steps.get(self.next) {
            if elapsed < step.at {
                break;
            }
            due.push(step.command.clone());
            self.next += 1;
        }
        due
    }

    pub fn is_finished(&self) -> bool {
        self.next >= self.steps.len()
    }
}
