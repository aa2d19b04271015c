//! Scene spawning.
//!
//! [`spawn_scene`] turns a [`SceneData`] into entities. Each entity receives
//! [`MapPosition`], a centred [`BoxCollider`], [`ZIndex`], [`Tags`],
//! [`SceneId`], [`Properties`] and [`Velocity`]. Entries flagged `follow` also
//! get a [`CameraTarget`], which the camera picks up on the next tick, and
//! entries with `visible: false` get [`Hidden`]. Tile layers become entities
//! carrying a [`TileLayer`].

use bevy_ecs::prelude::*;
use log::{info, warn};

use crate::components::boxcollider::BoxCollider;
use crate::components::cameratarget::CameraTarget;
use crate::components::hidden::Hidden;
use crate::components::mapposition::MapPosition;
use crate::components::sceneinfo::{Properties, SceneId};
use crate::components::tags::Tags;
use crate::components::tilelayer::TileLayer;
use crate::components::velocity::Velocity;
use crate::components::zindex::ZIndex;
use crate::resources::scene::SceneData;
use glam::Vec2;

/// Spawn every entity and layer of `scene` into `world` and return their ids
/// in file order, entities first. Entries with a non-finite position and
/// layers with a degenerate grid are skipped.
pub fn spawn_scene(world: &mut World, scene: &SceneData) -> Vec<Entity> {
    let mut spawned = Vec::with_capacity(scene.entities.len() + scene.layers.len());
    for entry in &scene.entities {
        if !(entry.x.is_finite() && entry.y.is_finite()) {
            warn!("Skipping scene entity '{}': position is not finite", entry.id);
            continue;
        }
        let velocity = Vec2::new(entry.velocity_x, entry.velocity_y);
        let velocity = if velocity.is_finite() {
            velocity
        } else {
            Vec2::ZERO
        };

        let mut entity = world.spawn((
            MapPosition::new(entry.x, entry.y),
            BoxCollider::centered(entry.width.abs(), entry.height.abs()),
            ZIndex(entry.z),
            Tags::new(entry.tags.iter().cloned()),
            SceneId {
                id: entry.id.clone(),
                kind: entry.kind.clone(),
            },
            Properties(entry.properties.clone()),
            Velocity(velocity),
        ));
        if entry.follow {
            entity.insert(CameraTarget::new(entry.follow_smoothing));
        }
        if !entry.visible {
            entity.insert(Hidden);
        }
        spawned.push(entity.id());
    }

    for layer in &scene.layers {
        let tile_size = Vec2::new(layer.tile_width, layer.tile_height);
        if !(tile_size.is_finite() && tile_size.min_element() > 0.0 && layer.width > 0) {
            warn!("Skipping tile layer '{}': degenerate grid", layer.name);
            continue;
        }
        let mut entity = world.spawn(TileLayer::new(
            layer.name.clone(),
            tile_size,
            layer.width,
            layer.data.clone(),
        ));
        if !layer.visible {
            entity.insert(Hidden);
        }
        spawned.push(entity.id());
    }
    info!("Spawned {} scene entities", spawned.len());
    spawned
}
