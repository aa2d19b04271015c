//! Camera systems.
//!
//! Ordering inside a tick matters and is fixed by
//! [`Runtime`](crate::game::Runtime):
//!
//! 1. [`sync_screen_size`] – copy a resized viewport into the camera
//! 2. [`follow_new_camera_targets`] – start following freshly spawned targets
//! 3. [`apply_camera_commands`] – apply queued [`CameraCommand`]s in arrival order
//! 4. [`update_camera`] – run follow, smoothing, shake and transitions
//! 5. [`update_camera_messages`] – rotate the message buffers
use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::components::cameratarget::CameraTarget;
use crate::components::mapposition::MapPosition;
use crate::components::sceneinfo::SceneId;
use crate::events::camera::CameraCommand;
use crate::events::input::PointerGesture;
use crate::resources::camera2d::CameraController;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;

/// Keep the camera viewport in sync with [`ScreenSize`].
pub fn sync_screen_size(screen: Res<ScreenSize>, mut camera: ResMut<CameraController>) {
    if screen.is_changed() {
        camera.set_viewport(screen.w as f32, screen.h as f32);
    }
}

/// Follow entities that just received a [`CameraTarget`].
///
/// If several appear in the same tick the last one queried wins.
pub fn follow_new_camera_targets(
    query: Query<(Entity, &CameraTarget), Added<CameraTarget>>,
    mut camera: ResMut<CameraController>,
) {
    for (entity, target) in query.iter() {
        debug!("camera now follows {:?}", entity);
        camera.follow_entity(entity, target.offset.x, target.offset.y, target.smoothing);
    }
}

/// Apply queued camera commands to the [`CameraController`].
pub fn apply_camera_commands(
    mut reader: MessageReader<CameraCommand>,
    mut camera: ResMut<CameraController>,
    scene_ids: Query<(Entity, &SceneId)>,
) {
    for command in reader.read() {
        debug!("camera command: {:?}", command);
        match command {
            CameraCommand::SetPosition { x, y } => camera.set_position(*x, *y),
            CameraCommand::SetZoom { zoom } => camera.set_zoom(*zoom),
            CameraCommand::ZoomBy { delta } => camera.zoom_by(*delta),
            CameraCommand::SetBounds {
                min_x,
                max_x,
                min_y,
                max_y,
            } => camera.set_bounds(
                min_x.unwrap_or(f32::NEG_INFINITY),
                max_x.unwrap_or(f32::INFINITY),
                min_y.unwrap_or(f32::NEG_INFINITY),
                max_y.unwrap_or(f32::INFINITY),
            ),
            CameraCommand::ClearBounds => camera.clear_bounds(),
            CameraCommand::FollowEntity {
                id,
                offset_x,
                offset_y,
                smoothing,
            } => {
                let found = scene_ids
                    .iter()
                    .find(|(_, scene_id)| scene_id.id == *id)
                    .map(|(entity, _)| entity);
                match found {
                    Some(entity) => camera.follow_entity(entity, *offset_x, *offset_y, *smoothing),
                    None => warn!("followEntity: no entity with id '{}'", id),
                }
            }
            CameraCommand::StopFollow => camera.stop_follow(),
            CameraCommand::Shake {
                intensity,
                duration,
            } => camera.shake(*intensity, *duration),
            CameraCommand::Transition {
                x,
                y,
                duration,
                easing,
            } => camera.start_transition(*x, *y, *duration, *easing),
        }
    }
}

/// Advance the camera one tick, resolving entity follow targets through
/// their [`MapPosition`].
pub fn update_camera(
    time: Res<WorldTime>,
    mut camera: ResMut<CameraController>,
    positions: Query<&MapPosition>,
) {
    camera.update_with(time.delta, |entity| {
        positions.get(entity).ok().map(|p| p.pos)
    });
}

/// Bevy ECS' [`Messages`] API requires calling `update()` once per frame to
/// drop messages that every reader has had a chance to see.
pub fn update_camera_messages(
    mut commands: ResMut<Messages<CameraCommand>>,
    mut gestures: ResMut<Messages<PointerGesture>>,
) {
    commands.update();
    gestures.update();
}
