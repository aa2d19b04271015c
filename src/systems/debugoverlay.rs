//! Debug overlay collection.
//!
//! While [`DebugMode`] is present, [`debug_overlay_system`] fills
//! [`DebugOverlay`] with everything a renderer needs to draw the overlay:
//!
//! - metric lines: camera position, zoom, entity and visible counts, frame
//!   time and frames per second
//! - screen-space hitboxes of visible entities, labelled with their tags
//! - the camera bounds rectangle, only when all four edges are finite
//! - pointer position and the entities within `inspect_radius` of it
//!
//! Collection is renderer independent so headless runs and tests can check
//! the overlay without a window.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::sceneinfo::{Properties, SceneId};
use crate::components::tags::Tags;
use crate::resources::camera2d::CameraController;
use crate::resources::debugmode::DebugMode;
use crate::resources::debugoverlay::{DebugOverlay, InspectedEntity, OverlayRect};
use crate::resources::drawlist::DrawList;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::PointerState;
use crate::resources::worldtime::WorldTime;

const DEFAULT_INSPECT_RADIUS: f32 = 100.0;

/// Counts frames over one-second windows of world time while the overlay is
/// on. Reports 0 until the first window completes.
#[derive(Debug, Default)]
pub struct FpsCounter {
    window_start: Option<f32>,
    frames: u32,
    fps: u32,
}

impl FpsCounter {
    pub fn tick(&mut self, elapsed: f32) -> u32 {
        let Some(start) = self.window_start else {
            self.window_start = Some(elapsed);
            return self.fps;
        };
        self.frames += 1;
        if elapsed - start >= 1.0 {
            self.fps = self.frames;
            self.frames = 0;
            self.window_start = Some(elapsed);
        }
        self.fps
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

type OverlayQuery<'w, 's> = Query<
    'w,
    's,
    (
        Entity,
        &'static MapPosition,
        Option<&'static BoxCollider>,
        Option<&'static Tags>,
        Option<&'static SceneId>,
        Option<&'static Properties>,
    ),
>;

#[allow(clippy::too_many_arguments)]
pub fn debug_overlay_system(
    debug: Option<Res<DebugMode>>,
    mut overlay: ResMut<DebugOverlay>,
    camera: Res<CameraController>,
    time: Res<WorldTime>,
    draw_list: Res<DrawList>,
    pointer: Res<PointerState>,
    config: Option<Res<GameConfig>>,
    mut fps: Local<FpsCounter>,
    query: OverlayQuery,
) {
    overlay.clear();
    let Some(debug) = debug else {
        fps.reset();
        return;
    };
    let fps = fps.tick(time.elapsed);

    if debug.show_performance {
        let pos = camera.position();
        overlay.lines.push(format!("Camera: ({:.0}, {:.0})", pos.x, pos.y));
        overlay.lines.push(format!("Zoom: {:.2}", camera.zoom()));
        overlay.lines.push(format!("Entities: {}", query.iter().count()));
        overlay.lines.push(format!("Visible: {}", draw_list.len()));
        overlay
            .lines
            .push(format!("Frame: {:.2} ms", time.delta * 1000.0));
        overlay.lines.push(format!("FPS: {}", fps));
    }

    if debug.show_hitboxes {
        for item in &draw_list.items {
            let Ok((_, _, Some(_), tags, _, _)) = query.get(item.entity) else {
                continue;
            };
            let labels: Vec<String> = tags
                .map(|t| t.iter().map(str::to_string).collect())
                .unwrap_or_default();
            overlay.hitboxes.push(screen_rect(&camera, item.min, item.max, labels));
        }
    }

    let bounds = camera.bounds();
    if bounds.is_closed() {
        overlay.bounds = Some(screen_rect(
            &camera,
            Vec2::new(bounds.min_x, bounds.min_y),
            Vec2::new(bounds.max_x, bounds.max_y),
            vec!["bounds".to_string()],
        ));
    }

    let Some(screen) = pointer.screen else {
        return;
    };
    let world = camera.screen_to_world(screen);
    overlay.pointer = Some((screen, world));

    if !debug.show_entity_info {
        return;
    }
    let radius = config
        .map(|c| c.inspect_radius)
        .unwrap_or(DEFAULT_INSPECT_RADIUS);
    let mut inspected: Vec<(f32, InspectedEntity)> = query
        .iter()
        .filter_map(|(entity, position, _, tags, scene_id, properties)| {
            let dist = position.pos.distance(world);
            if dist > radius {
                return None;
            }
            let (id, kind) = match scene_id {
                Some(s) => (s.id.clone(), s.kind.clone()),
                None => (format!("{:?}", entity), "entity".to_string()),
            };
            let mut details = Vec::new();
            if let Some(tags) = tags.filter(|t| !t.is_empty()) {
                details.push(format!("tags: {}", tags.iter().collect::<Vec<_>>().join(", ")));
            }
            if let Some(properties) = properties {
                details.extend(properties.describe());
            }
            Some((
                dist,
                InspectedEntity {
                    id,
                    kind,
                    pos: position.pos,
                    details,
                },
            ))
        })
        .collect();
    inspected.sort_by(|a, b| a.0.total_cmp(&b.0));
    overlay.inspected = inspected.into_iter().map(|(_, e)| e).collect();
}

fn screen_rect(camera: &CameraController, min: Vec2, max: Vec2, labels: Vec<String>) -> OverlayRect {
    let a = camera.world_to_screen(min);
    let b = camera.world_to_screen(max);
    let min = a.min(b);
    OverlayRect {
        min,
        size: a.max(b) - min,
        labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_counts_frames_per_second_window() {
        let mut counter = FpsCounter::default();
        assert_eq!(counter.tick(0.25), 0);
        assert_eq!(counter.tick(0.5), 0);
        assert_eq!(counter.tick(0.75), 0);
        assert_eq!(counter.tick(1.0), 0);
        assert_eq!(counter.tick(1.25), 4);
        assert_eq!(counter.tick(1.5), 4);
        counter.reset();
        assert_eq!(counter.tick(9.0), 0);
    }
}
