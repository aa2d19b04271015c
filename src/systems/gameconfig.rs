//! Game configuration change detection system.
//!
//! Monitors [`GameConfig`] for changes and pushes the camera tunables and
//! viewport size into the running world.

use bevy_ecs::prelude::*;
use log::info;

use crate::resources::camera2d::{CameraController, CameraSettings};
use crate::resources::gameconfig::GameConfig;
use crate::resources::screensize::ScreenSize;

/// System that applies game configuration changes.
///
/// The first config seen is only recorded: the camera and [`ScreenSize`] were
/// built from it. After that, each modification pushes only the settings that
/// differ from the last applied ones, so a smoothing factor set by a follow
/// call survives an unrelated config edit.
pub fn apply_gameconfig_changes(
    maybe_config: Option<Res<GameConfig>>,
    mut applied: Local<Option<CameraSettings>>,
    mut camera: ResMut<CameraController>,
    mut screen_size: ResMut<ScreenSize>,
) {
    let Some(config) = maybe_config else {
        return;
    };
    if !config.is_changed() {
        return;
    }
    let settings = config.camera_settings();
    let Some(previous) = applied.replace(settings) else {
        return;
    };
    if previous == settings {
        return;
    }

    if (previous.min_zoom, previous.max_zoom) != (settings.min_zoom, settings.max_zoom) {
        camera.set_zoom_limits(settings.min_zoom, settings.max_zoom);
    }
    if previous.smoothing != settings.smoothing {
        camera.set_smoothing(settings.smoothing);
    }
    if previous.smoothing_mode != settings.smoothing_mode {
        camera.set_smoothing_mode(settings.smoothing_mode);
    }
    if previous.viewport != settings.viewport {
        camera.set_viewport(settings.viewport.x, settings.viewport.y);
        let (w, h) = config.screen_size();
        let new_size = ScreenSize { w, h };
        // avoid tripping change detection on ScreenSize when nothing moved
        if *screen_size != new_size {
            *screen_size = new_size;
        }
    }

    info!("GameConfig changes applied.");
}
