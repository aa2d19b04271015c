//! Camera script playback.
use bevy_ecs::prelude::*;
use log::debug;

use crate::events::camera::CameraCommand;
use crate::resources::camerascript::CameraScript;
use crate::resources::worldtime::WorldTime;

/// Write the commands of every script step whose time has come.
pub fn run_camera_script(
    script: Option<ResMut<CameraScript>>,
    time: Res<WorldTime>,
    mut writer: MessageWriter<CameraCommand>,
) {
    let Some(mut script) = script else {
        return;
    };
    if script.is_finished() {
        return;
    }
    for command in script.take_due(time.elapsed) {
        debug!("script step at {:.2}s: {:?}", time.elapsed, command);
        writer.write(command);
    }
}
