//! Input systems.
//!
//! - [`pointer_gesture_system`] turns [`PointerGesture`] messages into camera
//!   zoom and pan.
//! - [`poll_pointer_input`] (feature `raylib`) reads the mouse and keyboard
//!   from Raylib each frame, writes gestures and updates
//!   [`PointerState`](crate::resources::input::PointerState). Debug keys
//!   trigger [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent)
//!   and section toggles.
use bevy_ecs::prelude::*;

use crate::events::input::PointerGesture;
use crate::resources::camera2d::CameraController;
use crate::resources::gameconfig::GameConfig;

/// Apply pointer gestures to the camera.
///
/// - wheel: one `zoom_step` per event, scrolling down zooms out
/// - pan: target moves against the drag
/// - pinch: zoom is multiplied by the pinch scale
pub fn pointer_gesture_system(
    mut reader: MessageReader<PointerGesture>,
    mut camera: ResMut<CameraController>,
    config: Option<Res<GameConfig>>,
) {
    let step = config.map(|c| c.zoom_step).unwrap_or(0.1);
    for gesture in reader.read() {
        match *gesture {
            PointerGesture::Wheel { delta_y } => {
                if delta_y > 0.0 {
                    camera.zoom_by(-step);
                } else if delta_y < 0.0 {
                    camera.zoom_by(step);
                }
            }
            PointerGesture::Pan { dx, dy } => camera.pan_by(dx, dy),
            PointerGesture::Pinch { scale } => {
                if scale.is_finite() && scale > 0.0 {
                    let zoom = camera.zoom() * scale;
                    camera.set_zoom(zoom);
                }
            }
        }
    }
}

#[cfg(feature = "raylib")]
pub use self::raylib_input::poll_pointer_input;

#[cfg(feature = "raylib")]
mod raylib_input {
    use bevy_ecs::prelude::*;
    use glam::Vec2;
    use raylib::ffi::{KeyboardKey, MouseButton};

    use crate::events::input::PointerGesture;
    use crate::events::switchdebug::{DebugSection, SwitchDebugEvent, ToggleDebugSectionEvent};
    use crate::resources::input::PointerState;
    use crate::resources::screensize::ScreenSize;

    /// Poll Raylib for mouse and debug keys.
    pub fn poll_pointer_input(
        rl: NonSendMut<raylib::RaylibHandle>,
        screen: Res<ScreenSize>,
        mut pointer: ResMut<PointerState>,
        mut gestures: MessageWriter<PointerGesture>,
        mut commands: Commands,
    ) {
        // raylib reports wheel-up as positive
        let wheel = rl.get_mouse_wheel_move();
        if wheel != 0.0 {
            gestures.write(PointerGesture::Wheel { delta_y: -wheel });
        }

        if rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_RIGHT) {
            let delta = rl.get_mouse_delta();
            if delta.x != 0.0 || delta.y != 0.0 {
                gestures.write(PointerGesture::Pan {
                    dx: delta.x,
                    dy: delta.y,
                });
            }
        }

        let mouse = rl.get_mouse_position();
        let inside = mouse.x >= 0.0
            && mouse.y >= 0.0
            && mouse.x <= screen.w as f32
            && mouse.y <= screen.h as f32;
        pointer.screen = inside.then(|| Vec2::new(mouse.x, mouse.y));

        if rl.is_key_pressed(KeyboardKey::KEY_F3) {
            commands.trigger(SwitchDebugEvent {});
        }
        if rl.is_key_pressed(KeyboardKey::KEY_F4) {
            commands.trigger(ToggleDebugSectionEvent {
                section: DebugSection::Hitboxes,
            });
        }
        if rl.is_key_pressed(KeyboardKey::KEY_F5) {
            commands.trigger(ToggleDebugSectionEvent {
                section: DebugSection::Performance,
            });
        }
        if rl.is_key_pressed(KeyboardKey::KEY_F6) {
            commands.trigger(ToggleDebugSectionEvent {
                section: DebugSection::EntityInfo,
            });
        }
    }
}
