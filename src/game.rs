//! Runtime setup and the per-frame tick.
//!
//! [`Runtime`] owns the ECS world and the update schedule. It inserts the
//! camera and every other resource, registers the debug observers and runs
//! the systems in a fixed order each [`tick`](Runtime::tick):
//!
//! 1. config changes, screen size sync
//! 2. camera script, pointer gestures, new follow targets, camera commands
//! 3. movement, camera update
//! 4. visibility, debug overlay
//! 5. message buffer rotation
//!
//! With feature `raylib`, [`Runtime::attach_window`] adds input polling at the
//! front and rendering at the end.

use std::sync::Arc;

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::info;

use crate::events::camera::CameraCommand;
use crate::events::input::PointerGesture;
use crate::events::switchdebug::{
    DebugSection, SwitchDebugEvent, ToggleDebugSectionEvent, switch_debug_observer,
    toggle_debug_section_observer,
};
use crate::resources::camera2d::CameraController;
use crate::resources::camera2d::clock::{Clock, ManualClock, SystemClock};
use crate::resources::camerascript::CameraScript;
use crate::resources::debugmode::DebugMode;
use crate::resources::debugoverlay::DebugOverlay;
use crate::resources::drawlist::DrawList;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::PointerState;
use crate::resources::scene::SceneData;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;
use crate::systems::camera::{
    apply_camera_commands, follow_new_camera_targets, sync_screen_size, update_camera,
    update_camera_messages,
};
use crate::systems::camerascript::run_camera_script;
use crate::systems::debugoverlay::debug_overlay_system;
use crate::systems::gameconfig::apply_gameconfig_changes;
use crate::systems::input::pointer_gesture_system;
use crate::systems::movement::movement;
use crate::systems::scene::spawn_scene;
use crate::systems::time::update_world_time;
use crate::systems::visibility::visibility_system;

/// Time source for the camera.
#[derive(Debug, Clone)]
pub enum RuntimeClock {
    /// Wall clock; shakes and transitions run in real time.
    System,
    /// Advanced by [`Runtime::tick`] with the frame delta.
    Manual(ManualClock),
}

impl RuntimeClock {
    /// A fresh manual clock starting at zero.
    pub fn manual() -> Self {
        RuntimeClock::Manual(ManualClock::new())
    }
}

pub struct Runtime {
    world: World,
    schedule: Schedule,
    manual_clock: Option<ManualClock>,
}

impl Runtime {
    pub fn new(config: GameConfig, clock: RuntimeClock) -> Self {
        let (clock, manual_clock) = match clock {
            RuntimeClock::System => (Arc::new(SystemClock::new()) as Arc<dyn Clock>, None),
            RuntimeClock::Manual(manual) => {
                (Arc::new(manual.clone()) as Arc<dyn Clock>, Some(manual))
            }
        };

        let mut world = World::new();
        let (w, h) = config.screen_size();
        world.insert_resource(WorldTime::default().with_time_scale(1.0));
        world.insert_resource(ScreenSize { w, h });
        world.insert_resource(CameraController::with_settings(
            config.camera_settings(),
            clock,
        ));
        world.insert_resource(PointerState::default());
        world.insert_resource(DrawList::default());
        world.insert_resource(DebugOverlay::default());
        if config.debug {
            world.insert_resource(DebugMode::default());
        }
        world.insert_resource(config);
        world.init_resource::<Messages<CameraCommand>>();
        world.init_resource::<Messages<PointerGesture>>();

        world.add_observer(switch_debug_observer);
        world.add_observer(toggle_debug_section_observer);

        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                apply_gameconfig_changes,
                sync_screen_size,
                run_camera_script,
                pointer_gesture_system,
                follow_new_camera_targets,
                apply_camera_commands,
                movement,
                update_camera,
                visibility_system,
                debug_overlay_system,
                update_camera_messages,
            )
                .chain(),
        );

        Self {
            world,
            schedule,
            manual_clock,
        }
    }

    /// Seed the camera shake jitter.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.world.resource_mut::<CameraController>().reseed(seed);
        self
    }

    /// Advance time by `dt` seconds and run one frame of systems.
    pub fn tick(&mut self, dt: f32) {
        if let Some(clock) = &self.manual_clock {
            clock.advance_secs(dt);
        }
        update_world_time(&mut self.world, dt);
        self.schedule.run(&mut self.world);
        self.world.clear_trackers();
    }

    /// Spawn the entities of a scene. Followed entities are picked up by the
    /// camera on the next tick.
    pub fn load_scene(&mut self, scene: &SceneData) -> Vec<Entity> {
        spawn_scene(&mut self.world, scene)
    }

    /// Replace the running camera script.
    pub fn set_script(&mut self, script: CameraScript) {
        info!("Camera script loaded with {} steps", script.steps.len());
        self.world.insert_resource(script);
    }

    /// Queue a command for the next tick.
    pub fn send_command(&mut self, command: CameraCommand) {
        self.world
            .resource_mut::<Messages<CameraCommand>>()
            .write(command);
    }

    /// Queue a pointer gesture for the next tick.
    pub fn send_gesture(&mut self, gesture: PointerGesture) {
        self.world
            .resource_mut::<Messages<PointerGesture>>()
            .write(gesture);
    }

    /// Report where the pointer is, in screen pixels.
    pub fn set_pointer(&mut self, screen: Option<Vec2>) {
        self.world.resource_mut::<PointerState>().screen = screen;
    }

    /// Toggle the debug overlay. The observer's resource change is applied
    /// before this returns.
    pub fn toggle_debug(&mut self) {
        self.world.trigger(SwitchDebugEvent {});
        self.world.flush();
    }

    pub fn toggle_debug_section(&mut self, section: DebugSection) {
        self.world.trigger(ToggleDebugSectionEvent { section });
        self.world.flush();
    }

    pub fn camera(&self) -> &CameraController {
        self.world.resource::<CameraController>()
    }

    pub fn camera_mut(&mut self) -> Mut<'_, CameraController> {
        self.world.resource_mut::<CameraController>()
    }

    pub fn draw_list(&self) -> &DrawList {
        self.world.resource::<DrawList>()
    }

    pub fn overlay(&self) -> &DebugOverlay {
        self.world.resource::<DebugOverlay>()
    }

    pub fn manual_clock(&self) -> Option<&ManualClock> {
        self.manual_clock.as_ref()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Hand the raylib window to the world and add input polling and
    /// rendering to the schedule.
    #[cfg(feature = "raylib")]
    pub fn attach_window(&mut self, rl: raylib::RaylibHandle, thread: raylib::RaylibThread) {
        use crate::systems::input::poll_pointer_input;
        use crate::systems::render::render_system;

        self.world.insert_non_send_resource(rl);
        self.world.insert_non_send_resource(thread);
        self.schedule
            .add_systems(poll_pointer_input.before(apply_gameconfig_changes));
        self.schedule
            .add_systems(render_system.after(debug_overlay_system).before(update_camera_messages));
    }
}
