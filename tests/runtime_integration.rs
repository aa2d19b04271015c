//! Runtime integration tests: commands, gestures, scripts, scenes, culling
//! and the debug overlay driven through [`Runtime::tick`].

use std::sync::{Arc, RwLock};

use bevy_ecs::prelude::*;
use glam::Vec2;

use stagecam::events::camera::CameraCommand;
use stagecam::events::input::PointerGesture;
use stagecam::events::switchdebug::DebugSection;
use stagecam::game::{Runtime, RuntimeClock};
use stagecam::resources::camera2d::easing::Easing;
use stagecam::resources::camerascript::CameraScript;
use stagecam::resources::debugmode::DebugMode;
use stagecam::resources::gameconfig::GameConfig;
use stagecam::resources::scene::SceneData;
use stagecam::resources::screensize::ScreenSize;

const EPSILON: f32 = 1e-4;
const DT: f32 = 1.0 / 60.0;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn approx_vec(a: Vec2, b: Vec2) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn make_runtime() -> Runtime {
    Runtime::new(GameConfig::new(), RuntimeClock::manual()).with_seed(42)
}

fn scene(json: &str) -> SceneData {
    SceneData::from_json_str(json).unwrap()
}

fn find(runtime: &mut Runtime, ids: &[Entity], wanted: &str) -> Entity {
    let world = runtime.world_mut();
    *ids.iter()
        .find(|e| {
            world
                .entity(**e)
                .get::<stagecam::components::sceneinfo::SceneId>()
                .is_some_and(|s| s.id == wanted)
        })
        .unwrap()
}

// ==================== Commands ====================

#[test]
fn test_commands_reach_camera_through_messages() {
    let mut rt = make_runtime();
    rt.send_command(CameraCommand::SetZoom { zoom: 2.0 });
    rt.send_command(CameraCommand::SetPosition { x: 100.0, y: 0.0 });
    rt.tick(DT);
    assert_eq!(rt.camera().zoom(), 2.0);
    assert_eq!(rt.camera().target(), Vec2::new(100.0, 0.0));
    assert!(approx_vec(rt.camera().position(), Vec2::new(10.0, 0.0)));

    rt.send_command(CameraCommand::SetZoom { zoom: 99.0 });
    rt.send_command(CameraCommand::ZoomBy { delta: -0.5 });
    rt.tick(DT);
    assert_eq!(rt.camera().zoom(), 2.5);
}

#[test]
fn test_commands_are_consumed_once() {
    let mut rt = make_runtime();
    rt.send_command(CameraCommand::ZoomBy { delta: 0.5 });
    rt.tick(DT);
    rt.tick(DT);
    rt.tick(DT);
    assert_eq!(rt.camera().zoom(), 1.5);
}

#[test]
fn test_bounds_command_clamps_target_and_clear_releases() {
    let mut rt = make_runtime();
    rt.send_command(CameraCommand::SetBounds {
        min_x: Some(0.0),
        max_x: Some(100.0),
        min_y: None,
        max_y: Some(100.0),
    });
    rt.send_command(CameraCommand::SetPosition { x: 500.0, y: -500.0 });
    rt.tick(DT);
    assert_eq!(rt.camera().target(), Vec2::new(100.0, -500.0));

    rt.send_command(CameraCommand::ClearBounds);
    rt.send_command(CameraCommand::SetPosition { x: 500.0, y: 500.0 });
    rt.tick(DT);
    assert_eq!(rt.camera().target(), Vec2::new(500.0, 500.0));
}

#[test]
fn test_nan_commands_are_ignored() {
    let mut rt = make_runtime();
    rt.send_command(CameraCommand::SetZoom { zoom: f32::NAN });
    rt.send_command(CameraCommand::SetPosition {
        x: f32::NAN,
        y: 40.0,
    });
    rt.send_command(CameraCommand::Transition {
        x: f32::INFINITY,
        y: 0.0,
        duration: 1.0,
        easing: Easing::Linear,
    });
    rt.tick(DT);
    assert_eq!(rt.camera().zoom(), 1.0);
    assert_eq!(rt.camera().target(), Vec2::new(0.0, 40.0));
    assert_eq!(rt.camera().transition_count(), 0);
}

// ==================== Gestures ====================

#[test]
fn test_wheel_steps_zoom_by_configured_amount() {
    let mut rt = make_runtime();
    rt.send_gesture(PointerGesture::Wheel { delta_y: 3.0 });
    rt.tick(DT);
    assert!(approx_eq(rt.camera().zoom(), 0.9));

    rt.send_gesture(PointerGesture::Wheel { delta_y: -1.0 });
    rt.send_gesture(PointerGesture::Wheel { delta_y: -1.0 });
    rt.tick(DT);
    assert!(approx_eq(rt.camera().zoom(), 1.1));

    // zero delta does nothing
    rt.send_gesture(PointerGesture::Wheel { delta_y: 0.0 });
    rt.tick(DT);
    assert!(approx_eq(rt.camera().zoom(), 1.1));
}

#[test]
fn test_pinch_and_pan_move_camera() {
    let mut rt = make_runtime();
    rt.send_gesture(PointerGesture::Pinch { scale: 2.0 });
    rt.tick(DT);
    assert_eq!(rt.camera().zoom(), 2.0);

    rt.send_gesture(PointerGesture::Pan { dx: 100.0, dy: -40.0 });
    rt.tick(DT);
    assert_eq!(rt.camera().target(), Vec2::new(-50.0, 20.0));
    assert!(approx_vec(rt.camera().position(), Vec2::new(-5.0, 2.0)));

    rt.send_gesture(PointerGesture::Pinch { scale: f32::NAN });
    rt.send_gesture(PointerGesture::Pinch { scale: -1.0 });
    rt.tick(DT);
    assert_eq!(rt.camera().zoom(), 2.0);
}

// ==================== Scene and follow ====================

#[test]
fn test_scene_follow_target_is_followed() {
    let mut rt = make_runtime();
    let ids = rt.load_scene(&scene(
        r#"{ "entities": [
            { "id": "hero", "x": 500, "y": 300, "follow": true, "follow_smoothing": 1.0 },
            { "id": "rock", "x": 0, "y": 0 }
        ] }"#,
    ));
    assert_eq!(ids.len(), 2);

    rt.tick(DT);
    assert!(rt.camera().is_following());
    // target = followed + offset - viewport / (2 * zoom)
    assert_eq!(rt.camera().position(), Vec2::new(100.0, 0.0));
}

#[test]
fn test_follow_tracks_moving_entity() {
    let mut rt = make_runtime();
    rt.load_scene(&scene(
        r#"{ "entities": [
            { "id": "hero", "x": 400, "y": 300, "velocity_x": 60,
              "follow": true, "follow_smoothing": 1.0 }
        ] }"#,
    ));
    for _ in 0..60 {
        rt.tick(DT);
    }
    let pos = rt.camera().position();
    assert!((pos.x - 60.0).abs() < 1e-2, "camera x was {}", pos.x);
    assert!(approx_eq(pos.y, 0.0));
}

#[test]
fn test_follow_entity_command_by_scene_id() {
    let mut rt = make_runtime();
    let ids = rt.load_scene(&scene(
        r#"{ "entities": [ { "id": "bird", "x": 1000, "y": 500 } ] }"#,
    ));
    let bird = find(&mut rt, &ids, "bird");

    rt.send_command(CameraCommand::FollowEntity {
        id: "nobody".into(),
        offset_x: 0.0,
        offset_y: 0.0,
        smoothing: 0.5,
    });
    rt.tick(DT);
    assert!(!rt.camera().is_following());

    rt.send_command(CameraCommand::FollowEntity {
        id: "bird".into(),
        offset_x: 0.0,
        offset_y: 100.0,
        smoothing: 0.5,
    });
    rt.tick(DT);
    assert!(rt.camera().is_following());
    assert_eq!(rt.camera().smoothing(), 0.5);
    assert_eq!(rt.camera().target(), Vec2::new(600.0, 300.0));

    // despawned target: follow stays but the target is left alone
    rt.world_mut().despawn(bird);
    rt.send_command(CameraCommand::SetPosition { x: 0.0, y: 0.0 });
    rt.tick(DT);
    assert!(rt.camera().is_following());
    assert_eq!(rt.camera().target(), Vec2::ZERO);

    rt.send_command(CameraCommand::StopFollow);
    rt.tick(DT);
    assert!(!rt.camera().is_following());
}

#[test]
fn test_shared_follow_target_is_released_when_dropped() {
    let mut rt = make_runtime();
    let player = Arc::new(RwLock::new(Vec2::new(400.0, 300.0)));
    rt.camera_mut().follow(&player, 10.0, 0.0, 1.0);
    rt.tick(DT);
    assert_eq!(rt.camera().position(), Vec2::new(10.0, 0.0));

    *player.write().unwrap() = Vec2::new(500.0, 300.0);
    rt.tick(DT);
    assert_eq!(rt.camera().position(), Vec2::new(110.0, 0.0));

    drop(player);
    rt.tick(DT);
    assert!(!rt.camera().is_following());
    assert_eq!(rt.camera().position(), Vec2::new(110.0, 0.0));
}

#[test]
fn test_config_edit_keeps_follow_smoothing() {
    let mut rt = make_runtime();
    let player = Arc::new(RwLock::new(Vec2::new(400.0, 300.0)));
    rt.camera_mut().follow(&player, 0.0, 0.0, 1.0);
    rt.tick(DT);
    assert_eq!(rt.camera().smoothing(), 1.0);

    rt.world_mut().resource_mut::<GameConfig>().max_zoom = 2.0;
    rt.tick(DT);
    assert_eq!(rt.camera().zoom_limits(), (0.5, 2.0));
    assert_eq!(rt.camera().smoothing(), 1.0);

    rt.world_mut().resource_mut::<GameConfig>().smoothing = 0.5;
    rt.tick(DT);
    assert_eq!(rt.camera().smoothing(), 0.5);
}

// ==================== Scripts ====================

#[test]
fn test_script_steps_fire_once_in_order() {
    let mut rt = make_runtime();
    rt.set_script(
        CameraScript::from_json_str(
            r#"{ "steps": [
                { "at": 0.0, "command": { "type": "setZoom", "zoom": 2.0 } },
                { "at": 0.04, "command": { "type": "shake", "intensity": 8, "duration": 0.5 } },
                { "at": 0.12, "command": { "type": "transition", "x": 100, "y": 0,
                                           "duration": 0.1, "easing": "linear" } }
            ] }"#,
        )
        .unwrap(),
    );

    let dt = 0.05;
    rt.tick(dt);
    assert_eq!(rt.camera().zoom(), 2.0);
    assert!(rt.camera().is_shaking());
    assert_eq!(rt.camera().transition_count(), 0);

    rt.tick(dt);
    rt.tick(dt);
    assert_eq!(rt.camera().transition_count(), 1);

    for _ in 0..3 {
        rt.tick(dt);
    }
    assert_eq!(rt.camera().transition_count(), 0);
    assert!(
        rt.world()
            .resource::<CameraScript>()
            .is_finished()
    );

    for _ in 0..6 {
        rt.tick(dt);
    }
    assert!(!rt.camera().is_shaking());
    assert_eq!(rt.camera().zoom(), 2.0);
}

#[test]
fn test_same_seed_gives_same_shake() {
    let run = || {
        let mut rt = make_runtime();
        rt.send_command(CameraCommand::Shake {
            intensity: 20.0,
            duration: 1.0,
        });
        (0..10)
            .map(|_| {
                rt.tick(DT);
                rt.camera().position()
            })
            .collect::<Vec<_>>()
    };
    let a = run();
    let b = run();
    assert_eq!(a, b);
    assert!(a.iter().any(|p| *p != Vec2::ZERO));
}

// ==================== Visibility ====================

#[test]
fn test_draw_list_culls_and_sorts_by_z() {
    let mut rt = make_runtime();
    let ids = rt.load_scene(&scene(
        r#"{ "entities": [
            { "id": "a", "x": 0, "y": 0, "width": 10, "height": 10, "z": 5 },
            { "id": "b", "x": 100, "y": 0, "width": 10, "height": 10, "z": 1 },
            { "id": "far", "x": 1000, "y": 1000, "width": 10, "height": 10, "z": 0 },
            { "id": "edge", "x": 405, "y": 0, "width": 10, "height": 10, "z": 0 }
        ] }"#,
    ));
    rt.tick(DT);

    let a = find(&mut rt, &ids, "a");
    let b = find(&mut rt, &ids, "b");
    let far = find(&mut rt, &ids, "far");
    let edge = find(&mut rt, &ids, "edge");

    let list = rt.draw_list();
    assert_eq!(list.len(), 3);
    assert!(!list.contains(far));
    let order: Vec<Entity> = list.items.iter().map(|i| i.entity).collect();
    assert_eq!(order, vec![edge, b, a]);
}

#[test]
fn test_draw_list_follows_camera() {
    let mut rt = make_runtime();
    let ids = rt.load_scene(&scene(
        r#"{ "entities": [ { "id": "far", "x": 700, "y": 0, "width": 10, "height": 10 } ] }"#,
    ));
    let far = find(&mut rt, &ids, "far");
    rt.tick(DT);
    assert!(!rt.draw_list().contains(far));

    rt.camera_mut().set_smoothing(1.0);
    rt.send_command(CameraCommand::SetPosition { x: 900.0, y: 0.0 });
    rt.tick(DT);
    assert!(rt.draw_list().contains(far));

    // zooming out widens the view
    rt.send_command(CameraCommand::SetPosition { x: 0.0, y: 0.0 });
    rt.send_command(CameraCommand::SetZoom { zoom: 0.5 });
    rt.tick(DT);
    assert!(rt.draw_list().contains(far));
}

#[test]
fn test_hidden_entities_are_not_drawn() {
    let mut rt = make_runtime();
    let ids = rt.load_scene(&scene(
        r#"{ "entities": [
            { "id": "shown", "x": 0, "y": 0 },
            { "id": "ghost", "x": 10, "y": 0, "visible": false }
        ] }"#,
    ));
    let shown = find(&mut rt, &ids, "shown");
    let ghost = find(&mut rt, &ids, "ghost");
    rt.toggle_debug();
    rt.tick(DT);
    assert!(rt.draw_list().contains(shown));
    assert!(!rt.draw_list().contains(ghost));
    assert_eq!(rt.overlay().hitboxes.len(), 1);
    assert_eq!(rt.overlay().lines[2], "Entities: 2");
}

#[test]
fn test_tile_layers_are_culled_to_view() {
    let mut rt = make_runtime();
    rt.load_scene(&scene(
        r#"{ "layers": [
            { "name": "ground", "tile_width": 100, "tile_height": 100,
              "width": 3, "data": [1, 0, 2, 3, 4] },
            { "name": "fog", "tile_width": 100, "tile_height": 100,
              "width": 1, "data": [7], "visible": false }
        ] }"#,
    ));
    rt.tick(DT);
    let cells: Vec<(i32, i32, u32)> = rt
        .draw_list()
        .tiles
        .iter()
        .map(|t| (t.column, t.row, t.id))
        .collect();
    assert_eq!(cells, vec![(0, 0, 1), (2, 0, 2), (0, 1, 3), (1, 1, 4)]);
    let first = rt.draw_list().tiles[0];
    assert_eq!((first.min, first.max), (Vec2::ZERO, Vec2::new(100.0, 100.0)));

    // view ends at x = 0: only the first column touches it
    rt.camera_mut().set_smoothing(1.0);
    rt.send_command(CameraCommand::SetPosition { x: -400.0, y: 0.0 });
    rt.tick(DT);
    let columns: Vec<i32> = rt.draw_list().tiles.iter().map(|t| t.column).collect();
    assert_eq!(columns, vec![0, 0]);

    rt.send_command(CameraCommand::SetPosition { x: 2000.0, y: 0.0 });
    rt.tick(DT);
    assert!(rt.draw_list().tiles.is_empty());
}

// ==================== Debug overlay ====================

fn overlay_scene() -> SceneData {
    scene(
        r#"{ "entities": [
            { "id": "a", "kind": "box", "x": 0, "y": 0, "width": 10, "height": 10,
              "tags": ["box"], "properties": { "hp": 3 } },
            { "id": "far", "x": 350, "y": 0, "width": 10, "height": 10 }
        ] }"#,
    )
}

#[test]
fn test_overlay_is_empty_without_debug_mode() {
    let mut rt = make_runtime();
    rt.load_scene(&overlay_scene());
    rt.tick(DT);
    assert!(rt.overlay().lines.is_empty());
    assert!(rt.overlay().hitboxes.is_empty());
}

#[test]
fn test_overlay_metrics_hitboxes_and_inspector() {
    let mut rt = make_runtime();
    rt.load_scene(&overlay_scene());
    rt.toggle_debug();
    assert!(rt.world().contains_resource::<DebugMode>());
    rt.set_pointer(Some(Vec2::new(400.0, 300.0)));
    rt.tick(DT);

    let overlay = rt.overlay();
    assert_eq!(
        overlay.lines[..4],
        [
            "Camera: (0, 0)".to_string(),
            "Zoom: 1.00".to_string(),
            "Entities: 2".to_string(),
            "Visible: 2".to_string(),
        ]
    );
    assert_eq!(overlay.lines[4], "Frame: 16.67 ms");
    assert_eq!(overlay.lines[5], "FPS: 0");

    assert_eq!(overlay.hitboxes.len(), 2);
    let boxed = overlay
        .hitboxes
        .iter()
        .find(|h| h.labels == vec!["box".to_string()])
        .unwrap();
    assert_eq!(boxed.min, Vec2::new(395.0, 295.0));
    assert_eq!(boxed.size, Vec2::new(10.0, 10.0));

    assert_eq!(overlay.bounds, None);
    assert_eq!(
        overlay.pointer,
        Some((Vec2::new(400.0, 300.0), Vec2::ZERO))
    );
    assert_eq!(overlay.inspected.len(), 1);
    let inspected = &overlay.inspected[0];
    assert_eq!(inspected.id, "a");
    assert_eq!(inspected.kind, "box");
    assert_eq!(
        inspected.details,
        vec!["tags: box".to_string(), "hp=3".to_string()]
    );
}

#[test]
fn test_overlay_bounds_only_when_closed() {
    let mut rt = make_runtime();
    rt.toggle_debug();
    rt.send_command(CameraCommand::SetBounds {
        min_x: Some(-100.0),
        max_x: Some(100.0),
        min_y: None,
        max_y: Some(100.0),
    });
    rt.tick(DT);
    assert_eq!(rt.overlay().bounds, None);

    rt.send_command(CameraCommand::SetBounds {
        min_x: Some(-100.0),
        max_x: Some(100.0),
        min_y: Some(-100.0),
        max_y: Some(100.0),
    });
    rt.tick(DT);
    let bounds = rt.overlay().bounds.clone().unwrap();
    assert_eq!(bounds.min, Vec2::new(300.0, 200.0));
    assert_eq!(bounds.size, Vec2::new(200.0, 200.0));
}

#[test]
fn test_debug_sections_and_toggle_off() {
    let mut rt = make_runtime();
    rt.load_scene(&overlay_scene());
    rt.set_pointer(Some(Vec2::new(400.0, 300.0)));
    rt.toggle_debug();

    rt.toggle_debug_section(DebugSection::EntityInfo);
    rt.toggle_debug_section(DebugSection::Hitboxes);
    rt.tick(DT);
    assert!(rt.overlay().inspected.is_empty());
    assert!(rt.overlay().hitboxes.is_empty());
    assert!(rt.overlay().pointer.is_some());
    assert!(!rt.overlay().lines.is_empty());

    rt.toggle_debug();
    assert!(!rt.world().contains_resource::<DebugMode>());
    rt.tick(DT);
    assert!(rt.overlay().lines.is_empty());
    assert!(rt.overlay().pointer.is_none());
}

#[test]
fn test_performance_section_reports_fps() {
    let mut rt = make_runtime();
    rt.toggle_debug();
    assert!(rt.world().contains_resource::<DebugMode>());
    for _ in 0..5 {
        rt.tick(0.25);
    }
    assert_eq!(rt.overlay().lines.last().unwrap(), "FPS: 4");

    rt.toggle_debug_section(DebugSection::Performance);
    assert!(!rt.world().resource::<DebugMode>().show_performance);
    rt.tick(0.25);
    assert!(rt.overlay().lines.is_empty());
}

#[test]
fn test_config_debug_flag_starts_overlay() {
    let mut config = GameConfig::new();
    config.debug = true;
    let mut rt = Runtime::new(config, RuntimeClock::manual());
    rt.tick(DT);
    assert_eq!(rt.overlay().lines[1], "Zoom: 1.00");
}

// ==================== Config ====================

#[test]
fn test_config_changes_reach_camera_and_screen() {
    let mut rt = make_runtime();
    rt.tick(DT);
    {
        let world = rt.world_mut();
        let mut config = world.resource_mut::<GameConfig>();
        config.max_zoom = 1.5;
        config.set_viewport_size(1024, 768);
    }
    rt.send_command(CameraCommand::SetZoom { zoom: 3.0 });
    rt.tick(DT);
    assert_eq!(rt.camera().zoom_limits(), (0.5, 1.5));
    assert_eq!(rt.camera().zoom(), 1.5);
    assert_eq!(rt.camera().viewport(), Vec2::new(1024.0, 768.0));
    assert_eq!(
        *rt.world().resource::<ScreenSize>(),
        ScreenSize { w: 1024, h: 768 }
    );
}

#[test]
fn test_screen_resize_updates_viewport() {
    let mut rt = make_runtime();
    rt.tick(DT);
    *rt.world_mut().resource_mut::<ScreenSize>() = ScreenSize { w: 640, h: 480 };
    rt.tick(DT);
    assert_eq!(rt.camera().viewport(), Vec2::new(640.0, 480.0));
    let screen = rt.camera().world_to_screen(rt.camera().position());
    assert_eq!(screen, Vec2::new(320.0, 240.0));
}

#[test]
fn test_config_file_drives_runtime() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.ini");
    std::fs::write(
        &path,
        "[viewport]\nwidth = 400\nheight = 400\n\n[camera]\nzoom_step = 0.5\n",
    )
    .unwrap();
    let mut config = GameConfig::with_path(&path);
    config.load_from_file().unwrap();
    let mut rt = Runtime::new(config, RuntimeClock::manual());
    rt.send_gesture(PointerGesture::Wheel { delta_y: -1.0 });
    rt.tick(DT);
    assert_eq!(rt.camera().zoom(), 1.5);
    assert_eq!(rt.camera().viewport(), Vec2::new(400.0, 400.0));
}
