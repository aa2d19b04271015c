//! Raylib renderer (feature `raylib`).
//!
//! Draws whatever the headless passes produced: the [`DrawList`] tiles and
//! entities in camera space, then the [`DebugOverlay`] in screen space. The raylib camera is
//! rebuilt from [`CameraController`] every frame with the viewport centre as
//! offset, which matches `world_to_screen`.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::resources::camera2d::CameraController;
use crate::resources::debugoverlay::{DebugOverlay, OverlayRect};
use crate::resources::drawlist::DrawList;

const TEXT_SIZE: i32 = 10;
const LINE_HEIGHT: i32 = 14;
const TILE_ALPHA: u8 = 96;

fn to_raylib(camera: &CameraController) -> Camera2D {
    let half = camera.viewport() / 2.0;
    let pos = camera.position();
    Camera2D {
        offset: Vector2::new(half.x, half.y),
        target: Vector2::new(pos.x, pos.y),
        rotation: 0.0,
        zoom: camera.zoom(),
    }
}

/// Colour by z layer so overlapping boxes stay readable.
fn layer_color(z: i32) -> Color {
    const PALETTE: [Color; 6] = [
        Color::SKYBLUE,
        Color::LIME,
        Color::GOLD,
        Color::PINK,
        Color::VIOLET,
        Color::ORANGE,
    ];
    PALETTE[z.rem_euclid(PALETTE.len() as i32) as usize]
}

fn draw_overlay_rect(d: &mut RaylibDrawHandle, rect: &OverlayRect, color: Color) {
    d.draw_rectangle_lines(
        rect.min.x as i32,
        rect.min.y as i32,
        rect.size.x as i32,
        rect.size.y as i32,
        color,
    );
    if !rect.labels.is_empty() {
        d.draw_text(
            &rect.labels.join(", "),
            rect.min.x as i32,
            rect.min.y as i32 - LINE_HEIGHT,
            TEXT_SIZE,
            color,
        );
    }
}

pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    camera: Res<CameraController>,
    draw_list: Res<DrawList>,
    overlay: Res<DebugOverlay>,
) {
    let cam = to_raylib(&camera);
    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::RAYWHITE);

    {
        let mut d2 = d.begin_mode2D(cam);
        for tile in &draw_list.tiles {
            let size = tile.max - tile.min;
            let base = layer_color(i32::try_from(tile.id).unwrap_or(0));
            d2.draw_rectangle_v(
                Vector2::new(tile.min.x, tile.min.y),
                Vector2::new(size.x, size.y),
                Color::new(base.r, base.g, base.b, TILE_ALPHA),
            );
        }
        for item in &draw_list.items {
            let size = item.max - item.min;
            if size.x == 0.0 && size.y == 0.0 {
                d2.draw_circle_v(Vector2::new(item.min.x, item.min.y), 3.0, Color::DARKGRAY);
                continue;
            }
            d2.draw_rectangle_v(
                Vector2::new(item.min.x, item.min.y),
                Vector2::new(size.x, size.y),
                layer_color(item.z.0),
            );
        }
    }

    for rect in &overlay.hitboxes {
        draw_overlay_rect(&mut d, rect, Color::RED);
    }
    if let Some(bounds) = &overlay.bounds {
        draw_overlay_rect(&mut d, bounds, Color::BLUE);
    }

    let mut y = 10;
    for line in &overlay.lines {
        d.draw_text(line, 10, y, TEXT_SIZE, Color::BLACK);
        y += LINE_HEIGHT;
    }

    if let Some((screen, world)) = overlay.pointer {
        let text = format!(
            "Mouse screen: ({:.1}, {:.1}) World: ({:.1}, {:.1})",
            screen.x, screen.y, world.x, world.y
        );
        d.draw_text(&text, 10, y, TEXT_SIZE, Color::BLACK);
        y += LINE_HEIGHT;
    }

    for entity in &overlay.inspected {
        let header = format!(
            "{} [{}] ({:.1}, {:.1})",
            entity.id, entity.kind, entity.pos.x, entity.pos.y
        );
        d.draw_text(&header, 10, y, TEXT_SIZE, Color::DARKBLUE);
        y += LINE_HEIGHT;
        for detail in &entity.details {
            d.draw_text(detail, 20, y, TEXT_SIZE, Color::DARKGRAY);
            y += LINE_HEIGHT;
        }
    }
}
