//! Visibility pass.
//!
//! Rebuilds [`DrawList`] every tick from the camera's view rectangle:
//!
//! - tile layers only walk the tile range the camera reports as visible
//! - entities whose AABB overlaps the view survive, then are sorted by
//!   [`ZIndex`]; entities without a collider are tested by their position
//!
//! [`Hidden`] entities and layers are skipped. Nothing is mutated except the
//! draw list itself.

use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::hidden::Hidden;
use crate::components::mapposition::MapPosition;
use crate::components::tilelayer::TileLayer;
use crate::components::zindex::ZIndex;
use crate::resources::camera2d::CameraController;
use crate::resources::drawlist::{DrawItem, DrawList, DrawTile};

type DrawableQuery<'w, 's> = Query<
    'w,
    's,
    (
        Entity,
        &'static MapPosition,
        Option<&'static BoxCollider>,
        Option<&'static ZIndex>,
    ),
    Without<Hidden>,
>;

pub fn visibility_system(
    camera: Res<CameraController>,
    mut draw_list: ResMut<DrawList>,
    query: DrawableQuery,
    layers: Query<(Entity, &TileLayer), Without<Hidden>>,
) {
    draw_list.tiles.clear();
    for (entity, layer) in layers.iter() {
        let Some(range) = camera.visible_tile_range(layer.tile_size.x, layer.tile_size.y) else {
            continue;
        };
        for (column, row, id) in layer.cells_in(range) {
            let (min, max) = layer.cell_rect(column, row);
            draw_list.tiles.push(DrawTile {
                layer: entity,
                column,
                row,
                id,
                min,
                max,
            });
        }
    }

    // layers in spawn order; the stable sort keeps row-major order inside a layer
    draw_list.tiles.sort_by_key(|tile| tile.layer);

    draw_list.items.clear();
    for (entity, position, collider, z) in query.iter() {
        let (min, max) = match collider {
            Some(collider) => collider.aabb(position.pos),
            None => (position.pos, position.pos),
        };
        if camera.is_rect_in_view(min, max) {
            draw_list.items.push(DrawItem {
                entity,
                min,
                max,
                z: z.copied().unwrap_or_default(),
            });
        }
    }
    // entity id breaks ties so the order does not depend on archetype layout
    draw_list.items.sort_by_key(|item| (item.z, item.entity));
}
