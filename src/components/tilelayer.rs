//! Tile grid drawn underneath the scene entities.
//!
//! A layer is a row-major grid of tile ids anchored at the world origin.
//! Id `0` is an empty cell. The visibility pass asks the camera which tile
//! range is on screen and only walks those cells.

use bevy_ecs::prelude::Component;
use glam::Vec2;

#[derive(Component, Clone, Debug, PartialEq)]
pub struct TileLayer {
    pub name: String,
    /// Size of one tile in world units.
    pub tile_size: Vec2,
    /// Number of tiles per row.
    pub columns: u32,
    /// Row-major tile ids.
    pub tiles: Vec<u32>,
}

impl TileLayer {
    pub fn new(name: impl Into<String>, tile_size: Vec2, columns: u32, tiles: Vec<u32>) -> Self {
        Self {
            name: name.into(),
            tile_size,
            columns,
            tiles,
        }
    }

    pub fn rows(&self) -> u32 {
        if self.columns == 0 {
            return 0;
        }
        let rows = self.tiles.len().div_ceil(self.columns as usize);
        u32::try_from(rows).unwrap_or(u32::MAX)
    }

    /// Tile id at a cell, `None` outside the grid.
    pub fn tile(&self, column: i32, row: i32) -> Option<u32> {
        let column = u32::try_from(column).ok()?;
        let row = u32::try_from(row).ok()?;
        if column >= self.columns {
            return None;
        }
        let index = row as usize * self.columns as usize + column as usize;
        self.tiles.get(index).copied()
    }

    /// Non-empty cells inside an inclusive `(start_x, start_y, end_x, end_y)`
    /// range, as `(column, row, id)`. The range is clipped to the grid.
    pub fn cells_in(
        &self,
        range: (i32, i32, i32, i32),
    ) -> impl Iterator<Item = (i32, i32, u32)> + '_ {
        let (start_x, start_y, end_x, end_y) = range;
        let max_col = i32::try_from(self.columns).unwrap_or(i32::MAX).saturating_sub(1);
        let max_row = i32::try_from(self.rows()).unwrap_or(i32::MAX).saturating_sub(1);
        let (start_x, end_x) = (start_x.max(0), end_x.min(max_col));
        let (start_y, end_y) = (start_y.max(0), end_y.min(max_row));
        (start_y..=end_y).flat_map(move |row| {
            (start_x..=end_x).filter_map(move |column| {
                self.tile(column, row)
                    .filter(|id| *id > 0)
                    .map(|id| (column, row, id))
            })
        })
    }

    /// World-space `(min, max)` of a cell.
    pub fn cell_rect(&self, column: i32, row: i32) -> (Vec2, Vec2) {
        let min = Vec2::new(column as f32, row as f32) * self.tile_size;
        (min, min + self.tile_size)
    }
}
