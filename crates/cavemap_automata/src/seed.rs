//! Random initial fill.

use cavemap_core::{Tile, TileGrid};
use rand::Rng;

use crate::FillProbability;

/// Build the starting grid for a generation run.
///
/// Every interior cell is independently `Wall` with probability `fill / 100`,
/// otherwise `Floor`. Border cells are always `Wall`. Grids narrower or shorter
/// than 3 cells have no interior and come back as solid wall.
pub fn seed_grid(width: u32, height: u32, fill: FillProbability, rng: &mut impl Rng) -> TileGrid {
    let mut grid = TileGrid::new(width, height);
    let percent = fill.percent() as u32;

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            let tile = if rng.gen_range(0..100u32) < percent {
                Tile::Wall
            } else {
                Tile::Floor
            };
            grid.set(x, y, tile);
        }
    }

    grid
}
