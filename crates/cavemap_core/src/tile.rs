//! Tile states

use serde::{Deserialize, Serialize};

/// The state of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Tile {
    /// Open, walkable space
    Floor,
    /// Solid rock. Cells outside the interior are always walls.
    #[default]
    Wall,
}

impl Tile {
    /// Character used when rendering this tile as text
    pub fn glyph(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Floor => '.',
        }
    }

    /// Returns `true` for anything that is not `Floor`.
    ///
    /// Neighborhood counts in the smoothing passes count solid tiles.
    pub fn is_solid(self) -> bool {
        self != Tile::Floor
    }
}
