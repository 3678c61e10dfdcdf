//! Fixed-size tile grid

use serde::Serialize;

use crate::Tile;

/// A `width × height` grid of tiles stored row-major in a single buffer.
///
/// Dimensions are fixed at construction. All access is bounds-checked:
/// reads outside the grid return `None` and writes outside the grid are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileGrid {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Create a grid where every cell is `Wall`
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Tile::Wall)
    }

    /// Create a grid where every cell holds `tile`
    pub fn filled(width: u32, height: u32, tile: Tile) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            tiles: vec![tile; size],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// All tiles in row-major order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Row-major index of `(x, y)`, or `None` if out of bounds
    pub fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Get the tile at `(x, y)`
    pub fn get(&self, x: u32, y: u32) -> Option<Tile> {
        self.index(x, y).map(|idx| self.tiles[idx])
    }

    /// Get the tile at a signed position.
    ///
    /// Neighborhood scans use this to step past the edge: negative or
    /// too-large coordinates yield `None`.
    pub fn get_signed(&self, x: i64, y: i64) -> Option<Tile> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        self.get(x, y)
    }

    /// Set the tile at `(x, y)`. Returns `false` if the position is out of bounds.
    pub fn set(&mut self, x: u32, y: u32, tile: Tile) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.tiles[idx] = tile;
                true
            }
            None => false,
        }
    }

    /// Returns `true` if `(x, y)` lies on the outer ring of the grid
    pub fn is_border(&self, x: u32, y: u32) -> bool {
        x == 0 || y == 0 || x + 1 >= self.width || y + 1 >= self.height
    }

    /// Overwrite every border cell with `tile`
    pub fn fill_border(&mut self, tile: Tile) {
        for y in 0..self.height {
            for x in 0..self.width {
                if self.is_border(x, y) {
                    self.set(x, y, tile);
                }
            }
        }
    }

    /// Iterate over rows from top to bottom.
    ///
    /// Always yields `height` rows, so a zero-width grid yields empty rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        let w = self.width as usize;
        (0..self.height as usize).map(move |y| &self.tiles[y * w..(y + 1) * w])
    }

    /// Number of cells holding `tile`
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }
}
