//! Core data structures for cavemap
//!
//! This crate provides the fundamental types for representing a binary tile map:
//! - `Tile` - A single cell, either `Wall` or `Floor`
//! - `TileGrid` - A fixed-size, row-major grid of tiles with bounds-checked access

mod grid;
mod tile;

pub use grid::TileGrid;
pub use tile::Tile;
