//! Decoded tile model
//!
//! Grids are row-major: `grid[row][col]`, and a map indexes layers first,
//! so `map[layer][row][col]` addresses a single tile.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::{FIELD_SIZE, TILE_SIZE};

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Background REXPaint treats as transparent (magenta)
    pub const TRANSPARENT: Color = Color::new(255, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// One cell: a character code with foreground and background colors
///
/// The character code is CP437-like: REXPaint uses libtcod-style fonts where
/// the ASCII control range maps to glyphs. Printable ASCII is what you expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Tile {
    pub character_code: u8,
    pub foreground: Color,
    pub background: Color,
}

impl Tile {
    /// Decode a 10-byte tile record
    ///
    /// The character field is a little-endian i32; only its low byte is kept.
    pub(crate) fn from_record(record: &[u8; TILE_SIZE]) -> Self {
        let fg = FIELD_SIZE;
        let bg = FIELD_SIZE + 3;
        Self {
            character_code: record[0],
            foreground: Color::new(record[fg], record[fg + 1], record[fg + 2]),
            background: Color::new(record[bg], record[bg + 1], record[bg + 2]),
        }
    }

    /// Character code as a `char` (byte value taken as a code point)
    pub fn ch(&self) -> char {
        char::from(self.character_code)
    }

    /// True when the background is the transparency sentinel
    pub fn is_transparent(&self) -> bool {
        self.background == Color::TRANSPARENT
    }

    pub fn foreground_red(&self) -> u8 {
        self.foreground.r
    }

    pub fn foreground_green(&self) -> u8 {
        self.foreground.g
    }

    pub fn foreground_blue(&self) -> u8 {
        self.foreground.b
    }

    pub fn background_red(&self) -> u8 {
        self.background.r
    }

    pub fn background_green(&self) -> u8 {
        self.background.g
    }

    pub fn background_blue(&self) -> u8 {
        self.background.b
    }
}

/// One layer of tiles, row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl TileGrid {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::default(); width * height],
        }
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, tile: Tile) {
        self.tiles[row * self.width + col] = tile;
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Tile at `(row, col)`, or `None` outside the grid
    pub fn tile(&self, row: usize, col: usize) -> Option<&Tile> {
        if row < self.height && col < self.width {
            self.tiles.get(row * self.width + col)
        } else {
            None
        }
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        // A zero-width grid holds no tiles, so the chunk size only has to be non-zero
        self.tiles.chunks_exact(self.width.max(1))
    }

    /// All tiles in row-major order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

impl Index<usize> for TileGrid {
    type Output = [Tile];

    /// Row slice, so `grid[row][col]` reads naturally
    fn index(&self, row: usize) -> &[Tile] {
        assert!(row < self.height, "row {row} out of range for height {}", self.height);
        let start = row * self.width;
        &self.tiles[start..start + self.width]
    }
}

/// Every layer of a decoded file, in file order
///
/// All layers share the width and height of layer 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileMap {
    width: usize,
    height: usize,
    layers: Vec<TileGrid>,
}

impl TileMap {
    pub(crate) fn new(width: usize, height: usize, layers: Vec<TileGrid>) -> Self {
        Self {
            width,
            height,
            layers,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn layers(&self) -> &[TileGrid] {
        &self.layers
    }

    pub fn layer(&self, index: usize) -> Option<&TileGrid> {
        self.layers.get(index)
    }

    /// Topmost tile at `(row, col)` whose background is not transparent
    ///
    /// Layers later in the file are drawn over earlier ones.
    pub fn visible_tile(&self, row: usize, col: usize) -> Option<&Tile> {
        self.layers
            .iter()
            .rev()
            .filter_map(|layer| layer.tile(row, col))
            .find(|tile| !tile.is_transparent())
    }
}

impl Index<usize> for TileMap {
    type Output = TileGrid;

    fn index(&self, layer: usize) -> &TileGrid {
        &self.layers[layer]
    }
}
