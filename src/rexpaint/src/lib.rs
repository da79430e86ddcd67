//! REXPaint `.xp` tile map decoder
//!
//! `.xp` files are gzip-compressed, little-endian layered grids of colored
//! characters produced by the REXPaint ASCII art editor.
//!
//! # Format Overview
//!
//! After inflating the gzip stream:
//! - Bytes 0-3: Version tag (versioned sub-format only, negative i32)
//! - Next 4 bytes: Layer count (i32)
//! - Per layer: width (i32), height (i32)
//! - Per layer, per column, per row: a 10-byte tile record
//!   - Bytes 0-3: Character code (i32, low byte significant)
//!   - Bytes 4-6: Foreground R, G, B
//!   - Bytes 7-9: Background R, G, B
//!
//! Tiles are stored column-major on disk and exposed row-major
//! (`map[layer][row][col]`).
//!
//! ## Example
//!
//! ```no_run
//! # fn main() -> rexpaint::Result<()> {
//! let decoder = rexpaint::Decoder::open("level.xp")?;
//! let map = decoder.map()?;
//!
//! for (i, layer) in map.layers().iter().enumerate() {
//!     println!("layer {i}: {}x{}", layer.width(), layer.height());
//! }
//! # Ok(())
//! # }
//! ```

mod decoder;
mod format;
mod tile;

#[cfg(test)]
mod fixture;

pub use decoder::Decoder;
pub use format::Format;
pub use tile::{Color, Tile, TileGrid, TileMap};

/// Size of every integer field in the format
pub const FIELD_SIZE: usize = 4;

/// Size of one layer header (width + height)
pub const LAYER_HEADER_SIZE: usize = 8;

/// Size of one tile record (character field + foreground + background)
pub const TILE_SIZE: usize = 10;

/// Errors from decoding `.xp` data
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unable to read {origin}: {source}")]
    ResourceUnavailable {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt .xp data: {0}")]
    CorruptFormat(#[from] Corruption),

    #[error("Layer {index} out of range (layer count is {count})")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("Decoder has been closed")]
    Disposed,
}

/// Concrete cause behind [`Error::CorruptFormat`]
#[derive(thiserror::Error, Debug)]
pub enum Corruption {
    #[error("gzip decompression failed: {0}")]
    Decompress(#[source] std::io::Error),

    #[error("Data too short at offset {offset}: need {needed} bytes, got {available}")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Negative {field}: {value}")]
    NegativeField { field: &'static str, value: i32 },

    #[error("Size of {0} overflows")]
    Overflow(&'static str),
}

impl Error {
    /// True for errors caused by bad input data
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Error::CorruptFormat(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
