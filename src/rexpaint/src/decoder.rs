//! `.xp` decoder
//!
//! The whole gzip stream is inflated up front. Every accessor then reads the
//! inflated buffer at absolute offsets, so calls never disturb each other and
//! can be repeated in any order.

use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

use flate2::read::GzDecoder;

use crate::format::{read_i32, read_len};
use crate::{
    Corruption, Error, Format, Result, Tile, TileGrid, TileMap, FIELD_SIZE, LAYER_HEADER_SIZE,
    TILE_SIZE,
};

/// Decoder over a fully inflated `.xp` buffer
#[derive(Debug)]
pub struct Decoder {
    data: Option<Vec<u8>>,
    format: Format,
    layer_count: OnceLock<usize>,
}

impl Decoder {
    /// Open and inflate an `.xp` file using the legacy layout
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, Format::default())
    }

    /// Open and inflate an `.xp` file with an explicit sub-format
    pub fn open_with(path: impl AsRef<Path>, format: Format) -> Result<Self> {
        let path = path.as_ref();
        let compressed = std::fs::read(path).map_err(|source| Error::ResourceUnavailable {
            origin: path.display().to_string(),
            source,
        })?;

        Self::from_bytes_with(&compressed, format)
    }

    /// Inflate everything remaining in `reader`
    ///
    /// Reading starts at the reader's current position; rewind it first if
    /// it has already been consumed.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with(reader, Format::default())
    }

    pub fn from_reader_with<R: Read>(mut reader: R, format: Format) -> Result<Self> {
        let mut compressed = Vec::new();
        reader
            .read_to_end(&mut compressed)
            .map_err(|source| Error::ResourceUnavailable {
                origin: "input stream".to_string(),
                source,
            })?;

        Self::from_bytes_with(&compressed, format)
    }

    /// Inflate gzip-compressed `.xp` bytes
    pub fn from_bytes(compressed: &[u8]) -> Result<Self> {
        Self::from_bytes_with(compressed, Format::default())
    }

    pub fn from_bytes_with(compressed: &[u8], format: Format) -> Result<Self> {
        let data = inflate(compressed)?;
        let format = format.resolve(&data)?;

        tracing::debug!(
            compressed = compressed.len(),
            inflated = data.len(),
            %format,
            "inflated .xp data"
        );

        Ok(Self {
            data: Some(data),
            format,
            layer_count: OnceLock::new(),
        })
    }

    /// Sub-format in use (never `Format::Detect`)
    pub fn format(&self) -> Format {
        self.format
    }

    /// Version tag of the versioned sub-format, `None` for legacy files
    pub fn version(&self) -> Result<Option<i32>> {
        let data = self.data()?;
        match self.format {
            Format::Versioned => Ok(Some(read_i32(data, 0)?)),
            Format::Legacy | Format::Detect => Ok(None),
        }
    }

    /// Size of the inflated buffer
    pub fn inflated_len(&self) -> Result<usize> {
        Ok(self.data()?.len())
    }

    /// Release the inflated buffer; later accessor calls fail with `Disposed`
    pub fn close(&mut self) {
        self.data = None;
        self.layer_count = OnceLock::new();
    }

    pub fn is_closed(&self) -> bool {
        self.data.is_none()
    }

    /// Number of layers (read once, then cached)
    pub fn layer_count(&self) -> Result<usize> {
        let data = self.data()?;
        if let Some(&count) = self.layer_count.get() {
            return Ok(count);
        }

        let count = read_len(data, self.format.base_offset(), "layer count")?;
        Ok(*self.layer_count.get_or_init(|| count))
    }

    /// Width in cells of `layer`
    pub fn layer_width(&self, layer: usize) -> Result<usize> {
        self.check_layer(layer)?;
        Ok(read_len(self.data()?, self.header_offset(layer)?, "width")?)
    }

    /// Height in cells of `layer`
    pub fn layer_height(&self, layer: usize) -> Result<usize> {
        self.check_layer(layer)?;
        let offset = self.header_offset(layer)? + FIELD_SIZE;
        Ok(read_len(self.data()?, offset, "height")?)
    }

    /// Characters of `layer`, without colors or line breaks
    ///
    /// The string runs down each column, then wraps to the top of the next
    /// column. The layer's tile records are located by skipping the records
    /// of every preceding layer, each sized by its own header.
    pub fn layer_as_string(&self, layer: usize) -> Result<String> {
        self.check_layer(layer)?;
        let data = self.data()?;

        let mut offset = self.header_offset(self.layer_count()?)?;
        for preceding in 0..layer {
            let (width, height) = self.dimensions(data, preceding)?;
            offset = offset
                .checked_add(tile_bytes(width, height)?)
                .ok_or(Corruption::Overflow("tile region"))?;
        }

        let (width, height) = self.dimensions(data, layer)?;
        tracing::trace!(layer, offset, width, height, "reading layer characters");

        let region = region(data, offset, tile_bytes(width, height)?)?;
        Ok(region
            .chunks_exact(TILE_SIZE)
            .map(|record| char::from(record[0]))
            .collect())
    }

    /// Decode every layer into a row-major [`TileMap`]
    ///
    /// Dimensions come from layer 0 and apply to all layers. The tile region
    /// is read in one forward pass; either the whole map is returned or an
    /// error is.
    pub fn map(&self) -> Result<TileMap> {
        let data = self.data()?;
        let count = self.layer_count()?;
        if count == 0 {
            return Ok(TileMap::new(0, 0, Vec::new()));
        }

        let (width, height) = self.dimensions(data, 0)?;
        let start = self.header_offset(count)?;
        let total = tile_bytes(width, height)?
            .checked_mul(count)
            .ok_or(Corruption::Overflow("tile region"))?;
        let region = region(data, start, total)?;

        tracing::debug!(layers = count, width, height, start, "decoding tile map");

        let mut records = region.chunks_exact(TILE_SIZE);
        let mut layers = Vec::with_capacity(count);
        for _ in 0..count {
            let mut grid = TileGrid::new(width, height);
            // Column-major on disk, row-major in the grid
            for col in 0..width {
                for row in 0..height {
                    let record = records
                        .next()
                        .and_then(|r| <&[u8; TILE_SIZE]>::try_from(r).ok())
                        .ok_or(Corruption::Truncated {
                            offset: start,
                            needed: total,
                            available: region.len(),
                        })?;
                    grid.set(row, col, Tile::from_record(record));
                }
            }
            layers.push(grid);
        }

        Ok(TileMap::new(width, height, layers))
    }

    fn data(&self) -> Result<&[u8]> {
        self.data.as_deref().ok_or(Error::Disposed)
    }

    fn check_layer(&self, layer: usize) -> Result<()> {
        let count = self.layer_count()?;
        if layer >= count {
            return Err(Error::IndexOutOfRange {
                index: layer,
                count,
            });
        }
        Ok(())
    }

    /// Offset of a layer's header; for `layer == count` this is where tile data starts
    fn header_offset(&self, layer: usize) -> std::result::Result<usize, Corruption> {
        layer
            .checked_mul(LAYER_HEADER_SIZE)
            .and_then(|o| o.checked_add(self.format.base_offset() + FIELD_SIZE))
            .ok_or(Corruption::Overflow("layer header offset"))
    }

    fn dimensions(
        &self,
        data: &[u8],
        layer: usize,
    ) -> std::result::Result<(usize, usize), Corruption> {
        let offset = self.header_offset(layer)?;
        let width = read_len(data, offset, "width")?;
        let height = read_len(data, offset + FIELD_SIZE, "height")?;
        Ok((width, height))
    }
}

fn inflate(compressed: &[u8]) -> std::result::Result<Vec<u8>, Corruption> {
    let mut decoder = GzDecoder::new(compressed);
    let mut data = Vec::new();
    decoder
        .read_to_end(&mut data)
        .map_err(Corruption::Decompress)?;
    Ok(data)
}

fn tile_bytes(width: usize, height: usize) -> std::result::Result<usize, Corruption> {
    width
        .checked_mul(height)
        .and_then(|cells| cells.checked_mul(TILE_SIZE))
        .ok_or(Corruption::Overflow("tile region"))
}

fn region(data: &[u8], offset: usize, len: usize) -> std::result::Result<&[u8], Corruption> {
    offset
        .checked_add(len)
        .and_then(|end| data.get(offset..end))
        .ok_or(Corruption::Truncated {
            offset,
            needed: len,
            available: data.len().saturating_sub(offset),
        })
}
