//! Test fixtures: hand-laid `.xp` payloads, gzipped

use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::{Color, Tile};

/// Build the inflated bytes of a map, column-major per layer
pub fn raw(version: Option<i32>, layers: &[Vec<Vec<Tile>>]) -> Vec<u8> {
    let mut data = Vec::new();
    if let Some(version) = version {
        data.extend_from_slice(&version.to_le_bytes());
    }

    data.extend_from_slice(&(layers.len() as i32).to_le_bytes());
    for rows in layers {
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |r| r.len()) as i32;
        data.extend_from_slice(&width.to_le_bytes());
        data.extend_from_slice(&height.to_le_bytes());
    }

    for rows in layers {
        let width = rows.first().map_or(0, |r| r.len());
        for col in 0..width {
            for row in rows {
                let tile = row[col];
                data.extend_from_slice(&(tile.character_code as i32).to_le_bytes());
                let (fg, bg) = (tile.foreground, tile.background);
                data.extend_from_slice(&[fg.r, fg.g, fg.b, bg.r, bg.g, bg.b]);
            }
        }
    }

    data
}

pub fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

pub fn blank() -> Tile {
    Tile {
        character_code: b' ',
        foreground: Color::new(0, 0, 0),
        background: Color::TRANSPARENT,
    }
}

pub fn layer_of(width: usize, height: usize, fill: Tile) -> Vec<Vec<Tile>> {
    vec![vec![fill; width]; height]
}

/// 10x10 single layer: 'u' top-left, 'A' below it, 'e' bottom-right,
/// everything else a transparent space
pub fn single_layer_rows() -> Vec<Vec<Tile>> {
    let mut rows = layer_of(10, 10, blank());
    rows[0][0] = Tile {
        character_code: b'u',
        foreground: Color::new(0, 255, 0),
        background: Color::new(255, 0, 0),
    };
    rows[1][0] = Tile {
        character_code: b'A',
        foreground: Color::new(255, 255, 255),
        background: Color::new(0, 0, 0),
    };
    rows[9][9] = Tile {
        character_code: b'e',
        foreground: Color::new(255, 255, 0),
        background: Color::new(0, 0, 255),
    };
    rows
}

pub fn single_layer() -> Vec<u8> {
    gzip(&raw(None, &[single_layer_rows()]))
}
