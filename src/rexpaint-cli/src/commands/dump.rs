//! Full map dump (`dump`)

use anyhow::{Context, Result};
use rexpaint::{Format, TileMap};
use std::fs;
use std::path::Path;

use super::{open, printable};

/// Decode every layer and write it as text or JSON
pub fn handle(input: &Path, json: bool, output: Option<&Path>, format: Format) -> Result<()> {
    let decoder = open(input, format)?;
    let map = decoder.map()?;

    tracing::info!(
        layers = map.layer_count(),
        width = map.width(),
        height = map.height(),
        "decoded map"
    );

    let rendered = if json {
        serde_json::to_string_pretty(&map).context("Failed to serialize map")?
    } else {
        render_text(&map)
    };

    match output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Plain character grid per layer, colors dropped
fn render_text(map: &TileMap) -> String {
    let mut out = String::new();

    for (index, layer) in map.layers().iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "Layer {} ({}x{})\n",
            index,
            layer.width(),
            layer.height()
        ));
        for row in layer.rows() {
            out.extend(row.iter().map(|tile| printable(tile.ch())));
            out.push('\n');
        }
    }

    out
}
