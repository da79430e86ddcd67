//! Command handlers

pub mod configure;
pub mod dump;
pub mod inspect;

use anyhow::{Context, Result};
use rexpaint::{Decoder, Format};
use std::path::Path;

/// Open a file for decoding, with the path in the error context
pub(crate) fn open(input: &Path, format: Format) -> Result<Decoder> {
    let decoder = Decoder::open_with(input, format)
        .with_context(|| format!("Failed to load {}", input.display()))?;
    tracing::debug!(path = %input.display(), format = %decoder.format(), "opened .xp file");
    Ok(decoder)
}

/// Character for terminal display; control codes become '.'
pub(crate) fn printable(ch: char) -> char {
    if ch.is_control() {
        '.'
    } else {
        ch
    }
}
