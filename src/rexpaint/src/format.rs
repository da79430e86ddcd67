//! On-disk sub-format selection
//!
//! REXPaint files either start directly with the layer count (legacy) or
//! carry a 4-byte version tag in front of it. Which one applies is the
//! caller's choice; [`Format::Detect`] is an explicit opt-in probe.

use serde::{Deserialize, Serialize};

use crate::{Corruption, FIELD_SIZE};

/// Layout of the inflated buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Layer count is the first field
    #[default]
    Legacy,
    /// A version tag precedes the layer count
    Versioned,
    /// Pick per file: REXPaint writes its version tag as a negative i32,
    /// and a layer count is never negative
    Detect,
}

impl Format {
    /// Byte offset of the layer count field
    ///
    /// `Detect` must be resolved first; it is treated as legacy here.
    pub fn base_offset(self) -> usize {
        match self {
            Format::Versioned => FIELD_SIZE,
            Format::Legacy | Format::Detect => 0,
        }
    }

    /// Resolve `Detect` against the inflated buffer
    ///
    /// Concrete formats are returned unchanged. Also checks the buffer is
    /// long enough to hold the layer count under the resolved layout.
    pub(crate) fn resolve(self, data: &[u8]) -> Result<Format, Corruption> {
        let resolved = match self {
            Format::Detect => {
                let first = read_i32(data, 0)?;
                let detected = if first < 0 {
                    Format::Versioned
                } else {
                    Format::Legacy
                };
                tracing::debug!(first, format = ?detected, "detected .xp sub-format");
                detected
            }
            other => other,
        };

        read_i32(data, resolved.base_offset())?;
        Ok(resolved)
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Format::Legacy => "legacy",
            Format::Versioned => "versioned",
            Format::Detect => "detect",
        };
        f.write_str(name)
    }
}

/// Read a little-endian i32 at an absolute offset
pub(crate) fn read_i32(data: &[u8], offset: usize) -> Result<i32, Corruption> {
    let bytes = offset
        .checked_add(FIELD_SIZE)
        .and_then(|end| data.get(offset..end))
        .ok_or(Corruption::Truncated {
            offset,
            needed: FIELD_SIZE,
            available: data.len().saturating_sub(offset),
        })?;

    Ok(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// Read an i32 field that must not be negative
pub(crate) fn read_len(data: &[u8], offset: usize, field: &'static str) -> Result<usize, Corruption> {
    let value = read_i32(data, offset)?;
    usize::try_from(value).map_err(|_| Corruption::NegativeField { field, value })
}
