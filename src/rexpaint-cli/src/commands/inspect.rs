//! Read-only inspection commands (`info`, `text`)

use anyhow::Result;
use rexpaint::Format;
use std::path::Path;

use super::{open, printable};

/// Print layer count and the dimensions of every layer
pub fn info(input: &Path, format: Format) -> Result<()> {
    let decoder = open(input, format)?;

    println!("File: {}", input.display());
    println!("Format: {}", decoder.format());
    if let Some(version) = decoder.version()? {
        println!("Version: {}", version);
    }

    let count = decoder.layer_count()?;
    println!("Layers: {}", count);
    for layer in 0..count {
        println!(
            "  Layer {}: {}x{}",
            layer,
            decoder.layer_width(layer)?,
            decoder.layer_height(layer)?
        );
    }

    Ok(())
}

/// Print one layer's characters as rows
pub fn text(input: &Path, layer: usize, format: Format) -> Result<()> {
    let decoder = open(input, format)?;
    let height = decoder.layer_height(layer)?;
    let characters = decoder.layer_as_string(layer)?;

    for row in columns_to_rows(&characters, height) {
        println!("{}", row);
    }

    Ok(())
}

/// Re-wrap a column-major character string into display rows
pub(crate) fn columns_to_rows(characters: &str, height: usize) -> Vec<String> {
    let chars: Vec<char> = characters.chars().collect();
    let mut rows = vec![String::new(); height];

    if height == 0 {
        return rows;
    }

    for column in chars.chunks(height) {
        for (row, &ch) in column.iter().enumerate() {
            rows[row].push(printable(ch));
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testutil::write_xp;

    #[test]
    fn test_columns_to_rows() {
        // Two columns of three: "abc" then "def"
        assert_eq!(columns_to_rows("abcdef", 3), vec!["ad", "be", "cf"]);
        assert!(columns_to_rows("", 0).is_empty());
        assert_eq!(columns_to_rows("", 2), vec!["", ""]);
    }

    #[test]
    fn test_commands_run_on_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.xp");
        write_xp(&path, 2, 2, b"abcd");

        info(&path, Format::Legacy).unwrap();
        text(&path, 0, Format::Legacy).unwrap();

        let err = text(&path, 3, Format::Legacy).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<rexpaint::Error>(),
            Some(rexpaint::Error::IndexOutOfRange { index: 3, count: 1 })
        ));
    }
}
