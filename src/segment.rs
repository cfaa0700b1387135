//! Segment extraction - verbatim source text for a line range
//!
//! Independent of parsing: takes a path and a 1-based inclusive line range
//! (typically copied from a `DefinitionRecord`) and returns the lines exactly as
//! they appear on disk, terminators included.

use std::path::Path;

use crate::error::{IndexError, Result};

/// Read lines `start_line..=end_line` (1-based) of a file
///
/// The whole file is read once per call. An inverted or out-of-range request
/// yields an empty string; reading never goes past the end of the file. A
/// `start_line` of 0 is treated as 1.
pub fn get_source_segment(
    file_path: impl AsRef<Path>,
    start_line: u32,
    end_line: u32,
) -> Result<String> {
    let path = file_path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| IndexError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let content = std::str::from_utf8(&bytes).map_err(|source| IndexError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(slice_lines(content, start_line, end_line).to_string())
}

/// Borrow lines `start_line..=end_line` (1-based) out of `content`
pub fn slice_lines(content: &str, start_line: u32, end_line: u32) -> &str {
    let first = start_line.max(1) as usize - 1;
    let last = end_line as usize;
    if last <= first {
        return "";
    }

    let mut offset = 0;
    let mut start_byte = None;
    for (index, line) in content.split_inclusive('\n').enumerate() {
        if index == first {
            start_byte = Some(offset);
        }
        offset += line.len();
        if index + 1 == last {
            break;
        }
    }

    match start_byte {
        Some(start) => &content[start..offset],
        None => "",
    }
}
