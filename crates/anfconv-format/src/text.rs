//! Line-level helpers shared by the text formats.

use anfconv_base::Result;
use std::io::Read;

/// Reads the whole source into memory.
pub(crate) fn read_all<R: Read>(mut reader: R) -> Result<String> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(content)
}

/// Splits a comma-separated variable declaration.
pub(crate) fn variable_list(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Numbered lines (1-based) with trailing blank lines removed.
pub(crate) fn numbered_lines(content: &str) -> Vec<(usize, &str)> {
    let mut lines: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l))
        .collect();
    while lines.last().is_some_and(|(_, l)| l.trim().is_empty()) {
        lines.pop();
    }
    lines
}
