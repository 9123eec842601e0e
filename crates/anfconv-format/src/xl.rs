//! Newline list format used by hpXbred and XL (`.in`).
//!
//! Line 1 declares the variables; every following line is one polynomial.
//! Lines starting with `#` are comments.

use crate::text::{numbered_lines, read_all, variable_list};
use anfconv_base::{Error, Polynomial, Result, System};
use std::io::{Read, Write};

pub const EXTENSION: &str = "in";

/// Marker of a squared term, which hpXbred cannot represent.
pub const SQUARE_MARKER: &str = "^2";

/// Parses a newline-list system from a reader.
pub fn read<R: Read>(reader: R) -> Result<System> {
    parse_str(&read_all(reader)?)
}

/// Parses a newline-list system from a string.
pub fn parse_str(input: &str) -> Result<System> {
    let mut lines = numbered_lines(input).into_iter();
    let (_, header) = lines
        .next()
        .ok_or_else(|| Error::format(EXTENSION, 1, "missing variable list"))?;
    let variables = variable_list(header);

    let polynomials: Vec<Polynomial> = lines
        .filter(|(_, line)| !line.starts_with('#') && !line.trim().is_empty())
        .map(|(_, line)| Polynomial::parse(line))
        .collect();

    tracing::debug!(
        "Loaded newline list: {} vars, {} polynomials",
        variables.len(),
        polynomials.len()
    );
    Ok(System::new(variables, polynomials))
}

/// Writes `system` one polynomial per line.
///
/// Polynomials whose text contains a squared term are dropped. When the last
/// polynomial is dropped, nothing is written for it.
pub fn write<W: Write>(system: &System, dest: &mut W) -> Result<()> {
    writeln!(dest, "{}", system.variables.join(","))?;
    let mut dropped = 0usize;
    if let Some((last, init)) = system.polynomials.split_last() {
        for poly in init {
            let line = poly.to_string();
            if line.contains(SQUARE_MARKER) {
                dropped += 1;
                continue;
            }
            writeln!(dest, "{line}")?;
        }
        let line = last.to_string();
        if line.contains(SQUARE_MARKER) {
            dropped += 1;
        } else {
            write!(dest, "{line}")?;
        }
    }
    if dropped > 0 {
        tracing::warn!("Dropped {dropped} polynomial(s) containing squared terms");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(system: &System) -> String {
        let mut out = Vec::new();
        write(system, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_comments_are_not_polynomials() {
        let system = parse_str("a,b,c\n# generated\na*b+c\n#a+b\nb+1\n").unwrap();
        assert_eq!(system.variables, vec!["a", "b", "c"]);
        assert_eq!(system.len(), 2);
        assert_eq!(system.polynomials[1].to_string(), "b+1");
    }

    #[test]
    fn test_squared_polynomials_are_dropped() {
        let system = parse_str("a,b\na^2+b\na*b+1\nb^2\n").unwrap();
        assert_eq!(system.len(), 3);
        // The final polynomial is squared: the output ends after the newline
        // of the last kept line.
        assert_eq!(render(&system), "a,b\na*b+1\n");
        let reread = parse_str(&render(&system)).unwrap();
        assert_eq!(reread.len(), system.len() - 2);
    }

    #[test]
    fn test_last_line_has_no_newline() {
        let system = parse_str("a\na\na+1").unwrap();
        assert_eq!(render(&system), "a\na\na+1");
    }
}
