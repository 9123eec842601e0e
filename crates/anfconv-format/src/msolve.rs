//! msolve native list format (`.ms`).
//!
//! ```text
//! x1,x2
//! 2
//! x1+x2,
//! x1+x2+1
//! ```
//!
//! Line 1 declares the variables, line 2 the field characteristic (only `2`
//! is accepted), then one polynomial per line. Every polynomial but the last
//! carries a trailing comma.

use crate::text::{numbered_lines, read_all, variable_list};
use anfconv_base::{Error, Polynomial, Result, System};
use std::io::{Read, Write};

pub const EXTENSION: &str = "ms";

/// The only characteristic line accepted.
pub const CHARACTERISTIC: &str = "2";

/// Parses an msolve system from a reader.
pub fn read<R: Read>(reader: R) -> Result<System> {
    parse_str(&read_all(reader)?)
}

/// Parses an msolve system from a string.
pub fn parse_str(input: &str) -> Result<System> {
    let lines = numbered_lines(input);
    let mut lines = lines.into_iter();

    let (_, header) = lines
        .next()
        .ok_or_else(|| Error::format(EXTENSION, 1, "missing variable list"))?;
    let variables = variable_list(header);

    match lines.next() {
        Some((_, line)) if line.trim() == CHARACTERISTIC => {}
        Some((n, line)) => {
            return Err(Error::format(
                EXTENSION,
                n,
                format!("characteristic must be {CHARACTERISTIC}, found `{}`", line.trim()),
            ))
        }
        None => return Err(Error::format(EXTENSION, 2, "missing characteristic line")),
    }

    let polynomials: Vec<Polynomial> = lines
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(_, line)| Polynomial::parse(&line.replace(',', "")))
        .collect();

    tracing::debug!(
        "Loaded msolve: {} vars, {} polynomials",
        variables.len(),
        polynomials.len()
    );
    Ok(System::new(variables, polynomials))
}

/// Writes `system` in msolve format. No newline follows the last polynomial.
pub fn write<W: Write>(system: &System, dest: &mut W) -> Result<()> {
    write!(dest, "{}\n{CHARACTERISTIC}\n", system.variables.join(","))?;
    if let Some((last, init)) = system.polynomials.split_last() {
        for poly in init {
            writeln!(dest, "{poly},")?;
        }
        write!(dest, "{last}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anfconv_base::Monomial;

    #[test]
    fn test_parse_msolve() {
        let system = parse_str("x1,x2\n2\nx1+x2\nx1+x2+1").unwrap();
        assert_eq!(system.variables, vec!["x1", "x2"]);
        assert_eq!(system.len(), 2);
        assert_eq!(
            system.polynomials[0].monomials,
            vec![Monomial::product(["x1"]), Monomial::product(["x2"])]
        );
        assert_eq!(
            system.polynomials[1].monomials,
            vec![
                Monomial::product(["x1"]),
                Monomial::product(["x2"]),
                Monomial::One
            ]
        );
    }

    #[test]
    fn test_trailing_commas_are_stripped() {
        let system = parse_str("a,b\n2\na*b+a,\nb+1,\n").unwrap();
        assert_eq!(system.polynomials[0].to_string(), "a*b+a");
        assert_eq!(system.polynomials[1].to_string(), "b+1");
    }

    #[test]
    fn test_rejects_other_characteristic() {
        let err = parse_str("x1\n3\nx1\n").unwrap_err();
        assert!(matches!(err, Error::Format { line: 2, .. }), "{err}");
    }

    #[test]
    fn test_rejects_missing_characteristic() {
        assert!(matches!(parse_str("x1"), Err(Error::Format { .. })));
        assert!(matches!(parse_str(""), Err(Error::Format { line: 1, .. })));
    }

    #[test]
    fn test_write_msolve() {
        let system = parse_str("x1,x2\n2\nx1*x2+x1,\nx2+1").unwrap();
        let mut out = Vec::new();
        write(&system, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "x1,x2\n2\nx1*x2+x1,\nx2+1");
    }

    #[test]
    fn test_write_empty_system() {
        let system = System::new(vec!["a".into()], Vec::new());
        let mut out = Vec::new();
        write(&system, &mut out).unwrap();
        assert_eq!(out, b"a\n2\n");
    }
}
