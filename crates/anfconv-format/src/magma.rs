//! Magma polynomial system scripts (`.magma`).
//!
//! ```text
//! F := GaloisField(2);
//! Field<x1,x2> := BooleanPolynomialRing(2, "grevlex");
//! f0 := x1*x2+1;
//! f1 := x1+x2;
//! PolynomialSystem := [f1,f2];
//! ```
//!
//! Assignments are named from `f0`, while the closing list starts at `f1`.
//! Existing Magma tooling expects exactly this shift.

use crate::text::{numbered_lines, read_all, variable_list};
use anfconv_base::{Error, Polynomial, Result, System};
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::{Read, Write};

pub const EXTENSION: &str = "magma";

/// Monomial ordering keyword of the ring declaration.
pub const ORDERING: &str = "grevlex";

static FIELD_DECL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*\w+\s*:=\s*GaloisField\s*\(\s*2\s*\)\s*;\s*$").expect("field pattern is valid")
});

static RING_VARIABLES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<(.*?)>").expect("ring pattern is valid"));

static ASSIGNMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":=\s*(.*?)(?:;|$)").expect("assignment pattern is valid"));

/// Parses a Magma system from a reader.
pub fn read<R: Read>(reader: R) -> Result<System> {
    parse_str(&read_all(reader)?)
}

/// Parses a Magma system from a string.
///
/// A wrong field declaration is only warned about. The last line, the
/// system listing, is never parsed.
pub fn parse_str(input: &str) -> Result<System> {
    let lines = numbered_lines(input);
    let field = lines.first().map_or("", |(_, l)| *l);
    let ring = match lines.get(1) {
        Some((_, line)) => *line,
        None => return Err(Error::format(EXTENSION, 2, "missing ring declaration")),
    };

    if !FIELD_DECL.is_match(field) || !ring.contains("BooleanPolynomialRing") {
        tracing::warn!(
            "File format .magma not correct on the first line, expected a GF(2) boolean ring"
        );
    }

    let variables = parse_ring_variables(ring)
        .ok_or_else(|| Error::format(EXTENSION, 2, "ring declaration has no <...> variable list"))?;

    let body = if lines.len() > 2 { &lines[2..lines.len() - 1] } else { &[][..] };
    let mut polynomials = Vec::with_capacity(body.len());
    for (n, line) in body {
        match parse_assignment(line) {
            Some(expr) => polynomials.push(Polynomial::parse(expr)),
            None => tracing::debug!("Skipping line {n}: no assignment"),
        }
    }

    tracing::debug!(
        "Loaded Magma: {} vars, {} polynomials",
        variables.len(),
        polynomials.len()
    );
    Ok(System::new(variables, polynomials))
}

/// Variables between the first pair of angle brackets.
fn parse_ring_variables(line: &str) -> Option<Vec<String>> {
    RING_VARIABLES
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| variable_list(m.as_str()))
}

/// Right-hand side of `name := expr;`.
fn parse_assignment(line: &str) -> Option<&str> {
    ASSIGNMENT
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

/// Writes `system` as a Magma script.
pub fn write<W: Write>(system: &System, dest: &mut W) -> Result<()> {
    writeln!(dest, "F := GaloisField(2);")?;
    writeln!(
        dest,
        "Field<{}> := BooleanPolynomialRing({}, \"{ORDERING}\");",
        system.variables.join(","),
        system.num_vars()
    )?;
    for (i, poly) in system.polynomials.iter().enumerate() {
        writeln!(dest, "f{i} := {poly};")?;
    }
    let listing = (1..=system.len())
        .map(|i| format!("f{i}"))
        .collect::<Vec<_>>()
        .join(",");
    write!(dest, "PolynomialSystem := [{listing}];")?;
    Ok(())
}
