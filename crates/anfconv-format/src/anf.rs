//! ANF-flavoured DIMACS used by SAT solvers with XOR support (`.sat`, `.anf`).
//!
//! ```text
//! p cnf 3 2
//! x .2 1 2 3 0
//! x 1 T 0
//! ```
//!
//! Each `x` line is one polynomial over positional variables. `.d` introduces
//! a degree-`d` monomial made of the next `d` tokens; any other token is a
//! single variable or the sentinel `T`. The sentinel flips the constant:
//! a clause without it encodes a polynomial with a `1` term, and the other
//! way round.

use crate::options::Options;
use crate::reencode::{decode_system, encode_system};
use crate::text::read_all;
use anfconv_base::{Error, Result, System};
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::{Read, Write};

pub const EXTENSION: &str = "sat";

/// Alternative extension accepted for the same format.
pub const ALT_EXTENSION: &str = "anf";

/// Highest monomial degree the writer encodes.
pub const MAX_WRITE_DEGREE: usize = 2;

/// Largest variable count accepted from a header.
pub const MAX_VARIABLES: usize = 1 << 24;

const HEADER_PREFIX: &str = "p cnf";
const CLAUSE_PREFIX: char = 'x';
const TERMINATOR: &str = "0";

static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("number pattern is valid"));

/// Counts declared by a `p cnf` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub num_vars: usize,
    pub num_clauses: usize,
}

/// Parses an ANF-SAT system from a reader.
pub fn read<R: Read>(reader: R, options: &Options) -> Result<System> {
    parse_str(&read_all(reader)?, options)
}

/// Parses an ANF-SAT system from a string and names its variables
/// `<prefix>1..=<prefix>N`.
pub fn parse_str(input: &str, options: &Options) -> Result<System> {
    let mut lines = input.lines().enumerate().map(|(i, l)| (i + 1, l.trim()));

    let header = match lines.next() {
        Some((_, line)) => parse_header(line)?,
        None => return Err(Error::format(EXTENSION, 1, "missing `p cnf` header")),
    };

    let mut clauses = Vec::new();
    for (n, line) in lines {
        if line.is_empty() || line.starts_with('c') {
            continue;
        }
        clauses.push(parse_clause(line, n, &options.sentinel)?);
    }

    if clauses.len() != header.num_clauses {
        let message = format!(
            "header declares {} clauses, found {}",
            header.num_clauses,
            clauses.len()
        );
        if options.strict_header_counts {
            return Err(Error::format(EXTENSION, 1, message));
        }
        tracing::warn!("{message}");
    }

    tracing::debug!(
        "Loaded ANF-SAT: {} vars, {} clauses",
        header.num_vars,
        clauses.len()
    );
    Ok(decode_system(header.num_vars, &clauses, options))
}

/// Parses `p cnf <vars> <clauses>`.
pub fn parse_header(line: &str) -> Result<Header> {
    if !line.starts_with(HEADER_PREFIX) {
        return Err(Error::format(
            EXTENSION,
            1,
            format!("expected `{HEADER_PREFIX}` header, found `{line}`"),
        ));
    }
    let numbers = NUMBER
        .find_iter(line)
        .map(|m| m.as_str().parse::<usize>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::format(EXTENSION, 1, format!("invalid count: {e}")))?;
    match numbers.as_slice() {
        [num_vars, _, ..] if *num_vars > MAX_VARIABLES => Err(Error::format(
            EXTENSION,
            1,
            format!("{num_vars} variables exceeds the limit of {MAX_VARIABLES}"),
        )),
        [num_vars, num_clauses, ..] => Ok(Header {
            num_vars: *num_vars,
            num_clauses: *num_clauses,
        }),
        _ => Err(Error::format(
            EXTENSION,
            1,
            "header must specify number of variables and clauses",
        )),
    }
}

/// Parses one `x ... 0` line into ` + `-joined positional monomials.
///
/// The sentinel is toggled: every sentinel token is removed, and one is
/// added back when the line held an even number of them.
pub fn parse_clause(line: &str, line_no: usize, sentinel: &str) -> Result<String> {
    let malformed = |message: String| Error::format(EXTENSION, line_no, message);

    let mut raw = line.split_whitespace();
    let first = raw.next().unwrap_or_default();
    let Some(glued) = first.strip_prefix(CLAUSE_PREFIX) else {
        return Err(malformed(
            "can only interpret ANF-style lines starting with `x` and ending with `0`".into(),
        ));
    };
    let mut tokens: Vec<&str> = Some(glued)
        .filter(|t| !t.is_empty())
        .into_iter()
        .chain(raw)
        .collect();
    if tokens.pop() != Some(TERMINATOR) {
        return Err(malformed(
            "can only interpret ANF-style lines starting with `x` and ending with `0`".into(),
        ));
    }

    let mut terms: Vec<String> = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i];
        if let Some(marker) = token.strip_prefix('.') {
            let degree: usize = marker
                .parse()
                .map_err(|_| malformed(format!("invalid degree marker `{token}`")))?;
            if degree == 0 {
                return Err(malformed(format!("invalid degree marker `{token}`")));
            }
            let rest = &tokens[i + 1..];
            if degree > rest.len() {
                return Err(malformed(format!(
                    "error in .{degree} format: not enough arguments"
                )));
            }
            terms.push(rest[..degree].join("*"));
            i += degree + 1;
        } else {
            terms.push(token.to_string());
            i += 1;
        }
    }

    let before = terms.len();
    terms.retain(|t| t != sentinel);
    if (before - terms.len()) % 2 == 0 {
        terms.push(sentinel.to_string());
    }
    Ok(terms.join(" + "))
}

/// Writes `system` as ANF-SAT, renumbering variables by position.
///
/// Fails with [`Error::UnsupportedDegree`] on monomials of more than two
/// factors; the whole system is checked before anything is written.
pub fn write<W: Write>(system: &System, dest: &mut W, options: &Options) -> Result<()> {
    for monomial in system.polynomials.iter().flat_map(|p| p.iter()) {
        let arity = monomial.factors().len();
        if arity > MAX_WRITE_DEGREE {
            return Err(Error::UnsupportedDegree {
                format: EXTENSION,
                monomial: monomial.to_string(),
                degree: arity,
                max: MAX_WRITE_DEGREE,
            });
        }
    }

    let undeclared = system.undeclared_variables();
    if !undeclared.is_empty() {
        tracing::warn!(
            "Variables used but not declared will keep their names: {:?}",
            undeclared
        );
    }

    writeln!(dest, "{HEADER_PREFIX} {} {}", system.num_vars(), system.len())?;
    for literals in &encode_system(system, options) {
        let mut line = String::from(CLAUSE_PREFIX);
        let mut sentinels = 0usize;
        for literal in literals {
            if literal == &options.sentinel {
                sentinels += 1;
            } else if let Some((a, b)) = literal.split_once('*') {
                line.push_str(&format!(" .2 {a} {b}"));
            } else {
                line.push(' ');
                line.push_str(literal);
            }
        }
        if sentinels % 2 == 0 {
            line.push(' ');
            line.push_str(&options.sentinel);
        }
        writeln!(dest, "{line} {TERMINATOR}")?;
    }
    Ok(())
}
