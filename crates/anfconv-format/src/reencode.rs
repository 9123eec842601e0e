//! Variable re-encoding at the ANF-SAT boundary.
//!
//! The ANF-SAT format names variables by 1-based position and marks the
//! constant term with a sentinel token. Encoding maps declared names to
//! positions; decoding maps positions to synthetic names.
//!
//! Every rewrite is a single left-to-right pass over the identifier tokens of
//! a literal, looking each token up in one combined map. Tokens are maximal
//! runs of characters other than whitespace and the operators `+`, `*`, `^`;
//! an exponent such as `^2` is its own token and never renamed. A variable
//! `x1` therefore never touches `x12`, and `x1 -> 1` followed by
//! `1 -> T` cannot cascade.

use crate::options::Options;
use anfconv_base::{Monomial, Polynomial, System};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::collections::HashMap;

static TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\^\d+|[^\s+*^]+").expect("token pattern is valid"));

/// Where a token's replacement comes from.
#[derive(Debug, Clone)]
enum Mapping {
    /// Declared names to positions, plus `1` to the sentinel.
    Names(HashMap<String, String>),
    /// Positions `1..=num_vars` to `<prefix><n>`, plus the sentinel to `1`.
    /// Resolved per token, so a large header costs nothing up front.
    Positions {
        num_vars: usize,
        prefix: String,
        sentinel: String,
    },
}

/// A combined whole-token rename map.
#[derive(Debug, Clone)]
pub struct Reencoder {
    mapping: Mapping,
}

impl Reencoder {
    /// Names to positions, with the constant `1` mapped to the sentinel.
    #[must_use]
    pub fn to_positional(variables: &[String], options: &Options) -> Self {
        let mut map: HashMap<String, String> = variables
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), (i + 1).to_string()))
            .collect();
        map.insert("1".to_string(), options.sentinel.clone());
        Self {
            mapping: Mapping::Names(map),
        }
    }

    /// Positions `1..=num_vars` to synthetic names, sentinel back to `1`.
    #[must_use]
    pub fn from_positional(num_vars: usize, options: &Options) -> Self {
        Self {
            mapping: Mapping::Positions {
                num_vars,
                prefix: options.synthetic_prefix.clone(),
                sentinel: options.sentinel.clone(),
            },
        }
    }

    fn lookup(&self, token: &str) -> Option<String> {
        match &self.mapping {
            Mapping::Names(map) => map.get(token).cloned(),
            Mapping::Positions {
                num_vars,
                prefix,
                sentinel,
            } => {
                if token == sentinel {
                    return Some("1".to_string());
                }
                // Only canonical decimals: `01` is not position 1.
                if token.starts_with('0') || !token.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                token
                    .parse::<usize>()
                    .ok()
                    .filter(|n| (1..=*num_vars).contains(n))
                    .map(|n| format!("{prefix}{n}"))
            }
        }
    }

    /// Applies the map to every whole token of `literal` in one pass.
    #[must_use]
    pub fn rewrite<'t>(&self, literal: &'t str) -> Cow<'t, str> {
        TOKEN.replace_all(literal, |caps: &Captures<'_>| {
            let token = &caps[0];
            self.lookup(token).unwrap_or_else(|| token.to_string())
        })
    }

    /// Rewritten text of a single monomial.
    #[must_use]
    pub fn encode_monomial(&self, monomial: &Monomial) -> String {
        self.rewrite(&monomial.to_string()).into_owned()
    }
}

/// Forward pass: names to positions, constant to sentinel.
///
/// Returns one rewritten literal per monomial, per polynomial.
#[must_use]
pub fn encode_system(system: &System, options: &Options) -> Vec<Vec<String>> {
    let encoder = Reencoder::to_positional(&system.variables, options);
    system
        .polynomials
        .iter()
        .map(|poly| poly.iter().map(|m| encoder.encode_monomial(m)).collect())
        .collect()
}

/// Reverse pass: positional polynomial texts to a named system.
///
/// Each text is rewritten, then split on `+` with blank fragments dropped.
pub fn decode_system<S: AsRef<str>>(
    num_vars: usize,
    polynomials: &[S],
    options: &Options,
) -> System {
    let decoder = Reencoder::from_positional(num_vars, options);
    let variables = (1..=num_vars)
        .map(|i| format!("{}{}", options.synthetic_prefix, i))
        .collect();
    let polynomials = polynomials
        .iter()
        .map(|text| Polynomial::parse(&decoder.rewrite(text.as_ref())))
        .collect();
    System::new(variables, polynomials)
}
