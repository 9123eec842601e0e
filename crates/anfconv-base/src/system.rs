//! In-memory representation of a Boolean polynomial system.
//!
//! Polynomials are sums over GF(2), so a polynomial is just the list of its
//! monomials. Order is kept as read so that writers are deterministic.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// A single additive term: the constant `1` or a product of variables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Monomial {
    /// The multiplicative identity.
    One,
    /// Product of variable factors, in source order. Factors are kept as
    /// text so that powers such as `x1^2` survive a conversion untouched.
    Product(Vec<String>),
}

impl Monomial {
    /// Parses a monomial from text such as `x1*x2` or `1`.
    ///
    /// Returns `None` for blank input.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        if text == "1" {
            return Some(Self::One);
        }
        let factors = text
            .split('*')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect::<Vec<_>>();
        if factors.is_empty() {
            None
        } else {
            Some(Self::Product(factors))
        }
    }

    /// Builds a product monomial from its factors.
    pub fn product<I, S>(factors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Product(factors.into_iter().map(Into::into).collect())
    }

    /// Whether this is the constant term.
    #[must_use]
    pub fn is_one(&self) -> bool {
        matches!(self, Self::One)
    }

    /// Variable factors of the monomial (empty for the constant).
    #[must_use]
    pub fn factors(&self) -> &[String] {
        match self {
            Self::One => &[],
            Self::Product(factors) => factors,
        }
    }

    /// Number of distinct variable factors.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.factors().iter().collect::<HashSet<_>>().len()
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => f.write_str("1"),
            Self::Product(factors) => f.write_str(&factors.join("*")),
        }
    }
}

/// A sum (XOR) of monomials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polynomial {
    pub monomials: Vec<Monomial>,
}

impl Polynomial {
    /// Creates a polynomial from already parsed monomials.
    #[must_use]
    pub fn new(monomials: Vec<Monomial>) -> Self {
        Self { monomials }
    }

    /// Parses `+`-separated monomials, dropping empty fragments.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::from_terms(text.split('+'))
    }

    /// Parses each term with [`Monomial::parse`], dropping blank ones.
    pub fn from_terms<'a, I>(terms: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            monomials: terms.into_iter().filter_map(Monomial::parse).collect(),
        }
    }

    /// Number of monomials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.monomials.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.monomials.is_empty()
    }

    /// Whether the constant `1` is one of the terms.
    #[must_use]
    pub fn has_constant(&self) -> bool {
        self.monomials.iter().any(Monomial::is_one)
    }

    /// Highest monomial degree, 0 for an empty or constant polynomial.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.monomials.iter().map(Monomial::degree).max().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Monomial> {
        self.monomials.iter()
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, monomial) in self.monomials.iter().enumerate() {
            if i > 0 {
                f.write_str("+")?;
            }
            write!(f, "{monomial}")?;
        }
        Ok(())
    }
}

impl FromIterator<Monomial> for Polynomial {
    fn from_iter<T: IntoIterator<Item = Monomial>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// An ordered list of variables and the polynomials over them.
///
/// Variable order matters: it fixes positional indices in the ANF-SAT
/// format and the ring declaration order in Magma output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct System {
    pub variables: Vec<String>,
    pub polynomials: Vec<Polynomial>,
}

impl System {
    #[must_use]
    pub fn new(variables: Vec<String>, polynomials: Vec<Polynomial>) -> Self {
        Self {
            variables,
            polynomials,
        }
    }

    /// Number of declared variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.variables.len()
    }

    /// Number of polynomials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.polynomials.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polynomials.is_empty()
    }

    /// Highest degree over all polynomials.
    #[must_use]
    pub fn max_degree(&self) -> usize {
        self.polynomials
            .iter()
            .map(Polynomial::degree)
            .max()
            .unwrap_or(0)
    }

    /// Factor names used in monomials but missing from the variable list.
    ///
    /// Powers are reduced to their base, so `x1^2` counts as `x1`.
    #[must_use]
    pub fn undeclared_variables(&self) -> BTreeSet<String> {
        let declared: HashSet<&str> = self.variables.iter().map(String::as_str).collect();
        self.polynomials
            .iter()
            .flat_map(Polynomial::iter)
            .flat_map(Monomial::factors)
            .map(|factor| factor.split('^').next().unwrap_or(factor).trim())
            .filter(|name| !declared.contains(name))
            .map(str::to_string)
            .collect()
    }
}
