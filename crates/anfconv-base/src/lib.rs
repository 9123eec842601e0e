//! # anfconv-base
//!
//! Core types shared by every anfconv crate.
//!
//! - **Term Model**: variables, monomials, polynomials and systems over GF(2)
//! - **Error Types**: the unified error enum used by readers, writers and the CLI

pub mod error;
pub mod system;

pub use error::{Error, Result};
pub use system::{Monomial, Polynomial, System};
