//! # anfconv-format
//!
//! Readers and writers for Boolean polynomial systems over GF(2).
//!
//! Supports:
//! - **msolve** (`.ms`): comma-terminated native list with characteristic line
//! - **hpXbred / XL** (`.in`): newline list with `#` comments
//! - **Magma** (`.magma`): `GaloisField(2)` scripts
//! - **ANF-SAT** (`.sat`, `.anf`): DIMACS-style XOR clauses with degree markers
//! - **JSON** (`.json`): snapshot of the term model

pub mod anf;
pub mod format;
pub mod json;
pub mod magma;
pub mod msolve;
pub mod options;
pub mod reencode;
mod text;
pub mod xl;

pub use format::{convert, Format};
pub use options::Options;
pub use reencode::{decode_system, encode_system, Reencoder};
