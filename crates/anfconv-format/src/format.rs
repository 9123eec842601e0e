//! Extension-based format selection.

use crate::options::Options;
use crate::{anf, json, magma, msolve, xl};
use anfconv_base::{Error, Result, System};
use std::fmt;
use std::io::{Read, Write};
use std::path::Path;

/// A supported interchange format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// msolve native list (`.ms`).
    Msolve,
    /// hpXbred / XL newline list (`.in`).
    Xl,
    /// Magma script (`.magma`).
    Magma,
    /// ANF-SAT (`.sat`, `.anf`).
    Anf,
    /// JSON snapshot of the term model (`.json`).
    Json,
}

impl Format {
    /// All formats, in help-text order.
    pub const ALL: [Format; 5] = [
        Format::Msolve,
        Format::Xl,
        Format::Magma,
        Format::Anf,
        Format::Json,
    ];

    /// Looks up a format by extension token.
    pub fn from_extension(ext: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.extensions().contains(&ext))
            .ok_or_else(|| Error::UnsupportedFormat(ext.to_string()))
    }

    /// Detects the format of a path from everything after the first `.` of
    /// its file name, so `system.tar.ms` yields `tar.ms` and is rejected.
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::Usage(format!("invalid file name: {}", path.display())))?;
        let (_, ext) = name
            .split_once('.')
            .ok_or_else(|| Error::UnsupportedFormat(format!("{name} (no extension)")))?;
        Self::from_extension(ext)
    }

    /// Canonical extension token.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Msolve => msolve::EXTENSION,
            Self::Xl => xl::EXTENSION,
            Self::Magma => magma::EXTENSION,
            Self::Anf => anf::EXTENSION,
            Self::Json => json::EXTENSION,
        }
    }

    /// Every extension token accepted for this format, canonical first.
    #[must_use]
    pub const fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Msolve => &[msolve::EXTENSION],
            Self::Xl => &[xl::EXTENSION],
            Self::Magma => &[magma::EXTENSION],
            Self::Anf => &[anf::EXTENSION, anf::ALT_EXTENSION],
            Self::Json => &[json::EXTENSION],
        }
    }

    /// Human-readable tool name.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Msolve => "Msolve",
            Self::Xl => "hpXbred and XL",
            Self::Magma => "Magma",
            Self::Anf => "SAT Solvers",
            Self::Json => "JSON snapshot",
        }
    }

    /// Parses a system in this format.
    pub fn read<R: Read>(self, reader: R, options: &Options) -> Result<System> {
        match self {
            Self::Msolve => msolve::read(reader),
            Self::Xl => xl::read(reader),
            Self::Magma => magma::read(reader),
            Self::Anf => anf::read(reader, options),
            Self::Json => json::read(reader),
        }
    }

    /// Serializes a system in this format.
    pub fn write<W: Write>(self, system: &System, dest: &mut W, options: &Options) -> Result<()> {
        match self {
            Self::Msolve => msolve::write(system, dest),
            Self::Xl => xl::write(system, dest),
            Self::Magma => magma::write(system, dest),
            Self::Anf => anf::write(system, dest, options),
            Self::Json => json::write(system, dest),
        }
    }

    /// Serializes a system into memory.
    pub fn render(self, system: &System, options: &Options) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.write(system, &mut out, options)?;
        Ok(out)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Reads `input` as `from` and writes it as `to`.
pub fn convert<R: Read>(input: R, from: Format, to: Format, options: &Options) -> Result<Vec<u8>> {
    let system = from.read(input, options)?;
    tracing::info!(
        "Read {} variables and {} polynomials of degree <= {} from .{from} input",
        system.num_vars(),
        system.len(),
        system.max_degree()
    );
    to.render(&system, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_extension_lookup() {
        assert_eq!(Format::from_extension("ms").unwrap(), Format::Msolve);
        assert_eq!(Format::from_extension("in").unwrap(), Format::Xl);
        assert_eq!(Format::from_extension("magma").unwrap(), Format::Magma);
        assert_eq!(Format::from_extension("sat").unwrap(), Format::Anf);
        assert_eq!(Format::from_extension("anf").unwrap(), Format::Anf);
        assert!(matches!(
            Format::from_extension("sobj"),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_canonical_extension_round_trips() {
        for format in Format::ALL {
            assert_eq!(format.extensions()[0], format.extension());
            for ext in format.extensions() {
                assert_eq!(Format::from_extension(ext).unwrap(), format);
            }
        }
    }

    #[test]
    fn test_from_path_uses_file_name() {
        let path = PathBuf::from("./some.dir/system.magma");
        assert_eq!(Format::from_path(&path).unwrap(), Format::Magma);
        assert!(Format::from_path(Path::new("system.tar.ms")).is_err());
        assert!(Format::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn test_convert_msolve_to_magma() {
        let out = convert(
            "a,b\n2\na*b+1,\nb".as_bytes(),
            Format::Msolve,
            Format::Magma,
            &Options::default(),
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("f0 := a*b+1;\nf1 := b;\n"));
        assert!(text.ends_with("PolynomialSystem := [f1,f2];"));
    }
}
