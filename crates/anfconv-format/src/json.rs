//! JSON snapshot of the term model (`.json`).
//!
//! Not consumed by any solver; useful for inspecting what a reader produced
//! and for feeding systems generated by other tools.

use anfconv_base::{Error, Result, System};
use std::io::{Read, Write};

pub const EXTENSION: &str = "json";

/// Parses a system from JSON.
pub fn read<R: Read>(reader: R) -> Result<System> {
    serde_json::from_reader(reader).map_err(|e| Error::Serialization(e.to_string()))
}

/// Writes a system as pretty-printed JSON.
pub fn write<W: Write>(system: &System, dest: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *dest, system)
        .map_err(|e| Error::Serialization(e.to_string()))?;
    writeln!(dest)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anfconv_base::Polynomial;

    #[test]
    fn test_json_round_trip() {
        let system = System::new(
            vec!["a".into(), "b".into()],
            vec![Polynomial::parse("a*b+1"), Polynomial::parse("b")],
        );
        let mut out = Vec::new();
        write(&system, &mut out).unwrap();
        assert_eq!(read(out.as_slice()).unwrap(), system);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(read(&b"{\"variables\": 3}"[..]), Err(Error::Serialization(_))));
    }
}
