//! Source locations attached to operations.
//!
//! A location is either a concrete `file:line:col` site in the program's
//! source, or `Unknown` when the producer could not preserve one. Locations
//! take part in operation identity: profiling data is resolved by qualified
//! name plus location.
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::EnumIs;
use thiserror::Error;

/// Source location of an operation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIs)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Location {
    /// A concrete site: file path, 1-based line, 1-based column.
    File {
        file: Box<str>,
        line: u32,
        col: u32,
    },
    /// No location information was preserved for the operation.
    Unknown,
}

impl Location {
    pub fn file(file: impl Into<String>, line: u32, col: u32) -> Self {
        Location::File {
            file: file.into().into_boxed_str(),
            line,
            col,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("malformed source location `{text}`: expected `file:line:col` or `?`")]
pub struct ParseLocationError {
    pub text: String,
}

impl FromStr for Location {
    type Err = ParseLocationError;

    /// Parse `file:line:col` (the last two `:`-separated fields are line and
    /// column, so file paths containing `:` survive) or `?` for unknown.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "?" {
            return Ok(Location::Unknown);
        }

        let malformed = || ParseLocationError { text: s.to_string() };

        let (rest, col) = s.rsplit_once(':').ok_or_else(malformed)?;
        let (file, line) = rest.rsplit_once(':').ok_or_else(malformed)?;
        if file.is_empty() {
            return Err(malformed());
        }

        let line: u32 = line.parse().map_err(|_| malformed())?;
        let col: u32 = col.parse().map_err(|_| malformed())?;
        Ok(Location::file(file, line, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_file_line_col() {
        let loc: Location = "kernels/gemm.mx:10:3".parse().expect("valid location");
        assert_eq!(loc, Location::file("kernels/gemm.mx", 10, 3));
    }

    #[test]
    fn parses_unknown_marker() {
        let loc: Location = "?".parse().expect("valid location");
        assert!(loc.is_unknown());
    }

    #[test]
    fn path_with_colons_keeps_trailing_fields_as_line_and_col() {
        let loc: Location = "C:/src/gemm.mx:7:1".parse().expect("valid location");
        assert_eq!(loc, Location::file("C:/src/gemm.mx", 7, 1));
    }

    #[test]
    fn rejects_missing_or_non_numeric_fields() {
        assert!("gemm.mx".parse::<Location>().is_err());
        assert!("gemm.mx:10".parse::<Location>().is_err());
        assert!("gemm.mx:ten:3".parse::<Location>().is_err());
        assert!(":10:3".parse::<Location>().is_err());
    }
}
