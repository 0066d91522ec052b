//! The closed set of supported staging file formats.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FormatError, FormatResult};

/// A staging file format supported for bulk load.
///
/// The member set is fixed at build time; a kind string outside it — whether
/// caller-supplied or reported by the warehouse — is a fatal
/// [`FormatError::InvalidFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormatKind {
    /// Delimited text staging files.
    Csv,
    /// Parquet staging files.
    Parquet,
}

impl FileFormatKind {
    /// Returns the canonical lowercase literal for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FileFormatKind::Csv => "csv",
            FileFormatKind::Parquet => "parquet",
        }
    }

    /// Returns the ordered literals of all supported kinds, for diagnostics
    /// and error messages.
    #[must_use]
    pub const fn values() -> &'static [&'static str] {
        &["csv", "parquet"]
    }

    /// Parses a kind string, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidFormat`] naming the offending string
    /// and the supported literals.
    pub fn parse(raw: &str) -> FormatResult<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "csv" => Ok(FileFormatKind::Csv),
            "parquet" => Ok(FileFormatKind::Parquet),
            _ => Err(FormatError::InvalidFormat(format!(
                "'{raw}', expected one of: {}",
                Self::values().join(", ")
            ))),
        }
    }
}

impl fmt::Display for FileFormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileFormatKind {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
