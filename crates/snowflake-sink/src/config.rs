//! File-format configuration.
//!
//! [`FileFormatConfig`] enumerates every option the format subsystem reads,
//! with its default. Parsed from the pipeline's connection configuration or
//! constructed programmatically.

use serde::{Deserialize, Serialize};

use crate::error::{FormatError, FormatResult};

/// The two-character escape sequence recognized as the ASCII unit separator.
///
/// A connection config cannot carry the raw 0x1F control character, so the
/// literal text `\x1F` stands in for it and is translated before use. No
/// other delimiter value is transformed.
pub const UNIT_SEPARATOR_ESCAPE: &str = "\\x1F";

fn default_delimiter() -> String {
    ",".to_string()
}

fn default_quote_fields() -> bool {
    true
}

/// Configuration consumed by the format subsystem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileFormatConfig {
    /// Whether to provision (create-or-replace) the staging file format
    /// instead of detecting an existing one. Default: `false`.
    #[serde(default)]
    pub auto_create_file_format: bool,

    /// Field delimiter for CSV staging files. Default: `","`.
    ///
    /// The sequence [`UNIT_SEPARATOR_ESCAPE`] is translated to the literal
    /// 0x1F control character.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Whether CSV fields are optionally `"`-enclosed in the provisioned
    /// file format. When `false`, the format is created with `ESCAPE = NONE`
    /// and the encoder never quotes. Default: `true`.
    #[serde(default = "default_quote_fields")]
    pub quote_fields: bool,
}

impl Default for FileFormatConfig {
    fn default() -> Self {
        Self {
            auto_create_file_format: false,
            delimiter: default_delimiter(),
            quote_fields: default_quote_fields(),
        }
    }
}

impl FileFormatConfig {
    /// Enables or disables auto-creation of the file format.
    #[must_use]
    pub fn with_auto_create(mut self, enabled: bool) -> Self {
        self.auto_create_file_format = enabled;
        self
    }

    /// Sets the field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Enables or disables `"`-quoting of CSV fields.
    #[must_use]
    pub fn with_quote_fields(mut self, enabled: bool) -> Self {
        self.quote_fields = enabled;
        self
    }

    /// Returns the configured delimiter as a single character, translating
    /// [`UNIT_SEPARATOR_ESCAPE`] to the 0x1F control character.
    ///
    /// The returned character is guaranteed to be ASCII.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidConfig`] if the value is not a single
    /// ASCII character after translation.
    pub fn delimiter_char(&self) -> FormatResult<char> {
        let raw: &str = if self.delimiter == UNIT_SEPARATOR_ESCAPE {
            "\u{1F}"
        } else {
            &self.delimiter
        };

        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii() => Ok(c),
            _ => Err(FormatError::InvalidConfig {
                key: "delimiter".into(),
                message: format!(
                    "expected a single ASCII character, got {:?}",
                    self.delimiter
                ),
            }),
        }
    }
}
