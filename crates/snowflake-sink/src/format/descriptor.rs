//! Caller intent for one format resolution call.

use crate::config::FileFormatConfig;
use crate::error::FormatResult;

/// Identifies the named format object one resolution call targets, plus the
/// provisioning options that apply to it.
///
/// Constructed once per call from the pipeline configuration and immutable
/// thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFormatDescriptor {
    /// Possibly schema-qualified format object name
    /// (e.g. `"analytics.public.records_csv"`).
    pub qualified_name: String,

    /// Field delimiter embedded in the provisioning DDL and used by the
    /// CSV encoder.
    pub delimiter: char,

    /// Whether to create-or-replace the format object instead of requiring
    /// an existing one.
    pub auto_create: bool,

    /// Whether CSV fields are optionally `"`-enclosed; `false` provisions
    /// with `ESCAPE = NONE`.
    pub quote_fields: bool,
}

impl FileFormatDescriptor {
    /// Creates a descriptor with default options: comma delimiter, no
    /// auto-create, quoting enabled.
    #[must_use]
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            delimiter: ',',
            auto_create: false,
            quote_fields: true,
        }
    }

    /// Builds a descriptor for `qualified_name` from the pipeline
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidConfig`](crate::error::FormatError::InvalidConfig)
    /// if the configured delimiter is not a single ASCII character.
    pub fn from_config(
        qualified_name: impl Into<String>,
        config: &FileFormatConfig,
    ) -> FormatResult<Self> {
        Ok(Self {
            qualified_name: qualified_name.into(),
            delimiter: config.delimiter_char()?,
            auto_create: config.auto_create_file_format,
            quote_fields: config.quote_fields,
        })
    }

    /// Sets the field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Enables or disables auto-creation.
    #[must_use]
    pub fn with_auto_create(mut self, enabled: bool) -> Self {
        self.auto_create = enabled;
        self
    }

    /// Enables or disables `"`-quoting of CSV fields.
    #[must_use]
    pub fn with_quote_fields(mut self, enabled: bool) -> Self {
        self.quote_fields = enabled;
        self
    }

    /// Returns the bare object name: the last segment of the possibly
    /// dotted qualified name.
    #[must_use]
    pub fn bare_name(&self) -> &str {
        self.qualified_name
            .rsplit('.')
            .next()
            .unwrap_or(&self.qualified_name)
    }
}
