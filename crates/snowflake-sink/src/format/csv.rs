//! CSV staging-file encoder implementing [`BatchEncoder`].
//!
//! Serializes Arrow `RecordBatch`es into delimited text matching the
//! provisioned file format: configured delimiter, empty fields for NULL,
//! timestamps rendered to six fractional digits with a literal `Z`, and
//! optional `"`-quoting.

use arrow_array::RecordBatch;
use arrow_cast::display::{ArrayFormatter, FormatOptions};
use csv::{QuoteStyle, WriterBuilder};

use crate::error::{FormatError, FormatResult};

use super::kind::FileFormatKind;
use super::traits::BatchEncoder;

/// Chrono rendering of the provisioned `TIMESTAMP_FORMAT`
/// ([`ddl::SQL_TIMESTAMP_FORMAT`](super::ddl::SQL_TIMESTAMP_FORMAT)).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

/// Configuration for the CSV encoder.
#[derive(Debug, Clone)]
pub struct CsvEncoderConfig {
    /// Field delimiter byte. Default: `b','`.
    pub delimiter: u8,

    /// Whether fields containing the delimiter, quote, or newlines are
    /// `"`-enclosed. When `false`, fields are written raw (matching a file
    /// format provisioned with `ESCAPE = NONE`). Default: `true`.
    pub quote_fields: bool,
}

impl Default for CsvEncoderConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote_fields: true,
        }
    }
}

impl CsvEncoderConfig {
    /// Sets the field delimiter byte.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the field delimiter from a character.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidConfig`] if the character is not a
    /// single byte.
    pub fn with_delimiter_char(self, delimiter: char) -> FormatResult<Self> {
        let byte = u8::try_from(delimiter).map_err(|_| FormatError::InvalidConfig {
            key: "delimiter".into(),
            message: format!("delimiter {delimiter:?} is not a single-byte character"),
        })?;
        Ok(self.with_delimiter(byte))
    }

    /// Enables or disables `"`-quoting.
    #[must_use]
    pub fn with_quote_fields(mut self, enabled: bool) -> Self {
        self.quote_fields = enabled;
        self
    }
}

/// Encodes Arrow `RecordBatch`es into CSV staging-file bytes.
///
/// Rows are newline-terminated with no header row; the bulk-load statement
/// maps fields to columns positionally. NULL values serialize as empty
/// fields, which the provisioned file format reads back as SQL NULL.
#[derive(Debug, Default)]
pub struct CsvEncoder {
    config: CsvEncoderConfig,
}

impl CsvEncoder {
    /// Creates a CSV encoder with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a CSV encoder with custom configuration.
    #[must_use]
    pub fn with_config(config: CsvEncoderConfig) -> Self {
        Self { config }
    }
}

impl BatchEncoder for CsvEncoder {
    fn kind(&self) -> FileFormatKind {
        FileFormatKind::Csv
    }

    fn file_extension(&self) -> &'static str {
        "csv"
    }

    fn encode_batch(&self, batch: &RecordBatch) -> FormatResult<Vec<u8>> {
        if batch.num_rows() == 0 {
            return Ok(Vec::new());
        }

        let options = FormatOptions::default()
            .with_null("")
            .with_timestamp_format(Some(TIMESTAMP_FORMAT))
            .with_timestamp_tz_format(Some(TIMESTAMP_FORMAT));

        let formatters = batch
            .columns()
            .iter()
            .map(|column| ArrayFormatter::try_new(column.as_ref(), &options))
            .collect::<Result<Vec<_>, _>>()?;

        let quote_style = if self.config.quote_fields {
            QuoteStyle::Necessary
        } else {
            QuoteStyle::Never
        };
        let mut writer = WriterBuilder::new()
            .delimiter(self.config.delimiter)
            .quote_style(quote_style)
            .from_writer(Vec::new());

        let mut fields: Vec<String> = Vec::with_capacity(batch.num_columns());
        for row in 0..batch.num_rows() {
            fields.clear();
            for formatter in &formatters {
                fields.push(formatter.value(row).try_to_string()?);
            }
            writer
                .write_record(&fields)
                .map_err(|e| FormatError::Encode(format!("csv write: {e}")))?;
        }

        writer
            .into_inner()
            .map_err(|e| FormatError::Encode(format!("csv flush: {e}")))
    }
}
