//! Parquet staging-file encoder implementing [`BatchEncoder`].
//!
//! Serializes an Arrow `RecordBatch` into one self-contained Parquet file
//! (footer included) ready for staging, using `ArrowWriter<Vec<u8>>`.

use arrow_array::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::{EnabledStatistics, WriterProperties};

use crate::error::{FormatError, FormatResult};

use super::kind::FileFormatKind;
use super::traits::BatchEncoder;

/// Configuration for the Parquet encoder.
#[derive(Debug, Clone)]
pub struct ParquetEncoderConfig {
    /// Compression codec (default: Snappy).
    pub compression: Compression,

    /// Maximum rows per row group (default: `1_000_000`).
    pub max_row_group_size: usize,

    /// Whether to write column statistics (default: true).
    pub write_statistics: bool,
}

impl Default for ParquetEncoderConfig {
    fn default() -> Self {
        Self {
            compression: Compression::SNAPPY,
            max_row_group_size: 1_000_000,
            write_statistics: true,
        }
    }
}

impl ParquetEncoderConfig {
    /// Sets the compression codec.
    #[must_use]
    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    /// Sets the maximum rows per row group.
    #[must_use]
    pub fn with_max_row_group_size(mut self, size: usize) -> Self {
        self.max_row_group_size = size;
        self
    }

    /// Enables or disables column statistics.
    #[must_use]
    pub fn with_statistics(mut self, enabled: bool) -> Self {
        self.write_statistics = enabled;
        self
    }
}

/// Encodes Arrow `RecordBatch`es into Parquet staging-file bytes.
#[derive(Debug, Default)]
pub struct ParquetEncoder {
    config: ParquetEncoderConfig,
}

impl ParquetEncoder {
    /// Creates a Parquet encoder with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a Parquet encoder with custom configuration.
    #[must_use]
    pub fn with_config(config: ParquetEncoderConfig) -> Self {
        Self { config }
    }
}

impl BatchEncoder for ParquetEncoder {
    fn kind(&self) -> FileFormatKind {
        FileFormatKind::Parquet
    }

    fn file_extension(&self) -> &'static str {
        "parquet"
    }

    fn encode_batch(&self, batch: &RecordBatch) -> FormatResult<Vec<u8>> {
        if batch.num_rows() == 0 {
            return Ok(Vec::new());
        }

        let mut props = WriterProperties::builder()
            .set_compression(self.config.compression)
            .set_max_row_group_size(self.config.max_row_group_size);
        if !self.config.write_statistics {
            props = props.set_statistics_enabled(EnabledStatistics::None);
        }

        let mut buf = Vec::new();
        let mut writer = ArrowWriter::try_new(&mut buf, batch.schema(), Some(props.build()))
            .map_err(|e| FormatError::Encode(format!("parquet writer init: {e}")))?;

        writer
            .write(batch)
            .map_err(|e| FormatError::Encode(format!("parquet write: {e}")))?;
        writer
            .close()
            .map_err(|e| FormatError::Encode(format!("parquet close: {e}")))?;

        Ok(buf)
    }
}
