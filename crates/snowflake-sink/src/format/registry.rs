//! Encoder registry.
//!
//! Maps a [`FileFormatKind`] to the [`BatchEncoder`] that serializes batches
//! for it. The registry is immutable once built and holds no other state, so
//! concurrent resolutions can share one instance freely.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{FormatError, FormatResult};

use super::csv::{CsvEncoder, CsvEncoderConfig};
use super::kind::FileFormatKind;
use super::parquet::ParquetEncoder;
use super::traits::BatchEncoder;

/// Registry of batch encoders keyed by format kind.
pub struct EncoderRegistry {
    encoders: HashMap<FileFormatKind, Arc<dyn BatchEncoder>>,
}

impl EncoderRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            encoders: HashMap::new(),
        }
    }

    /// Creates a registry with the built-in CSV and Parquet encoders, the
    /// CSV one using the given configuration.
    #[must_use]
    pub fn with_defaults(csv_config: CsvEncoderConfig) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(CsvEncoder::with_config(csv_config)));
        registry.register(Arc::new(ParquetEncoder::new()));
        registry
    }

    /// Registers an encoder under its own kind, replacing any existing one.
    pub fn register(&mut self, encoder: Arc<dyn BatchEncoder>) {
        self.encoders.insert(encoder.kind(), encoder);
    }

    /// Looks up the encoder for a kind.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::InvalidFormat`] if no encoder is registered
    /// for `kind`. Unreachable through [`FileFormatKind::parse`] with a
    /// default registry, but a warehouse-detected kind bypasses parsing and
    /// must still be checked.
    pub fn lookup(&self, kind: FileFormatKind) -> FormatResult<Arc<dyn BatchEncoder>> {
        self.encoders.get(&kind).cloned().ok_or_else(|| {
            FormatError::InvalidFormat(format!("no encoder registered for '{kind}'"))
        })
    }

    /// Returns the kinds with a registered encoder.
    #[must_use]
    pub fn registered_kinds(&self) -> Vec<FileFormatKind> {
        self.encoders.keys().copied().collect()
    }
}

impl Default for EncoderRegistry {
    fn default() -> Self {
        Self::with_defaults(CsvEncoderConfig::default())
    }
}
