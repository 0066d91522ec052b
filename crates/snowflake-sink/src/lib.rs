//! # Snowflake Sink
//!
//! File-format resolution and staging encoders for bulk-loading change-stream
//! records into Snowflake.
//!
//! Before any batch is staged and `COPY`-loaded, the pipeline resolves the
//! named warehouse file format it will serialize against:
//!
//! - [`format::FormatResolver`] — reconciles caller intent, the
//!   `auto_create_file_format` flag, and the live warehouse state into a
//!   single `(kind, encoder)` binding, provisioning the format object when
//!   asked to
//! - [`format::EncoderRegistry`] — pure lookup from
//!   [`format::FileFormatKind`] to a [`format::BatchEncoder`] handle
//! - [`format::CsvEncoder`] / [`format::ParquetEncoder`] — serialize Arrow
//!   `RecordBatch`es into staging-file bytes
//!
//! Warehouse access goes through the [`executor::QueryExecutor`] trait; the
//! surrounding pipeline supplies the session, credentials, retries, and the
//! actual upload/`COPY` machinery.

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod config;
pub mod error;
pub mod executor;
pub mod format;

pub use config::FileFormatConfig;
pub use error::{FormatError, FormatResult};
pub use executor::{QueryExecutor, WarehouseRow};
pub use format::{
    BatchEncoder, CsvEncoder, CsvEncoderConfig, EncoderRegistry, FileFormatDescriptor,
    FileFormatKind, FormatResolver, ParquetEncoder, ParquetEncoderConfig, ResolvedFormat,
};
