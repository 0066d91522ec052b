//! Staging file-format resolution and encoding.
//!
//! This module binds a named warehouse file format to the encoder that
//! serializes record batches for it:
//!
//! - [`FileFormatKind`] — the closed set of supported staging formats
//! - [`FileFormatDescriptor`] — caller intent for one resolution call
//! - [`FormatResolver`] — flag-first resolution, provisioning DDL, and
//!   type detection against the live warehouse
//! - [`EncoderRegistry`] — pure kind → encoder lookup
//! - [`CsvEncoder`] / [`ParquetEncoder`] — the built-in [`BatchEncoder`]
//!   implementations
//! - [`ddl`] — `SHOW` / `CREATE OR REPLACE FILE FORMAT` statement builders

pub mod csv;
pub mod ddl;
pub mod descriptor;
pub mod kind;
pub mod parquet;
pub mod registry;
pub mod resolver;
pub mod traits;

pub use csv::{CsvEncoder, CsvEncoderConfig};
pub use descriptor::FileFormatDescriptor;
pub use kind::FileFormatKind;
pub use parquet::{ParquetEncoder, ParquetEncoderConfig};
pub use registry::EncoderRegistry;
pub use resolver::{FormatResolver, ResolvedFormat};
pub use traits::BatchEncoder;
