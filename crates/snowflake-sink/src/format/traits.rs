//! Encoder capability trait.

use arrow_array::RecordBatch;

use crate::error::FormatResult;

use super::kind::FileFormatKind;

/// Serializes record batches into staging-file bytes for one
/// [`FileFormatKind`].
///
/// Encoders are stateless after construction and safe to share across
/// concurrent load sessions. Each call produces one self-contained staging
/// file body; the caller names and uploads it.
pub trait BatchEncoder: Send + Sync {
    /// Returns the format kind this encoder produces.
    fn kind(&self) -> FileFormatKind;

    /// Returns the file extension for staged files (e.g. `"csv"`).
    fn file_extension(&self) -> &'static str;

    /// Encodes a batch into staging-file bytes.
    ///
    /// An empty batch encodes to an empty byte vector; callers skip the
    /// upload in that case.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Encode`](crate::error::FormatError::Encode)
    /// or [`FormatError::Arrow`](crate::error::FormatError::Arrow) if
    /// serialization fails.
    fn encode_batch(&self, batch: &RecordBatch) -> FormatResult<Vec<u8>>;
}

impl core::fmt::Debug for dyn BatchEncoder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BatchEncoder")
            .field("kind", &self.kind())
            .finish()
    }
}
