//! Warehouse query execution seam.
//!
//! The resolver never owns a connection. The surrounding pipeline implements
//! [`QueryExecutor`] over its live Snowflake session and hands it in;
//! connection setup, credentials, timeouts, and retries all live behind this
//! trait.

use std::collections::HashMap;

use crate::error::FormatResult;

/// A single result row, mapping column name to its string value.
///
/// `SHOW FILE FORMATS` rows carry the columns this crate reads (`name`,
/// `type`) with the casing the warehouse returns them in.
pub type WarehouseRow = HashMap<String, String>;

/// Executes SQL statements against an active warehouse session.
///
/// Calls are synchronous and block until the warehouse round trip completes.
/// Implementations must be safe to share across concurrent resolutions.
pub trait QueryExecutor: Send + Sync {
    /// Runs a single statement and returns its result rows.
    ///
    /// DDL statements may return an empty row set.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Query`](crate::error::FormatError::Query) (or
    /// an implementation-mapped variant) if the statement fails.
    fn execute(&self, sql: &str) -> FormatResult<Vec<WarehouseRow>>;
}

impl<T: QueryExecutor + ?Sized> QueryExecutor for &T {
    fn execute(&self, sql: &str) -> FormatResult<Vec<WarehouseRow>> {
        (**self).execute(sql)
    }
}
