//! Statement builders for file-format DDL and listings.
//!
//! The create-or-replace template is fixed: the loader depends on these exact
//! semantics (timestamp rendering, NULL handling, tolerant column counts)
//! when it later `COPY`-loads the staged files.

use super::descriptor::FileFormatDescriptor;

/// Snowflake timestamp output format for CSV staging files.
///
/// The CSV encoder renders timestamps to match
/// ([`csv::TIMESTAMP_FORMAT`](super::csv::TIMESTAMP_FORMAT)).
pub const SQL_TIMESTAMP_FORMAT: &str = r#"YYYY-MM-DD"T"HH24:MI:SS.FF6Z"#;

/// Doubles single quotes so `text` can be embedded in a SQL string literal.
#[must_use]
pub fn escape_single_quotes(text: &str) -> String {
    text.replace('\'', "''")
}

/// Returns the statement listing every file format visible to the session.
#[must_use]
pub const fn show_file_formats() -> &'static str {
    "SHOW FILE FORMATS"
}

/// Builds the statement listing file formats whose name matches `bare_name`.
#[must_use]
pub fn show_file_formats_like(bare_name: &str) -> String {
    format!(
        "SHOW FILE FORMATS LIKE '{}'",
        escape_single_quotes(bare_name)
    )
}

/// Builds the create-or-replace statement for a CSV-typed file format.
///
/// Replaces any pre-existing object of the same name, making
/// re-provisioning idempotent. The `quote_fields` flag on the descriptor
/// selects between `FIELD_OPTIONALLY_ENCLOSED_BY = '"'` and `ESCAPE = NONE`.
#[must_use]
pub fn create_file_format(descriptor: &FileFormatDescriptor) -> String {
    let delimiter = escape_single_quotes(&descriptor.delimiter.to_string());
    let enclosing = if descriptor.quote_fields {
        "FIELD_OPTIONALLY_ENCLOSED_BY = '\"'"
    } else {
        "ESCAPE = NONE"
    };

    let clauses = [
        "TYPE = 'CSV'".to_string(),
        format!("TIMESTAMP_FORMAT = '{SQL_TIMESTAMP_FORMAT}'"),
        format!("FIELD_DELIMITER = '{delimiter}'"),
        "NULL_IF = ('null', 'NULL', '')".to_string(),
        "EMPTY_FIELD_AS_NULL = TRUE".to_string(),
        enclosing.to_string(),
        "ERROR_ON_COLUMN_COUNT_MISMATCH = FALSE".to_string(),
    ];

    let mut stmt = format!(
        "CREATE OR REPLACE FILE FORMAT {}",
        descriptor.qualified_name
    );
    for clause in &clauses {
        stmt.push_str("\n    ");
        stmt.push_str(clause);
    }
    stmt
}
