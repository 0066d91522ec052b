//! File-format resolver.
//!
//! [`FormatResolver`] reconciles three signals into one staging-format
//! decision, flag-first:
//!
//! 1. **Explicit kind** — caller intent wins outright; no warehouse query
//!    is needed to determine the kind
//! 2. **`auto_create`** — the format will be provisioned, so the kind
//!    defaults to CSV
//! 3. **Detection** — the kind of the existing warehouse object, looked up
//!    by bare name
//!
//! When `auto_create` is set, the resolver issues one idempotent
//! `CREATE OR REPLACE FILE FORMAT` statement after the kind is fixed. Two
//! processes provisioning the same name race at the warehouse level; the
//! statement replaces either way and no in-process lock is taken.
//!
//! Resolution is stateless per call and blocks on each warehouse round trip.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::{FormatError, FormatResult};
use crate::executor::QueryExecutor;

use super::ddl;
use super::descriptor::FileFormatDescriptor;
use super::kind::FileFormatKind;
use super::registry::EncoderRegistry;
use super::traits::BatchEncoder;

/// The outcome of resolution: a format kind bound to its encoder.
///
/// Held by the caller for the life of the load session.
#[derive(Clone)]
pub struct ResolvedFormat {
    /// The resolved staging format kind.
    pub kind: FileFormatKind,
    /// The encoder that serializes batches for it.
    pub encoder: Arc<dyn BatchEncoder>,
}

impl fmt::Debug for ResolvedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedFormat")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Stateless file-format resolver.
///
/// Borrows the caller's [`QueryExecutor`] session and an
/// [`EncoderRegistry`]; both may serve any number of resolutions.
pub struct FormatResolver<'a> {
    executor: &'a dyn QueryExecutor,
    registry: &'a EncoderRegistry,
}

impl<'a> FormatResolver<'a> {
    /// Creates a resolver over an executor and an encoder registry.
    #[must_use]
    pub fn new(executor: &'a dyn QueryExecutor, registry: &'a EncoderRegistry) -> Self {
        Self { executor, registry }
    }

    /// Resolves the staging format for one named format object.
    ///
    /// Applies the flag-first precedence above, provisions the format when
    /// `descriptor.auto_create` is set, then binds the encoder. A trailing
    /// diagnostic listing of visible file formats is logged and never
    /// affects the outcome.
    ///
    /// # Errors
    ///
    /// - [`FormatError::InvalidFormat`] if a detected kind string is
    ///   unsupported or no encoder is registered for the kind
    /// - [`FormatError::FormatNotFound`] if detection matches zero or more
    ///   than one object
    /// - any executor error from the detection or provisioning statements
    pub fn resolve(
        &self,
        descriptor: &FileFormatDescriptor,
        explicit: Option<FileFormatKind>,
    ) -> FormatResult<ResolvedFormat> {
        let kind = match explicit {
            Some(kind) => {
                debug!(name = %descriptor.qualified_name, %kind, "file format kind supplied by caller");
                kind
            }
            None if descriptor.auto_create => FileFormatKind::Csv,
            None => self.detect_kind(descriptor)?,
        };

        if descriptor.auto_create {
            info!(name = %descriptor.qualified_name, "provisioning CSV file format");
            self.executor.execute(&ddl::create_file_format(descriptor))?;
        }

        self.log_visible_formats();

        let encoder = self.registry.lookup(kind)?;
        info!(name = %descriptor.qualified_name, %kind, "file format resolved");
        Ok(ResolvedFormat { kind, encoder })
    }

    /// Detects the kind of an existing format object by bare name.
    fn detect_kind(&self, descriptor: &FileFormatDescriptor) -> FormatResult<FileFormatKind> {
        let bare = descriptor.bare_name();
        let rows = self.executor.execute(&ddl::show_file_formats_like(bare))?;

        match rows.as_slice() {
            [row] => {
                let reported = row.get("type").ok_or_else(|| {
                    FormatError::Query(format!(
                        "SHOW FILE FORMATS row for '{bare}' is missing a 'type' column"
                    ))
                })?;
                FileFormatKind::parse(reported)
            }
            _ => Err(FormatError::FormatNotFound(
                descriptor.qualified_name.clone(),
            )),
        }
    }

    /// Logs the file formats visible to the session. Observational only;
    /// failures are swallowed.
    fn log_visible_formats(&self) {
        match self.executor.execute(ddl::show_file_formats()) {
            Ok(rows) => {
                let names: Vec<&str> = rows
                    .iter()
                    .filter_map(|row| row.get("name").map(String::as_str))
                    .collect();
                debug!(count = rows.len(), ?names, "file formats visible in warehouse");
            }
            Err(e) => warn!(error = %e, "failed to list warehouse file formats"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use crate::executor::WarehouseRow;

    use super::*;

    /// Scripted executor: serves canned detection rows, optionally fails
    /// the diagnostic listing, and records every statement issued.
    struct ScriptedExecutor {
        detection_rows: Vec<WarehouseRow>,
        fail_listing: bool,
        statements: Mutex<Vec<String>>,
    }

    impl ScriptedExecutor {
        fn new(detection_rows: Vec<WarehouseRow>) -> Self {
            Self {
                detection_rows,
                fail_listing: false,
                statements: Mutex::new(Vec::new()),
            }
        }

        fn with_failing_listing(mut self) -> Self {
            self.fail_listing = true;
            self
        }

        fn statements(&self) -> Vec<String> {
            self.statements.lock().unwrap().clone()
        }
    }

    impl QueryExecutor for ScriptedExecutor {
        fn execute(&self, sql: &str) -> FormatResult<Vec<WarehouseRow>> {
            self.statements.lock().unwrap().push(sql.to_string());
            if sql.starts_with("SHOW FILE FORMATS LIKE") {
                Ok(self.detection_rows.clone())
            } else if sql == "SHOW FILE FORMATS" {
                if self.fail_listing {
                    Err(FormatError::Query("session expired".into()))
                } else {
                    Ok(Vec::new())
                }
            } else {
                Ok(Vec::new())
            }
        }
    }

    fn format_row(name: &str, kind: &str) -> WarehouseRow {
        let mut row = WarehouseRow::new();
        row.insert("name".into(), name.into());
        row.insert("type".into(), kind.into());
        row
    }

    fn resolve(
        executor: &ScriptedExecutor,
        descriptor: &FileFormatDescriptor,
        explicit: Option<FileFormatKind>,
    ) -> FormatResult<ResolvedFormat> {
        let registry = EncoderRegistry::default();
        FormatResolver::new(executor, &registry).resolve(descriptor, explicit)
    }

    // ── precedence rule 1: explicit kind ───────────────────────

    #[test]
    fn test_explicit_kind_skips_detection() {
        let executor = ScriptedExecutor::new(vec![]);
        let descriptor = FileFormatDescriptor::new("db.schema.fmt");

        let resolved = resolve(&executor, &descriptor, Some(FileFormatKind::Csv)).unwrap();
        assert_eq!(resolved.kind, FileFormatKind::Csv);
        assert_eq!(resolved.encoder.file_extension(), "csv");

        let statements = executor.statements();
        assert!(statements
            .iter()
            .all(|sql| !sql.starts_with("SHOW FILE FORMATS LIKE")));
        assert!(statements.iter().all(|sql| !sql.starts_with("CREATE")));
    }

    #[test]
    fn test_explicit_parquet_binds_parquet_encoder() {
        let executor = ScriptedExecutor::new(vec![]);
        let descriptor = FileFormatDescriptor::new("fmt");

        let resolved = resolve(&executor, &descriptor, Some(FileFormatKind::Parquet)).unwrap();
        assert_eq!(resolved.kind, FileFormatKind::Parquet);
        assert_eq!(resolved.encoder.file_extension(), "parquet");
    }

    // ── precedence rule 2: auto-create ─────────────────────────

    #[test]
    fn test_auto_create_defaults_to_csv_and_provisions_once() {
        let executor = ScriptedExecutor::new(vec![]);
        let descriptor = FileFormatDescriptor::new("db.schema.fmt")
            .with_auto_create(true)
            .with_delimiter('|');

        let resolved = resolve(&executor, &descriptor, None).unwrap();
        assert_eq!(resolved.kind, FileFormatKind::Csv);

        let statements = executor.statements();
        let creates: Vec<&String> = statements
            .iter()
            .filter(|sql| sql.starts_with("CREATE OR REPLACE FILE FORMAT db.schema.fmt"))
            .collect();
        assert_eq!(creates.len(), 1);
        assert!(creates[0].contains("FIELD_DELIMITER = '|'"));

        // No detection query was needed.
        assert!(statements
            .iter()
            .all(|sql| !sql.starts_with("SHOW FILE FORMATS LIKE")));
    }

    // ── precedence rule 3: detection ───────────────────────────

    #[test]
    fn test_detection_single_parquet_match() {
        let executor = ScriptedExecutor::new(vec![format_row("fmt", "parquet")]);
        let descriptor = FileFormatDescriptor::new("db.schema.fmt");

        let resolved = resolve(&executor, &descriptor, None).unwrap();
        assert_eq!(resolved.kind, FileFormatKind::Parquet);

        let statements = executor.statements();
        assert!(statements.contains(&"SHOW FILE FORMATS LIKE 'fmt'".to_string()));
        assert!(statements.iter().all(|sql| !sql.starts_with("CREATE")));
    }

    #[test]
    fn test_detection_zero_matches_not_found() {
        let executor = ScriptedExecutor::new(vec![]);
        let descriptor = FileFormatDescriptor::new("db.schema.missing");

        let err = resolve(&executor, &descriptor, None).unwrap_err();
        assert!(matches!(err, FormatError::FormatNotFound(_)));
        assert!(err.to_string().contains("db.schema.missing"));
    }

    #[test]
    fn test_detection_ambiguous_matches_not_found() {
        let executor = ScriptedExecutor::new(vec![
            format_row("fmt", "csv"),
            format_row("FMT", "parquet"),
        ]);
        let descriptor = FileFormatDescriptor::new("fmt");

        let err = resolve(&executor, &descriptor, None).unwrap_err();
        assert!(matches!(err, FormatError::FormatNotFound(_)));
    }

    #[test]
    fn test_detection_unsupported_type_invalid() {
        let executor = ScriptedExecutor::new(vec![format_row("fmt", "avro")]);
        let descriptor = FileFormatDescriptor::new("fmt");

        let err = resolve(&executor, &descriptor, None).unwrap_err();
        assert!(matches!(err, FormatError::InvalidFormat(_)));
        assert!(err.to_string().contains("avro"));
    }

    #[test]
    fn test_detection_type_case_insensitive() {
        let executor = ScriptedExecutor::new(vec![format_row("fmt", "PARQUET")]);
        let descriptor = FileFormatDescriptor::new("fmt");

        let resolved = resolve(&executor, &descriptor, None).unwrap();
        assert_eq!(resolved.kind, FileFormatKind::Parquet);
    }

    #[test]
    fn test_detection_row_missing_type_column() {
        let mut row = WarehouseRow::new();
        row.insert("name".into(), "fmt".into());
        let executor = ScriptedExecutor::new(vec![row]);
        let descriptor = FileFormatDescriptor::new("fmt");

        let err = resolve(&executor, &descriptor, None).unwrap_err();
        assert!(matches!(err, FormatError::Query(_)));
    }

    // ── diagnostic listing ─────────────────────────────────────

    #[test]
    fn test_listing_failure_does_not_mask_outcome() {
        let executor =
            ScriptedExecutor::new(vec![format_row("fmt", "csv")]).with_failing_listing();
        let descriptor = FileFormatDescriptor::new("fmt");

        let resolved = resolve(&executor, &descriptor, None).unwrap();
        assert_eq!(resolved.kind, FileFormatKind::Csv);
        assert!(executor
            .statements()
            .contains(&"SHOW FILE FORMATS".to_string()));
    }

    // ── encoder binding ────────────────────────────────────────

    #[test]
    fn test_lookup_failure_surfaces() {
        let executor = ScriptedExecutor::new(vec![]);
        let descriptor = FileFormatDescriptor::new("fmt").with_auto_create(true);
        let registry = EncoderRegistry::new(); // nothing registered

        let err = FormatResolver::new(&executor, &registry)
            .resolve(&descriptor, None)
            .unwrap_err();
        assert!(matches!(err, FormatError::InvalidFormat(_)));
    }

    #[test]
    fn test_resolved_format_debug_shows_kind() {
        let executor = ScriptedExecutor::new(vec![format_row("fmt", "csv")]);
        let descriptor = FileFormatDescriptor::new("fmt");
        let resolved = resolve(&executor, &descriptor, None).unwrap();
        assert!(format!("{resolved:?}").contains("Csv"));
    }
}
