//! Row sources: where raw budget rows come from.
//!
//! Every source validates structure (required columns, row shape) and hands
//! back well-formed [`RawRow`]s; amounts are left raw for `normalize`.

pub mod cache;
pub mod csv_backend;
pub mod json_backend;
pub mod workbook;

use std::path::Path;

use crate::{
    budget::RawRow,
    errors::{DashboardError, Result},
};

pub use cache::SnapshotCache;
pub use csv_backend::CsvSource;
pub use json_backend::JsonSource;
pub use workbook::WorkbookSource;

/// Abstraction over anything that can produce a fresh snapshot of budget rows.
pub trait RowSource: Send + Sync {
    /// Short human-readable description, used in logs.
    fn describe(&self) -> String;

    fn load(&self) -> Result<Vec<RawRow>>;
}

impl<S: RowSource + ?Sized> RowSource for Box<S> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn load(&self) -> Result<Vec<RawRow>> {
        (**self).load()
    }
}

/// In-memory rows, handy for embedding callers and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    rows: Vec<RawRow>,
}

impl StaticSource {
    pub fn new(rows: Vec<RawRow>) -> Self {
        Self { rows }
    }
}

impl RowSource for StaticSource {
    fn describe(&self) -> String {
        format!("{} in-memory rows", self.rows.len())
    }

    fn load(&self) -> Result<Vec<RawRow>> {
        Ok(self.rows.clone())
    }
}

/// Picks a source for `path` by extension. `sheet` only applies to workbooks.
pub fn source_for_path(path: &Path, sheet: &str) -> Result<Box<dyn RowSource>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "xlsx" | "xlsm" | "xls" | "xlsb" | "ods" => {
            Ok(Box::new(WorkbookSource::new(path, sheet)))
        }
        "csv" => Ok(Box::new(CsvSource::new(path))),
        "json" => Ok(Box::new(JsonSource::new(path))),
        _ => Err(DashboardError::UnsupportedFormat(path.display().to_string())),
    }
}
