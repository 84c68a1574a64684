use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Reader};

use crate::{
    budget::{raw::MAIN_CATEGORY_HEADER, HeaderMap, RawRow, RawValue},
    errors::{DashboardError, Result},
};

use super::RowSource;

pub const DEFAULT_SHEET: &str = "DashboardData";

/// Reads one worksheet of an Excel or OpenDocument workbook.
#[derive(Debug, Clone)]
pub struct WorkbookSource {
    path: PathBuf,
    sheet: String,
}

impl WorkbookSource {
    pub fn new(path: impl AsRef<Path>, sheet: impl Into<String>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            sheet: sheet.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sheet(&self) -> &str {
        &self.sheet
    }
}

impl RowSource for WorkbookSource {
    fn describe(&self) -> String {
        format!("{} [{}]", self.path.display(), self.sheet)
    }

    fn load(&self) -> Result<Vec<RawRow>> {
        let mut workbook = open_workbook_auto(&self.path)
            .map_err(|e| DashboardError::Workbook(format!("failed to open workbook: {e}")))?;

        if !workbook.sheet_names().iter().any(|name| name == &self.sheet) {
            return Err(DashboardError::SheetNotFound(self.sheet.clone()));
        }

        let range = workbook
            .worksheet_range(&self.sheet)
            .map_err(|e| DashboardError::Workbook(format!("failed to read sheet: {e}")))?;

        let mut rows = range.rows();
        let headers: Vec<String> = match rows.next() {
            Some(header) => header.iter().map(|cell| cell_to_raw(cell).to_label()).collect(),
            None => return Err(DashboardError::MissingColumn(MAIN_CATEGORY_HEADER.into())),
        };
        let map = HeaderMap::from_headers(&headers)?;

        let parsed: Vec<RawRow> = rows
            .filter_map(|cells| {
                let raw: Vec<RawValue> = cells.iter().map(cell_to_raw).collect();
                map.row_from_cells(&raw)
            })
            .collect();
        tracing::debug!(source = %self.describe(), rows = parsed.len(), "loaded workbook rows");
        Ok(parsed)
    }
}

/// Maps a calamine cell onto the loosely typed input model. Anything that is
/// not a number or text (booleans, dates, error cells) is kept as text so the
/// amount coercion treats it as non-numeric.
fn cell_to_raw(cell: &Data) -> RawValue {
    match cell {
        Data::Empty => RawValue::Empty,
        Data::String(s) => RawValue::Text(s.clone()),
        Data::Float(n) => RawValue::Number(*n),
        Data::Int(n) => RawValue::Number(*n as f64),
        other => RawValue::Text(other.to_string()),
    }
}
