use std::path::{Path, PathBuf};

use crate::{
    budget::{HeaderMap, RawRow, RawValue},
    errors::Result,
};

use super::RowSource;

/// Reads a comma separated export of the budget sheet; the first record is the header.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
    delimiter: u8,
}

impl CsvSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            delimiter: b',',
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RowSource for CsvSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<RawRow>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)?;

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let map = HeaderMap::from_headers(&headers)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let cells: Vec<RawValue> = record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        RawValue::Empty
                    } else {
                        RawValue::text(field)
                    }
                })
                .collect();
            if let Some(row) = map.row_from_cells(&cells) {
                rows.push(row);
            }
        }
        tracing::debug!(source = %self.describe(), rows = rows.len(), "loaded csv rows");
        Ok(rows)
    }
}
