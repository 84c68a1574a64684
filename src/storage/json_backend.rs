use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;

use crate::{
    budget::RawRow,
    errors::{DashboardError, Result},
};

use super::RowSource;

/// Reads a JSON array of row objects keyed by the sheet's column headers.
#[derive(Debug, Clone)]
pub struct JsonSource {
    path: PathBuf,
}

impl JsonSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RowSource for JsonSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<RawRow>> {
        let data = fs::read_to_string(&self.path)?;
        let rows = parse_rows(&data)?;
        tracing::debug!(source = %self.describe(), rows = rows.len(), "loaded json rows");
        Ok(rows)
    }
}

/// Parses a JSON payload row by row so a malformed entry is reported by position.
pub fn parse_rows(data: &str) -> Result<Vec<RawRow>> {
    let values: Vec<Value> = serde_json::from_str(data)?;
    values
        .into_iter()
        .enumerate()
        .map(|(idx, value)| {
            serde_json::from_value::<RawRow>(value).map_err(|e| DashboardError::InvalidRow {
                row: idx + 1,
                reason: e.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::{normalize, RawValue};
    use rust_decimal::Decimal;

    #[test]
    fn parses_loose_amounts() {
        let rows = parse_rows(
            r#"[{"Main Category":"Food","Subcategory":"Dining","Budget":"50","Spent":60}]"#,
        )
        .unwrap();
        assert_eq!(rows[0].budget, RawValue::text("50"));
        assert_eq!(rows[0].spent, RawValue::Number(60.0));
    }

    #[test]
    fn boolean_and_nested_amounts_do_not_fail_the_load() {
        let rows = parse_rows(
            r#"[{"Main Category":"Food","Subcategory":"Dining","Budget":true,"Spent":5},
                {"Main Category":"Food","Subcategory":"Snacks","Budget":[1],"Spent":{"x":2}}]"#,
        )
        .unwrap();
        assert_eq!(rows.len(), 2);

        let items = normalize(&rows);
        assert_eq!(items[0].budget, Decimal::ZERO);
        assert_eq!(items[0].spent, Decimal::from(5));
        assert_eq!(items[1].budget, Decimal::ZERO);
        assert_eq!(items[1].spent, Decimal::ZERO);
    }

    #[test]
    fn reports_the_offending_row() {
        let err = parse_rows(
            r#"[{"Main Category":"Food","Subcategory":"Dining"},{"Main Category":"Rent"}]"#,
        )
        .expect_err("second row lacks a subcategory");
        match err {
            DashboardError::InvalidRow { row, reason } => {
                assert_eq!(row, 2);
                assert!(reason.contains("Subcategory"), "unexpected reason: {reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_array_payload_is_a_serde_error() {
        assert!(matches!(
            parse_rows(r#"{"rows":[]}"#),
            Err(DashboardError::Serde(_))
        ));
    }
}
