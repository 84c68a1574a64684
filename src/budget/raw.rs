use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::{DashboardError, Result};

pub const MAIN_CATEGORY_HEADER: &str = "Main Category";
pub const SUBCATEGORY_HEADER: &str = "Subcategory";
pub const BUDGET_HEADER: &str = "Budget";
pub const SPENT_HEADER: &str = "Spent";

/// A cell value as it arrives from a sheet, CSV file or JSON payload.
///
/// Deserializing never fails on shape: booleans, arrays and objects become
/// `Text` and later coerce to zero like any other non-numeric cell.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    #[default]
    Empty,
}

impl RawValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            RawValue::Empty => true,
            RawValue::Text(text) => text.trim().is_empty(),
            RawValue::Number(_) => false,
        }
    }

    /// Renders the value as a label, used for category and subcategory cells.
    pub fn to_label(&self) -> String {
        match self {
            RawValue::Empty => String::new(),
            RawValue::Text(text) => text.clone(),
            RawValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
            RawValue::Number(n) => n.to_string(),
        }
    }
}

impl From<Value> for RawValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Empty,
            Value::String(text) => Self::Text(text),
            Value::Number(n) => match n.as_f64() {
                Some(n) => Self::Number(n),
                None => Self::Text(n.to_string()),
            },
            other => Self::Text(other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Value::deserialize(deserializer).map(RawValue::from)
    }
}

/// Reads a label field, rendering numbers the way workbook label cells are.
fn deserialize_label<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<String, D::Error> {
    RawValue::deserialize(deserializer).map(|value| value.to_label())
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// One well-shaped input row: both labels present, amounts possibly malformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    #[serde(rename = "Main Category", deserialize_with = "deserialize_label")]
    pub main_category: String,
    #[serde(rename = "Subcategory", deserialize_with = "deserialize_label")]
    pub subcategory: String,
    #[serde(rename = "Budget", default)]
    pub budget: RawValue,
    #[serde(rename = "Spent", default)]
    pub spent: RawValue,
}

impl RawRow {
    pub fn new(
        main_category: impl Into<String>,
        subcategory: impl Into<String>,
        budget: impl Into<RawValue>,
        spent: impl Into<RawValue>,
    ) -> Self {
        Self {
            main_category: main_category.into(),
            subcategory: subcategory.into(),
            budget: budget.into(),
            spent: spent.into(),
        }
    }
}

/// Column positions resolved from a header record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderMap {
    pub main_category: usize,
    pub subcategory: usize,
    pub budget: Option<usize>,
    pub spent: Option<usize>,
}

impl HeaderMap {
    /// Locates the known columns. The two label columns are required; amount
    /// columns may be absent, in which case every amount reads as empty.
    pub fn from_headers<S: AsRef<str>>(headers: &[S]) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.as_ref().trim() == name);
        let main_category = find(MAIN_CATEGORY_HEADER)
            .ok_or_else(|| DashboardError::MissingColumn(MAIN_CATEGORY_HEADER.into()))?;
        let subcategory = find(SUBCATEGORY_HEADER)
            .ok_or_else(|| DashboardError::MissingColumn(SUBCATEGORY_HEADER.into()))?;
        let budget = find(BUDGET_HEADER);
        let spent = find(SPENT_HEADER);
        if budget.is_none() {
            tracing::warn!("`{BUDGET_HEADER}` column missing; budgets read as 0");
        }
        if spent.is_none() {
            tracing::warn!("`{SPENT_HEADER}` column missing; spending reads as 0");
        }
        Ok(Self {
            main_category,
            subcategory,
            budget,
            spent,
        })
    }

    /// Builds a row from positional cells. Returns `None` for fully blank rows.
    pub fn row_from_cells(&self, cells: &[RawValue]) -> Option<RawRow> {
        if cells.iter().all(RawValue::is_empty) {
            return None;
        }
        let cell = |idx: Option<usize>| {
            idx.and_then(|i| cells.get(i))
                .cloned()
                .unwrap_or(RawValue::Empty)
        };
        Some(RawRow {
            main_category: cell(Some(self.main_category)).to_label(),
            subcategory: cell(Some(self.subcategory)).to_label(),
            budget: cell(self.budget),
            spent: cell(self.spent),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_map_requires_label_columns() {
        let err = HeaderMap::from_headers(&["Subcategory", "Budget", "Spent"])
            .expect_err("missing main category");
        assert!(matches!(err, DashboardError::MissingColumn(name) if name == "Main Category"));

        let err = HeaderMap::from_headers(&["Main Category", "Budget"])
            .expect_err("missing subcategory");
        assert!(matches!(err, DashboardError::MissingColumn(name) if name == "Subcategory"));
    }

    #[test]
    fn header_map_tolerates_missing_amount_columns_and_padding() {
        let map = HeaderMap::from_headers(&["Notes", " Main Category ", "Subcategory"])
            .expect("label columns present");
        assert_eq!(map.main_category, 1);
        assert_eq!(map.subcategory, 2);
        assert_eq!(map.budget, None);

        let row = map
            .row_from_cells(&[
                RawValue::from("memo"),
                RawValue::from("Food"),
                RawValue::from("Dining"),
            ])
            .expect("non-blank row");
        assert_eq!(row.budget, RawValue::Empty);
        assert_eq!(row.spent, RawValue::Empty);
    }

    #[test]
    fn blank_rows_are_skipped_but_blank_categories_are_kept() {
        let map = HeaderMap::from_headers(&["Main Category", "Subcategory", "Budget", "Spent"])
            .unwrap();
        assert!(map
            .row_from_cells(&[RawValue::Empty, RawValue::text("  "), RawValue::Empty])
            .is_none());

        let row = map
            .row_from_cells(&[
                RawValue::Empty,
                RawValue::text("Misc"),
                RawValue::Number(10.0),
                RawValue::Empty,
            ])
            .expect("row with a subcategory");
        assert_eq!(row.main_category, "");
        assert_eq!(row.subcategory, "Misc");
    }

    #[test]
    fn numeric_labels_render_without_fraction() {
        assert_eq!(RawValue::Number(2024.0).to_label(), "2024");
        assert_eq!(RawValue::Number(1.5).to_label(), "1.5");
    }

    #[test]
    fn json_rows_accept_numbers_strings_and_nulls() {
        let rows: Vec<RawRow> = serde_json::from_str(
            r#"[{"Main Category":"Food","Subcategory":"Dining","Budget":"N/A","Spent":null},
                {"Main Category":"Rent","Subcategory":"Rent","Budget":1000}]"#,
        )
        .unwrap();
        assert_eq!(rows[0].budget, RawValue::text("N/A"));
        assert_eq!(rows[0].spent, RawValue::Empty);
        assert_eq!(rows[1].budget, RawValue::Number(1000.0));
        assert_eq!(rows[1].spent, RawValue::Empty);
    }

    #[test]
    fn json_amounts_of_any_shape_are_kept_as_text() {
        let rows: Vec<RawRow> = serde_json::from_str(
            r#"[{"Main Category":2024,"Subcategory":null,"Budget":true,"Spent":[1]},
                {"Main Category":"Fun","Subcategory":"Games","Budget":{"v":1},"Spent":false}]"#,
        )
        .unwrap();
        assert_eq!(rows[0].main_category, "2024");
        assert_eq!(rows[0].subcategory, "");
        assert_eq!(rows[0].budget, RawValue::text("true"));
        assert_eq!(rows[0].spent, RawValue::text("[1]"));
        assert_eq!(rows[1].budget, RawValue::text(r#"{"v":1}"#));
        assert_eq!(rows[1].spent, RawValue::text("false"));
    }

    #[test]
    fn json_rows_missing_labels_are_rejected() {
        let result: std::result::Result<Vec<RawRow>, _> =
            serde_json::from_str(r#"[{"Main Category":"Food","Budget":1}]"#);
        assert!(result.is_err());
    }
}
