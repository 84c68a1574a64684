use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::raw::{RawRow, RawValue};
use super::status::{percent_used, status, BudgetStatus, PercentUsed};

/// Largest magnitude accepted as an amount (1e20). Anything bigger reads as 0,
/// which keeps every subtotal and total well inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_661_992_960, 1_808_227_885, 5, false, 0);

/// One budget line: a subcategory with its planned and actual amounts.
///
/// `remaining` is never stored; it is derived from `budget` and `spent` on
/// every read so it cannot drift from its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub main_category: String,
    pub subcategory: String,
    pub budget: Decimal,
    pub spent: Decimal,
}

impl LineItem {
    pub fn new(
        main_category: impl Into<String>,
        subcategory: impl Into<String>,
        budget: Decimal,
        spent: Decimal,
    ) -> Self {
        Self {
            main_category: main_category.into(),
            subcategory: subcategory.into(),
            budget,
            spent,
        }
    }

    pub fn remaining(&self) -> Decimal {
        self.budget.saturating_sub(self.spent)
    }

    pub fn status(&self) -> BudgetStatus {
        status(self.remaining(), self.budget)
    }

    pub fn percent_used(&self) -> PercentUsed {
        percent_used(self.spent, self.budget)
    }
}

/// Converts raw rows into line items, coercing every unreadable amount to zero.
///
/// Never fails and never drops a row.
pub fn normalize(raw_rows: &[RawRow]) -> Vec<LineItem> {
    raw_rows
        .iter()
        .map(|row| LineItem {
            main_category: row.main_category.clone(),
            subcategory: row.subcategory.clone(),
            budget: coerce_amount(&row.budget),
            spent: coerce_amount(&row.spent),
        })
        .collect()
}

/// Reads a cell as a decimal amount. Anything that is not a finite number
/// within [`MAX_AMOUNT`] is zero.
pub fn coerce_amount(value: &RawValue) -> Decimal {
    let parsed = match value {
        RawValue::Number(n) => Decimal::from_f64(*n),
        RawValue::Text(text) => parse_text(text),
        RawValue::Empty => None,
    };
    match parsed.filter(|amount| amount.abs() <= MAX_AMOUNT) {
        Some(amount) => amount,
        None => {
            if !value.is_empty() {
                tracing::warn!(?value, "unreadable amount coerced to 0");
            }
            Decimal::ZERO
        }
    }
}

fn parse_text(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .ok()
        .or_else(|| Decimal::from_scientific(trimmed).ok())
        .or_else(|| {
            trimmed
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .and_then(Decimal::from_f64)
        })
}
