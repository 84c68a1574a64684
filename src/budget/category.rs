use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::line_item::LineItem;
use super::status::{percent_used, status, BudgetStatus, PercentUsed};

/// All line items sharing one main category, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub category: String,
    pub items: Vec<LineItem>,
    pub subtotal_budget: Decimal,
    pub subtotal_spent: Decimal,
    pub subtotal_remaining: Decimal,
}

impl CategorySummary {
    pub fn from_items(category: impl Into<String>, items: Vec<LineItem>) -> Self {
        let mut subtotal_budget = Decimal::ZERO;
        let mut subtotal_spent = Decimal::ZERO;
        let mut subtotal_remaining = Decimal::ZERO;
        for item in &items {
            subtotal_budget = subtotal_budget.saturating_add(item.budget);
            subtotal_spent = subtotal_spent.saturating_add(item.spent);
            subtotal_remaining = subtotal_remaining.saturating_add(item.remaining());
        }
        Self {
            category: category.into(),
            items,
            subtotal_budget,
            subtotal_spent,
            subtotal_remaining,
        }
    }

    pub fn status(&self) -> BudgetStatus {
        status(self.subtotal_remaining, self.subtotal_budget)
    }

    pub fn percent_used(&self) -> PercentUsed {
        percent_used(self.subtotal_spent, self.subtotal_budget)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
