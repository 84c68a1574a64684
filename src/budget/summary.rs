use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::CategorySummary;
use super::line_item::LineItem;
use super::status::{percent_used, status, BudgetStatus, PercentUsed};

/// Totals and per-category subtotals for one snapshot of the budget sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PortfolioSummary {
    pub categories: Vec<CategorySummary>,
    pub total_budget: Decimal,
    pub total_spent: Decimal,
    pub total_remaining: Decimal,
}

impl PortfolioSummary {
    pub fn category(&self, name: &str) -> Option<&CategorySummary> {
        self.categories.iter().find(|c| c.category == name)
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.category.as_str()).collect()
    }

    pub fn item_count(&self) -> usize {
        self.categories.iter().map(CategorySummary::len).sum()
    }

    pub fn items(&self) -> impl Iterator<Item = &LineItem> {
        self.categories.iter().flat_map(|c| c.items.iter())
    }

    pub fn status(&self) -> BudgetStatus {
        status(self.total_remaining, self.total_budget)
    }

    pub fn percent_used(&self) -> PercentUsed {
        percent_used(self.total_spent, self.total_budget)
    }
}

/// Groups items by exact main category and totals them.
///
/// Categories come out in ascending name order; items keep their input order
/// within a category. Totals are the sum of the subtotals.
pub fn aggregate(items: Vec<LineItem>) -> PortfolioSummary {
    let mut groups: BTreeMap<String, Vec<LineItem>> = BTreeMap::new();
    for item in items {
        groups
            .entry(item.main_category.clone())
            .or_default()
            .push(item);
    }

    let categories: Vec<CategorySummary> = groups
        .into_iter()
        .map(|(category, items)| CategorySummary::from_items(category, items))
        .collect();

    let mut summary = PortfolioSummary {
        categories,
        ..PortfolioSummary::default()
    };
    for category in &summary.categories {
        summary.total_budget = summary.total_budget.saturating_add(category.subtotal_budget);
        summary.total_spent = summary.total_spent.saturating_add(category.subtotal_spent);
        summary.total_remaining =
            summary.total_remaining.saturating_add(category.subtotal_remaining);
    }
    tracing::debug!(
        categories = summary.categories.len(),
        items = summary.item_count(),
        "aggregated budget snapshot"
    );
    summary
}
