//! Serializable views of a summary, with status and percentage resolved per
//! line. These are what presentation layers (terminal, JSON) consume.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budget::{BudgetStatus, CategorySummary, LineItem, PercentUsed, PortfolioSummary};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Figures {
    pub budget: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    pub status: BudgetStatus,
    pub percent_used: PercentUsed,
    pub capped_fraction: Decimal,
}

impl Figures {
    fn new(budget: Decimal, spent: Decimal, remaining: Decimal) -> Self {
        let percent_used = crate::budget::percent_used(spent, budget);
        Self {
            budget,
            spent,
            remaining,
            status: crate::budget::status(remaining, budget),
            percent_used,
            capped_fraction: percent_used.capped_fraction(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineReport {
    pub subcategory: String,
    #[serde(flatten)]
    pub figures: Figures,
}

impl From<&LineItem> for LineReport {
    fn from(item: &LineItem) -> Self {
        Self {
            subcategory: item.subcategory.clone(),
            figures: Figures::new(item.budget, item.spent, item.remaining()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryReport {
    pub category: String,
    pub subtotal: Figures,
    pub lines: Vec<LineReport>,
}

impl From<&CategorySummary> for CategoryReport {
    fn from(summary: &CategorySummary) -> Self {
        Self {
            category: summary.category.clone(),
            subtotal: Figures::new(
                summary.subtotal_budget,
                summary.subtotal_spent,
                summary.subtotal_remaining,
            ),
            lines: summary.items.iter().map(LineReport::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioReport {
    pub totals: Figures,
    pub categories: Vec<CategoryReport>,
}

impl From<&PortfolioSummary> for PortfolioReport {
    fn from(summary: &PortfolioSummary) -> Self {
        Self {
            totals: Figures::new(
                summary.total_budget,
                summary.total_spent,
                summary.total_remaining,
            ),
            categories: summary.categories.iter().map(CategoryReport::from).collect(),
        }
    }
}

impl PortfolioReport {
    /// Lines across every category, most consumed first.
    pub fn lines_by_usage(&self) -> Vec<(&str, &LineReport)> {
        let mut lines: Vec<(&str, &LineReport)> = self
            .categories
            .iter()
            .flat_map(|c| c.lines.iter().map(move |line| (c.category.as_str(), line)))
            .collect();
        lines.sort_by(|a, b| {
            b.1.figures
                .percent_used
                .rank_value()
                .cmp(&a.1.figures.percent_used.rank_value())
        });
        lines
    }
}
