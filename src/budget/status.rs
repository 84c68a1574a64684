use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Share of the budget that must remain for a line to count as healthy.
pub const NEAR_LIMIT_THRESHOLD: Decimal = Decimal::from_parts(2, 0, 0, false, 1);

/// How much budget a line (or subtotal) has left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetStatus {
    Over,
    OnBudget,
    NearLimit,
    Healthy,
    Undefined,
}

impl BudgetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetStatus::Over => "OVER",
            BudgetStatus::OnBudget => "ON_BUDGET",
            BudgetStatus::NearLimit => "NEAR_LIMIT",
            BudgetStatus::Healthy => "HEALTHY",
            BudgetStatus::Undefined => "UNDEFINED",
        }
    }
}

impl std::fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies a remaining amount against its budget.
///
/// A zero budget has no meaningful share, so it is `Undefined` regardless of
/// what was spent.
pub fn status(remaining: Decimal, budget: Decimal) -> BudgetStatus {
    if budget.is_zero() {
        return BudgetStatus::Undefined;
    }
    match remaining.cmp(&Decimal::ZERO) {
        Ordering::Less => BudgetStatus::Over,
        Ordering::Equal => BudgetStatus::OnBudget,
        Ordering::Greater => match remaining.checked_div(budget) {
            Some(share) if share >= NEAR_LIMIT_THRESHOLD => BudgetStatus::Healthy,
            _ => BudgetStatus::NearLimit,
        },
    }
}

/// Percentage of the budget consumed.
///
/// `OverBudgetSentinel` stands in for spending against a zero budget, where no
/// real percentage exists. It must be shown as "over budget", never as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PercentUsed {
    Measured(Decimal),
    OverBudgetSentinel,
}

impl PercentUsed {
    /// The uncapped percentage, if one exists.
    pub fn value(&self) -> Option<Decimal> {
        match self {
            PercentUsed::Measured(value) => Some(*value),
            PercentUsed::OverBudgetSentinel => None,
        }
    }

    pub fn is_over(&self) -> bool {
        match self {
            PercentUsed::Measured(value) => *value > HUNDRED,
            PercentUsed::OverBudgetSentinel => true,
        }
    }

    /// Ordering key for ranking lines; the sentinel outranks every measurement.
    pub fn rank_value(&self) -> Decimal {
        match self {
            PercentUsed::Measured(value) => *value,
            PercentUsed::OverBudgetSentinel => Decimal::MAX,
        }
    }

    /// Fill fraction for a progress indicator, in `0..=1`.
    pub fn capped_fraction(&self) -> Decimal {
        match self {
            PercentUsed::Measured(value) => capped_fraction(*value),
            PercentUsed::OverBudgetSentinel => Decimal::ONE,
        }
    }
}

/// `spent / budget * 100`, uncapped.
pub fn percent_used(spent: Decimal, budget: Decimal) -> PercentUsed {
    if budget > Decimal::ZERO {
        return spent
            .checked_div(budget)
            .and_then(|ratio| ratio.checked_mul(HUNDRED))
            .map(PercentUsed::Measured)
            .unwrap_or(PercentUsed::OverBudgetSentinel);
    }
    if spent > Decimal::ZERO {
        PercentUsed::OverBudgetSentinel
    } else {
        PercentUsed::Measured(Decimal::ZERO)
    }
}

/// `min(percent, 100) / 100`, never below zero.
pub fn capped_fraction(percent: Decimal) -> Decimal {
    percent.clamp(Decimal::ZERO, HUNDRED) / HUNDRED
}
