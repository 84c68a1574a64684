use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::budget::PercentUsed;
use crate::currency::format_percent;

const FILLED: char = '█';
const EMPTY: char = '░';
const PLAIN_FILLED: char = '#';
const PLAIN_EMPTY: char = '-';

/// Caption under a progress bar. Overflow is spelled out; the zero-budget
/// sentinel never shows a number.
pub fn usage_caption(percent: &PercentUsed) -> String {
    match percent {
        PercentUsed::OverBudgetSentinel => "Over budget".to_string(),
        PercentUsed::Measured(value) if percent.is_over() => {
            format!("Over {} used", format_percent(*value))
        }
        PercentUsed::Measured(value) => format!("{} used", format_percent(*value)),
    }
}

/// Number of filled cells for a bar `width` wide.
pub fn filled_cells(percent: &PercentUsed, width: usize) -> usize {
    let cells = percent.capped_fraction() * Decimal::from(width);
    cells.round().to_usize().unwrap_or(0).min(width)
}

pub fn render_bar(percent: &PercentUsed, width: usize, plain: bool) -> String {
    let (full, empty) = if plain {
        (PLAIN_FILLED, PLAIN_EMPTY)
    } else {
        (FILLED, EMPTY)
    };
    let filled = filled_cells(percent, width);
    let mut bar = String::with_capacity(width + 2);
    bar.push('[');
    bar.extend(std::iter::repeat(full).take(filled));
    bar.extend(std::iter::repeat(empty).take(width - filled));
    bar.push(']');
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn captions() {
        assert_eq!(usage_caption(&PercentUsed::Measured(dec!(62.5))), "62.5% used");
        assert_eq!(
            usage_caption(&PercentUsed::Measured(dec!(134.2))),
            "Over 134.2% used"
        );
        assert_eq!(usage_caption(&PercentUsed::Measured(dec!(100))), "100.0% used");
        assert_eq!(usage_caption(&PercentUsed::OverBudgetSentinel), "Over budget");
    }

    #[test]
    fn bars_fill_proportionally_and_saturate() {
        assert_eq!(
            render_bar(&PercentUsed::Measured(dec!(50)), 10, true),
            "[#####-----]"
        );
        assert_eq!(
            render_bar(&PercentUsed::Measured(dec!(250)), 4, true),
            "[####]"
        );
        assert_eq!(render_bar(&PercentUsed::OverBudgetSentinel, 3, false), "[███]");
        assert_eq!(
            render_bar(&PercentUsed::Measured(dec!(0)), 3, false),
            "[░░░]"
        );
    }

    #[test]
    fn negative_spending_shows_an_empty_bar() {
        assert_eq!(filled_cells(&PercentUsed::Measured(dec!(-20)), 10), 0);
    }
}
