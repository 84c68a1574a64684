use rust_decimal::{Decimal, RoundingStrategy};

const DOLLAR_SYMBOL: &str = "$";
const GROUPING_SEPARATOR: char = ',';

/// Formats an amount as whole dollars with thousands grouping, e.g. `$1,250`
/// or `-$40`. Halves round to even.
pub fn format_whole_dollars(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
    if rounded.is_zero() {
        return format!("{DOLLAR_SYMBOL}0");
    }
    let digits = rounded.abs().trunc().to_string();
    let grouped = group_digits(&digits, GROUPING_SEPARATOR);
    if rounded.is_sign_negative() {
        format!("-{DOLLAR_SYMBOL}{grouped}")
    } else {
        format!("{DOLLAR_SYMBOL}{grouped}")
    }
}

/// Formats a percentage with one decimal place, e.g. `134.2%`.
pub fn format_percent(percent: Decimal) -> String {
    let rounded = percent.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.1}%", rounded)
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped.chars().rev().collect()
}
