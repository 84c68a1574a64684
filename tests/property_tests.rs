use budget_dashboard::budget::{aggregate, normalize, RawRow, RawValue};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn raw_value_strategy() -> impl Strategy<Value = RawValue> {
    prop_oneof![
        (-1_000_000.0..1_000_000.0f64).prop_map(RawValue::Number),
        "-?[0-9]{1,5}(\\.[0-9]{1,2})?".prop_map(RawValue::Text),
        "[A-Za-z /$,]{0,6}".prop_map(RawValue::Text),
        Just(RawValue::Empty),
    ]
}

fn row_strategy() -> impl Strategy<Value = RawRow> {
    (
        prop::sample::select(vec!["Food", "Rent", "Car", "", "food"]),
        "[a-z]{1,6}",
        raw_value_strategy(),
        raw_value_strategy(),
    )
        .prop_map(|(category, sub, budget, spent)| RawRow {
            main_category: category.to_string(),
            subcategory: sub,
            budget,
            spent,
        })
}

fn sorted_items(rows: &[RawRow], category: &str) -> Vec<(String, Decimal, Decimal)> {
    let summary = aggregate(normalize(rows));
    let mut items: Vec<_> = summary
        .category(category)
        .map(|c| {
            c.items
                .iter()
                .map(|i| (i.subcategory.clone(), i.budget, i.spent))
                .collect()
        })
        .unwrap_or_default();
    items.sort();
    items
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Normalization keeps every row and `remaining` is always `budget - spent`.
    #[test]
    fn prop_normalize_keeps_rows_and_remaining_identity(
        rows in prop::collection::vec(row_strategy(), 0..40),
    ) {
        let items = normalize(&rows);
        prop_assert_eq!(items.len(), rows.len());
        for item in &items {
            prop_assert_eq!(item.remaining(), item.budget - item.spent);
        }
    }

    /// Totals equal the sum of subtotals, and nothing is dropped or counted twice.
    #[test]
    fn prop_totals_match_subtotals(
        rows in prop::collection::vec(row_strategy(), 0..40),
    ) {
        let items = normalize(&rows);
        let direct_budget: Decimal = items.iter().map(|i| i.budget).sum();
        let summary = aggregate(items);

        let budget: Decimal = summary.categories.iter().map(|c| c.subtotal_budget).sum();
        let spent: Decimal = summary.categories.iter().map(|c| c.subtotal_spent).sum();
        let remaining: Decimal = summary.categories.iter().map(|c| c.subtotal_remaining).sum();
        prop_assert_eq!(summary.total_budget, budget);
        prop_assert_eq!(summary.total_spent, spent);
        prop_assert_eq!(summary.total_remaining, remaining);
        prop_assert_eq!(summary.total_budget, direct_budget);
        prop_assert_eq!(summary.item_count(), rows.len());
    }

    /// Categories are strictly ascending.
    #[test]
    fn prop_categories_sorted(
        rows in prop::collection::vec(row_strategy(), 0..40),
    ) {
        let summary = aggregate(normalize(&rows));
        let names = summary.category_names();
        prop_assert!(names.windows(2).all(|pair| pair[0] < pair[1]));
    }

    /// Shuffling the input changes nothing but the order of items within a category.
    #[test]
    fn prop_shuffled_input_gives_same_totals(
        (rows, shuffled) in prop::collection::vec(row_strategy(), 0..40)
            .prop_flat_map(|rows| (Just(rows.clone()), Just(rows).prop_shuffle())),
    ) {
        let a = aggregate(normalize(&rows));
        let b = aggregate(normalize(&shuffled));
        prop_assert_eq!(a.category_names(), b.category_names());
        prop_assert_eq!(a.total_budget, b.total_budget);
        prop_assert_eq!(a.total_spent, b.total_spent);
        prop_assert_eq!(a.total_remaining, b.total_remaining);
        for (left, right) in a.categories.iter().zip(&b.categories) {
            prop_assert_eq!(left.subtotal_budget, right.subtotal_budget);
            prop_assert_eq!(left.subtotal_spent, right.subtotal_spent);
            prop_assert_eq!(left.subtotal_remaining, right.subtotal_remaining);
            prop_assert_eq!(
                sorted_items(&rows, &left.category),
                sorted_items(&shuffled, &right.category)
            );
        }
    }
}
