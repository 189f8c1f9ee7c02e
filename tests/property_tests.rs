//! Property-based tests using proptest.
//!
//! These tests verify invariants of the recommendation engine over
//! arbitrary rule stores and baskets.

use canasta::prelude::*;
use proptest::prelude::*;

// Small alphabet so baskets and rules actually intersect
fn item_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "milk", "bread", "butter", "eggs", "jam", "tea", "sugar", "bacon",
    ])
    .prop_map(str::to_string)
}

fn item_set_strategy(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(item_strategy(), 1..=max)
}

fn record_strategy() -> impl Strategy<Value = RawRuleRecord> {
    (
        item_set_strategy(3),
        item_set_strategy(3),
        0.0f64..=1.0,
        0.0f64..=5.0,
    )
        .prop_map(|(antecedent, consequent, confidence, lift)| RawRuleRecord {
            antecedents_str: Some(antecedent.join("|")),
            consequents_str: Some(consequent.join("|")),
            confidence: Some(confidence),
            lift: Some(lift),
            ..Default::default()
        })
}

fn store_strategy() -> impl Strategy<Value = RuleStore> {
    prop::collection::vec(record_strategy(), 0..20).prop_map(RuleStore::from_records)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn recommend_is_deterministic(
        store in store_strategy(),
        basket in item_set_strategy(4),
        limit in 0usize..10,
    ) {
        let first = recommend(&basket, &store, limit);
        let second = recommend(&basket, &store, limit);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn no_self_recommendation(
        store in store_strategy(),
        basket in item_set_strategy(4),
        limit in 1usize..10,
    ) {
        let normalized: Vec<String> =
            basket.iter().map(|i| normalize_item(i)).collect();
        for rec in recommend(&basket, &store, limit) {
            prop_assert!(!normalized.contains(&rec.item));
        }
    }

    #[test]
    fn results_are_unique(
        store in store_strategy(),
        basket in item_set_strategy(4),
        limit in 1usize..10,
    ) {
        let results = recommend(&basket, &store, limit);
        for (i, a) in results.iter().enumerate() {
            for b in &results[i + 1..] {
                prop_assert_ne!(&a.item, &b.item);
            }
        }
    }

    #[test]
    fn result_size_is_bounded(
        store in store_strategy(),
        basket in item_set_strategy(4),
        limit in 0usize..10,
    ) {
        let results = recommend(&basket, &store, limit);
        prop_assert!(results.len() <= limit);
        if limit == 0 {
            prop_assert!(results.is_empty());
        }
    }

    #[test]
    fn empty_basket_yields_empty_result(
        store in store_strategy(),
        limit in 0usize..10,
    ) {
        let empty: Vec<String> = Vec::new();
        prop_assert!(recommend(&empty, &store, limit).is_empty());
    }

    #[test]
    fn scores_are_descending(
        store in store_strategy(),
        basket in item_set_strategy(4),
        limit in 1usize..10,
    ) {
        let results = recommend(&basket, &store, limit);
        for pair in results.windows(2) {
            let a = pair[0].confidence * pair[0].lift;
            let b = pair[1].confidence * pair[1].lift;
            prop_assert!(a >= b, "scores out of order: {} < {}", a, b);
        }
    }

    #[test]
    fn recommendation_is_case_insensitive(
        store in store_strategy(),
        basket in item_set_strategy(4),
        limit in 1usize..10,
    ) {
        let upper: Vec<String> = basket.iter().map(|i| i.to_uppercase()).collect();
        let padded: Vec<String> = basket.iter().map(|i| format!("  {i} ")).collect();
        let expected = recommend(&basket, &store, limit);
        prop_assert_eq!(recommend(&upper, &store, limit), expected.clone());
        prop_assert_eq!(recommend(&padded, &store, limit), expected);
    }

    #[test]
    fn recommended_items_come_from_consequents(
        store in store_strategy(),
        basket in item_set_strategy(4),
        limit in 1usize..10,
    ) {
        for rec in recommend(&basket, &store, limit) {
            let known = store
                .rules()
                .iter()
                .any(|rule| rule.consequent.contains(&rec.item));
            prop_assert!(known, "unknown item recommended: {}", rec.item);
        }
    }

    #[test]
    fn store_never_holds_empty_sets(records in prop::collection::vec(record_strategy(), 0..20)) {
        let store = RuleStore::from_records(records);
        for rule in store.rules() {
            prop_assert!(!rule.antecedent.is_empty());
            prop_assert!(!rule.consequent.is_empty());
        }
    }

    #[test]
    fn catalog_is_sorted_and_distinct(store in store_strategy()) {
        let catalog = store.catalog();
        for pair in catalog.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }
}
