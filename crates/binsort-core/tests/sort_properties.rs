//! Property-based tests for the bin sort.
//!
//! Items are generated over a small fixed category domain; each carries its
//! input position as its name so stability can be checked afterwards.

use proptest::collection::vec as prop_vec;
use proptest::prelude::*;

use binsort_core::{sort, BinsortError, CategoryOrder, Item};

const CATEGORIES: &[&str] = &["gum", "lollipop", "gummy", "chocolate", "fitness"];

// =============================================================================
// Strategies
// =============================================================================

/// A permutation of the category domain.
fn arb_order() -> impl Strategy<Value = CategoryOrder> {
    Just(CATEGORIES.to_vec())
        .prop_shuffle()
        .prop_map(|cats| CategoryOrder::new(cats).unwrap())
}

/// Items tagged with their input position.
fn arb_items() -> impl Strategy<Value = Vec<Item>> {
    prop_vec(0..CATEGORIES.len(), 0..64).prop_map(|indices| {
        indices
            .into_iter()
            .enumerate()
            .map(|(pos, cat)| Item::new(CATEGORIES[cat], pos.to_string()))
            .collect()
    })
}

fn input_position(item: &Item) -> usize {
    item.name.parse().unwrap()
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn sort_preserves_multiset(items in arb_items(), order in arb_order()) {
        let sorted = sort(items.clone(), &order).unwrap();

        let mut expected = items;
        let mut actual = sorted;
        expected.sort_by(|a, b| a.name.cmp(&b.name));
        actual.sort_by(|a, b| a.name.cmp(&b.name));
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn sort_respects_priority(items in arb_items(), order in arb_order()) {
        let sorted = sort(items, &order).unwrap();

        for pair in sorted.windows(2) {
            let a = order.position(&pair[0].category).unwrap();
            let b = order.position(&pair[1].category).unwrap();
            prop_assert!(a <= b, "{} emitted before {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn sort_is_stable(items in arb_items(), order in arb_order()) {
        let sorted = sort(items, &order).unwrap();

        for pair in sorted.windows(2) {
            if pair[0].category == pair[1].category {
                prop_assert!(input_position(&pair[0]) < input_position(&pair[1]));
            }
        }
    }

    #[test]
    fn sorted_output_is_fixed_point(items in arb_items(), order in arb_order()) {
        let once = sort(items, &order).unwrap();
        let twice = sort(once.clone(), &order).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn sort_matches_std_stable_sort(items in arb_items(), order in arb_order()) {
        let mut expected = items.clone();
        expected.sort_by_key(|item| order.position(&item.category).unwrap());

        prop_assert_eq!(sort(items, &order).unwrap(), expected);
    }

    #[test]
    fn unknown_category_is_rejected(
        mut items in arb_items(),
        order in arb_order(),
        at in any::<prop::sample::Index>(),
    ) {
        let position = at.index(items.len() + 1);
        items.insert(position, Item::new("nonexistent", "x"));

        match sort(items, &order) {
            Err(BinsortError::UnknownCategory { category, position: reported }) => {
                prop_assert_eq!(category, "nonexistent");
                prop_assert_eq!(reported, position);
            }
            other => prop_assert!(false, "expected UnknownCategory, got {:?}", other),
        }
    }
}

#[test]
fn empty_input_sorts_to_empty() {
    let order = CategoryOrder::new(CATEGORIES.iter().copied()).unwrap();
    assert!(sort(Vec::<Item>::new(), &order).unwrap().is_empty());
}
