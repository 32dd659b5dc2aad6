//! Demo data: a mixed bag of candies for the built-in scheme

use crate::item::Item;

const MIXED_CANDIES: &[(&str, &str)] = &[
    ("white_chocolate", "White chocolate bar"),
    ("gummy", "Gummy bears"),
    ("dark_chocolate", "Dark 70% bar"),
    ("fitness", "Protein bar"),
    ("lollipop", "Strawberry lollipop"),
    ("chewing_gum", "Mint gum"),
    ("gummy", "Sour worms"),
    ("chewing_gum", "Bubble gum"),
    ("dark_chocolate", "Dark 85% bar"),
];

/// Unordered candies covering every built-in category
pub fn mixed_candies() -> Vec<Item> {
    MIXED_CANDIES
        .iter()
        .map(|(category, name)| Item::new(*category, *name))
        .collect()
}
