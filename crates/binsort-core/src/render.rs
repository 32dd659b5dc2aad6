//! Text rendering of bucket state and item listings
//!
//! Pure functions: they only read the buckets and return a `String`, so the
//! caller decides where (and whether) the text is printed.

use std::borrow::Borrow;

use crate::binner::BucketMap;
use crate::category::{CategoryLabels, CategoryOrder};
use crate::item::Item;

const BUCKETS_HEADER: &str = "===== BINS STATE =====";
const BUCKETS_FOOTER: &str = "======================";
const EMPTY_MARKER: &str = "(empty)";

/// Render one section per category, in `order`
///
/// ```text
/// ===== BINS STATE =====
///
/// [Bin 1] Chewing gum:
///    - Mint gum
///
/// [Bin 2] Lollipops:
///    (empty)
/// ======================
/// ```
pub fn render_buckets<T: Borrow<Item>>(
    buckets: &BucketMap<T>,
    order: &CategoryOrder,
    labels: &CategoryLabels,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", BUCKETS_HEADER));

    for (index, category) in order.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!("[Bin {}] {}:\n", index + 1, labels.label(category)));

        match buckets.get(category) {
            Some(items) if !items.is_empty() => {
                for item in items {
                    let item: &Item = item.borrow();
                    out.push_str(&format!("   - {}\n", item.name));
                }
            }
            _ => {
                out.push_str(&format!("   {}\n", EMPTY_MARKER));
            }
        }
    }

    out.push_str(&format!("{}\n", BUCKETS_FOOTER));
    out
}

/// Render ` - [category] name` per item
pub fn render_items<T: Borrow<Item>>(items: &[T]) -> String {
    let mut out = String::new();
    for item in items {
        let item: &Item = item.borrow();
        out.push_str(&format!(" - {}\n", item));
    }
    out
}
