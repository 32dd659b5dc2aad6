//! Bin sort
//!
//! Partition items into one bucket per category, then drain the buckets in
//! category priority order. Linear in the number of items plus the number
//! of categories, and stable within each category.
//!
//! ```rust
//! use binsort_core::binner::sort;
//! use binsort_core::{CategoryOrder, Item};
//!
//! let order = CategoryOrder::new(["gum", "lollipop", "gummy"])?;
//! let items = vec![
//!     Item::new("gummy", "A"),
//!     Item::new("gum", "B"),
//!     Item::new("lollipop", "C"),
//!     Item::new("gum", "D"),
//! ];
//!
//! let names: Vec<_> = sort(items, &order)?.into_iter().map(|i| i.name).collect();
//! assert_eq!(names, vec!["B", "D", "C", "A"]);
//! # Ok::<(), binsort_core::BinsortError>(())
//! ```

use log::{debug, trace};

use crate::category::CategoryOrder;
use crate::error::{BinsortError, Result};
use crate::item::Categorized;

/// Items of one category, in the order they were supplied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket<T> {
    category: String,
    items: Vec<T>,
}

impl<T> Bucket<T> {
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One bucket per category, keyed in category order
///
/// Only the binner can add items; callers get a read-only view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketMap<T> {
    buckets: Vec<Bucket<T>>,
}

impl<T> BucketMap<T> {
    /// Items of a category, `None` if the category has no bucket
    pub fn get(&self, category: &str) -> Option<&[T]> {
        self.buckets
            .iter()
            .find(|b| b.category == category)
            .map(|b| b.items.as_slice())
    }

    /// Buckets in key order
    pub fn iter(&self) -> std::slice::Iter<'_, Bucket<T>> {
        self.buckets.iter()
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> + '_ {
        self.buckets.iter().map(|b| b.category.as_str())
    }

    /// Number of buckets
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of items across all buckets
    pub fn item_count(&self) -> usize {
        self.buckets.iter().map(Bucket::len).sum()
    }

    fn matches(&self, order: &CategoryOrder) -> bool {
        self.len() == order.len() && self.categories().eq(order.iter())
    }
}

impl<'a, T> IntoIterator for &'a BucketMap<T> {
    type Item = &'a Bucket<T>;
    type IntoIter = std::slice::Iter<'a, Bucket<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One empty bucket per category, in the same order
pub fn create_empty_buckets<T>(order: &CategoryOrder) -> BucketMap<T> {
    BucketMap {
        buckets: order
            .iter()
            .map(|category| Bucket {
                category: category.to_string(),
                items: Vec::new(),
            })
            .collect(),
    }
}

/// Distribute items into their category buckets
///
/// Fails on the first item whose category is not part of `order`.
pub fn partition<T, I>(items: I, order: &CategoryOrder) -> Result<BucketMap<T>>
where
    T: Categorized,
    I: IntoIterator<Item = T>,
{
    let mut buckets = create_empty_buckets(order);

    for (position, item) in items.into_iter().enumerate() {
        let Some(index) = order.position(item.category()) else {
            return Err(BinsortError::UnknownCategory {
                category: item.category().to_string(),
                position,
            });
        };
        trace!("item #{} -> bucket '{}'", position, item.category());
        buckets.buckets[index].items.push(item);
    }

    debug!(
        "Partitioned {} items into {} buckets",
        buckets.item_count(),
        buckets.len()
    );
    Ok(buckets)
}

/// Concatenate buckets in category order
///
/// `order` must be the order the map was built from.
pub fn flatten<T>(buckets: BucketMap<T>, order: &CategoryOrder) -> Result<Vec<T>> {
    if !buckets.matches(order) {
        return Err(BinsortError::OrderMismatch {
            expected: order.as_slice().to_vec(),
            found: buckets.categories().map(str::to_string).collect(),
        });
    }

    let mut sorted = Vec::with_capacity(buckets.item_count());
    for bucket in buckets.buckets {
        sorted.extend(bucket.items);
    }

    debug!("Flattened {} items", sorted.len());
    Ok(sorted)
}

/// Bin sort `items` by category priority
pub fn sort<T: Categorized>(items: Vec<T>, order: &CategoryOrder) -> Result<Vec<T>> {
    sort_with(items, order, |_, _| {})
}

/// Bin sort with a look at the filled buckets before they are drained
///
/// `inspect` runs once, between partition and flatten, and is skipped for
/// empty input.
pub fn sort_with<T, F>(items: Vec<T>, order: &CategoryOrder, inspect: F) -> Result<Vec<T>>
where
    T: Categorized,
    F: FnOnce(&BucketMap<T>, &CategoryOrder),
{
    if items.is_empty() {
        return Ok(Vec::new());
    }

    let buckets = partition(items, order)?;
    inspect(&buckets, order);
    flatten(buckets, order)
}
