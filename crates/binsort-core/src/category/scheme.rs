//! Category Scheme
//!
//! A priority order plus its display labels. Schemes are plain values, so
//! several independent schemes can coexist in one process.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::builtin::BUILTIN_CANDY_CATEGORIES;
use super::order::CategoryOrder;

/// Category identifier -> display label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryLabels {
    labels: BTreeMap<String, String>,
}

impl CategoryLabels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display label, falling back to the raw identifier
    pub fn label<'a>(&'a self, category: &'a str) -> &'a str {
        self.labels
            .get(category)
            .map(String::as_str)
            .unwrap_or(category)
    }

    /// Explicitly configured label, without fallback
    pub fn get(&self, category: &str) -> Option<&str> {
        self.labels.get(category).map(String::as_str)
    }

    /// (identifier, label) pairs, sorted by identifier
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.labels.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn insert(&mut self, category: impl Into<String>, label: impl Into<String>) {
        self.labels.insert(category.into(), label.into());
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CategoryLabels {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            labels: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Category order with display labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheme {
    #[serde(default = "builtin_order")]
    order: CategoryOrder,
    #[serde(default)]
    labels: CategoryLabels,
}

fn builtin_order() -> CategoryOrder {
    CategoryOrder::new(BUILTIN_CANDY_CATEGORIES.iter().map(|c| c.name)).unwrap_or_default()
}

impl Scheme {
    pub fn new(order: CategoryOrder, labels: CategoryLabels) -> Self {
        Self { order, labels }
    }

    /// Built-in candy scheme
    pub fn builtin() -> Self {
        let order = builtin_order();
        let labels = BUILTIN_CANDY_CATEGORIES
            .iter()
            .map(|c| (c.name, c.label))
            .collect();
        Self { order, labels }
    }

    pub fn order(&self) -> &CategoryOrder {
        &self.order
    }

    pub fn labels(&self) -> &CategoryLabels {
        &self.labels
    }

    /// Replace the order
    ///
    /// Labels are kept even for identifiers the new order drops, so a label
    /// can be set before its category is added and survives reordering.
    pub fn set_order(&mut self, order: CategoryOrder) {
        self.order = order;
    }

    pub fn set_label(&mut self, category: impl Into<String>, label: impl Into<String>) {
        self.labels.insert(category, label);
    }

    /// (identifier, label) pairs in priority order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.order.iter().map(|c| (c, self.labels.label(c)))
    }
}

impl Default for Scheme {
    fn default() -> Self {
        Self::builtin()
    }
}
