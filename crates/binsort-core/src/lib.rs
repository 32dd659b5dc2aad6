pub mod binner;
pub mod category;
pub mod config;
pub mod demo;
pub mod error;
pub mod item;
pub mod render;

pub use binner::{create_empty_buckets, flatten, partition, sort, sort_with, Bucket, BucketMap};
pub use category::{
    BuiltinCategory, CategoryLabels, CategoryOrder, Scheme, BUILTIN_CANDY_CATEGORIES,
};
pub use config::{Config, DisplayConfig};
pub use error::{BinsortError, Result};
pub use item::{Categorized, Item, ItemList};
pub use render::{render_buckets, render_items};
