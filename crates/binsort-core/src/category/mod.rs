//! # Category Module
//!
//! Category schemes: which categories exist, in which priority order, and
//! how they are labelled for display.
//!
//! ## Module layout
//!
//! - `builtin`: built-in candy scheme (cheapest to most expensive)
//! - `order`: validated [`CategoryOrder`]
//! - `scheme`: [`Scheme`] = order + [`CategoryLabels`]
//!
//! ## Example
//!
//! ```rust
//! use binsort_core::category::{CategoryOrder, Scheme};
//!
//! let scheme = Scheme::builtin();
//! assert_eq!(scheme.order().first(), Some("chewing_gum"));
//! assert_eq!(scheme.labels().label("gummy"), "Gummies");
//!
//! // Duplicates are rejected up front
//! assert!(CategoryOrder::new(["gum", "gum"]).is_err());
//! ```

mod builtin;
mod order;
mod scheme;

pub use builtin::{BuiltinCategory, BUILTIN_CANDY_CATEGORIES};
pub use order::CategoryOrder;
pub use scheme::{CategoryLabels, Scheme};
