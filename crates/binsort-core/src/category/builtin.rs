//! Builtin Category Definitions
//!
//! Candy categories ordered by cost, cheapest first.

/// Built-in candy scheme, in priority order
pub const BUILTIN_CANDY_CATEGORIES: &[BuiltinCategory] = &[
    BuiltinCategory {
        name: "chewing_gum",
        label: "Chewing gum",
    },
    BuiltinCategory {
        name: "lollipop",
        label: "Lollipops",
    },
    BuiltinCategory {
        name: "gummy",
        label: "Gummies",
    },
    BuiltinCategory {
        name: "white_chocolate",
        label: "White chocolate",
    },
    BuiltinCategory {
        name: "dark_chocolate",
        label: "Dark chocolate",
    },
    BuiltinCategory {
        name: "fitness",
        label: "Fitness candy",
    },
];

/// Static definition of a built-in category
#[derive(Debug, Clone)]
pub struct BuiltinCategory {
    /// Category identifier (unique)
    pub name: &'static str,
    /// Display label
    pub label: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_categories_are_unique() {
        let names: HashSet<_> = BUILTIN_CANDY_CATEGORIES.iter().map(|c| c.name).collect();
        assert_eq!(names.len(), BUILTIN_CANDY_CATEGORIES.len());
    }

    #[test]
    fn test_builtin_order_cheapest_first() {
        assert_eq!(BUILTIN_CANDY_CATEGORIES[0].name, "chewing_gum");
        assert_eq!(
            BUILTIN_CANDY_CATEGORIES.last().map(|c| c.name),
            Some("fitness")
        );
    }
}
