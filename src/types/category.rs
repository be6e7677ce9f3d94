use serde::{Deserialize, Serialize};

/// Name of the built-in category that collects bookmarks without one.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Order value pinned to the built-in category so it always sorts last.
pub const UNCATEGORIZED_ORDER: i32 = 99999;

/// Swatch color the built-in category is created with.
pub const UNCATEGORIZED_COLOR: &str = "#9e9e9e";

/// Represents a named, colored group of bookmarks.
///
/// The name is the identity: bookmarks reference it and the HTTP surface
/// addresses categories by it. `order` controls display position, lower
/// first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub color: String,
    pub order: i32,
}

impl Category {
    /// The built-in category, as created at store initialization.
    pub fn uncategorized() -> Self {
        Category {
            name: UNCATEGORIZED.to_string(),
            color: UNCATEGORIZED_COLOR.to_string(),
            order: UNCATEGORIZED_ORDER,
        }
    }

    /// Whether this is the built-in category.
    pub fn is_uncategorized(&self) -> bool {
        self.name == UNCATEGORIZED
    }
}
