use serde::{Deserialize, Serialize};

/// Represents a saved bookmark.
///
/// Bookmarks reference their category by name; bookmarks created without
/// one land in `"Uncategorized"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub category: String,
}
