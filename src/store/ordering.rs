//! Pure helpers for category display order.

use crate::types::category::{Category, UNCATEGORIZED_ORDER};

/// Order a category sorts at, with the built-in category pinned last no
/// matter what its stored value says.
fn effective_order(category: &Category) -> i32 {
    if category.is_uncategorized() {
        UNCATEGORIZED_ORDER
    } else {
        category.order
    }
}

/// Computes the order value for the next category: one past the highest
/// order among user categories, or 0 when none exist yet.
pub fn next_order(categories: &[Category]) -> i32 {
    categories
        .iter()
        .filter(|c| !c.is_uncategorized())
        .map(|c| c.order)
        .max()
        .map(|max| max + 1)
        .unwrap_or(0)
}

/// Stable-sorts categories for display, ascending by order with the
/// built-in category forced last.
pub fn sort_for_display(categories: &mut [Category]) {
    categories.sort_by_key(|c| effective_order(c));
}

/// Rewrites order values from an explicit name sequence, then sorts.
///
/// Each user category named in `desired` takes the index of its first
/// occurrence; categories left out keep their stored order; names that
/// match nothing are ignored. The built-in category is always reset to
/// its pinned order, even if the sequence names it.
pub fn apply_reorder(categories: &mut [Category], desired: &[String]) {
    for category in categories.iter_mut() {
        if category.is_uncategorized() {
            category.order = UNCATEGORIZED_ORDER;
        } else if let Some(index) = desired.iter().position(|name| name == &category.name) {
            category.order = index as i32;
        }
    }
    sort_for_display(categories);
}
