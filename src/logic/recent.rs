//! Recent-items projection: a secondary recency-sorted view of the catalog,
//! auto-suppressed while search or category filters are active.

use crate::state::FilterState;
use crate::state::types::Product;

/// Default number of items in the recent panel.
pub const DEFAULT_RECENT_LIMIT: usize = 6;

/// Visibility state of the recent panel, derived from filter state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecentVisibility {
    /// No committed search and no category tokens active.
    Visible,
    /// Suppressed: a search or category filter is in effect.
    Hidden,
}

/// What: Derive the recent-panel visibility from the filter state.
///
/// Inputs:
/// - `filters`: Current committed filter state.
///
/// Output:
/// - `Hidden` when a committed search or any category token is active,
///   `Visible` otherwise. The transition is automatic; a manual toggle is
///   only honored while `Visible` (see `ShopState::recent_visible`).
#[must_use]
pub fn visibility(filters: &FilterState) -> RecentVisibility {
    if filters.search.trim().is_empty() && filters.categories.is_empty() {
        RecentVisibility::Visible
    } else {
        RecentVisibility::Hidden
    }
}

/// What: The `n` most recently added products.
///
/// Inputs:
/// - `products`: Catalog contents, left untouched.
/// - `n`: Slice length (typically [`DEFAULT_RECENT_LIMIT`]).
///
/// Output:
/// - A new vector sorted by creation timestamp descending, truncated to `n`.
#[must_use]
pub fn recent(products: &[Product], n: usize) -> Vec<Product> {
    let mut out = products.to_vec();
    out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    out.truncate(n);
    out
}
