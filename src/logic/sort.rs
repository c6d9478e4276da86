//! Sort engine: non-mutating ordering of the filtered list.

use std::cmp::Ordering;

use crate::state::types::{Product, SortKey};

/// What: Return a newly ordered copy of `list` for the given key.
///
/// Inputs:
/// - `list`: Filtered products, left untouched.
/// - `key`: Sorting mode.
///
/// Output:
/// - A new vector with the same element set; [`SortKey::Default`] keeps the
///   input order as-is.
///
/// Details:
/// - All comparisons use stable sorts, so equal-key items keep their
///   relative input order (rating ties stay unresolved on purpose).
#[must_use]
pub fn sorted(list: &[Product], key: SortKey) -> Vec<Product> {
    let mut out = list.to_vec();
    match key {
        SortKey::Default => {}
        SortKey::PriceLowToHigh => out.sort_by(|a, b| cmp_f64(a.price, b.price)),
        SortKey::PriceHighToLow => out.sort_by(|a, b| cmp_f64(b.price, a.price)),
        SortKey::Rating => out.sort_by(|a, b| cmp_f64(b.rating, a.rating)),
        SortKey::Discount => out.sort_by(|a, b| b.discount.cmp(&a.discount)),
        SortKey::Newest => out.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }
    out
}

/// Total order over floats; NaN compares equal so it never panics.
fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
