//! Read-only aggregates over the catalog: price/discount bounds and the
//! category histogram. All of these depend only on the catalog contents,
//! never on filter state.

use std::collections::BTreeMap;

use super::CatalogStore;
use crate::state::filters::DEFAULT_PRICE_CEILING;
use crate::state::types::CategoryCount;

impl CatalogStore {
    /// What: Price (min, max) over all products.
    ///
    /// Output:
    /// - Observed bounds, or `(0, 50000)` when the catalog is empty so the
    ///   UI slider always has a usable range.
    #[must_use]
    pub fn price_bounds(&self) -> (f64, f64) {
        if self.products().is_empty() {
            return (0.0, DEFAULT_PRICE_CEILING);
        }
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for p in self.products() {
            lo = lo.min(p.price);
            hi = hi.max(p.price);
        }
        (lo, hi)
    }

    /// Discount (min, max) over all products; `(0, 0)` when empty.
    #[must_use]
    pub fn discount_bounds(&self) -> (u8, u8) {
        let mut it = self.products().iter().map(|p| p.discount);
        it.next().map_or((0, 0), |first| {
            it.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)))
        })
    }

    /// What: Per-category product counts, grouped by category id.
    ///
    /// Output:
    /// - One [`CategoryCount`] per distinct category id, sorted
    ///   alphabetically by title (case-insensitive).
    ///
    /// Details:
    /// - Recomputing this on every keystroke would be wasteful; the
    ///   derived-view cache keys it on the catalog version alone.
    #[must_use]
    pub fn category_histogram(&self) -> Vec<CategoryCount> {
        let mut by_id: BTreeMap<u64, CategoryCount> = BTreeMap::new();
        for p in self.products() {
            by_id
                .entry(p.category.id)
                .and_modify(|c| c.count += 1)
                .or_insert_with(|| CategoryCount {
                    id: p.category.id,
                    title: p.category.title.clone(),
                    slug: p.category.slug.clone(),
                    count: 1,
                });
        }
        let mut rows: Vec<CategoryCount> = by_id.into_values().collect();
        rows.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        rows
    }
}
