//! Derived-view cache: recomputes the filtered/sorted product list only when
//! one of its inputs actually changed, keyed on
//! (catalog version, filters fingerprint, sort key, effective search).
//! Deliberately independent of any render loop.

use crate::catalog::CatalogStore;
use crate::logic::{matches, sorted};
use crate::state::FilterState;
use crate::state::types::{CategoryCount, Product, SortKey};

/// Invalidation key for the filtered/sorted view.
#[derive(Clone, Debug, PartialEq, Eq)]
struct ViewKey {
    /// Catalog identity.
    catalog_version: u64,
    /// Constraint-set fingerprint.
    filters: u64,
    /// Active sort key.
    sort_key: SortKey,
    /// Effective search string (committed search, else live input).
    search: String,
}

/// Memoized derived view over catalog + filters.
///
/// The histogram is cached separately and keyed on the catalog version only,
/// so search keystrokes never force a histogram recount.
#[derive(Debug, Default)]
pub struct DerivedViewCache {
    /// Key the cached vectors were computed for.
    key: Option<ViewKey>,
    /// Products passing the predicate, in catalog order.
    filtered: Vec<Product>,
    /// Filtered products in sort order.
    sorted: Vec<Product>,
    /// Catalog version the histogram was computed for.
    histogram_version: Option<u64>,
    /// Cached histogram rows.
    histogram: Vec<CategoryCount>,
    /// Number of full recomputations performed (observability only).
    recomputes: u64,
}

impl DerivedViewCache {
    /// Fresh, empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// What: Ensure the cached view matches the current inputs.
    ///
    /// Inputs:
    /// - `store`: Catalog store (version + products).
    /// - `filters`: Committed filter state.
    /// - `sort_key`: Active sort key.
    /// - `effective_search`: Search string actually in effect; the committed
    ///   value wins over an uncommitted live-typed one, which the caller
    ///   resolves before calling in.
    ///
    /// Output:
    /// - Recomputes `filtered` and `sorted` when the key changed; otherwise
    ///   a no-op. Idempotent and safe to call arbitrarily often.
    pub fn refresh(
        &mut self,
        store: &CatalogStore,
        filters: &FilterState,
        sort_key: SortKey,
        effective_search: &str,
    ) {
        let mut effective = filters.clone();
        effective.search = effective_search.trim().to_string();
        let key = ViewKey {
            catalog_version: store.version(),
            filters: effective.fingerprint(),
            sort_key,
            search: effective.search.clone(),
        };
        if self.key.as_ref() == Some(&key) {
            return;
        }
        tracing::debug!(
            catalog_version = key.catalog_version,
            ?sort_key,
            search = %key.search,
            "recomputing derived view"
        );
        self.filtered = store
            .products()
            .iter()
            .filter(|p| matches(p, &effective))
            .cloned()
            .collect();
        self.sorted = sorted(&self.filtered, sort_key);
        self.key = Some(key);
        self.recomputes += 1;
    }

    /// Filtered products in catalog order, as of the last [`Self::refresh`].
    #[must_use]
    pub fn filtered(&self) -> &[Product] {
        &self.filtered
    }

    /// Filtered products in sort order, as of the last [`Self::refresh`].
    #[must_use]
    pub fn sorted(&self) -> &[Product] {
        &self.sorted
    }

    /// What: The category histogram, recomputed only on catalog change.
    ///
    /// Inputs:
    /// - `store`: Catalog store.
    ///
    /// Output:
    /// - Cached rows when the catalog version is unchanged, fresh rows
    ///   otherwise. Filter changes never invalidate this.
    pub fn histogram(&mut self, store: &CatalogStore) -> &[CategoryCount] {
        if self.histogram_version != Some(store.version()) {
            self.histogram = store.category_histogram();
            self.histogram_version = Some(store.version());
        }
        &self.histogram
    }

    /// How many times the view was fully recomputed.
    #[must_use]
    pub const fn recompute_count(&self) -> u64 {
        self.recomputes
    }
}
