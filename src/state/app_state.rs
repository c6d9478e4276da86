//! `ShopState`: the facade the surrounding UI talks to. Aggregates the
//! catalog store, filter state, sort key, live search input, and the
//! derived-view cache, and owns the URL write discipline.

use crate::catalog::{CatalogStore, FetchOutcome};
use crate::logic::recent::{DEFAULT_RECENT_LIMIT, RecentVisibility, recent, visibility};
use crate::logic::view::DerivedViewCache;
use crate::state::filters::FilterState;
use crate::state::types::{Availability, CategoryCount, CategoryToken, Product, SortKey};
use crate::urlsync::{UrlStore, apply_on_mount, sync_url};

/// Aggregate engine state for one page session.
///
/// Single-writer: the embedding UI thread performs every mutation. All reads
/// going through the derived-view cache are idempotent.
#[derive(Debug)]
pub struct ShopState {
    /// Catalog store; exclusive owner of the product list.
    pub store: CatalogStore,
    /// Committed filter constraints.
    pub filters: FilterState,
    /// Active sort key.
    pub sort_key: SortKey,
    /// Live (uncommitted) search input; becomes effective immediately for
    /// the derived view unless a committed search is present, but reaches
    /// the URL only via [`Self::submit_search`].
    pub input: String,
    /// Manual preference for showing the recent panel; only honored while
    /// the derived visibility is `Visible`.
    pub recent_shown: bool,
    /// Number of items in the recent panel.
    pub recent_limit: usize,
    /// Memoized filtered/sorted view and histogram.
    view: DerivedViewCache,
}

impl Default for ShopState {
    fn default() -> Self {
        Self {
            store: CatalogStore::new(),
            filters: FilterState::default(),
            sort_key: SortKey::Default,
            input: String::new(),
            recent_shown: true,
            recent_limit: DEFAULT_RECENT_LIMIT,
            view: DerivedViewCache::new(),
        }
    }
}

impl ShopState {
    /// Fresh state with an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Initialize filter state from URL parameters (mount/navigation only).
    pub fn mount(&mut self, url: &dyn UrlStore) {
        apply_on_mount(url, &mut self.filters);
    }

    /// What: Apply a catalog fetch outcome and re-clamp the price range.
    ///
    /// Inputs:
    /// - `outcome`: Result from the fetch boundary.
    ///
    /// Output:
    /// - Store updated (failures degrade to empty + error flag), filter
    ///   price bounds rebound to the new catalog.
    pub fn apply_fetch(&mut self, outcome: FetchOutcome) {
        self.store.apply(outcome);
        self.filters.rebind_price_bounds(self.store.price_bounds());
    }

    /// Search string currently in effect: the committed/URL value wins over
    /// an uncommitted live-typed one.
    #[must_use]
    pub fn effective_search(&self) -> &str {
        if self.filters.search.trim().is_empty() { &self.input } else { &self.filters.search }
    }

    /// Filtered products in sort order, recomputed only when inputs changed.
    pub fn filtered_sorted(&mut self) -> &[Product] {
        let search = self.effective_search().to_string();
        self.view.refresh(&self.store, &self.filters, self.sort_key, &search);
        self.view.sorted()
    }

    /// Filtered products in catalog order.
    pub fn filtered(&mut self) -> &[Product] {
        let search = self.effective_search().to_string();
        self.view.refresh(&self.store, &self.filters, self.sort_key, &search);
        self.view.filtered()
    }

    /// Category histogram, cached independently of filter changes.
    pub fn category_histogram(&mut self) -> &[CategoryCount] {
        self.view.histogram(&self.store)
    }

    /// Number of filter dimensions deviating from the default.
    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        self.filters.active_filter_count()
    }

    /// Catalog price bounds (or the empty-catalog default).
    #[must_use]
    pub fn price_bounds(&self) -> (f64, f64) {
        self.store.price_bounds()
    }

    /// Catalog discount bounds.
    #[must_use]
    pub fn discount_bounds(&self) -> (u8, u8) {
        self.store.discount_bounds()
    }

    /// Set the price range, clamped to catalog bounds. No URL write.
    pub fn set_price_range(&mut self, min: f64, max: f64) {
        self.filters.set_price_range(min, max);
    }

    /// Set the minimum rating (0 = unconstrained, clamped to 5).
    pub fn set_min_rating(&mut self, rating: u8) {
        self.filters.min_rating = rating.min(5);
    }

    /// Set the minimum discount percentage (clamped to 100).
    pub fn set_discount_floor(&mut self, floor: u8) {
        self.filters.discount_floor = floor.min(100);
    }

    /// Set the stock-availability constraint.
    pub fn set_availability(&mut self, availability: Availability) {
        self.filters.availability = availability;
    }

    /// Toggle a category token (set semantics). No URL write; URL-level
    /// category state changes only via clear/reset.
    pub fn toggle_category_token(&mut self, token: CategoryToken) {
        self.filters.toggle_category_token(token);
    }

    /// Set the sort key.
    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    /// Update the live search input. Never writes the URL.
    pub fn set_live_search(&mut self, text: &str) {
        self.input = text.to_string();
    }

    /// What: Commit the live input as the search and write the URL.
    ///
    /// Inputs:
    /// - `url`: Location environment.
    ///
    /// Output:
    /// - `filters.search` becomes the trimmed live input; the query string
    ///   is rewritten from state. This is the only path that publishes a
    ///   typed search to the URL.
    pub fn submit_search(&mut self, url: &mut dyn UrlStore) {
        self.filters.search = self.input.trim().to_string();
        sync_url(url, &self.filters);
    }

    /// Clear the committed and live search and remove the URL parameter.
    pub fn clear_search(&mut self, url: &mut dyn UrlStore) {
        self.input.clear();
        self.filters.search.clear();
        sync_url(url, &self.filters);
    }

    /// Drop every category token and remove category URL parameters.
    pub fn clear_category_filter(&mut self, url: &mut dyn UrlStore) {
        self.filters.categories.clear();
        sync_url(url, &self.filters);
    }

    /// Reset every constraint, the live input, and the sort key; rewrite the
    /// (now empty) URL parameter set.
    pub fn reset_filters(&mut self, url: &mut dyn UrlStore) {
        self.filters.reset();
        self.input.clear();
        self.sort_key = SortKey::Default;
        sync_url(url, &self.filters);
    }

    /// The recency-sorted secondary view, regardless of visibility.
    #[must_use]
    pub fn recent_items(&self) -> Vec<Product> {
        recent(self.store.products(), self.recent_limit)
    }

    /// What: Whether the recent panel should render right now.
    ///
    /// Output:
    /// - `false` whenever the derived visibility is `Hidden` (active search
    ///   or category filter); otherwise the manual preference decides.
    #[must_use]
    pub fn recent_visible(&self) -> bool {
        visibility(&self.filters) == RecentVisibility::Visible && self.recent_shown
    }

    /// Flip the manual recent-panel preference; a no-op while suppressed.
    pub fn toggle_recent(&mut self) {
        if visibility(&self.filters) == RecentVisibility::Visible {
            self.recent_shown = !self.recent_shown;
        }
    }
}
