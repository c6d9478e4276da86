//! Catalog store: exclusive owner of the raw product list for the page
//! session, with a version counter for cache invalidation and read-only
//! aggregates in [`aggregates`].

mod aggregates;

use crate::state::types::Product;

/// Error taxonomy at the catalog fetch boundary.
///
/// Only the fetch can fail; filtering and sorting are pure functions over
/// in-memory data. An empty catalog is a valid terminal state, not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, timeout, non-2xx status).
    Network(String),
    /// The response body was not a usable catalog payload.
    Parse(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "catalog fetch failed: {msg}"),
            Self::Parse(msg) => write!(f, "catalog payload unreadable: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Result of one catalog fetch attempt.
pub type FetchOutcome = Result<Vec<Product>, FetchError>;

/// In-memory product catalog.
///
/// Created once per page load and replaced wholesale on refetch. The version
/// counter identifies catalog identity for the derived-view cache.
#[derive(Debug, Default)]
pub struct CatalogStore {
    /// Raw product list; never mutated in place, only replaced.
    products: Vec<Product>,
    /// Bumped on every replacement.
    version: u64,
    /// Set when the last fetch failed and the list degraded to empty.
    load_failed: bool,
}

impl CatalogStore {
    /// Fresh, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the product list.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Monotone version identifying the current list for caching.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Whether the last fetch failed.
    #[must_use]
    pub const fn load_failed(&self) -> bool {
        self.load_failed
    }

    /// Whether the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// What: Replace the product list wholesale.
    ///
    /// Inputs:
    /// - `products`: The new catalog contents.
    ///
    /// Output:
    /// - List swapped, version bumped, error flag cleared.
    pub fn replace(&mut self, products: Vec<Product>) {
        self.products = products;
        self.version += 1;
        self.load_failed = false;
    }

    /// What: Apply a fetch outcome, degrading failures to an empty list.
    ///
    /// Inputs:
    /// - `outcome`: `Ok(products)` or a [`FetchError`].
    ///
    /// Output:
    /// - On success the list is replaced; on failure it becomes empty and
    ///   the error flag is set so the UI can offer a retry. Never panics.
    pub fn apply(&mut self, outcome: FetchOutcome) {
        match outcome {
            Ok(products) => {
                tracing::info!(count = products.len(), "catalog loaded");
                self.replace(products);
            }
            Err(e) => {
                tracing::warn!(error = %e, "catalog fetch failed; degrading to empty list");
                self.replace(Vec::new());
                self.load_failed = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Applying outcomes bumps the version and tracks the error flag.
    ///
    /// - Input: A successful fetch, then a failed one
    /// - Output: Version advances each time; failure empties the list and
    ///   sets the flag; the next success clears it
    fn apply_tracks_version_and_failure() {
        let mut store = CatalogStore::new();
        assert_eq!(store.version(), 0);

        store.apply(Ok(vec![Product { id: 1, title: "bead".into(), ..Default::default() }]));
        assert_eq!(store.version(), 1);
        assert_eq!(store.len(), 1);
        assert!(!store.load_failed());

        store.apply(Err(FetchError::Network("connection refused".into())));
        assert_eq!(store.version(), 2);
        assert!(store.is_empty());
        assert!(store.load_failed());

        store.apply(Ok(Vec::new()));
        assert!(!store.load_failed());
        assert!(store.is_empty());
    }

    #[test]
    /// What: Fetch errors render their taxonomy in Display output.
    ///
    /// - Input: One Network and one Parse error
    /// - Output: Messages distinguish transport from payload problems
    fn fetch_error_display() {
        let n = FetchError::Network("timeout".into());
        let p = FetchError::Parse("not json".into());
        assert!(n.to_string().contains("fetch failed"));
        assert!(p.to_string().contains("unreadable"));
    }
}
