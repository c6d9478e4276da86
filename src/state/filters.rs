//! Filter state: every user-adjustable constraint on the catalog view.

use std::hash::{Hash, Hasher};

use crate::state::types::{Availability, CategoryToken};

/// Fallback price ceiling used before any catalog has been loaded.
pub const DEFAULT_PRICE_CEILING: f64 = 50_000.0;

/// The full set of active filter constraints.
///
/// Mutated only by `ShopState` setter operations and the URL synchronizer;
/// the catalog store never touches it. The price range is clamped to the
/// catalog-derived bounds held alongside it.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterState {
    /// Lower price bound, inclusive.
    pub min_price: f64,
    /// Upper price bound, inclusive.
    pub max_price: f64,
    /// Minimum rating average; 0 means unconstrained, else 1 to 5.
    pub min_rating: u8,
    /// Active category tokens, OR-combined among themselves.
    pub categories: Vec<CategoryToken>,
    /// Minimum discount percentage, 0 to 100.
    pub discount_floor: u8,
    /// Stock-availability constraint.
    pub availability: Availability,
    /// Committed search query (case-insensitive substring on title).
    /// Live keystrokes stay in `ShopState::input` until submitted.
    pub search: String,
    /// Catalog-derived (min, max) the price range is clamped to.
    bounds: (f64, f64),
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new((0.0, DEFAULT_PRICE_CEILING))
    }
}

impl FilterState {
    /// Unconstrained filter state over the given catalog price bounds.
    #[must_use]
    pub fn new(bounds: (f64, f64)) -> Self {
        Self {
            min_price: bounds.0,
            max_price: bounds.1,
            min_rating: 0,
            categories: Vec::new(),
            discount_floor: 0,
            availability: Availability::All,
            search: String::new(),
            bounds,
        }
    }

    /// Catalog price bounds this state clamps to.
    #[must_use]
    pub const fn price_bounds(&self) -> (f64, f64) {
        self.bounds
    }

    /// What: Set the price range, clamped to the catalog bounds.
    ///
    /// Inputs:
    /// - `min`/`max`: Requested range; swapped when given out of order.
    ///
    /// Output:
    /// - `min_price`/`max_price` updated within bounds, `min <= max`.
    pub fn set_price_range(&mut self, min: f64, max: f64) {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        self.min_price = lo.clamp(self.bounds.0, self.bounds.1);
        self.max_price = hi.clamp(self.bounds.0, self.bounds.1);
    }

    /// What: Re-clamp the range after a catalog replace changed the bounds.
    ///
    /// Inputs:
    /// - `bounds`: New catalog-derived (min, max).
    ///
    /// Output:
    /// - A previously unconstrained range snaps to the new bounds; a
    ///   narrowed range is clamped into them.
    pub fn rebind_price_bounds(&mut self, bounds: (f64, f64)) {
        let was_full = self.min_price <= self.bounds.0 && self.max_price >= self.bounds.1;
        self.bounds = bounds;
        if was_full {
            self.min_price = bounds.0;
            self.max_price = bounds.1;
        } else {
            self.min_price = self.min_price.clamp(bounds.0, bounds.1);
            self.max_price = self.max_price.clamp(bounds.0, bounds.1);
        }
    }

    /// Add the token if absent, remove it if present (set semantics).
    pub fn toggle_category_token(&mut self, token: CategoryToken) {
        if let Some(pos) = self.categories.iter().position(|t| *t == token) {
            self.categories.remove(pos);
        } else {
            self.categories.push(token);
        }
    }

    /// Whether the price range is narrower than the catalog bounds.
    #[must_use]
    pub fn is_price_constrained(&self) -> bool {
        self.min_price > self.bounds.0 || self.max_price < self.bounds.1
    }

    /// What: Count the constraints deviating from the unconstrained default.
    ///
    /// Output:
    /// - One count per active dimension: search, price range, rating floor,
    ///   categories (as a whole), discount floor, availability.
    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        usize::from(!self.search.trim().is_empty())
            + usize::from(self.is_price_constrained())
            + usize::from(self.min_rating > 0)
            + usize::from(!self.categories.is_empty())
            + usize::from(self.discount_floor > 0)
            + usize::from(self.availability != Availability::All)
    }

    /// What: Stable fingerprint of the constraint set for cache keys.
    ///
    /// Output:
    /// - A u64 hash covering every constraint; float fields hash their bit
    ///   patterns so equal states always collide and changed states
    ///   practically never do.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        let mut h = std::collections::hash_map::DefaultHasher::new();
        self.min_price.to_bits().hash(&mut h);
        self.max_price.to_bits().hash(&mut h);
        self.min_rating.hash(&mut h);
        self.categories.hash(&mut h);
        self.discount_floor.hash(&mut h);
        self.availability.hash(&mut h);
        self.search.to_lowercase().hash(&mut h);
        h.finish()
    }

    /// Reset every constraint, keeping the catalog bounds.
    pub fn reset(&mut self) {
        *self = Self::new(self.bounds);
    }
}
