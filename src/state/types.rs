//! Core value types used by beadcart state.

/// Category assignment carried by each product.
///
/// The optional `main_group` is a coarser grouping used by the storefront's
/// top navigation; it is matched independently of the per-category slug.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CategoryRef {
    /// Backend category id.
    pub id: u64,
    /// Display title (e.g., "Rudraksha").
    #[serde(default)]
    pub title: String,
    /// URL-safe slug (e.g., "5-mukhi").
    #[serde(default)]
    pub slug: String,
    /// Optional main-category group this category belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_group: Option<String>,
}

/// Minimal product record held by the catalog store.
///
/// Immutable once fetched; the catalog store owns the list exclusively for
/// the page session. Missing numeric fields default to 0 at the parse
/// boundary so a single malformed record cannot break the derived view.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Product {
    /// Backend product id.
    pub id: u64,
    /// Display title; the free-text search target.
    pub title: String,
    /// Unit price.
    #[serde(default)]
    pub price: f64,
    /// Discount percentage, 0 to 100.
    #[serde(default)]
    pub discount: u8,
    /// Units in stock.
    #[serde(default)]
    pub stock: u32,
    /// Rating average, 0 to 5.
    #[serde(default)]
    pub rating: f64,
    /// Number of ratings behind the average.
    #[serde(default)]
    pub rating_count: u32,
    /// Category assignment.
    #[serde(default)]
    pub category: CategoryRef,
    /// Creation timestamp as epoch seconds; drives the "newest" sort and
    /// the recent-items projection.
    #[serde(default)]
    pub created_at: i64,
    /// Opaque image reference passed through to the UI.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image: String,
}

/// One category filter constraint.
///
/// A product satisfies the categories constraint when ANY active token
/// matches (OR across tokens); the constraint as a whole is ANDed with every
/// other predicate. An explicit sum type rather than string-prefix encoding,
/// so each matching rule is tied to its kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum CategoryToken {
    /// Match on the backend category id (UI checkbox source).
    Id(u64),
    /// Match on the category slug, case-insensitive (`category` URL param).
    Slug(String),
    /// Match on the main-category group, case-insensitive
    /// (`main-category` URL param).
    MainGroup(String),
}

/// Stock-availability filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Availability {
    /// No stock constraint.
    #[default]
    All,
    /// At least one unit in stock.
    InStock,
    /// Low stock: more than zero, at most five units.
    LowStock,
}

/// Threshold at or below which a product counts as low stock.
pub const LOW_STOCK_MAX: u32 = 5;

impl Availability {
    /// Map a UI/CLI parameter string; unknown values mean no constraint.
    #[must_use]
    pub fn from_param(param: &str) -> Self {
        match param.trim().to_ascii_lowercase().as_str() {
            "in-stock" => Self::InStock,
            "low-stock" => Self::LowStock,
            _ => Self::All,
        }
    }
}

/// Sorting mode for the derived product view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Default: keep catalog order untouched.
    #[default]
    Default,
    /// Price ascending.
    PriceLowToHigh,
    /// Price descending.
    PriceHighToLow,
    /// Rating average descending; ties keep input order.
    Rating,
    /// Discount percentage descending.
    Discount,
    /// Creation timestamp descending.
    Newest,
}

impl SortKey {
    /// What: Map a URL/UI parameter string to a sort key.
    ///
    /// Inputs:
    /// - `param`: Raw parameter value (e.g., `price-low-to-high`).
    ///
    /// Output:
    /// - The matching key; unknown values behave as [`SortKey::Default`].
    #[must_use]
    pub fn from_param(param: &str) -> Self {
        match param.trim().to_ascii_lowercase().as_str() {
            "price-low-to-high" => Self::PriceLowToHigh,
            "price-high-to-low" => Self::PriceHighToLow,
            "rating" => Self::Rating,
            "discount" => Self::Discount,
            "newest" => Self::Newest,
            _ => Self::Default,
        }
    }
}

/// One row of the category histogram: a category and how many catalog
/// products carry it. Depends only on the catalog, never on filters.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CategoryCount {
    /// Backend category id.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// URL-safe slug.
    pub slug: String,
    /// Number of catalog products in this category.
    pub count: usize,
}

/// Transient outcome of a fire-and-forget cart or wishlist call.
///
/// Notices are surfaced to the embedding UI and never mutate filter or
/// catalog state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// Cart mutation accepted by the backend.
    CartAdded {
        /// Product slug that was added.
        slug: String,
        /// Quantity added.
        quantity: u32,
    },
    /// Cart mutation failed.
    CartFailed {
        /// Product slug the call was for.
        slug: String,
        /// Human-readable failure description.
        error: String,
    },
    /// Wishlist mutation accepted by the backend.
    WishlistAdded {
        /// Product slug that was added.
        slug: String,
    },
    /// Wishlist mutation failed.
    WishlistFailed {
        /// Product slug the call was for.
        slug: String,
        /// Human-readable failure description.
        error: String,
    },
}

impl Notice {
    /// Whether this notice reports a failure.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::CartFailed { .. } | Self::WishlistFailed { .. })
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CartAdded { slug, quantity } => {
                write!(f, "added {quantity} x {slug} to cart")
            }
            Self::CartFailed { slug, error } => {
                write!(f, "could not add {slug} to cart: {error}")
            }
            Self::WishlistAdded { slug } => write!(f, "added {slug} to wishlist"),
            Self::WishlistFailed { slug, error } => {
                write!(f, "could not add {slug} to wishlist: {error}")
            }
        }
    }
}
