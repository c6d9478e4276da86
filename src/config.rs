//! Runtime configuration: backend endpoints and engine limits, with
//! environment-variable overrides on top of hardcoded defaults.

use crate::logic::recent::DEFAULT_RECENT_LIMIT;

/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "BEADCART_API_URL";
/// Environment variable overriding the request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "BEADCART_TIMEOUT_SECS";
/// Environment variable overriding the recent-panel size.
pub const ENV_RECENT_LIMIT: &str = "BEADCART_RECENT_LIMIT";

/// Backend endpoints and engine limits.
#[derive(Clone, Debug)]
pub struct ShopConfig {
    /// Base URL of the storefront REST API.
    pub api_base: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Number of items in the recent panel.
    pub recent_limit: usize,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:8000/api".to_string(),
            timeout_secs: 30,
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

impl ShopConfig {
    /// What: Build a config from defaults plus environment overrides.
    ///
    /// Output:
    /// - Defaults with `BEADCART_API_URL`, `BEADCART_TIMEOUT_SECS`, and
    ///   `BEADCART_RECENT_LIMIT` applied when set and parseable; unparseable
    ///   values are ignored.
    #[must_use]
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(base) = std::env::var(ENV_API_URL)
            && !base.trim().is_empty()
        {
            cfg.api_base = base.trim().trim_end_matches('/').to_string();
        }
        if let Some(secs) = std::env::var(ENV_TIMEOUT_SECS).ok().and_then(|v| v.parse().ok()) {
            cfg.timeout_secs = secs;
        }
        if let Some(n) = std::env::var(ENV_RECENT_LIMIT).ok().and_then(|v| v.parse().ok()) {
            cfg.recent_limit = n;
        }
        cfg
    }

    /// Catalog endpoint.
    #[must_use]
    pub fn catalog_url(&self) -> String {
        format!("{}/products", self.api_base.trim_end_matches('/'))
    }

    /// Cart mutation endpoint.
    #[must_use]
    pub fn cart_url(&self) -> String {
        format!("{}/cart", self.api_base.trim_end_matches('/'))
    }

    /// Wishlist mutation endpoint.
    #[must_use]
    pub fn wishlist_url(&self) -> String {
        format!("{}/wishlist", self.api_base.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Endpoint helpers join paths without doubled slashes.
    ///
    /// - Input: A base URL with a trailing slash
    /// - Output: Clean `/products`, `/cart`, `/wishlist` URLs
    fn endpoint_urls_join_cleanly() {
        let cfg = ShopConfig { api_base: "https://shop.example.com/api/".into(), ..Default::default() };
        assert_eq!(cfg.catalog_url(), "https://shop.example.com/api/products");
        assert_eq!(cfg.cart_url(), "https://shop.example.com/api/cart");
        assert_eq!(cfg.wishlist_url(), "https://shop.example.com/api/wishlist");
    }

    #[test]
    /// What: Defaults are sane without any environment set.
    ///
    /// - Input: `ShopConfig::default()`
    /// - Output: Local API base, 30s timeout, recent limit 6
    fn defaults() {
        let cfg = ShopConfig::default();
        assert_eq!(cfg.timeout_secs, 30);
        assert_eq!(cfg.recent_limit, 6);
        assert!(cfg.catalog_url().ends_with("/products"));
    }
}
