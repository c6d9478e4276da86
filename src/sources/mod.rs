//! Network boundary: catalog fetch and fire-and-forget cart/wishlist calls.
//!
//! Everything in here talks to the backend REST API through one shared,
//! pooled HTTP client and reports results over channels so the synchronous
//! engine never blocks on the network.

use std::sync::LazyLock;
use std::time::Duration;

pub mod cart;
pub mod catalog;

/// Boxed-error result used inside the network boundary.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Shared HTTP client with conservative timeouts.
///
/// Connection pooling is enabled by default in `reqwest::Client`.
static HTTP_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .user_agent(concat!("beadcart/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client")
});

/// Access the shared HTTP client.
pub(crate) fn client() -> &'static reqwest::Client {
    &HTTP_CLIENT
}

/// POST a JSON body and treat any non-2xx status as an error.
pub(crate) async fn post_json(url: &str, body: &serde_json::Value) -> Result<()> {
    let resp = client().post(url).json(body).send().await?;
    resp.error_for_status()?;
    Ok(())
}

pub use cart::{spawn_add_to_cart, spawn_add_to_wishlist};
pub use catalog::{FetchHandle, products_from_json, spawn_fetch};
