//! Fire-and-forget cart and wishlist mutation calls.
//!
//! The engine does not own cart or wishlist state; it only triggers the
//! backend call and surfaces a [`Notice`] upward. Failures never mutate
//! filter or catalog state.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::ShopConfig;
use crate::state::types::Notice;

/// What: Trigger an add-to-cart call for a filtered item.
///
/// Inputs:
/// - `config`: Endpoint configuration.
/// - `slug`: Product slug.
/// - `quantity`: Units to add.
/// - `price`: Unit price at click time.
/// - `tx`: Channel receiving exactly one [`Notice`].
///
/// Output:
/// - The spawned task handle; callers normally drop it (fire and forget).
pub fn spawn_add_to_cart(
    config: &ShopConfig,
    slug: &str,
    quantity: u32,
    price: f64,
    tx: mpsc::UnboundedSender<Notice>,
) -> JoinHandle<()> {
    let url = config.cart_url();
    let slug = slug.to_string();
    tokio::spawn(async move {
        let body = serde_json::json!({ "slug": slug, "quantity": quantity, "price": price });
        let notice = match super::post_json(&url, &body).await {
            Ok(()) => Notice::CartAdded { slug: slug.clone(), quantity },
            Err(e) => {
                tracing::warn!(slug = %slug, error = %e, "add-to-cart failed");
                Notice::CartFailed { slug: slug.clone(), error: e.to_string() }
            }
        };
        let _ = tx.send(notice);
    })
}

/// Trigger an add-to-wishlist call; same fire-and-forget contract as
/// [`spawn_add_to_cart`].
pub fn spawn_add_to_wishlist(
    config: &ShopConfig,
    slug: &str,
    tx: mpsc::UnboundedSender<Notice>,
) -> JoinHandle<()> {
    let url = config.wishlist_url();
    let slug = slug.to_string();
    tokio::spawn(async move {
        let body = serde_json::json!({ "slug": slug });
        let notice = match super::post_json(&url, &body).await {
            Ok(()) => Notice::WishlistAdded { slug: slug.clone() },
            Err(e) => {
                tracing::warn!(slug = %slug, error = %e, "add-to-wishlist failed");
                Notice::WishlistFailed { slug: slug.clone(), error: e.to_string() }
            }
        };
        let _ = tx.send(notice);
    })
}
