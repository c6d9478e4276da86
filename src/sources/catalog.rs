//! Catalog fetch: one cancellable GET per page load, with tolerant payload
//! parsing so a single malformed record cannot break the derived view.

use std::time::Duration;

use serde_json::Value;
use tokio::sync::mpsc;

use crate::catalog::{FetchError, FetchOutcome};
use crate::config::ShopConfig;
use crate::state::types::{CategoryRef, Product};
use crate::util::{f64_of, s, ts_of, u64_of};

/// Handle on an in-flight catalog fetch.
///
/// Dropping the handle leaves the task running; call [`Self::cancel`] on
/// component teardown so a late response can never mutate state after
/// unmount.
#[derive(Debug)]
pub struct FetchHandle {
    /// The spawned fetch task.
    handle: tokio::task::JoinHandle<()>,
}

impl FetchHandle {
    /// Abort the in-flight request; the outcome channel closes unsent.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Whether the fetch task has completed (sent or aborted).
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Spawn the catalog fetch for the configured endpoint.
pub fn spawn_fetch(config: &ShopConfig, tx: mpsc::UnboundedSender<FetchOutcome>) -> FetchHandle {
    spawn_fetch_url(config.catalog_url(), config.timeout_secs, tx)
}

/// What: Spawn a catalog fetch against an explicit URL.
///
/// Inputs:
/// - `url`: Endpoint returning the catalog payload.
/// - `timeout_secs`: Per-request timeout.
/// - `tx`: Channel receiving exactly one [`FetchOutcome`].
///
/// Output:
/// - A [`FetchHandle`] for cancellation. No retry policy wraps the request;
///   failure degrades to an error outcome the store turns into an empty
///   catalog.
pub fn spawn_fetch_url(
    url: String,
    timeout_secs: u64,
    tx: mpsc::UnboundedSender<FetchOutcome>,
) -> FetchHandle {
    let handle = tokio::spawn(async move {
        tracing::debug!(url = %url, "fetching catalog");
        let outcome = fetch_catalog(&url, timeout_secs).await;
        let _ = tx.send(outcome);
    });
    FetchHandle { handle }
}

/// Perform the GET and parse the body.
async fn fetch_catalog(url: &str, timeout_secs: u64) -> FetchOutcome {
    let resp = super::client()
        .get(url)
        .timeout(Duration::from_secs(timeout_secs))
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(|e| FetchError::Network(e.to_string()))?;
    let v: Value = resp
        .json()
        .await
        .map_err(|e| FetchError::Parse(e.to_string()))?;
    products_from_value(&v)
}

/// What: Parse a catalog payload from raw JSON text.
///
/// Inputs:
/// - `body`: JSON text, either a top-level product array or an object with
///   a `products` array (the backend also ships a secondary recent-products
///   list there; it is ignored, recency is derived locally).
///
/// Output:
/// - The parsed product list, or [`FetchError::Parse`] when the body is not
///   JSON or carries no product array at all.
pub fn products_from_json(body: &str) -> Result<Vec<Product>, FetchError> {
    let v: Value =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;
    products_from_value(&v)
}

/// Shape check shared by the HTTP and file paths: a body without any product
/// array is a parse failure, never an empty catalog.
fn products_from_value(v: &Value) -> Result<Vec<Product>, FetchError> {
    if v.get("products").is_some_and(Value::is_array) || v.is_array() {
        Ok(parse_products(v))
    } else {
        Err(FetchError::Parse("no product array in payload".into()))
    }
}

/// Extract the product array from either payload shape.
fn parse_products(v: &Value) -> Vec<Product> {
    let arr = v
        .get("products")
        .and_then(Value::as_array)
        .or_else(|| v.as_array());
    let Some(arr) = arr else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(arr.len());
    for raw in arr {
        if let Some(p) = parse_product(raw) {
            out.push(p);
        } else {
            tracing::debug!(record = %raw, "dropping unidentifiable product record");
        }
    }
    out
}

/// What: Parse one product record, defaulting missing numerics to 0.
///
/// Inputs:
/// - `v`: One JSON record.
///
/// Output:
/// - `Some(Product)` when the record is identifiable (id or title present);
///   `None` otherwise. Mistyped numeric fields become 0 instead of failing
///   the whole catalog.
fn parse_product(v: &Value) -> Option<Product> {
    let id = u64_of(v, "id");
    let title = s(v, "title");
    if id == 0 && title.is_empty() {
        return None;
    }
    let (rating, rating_count) = rating_of(v);
    Some(Product {
        id,
        title,
        price: f64_of(v, "price"),
        discount: clamp_u8(u64_of(v, "discount"), 100),
        stock: u32::try_from(u64_of(v, "stock")).unwrap_or(u32::MAX),
        rating,
        rating_count,
        category: category_of(v.get("category")),
        created_at: ts_of(v, &["createdAt", "created_at"]),
        image: s(v, "image"),
    })
}

/// Rating as either a bare number or an `{average, count}` object.
fn rating_of(v: &Value) -> (f64, u32) {
    match v.get("rating") {
        Some(r @ Value::Object(_)) => (
            f64_of(r, "average"),
            u32::try_from(u64_of(r, "count")).unwrap_or(u32::MAX),
        ),
        Some(n) if n.is_number() => (
            n.as_f64().unwrap_or_default(),
            u32::try_from(u64_of(v, "ratingCount")).unwrap_or(u32::MAX),
        ),
        _ => (0.0, 0),
    }
}

/// Category reference; accepts both camelCase and snake_case group keys.
fn category_of(v: Option<&Value>) -> CategoryRef {
    let Some(v) = v else {
        return CategoryRef::default();
    };
    let group = [s(v, "mainCategory"), s(v, "main_category")]
        .into_iter()
        .find(|g| !g.is_empty());
    CategoryRef {
        id: u64_of(v, "id"),
        title: s(v, "title"),
        slug: s(v, "slug"),
        main_group: group,
    }
}

/// Clamp a raw u64 into a bounded u8 field.
fn clamp_u8(value: u64, max: u8) -> u8 {
    u8::try_from(value.min(u64::from(max))).unwrap_or(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Tolerant parsing defaults missing numerics and keeps the record.
    ///
    /// - Input: A product without price/stock and one with full fields
    /// - Output: Both parse; the sparse one carries zeros
    fn parse_defaults_missing_numerics() {
        let body = r#"{"products": [
            {"id": 1, "title": "5 Mukhi Rudraksha"},
            {"id": 2, "title": "Tulsi Mala", "price": 5000, "discount": 250,
             "stock": 3, "rating": {"average": 3.5, "count": 12},
             "category": {"id": 4, "title": "Mala", "slug": "mala", "mainCategory": "beads"},
             "createdAt": "2024-06-01T00:00:00Z", "image": "cdn/mala.webp"}
        ]}"#;
        let products = products_from_json(body).expect("payload parses");
        assert_eq!(products.len(), 2);
        assert!((products[0].price - 0.0).abs() < f64::EPSILON);
        assert_eq!(products[0].stock, 0);
        assert_eq!(products[1].discount, 100, "discount clamps to 100");
        assert!((products[1].rating - 3.5).abs() < f64::EPSILON);
        assert_eq!(products[1].rating_count, 12);
        assert_eq!(products[1].category.main_group.as_deref(), Some("beads"));
        assert!(products[1].created_at > 0);
    }

    #[test]
    /// What: Unidentifiable records are dropped without failing the batch.
    ///
    /// - Input: A record with neither id nor title between two valid ones
    /// - Output: Two products survive
    fn parse_drops_unidentifiable_records() {
        let body = r#"[{"id": 1, "title": "a"}, {"price": 99}, {"id": 2, "title": "b"}]"#;
        let products = products_from_json(body).expect("payload parses");
        assert_eq!(products.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    /// What: Non-catalog bodies surface a parse error, not a panic.
    ///
    /// - Input: Valid JSON without any product array, and invalid JSON
    /// - Output: `FetchError::Parse` in both cases
    fn parse_rejects_non_catalog_bodies() {
        assert!(matches!(
            products_from_json(r#"{"hello": "world"}"#),
            Err(FetchError::Parse(_))
        ));
        assert!(matches!(products_from_json("not json"), Err(FetchError::Parse(_))));
    }

    #[test]
    /// What: A bare numeric rating with a sibling count also parses.
    ///
    /// - Input: `"rating": 4.2, "ratingCount": 37`
    /// - Output: Average and count both populated
    fn parse_flat_rating_shape() {
        let body = r#"[{"id": 7, "title": "bead", "rating": 4.2, "ratingCount": 37}]"#;
        let products = products_from_json(body).expect("payload parses");
        assert!((products[0].rating - 4.2).abs() < f64::EPSILON);
        assert_eq!(products[0].rating_count, 37);
    }

    #[tokio::test]
    /// What: An HTTP 200 without a product array fails like the file path.
    ///
    /// - Input: A local server answering `{"hello": "world"}` with status 200
    /// - Output: The fetch outcome is `FetchError::Parse`, not an empty catalog
    async fn fetch_rejects_non_catalog_body() {
        use std::io::{Read, Write};

        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let server = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept");
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            let body = r#"{"hello": "world"}"#;
            let resp = format!(
                "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\n\
                 content-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(resp.as_bytes()).expect("write response");
        });

        let (tx, mut rx) = mpsc::unbounded_channel();
        let _handle = spawn_fetch_url(format!("http://{addr}/products"), 5, tx);
        let outcome = rx.recv().await.expect("one outcome");
        assert!(matches!(outcome, Err(FetchError::Parse(_))));
        server.join().expect("server thread");
    }

    #[tokio::test]
    /// What: Cancelling an in-flight fetch closes the channel unsent.
    ///
    /// - Input: A fetch against an unroutable endpoint, aborted immediately
    /// - Output: The receiver observes a closed channel, never an outcome
    async fn cancelled_fetch_sends_nothing() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = spawn_fetch_url("http://203.0.113.1:81/products".into(), 30, tx);
        handle.cancel();
        let got = tokio::time::timeout(std::time::Duration::from_secs(2), rx.recv())
            .await
            .expect("channel closes promptly");
        assert!(got.is_none());
    }
}
