//! beadcart binary entrypoint kept minimal: load a catalog, run it through
//! the filter/sort engine, print the derived view.

use clap::Parser;
use tokio::sync::mpsc;

use beadcart::args::Args;
use beadcart::catalog::{FetchError, FetchOutcome};
use beadcart::config::ShopConfig;
use beadcart::sources;
use beadcart::state::{Availability, CategoryToken, ShopState, SortKey};
use beadcart::urlsync::MemoryUrl;

/// Boxed-error result for the binary.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing(&args.log_level);
    if let Err(e) = run(args).await {
        tracing::error!(error = %e, "beadcart failed");
        std::process::exit(1);
    }
}

/// Initialize a stderr tracing subscriber honoring `RUST_LOG` or the flag.
fn init_tracing(level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the catalog, apply CLI and query-string filters, print the view.
async fn run(args: Args) -> Result<()> {
    let config = ShopConfig::from_env();
    let mut app = ShopState::new();
    app.recent_limit = config.recent_limit;

    app.apply_fetch(load_catalog(&args, &config).await);
    if app.store.load_failed() {
        tracing::warn!("catalog unavailable; showing an empty view");
    }

    let mut url = MemoryUrl::from_query(args.query_string.as_deref().unwrap_or(""));
    app.mount(&url);

    apply_cli_filters(&mut app, &mut url, &args);
    print_view(&mut app, &url, args.histogram);
    Ok(())
}

/// Fetch from file, explicit URL, or the configured endpoint.
async fn load_catalog(args: &Args, config: &ShopConfig) -> FetchOutcome {
    if let Some(path) = &args.file {
        let body = std::fs::read_to_string(path)
            .map_err(|e| FetchError::Network(format!("read {path}: {e}")))?;
        return sources::products_from_json(&body);
    }
    let (tx, mut rx) = mpsc::unbounded_channel();
    let _handle = args.url.as_ref().map_or_else(
        || sources::spawn_fetch(config, tx.clone()),
        |url| sources::catalog::spawn_fetch_url(url.clone(), config.timeout_secs, tx.clone()),
    );
    drop(tx);
    rx.recv()
        .await
        .unwrap_or_else(|| Err(FetchError::Network("fetch task dropped".into())))
}

/// Translate CLI flags into engine operations.
fn apply_cli_filters(app: &mut ShopState, url: &mut MemoryUrl, args: &Args) {
    let (lo, hi) = app.price_bounds();
    if args.min_price.is_some() || args.max_price.is_some() {
        app.set_price_range(args.min_price.unwrap_or(lo), args.max_price.unwrap_or(hi));
    }
    if let Some(r) = args.min_rating {
        app.set_min_rating(r);
    }
    if let Some(d) = args.discount_floor {
        app.set_discount_floor(d);
    }
    if let Some(a) = &args.availability {
        app.set_availability(Availability::from_param(a));
    }
    for slug in &args.category {
        app.toggle_category_token(CategoryToken::Slug(slug.clone()));
    }
    if let Some(key) = &args.sort {
        app.set_sort_key(SortKey::from_param(key));
    }
    if let Some(q) = &args.search {
        app.set_live_search(q);
        app.submit_search(url);
    }
}

/// Print the derived view, aggregates, and the recent panel when visible.
fn print_view(app: &mut ShopState, url: &MemoryUrl, histogram: bool) {
    let active = app.active_filter_count();
    let total = app.store.len();
    let view: Vec<_> = app.filtered_sorted().to_vec();
    println!("{} of {total} products ({active} active filters)", view.len());
    if !url.query().is_empty() {
        println!("url: ?{}", url.query());
    }
    for p in &view {
        println!(
            "{:>6}  {:>10.2}  {:>3}%  stock {:>4}  {:.1}*  {}",
            p.id, p.price, p.discount, p.stock, p.rating, p.title
        );
    }
    if histogram {
        println!("categories:");
        for row in app.category_histogram() {
            println!("  {:>4}  {} ({})", row.count, row.title, row.slug);
        }
    }
    if app.recent_visible() {
        println!("recently added:");
        for p in app.recent_items() {
            println!("  {:>6}  {}", p.id, p.title);
        }
    }
}
