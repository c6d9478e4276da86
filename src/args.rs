//! Command-line argument definition for the demo binary.

use clap::Parser;

/// beadcart - inspect a storefront catalog through the filter/sort engine
#[derive(Parser, Debug)]
#[command(name = "beadcart")]
#[command(version)]
#[command(about = "Load a product catalog and print the filtered, sorted view", long_about = None)]
pub struct Args {
    /// Fetch the catalog from this URL (default: configured API endpoint)
    #[arg(long)]
    pub url: Option<String>,

    /// Read the catalog from a local JSON file instead of the network
    #[arg(long, conflicts_with = "url")]
    pub file: Option<String>,

    /// Simulated browser query string, e.g. "?category=5-mukhi&search=mala"
    #[arg(long)]
    pub query_string: Option<String>,

    /// Search query, submitted as if typed and committed
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort key: default, price-low-to-high, price-high-to-low, rating,
    /// discount, newest (unknown values fall back to default)
    #[arg(long)]
    pub sort: Option<String>,

    /// Minimum price
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Maximum price
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Minimum rating average, 1-5 (0 disables)
    #[arg(long)]
    pub min_rating: Option<u8>,

    /// Minimum discount percentage
    #[arg(long)]
    pub discount_floor: Option<u8>,

    /// Availability: all, in-stock, low-stock
    #[arg(long)]
    pub availability: Option<String>,

    /// Category slug filter; repeatable, OR-combined
    #[arg(long)]
    pub category: Vec<String>,

    /// Print the category histogram
    #[arg(long)]
    pub histogram: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
