//! Pure engine logic: the per-product predicate, the sort engine, the
//! derived-view cache, and the recent-items projection. Nothing in this
//! module performs I/O; everything is deterministic over in-memory data.

pub mod filter;
pub mod recent;
pub mod sort;
pub mod view;

pub use filter::matches;
pub use recent::{RecentVisibility, recent};
pub use sort::sorted;
pub use view::DerivedViewCache;
