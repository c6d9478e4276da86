//! Modularized state module.
//!
//! Value types, filter state, and the `ShopState` facade live in submodules;
//! the public API is re-exported under `crate::state::*`.

pub mod app_state;
pub mod filters;
pub mod types;

pub use app_state::ShopState;
pub use filters::FilterState;
pub use types::{
    Availability, CategoryCount, CategoryRef, CategoryToken, Notice, Product, SortKey,
};
