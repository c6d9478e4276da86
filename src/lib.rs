//! Library entry for beadcart exposing the catalog engine for integration tests.

pub mod args;
pub mod catalog;
pub mod config;
pub mod logic;
pub mod sources;
pub mod state;
pub mod urlsync;
pub mod util;
