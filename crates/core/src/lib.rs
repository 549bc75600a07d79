//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod name;

pub use error::{StockError, StockResult};
pub use name::ItemName;
