//! Inventory store.
//!
//! Holds the item-to-quantity mapping and everything that acts on it: stock
//! mutations and queries, JSON persistence, and the printed report.

pub mod config;
pub mod persistence;
pub mod report;
pub mod stock;

pub use config::{DEFAULT_INVENTORY_PATH, DEFAULT_LOW_STOCK_THRESHOLD, InventoryConfig};
pub use persistence::{LoadOutcome, PersistenceError};
pub use stock::{Inventory, Removal, Summary};
