//! Inventory settings.
//!
//! There is no config file: the compiled defaults below apply unless the
//! caller (the CLI) overrides them.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default location of the inventory document.
pub const DEFAULT_INVENTORY_PATH: &str = "inventory.json";

/// Items with fewer units than this are reported as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Path of the JSON inventory document.
    pub path: PathBuf,

    /// Low-stock threshold (strictly-below comparison).
    pub low_stock_threshold: i64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_INVENTORY_PATH),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl InventoryConfig {
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_threshold(mut self, threshold: i64) -> Self {
        self.low_stock_threshold = threshold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InventoryConfig::default();
        assert_eq!(config.path, PathBuf::from("inventory.json"));
        assert_eq!(config.low_stock_threshold, 5);
    }

    #[test]
    fn test_overrides() {
        let config = InventoryConfig::default()
            .with_path("/tmp/stock.json")
            .with_threshold(2);
        assert_eq!(config.path, PathBuf::from("/tmp/stock.json"));
        assert_eq!(config.low_stock_threshold, 2);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: InventoryConfig =
            serde_json::from_str(r#"{ "low_stock_threshold": 8 }"#).unwrap();
        assert_eq!(config.path, PathBuf::from(DEFAULT_INVENTORY_PATH));
        assert_eq!(config.low_stock_threshold, 8);
    }
}
