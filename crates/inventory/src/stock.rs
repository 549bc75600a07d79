use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use stockroom_core::{ItemName, StockError, StockResult};

/// In-memory stock levels keyed by item name.
///
/// Invariant: every stored quantity is at least 1. Items that reach zero are
/// dropped from the mapping, so presence implies stock on hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Inventory {
    items: BTreeMap<ItemName, i64>,
}

/// Outcome of a successful removal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Removal {
    /// Units are still held after the removal.
    Remaining(i64),
    /// The last units were removed and the item was dropped.
    Depleted,
}

/// Point-in-time view of the inventory.
///
/// `items` is an owned copy; changing it has no effect on the inventory it came from.
/// `total_units` is widened to `i128` so it never saturates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_units: i128,
    pub distinct_items: usize,
    pub low_stock: Vec<String>,
    pub items: BTreeMap<String, i64>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from entries that were already checked by the caller.
    ///
    /// Zero quantities are skipped to keep the "present means in stock" invariant.
    pub(crate) fn from_checked(items: BTreeMap<ItemName, i64>) -> Self {
        Self {
            items: items.into_iter().filter(|(_, qty)| *qty > 0).collect(),
        }
    }

    /// Add `quantity` units of `name`, stamped with the current time.
    ///
    /// Returns the new stored quantity. See [`Inventory::add_at`].
    pub fn add(
        &mut self,
        name: &str,
        quantity: i64,
        log: Option<&mut Vec<String>>,
    ) -> StockResult<i64> {
        self.add_at(name, quantity, Utc::now(), log)
    }

    /// Add `quantity` units of `name`.
    ///
    /// On success a `"<timestamp>: Added <qty> of <name>"` line is pushed onto
    /// `log` when one is given. On failure nothing changes.
    pub fn add_at(
        &mut self,
        name: &str,
        quantity: i64,
        at: DateTime<Utc>,
        log: Option<&mut Vec<String>>,
    ) -> StockResult<i64> {
        let name = ItemName::new(name).map_err(|e| rejected("add", e))?;
        if quantity < 0 {
            return Err(rejected("add", StockError::NegativeQuantity(quantity)));
        }

        let updated = self
            .get(name.as_str())
            .checked_add(quantity)
            .ok_or_else(|| rejected("add", StockError::Overflow(name.to_string())))?;

        let message = format!(
            "{}: Added {} of {}",
            at.to_rfc3339_opts(SecondsFormat::Secs, true),
            quantity,
            name
        );
        tracing::info!(item = %name, quantity, total = updated, "{message}");

        if updated > 0 {
            self.items.insert(name, updated);
        }
        if let Some(log) = log {
            log.push(message);
        }

        Ok(updated)
    }

    /// Remove `quantity` units of `name`.
    ///
    /// The stock level is checked before anything is touched; a failed removal
    /// leaves the inventory exactly as it was.
    pub fn remove(&mut self, name: &str, quantity: i64) -> StockResult<Removal> {
        if quantity <= 0 {
            return Err(rejected("remove", StockError::NonPositiveQuantity(quantity)));
        }

        let Some(available) = self.items.get_mut(name) else {
            return Err(rejected("remove", StockError::not_found(name)));
        };
        if *available < quantity {
            return Err(rejected(
                "remove",
                StockError::insufficient(name, *available, quantity),
            ));
        }

        *available -= quantity;
        if *available > 0 {
            let remaining = *available;
            tracing::info!(item = name, quantity, remaining, "removed {quantity} of '{name}'");
            return Ok(Removal::Remaining(remaining));
        }

        self.items.remove(name);
        tracing::info!(item = name, quantity, "item '{name}' completely removed from inventory");
        Ok(Removal::Depleted)
    }

    /// Quantity held for `name`, or 0 when the item is absent.
    pub fn get(&self, name: &str) -> i64 {
        self.items.get(name).copied().unwrap_or(0)
    }

    /// Names of items with fewer than `threshold` units, in name order.
    pub fn low_stock(&self, threshold: i64) -> Vec<String> {
        self.items
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(name, _)| name.to_string())
            .collect()
    }

    pub fn summary(&self, threshold: i64) -> Summary {
        Summary {
            total_units: self.total_units(),
            distinct_items: self.len(),
            low_stock: self.low_stock(threshold),
            items: self
                .items
                .iter()
                .map(|(name, qty)| (name.to_string(), *qty))
                .collect(),
        }
    }

    /// Sum of all quantities.
    pub fn total_units(&self) -> i128 {
        self.items.values().map(|qty| i128::from(*qty)).sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&ItemName, i64)> + '_ {
        self.items.iter().map(|(name, qty)| (name, *qty))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

fn rejected(operation: &'static str, err: StockError) -> StockError {
    tracing::warn!(operation, reason = err.reason(), "{err}");
    err
}
