//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type StockResult<T> = Result<T, StockError>;

/// Domain-level error for stock mutations.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// stock invariants). File and decoding failures belong to the persistence layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StockError {
    /// An item name was empty.
    #[error("validation failed: item name cannot be empty")]
    EmptyName,

    /// A negative quantity was supplied to an add.
    #[error("validation failed: quantity cannot be negative (got {0})")]
    NegativeQuantity(i64),

    /// A zero or negative quantity was supplied to a remove.
    #[error("validation failed: quantity must be positive (got {0})")]
    NonPositiveQuantity(i64),

    /// The item is not held in the inventory.
    #[error("item '{0}' not found in inventory")]
    ItemNotFound(String),

    /// A removal asked for more units than are held.
    #[error("insufficient stock for '{item}' (available: {available}, requested: {requested})")]
    InsufficientStock {
        item: String,
        available: i64,
        requested: i64,
    },

    /// The resulting quantity does not fit the quantity type.
    #[error("quantity overflow for '{0}'")]
    Overflow(String),
}

impl StockError {
    pub fn not_found(item: impl Into<String>) -> Self {
        Self::ItemNotFound(item.into())
    }

    pub fn insufficient(item: impl Into<String>, available: i64, requested: i64) -> Self {
        Self::InsufficientStock {
            item: item.into(),
            available,
            requested,
        }
    }

    /// Stable, machine-friendly reason code for this failure.
    pub fn reason(&self) -> &'static str {
        match self {
            StockError::EmptyName => "empty_name",
            StockError::NegativeQuantity(_) => "negative_quantity",
            StockError::NonPositiveQuantity(_) => "non_positive_quantity",
            StockError::ItemNotFound(_) => "item_not_found",
            StockError::InsufficientStock { .. } => "insufficient_stock",
            StockError::Overflow(_) => "overflow",
        }
    }
}
