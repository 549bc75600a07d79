use std::path::PathBuf;

use clap::{Parser, Subcommand};

use stockroom_inventory::{DEFAULT_INVENTORY_PATH, DEFAULT_LOW_STOCK_THRESHOLD};
use stockroom_observability::LogFormat;

#[derive(Debug, Parser)]
#[command(name = "stockroom", version, about = "Track stock levels in a JSON inventory file")]
pub struct Cli {
    /// Inventory document to read and update
    #[arg(short, long, global = true, default_value = DEFAULT_INVENTORY_PATH)]
    pub file: PathBuf,

    /// Items with fewer units than this are low stock
    #[arg(short, long, global = true, default_value_t = DEFAULT_LOW_STOCK_THRESHOLD)]
    pub threshold: i64,

    /// Log line format on stderr (json or compact)
    #[arg(long, global = true, default_value = "json")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Add units of an item
    Add {
        item: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Remove units of an item
    Remove {
        item: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },

    /// Print the quantity held for an item (0 when absent)
    Get { item: String },

    /// List items below the low-stock threshold
    Low,

    /// Print totals and a snapshot of all items as JSON
    Summary,

    /// Print the inventory report (default)
    Report,

    /// Run a scripted walkthrough on a fresh inventory and save it
    Demo,
}
