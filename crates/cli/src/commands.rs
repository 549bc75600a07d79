use std::io::{self, Write};

use anyhow::{Context, Result};

use stockroom_inventory::report::Report;
use stockroom_inventory::{Inventory, InventoryConfig, LoadOutcome, Removal, persistence};

use crate::args::{Cli, Command};

/// Dispatch a parsed command line, writing user-facing output to stdout.
pub fn run(cli: Cli) -> Result<()> {
    let config = InventoryConfig::default()
        .with_path(cli.file)
        .with_threshold(cli.threshold);
    let command = cli.command.unwrap_or(Command::Report);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&config, command, &mut out)
}

pub fn execute(config: &InventoryConfig, command: Command, out: &mut dyn Write) -> Result<()> {
    match command {
        Command::Add { item, quantity } => add(config, &item, quantity, out),
        Command::Remove { item, quantity } => remove(config, &item, quantity, out),
        Command::Get { item } => {
            let inventory = open(config)?;
            writeln!(out, "{}", inventory.get(&item))?;
            Ok(())
        }
        Command::Low => {
            let inventory = open(config)?;
            for name in inventory.low_stock(config.low_stock_threshold) {
                writeln!(out, "{name}")?;
            }
            Ok(())
        }
        Command::Summary => {
            let inventory = open(config)?;
            let summary = inventory.summary(config.low_stock_threshold);
            writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
            Ok(())
        }
        Command::Report => {
            let inventory = open(config)?;
            write!(out, "{}", Report::new(&inventory, config.low_stock_threshold))?;
            Ok(())
        }
        Command::Demo => demo(config, out),
    }
}

fn open(config: &InventoryConfig) -> Result<Inventory> {
    let mut inventory = Inventory::new();
    persistence::load(&mut inventory, &config.path)
        .with_context(|| format!("could not load inventory from {}", config.path.display()))?;
    Ok(inventory)
}

fn store(config: &InventoryConfig, inventory: &Inventory) -> Result<()> {
    persistence::save(inventory, &config.path)
        .with_context(|| format!("could not save inventory to {}", config.path.display()))
}

fn add(config: &InventoryConfig, item: &str, quantity: i64, out: &mut dyn Write) -> Result<()> {
    let mut inventory = open(config)?;
    let mut log = Vec::new();
    let total = inventory
        .add(item, quantity, Some(&mut log))
        .with_context(|| format!("could not add {quantity} of '{item}'"))?;
    store(config, &inventory)?;

    for line in log {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "{item}: {total}")?;
    Ok(())
}

fn remove(config: &InventoryConfig, item: &str, quantity: i64, out: &mut dyn Write) -> Result<()> {
    let mut inventory = open(config)?;
    let removal = inventory
        .remove(item, quantity)
        .with_context(|| format!("could not remove {quantity} of '{item}'"))?;
    store(config, &inventory)?;

    match removal {
        Removal::Remaining(left) => writeln!(out, "{item}: {left}")?,
        Removal::Depleted => writeln!(out, "{item}: removed from inventory")?,
    }
    Ok(())
}

/// Scripted walkthrough: a handful of valid and invalid operations on a
/// fresh inventory, followed by a save/load cycle and the report.
fn demo(config: &InventoryConfig, out: &mut dyn Write) -> Result<()> {
    tracing::info!("starting inventory demonstration");
    let mut inventory = Inventory::new();

    for (item, qty) in [("apple", 10), ("banana", 5), ("orange", 3), ("test", -5), ("", 5)] {
        if let Err(err) = inventory.add(item, qty, None) {
            tracing::debug!(item, qty, reason = err.reason(), "expected add failure");
        }
    }
    for (item, qty) in [("apple", 3), ("orange", 1), ("nonexistent", 1), ("banana", 10)] {
        if let Err(err) = inventory.remove(item, qty) {
            tracing::debug!(item, qty, reason = err.reason(), "expected removal failure");
        }
    }

    let threshold = config.low_stock_threshold;
    let summary = inventory.summary(threshold);
    let rule = "=".repeat(50);
    writeln!(out, "{rule}")?;
    writeln!(out, "            DEMONSTRATION RESULTS")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Apple stock: {}", inventory.get("apple"))?;
    writeln!(out, "Low stock items: {:?}", summary.low_stock)?;
    writeln!(out, "Total items in inventory: {}", summary.total_units)?;
    writeln!(out, "Unique items: {}", summary.distinct_items)?;

    store(config, &inventory)?;
    let mut reloaded = Inventory::new();
    if let LoadOutcome::Missing = persistence::load(&mut reloaded, &config.path)? {
        anyhow::bail!("inventory vanished from {} after saving", config.path.display());
    }

    write!(out, "{}", Report::new(&reloaded, threshold))?;
    tracing::info!("inventory demonstration completed");
    Ok(())
}
