//! Human-readable inventory report.
//!
//! Not a stable format; meant for a terminal.

use core::fmt;

use crate::stock::Inventory;

const WIDTH: usize = 40;
const TITLE: &str = "INVENTORY REPORT";

/// Displayable report over a borrowed inventory.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    inventory: &'a Inventory,
    threshold: i64,
}

impl<'a> Report<'a> {
    pub fn new(inventory: &'a Inventory, threshold: i64) -> Self {
        Self {
            inventory,
            threshold,
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(WIDTH);
        writeln!(f, "{rule}")?;
        writeln!(f, "{}{TITLE}", " ".repeat((WIDTH - TITLE.len()) / 2))?;
        writeln!(f, "{rule}")?;

        if self.inventory.is_empty() {
            return writeln!(f, "No items in inventory");
        }

        writeln!(f, "Total items: {}", self.inventory.total_units())?;
        writeln!(f, "Unique items: {}", self.inventory.len())?;
        writeln!(f, "{}", "-".repeat(WIDTH))?;

        for (name, quantity) in self.inventory.iter() {
            let status = if quantity < self.threshold {
                "LOW STOCK"
            } else {
                "OK"
            };
            writeln!(f, "  {:<15} -> {quantity:>3} units [{status}]", name.as_str())?;
        }

        writeln!(f, "{rule}")
    }
}

pub fn render(inventory: &Inventory, threshold: i64) -> String {
    Report::new(inventory, threshold).to_string()
}

/// Print the report to stdout.
pub fn print(inventory: &Inventory, threshold: i64) {
    print!("{}", Report::new(inventory, threshold));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inventory_says_so() {
        let out = render(&Inventory::new(), 5);
        assert!(out.contains("INVENTORY REPORT"));
        assert!(out.ends_with("No items in inventory\n"));
        assert!(!out.contains("Total items"));
    }

    #[test]
    fn lists_items_sorted_with_status() {
        let mut inv = Inventory::new();
        inv.add("banana", 3, None).unwrap();
        inv.add("apple", 15, None).unwrap();

        let out = render(&inv, 5);
        let expected = "\
========================================
            INVENTORY REPORT
========================================
Total items: 18
Unique items: 2
----------------------------------------
  apple           ->  15 units [OK]
  banana          ->   3 units [LOW STOCK]
========================================
";
        assert_eq!(out, expected);
    }

    #[test]
    fn threshold_controls_status() {
        let mut inv = Inventory::new();
        inv.add("apple", 5, None).unwrap();

        assert!(render(&inv, 5).contains("[OK]"));
        assert!(render(&inv, 6).contains("[LOW STOCK]"));
    }

    #[test]
    fn total_counts_past_the_quantity_limit() {
        let mut inv = Inventory::new();
        inv.add("a", i64::MAX, None).unwrap();
        inv.add("b", 5, None).unwrap();

        assert!(render(&inv, 5).contains("Total items: 9223372036854775812\n"));
    }

    #[test]
    fn print_writes_without_panicking() {
        let mut inv = Inventory::new();
        inv.add("apple", 1, None).unwrap();
        print(&inv, 5);
    }
}
