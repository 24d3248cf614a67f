//! Economy Ledger
//!
//! The slice of account state the shop reducer validates and updates: the
//! item inventory and the wardrobe. Currencies are ordinary inventory entries
//! under reserved names, so a single map covers both.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Economy state for one account.
///
/// Quantities are exact decimals and never negative; a key that is absent
/// reads as zero. Maps are ordered so serialized snapshots are deterministic
/// when the enclosing dispatcher replays action logs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub inventory: BTreeMap<String, Decimal>,
    #[serde(default)]
    pub wardrobe: BTreeMap<String, u32>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current balance of an inventory item, zero if absent.
    pub fn balance(&self, item: &str) -> Decimal {
        self.inventory.get(item).copied().unwrap_or(Decimal::ZERO)
    }

    /// Number of copies of a wearable held, zero if absent.
    pub fn worn_count(&self, item: &str) -> u32 {
        self.wardrobe.get(item).copied().unwrap_or(0)
    }

    /// Add to an inventory balance.
    pub fn credit(&mut self, item: &str, amount: Decimal) {
        let entry = self
            .inventory
            .entry(item.to_string())
            .or_insert(Decimal::ZERO);
        *entry += amount;
    }

    /// Subtract from an inventory balance. The caller must have checked that
    /// the balance covers the amount; a debit below zero is a logic error.
    pub fn debit(&mut self, item: &str, amount: Decimal) {
        debug_assert!(self.balance(item) >= amount);
        let entry = self
            .inventory
            .entry(item.to_string())
            .or_insert(Decimal::ZERO);
        *entry -= amount;
    }

    /// Add one copy of a wearable to the wardrobe.
    pub fn credit_wearable(&mut self, item: &str) {
        *self.wardrobe.entry(item.to_string()).or_insert(0) += 1;
    }
}
