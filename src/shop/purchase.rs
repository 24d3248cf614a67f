//! Shop Purchase Reducer
//!
//! Validates a purchase action against the ledger and the active catalog and
//! returns the updated ledger, or a typed failure that leaves the input
//! untouched. Pure and deterministic, so the dispatcher can replay action
//! logs and a predicting client reaches the same result the server does.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::definition::{ShopItem, ShopItemKind};
use super::schedule::RotationSchedule;
use crate::ledger::Ledger;

/// Why a purchase was refused. The display strings are the error identifiers
/// the enclosing dispatcher surfaces to its caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    #[error("Item not found in the Love Reward Shop")]
    ItemNotFound,
    #[error("Item already bought")]
    AlreadyOwned,
    /// Names the first unmet cost entry in declaration order
    #[error("Insufficient {0}")]
    InsufficientFunds(String),
}

/// Inbound shop actions, in the dispatcher's wire shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShopAction {
    #[serde(rename = "floatingShopItem.bought")]
    ItemBought {
        name: String,
        /// Epoch milliseconds, supplied by the dispatcher
        timestamp: i64,
    },
}

/// Whether the account already holds a copy of this catalog item.
///
/// Backs both the reducer's ownership check and the shop list's
/// "already bought" state; sharing one function keeps them in agreement.
pub fn has_acquired(ledger: &Ledger, item: &ShopItem) -> bool {
    match item.kind {
        ShopItemKind::Collectible => ledger.balance(&item.name) > Decimal::ZERO,
        ShopItemKind::Wearable => ledger.worn_count(&item.name) > 0,
    }
}

/// Apply a purchase of `name` against the active catalog slice.
///
/// Validation runs in a fixed order: catalog lookup, ownership,
/// affordability. Only once every check passes is the ledger copied and the
/// debit/credit applied, so a failure never exposes a partial state.
pub fn apply(
    ledger: &Ledger,
    active_items: &[ShopItem],
    name: &str,
) -> Result<Ledger, PurchaseError> {
    let item = active_items
        .iter()
        .find(|i| i.name == name)
        .ok_or(PurchaseError::ItemNotFound)?;

    if item.one_per_account && has_acquired(ledger, item) {
        return Err(PurchaseError::AlreadyOwned);
    }

    // Cost entries are keyed uniquely by the loader, but affordability is
    // still checked against the running total per item so a repeated entry
    // can never debit a balance below zero.
    let mut required: BTreeMap<&str, Decimal> = BTreeMap::new();
    for entry in &item.cost {
        let total = required.entry(entry.item.as_str()).or_insert(Decimal::ZERO);
        *total += entry.amount;
        if ledger.balance(&entry.item) < *total {
            return Err(PurchaseError::InsufficientFunds(entry.item.clone()));
        }
    }

    let mut next = ledger.clone();
    for entry in &item.cost {
        next.debit(&entry.item, entry.amount);
    }
    match item.kind {
        ShopItemKind::Collectible => next.credit(&item.name, Decimal::ONE),
        ShopItemKind::Wearable => next.credit_wearable(&item.name),
    }

    Ok(next)
}

/// Reduce a shop action against the full shop slice: resolve which catalog
/// window is active at the action's timestamp, then apply the purchase.
pub fn buy_shop_item(
    ledger: &Ledger,
    schedule: &RotationSchedule,
    action: &ShopAction,
) -> Result<Ledger, PurchaseError> {
    let ShopAction::ItemBought { name, timestamp } = action;
    apply(ledger, schedule.active_items(*timestamp), name)
}
