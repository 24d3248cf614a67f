//! Shop Catalog Definitions
//!
//! Defines data structures for reward-shop catalog entries, including TOML
//! deserialization (Raw*) and resolved versions with defaults applied.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which ledger map a purchased item is credited to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShopItemKind {
    /// Stackable item credited to the inventory; repeat purchases are legal
    Collectible,
    /// Outfit piece credited to the wardrobe; one per account by default
    Wearable,
}

/// One required item (or currency) and the amount a purchase consumes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostEntry {
    pub item: String,
    pub amount: Decimal,
}

/// A purchasable catalog entry.
///
/// Entries are immutable within a rotation window; a purchase only ever
/// changes the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopItem {
    /// Unique identifier, also the ledger key credited on success
    pub name: String,
    pub kind: ShopItemKind,
    /// Cost entries in declaration order; all must be satisfied at once
    pub cost: Vec<CostEntry>,
    /// Whether owning a copy already blocks another purchase
    pub one_per_account: bool,
}

// ============================================================================
// Raw TOML Structures
// ============================================================================

/// Cost amount as authored in TOML: an integer, or a decimal quoted as a
/// string. Floats are captured only so resolution can reject them with a
/// pointed message instead of a generic type error.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Int(i64),
    Text(String),
    Float(f64),
}

fn default_amount() -> RawAmount {
    RawAmount::Int(1)
}

/// Raw cost entry from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct RawCostEntry {
    pub item: String,
    #[serde(default = "default_amount")]
    pub amount: RawAmount,
}

/// Raw catalog entry from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct RawShopItem {
    pub name: String,
    pub kind: ShopItemKind,
    #[serde(default)]
    pub cost: Vec<RawCostEntry>,
    /// Overrides the kind's default ownership policy when set
    pub one_per_account: Option<bool>,
}

impl ShopItem {
    /// Create a resolved ShopItem from raw TOML data
    pub fn from_raw(raw: &RawShopItem) -> Result<Self, String> {
        let mut cost = Vec::with_capacity(raw.cost.len());
        let mut seen: HashSet<&str> = HashSet::new();
        for entry in &raw.cost {
            // Cost is a mapping: one requirement per item.
            if !seen.insert(entry.item.as_str()) {
                return Err(format!(
                    "Item '{}': duplicate cost item '{}'",
                    raw.name, entry.item
                ));
            }
            let amount = match &entry.amount {
                RawAmount::Int(n) => Decimal::from(*n),
                RawAmount::Text(s) => s.trim().parse::<Decimal>().map_err(|e| {
                    format!(
                        "Item '{}': bad cost amount '{}' for '{}': {}",
                        raw.name, s, entry.item, e
                    )
                })?,
                RawAmount::Float(f) => {
                    return Err(format!(
                        "Item '{}': cost amount {} for '{}' is a float; quote fractional amounts as strings",
                        raw.name, f, entry.item
                    ));
                }
            };
            if amount.is_sign_negative() {
                return Err(format!(
                    "Item '{}': negative cost amount for '{}'",
                    raw.name, entry.item
                ));
            }
            cost.push(CostEntry {
                item: entry.item.clone(),
                amount,
            });
        }

        Ok(Self {
            name: raw.name.clone(),
            kind: raw.kind,
            cost,
            one_per_account: raw
                .one_per_account
                .unwrap_or(raw.kind == ShopItemKind::Wearable),
        })
    }
}
