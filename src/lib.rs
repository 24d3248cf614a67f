//! Reward Shop Engine
//!
//! The purchase-transaction core of the reward shop: an exact-decimal
//! economy ledger, a rotating catalog of offers, and a pure reducer that
//! validates and applies "buy shop item" actions. Everything here is a pure
//! function over caller-supplied state and timestamps; the enclosing
//! dispatcher owns persistence, ordering, and user feedback.

pub mod ledger;
pub mod shop;

pub use ledger::Ledger;
pub use shop::{
    ActiveShop, CostEntry, PurchaseError, RotationSchedule, RotationWindow, ShopAction, ShopItem,
    ShopItemKind, ShopRegistry, buy_shop_item, has_acquired,
};
