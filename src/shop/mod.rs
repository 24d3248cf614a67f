pub mod definition;
pub mod purchase;
pub mod registry;
pub mod schedule;

pub use definition::{CostEntry, ShopItem, ShopItemKind};
pub use purchase::{PurchaseError, ShopAction, apply, buy_shop_item, has_acquired};
pub use registry::ShopRegistry;
pub use schedule::{ActiveShop, RotationSchedule, RotationWindow};
