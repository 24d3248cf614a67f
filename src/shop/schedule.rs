//! Shop Rotation Schedule
//!
//! Maps wall-clock time to the active catalog slice and the countdown until
//! the offer set next changes. Pure: callers supply the timestamp, nothing
//! here reads a clock or holds a timer, so the reducer and the countdown
//! display can never disagree about what is on offer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::definition::ShopItem;

/// One rotation window: a start time and the items on offer from then until
/// the next window begins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationWindow {
    pub starts_at: DateTime<Utc>,
    pub items: Vec<ShopItem>,
}

/// An ordered sequence of rotation windows.
///
/// Windows are contiguous and non-overlapping: each one ends where the next
/// begins, and the final window never ends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationSchedule {
    windows: Vec<RotationWindow>,
}

/// Read-only snapshot for one timestamp: what is on offer and for how long.
/// This is what the shop list and countdown label render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveShop<'a> {
    pub items: &'a [ShopItem],
    /// None when the schedule is empty or the final window is active
    pub seconds_till_rotation: Option<i64>,
}

impl RotationSchedule {
    /// Build a schedule, sorting windows ascending by start time
    pub fn new(mut windows: Vec<RotationWindow>) -> Self {
        windows.sort_by_key(|w| w.starts_at);
        Self { windows }
    }

    pub fn windows(&self) -> &[RotationWindow] {
        &self.windows
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Index of the window active at `now_ms` (epoch milliseconds): the last
    /// window whose start is at or before the query time.
    fn active_index(&self, now_ms: i64) -> Option<usize> {
        self.windows
            .iter()
            .rposition(|w| w.starts_at.timestamp_millis() <= now_ms)
    }

    /// The catalog slice on offer at `now_ms`. Empty before the first window
    /// starts and when the schedule has no windows.
    pub fn active_items(&self, now_ms: i64) -> &[ShopItem] {
        match self.active_index(now_ms) {
            Some(i) => &self.windows[i].items,
            None => &[],
        }
    }

    /// Whole seconds until the next window begins, rounded up so a polled
    /// countdown only reaches zero on the boundary itself. None when no
    /// window follows `now_ms`.
    pub fn seconds_till_rotation(&self, now_ms: i64) -> Option<i64> {
        let next = match self.active_index(now_ms) {
            Some(i) => self.windows.get(i + 1)?,
            // Before the first window, its start is the next boundary.
            None => self.windows.first()?,
        };
        // `i64::div_ceil` is unstable (`int_roundings`); this is equivalent.
        let diff = next.starts_at.timestamp_millis() - now_ms;
        Some(diff / 1000 + (diff % 1000 > 0) as i64)
    }

    /// Snapshot for the presentation layer: item list plus countdown
    pub fn view(&self, now_ms: i64) -> ActiveShop<'_> {
        ActiveShop {
            items: self.active_items(now_ms),
            seconds_till_rotation: self.seconds_till_rotation(now_ms),
        }
    }
}
