//! Shop Schedule Registry
//!
//! Loads and caches rotation schedules from TOML files. One file per
//! schedule: an `id`, then `[[windows]]` entries each carrying an RFC 3339
//! `starts_at` string and the `[[windows.items]]` on offer from that moment.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{info, warn};

use super::definition::{RawShopItem, ShopItem};
use super::schedule::{RotationSchedule, RotationWindow};

/// Raw rotation window from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct RawRotationWindow {
    pub starts_at: DateTime<Utc>,
    #[serde(default)]
    pub items: Vec<RawShopItem>,
}

/// Raw schedule file from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct RawScheduleFile {
    pub id: String,
    #[serde(default)]
    pub windows: Vec<RawRotationWindow>,
}

impl RawScheduleFile {
    /// Resolve the raw file into a sorted schedule
    fn resolve(&self) -> Result<RotationSchedule, String> {
        let mut windows: Vec<RotationWindow> = Vec::with_capacity(self.windows.len());
        for raw_window in &self.windows {
            let mut items: Vec<ShopItem> = Vec::with_capacity(raw_window.items.len());
            let mut seen: HashSet<&str> = HashSet::new();
            for raw_item in &raw_window.items {
                if !seen.insert(raw_item.name.as_str()) {
                    warn!(
                        "Schedule '{}': duplicate item '{}' in window starting {}, keeping the first",
                        self.id, raw_item.name, raw_window.starts_at
                    );
                    continue;
                }
                items.push(ShopItem::from_raw(raw_item)?);
            }
            let window = RotationWindow {
                starts_at: raw_window.starts_at,
                items,
            };
            // Windows must be non-overlapping; a repeated start would leave
            // the earlier window permanently shadowed.
            match windows.iter().position(|w| w.starts_at == window.starts_at) {
                Some(prior) => {
                    warn!(
                        "Schedule '{}': duplicate window start {}, overwriting",
                        self.id, window.starts_at
                    );
                    windows[prior] = window;
                }
                None => windows.push(window),
            }
        }
        Ok(RotationSchedule::new(windows))
    }
}

/// Registry for all rotation schedules
pub struct ShopRegistry {
    schedules: HashMap<String, RotationSchedule>,
}

impl ShopRegistry {
    /// Create a new empty shop registry
    pub fn new() -> Self {
        Self {
            schedules: HashMap::new(),
        }
    }

    /// Load all schedule files from a directory
    pub fn load_from_directory(&mut self, path: &Path) -> Result<(), String> {
        if !path.exists() {
            warn!("Shop schedule directory does not exist: {:?}", path);
            return Ok(());
        }

        for entry in fs::read_dir(path).map_err(|e| e.to_string())? {
            let entry = entry.map_err(|e| e.to_string())?;
            let file_path = entry.path();

            if file_path.extension().and_then(|s| s.to_str()) == Some("toml") {
                let contents = fs::read_to_string(&file_path)
                    .map_err(|e| format!("Failed to read {:?}: {}", file_path, e))?;

                let raw: RawScheduleFile = toml::from_str(&contents)
                    .map_err(|e| format!("Failed to parse {:?}: {}", file_path, e))?;

                let schedule = raw
                    .resolve()
                    .map_err(|e| format!("Invalid schedule in {:?}: {}", file_path, e))?;

                if self.schedules.contains_key(&raw.id) {
                    warn!(
                        "Duplicate schedule ID '{}' in {:?}, overwriting",
                        raw.id, file_path
                    );
                }
                info!(
                    "Loaded shop schedule: {} ({} windows)",
                    raw.id,
                    schedule.windows().len()
                );
                self.schedules.insert(raw.id, schedule);
            }
        }

        info!("Loaded {} shop schedules", self.schedules.len());
        Ok(())
    }

    /// Get a schedule by ID
    pub fn get(&self, id: &str) -> Option<&RotationSchedule> {
        self.schedules.get(id)
    }

    /// Get an iterator over all schedule IDs
    pub fn ids(&self) -> impl Iterator<Item = &String> {
        self.schedules.keys()
    }

    /// Check if a schedule exists in the registry
    pub fn contains(&self, id: &str) -> bool {
        self.schedules.contains_key(id)
    }

    /// Get the number of loaded schedules
    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }
}

impl Default for ShopRegistry {
    fn default() -> Self {
        Self::new()
    }
}
