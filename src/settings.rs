//! Persister settings
//!
//! Defaults match the markup the server renders. A page can override them by
//! writing a JSON object under `field_keeper_settings` in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::store::KeyValueStore;

/// Where to find field groups and how loud to log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersisterSettings {
    /// Class shared by every field group container
    pub group_class: String,
    /// Selector for the input inside a container
    pub input_selector: String,
    /// Selector for the error display inside a container (first match wins)
    pub error_selector: String,
    /// Console log level: error, warn, info, debug or trace
    pub log_level: String,
}

impl Default for PersisterSettings {
    fn default() -> Self {
        Self {
            group_class: consts::GROUP_CLASS.to_string(),
            input_selector: consts::INPUT_SELECTOR.to_string(),
            error_selector: consts::ERROR_SELECTOR.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl PersisterSettings {
    /// Storage key holding the JSON override
    pub const STORAGE_KEY: &'static str = "field_keeper_settings";

    /// Parsed log level, `Info` when unrecognized
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Level filter for `log::set_max_level`
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level().to_level_filter()
    }

    /// Load settings from the store, falling back to defaults
    pub fn load(store: &dyn KeyValueStore) -> Self {
        if let Some(json) = store.get(Self::STORAGE_KEY) {
            match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from storage");
                    return settings;
                }
                Err(e) => log::warn!("Ignoring malformed settings: {}", e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to the store
    pub fn save(&self, store: &dyn KeyValueStore) {
        if let Ok(json) = serde_json::to_string(self) {
            match store.set(Self::STORAGE_KEY, &json) {
                Ok(()) => log::info!("Settings saved"),
                Err(e) => log::warn!("Settings not saved: {}", e),
            }
        }
    }
}
