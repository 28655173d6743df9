//! Plugin identity and naming, read from an optional `itemfields.toml`.
//!
//! ```toml
//! plugin_id = "zotero-custom-item-fields@example.org"
//! pref_prefix = "extensions.zotero-custom-item-fields"
//! row_id_prefix = "zotero-custom-item-fields"
//! ```
//!
//! Every key is optional. A missing or broken file falls back to defaults.

use itemfields_model::{FieldPosition, CUSTOM_FIELD_DATA_PREF};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaneConfig {
    /// Identifier the host associates with every registered row.
    #[serde(default = "default_plugin_id")]
    pub plugin_id: String,
    /// Namespace of the plugin's preferences.
    #[serde(default = "default_pref_prefix")]
    pub pref_prefix: String,
    /// Prefix of every registered row id.
    #[serde(default = "default_row_id_prefix")]
    pub row_id_prefix: String,
}

fn default_plugin_id() -> String {
    "zotero-custom-item-fields@example.org".to_string()
}

fn default_pref_prefix() -> String {
    "extensions.zotero-custom-item-fields".to_string()
}

fn default_row_id_prefix() -> String {
    "zotero-custom-item-fields".to_string()
}

impl Default for PaneConfig {
    fn default() -> Self {
        Self {
            plugin_id: default_plugin_id(),
            pref_prefix: default_pref_prefix(),
            row_id_prefix: default_row_id_prefix(),
        }
    }
}

impl PaneConfig {
    /// Loads config from `path`, falling back to defaults with a warning on
    /// read or parse errors.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No config file found at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => {
                    info!("Loaded config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!("Failed to parse config file {:?}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Global name of the field-list preference.
    pub fn pref_key(&self) -> String {
        itemfields_prefs::global_name(&self.pref_prefix, CUSTOM_FIELD_DATA_PREF)
    }

    /// Row id for a field, e.g. `zotero-custom-item-fields-Shelf-start`.
    pub fn row_id(&self, name: &str, position: &FieldPosition) -> String {
        format!("{}-{}-{}", self.row_id_prefix, name, position)
    }
}
