//! Persisted user settings.
//!
//! Loaded once at startup from the platform config directory (or `--config`).
//! A missing or unreadable file means defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use fundcat_model::CatalogKind;
use serde::{Deserialize, Serialize};

// =============================================================================
// ROOT SETTINGS
// =============================================================================

/// Application settings, serialized to TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where results come from.
    pub source: SourceSettings,

    /// Catalog browsing defaults.
    pub catalog: CatalogSettings,
}

impl Settings {
    /// Load settings from the default path.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a specific path.
    pub fn load_from(path: &Path) -> Self {
        let settings = std::fs::read_to_string(path)
            .ok()
            .and_then(|content| match toml::from_str(&content) {
                Ok(settings) => Some(settings),
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "ignoring invalid settings file");
                    None
                }
            })
            .unwrap_or_default();
        tracing::debug!(path = %path.display(), ?settings, "settings loaded");
        settings
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create config directory {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("failed to serialize settings")?;

        std::fs::write(path, content)
            .with_context(|| format!("failed to write settings to {}", path.display()))
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "Fundcat", "fundcat")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }
}

// =============================================================================
// SOURCE SETTINGS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    /// Catalog API root; each domain lives at `<api_base_url>/<domain>`.
    pub api_base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    /// Serve results from the bundled dataset instead of the API.
    pub offline: bool,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.fundcat.example/v1".to_string(),
            timeout_secs: 10,
            offline: false,
        }
    }
}

impl SourceSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

// =============================================================================
// CATALOG SETTINGS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Results requested per page.
    pub page_size: u32,

    /// Catalog opened when a command names none.
    pub default_domain: CatalogKind,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            page_size: 12,
            default_domain: CatalogKind::Accelerators,
        }
    }
}

impl CatalogSettings {
    /// Page size, never below one.
    pub fn page_size(&self) -> u32 {
        self.page_size.max(1)
    }
}
