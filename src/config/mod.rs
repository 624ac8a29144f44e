// SPDX-License-Identifier: MPL-2.0
//! This module handles the site's deployment configuration, including
//! loading and saving settings to a `site.toml` file.
//!
//! Every field has a default matching the production deployment, so an
//! empty or missing file yields a fully working configuration. Unreadable
//! TOML also falls back to defaults rather than failing startup.
//!
//! # Examples
//!
//! ```no_run
//! use araucarias::config::{self, SiteConfig};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Point assets at a sub-path deployment
//! config.assets.base_url = "/araucarias/".to_string();
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "site.toml";
const APP_NAME: &str = "Araucarias";

/// The full site configuration, one section per concern.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub assets: AssetsConfig,
    pub contact: ContactConfig,
    pub booking: BookingConfig,
}

/// Where the static assets are served from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Base URL prefixed to every catalog asset path.
    pub base_url: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::ASSET_BASE_URL.to_string(),
        }
    }
}

/// How guest inquiries are delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Endpoint the inquiry is posted to. Relative endpoints are resolved
    /// against the deployed site.
    pub endpoint: String,
    /// Round-trip timeout in seconds before a submission counts as failed.
    pub timeout_secs: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::CONTACT_ENDPOINT.to_string(),
            timeout_secs: defaults::CONTACT_TIMEOUT_SECS,
        }
    }
}

/// The third-party booking engine the reservations page embeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    /// DOM id the widget script attaches to.
    pub container_id: String,
    /// Widget URL carrying the property code.
    pub widget_url: String,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            container_id: defaults::BOOKING_CONTAINER_ID.to_string(),
            widget_url: defaults::BOOKING_WIDGET_URL.to_string(),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the platform config directory, falling
/// back to defaults when no file exists.
pub fn load() -> Result<SiteConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(SiteConfig::default())
}

/// Saves the configuration to the platform config directory.
pub fn save(config: &SiteConfig) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads the configuration from a specific file.
///
/// Invalid TOML yields the default configuration; only a missing or
/// unreadable file is an error.
pub fn load_from_path(path: &Path) -> Result<SiteConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

/// Saves the configuration to a specific file, creating parent
/// directories as needed.
pub fn save_to_path(config: &SiteConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
