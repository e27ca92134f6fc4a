/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

use std::path::Path;

use anyhow::Context;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Configuration for routing contexts, their pool and deferred dispatch.
///
/// Loaded from `config.toml` in the XDG config directory for `routing-context`.
/// Every section and field is optional; missing values take their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Context pool settings
    pub pool: PoolConfig,
    /// Per-address listing settings
    pub listing: ListingConfig,
    /// Deferred dispatch settings
    pub dispatch: DispatchConfig,
}

/// Context pool configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Maximum number of idle contexts kept for reuse
    pub max_idle_contexts: usize,
    /// Clear contexts when they are returned to the pool
    pub clear_on_return: bool,
}

/// Listing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Initial capacity of the durable and non-durable queue vectors of a new listing
    pub initial_queue_capacity: usize,
}

/// Deferred dispatch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Deliver references already submitted before the worker stops
    pub drain_on_shutdown: bool,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_idle_contexts: 64,
            clear_on_return: true,
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            initial_queue_capacity: 1,
        }
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            drain_on_shutdown: true,
        }
    }
}

impl RoutingConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns the TOML error when the text is malformed or a value has the wrong type.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Reads and parses the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or does not parse.
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading configuration file {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("parsing configuration file {}", path.display()))
    }

    /// Load configuration from XDG-compliant locations
    ///
    /// Looks for `routing-context/config.toml` under `$XDG_CONFIG_HOME` and the other
    /// XDG config directories. Returns defaults when no file is found, and logs and
    /// falls back to defaults when the file cannot be read or parsed.
    pub fn load() -> Self {
        use tracing::{error, info};

        let xdg_dirs = match xdg::BaseDirectories::with_prefix("routing-context") {
            Ok(dirs) => dirs,
            Err(e) => {
                error!("Failed to initialize XDG directories: {}", e);
                return Self::default();
            }
        };

        let Some(path) = xdg_dirs.find_config_file("config.toml") else {
            info!("No configuration file found, using defaults");
            return Self::default();
        };

        info!("Loading configuration from: {}", path.display());
        match Self::load_from(&path) {
            Ok(config) => {
                info!("Successfully loaded configuration");
                config
            }
            Err(e) => {
                error!("{:#}", e);
                Self::default()
            }
        }
    }
}

lazy_static! {
    /// Global configuration instance loaded from XDG-compliant locations
    pub static ref CONFIG: RoutingConfig = RoutingConfig::load();
}
