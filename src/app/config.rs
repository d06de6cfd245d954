//! Rule configuration, keyed by rule id the way linter hosts lay it out:
//!
//! ```json
//! { "GodClass": { "active": true, "WMC": 47, "ATFD": 5 } }
//! ```

use crate::domain::verdict::{
    DEFAULT_ACCESS_TO_FOREIGN_DATA_THRESHOLD, DEFAULT_WEIGHTED_METHOD_COUNT_THRESHOLD, Thresholds,
};
use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleSetConfig {
    #[serde(rename = "GodClass", default)]
    pub god_class: GodClassConfig,
}

impl RuleSetConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse rule configuration JSON")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GodClassConfig {
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(rename = "WMC", default = "default_wmc")]
    pub weighted_method_count: u32,
    #[serde(rename = "ATFD", default = "default_atfd")]
    pub access_to_foreign_data: u32,
}

fn default_active() -> bool {
    true
}

fn default_wmc() -> u32 {
    DEFAULT_WEIGHTED_METHOD_COUNT_THRESHOLD
}

fn default_atfd() -> u32 {
    DEFAULT_ACCESS_TO_FOREIGN_DATA_THRESHOLD
}

impl Default for GodClassConfig {
    fn default() -> Self {
        Self {
            active: default_active(),
            weighted_method_count: default_wmc(),
            access_to_foreign_data: default_atfd(),
        }
    }
}

impl GodClassConfig {
    /// Command-line values win over the file.
    pub fn with_overrides(mut self, wmc: Option<u32>, atfd: Option<u32>) -> Self {
        if let Some(wmc) = wmc {
            self.weighted_method_count = wmc;
        }
        if let Some(atfd) = atfd {
            self.access_to_foreign_data = atfd;
        }
        self
    }

    pub fn thresholds(&self) -> Thresholds {
        Thresholds::new(self.weighted_method_count, self.access_to_foreign_data)
    }
}
