#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

pub const DEFAULT_BASE_PATH: &str = "/api";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// 傳輸設定，明確建立後傳入，不使用全域狀態
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransportConfig {
    pub base_url: String,
    #[serde(default = "default_base_path")]
    pub base_path: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

fn default_base_path() -> String {
    DEFAULT_BASE_PATH.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

impl TransportConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            base_path: default_base_path(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            headers: BTreeMap::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Scheme and host joined with the base path, without a trailing slash.
    pub fn api_root(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.base_path.trim_end_matches('/')
        )
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000")
    }
}

impl Validate for TransportConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("transport.base_url", &self.base_url)?;
        validation::validate_base_path("transport.base_path", &self.base_path)?;
        validation::validate_range("transport.timeout_seconds", self.timeout_seconds, 1, 600)?;
        for name in self.headers.keys() {
            validation::validate_non_empty_string("transport.headers", name)?;
        }
        Ok(())
    }
}
