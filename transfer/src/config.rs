//! Bridge configuration with TOML file support.

use rbridge_types::{ChainId, DecimalSpec, DisplayMode};
use rbridge_utils::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::TransferError;

/// Configuration for one native-chain → destination-chain bridge pair.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Destination chain identifier as registered with the bridge.
    #[serde(default)]
    pub dest_chain: ChainId,

    /// Source base-unit exponent and destination display exponent.
    #[serde(default)]
    pub decimals: DecimalSpec,

    /// "trimmed" or "fixed".
    #[serde(default)]
    pub display_mode: DisplayMode,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter, e.g. "info" or "warn,rbridge_transfer=debug".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl BridgeConfig {
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, TransferError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| TransferError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, TransferError> {
        toml::from_str(s).map_err(|e| TransferError::Config(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, TransferError> {
        toml::to_string_pretty(self).map_err(|e| TransferError::Config(e.to_string()))
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            dest_chain: ChainId::default(),
            decimals: DecimalSpec::default(),
            display_mode: DisplayMode::default(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}
