use std::env;

use serde::{Deserialize, Serialize};

use self::network::NetworkConfig;
use self::storage::StorageConfig;
use self::ui::UiConfig;

pub mod network;
pub mod storage;
pub mod ui;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub network: NetworkConfig,
    pub storage: StorageConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Build from process environment, falling back to defaults
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Config {
            network: NetworkConfig::from_lookup(&lookup),
            storage: StorageConfig::from_lookup(&lookup),
            ui: UiConfig::from_lookup(&lookup),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
