use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_DICTIONARY_URL: &str =
    "https://raw.githubusercontent.com/codingadrian/user_boruca_dictionary/master/diccionario_boruca.json";

fn default_timeout_seconds() -> u64 {
    10
}

/// Remote word list location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub dictionary_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl NetworkConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let dictionary_url =
            lookup("BORUCA_DICTIONARY_URL").unwrap_or_else(|| DEFAULT_DICTIONARY_URL.to_string());

        let timeout_seconds = lookup("BORUCA_TIMEOUT_SECONDS")
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        Self {
            dictionary_url,
            timeout_seconds,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
