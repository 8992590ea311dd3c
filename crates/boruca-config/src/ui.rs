use serde::{Deserialize, Serialize};

fn default_website_url() -> String {
    "https://www.example.com".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Shown in the footer as "more information"
    #[serde(default = "default_website_url")]
    pub website_url: String,
    pub version: String,
}

impl UiConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            website_url: lookup("BORUCA_WEBSITE_URL").unwrap_or_else(default_website_url),
            ..Self::default()
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            website_url: default_website_url(),
            version: "1.0".to_string(),
        }
    }
}
