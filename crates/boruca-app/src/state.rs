use boruca_config::Config;
use boruca_types::Dataset;

/// Everything the shell needs for a session; the word list is loaded once and never replaced
pub struct AppState {
    pub config: Config,
    pub dataset: Dataset,
    pub last_download: String,
}

impl AppState {
    pub fn new(config: Config, dataset: Dataset, last_download: String) -> Self {
        Self {
            config,
            dataset,
            last_download,
        }
    }
}
