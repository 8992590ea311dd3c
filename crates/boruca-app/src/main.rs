use boruca_config::Config;
use boruca_store::DataStore;
use tracing_subscriber::EnvFilter;

pub mod events;
pub mod io;
pub mod state;
pub mod ui;


use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::new();
    tracing::info!(
        "Dictionary source: {} (data dir {})",
        config.network.dictionary_url,
        config.storage.data_dir.display()
    );

    let store = DataStore::from_config(&config);
    let dataset = store.load().await;
    let last_download = store.last_download_timestamp();
    tracing::info!("{} entries loaded, last download {}", dataset.len(), last_download);

    let state = AppState::new(config, dataset, last_download);

    let interactive = atty::is(atty::Stream::Stdin);
    let reader = tokio::io::BufReader::new(tokio::io::stdin());
    io::run_shell(&state, reader, tokio::io::stdout(), interactive).await
}
