use anyhow::Context as _;
use std::sync::Arc;
use tera::Tera;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use personal_dictionary::{routes, AppConfig, DefinitionsStore, Dictionary};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    // A definitions file that exists but cannot be parsed is fatal; the seed
    // dictionary is only used when the file is missing.
    let dictionary = Dictionary::open(DefinitionsStore::new(&config.definitions_file))
        .inspect_err(|e| log::error!("Failed to load dictionary: {}", e))
        .with_context(|| format!("loading {:?}", config.definitions_file))?;
    let dictionary = Arc::new(dictionary);

    // Templates configuration
    let templates = Tera::new(&config.templates_glob)
        .with_context(|| format!("parsing templates {}", config.templates_glob))?;
    let templates = Arc::new(templates);

    let app = routes::app_router(dictionary, templates, &config.static_dir);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;

    log::info!("Server running on http://{}", config.bind_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
