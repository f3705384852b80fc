use agri_job_board::cache::TranslationCache;
use agri_job_board::config::Config;
use agri_job_board::server::build_router;
use agri_job_board::store::RecordStore;
use agri_job_board::{GeminiTranslator, JobBoard};
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when the variables are set by the environment)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("agri_job_board=info".parse()?),
        )
        .init();

    info!("Starting agri job board");

    let config = Config::from_env()?;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(60))
        .build()
        .context("Failed to build HTTP client")?;
    let translator = GeminiTranslator::from_config(client, &config);

    let store = if config.seed_sample_jobs {
        RecordStore::seeded()
    } else {
        RecordStore::new()
    };
    info!(
        "Loaded {} job(s), translation cache capacity {}",
        store.len(),
        config.translation_cache_capacity
    );

    let board = JobBoard::new(
        translator,
        store,
        TranslationCache::with_capacity(config.translation_cache_capacity),
    );
    // Sample postings include non-English jobs; translate them for the default view.
    board.refresh();

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, build_router(board))
        .await
        .context("HTTP server failed")?;

    Ok(())
}
