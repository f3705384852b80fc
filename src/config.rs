use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Gemini
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_api_url: String,

    // Translation cache (0 = unbounded)
    pub translation_cache_capacity: usize,

    // Board
    pub seed_sample_jobs: bool,

    // Server
    pub port: u16,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// # Errors
    /// Fails when no API key is set or a numeric/boolean variable is malformed.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Gemini - API_KEY is accepted for compatibility with the web front-end
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .or_else(|_| std::env::var("API_KEY"))
                .context("GEMINI_API_KEY not set")?,
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            gemini_api_url: std::env::var("GEMINI_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| {
                    "https://generativelanguage.googleapis.com/v1beta".to_string()
                }),

            translation_cache_capacity: parse_env("TRANSLATION_CACHE_CAPACITY")?.unwrap_or(512),

            seed_sample_jobs: parse_env("SEED_SAMPLE_JOBS")?.unwrap_or(true),

            port: parse_env("PORT")?.unwrap_or(8080),
        })
    }
}

/// Read and parse an optional variable; a present but malformed value is an error.
fn parse_env<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{} has an invalid value: '{}'", name, value)),
        Err(_) => Ok(None),
    }
}
