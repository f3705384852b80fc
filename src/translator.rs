use crate::cache::TranslatedProjection;
use crate::config::Config;
use crate::i18n::Language;
use crate::retry::{with_retry_if, RetryConfig};
use crate::store::JobRecord;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::future::Future;
use thiserror::Error;

/// Produces a translated projection of one job posting.
///
/// A rejected future means "no projection for this cycle"; callers keep the
/// native text.
pub trait JobTranslator: Send + Sync {
    fn fetch_translation(
        &self,
        job: &JobRecord,
        target: Language,
    ) -> impl Future<Output = Result<TranslatedProjection>> + Send;
}

/// Gemini `generateContent` request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Non-success HTTP status from the Gemini API
#[derive(Debug, Error)]
#[error("Gemini API error during translation ({status}): {body}")]
pub struct GeminiStatusError {
    pub status: u16,
    pub body: String,
}

fn projection_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "location": { "type": "STRING" },
            "description": { "type": "STRING" }
        },
        "required": ["title", "location", "description"]
    })
}

fn build_translation_prompt(job: &JobRecord, target: Language) -> String {
    format!(
        r#"Translate the following job details from {} to {}.
Title: "{}"
Location: "{}"
Description: "{}"
Return a single JSON object with keys "title", "location", and "description" containing the translated text. Do not add any extra commentary or explanations."#,
        job.native_language.name(),
        target.name(),
        job.title,
        job.location,
        job.description
    )
}

/// Models sometimes wrap JSON in a markdown fence despite the mime type.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

fn parse_projection(text: &str) -> Result<TranslatedProjection> {
    let projection: TranslatedProjection = serde_json::from_str(strip_code_fence(text))
        .context("Failed to parse Gemini translation JSON")?;
    if projection.title.trim().is_empty() {
        anyhow::bail!("Gemini translation returned an empty title");
    }
    Ok(projection)
}

/// Retry 429 and 5xx responses and any transport or parse failure; give up
/// on other 4xx statuses.
fn is_retryable_error(error: &anyhow::Error) -> bool {
    match error.downcast_ref::<GeminiStatusError>() {
        Some(status_error) => status_error.status == 429 || status_error.status >= 500,
        None => true,
    }
}

/// Translator backed by the Gemini REST API.
#[derive(Debug, Clone)]
pub struct GeminiTranslator {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    retry: RetryConfig,
}

impl GeminiTranslator {
    /// Create a translator with the default translation retry policy.
    ///
    /// # Arguments
    /// * `client` - Shared HTTP client
    /// * `api_url` - API base, e.g. `https://generativelanguage.googleapis.com/v1beta`
    /// * `api_key` - Sent as `x-goog-api-key`
    /// * `model` - Model name, e.g. `gemini-2.5-flash`
    pub fn new(
        client: reqwest::Client,
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            api_key: api_key.into(),
            model: model.into(),
            retry: RetryConfig::translation(),
        }
    }

    /// Create a translator from loaded configuration.
    pub fn from_config(client: reqwest::Client, config: &Config) -> Self {
        Self::new(
            client,
            config.gemini_api_url.clone(),
            config.gemini_api_key.clone(),
            config.gemini_model.clone(),
        )
    }

    /// Override the retry policy (tests use short delays).
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_url.trim_end_matches('/'),
            self.model
        )
    }

    async fn generate(&self, request: &GenerateContentRequest) -> Result<String> {
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .context("Failed to send translation request to Gemini API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            return Err(GeminiStatusError {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .context("Failed to parse Gemini translation response")?;

        parsed
            .candidates
            .into_iter()
            .filter_map(|candidate| candidate.content)
            .flat_map(|content| content.parts)
            .map(|part| part.text)
            .find(|text| !text.trim().is_empty())
            .context("Gemini translation response contained no candidates")
    }
}

impl JobTranslator for GeminiTranslator {
    async fn fetch_translation(
        &self,
        job: &JobRecord,
        target: Language,
    ) -> Result<TranslatedProjection> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: build_translation_prompt(job, target),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: projection_schema(),
                temperature: 0.3,
            },
        };

        with_retry_if(
            &self.retry,
            &format!("Translation of job {} to {}", job.id, target.name()),
            || async {
                let text = self.generate(&request).await?;
                parse_projection(&text)
            },
            is_retryable_error,
        )
        .await
    }
}
