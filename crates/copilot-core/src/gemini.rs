//! Gemini generation client
//!
//! Calls `generateContent` with `responseMimeType = application/json` and the
//! request's schema as `responseSchema`, so output is constrained by the
//! model itself. API docs: https://ai.google.dev/api/generate-content

use crate::client::GenerationClient;
use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::schema::SchemaDescriptor;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

/// Gemini REST client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    config: GenerationConfig,
}

impl GeminiClient {
    /// Create a client; the timeout applies to each whole request
    pub fn new(config: GenerationConfig) -> Result<Self, GenerationError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { client, config })
    }

    /// Settings in use
    #[inline]
    #[must_use]
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            self.config.model
        )
    }

    fn map_send_error(&self, err: reqwest::Error) -> GenerationError {
        match self.config.timeout_secs {
            Some(secs) if err.is_timeout() => GenerationError::Timeout { secs },
            _ => GenerationError::from(err),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationSettings<'a>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationSettings<'a> {
    response_mime_type: &'static str,
    response_schema: &'a SchemaDescriptor,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateResponse {
    fn into_text(self) -> Option<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .filter_map(|p| p.text)
            .collect();
        (!text.is_empty()).then_some(text)
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn complete(
        &self,
        prompt: &str,
        schema: &SchemaDescriptor,
    ) -> Result<String, GenerationError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(GenerationError::MissingApiKey)?;

        let body = GenerateRequest {
            contents: [Content {
                role: "user",
                parts: [Part { text: prompt }],
            }],
            generation_config: GenerationSettings {
                response_mime_type: "application/json",
                response_schema: schema,
            },
        };

        tracing::debug!(model = %self.config.model, prompt_len = prompt.len(), "Calling model");
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Quota(body));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response.json().await.map_err(|e| self.map_send_error(e))?;
        parsed.into_text().ok_or(GenerationError::EmptyResponse)
    }

    fn is_configured(&self) -> bool {
        self.config.has_api_key()
    }
}
