//! Generation boundary
//!
//! [`GenerationClient`] is the only place the pipeline talks to a model.
//! Implementations receive the prompt and the response schema and return the
//! raw text; [`generate_json`] turns that text into a typed value or a
//! malformed-response error. Nothing is retried.

use crate::error::{CopilotError, GenerationError};
use crate::schema::SchemaDescriptor;
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// Structured-output model
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Run one generation constrained by `schema`, returning the raw text
    async fn complete(
        &self,
        prompt: &str,
        schema: &SchemaDescriptor,
    ) -> Result<String, GenerationError>;

    /// Whether the client has credentials to make calls
    fn is_configured(&self) -> bool {
        true
    }
}

/// Call `client` and decode its output as `T`
///
/// The text must parse as JSON, fit `schema`, and deserialise into `T`;
/// any failure is reported as [`CopilotError::MalformedResponse`] and no
/// partial result is kept.
pub async fn generate_json<T, C>(
    client: &C,
    prompt: &str,
    schema: &SchemaDescriptor,
) -> Result<T, CopilotError>
where
    T: DeserializeOwned,
    C: GenerationClient + ?Sized,
{
    let text = client.complete(prompt, schema).await?;
    tracing::info!(response_len = text.len(), "Response received");
    decode(&text, schema)
}

/// Decode raw model text against `schema`
pub fn decode<T: DeserializeOwned>(text: &str, schema: &SchemaDescriptor) -> Result<T, CopilotError> {
    let value: serde_json::Value = serde_json::from_str(text).map_err(|e| {
        tracing::error!(target: "malformed_response", error = %e, "Response is not JSON");
        CopilotError::malformed(format!("response is not valid JSON: {e}"))
    })?;

    schema.validate(&value).map_err(|v| {
        tracing::error!(target: "malformed_response", path = %v.path, "Response violates schema");
        CopilotError::malformed(v.to_string())
    })?;

    serde_json::from_value(value).map_err(|e| {
        tracing::error!(target: "malformed_response", error = %e, "Response does not decode");
        CopilotError::malformed(e.to_string())
    })
}
