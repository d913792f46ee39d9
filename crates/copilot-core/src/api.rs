//! HTTP-shaped handlers
//!
//! Transport-free request handlers: a JSON body goes in, a status code and a
//! JSON body come out. Any HTTP server can mount them as-is.

use crate::error::{CopilotError, Operation};
use crate::service::CopilotService;
use copilot_model::TaskRequest;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status and JSON body of a handled request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Health report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthBody {
    pub status: String,
    pub timestamp: String,
    pub gemini_api_key_configured: bool,
}

const VALIDATION_ERROR: &str = "Validation Error";
const ANALYSIS_ERROR: &str = "Analysis Error";
const GENERATION_ERROR: &str = "Generation Error";

impl ApiResponse {
    /// 200 with a serialisable body
    pub fn ok<T: Serialize>(body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(body) => Self { status: 200, body },
            Err(e) => Self::error(500, "Internal Server Error", e.to_string(), None),
        }
    }

    /// Error status with an [`ErrorBody`]
    #[must_use]
    pub fn error(status: u16, error: &str, message: String, details: Option<String>) -> Self {
        let body = ErrorBody {
            error: error.to_string(),
            message,
            details,
        };
        Self {
            status,
            body: serde_json::to_value(body).unwrap_or(Value::Null),
        }
    }

    fn from_error(err: &CopilotError, operation: Operation) -> Self {
        let message = err.user_message(operation);
        if err.is_validation() {
            tracing::error!(error = %err, "Validation error");
            return Self::error(err.status_code(), VALIDATION_ERROR, message, None);
        }
        let kind = match operation {
            Operation::Analysis => ANALYSIS_ERROR,
            Operation::Design => GENERATION_ERROR,
        };
        let details = match err {
            CopilotError::Generation(inner) => Some(inner.to_string()),
            CopilotError::MalformedResponse { reason } => Some(reason.clone()),
            _ => None,
        };
        Self::error(err.status_code(), kind, message, details)
    }

    /// Whether the status is 2xx
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

fn parse_request(body: &str) -> Result<TaskRequest, ApiResponse> {
    serde_json::from_str(body).map_err(|e| {
        tracing::error!(error = %e, "Request body rejected");
        ApiResponse::error(
            400,
            VALIDATION_ERROR,
            format!("Request body is not a valid task request: {e}"),
            None,
        )
    })
}

/// Handle an analysis request body
pub async fn analyze(service: &CopilotService, body: &str) -> ApiResponse {
    let request = match parse_request(body) {
        Ok(request) => request,
        Err(response) => return response,
    };
    match service.analyze(&request).await {
        Ok(result) => ApiResponse::ok(&result),
        Err(e) => ApiResponse::from_error(&e, Operation::Analysis),
    }
}

/// Handle a design-generation request body
pub async fn generate_design(service: &CopilotService, body: &str) -> ApiResponse {
    let request = match parse_request(body) {
        Ok(request) => request,
        Err(response) => return response,
    };
    match service.generate_design(&request).await {
        Ok(result) => ApiResponse::ok(&result),
        Err(e) => ApiResponse::from_error(&e, Operation::Design),
    }
}

/// Liveness report
#[must_use]
pub fn health(service: &CopilotService) -> ApiResponse {
    ApiResponse::ok(&HealthBody {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        gemini_api_key_configured: service.is_configured(),
    })
}
