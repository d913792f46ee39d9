//! Task request: user-supplied parameters for analysis and generation

use crate::analysis::AnalysisResult;
use crate::error::ModelError;
use crate::snapshot::FrameSnapshot;
use serde::{Deserialize, Serialize};

/// Message returned when the primary task is missing
pub const PRIMARY_TASK_REQUIRED: &str = "Primary task is required and cannot be empty";

/// Parameters of one analysis or design-generation request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRequest {
    /// What the user is trying to accomplish (required)
    #[serde(default)]
    pub primary_task: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_task: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<String>,
    /// Replaces the default instruction preamble
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_snapshot: Option<FrameSnapshot>,
    /// Prior analysis, used by design generation only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_results: Option<AnalysisResult>,
}

impl TaskRequest {
    /// Create request for a primary task
    #[inline]
    #[must_use]
    pub fn new(primary_task: impl Into<String>) -> Self {
        Self {
            primary_task: primary_task.into(),
            ..Self::default()
        }
    }

    /// With secondary task
    #[inline]
    #[must_use]
    pub fn with_secondary_task(mut self, task: impl Into<String>) -> Self {
        self.secondary_task = Some(task.into());
        self
    }

    /// With persona
    #[inline]
    #[must_use]
    pub fn with_persona(mut self, persona: impl Into<String>) -> Self {
        self.persona = Some(persona.into());
        self
    }

    /// With constraints
    #[inline]
    #[must_use]
    pub fn with_constraints(mut self, constraints: impl Into<String>) -> Self {
        self.constraints = Some(constraints.into());
        self
    }

    /// With system prompt override
    #[inline]
    #[must_use]
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// With frame snapshot
    #[inline]
    #[must_use]
    pub fn with_snapshot(mut self, snapshot: FrameSnapshot) -> Self {
        self.frame_snapshot = Some(snapshot);
        self
    }

    /// With prior analysis results
    #[inline]
    #[must_use]
    pub fn with_analysis(mut self, results: AnalysisResult) -> Self {
        self.analysis_results = Some(results);
        self
    }

    /// Check the primary task is present
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.primary_task.trim().is_empty() {
            return Err(ModelError::missing(PRIMARY_TASK_REQUIRED));
        }
        Ok(())
    }

    /// Non-blank optional field
    ///
    /// Blank strings are treated as absent, mirroring how form inputs submit.
    #[must_use]
    pub fn field(value: &Option<String>) -> Option<&str> {
        value.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_primary_task_is_rejected() {
        let err = TaskRequest::new("   ").validate().unwrap_err();
        assert_eq!(err.to_string(), PRIMARY_TASK_REQUIRED);
        assert!(TaskRequest::default().validate().is_err());
    }

    #[test]
    fn missing_primary_task_deserialises_then_fails_validation() {
        let request: TaskRequest = serde_json::from_str(r#"{"persona": "admin"}"#).unwrap();
        assert!(request.validate().is_err());
        assert_eq!(TaskRequest::field(&request.persona), Some("admin"));
    }

    #[test]
    fn blank_optional_fields_are_absent() {
        let request = TaskRequest::new("Book a room").with_persona("  ");
        assert_eq!(TaskRequest::field(&request.persona), None);
        assert_eq!(TaskRequest::field(&request.constraints), None);
    }
}
