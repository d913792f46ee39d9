//! Copilot service: the analysis and design-generation pipelines
//!
//! Each call validates the request before anything else, so an invalid
//! request never reaches the model.

use crate::client::{generate_json, GenerationClient};
use crate::error::{CopilotError, Result};
use crate::prompt::{analysis_prompt, design_prompt};
use crate::schema::{analysis_schema, design_schema, SchemaDescriptor};
use crate::shape::ResponseShaper;
use copilot_model::{AnalysisResult, GenerateDesignResponse, TaskRequest};
use copilot_patterns::PatternKnowledgeBase;
use std::sync::Arc;
use std::time::Instant;

/// Pipeline entry points shared by the API handlers and the CLI
#[derive(Clone)]
pub struct CopilotService {
    client: Arc<dyn GenerationClient>,
    shaper: ResponseShaper,
    analysis_schema: Arc<SchemaDescriptor>,
    design_schema: Arc<SchemaDescriptor>,
}

impl std::fmt::Debug for CopilotService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CopilotService")
            .field("patterns", &self.shaper.knowledge_base().len())
            .finish_non_exhaustive()
    }
}

impl CopilotService {
    /// Create service
    #[must_use]
    pub fn new(client: Arc<dyn GenerationClient>, knowledge_base: Arc<PatternKnowledgeBase>) -> Self {
        Self {
            client,
            shaper: ResponseShaper::new(knowledge_base),
            analysis_schema: Arc::new(analysis_schema()),
            design_schema: Arc::new(design_schema()),
        }
    }

    /// Response shaper in use
    #[inline]
    #[must_use]
    pub fn shaper(&self) -> &ResponseShaper {
        &self.shaper
    }

    /// Whether the generation client has credentials
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.client.is_configured()
    }

    /// Analyse a design for a task
    pub async fn analyze(&self, request: &TaskRequest) -> Result<AnalysisResult> {
        request.validate()?;
        let started = Instant::now();
        let request = bounded(request);
        log_request("analysis", &request);

        let prompt = analysis_prompt(&request);
        tracing::info!(prompt_len = prompt.len(), "Starting analysis");

        let raw: AnalysisResult =
            generate_json(self.client.as_ref(), &prompt, &self.analysis_schema)
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, "Analysis failed");
                    e
                })?;
        let result = self.shaper.shape(raw, request.frame_snapshot.as_ref());

        tracing::info!(elapsed_ms = elapsed_ms(started), "Analysis complete");
        Ok(result)
    }

    /// Generate a design layout for a task
    pub async fn generate_design(&self, request: &TaskRequest) -> Result<GenerateDesignResponse> {
        request.validate()?;
        let started = Instant::now();
        let request = bounded(request);
        log_request("design", &request);

        let prompt = design_prompt(&request);
        tracing::info!(prompt_len = prompt.len(), "Starting design generation");

        let response: GenerateDesignResponse =
            generate_json(self.client.as_ref(), &prompt, &self.design_schema)
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, "Design generation failed");
                    e
                })?;
        response.scaffold_spec.validate().map_err(|e| {
            tracing::error!(target: "malformed_response", error = %e, "Generated frame rejected");
            CopilotError::malformed(e.to_string())
        })?;

        tracing::info!(
            title = %response.proposal.title,
            regions = response.scaffold_spec.regions.len(),
            patterns_used = %response.proposal.patterns_used.join(", "),
            elapsed_ms = elapsed_ms(started),
            "Design generation complete"
        );
        for (i, region) in response.scaffold_spec.regions.iter().enumerate() {
            tracing::debug!(index = i + 1, name = %region.name, nodes = region.nodes.len(), "Region");
            for node in &region.nodes {
                tracing::debug!(
                    region = %region.name,
                    kind = node.kind(),
                    text = node.text_override().unwrap_or("N/A"),
                    "Node"
                );
            }
        }
        Ok(response)
    }
}

fn bounded(request: &TaskRequest) -> TaskRequest {
    let mut request = request.clone();
    request.frame_snapshot = request.frame_snapshot.take().map(|s| s.bounded());
    request
}

fn log_request(kind: &str, request: &TaskRequest) {
    tracing::info!(
        kind,
        primary_task = %request.primary_task,
        secondary_task = TaskRequest::field(&request.secondary_task),
        persona = TaskRequest::field(&request.persona),
        "New request"
    );
    match &request.frame_snapshot {
        Some(snapshot) => tracing::info!(
            frame = %snapshot.title,
            nodes = snapshot.node_count(),
            "Request carries snapshot"
        ),
        None => tracing::info!("No frame snapshot provided (text-only request)"),
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
