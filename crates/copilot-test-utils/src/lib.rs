//! Testing utilities for the canvas copilot workspace
//!
//! Scene-tree fixtures, canned model responses, and a scripted
//! [`GenerationClient`] that records every call it receives.

#![allow(missing_docs)]

use async_trait::async_trait;
use copilot_core::{CopilotService, GenerationClient, GenerationError, SchemaDescriptor};
use copilot_model::{Bounds, Paint, Rgb, SceneNode};
use copilot_patterns::PatternKnowledgeBase;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// `#F5F5F5`
pub const LIGHT_GREY: Rgb = Rgb::new(245.0 / 255.0, 245.0 / 255.0, 245.0 / 255.0);
/// `#202020`
pub const DARK_GREY: Rgb = Rgb::new(32.0 / 255.0, 32.0 / 255.0, 32.0 / 255.0);
/// `#6750A4`
pub const BRAND_PURPLE: Rgb = Rgb::new(103.0 / 255.0, 80.0 / 255.0, 164.0 / 255.0);

/// Login frame: light background, a heading, two labelled fields and a button
pub fn login_frame() -> SceneNode {
    SceneNode::frame("Login")
        .with_bounds(Bounds::new(0.0, 0.0, 375.0, 812.0))
        .with_fill(LIGHT_GREY)
        .with_children([
            SceneNode::text_layer("Welcome back").with_fill(DARK_GREY),
            SceneNode::text_layer("Email"),
            SceneNode::instance("Text Field"),
            SceneNode::text_layer("Password"),
            SceneNode::instance("Text Field"),
            SceneNode::instance("Button").with_fill(BRAND_PURPLE),
        ])
}

/// Chat frame with more text than the sampler keeps
pub fn chat_frame(messages: usize) -> SceneNode {
    SceneNode::frame("Chat")
        .with_bounds(Bounds::new(200.0, 40.0, 390.0, 844.0))
        .with_fill(Rgb::WHITE)
        .with_children((0..messages).map(|i| {
            SceneNode::frame(format!("Bubble {i}"))
                .with_fills(vec![Paint::solid(BRAND_PURPLE), Paint::solid(Rgb::BLACK).hidden()])
                .with_child(SceneNode::text_layer(format!("Message number {i}")))
        }))
}

/// Dark frame with no text and no form controls
pub fn dark_frame() -> SceneNode {
    SceneNode::frame("Dark")
        .with_bounds(Bounds::new(0.0, 0.0, 1440.0, 900.0))
        .with_fill(DARK_GREY)
}

/// Analysis the model might return for [`login_frame`]
pub const ANALYSIS_JSON: &str = r#"{
  "flows": {
    "primary": ["Open sign-in", "Enter email", "Enter password", "Submit"],
    "secondary": ["Reset password"],
    "edgeCases": ["Wrong password", "Locked account"]
  },
  "uxImprovements": [
    {"title": "Show password toggle", "rationale": "Reduces typos", "howToApply": "Add a trailing icon button", "suggestedComponents": ["md-icon-button"]},
    {"title": "Remember me", "rationale": "Fewer sign-ins", "howToApply": "Add a checkbox under the form"}
  ],
  "patterns": [
    {"name": "Inline Validation", "why": "Catch typos"},
    {"name": "Passkey Prompt", "why": "Passwordless sign-in is faster for returning users", "componentsHint": ["md-filled-button", "md-dialog"]}
  ],
  "wcagNotes": [
    {"issue": "Focus order", "detail": "Button precedes fields in tab order", "fix": "Reorder layers"}
  ],
  "canvasNotes": [
    "Critical: no error states, no password recovery link, low contrast heading.",
    "Suggestions: add inline validation, a show-password toggle and a remember-me option."
  ]
}"#;

/// Design the model might return for a sign-in task
pub const DESIGN_JSON: &str = r#"{
  "scaffoldSpec": {
    "frame": {"width": 1280, "height": 800, "layoutMode": "VERTICAL"},
    "regions": [
      {"name": "Header", "layoutMode": "HORIZONTAL", "nodes": [
        {"type": "text", "textOverride": "Sign in"},
        {"type": "component", "componentName": "md-text-button", "textOverride": "Help"}
      ]},
      {"name": "Form", "nodes": [
        {"type": "component", "componentName": "md-outlined-text-field", "textOverride": "Email"},
        {"type": "component", "componentName": "md-outlined-text-field", "textOverride": "Password"},
        {"type": "divider"},
        {"type": "component", "componentName": "md-filled-button", "textOverride": "Continue"}
      ]}
    ]
  },
  "proposal": {
    "title": "Focused sign-in",
    "why": "A single column keeps attention on the two fields and the primary action.",
    "patternsUsed": ["Inline Validation"]
  }
}"#;

/// Generation client that replays canned responses in order
///
/// Once the script runs out every further call fails with
/// [`GenerationError::EmptyResponse`].
#[derive(Debug, Default)]
pub struct ScriptedClient {
    responses: Mutex<VecDeque<Result<String, GenerationError>>>,
    prompts: Mutex<Vec<String>>,
    configured: bool,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self {
            configured: true,
            ..Self::default()
        }
    }

    /// Queue a successful response
    pub fn respond(self, text: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(text.into()));
        self
    }

    /// Queue a failure
    pub fn fail(self, error: GenerationError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Report missing credentials
    pub fn unconfigured(mut self) -> Self {
        self.configured = false;
        self
    }

    /// Prompts received so far
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl GenerationClient for ScriptedClient {
    async fn complete(
        &self,
        prompt: &str,
        _schema: &SchemaDescriptor,
    ) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(GenerationError::EmptyResponse))
    }

    fn is_configured(&self) -> bool {
        self.configured
    }
}

/// Service over a scripted client and the built-in knowledge base
pub fn service_with(client: Arc<ScriptedClient>) -> CopilotService {
    let kb = PatternKnowledgeBase::builtin().expect("built-in pattern map should load");
    CopilotService::new(client, Arc::new(kb))
}
