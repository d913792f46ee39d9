//! Prompt composition
//!
//! Both prompts share one layout: preamble, snapshot block (only with a
//! snapshot), task block, then numbered instructions for the mode. The
//! functions are pure string builders, so equal inputs give equal bytes.

use copilot_model::{AnalysisResult, FrameSnapshot, TaskRequest};

/// Default preamble of analysis prompts
pub const ANALYSIS_PREAMBLE: &str = "You are a senior product designer specializing in desktop web UX. \
You provide task-focused, CONTEXT-AWARE design guidance. \
Your #1 priority is to ANALYZE the current design first, then provide suggestions grounded in what you see. \
Reference components by Material Web names where applicable. \
Be concise, avoid copying specific product UIs.";

/// Preamble of design-generation prompts
pub const DESIGN_PREAMBLE: &str = "You are a senior product designer creating cohesive design layouts. \
Generate a scaffoldSpec with 2-4 regions using Material Web components. \
Keep the proposal brief (1-2 sentences).";

/// Components the design model may reference
pub const AVAILABLE_COMPONENTS: &[&str] = &[
    "md-filled-button",
    "md-outlined-button",
    "md-text-button",
    "md-outlined-text-field",
    "md-filled-text-field",
    "md-list",
    "md-list-item",
    "md-elevated-card",
    "md-filled-card",
    "md-outlined-card",
    "md-checkbox",
    "md-switch",
    "md-icon",
    "md-fab",
    "md-chip",
];

const RULE: &str = "\n---\n\n";

const ANALYSIS_INSTRUCTIONS: &[&str] = &[
    "FIRST, analyze the Current Design Context above to understand what interface type this is.",
    "Provide user flows that match the ACTUAL interface you see (not generic flows), at most 10 steps per category.",
    "Suggest EXACTLY 5 UX improvements specific to this interface type.",
    "Suggest 3-5 design patterns that fit the CURRENT design you analyzed.",
    "For each pattern, specify Material Web component names (e.g., md-outlined-text-field, md-filled-button).",
    "Provide WCAG accessibility notes based on what you see in the design.",
    "Generate 2-4 canvas notes for the designer:\n   \
     - First note: List the top 3 critical problems/issues in this design\n   \
     - Second note: Provide 3-4 actionable suggestions for the designer to consider\n   \
     - Further notes (optional): Any additional context-specific insights\n   \
     Format each note as a clear, concise paragraph (max 2-3 sentences).",
];

/// Prompt for a UX analysis
#[must_use]
pub fn analysis_prompt(request: &TaskRequest) -> String {
    let mut prompt = TaskRequest::field(&request.system_prompt)
        .unwrap_or(ANALYSIS_PREAMBLE)
        .to_string();
    prompt.push_str("\n\n---\n\n");

    if let Some(snapshot) = &request.frame_snapshot {
        analysis_snapshot_block(&mut prompt, snapshot);
        prompt.push('\n');
    }

    prompt.push_str("**User's Task Context**:\n");
    task_block(&mut prompt, request);

    prompt.push_str(RULE);
    prompt.push_str("**Instructions**:\n");
    numbered(&mut prompt, ANALYSIS_INSTRUCTIONS.iter().map(|s| (*s).to_string()));
    prompt.push_str(
        "\nREMEMBER: All suggestions must be grounded in the actual design context, not generic patterns.\n",
    );
    prompt
}

/// Prompt for a generated design
#[must_use]
pub fn design_prompt(request: &TaskRequest) -> String {
    let mut prompt = DESIGN_PREAMBLE.to_string();
    prompt.push_str("\n\n---\n\n");

    if let Some(snapshot) = &request.frame_snapshot {
        design_snapshot_block(&mut prompt, snapshot);
        prompt.push('\n');
    }

    prompt.push_str("**Task Context**:\n");
    task_block(&mut prompt, request);

    if let Some(analysis) = &request.analysis_results {
        suggested_patterns(&mut prompt, analysis);
    }

    prompt.push_str(RULE);
    prompt.push_str("**Instructions**:\n");
    numbered(
        &mut prompt,
        [
            "Create layout (1200-1440px) with 2-4 regions integrating suggested patterns.".to_string(),
            format!("Available components: {}", AVAILABLE_COMPONENTS.join(", ")),
            "Node types: {type: 'component', componentName: 'md-...'} | {type: 'text', textOverride: '...'} | {type: 'divider'} | {type: 'rect'}".to_string(),
            "Each region needs 2-5 nodes. Use VERTICAL for main, HORIZONTAL for button groups.".to_string(),
            "Proposal 'why': 1-2 sentences explaining rationale.".to_string(),
        ],
    );
    prompt
}

fn analysis_snapshot_block(prompt: &mut String, snapshot: &FrameSnapshot) {
    let summary = &snapshot.selection_summary;
    prompt.push_str("**CURRENT DESIGN CONTEXT** (ANALYZE THIS FIRST):\n");
    prompt.push_str(&format!("- Frame Name: \"{}\"\n", snapshot.title));
    prompt.push_str(&format!("- Contains {} UI elements\n", summary.node_count));
    prompt.push_str(&format!("- Element Types: {}\n", join(summary.node_types.iter())));

    if !summary.text_samples.is_empty() {
        prompt.push_str(&format!("- Visible Text: {}\n", quoted(&summary.text_samples)));
        prompt.push_str(
            "  → Use this text to understand what type of interface this is (e.g., chat, form, dashboard, etc.)\n",
        );
    }
    if !summary.component_names.is_empty() {
        prompt.push_str(&format!(
            "- Existing Components: {}\n",
            join(summary.component_names.iter())
        ));
    }
    if !snapshot.color_samples.is_empty() {
        prompt.push_str(&format!(
            "- Color Palette: {}\n",
            join(snapshot.color_samples.iter())
        ));
    }

    prompt.push_str(
        "\n**CRITICAL**: Based on the frame name and visible text above, identify what type of interface this is. \
For example, if the text contains chat-related terms or message content, this is a CHAT interface, NOT a dashboard. \
If it contains form fields and labels, it's a FORM interface. Ground your analysis in the actual design.\n",
    );
}

fn design_snapshot_block(prompt: &mut String, snapshot: &FrameSnapshot) {
    let summary = &snapshot.selection_summary;
    prompt.push_str("**CURRENT DESIGN CONTEXT**:\n");
    prompt.push_str(&format!("- Frame: \"{}\"\n", snapshot.title));
    prompt.push_str(&format!("- Contains {} elements\n", summary.node_count));
    if !summary.text_samples.is_empty() {
        prompt.push_str(&format!("- Visible Text: {}\n", quoted(&summary.text_samples)));
    }
}

fn task_block(prompt: &mut String, request: &TaskRequest) {
    prompt.push_str(&format!("- Primary Task: {}\n", request.primary_task.trim()));
    let optional = [
        ("Secondary Task", &request.secondary_task),
        ("Persona", &request.persona),
        ("Constraints", &request.constraints),
    ];
    for (label, value) in optional {
        if let Some(value) = TaskRequest::field(value) {
            prompt.push_str(&format!("- {label}: {value}\n"));
        }
    }
}

fn suggested_patterns(prompt: &mut String, analysis: &AnalysisResult) {
    if analysis.patterns.is_empty() {
        return;
    }
    prompt.push_str("\n**Suggested Patterns** (integrate these into your design):\n");
    for pattern in &analysis.patterns {
        prompt.push_str(&format!(
            "- {}: {}\n",
            pattern.name,
            pattern.display_rationale()
        ));
        if !pattern.components.is_empty() {
            prompt.push_str(&format!("  Components: {}\n", pattern.components.join(", ")));
        }
    }
}

fn numbered(prompt: &mut String, lines: impl IntoIterator<Item = String>) {
    for (i, line) in lines.into_iter().enumerate() {
        prompt.push_str(&format!("{}. {line}\n", i + 1));
    }
}

fn join<'a>(items: impl Iterator<Item = &'a String>) -> String {
    items.map(String::as_str).collect::<Vec<_>>().join(", ")
}

fn quoted(samples: &[String]) -> String {
    samples
        .iter()
        .map(|t| format!("\"{t}\""))
        .collect::<Vec<_>>()
        .join(", ")
}
