use copilot_core::{api, extract, CopilotError, GenerationError, Operation, Session};
use copilot_model::snapshot::MAX_TEXT_SAMPLES;
use copilot_model::{SceneNode, TaskRequest, VisualNode};
use copilot_test_utils::{
    chat_frame, dark_frame, login_frame, service_with, ScriptedClient, ANALYSIS_JSON, DESIGN_JSON,
};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn snapshot_of(node: &SceneNode) -> copilot_model::FrameSnapshot {
    extract(&[node as &dyn VisualNode]).unwrap()
}

#[tokio::test]
async fn login_analysis_is_enriched_and_augmented() {
    let client = Arc::new(ScriptedClient::new().respond(ANALYSIS_JSON));
    let service = service_with(Arc::clone(&client));
    let request = TaskRequest::new("Sign in to the app").with_snapshot(snapshot_of(&login_frame()));

    let result = service.analyze(&request).await.unwrap();

    let prompt = &client.prompts()[0];
    assert!(prompt.contains("- Frame Name: \"Login\"\n"));
    assert!(prompt.contains("- Color Palette: #F5F5F5, #202020, #6750A4\n"));
    assert!(prompt.contains("- Existing Components: Text Field, Button\n"));

    let inline = &result.patterns[0];
    assert!(!inline.components.is_empty());
    assert!(!inline.previews.is_empty());
    assert_ne!(inline.rationale.as_deref(), Some("Catch typos"));

    let passkey = &result.patterns[1];
    assert_eq!(passkey.components, vec!["md-filled-button", "md-dialog"]);
    assert!(passkey.previews.is_empty());
    assert_eq!(passkey.rationale.as_deref(), Some(passkey.why.as_str()));

    let issues: Vec<&str> = result.wcag_notes.iter().map(|n| n.issue.as_str()).collect();
    assert_eq!(
        issues,
        vec!["Focus order", "Potential low contrast detected", "Form field labels"]
    );
    assert_eq!(result.canvas_notes.len(), 2);
}

#[tokio::test]
async fn dark_frame_gets_no_heuristic_notes() {
    let client = Arc::new(ScriptedClient::new().respond(ANALYSIS_JSON));
    let service = service_with(client);
    let request = TaskRequest::new("Browse").with_snapshot(snapshot_of(&dark_frame()));

    let result = service.analyze(&request).await.unwrap();
    assert_eq!(result.wcag_notes.len(), 1);
}

#[test]
fn large_selection_is_sampled_but_fully_counted() {
    let snapshot = snapshot_of(&chat_frame(15));
    assert_eq!(snapshot.node_count(), 31);
    assert_eq!(snapshot.text_samples().len(), MAX_TEXT_SAMPLES);
    assert_eq!(snapshot.text_samples()[0], "Message number 0");
    let colors: Vec<&str> = snapshot.color_samples.iter().map(String::as_str).collect();
    assert_eq!(colors, vec!["#FFFFFF", "#6750A4"]);
}

#[tokio::test]
async fn blank_task_never_reaches_the_model() {
    let client = Arc::new(ScriptedClient::new().respond(ANALYSIS_JSON));
    let service = service_with(Arc::clone(&client));

    let err = service.analyze(&TaskRequest::new("  ")).await.unwrap_err();
    assert!(matches!(err, CopilotError::Validation(_)));

    let response = api::generate_design(&service, r#"{"primaryTask": ""}"#).await;
    assert_eq!(response.status, 400);
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn non_json_output_is_malformed() {
    let client = Arc::new(ScriptedClient::new().respond("Sure! Here is your analysis:"));
    let err = service_with(client)
        .analyze(&TaskRequest::new("Pay"))
        .await
        .unwrap_err();
    assert!(matches!(err, CopilotError::MalformedResponse { .. }));
    assert!(err.user_message(Operation::Analysis).starts_with("Analysis failed:"));
}

#[tokio::test]
async fn output_missing_a_section_is_malformed() {
    let mut value: serde_json::Value = serde_json::from_str(ANALYSIS_JSON).unwrap();
    value.as_object_mut().unwrap().remove("canvasNotes");
    let client = Arc::new(ScriptedClient::new().respond(value.to_string()));

    let err = service_with(client)
        .analyze(&TaskRequest::new("Pay"))
        .await
        .unwrap_err();
    let CopilotError::MalformedResponse { reason } = err else {
        panic!("expected malformed response");
    };
    assert!(reason.contains("canvasNotes"));
}

#[tokio::test]
async fn quota_failure_is_reported_as_generation_error() {
    let client = Arc::new(ScriptedClient::new().fail(GenerationError::Quota("daily limit".into())));
    let service = service_with(client);

    let response = api::analyze(&service, r#"{"primaryTask": "Pay"}"#).await;
    assert_eq!(response.status, 500);
    assert_eq!(response.body["error"], "Analysis Error");
    assert!(response.body["details"].as_str().unwrap().contains("daily limit"));
}

#[tokio::test]
async fn design_prompt_carries_enriched_patterns() {
    let client = Arc::new(
        ScriptedClient::new()
            .respond(ANALYSIS_JSON)
            .respond(DESIGN_JSON),
    );
    let service = service_with(Arc::clone(&client));
    let task = TaskRequest::new("Sign in").with_snapshot(snapshot_of(&login_frame()));

    let analysis = service.analyze(&task).await.unwrap();
    let design = service
        .generate_design(&task.clone().with_analysis(analysis.clone()))
        .await
        .unwrap();

    let prompt = &client.prompts()[1];
    assert!(prompt.contains("**Suggested Patterns** (integrate these into your design):"));
    assert!(prompt.contains(&format!(
        "- Inline Validation: {}\n",
        analysis.patterns[0].display_rationale()
    )));
    assert!(prompt.contains("- Frame: \"Login\"\n"));

    assert_eq!(design.proposal.title, "Focused sign-in");
    assert_eq!(design.scaffold_spec.regions.len(), 2);
}

#[tokio::test]
async fn design_with_empty_frame_is_rejected() {
    let mut value: serde_json::Value = serde_json::from_str(DESIGN_JSON).unwrap();
    value["scaffoldSpec"]["frame"]["width"] = serde_json::json!(0);
    let client = Arc::new(ScriptedClient::new().respond(value.to_string()));

    let err = service_with(client)
        .generate_design(&TaskRequest::new("Sign in"))
        .await
        .unwrap_err();
    assert!(matches!(err, CopilotError::MalformedResponse { .. }));
}

#[tokio::test]
async fn late_answer_to_superseded_request_is_dropped() {
    let client = Arc::new(
        ScriptedClient::new()
            .respond(ANALYSIS_JSON)
            .respond(ANALYSIS_JSON),
    );
    let service = service_with(client);
    let mut session = Session::new();

    let first = session.begin_request();
    let second = session.begin_request();
    let first_result = service.analyze(&TaskRequest::new("Old")).await.unwrap();
    let second_result = service.analyze(&TaskRequest::new("New")).await.unwrap();

    session.accept_analysis(second, second_result).unwrap();
    assert!(session.accept_analysis(first, first_result).is_err());
    assert!(session.results().is_some());
}

#[test]
fn health_reports_missing_key() {
    let service = service_with(Arc::new(ScriptedClient::new().unconfigured()));
    let response = api::health(&service);
    assert_eq!(response.status, 200);
    assert_eq!(response.body["geminiApiKeyConfigured"], false);
}
