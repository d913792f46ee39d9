use copilot_model::{Bounds, GenerateDesignResponse, SceneNode};
use copilot_scaffold::{commit, Canvas, DrawKind, MemoryCanvas, ScaffoldRenderer};
use pretty_assertions::assert_eq;

const DESIGN: &str = r#"{
    "scaffoldSpec": {
        "frame": {"width": 1440, "height": 900, "layoutMode": "VERTICAL"},
        "regions": [
            {"name": "Header", "layoutMode": "HORIZONTAL", "nodes": [
                {"type": "text", "textOverride": "Sign in"},
                {"type": "divider"}
            ]},
            {"name": "Form", "nodes": [
                {"type": "component", "componentName": "md-outlined-text-field", "textOverride": "Email"},
                {"type": "component", "componentName": "md-outlined-text-field", "textOverride": "Password"},
                {"type": "component", "componentName": "md-checkbox", "textOverride": "Remember me"},
                {"type": "component", "componentName": "md-filled-button", "textOverride": "Continue"}
            ]},
            {"name": "Footer", "height": 64, "nodes": [
                {"type": "rect", "textOverride": "Legal links"}
            ]}
        ]
    },
    "proposal": {"title": "Sign-in form", "why": "Short form with clear action", "patternsUsed": ["Inline Validation"]}
}"#;

fn anchor_frame() -> SceneNode {
    SceneNode::frame("Login").with_bounds(Bounds::new(0.0, 0.0, 375.0, 812.0))
}

#[test]
fn generated_design_renders_every_region_and_node() {
    let design: GenerateDesignResponse = serde_json::from_str(DESIGN).unwrap();
    let root = ScaffoldRenderer::new().render(&design.scaffold_spec).unwrap();

    let regions: Vec<&str> = root.children().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(regions, vec!["Header", "Form", "Footer"]);

    let per_region: Vec<usize> = root.children().iter().map(|r| r.children().len()).collect();
    assert_eq!(per_region, vec![2, 4, 1]);

    let texts = root.texts();
    for label in ["Sign in", "Email", "Password", "Remember me", "Continue", "Legal links"] {
        assert!(texts.contains(&label), "missing {label}");
    }
    assert_eq!(root.children()[2].height, 64.0);
}

#[tokio::test]
async fn design_is_committed_below_selection() {
    let design: GenerateDesignResponse = serde_json::from_str(DESIGN).unwrap();
    let mut canvas = MemoryCanvas::with_selection(vec![anchor_frame()]);
    let renderer = ScaffoldRenderer::new();

    let anchor = canvas.anchor().unwrap();
    let drawable = renderer.place_below(renderer.render(&design.scaffold_spec).unwrap(), &anchor);
    commit(&mut canvas, drawable).await.unwrap();

    let (_, inserted) = &canvas.inserted()[0];
    assert_eq!((inserted.x, inserted.y), (0.0, 862.0));
}

#[tokio::test]
async fn scaffold_for_pattern_commits_with_fonts() {
    let mut canvas = MemoryCanvas::with_selection(vec![anchor_frame()]);
    let renderer = ScaffoldRenderer::new();
    let components = vec![
        "md-list".to_string(),
        "md-expansion-panel".to_string(),
        "md-elevated-card".to_string(),
    ];

    let scaffold = renderer.render_scaffold("List-Detail", &components);
    let id = commit(&mut canvas, scaffold).await.unwrap();

    let (inserted_id, inserted) = &canvas.inserted()[0];
    assert_eq!(*inserted_id, id);
    assert_eq!(inserted.children().len(), 4);
    assert!(inserted
        .walk()
        .any(|d| matches!(d.kind, DrawKind::Polygon { .. })));
}

#[tokio::test]
async fn notes_commit_as_separate_nodes() {
    let mut canvas = MemoryCanvas::with_selection(vec![anchor_frame()]);
    let renderer = ScaffoldRenderer::new();
    let anchor = canvas.anchor().unwrap();

    let notes = renderer.render_notes(&[
        "Primary action is below the fold".to_string(),
        "Consider inline validation on the email field".to_string(),
    ]);
    for note in renderer.place_notes(notes, &anchor) {
        commit(&mut canvas, note).await.unwrap();
    }

    assert_eq!(canvas.inserted().len(), 2);
    assert!(canvas.inserted().iter().all(|(_, d)| d.x == 425.0));
    assert!(canvas.inserted()[1].1.y > canvas.inserted()[0].1.y);
}
