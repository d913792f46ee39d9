//! canvas-copilot: run the copilot pipeline from the command line
//!
//! Scenes, analyses and designs are read from JSON files, results are
//! written to stdout as JSON. Logs go to stderr.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use copilot_core::{extract, CopilotConfig, CopilotService, GeminiClient, PluginHost};
use copilot_model::{
    AnalysisResult, GenerateDesignResponse, SceneNode, ScaffoldSpec, TaskRequest, VisualNode,
};
use copilot_scaffold::{MemoryCanvas, ScaffoldRenderer};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "canvas-copilot", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Model identifier, overriding the config file
    #[arg(long, global = true)]
    model: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarise a scene as a frame snapshot
    Snapshot {
        /// Scene JSON: one node or an array of selected nodes
        #[arg(long)]
        scene: PathBuf,
    },
    /// Analyse a design for a task
    Analyze {
        #[command(flatten)]
        task: TaskArgs,
    },
    /// Generate a design layout for a task
    Generate {
        #[command(flatten)]
        task: TaskArgs,

        /// Earlier analysis whose patterns the design should use
        #[arg(long)]
        analysis: Option<PathBuf>,
    },
    /// Render a generated design onto an in-memory canvas
    Render {
        /// Design JSON: a full response or a bare scaffold spec
        #[arg(long)]
        design: PathBuf,

        /// Selection to place the design below
        #[arg(long)]
        scene: Option<PathBuf>,
    },
    /// Render the component scaffold of a known pattern
    Scaffold {
        /// Pattern name
        pattern: String,
    },
    /// List the pattern knowledge base
    Patterns {
        /// Show one pattern only
        #[arg(long)]
        name: Option<String>,
    },
}

#[derive(Args)]
struct TaskArgs {
    /// What the user is trying to accomplish
    #[arg(long)]
    task: String,

    #[arg(long)]
    secondary_task: Option<String>,

    #[arg(long)]
    persona: Option<String>,

    #[arg(long)]
    constraints: Option<String>,

    /// Replace the default instruction preamble
    #[arg(long)]
    system_prompt: Option<String>,

    /// Selection to analyse
    #[arg(long)]
    scene: Option<PathBuf>,
}

/// Scene files hold either one node or a selection of several
#[derive(Deserialize)]
#[serde(untagged)]
enum SceneFile {
    Many(Vec<SceneNode>),
    One(SceneNode),
}

impl SceneFile {
    fn into_nodes(self) -> Vec<SceneNode> {
        match self {
            Self::Many(nodes) => nodes,
            Self::One(node) => vec![node],
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DesignFile {
    Response(GenerateDesignResponse),
    Spec(ScaffoldSpec),
}

impl DesignFile {
    fn into_spec(self) -> ScaffoldSpec {
        match self {
            Self::Response(response) => response.scaffold_spec,
            Self::Spec(spec) => spec,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config = load_config(&cli)?;

    match cli.command {
        Commands::Snapshot { scene } => {
            let nodes = read_scene(&scene)?;
            print_json(&snapshot(&nodes))?;
        }
        Commands::Analyze { task } => {
            let request = task.into_request()?;
            let result = service(&config)?.analyze(&request).await?;
            print_json(&result)?;
        }
        Commands::Generate { task, analysis } => {
            let mut request = task.into_request()?;
            if let Some(path) = analysis {
                request = request.with_analysis(read_json::<AnalysisResult>(&path)?);
            }
            let response = service(&config)?.generate_design(&request).await?;
            print_json(&response)?;
        }
        Commands::Render { design, scene } => {
            let spec = read_json::<DesignFile>(&design)?.into_spec();
            let renderer = ScaffoldRenderer::new();
            match scene {
                Some(scene) => {
                    let canvas = MemoryCanvas::with_selection(read_scene(&scene)?);
                    let mut host = PluginHost::new(canvas);
                    host.insert_design(&spec).await?;
                    let inserted: Vec<_> = host.canvas().inserted().iter().map(|(_, d)| d).collect();
                    print_json(&inserted)?;
                }
                None => print_json(&renderer.render(&spec)?)?,
            }
        }
        Commands::Scaffold { pattern } => {
            let kb = config.knowledge_base()?;
            let mapping = kb
                .get(&pattern)
                .with_context(|| format!("unknown pattern: {pattern}"))?;
            print_json(&ScaffoldRenderer::new().render_scaffold(&pattern, &mapping.components))?;
        }
        Commands::Patterns { name } => {
            let kb = config.knowledge_base()?;
            match name {
                Some(name) => {
                    let mapping = kb
                        .get(&name)
                        .with_context(|| format!("unknown pattern: {name}"))?;
                    print_json(mapping)?;
                }
                None => {
                    for (name, mapping) in kb.iter() {
                        println!("{name}: {}", mapping.components.join(", "));
                    }
                }
            }
        }
    }
    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

fn load_config(cli: &Cli) -> Result<CopilotConfig> {
    let mut config = match &cli.config {
        Some(path) => CopilotConfig::load(path)?,
        None => CopilotConfig::new(),
    };
    if let Some(key) = &cli.api_key {
        config.generation = config.generation.with_api_key(key.clone());
    }
    if let Some(model) = &cli.model {
        config.generation = config.generation.with_model(model.clone());
    }
    Ok(config)
}

fn service(config: &CopilotConfig) -> Result<CopilotService> {
    let client = GeminiClient::new(config.generation.clone())?;
    if !config.generation.has_api_key() {
        tracing::warn!("GEMINI_API_KEY is not set; generation calls will fail");
    }
    let kb = config.knowledge_base()?;
    Ok(CopilotService::new(Arc::new(client), Arc::new(kb)))
}

impl TaskArgs {
    fn into_request(self) -> Result<TaskRequest> {
        let mut request = TaskRequest {
            primary_task: self.task,
            secondary_task: self.secondary_task,
            persona: self.persona,
            constraints: self.constraints,
            system_prompt: self.system_prompt,
            ..TaskRequest::default()
        };
        if let Some(scene) = self.scene {
            let nodes = read_scene(&scene)?;
            request.frame_snapshot = snapshot(&nodes);
        }
        Ok(request)
    }
}

fn snapshot(nodes: &[SceneNode]) -> Option<copilot_model::FrameSnapshot> {
    let roots: Vec<&dyn VisualNode> = nodes.iter().map(|n| n as &dyn VisualNode).collect();
    extract(&roots)
}

fn read_scene(path: &Path) -> Result<Vec<SceneNode>> {
    Ok(read_json::<SceneFile>(path)?.into_nodes())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
