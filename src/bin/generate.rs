//! Schema Module Generator CLI
//!
//! Reads extracted OpenAPI definitions and writes one validator-registration
//! module per definition.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;
use kubeschema_gen::{generate, Definition, GeneratorConfig};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "kubeschema-gen")]
#[command(about = "Generate validator-registration modules from schema definitions")]
struct Cli {
    /// Definition JSON file, or a directory of definition JSON files
    #[arg(short, long)]
    definitions: PathBuf,

    /// Directory to write generated modules into
    #[arg(short, long, default_value = "gen")]
    out_dir: PathBuf,

    /// Optional TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Import io.k8s.apimachinery.* schemas from @kubernetes-models/apimachinery
    #[arg(long)]
    external_apimachinery: bool,

    /// Import io.k8s.* schemas from kubernetes-models
    #[arg(long)]
    external_kubernetes_models: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = match &cli.config {
        Some(path) => GeneratorConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => GeneratorConfig::default(),
    };
    if cli.external_apimachinery {
        config.external_api_machinery = true;
    }
    if cli.external_kubernetes_models {
        config.external_kubernetes_models = true;
    }

    let definitions = load_definitions(&cli.definitions)?;
    tracing::info!(count = definitions.len(), "loaded definitions");

    let files = generate(&config, &definitions)?;

    for file in &files {
        let target = cli.out_dir.join(&file.path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, &file.content)
            .with_context(|| format!("failed to write {}", target.display()))?;
    }

    println!("Generated {} modules in {}", files.len(), cli.out_dir.display());
    Ok(())
}

/// Load definitions from a single JSON file or every `.json` file under a
/// directory, in sorted path order for reproducible runs.
fn load_definitions(path: &Path) -> anyhow::Result<Vec<Definition>> {
    if !path.is_dir() {
        return parse_definitions(path);
    }

    let mut definitions = Vec::new();
    for entry in WalkDir::new(path)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.path().is_file() {
            continue;
        }
        if entry.path().extension().map(|e| e != "json").unwrap_or(true) {
            continue;
        }
        definitions.extend(parse_definitions(entry.path())?);
    }
    Ok(definitions)
}

/// A definition file holds either one definition object or an array of them.
fn parse_definitions(path: &Path) -> anyhow::Result<Vec<Definition>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    match value {
        serde_json::Value::Array(_) => Ok(serde_json::from_value(value)?),
        serde_json::Value::Object(_) => Ok(vec![serde_json::from_value(value)?]),
        _ => anyhow::bail!("{}: expected a definition object or array", path.display()),
    }
}
