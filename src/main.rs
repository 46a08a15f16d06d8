use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{Value, json};
use tracing::info;
use tracing_subscriber::EnvFilter;

use thought_loops::config::{Config, DEFAULT_LOG_FILTER};
use thought_loops::service::{LoopRequest, ThoughtLoopService, parse_entries};
use thought_loops::suggest::{AiMode, SeededRandom};

#[derive(Parser)]
#[command(name = "thought-loops")]
#[command(about = "Detect recurring negative topics in journal entries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP service (default)
    Serve {
        /// Override server.bind
        #[arg(long)]
        bind: Option<SocketAddr>,
    },
    /// Run loop detection over a JSON file of entries and print the response
    Analyze {
        file: PathBuf,
        /// auto, reframing, emotional_exploration or action_oriented
        #[arg(long)]
        mode: Option<String>,
        /// Try the remote generative service first
        #[arg(long)]
        cloud: bool,
        /// Seed for template selection
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print per-entry embedding and sentiment records
    Constellation { file: PathBuf },
    /// Print the effective configuration
    Info,
}

/// Accepts either a bare array of entries or a full request object
fn read_request_body(path: &Path) -> Result<Value> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    Ok(match value {
        Value::Array(entries) => json!({ "entries": entries }),
        other => other,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG may come from the env file, and config loading logs
    Config::load_env_file();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;

    match cli.command.unwrap_or(Commands::Serve { bind: None }) {
        Commands::Serve { bind } => {
            if let Some(bind) = bind {
                config.server.bind = bind;
            }
            let service = Arc::new(ThoughtLoopService::from_config(Arc::new(config))?);
            info!("Starting thought-loops v{}", env!("CARGO_PKG_VERSION"));
            thought_loops::http::start_http_server(service).await
        }
        Commands::Analyze {
            file,
            mode,
            cloud,
            seed,
        } => {
            let mut request = LoopRequest::from_value(&read_request_body(&file)?)?;
            if let Some(mode) = mode {
                request.mode = AiMode::parse(&mode);
            }
            request.use_cloud |= cloud;
            let mut rng = SeededRandom::new(seed.or(config.runtime.rng_seed));
            let service = ThoughtLoopService::from_config(Arc::new(config))?;
            let response = service.detect_loop_with(&request, &mut rng).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Commands::Constellation { file } => {
            let entries = parse_entries(&read_request_body(&file)?)?;
            let service = ThoughtLoopService::from_config(Arc::new(config))?;
            let records = service.constellation(&entries).await?;
            println!("{}", serde_json::to_string_pretty(&records)?);
            Ok(())
        }
        Commands::Info => {
            let service = ThoughtLoopService::from_config(Arc::new(config))?;
            println!("{}", serde_json::to_string_pretty(&service.info())?);
            Ok(())
        }
    }
}
