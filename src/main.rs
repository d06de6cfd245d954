use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand, ValueEnum};
use godclass::adapters::complexity::{RecordedComplexity, UniformComplexity};
use godclass::app::config::RuleSetConfig;
use godclass::app::engine::GodClassEngine;
use godclass::cli;
use godclass::domain::ports::ComplexityOracle;
use godclass::server::{http, mcp::GcMcpServer};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "gctool",
    version,
    about = "Detect God Classes (WMC, TCC, ATFD) in a resolved class model"
)]
struct Cli {
    /// Class model JSON file produced by the resolver
    model: PathBuf,

    /// Rule configuration file ({ "GodClass": { "WMC": .., "ATFD": .. } })
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Weighted Method Count threshold (overrides the config file)
    #[arg(long, global = true)]
    wmc: Option<u32>,

    /// Access To Foreign Data threshold (overrides the config file)
    #[arg(long, global = true)]
    atfd: Option<u32>,

    /// Where per-method complexity comes from
    #[arg(long, value_enum, default_value_t = ComplexityKind::Recorded, global = true)]
    complexity: ComplexityKind,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum ComplexityKind {
    /// Scores recorded in the model (1 when missing)
    Recorded,
    /// Every method scores 1
    Uniform,
}

#[derive(Subcommand)]
enum Commands {
    /// Metrics and verdict for one class
    Evaluate {
        /// Qualified class name
        class: String,
    },
    /// Evaluate every class in the model
    Scan {
        /// Only classes whose qualified name matches this regex
        #[arg(long)]
        pattern: Option<String>,
        /// List clean classes too
        #[arg(long)]
        all: bool,
    },
    /// Dump the parsed model with per-method accesses as JSON
    Dump,
    /// Serve the engine over HTTP
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        #[arg(long, default_value_t = 8787)]
        port: u16,
    },
    /// Serve the engine as an MCP server over stdio
    Mcp,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let filter = match args.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    // stdout carries reports and MCP frames
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let rules = match &args.config {
        Some(path) => RuleSetConfig::load(path)?,
        None => RuleSetConfig::default(),
    };
    let config = rules.god_class.with_overrides(args.wmc, args.atfd);

    let oracle: Arc<dyn ComplexityOracle> = match args.complexity {
        ComplexityKind::Recorded => Arc::new(RecordedComplexity::new()),
        ComplexityKind::Uniform => Arc::new(UniformComplexity::default()),
    };

    let engine = GodClassEngine::load_from_json(&args.model, config, oracle)
        .with_context(|| format!("Failed to load class model {}", args.model.display()))?;

    match args.command {
        Commands::Evaluate { class } => cli::evaluate_class(&engine, &class, args.json)?,
        Commands::Scan { pattern, all } => {
            cli::scan_classes(&engine, pattern.as_deref(), all, args.json)?
        }
        Commands::Dump => cli::dump_model(&engine)?,
        Commands::Serve { host, port } => {
            let addr: SocketAddr = format!("{host}:{port}")
                .parse()
                .with_context(|| format!("Invalid listen address {host}:{port}"))?;
            info!(%addr, "serving HTTP");
            http::serve(engine, addr).await?;
        }
        Commands::Mcp => GcMcpServer::new(engine).serve_stdio().await?,
    }

    Ok(())
}
