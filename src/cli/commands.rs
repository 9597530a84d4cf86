use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::converter::{ClaudeAdapter, Converter, OpenCodeAdapter, RunSummary, SessionAdapter};
use crate::utils::{encode_project_dir, format_path_with_tilde, get_claude_dir, get_opencode_storage_dir};

#[derive(Parser)]
#[command(name = "session-transcripts")]
#[command(version = "0.1.0")]
#[command(about = "Convert AI assistant session logs into plain-text transcripts", long_about = None)]
pub struct Cli {
    /// Log debug details (malformed records, skipped sub-sessions)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert Claude Code session JSONL files
    Claude(SourceArgs),
    /// Convert an OpenCode storage directory
    Opencode(SourceArgs),
}

#[derive(Args)]
pub struct SourceArgs {
    /// Derive the source location instead of taking it as an argument
    #[arg(long)]
    pub auto: bool,

    /// Source path, or the output directory when --auto is given
    pub input: Option<PathBuf>,

    /// Output directory for transcript files
    pub output: Option<PathBuf>,
}

impl SourceArgs {
    /// Split positionals into (source, output); `None` source means auto-discovery
    fn resolve(&self) -> Result<(Option<&Path>, &Path)> {
        match (self.auto, self.input.as_deref(), self.output.as_deref()) {
            (true, Some(output), None) => Ok((None, output)),
            (true, _, _) => bail!("--auto mode requires exactly one argument: the output directory"),
            (false, Some(input), Some(output)) => Ok((Some(input), output)),
            (false, _, _) => bail!("input and output arguments required (or use --auto <output-dir>)"),
        }
    }
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let summary = match &cli.command {
        Commands::Claude(args) => {
            let (input, output) = args.resolve()?;
            let source = match input {
                Some(path) => path.to_path_buf(),
                None => discover_claude_project()?,
            };
            convert(ClaudeAdapter, &source, output)?
        }
        Commands::Opencode(args) => {
            let (input, output) = args.resolve()?;
            let source = match input {
                Some(path) => path.to_path_buf(),
                None => discover_opencode_storage()?,
            };
            convert(OpenCodeAdapter, &source, output)?
        }
    };

    Ok(if summary.converted > 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn convert<A: SessionAdapter>(adapter: A, source: &Path, output: &Path) -> Result<RunSummary> {
    let mut converter = Converter::new(adapter, output)?;
    let summary = converter.convert_all(source)?;

    // A single file reports through its own success line
    if !source.is_file() {
        println!("\nConverted {} session(s)", summary.converted);
    }
    tracing::debug!(
        "Run finished: {} converted, {} skipped, {} failed",
        summary.converted,
        summary.skipped,
        summary.failed
    );

    Ok(summary)
}

/// The Claude project directory for the current working directory
fn discover_claude_project() -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let project_dir = get_claude_dir()?.join("projects").join(encode_project_dir(&cwd));

    if !project_dir.is_dir() {
        bail!("Claude project directory not found: {}", project_dir.display());
    }
    println!("Auto-discovered: {}", format_path_with_tilde(&project_dir));
    Ok(project_dir)
}

fn discover_opencode_storage() -> Result<PathBuf> {
    let storage = get_opencode_storage_dir()?;
    if !storage.is_dir() {
        bail!("OpenCode storage directory not found: {}", storage.display());
    }
    println!("Auto-discovered: {}", format_path_with_tilde(&storage));
    Ok(storage)
}

/// Initializes the tracing subscriber; `RUST_LOG` takes precedence over `--verbose`
fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("session_transcripts={level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
