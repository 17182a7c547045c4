//! `continuity`: think once, persist the thought, re-render the page.

use anyhow::Context;
use clap::Parser;
use continuity_rs::config::{ContinuityConfig, Credentials, LayeredConfigOptions};
use continuity_rs::core::orchestrator::render_existing;
use continuity_rs::core::{Orchestrator, PageRenderer};
use continuity_rs::init_logging;
use continuity_rs::memory::FileThoughtStore;
use log::{debug, info};
use std::path::PathBuf;
use std::process::ExitCode;

/// Command-line options for a single run.
#[derive(Parser)]
#[command(name = "continuity", version, about = "Generate one thought and update the stream page")]
struct Cli {
    /// Optional path to a continuity.json5 config file, applied over discovered layers
    #[arg(long)]
    config: Option<PathBuf>,
    /// Directory holding thought records
    #[arg(long)]
    thoughts_dir: Option<PathBuf>,
    /// Path of the rendered HTML page
    #[arg(long)]
    page: Option<PathBuf>,
    /// Re-render the page from stored thoughts without generating a new one
    #[arg(long)]
    render_only: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    debug!(
        "effective config (store={}, page={}, render_only={})",
        config.store.path.display(),
        config.page.path.display(),
        cli.render_only
    );

    if cli.render_only {
        let store = FileThoughtStore::new(&config.store.path);
        let renderer = PageRenderer::new(config.page.window);
        let count = render_existing(&store, &renderer, &config.page.path).await?;
        println!(
            "Rendered {count} thoughts to {}.",
            config.page.path.display()
        );
        return Ok(());
    }

    let orchestrator = Orchestrator::from_config(&config, &Credentials::from_env())?;
    let report = orchestrator.run().await?;
    info!(
        "run complete (number={}, total={}, provider={})",
        report.thought.sequence_number, report.total, report.provider
    );
    println!("Thought generated via {}.", report.provider);
    println!(
        "Thought #{} saved ({} total).",
        report.thought.sequence_number, report.total
    );
    println!("\n{}", report.thought.content);
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<ContinuityConfig> {
    let cwd = std::env::current_dir().context("failed to resolve current working directory")?;
    let mut options = LayeredConfigOptions::new(&cwd);
    if let Some(path) = cli.config.as_ref() {
        options = options.with_runtime_path(path);
    }
    let mut config = ContinuityConfig::load_layered_with_options(options)
        .context("failed to load config")?
        .config;
    if let Some(dir) = cli.thoughts_dir.clone() {
        config.store.path = dir;
    }
    if let Some(page) = cli.page.clone() {
        config.page.path = page;
    }
    Ok(config)
}
