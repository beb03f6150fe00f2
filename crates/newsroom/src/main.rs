//! newsroom CLI
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::{Context, anyhow};
use camino::Utf8PathBuf;
use clap::Parser;
use newsroom::{Cli, Commands, commands, observability};
use newsroom_core::config::{Config, ConfigLoader, ConfigSources};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.color.apply();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let Some(command) = cli.command else {
        return Ok(());
    };

    if let Some(dir) = &cli.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("cannot change directory to {}", dir.display()))?;
    }

    let (config, sources) = load_config(cli.config.as_ref())?;

    let log_dir = config.log_dir.clone().map(Utf8PathBuf::into_std_path_buf);
    let _log_guard = observability::init_observability(
        &observability::ObservabilityConfig::from_env_with_overrides(log_dir),
        observability::env_filter(cli.quiet, cli.verbose, config.log_level.as_str()),
    )
    .context("failed to initialize logging")?;
    tracing::debug!(
        command = command_name(&command),
        config_file = ?sources.primary_file(),
        json = cli.json,
        "starting"
    );

    let result = run(command, cli.json, config, &sources);
    if let Err(err) = &result {
        tracing::error!(error = %err, "command failed");
    }
    result
}

fn run(
    command: Commands,
    json: bool,
    config: Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    let gate = config.gate();
    let max_input = config.input_limit();
    match command {
        Commands::Analyze(args) => {
            commands::analyze::cmd_analyze(args, json, gate.min_content_score, max_input)
        }
        Commands::Gate(args) => commands::gate::cmd_gate(args, json, gate, max_input),
        Commands::Preview(args) => commands::preview::cmd_preview(args, json, max_input),
        Commands::Info(args) => commands::info::cmd_info(args, json, &config, sources),
        #[cfg(feature = "mcp")]
        Commands::Serve(args) => tokio::runtime::Runtime::new()
            .context("failed to start the async runtime")?
            .block_on(commands::serve::cmd_serve(args, max_input, config)),
    }
}

/// Discover config from the working directory, then apply `--config`.
fn load_config(explicit: Option<&PathBuf>) -> anyhow::Result<(Config, ConfigSources)> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let mut loader = ConfigLoader::new().with_project_search(utf8(cwd)?);
    if let Some(path) = explicit {
        loader = loader.with_file(utf8(path.clone())?);
    }
    loader.load().context("failed to load configuration")
}

fn utf8(path: PathBuf) -> anyhow::Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path)
        .map_err(|p| anyhow!("path is not valid UTF-8: {}", p.display()))
}

const fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Analyze(_) => "analyze",
        Commands::Gate(_) => "gate",
        Commands::Preview(_) => "preview",
        Commands::Info(_) => "info",
        #[cfg(feature = "mcp")]
        Commands::Serve(_) => "serve",
    }
}
