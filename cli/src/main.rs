//! Vigil command-line shell.
//!
//! This is the thin shell that wires configuration, keyword loading,
//! domain enumeration, fetching and the scanner together. Core logic
//! lives in the `crates/` directory.

mod output;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use vigil_core::{AppConfig, SourceKind};
use vigil_fetch::HttpFetcher;
use vigil_hosting::source_from_config;
use vigil_keywords::KeywordLoader;
use vigil_scanner::{Matcher, Scanner};

/// Flags hosted domains whose name or homepage matches a keyword list.
#[derive(Debug, Parser)]
#[command(name = "vigil", version, about)]
struct Cli {
    /// Path to the configuration file (defaults to the XDG config path)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the keyword file (overrides configuration)
    #[arg(long)]
    keywords: Option<PathBuf>,

    /// Domain enumeration strategy (overrides configuration)
    #[arg(long, value_enum)]
    source: Option<SourceArg>,

    /// Print the full scan report as JSON instead of colored text
    #[arg(long)]
    json: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SourceArg {
    Localdomains,
    Command,
}

impl From<SourceArg> for SourceKind {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Localdomains => SourceKind::Localdomains,
            SourceArg::Command => SourceKind::Command,
        }
    }
}

/// Initialize tracing subscriber for logging
fn init_tracing(quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_filter = if quiet { "warn" } else { "info,vigil=debug" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = AppConfig::load_from(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?;
            config.apply_env();
            config
        }
        None => AppConfig::load_with_env().context("failed to load configuration")?,
    };

    if let Some(keywords) = &cli.keywords {
        config.keywords.file = keywords.clone();
    }
    if let Some(source) = cli.source {
        config.hosting.source = source.into();
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet);

    info!("Starting Vigil v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;

    if !cli.json && !cli.quiet {
        output::print_banner();
    }

    let loader = KeywordLoader::new(&config.keywords.file);
    let source = source_from_config(&config.hosting).context("failed to set up enumeration")?;
    let fetcher = HttpFetcher::new(&config.scanning).context("failed to build HTTP client")?;

    let scanner = Scanner::new(fetcher)
        .with_matcher(Matcher::new(config.scanning.density_threshold))
        .with_max_concurrent(config.scanning.max_concurrent);

    let report = scanner
        .run_from(source.as_ref(), &loader)
        .await
        .context("scan failed")?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("failed to serialize report")?
        );
    } else {
        output::print_report(&report, config.scanning.max_reported_keywords);
    }

    Ok(())
}
