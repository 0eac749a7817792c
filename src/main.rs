mod commands;
mod interactive;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use regret_engine::adapters::{
    FileKeyValueStore, InMemoryKeyValueStore, RegretApiClient, RegretApiConfig,
};
use regret_engine::application::AppContext;
use regret_engine::config::{AppConfig, LogFormat, StorageBackend};
use regret_engine::ports::KeyValueStore;

#[derive(Parser)]
#[command(
    name = "regret-engine",
    about = "Predict which option you are most likely to regret",
    version
)]
struct Cli {
    /// Analysis service base URL (overrides REGRET_ENGINE__API__BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Directory for the stored profile and history
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive session (default)
    Run,

    /// Analyze one decision from flags
    Analyze(AnalyzeArgs),

    /// Show pattern database statistics
    Patterns,

    /// List stored decisions, most recent first
    History {
        /// Maximum number of entries
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,
    },

    /// Show the stored profile
    Profile,

    /// Check the analysis service
    Health,
}

#[derive(Args)]
pub struct AnalyzeArgs {
    #[arg(long)]
    pub age: String,

    /// Your current situation
    #[arg(long)]
    pub situation: String,

    /// The decision you are facing
    #[arg(long)]
    pub decision: String,

    /// An option you are considering (two or three)
    #[arg(long = "option", required = true, num_args = 1)]
    pub options: Vec<String>,

    #[arg(long)]
    pub goals: String,

    /// immediate, "1-3 months", "3-6 months", "6-12 months" or "1+ years"
    #[arg(long, default_value = "1-3 months")]
    pub timeline: String,

    /// career, relationship, education, financial, health or lifestyle
    #[arg(long, default_value = "lifestyle")]
    pub category: String,

    /// Print the raw analysis as JSON
    #[arg(long)]
    pub json: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load()
        .context("Failed to load configuration")?
        .with_overrides(cli.base_url, cli.data_dir);
    config.validate().context("Invalid configuration")?;

    init_tracing(&config)?;
    tracing::debug!(base_url = %config.api.base_url, "Configuration loaded");

    let context = build_context(&config)?;

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => interactive::run(context).await,
        Command::Analyze(args) => commands::analyze(context, args).await,
        Command::Patterns => commands::patterns(context).await,
        Command::History { limit } => commands::history(context, limit).await,
        Command::Profile => commands::profile(context).await,
        Command::Health => commands::health(context, &config.api.base_url).await,
    }
}

/// Logs go to stderr; `RUST_LOG` wins over the configured level.
fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let registry = tracing_subscriber::registry().with(filter);

    match config.logging.log_format()? {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
    Ok(())
}

fn build_context(config: &AppConfig) -> anyhow::Result<AppContext> {
    let client = Arc::new(RegretApiClient::new(
        RegretApiConfig::new(config.api.base_url.clone()).with_timeout(config.api.timeout()),
    )?);

    let store: Arc<dyn KeyValueStore> = match config.storage.backend {
        StorageBackend::File => Arc::new(FileKeyValueStore::new(&config.storage.data_dir)),
        StorageBackend::Memory => Arc::new(InMemoryKeyValueStore::new()),
    };

    Ok(AppContext::new(client.clone(), client, store))
}
