use jobskills::config::{self, FileConfig, Settings};
use jobskills::gateway;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "jobskills", version, about = "Job position skills API")]
struct Cli {
    /// Path to an optional YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address (overrides the config file)
    #[arg(long, env = config::BIND_ENV)]
    bind: Option<SocketAddr>,

    /// Comma-separated list of valid API keys
    #[arg(long, env = config::API_KEYS_ENV, hide_env_values = true)]
    api_keys: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP server (default)
    Serve,
    /// Print freshly generated API keys
    Keygen {
        /// Number of keys to generate
        #[arg(short = 'n', long, default_value_t = 3)]
        count: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    {
        use tracing_subscriber::layer::SubscriberExt;
        use tracing_subscriber::util::SubscriberInitExt;

        let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Serve) | None => { /* fall through to server startup */ }
        Some(Command::Keygen { count }) => {
            for (i, key) in jobskills::keys::generate_api_keys(count)?.iter().enumerate() {
                println!("{}. {key}", i + 1);
            }
            println!();
            println!("Add the keys you want to use to {}:", config::API_KEYS_ENV);
            println!("  {}=key1,key2,key3", config::API_KEYS_ENV);
            return Ok(());
        }
    }

    // --- Server startup ---

    let file = match &cli.config {
        Some(path) => {
            info!(path = %path.display(), "loading configuration");
            FileConfig::load(path).await?
        }
        None => FileConfig::default(),
    };
    let settings = Settings::resolve(cli.api_keys.as_deref(), cli.bind, file)
        .context("invalid configuration")?;

    let state = gateway::AppState::builtin(settings.api_keys);
    info!(
        positions = state.catalog.positions().len(),
        entries = state.catalog.len(),
        api_keys = state.api_keys.len(),
        "catalog loaded"
    );

    let gw = gateway::start_gateway(settings.bind, state, &settings.cors)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind))?;
    info!(addr = %gw.addr, "jobskills ready");

    tokio::signal::ctrl_c().await?;
    info!("received Ctrl-C, shutting down…");
    gw.shutdown().await;
    info!("shutdown complete");

    Ok(())
}
