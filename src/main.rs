//! Heritage - read-only JSON API for museum exhibits and artefacts

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use heritage::api::{self, AppState};
use heritage::config::Config;
use heritage::store::Catalog;

#[derive(Parser)]
#[command(name = "heritage")]
#[command(about = "Read-only JSON API for museum exhibits and artefacts")]
#[command(version)]
struct Cli {
    /// Path to config file (defaults to ./heritage.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory searched for the datasets before the fallback locations
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind to
        #[arg(long)]
        bind: Option<String>,
    },

    /// Locate and decode both datasets, then report what they contain
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load environment before logging so RUST_LOG can come from .env
    let _ = dotenvy::dotenv();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("heritage={},tower_http=debug", log_level).into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load config
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }

    match cli.command.unwrap_or(Commands::Serve { port: None, bind: None }) {
        Commands::Serve { port, bind } => {
            if let Some(port) = port {
                config.http_port = port;
            }
            if let Some(bind) = bind {
                config.bind_address = bind;
            }

            let addr = config.socket_addr()?;
            let state = AppState::new(Catalog::new(&config));
            let router = api::create_router(state);

            let listener = tokio::net::TcpListener::bind(addr).await?;
            tracing::info!("Starting server on {}", listener.local_addr()?);

            axum::serve(listener, router).await?;
        }

        Commands::Check => {
            let catalog = Catalog::new(&config);

            let exhibits = catalog.load_exhibits().await?;
            println!("{}: {} exhibits", catalog.exhibits_file(), exhibits.len());

            let envelope = catalog.load_envelope().await?;
            println!(
                "{}: {} artefacts (count {}, next {})",
                catalog.artefacts_file(),
                envelope.results.len(),
                envelope.count,
                envelope.next.as_deref().unwrap_or("-")
            );
        }
    }

    Ok(())
}
