//! Pulseboard CLI
//!
//! Terminal front-end for the dashboard data layer:
//! - Fetch and render a user's profile
//! - Probe whether a user exists
//! - Generate a default config file

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pulseboard::config::{generate_default_config, Config};
use pulseboard::loader::{LoadState, ProfileLoader};
use pulseboard::service::{Backend, FixtureBackend, HttpBackend, UserService};
use pulseboard::charts;

#[derive(Parser)]
#[command(name = "pulseboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Fitness dashboard for your terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a config file (default: standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Use the bundled fixture dataset instead of the network
    #[arg(long, global = true)]
    pub fixtures: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a user's profile and render its charts
    Profile {
        /// User id
        id: u32,
    },

    /// Check whether a user exists
    Exists {
        /// User id
        id: u32,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    init_logging(&config);

    match cli.command {
        Commands::Profile { id } => {
            let service = build_service(&cli, &config)?;
            let loader = ProfileLoader::new(service);

            match loader.load(id).await {
                LoadState::Loaded { user, .. } => {
                    println!("{} ({})", user.full_name(), user.age());
                    println!();
                    print!("{}", charts::key_data_cards(user.key_data()));
                    println!();
                    print!("{}", charts::activity_chart(&user.activity_chart_data()));
                    println!();
                    print!(
                        "{}",
                        charts::sessions_chart(&user.average_sessions_chart_data())
                    );
                    println!();
                    print!(
                        "{}",
                        charts::performance_chart(user.performance_chart_data())
                    );
                    println!();
                    print!("{}", charts::score_chart(&user.score_chart_data()));
                }
                LoadState::Errored { error, .. } => {
                    eprintln!("Could not load profile {id}: {error}");
                    std::process::exit(1);
                }
                state => {
                    // load() always settles; anything else is a bug
                    anyhow::bail!("unexpected load state: {state:?}");
                }
            }
        }

        Commands::Exists { id } => {
            let service = build_service(&cli, &config)?;
            if service.user_exists(id).await {
                println!("User {id} exists");
            } else {
                println!("User {id} not found");
                std::process::exit(1);
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{content}"),
            }
        }
    }

    Ok(())
}

/// Build the service over the backend selected by flag and config
fn build_service(cli: &Cli, config: &Config) -> anyhow::Result<UserService> {
    let backend: Arc<dyn Backend> = if cli.fixtures || config.api.use_fixtures {
        tracing::info!("Using bundled fixture dataset");
        Arc::new(FixtureBackend::bundled()?)
    } else {
        tracing::info!(base_url = %config.api.base_url, "Using HTTP backend");
        Arc::new(HttpBackend::new(config.api.clone()))
    };

    Ok(UserService::new(backend))
}

/// Initialize logging from the config, RUST_LOG taking precedence
fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| format!("pulseboard={}", config.logging.level)),
    );

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
