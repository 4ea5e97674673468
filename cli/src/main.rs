//! Patient Feedback CLI
//!
//! Terminal front end for the feedback survey.
//!
//! # Usage
//!
//! ```bash
//! feedback survey
//! feedback --language hi survey
//! feedback submit --file draft.yaml --format json
//! feedback config set api_url http://ward-kiosk:8080
//! ```

use clap::{Parser, Subcommand};
use feedback_client::ClientConfig;
use feedback_core::Language;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod output;

#[derive(Parser)]
#[command(name = "feedback")]
#[command(version)]
#[command(about = "Patient feedback survey", long_about = None)]
struct Cli {
    /// Feedback API base URL
    #[arg(long, env = "FEEDBACK_API_URL")]
    api_url: Option<String>,

    /// Survey language (en, hi, as); skips the language step
    #[arg(long, short)]
    language: Option<Language>,

    /// Output format
    #[arg(long, short, default_value = "table")]
    format: output::OutputFormat,

    /// Profile name from config file
    #[arg(long, short)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in the survey interactively
    Survey,
    /// Submit a prepared draft
    Submit {
        /// JSON or YAML draft
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Configure CLI
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Set configuration value
    Set { key: String, value: String },
    /// Get configuration value
    Get { key: String },
    /// List all configuration
    List,
    /// Initialize configuration
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let profile = cli.profile.as_deref();

    let config = config::Config::load(profile).unwrap_or_else(|e| {
        tracing::warn!("Ignoring unreadable config: {}", e);
        config::Config::default()
    });
    let client_config = client_config(cli.api_url, &config);
    let language = cli.language.or(config.language);

    let result = match cli.command {
        Commands::Survey => commands::survey::handle(&client_config, language).await,
        Commands::Submit { file } => commands::submit::handle(&file, &client_config, cli.format).await,
        Commands::Config { action } => commands::config::handle(action, profile),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Flags win over the config file, which wins over built-in defaults.
fn client_config(api_url: Option<String>, config: &config::Config) -> ClientConfig {
    let defaults = ClientConfig::default();
    ClientConfig {
        api_url: api_url
            .or_else(|| config.api_url.clone())
            .unwrap_or(defaults.api_url),
        request_timeout_secs: config.timeout_secs.unwrap_or(defaults.request_timeout_secs),
        ..defaults
    }
}
