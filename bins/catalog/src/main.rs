//! catalog: search, autocomplete and fuzzy matching over a product catalog.

use anyhow::Result;
use catalog_cli::output::Status;
use catalog_core::config::{Config, LoggingSettings};
use catalog_core::error::exit_codes;
use catalog_telemetry::TelemetryConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;

#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Search, autocomplete and fuzzy matching over a product catalog")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Search a local JSON catalog instead of the remote service
    #[arg(long, global = true, value_name = "FILE.json")]
    catalog: Option<PathBuf>,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    /// Print collected metrics to stderr on exit
    #[arg(long, global = true)]
    metrics: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog
    Search {
        /// Free-text query
        query: String,

        /// 1-based page number
        #[arg(short, long)]
        page: Option<usize>,

        /// Results per page
        #[arg(short, long)]
        limit: Option<usize>,

        /// Show how each result was scored
        #[arg(long)]
        explain: bool,
    },

    /// Suggest titles for a partially typed query
    Suggest {
        /// Partial query
        partial: String,

        /// Maximum suggestions
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Check whether a query approximately occurs in a text
    Match {
        query: String,
        text: String,

        /// Maximum edit distance per token
        #[arg(short, long)]
        threshold: Option<usize>,
    },

    /// Case-insensitive edit distance between two strings
    Distance { a: String, b: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        owo_colors::set_override(false);
    }

    let json = cli.json;
    let code = match run(cli).await {
        Ok(code) => code,
        Err(e) => report(&e, json),
    };

    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

async fn run(cli: Cli) -> Result<i32> {
    let config = Config::load(cli.config.as_deref())?;
    let _telemetry = catalog_telemetry::init_with_config(&telemetry_config(
        &config.schema.logging,
        cli.verbose,
    ))?;

    if let Some(path) = &config.path {
        tracing::debug!(path = %path.display(), "Loaded configuration");
    }

    let ctx = commands::Context {
        json: cli.json,
        schema: &config.schema,
    };

    let code = match cli.command {
        Commands::Distance { a, b } => commands::distance(&ctx, &a, &b)?,
        Commands::Match { query, text, threshold } => {
            let threshold = threshold.unwrap_or(config.schema.search.fuzzy_threshold);
            commands::fuzzy_match(&ctx, &query, &text, threshold)?
        }
        Commands::Search { query, page, limit, explain } => {
            let request = commands::SearchRequest {
                query,
                page: page.unwrap_or(1),
                limit: limit.unwrap_or(config.schema.search.default_page_size),
                explain,
            };
            commands::with_store(cli.catalog.as_deref(), &ctx, commands::Action::Search(request))
                .await?
        }
        Commands::Suggest { partial, limit } => {
            let limit = limit.unwrap_or(config.schema.suggest.default_limit);
            commands::with_store(
                cli.catalog.as_deref(),
                &ctx,
                commands::Action::Suggest { partial, limit },
            )
            .await?
        }
    };

    if cli.metrics {
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&catalog_telemetry::metrics().export_json())?
        );
    }

    Ok(code)
}

fn telemetry_config(logging: &LoggingSettings, verbose: u8) -> TelemetryConfig {
    let log_level = match verbose {
        0 => logging.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };

    TelemetryConfig {
        log_level,
        json: logging.json,
        log_dir: logging.log_dir.clone(),
        ..TelemetryConfig::default()
    }
}

/// Print an error and pick the exit code for it
///
/// Structured errors are written as a JSON report when `json` is set.
fn report(err: &anyhow::Error, json: bool) -> i32 {
    let structured = err.downcast_ref::<catalog_core::Error>().or_else(|| {
        match err.downcast_ref::<catalog_search::SearchError>() {
            Some(catalog_search::SearchError::Config(e)) => Some(e),
            _ => None,
        }
    });

    if let Some(e) = structured {
        match serde_json::to_string(&e.to_report()) {
            Ok(report) if json => eprintln!("{report}"),
            _ => Status::error(&e.to_string()),
        }
        return exit_codes::for_code(e.code);
    }

    if let Some(catalog_api_client::ApiError::Config(msg)) = err.downcast_ref() {
        Status::error(&format!("Invalid store configuration: {msg}"));
        return exit_codes::CONFIG_ERROR;
    }

    Status::error(&format!("{err:#}"));
    exit_codes::FAILURE
}
