mod materials;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use sored_dimensions::numeric::format_number;
use sored_dimensions::{format_size_with, parse_dimension_value, sink_for};

#[derive(Debug, Parser)]
#[command(name = "sored-cli")]
#[command(about = "SORED materials and component size tooling")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Normalize component sizes across the materials collection.
    Normalize {
        /// Materials file; defaults to `SORED_MATERIALS_PATH`.
        #[arg(long)]
        path: Option<PathBuf>,
        /// Write the collection back when normalization changed it.
        #[arg(long)]
        write: bool,
    },
    /// Print the size string of every component, as the quote table shows it.
    Sizes {
        /// Materials file; defaults to `SORED_MATERIALS_PATH`.
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Parse a dimension token such as `3/8` or `1 1/2`.
    ParseDimension { input: String },
    /// Format a single component given as JSON, as the PDF export prints it.
    FormatSize { component: String },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = sored_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let sink = sink_for(&config);
    tracing::debug!(env = %config.env, size_diagnostics = sink.is_enabled(), "starting");
    let cli = Cli::parse();
    match cli.command {
        Commands::Normalize { path, write } => {
            let path = path.unwrap_or_else(|| config.materials_path.clone());
            let outcome =
                materials::normalize_file(&path, write || config.write_back, sink.as_ref())?;
            println!("{}", outcome.summary(&path));
        }
        Commands::Sizes { path } => {
            let path = path.unwrap_or_else(|| config.materials_path.clone());
            let collection = sored_core::load_materials(&path)?;
            for line in materials::size_report(&collection, sink.as_ref()) {
                println!("{line}");
            }
        }
        Commands::ParseDimension { input } => {
            let parsed = parse_dimension_value(&input);
            println!("{}", parsed.map_or_else(|| "invalid".to_string(), format_number));
        }
        Commands::FormatSize { component } => {
            let component: Value =
                serde_json::from_str(&component).context("component must be valid JSON")?;
            println!("{}", format_size_with(&component, sink.as_ref()));
        }
    }

    Ok(())
}
