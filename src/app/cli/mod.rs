//! CLI Adapter.

use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::app::commands::render::{self, OutputFormat, RenderOptions};
use crate::domain::{AppError, HostFormat};

#[derive(Parser)]
#[command(name = "argogen")]
#[command(version)]
#[command(
    about = "Render Argo CD Application manifests from per-project values",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the Application manifest for a project
    #[clap(visible_alias = "r")]
    Render {
        /// Values file (.yaml, .yml, or .toml) supplying project/baseDomain
        #[arg(short = 'f', long)]
        values: Option<PathBuf>,
        /// Override a values key (repeatable)
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
        /// Ingress host format (per-project, shared)
        #[arg(long, default_value = "per-project")]
        host_format: String,
        /// Output format (yaml, json)
        #[arg(long, default_value = "yaml")]
        format: String,
        /// Write the manifest to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Render { values, set, host_format, format, output } => {
            run_render(values, set, &host_format, &format, output)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run_render(
    values: Option<PathBuf>,
    set: Vec<String>,
    host_format: &str,
    format: &str,
    output: Option<PathBuf>,
) -> Result<(), AppError> {
    let host_format = HostFormat::from_name(host_format)
        .ok_or_else(|| AppError::InvalidHostFormat(host_format.to_string()))?;
    let format = OutputFormat::from_name(format)
        .ok_or_else(|| AppError::InvalidOutputFormat(format.to_string()))?;

    let options = RenderOptions { values_file: values, set, host_format, format };
    let rendered = render::execute(&options)?;

    match output {
        Some(path) => {
            fs::write(&path, &rendered)?;
            println!("✅ Wrote application manifest to {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
