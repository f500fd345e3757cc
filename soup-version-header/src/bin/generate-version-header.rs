//! CLI entry point for generate-version-header.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// generate-version-header — fill in a version header template.
#[derive(Parser, Debug)]
#[command(name = "generate-version-header", version, about)]
struct Cli {
    /// Path to the header template (e.g. `soup-version.h.in`).
    input: PathBuf,

    /// Path of the header to write; replaced atomically.
    output: PathBuf,

    /// Library version as `MAJOR.MINOR.MICRO`.
    #[arg(value_name = "VERSION")]
    library_version: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("soup_version_header=info")),
        )
        .init();

    let cli = Cli::parse();
    soup_version_header::run(&cli.input, &cli.output, &cli.library_version).with_context(|| {
        format!(
            "generating {} from {}",
            cli.output.display(),
            cli.input.display()
        )
    })?;
    Ok(())
}
