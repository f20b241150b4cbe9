//! primesh - structured FEM and SPH discretization of boxes and spheres
//!
//! # Commands
//!
//! - `primesh generate <job.toml>` - Generate every region and write the keyword file
//! - `primesh check <job.toml>` - Validate and generate without writing, then report
//!
//! # Usage
//!
//! ```bash
//! # Write to the job's `output`, or next to the job as <stem>.k
//! primesh generate geo.toml
//!
//! # Write somewhere else
//! primesh generate geo.toml -o /tmp/geo.k
//!
//! # Counts, masses, element quality and ID overlaps
//! primesh -v check geo.toml
//! ```

mod check;
mod generate;

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use primesh::config::{JobConfig, ResolvedRegion};
use tracing_subscriber::EnvFilter;

/// primesh - structured FEM and SPH discretization of boxes and spheres
#[derive(Parser)]
#[command(name = "primesh")]
#[command(about = "Generate hexahedral meshes and SPH particles for keyword solvers")]
#[command(version)]
struct Cli {
    /// Log generation details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate every enabled region and write the keyword file
    Generate(generate::GenerateArgs),

    /// Validate and generate without writing, then print a report
    Check(check::CheckArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Generate(args) => generate::execute(args),
        Commands::Check(args) => check::execute(args),
    }
}

/// Loads and validates a job file.
fn load_job(path: &Path) -> Result<(JobConfig, Vec<ResolvedRegion>)> {
    let job = JobConfig::load(path).with_context(|| format!("failed to load {}", path.display()))?;
    let regions = job
        .resolve()
        .with_context(|| format!("invalid job {}", path.display()))?;
    Ok((job, regions))
}
