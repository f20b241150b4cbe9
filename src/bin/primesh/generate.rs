use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use primesh::keyword;
use primesh::operations::compose::ComposeRegions;

#[derive(Args)]
pub struct GenerateArgs {
    /// Path to the job file
    pub job: PathBuf,

    /// Output path (defaults to the job's `output`, then <job>.k)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn execute(args: GenerateArgs) -> Result<()> {
    let (job, regions) = super::load_job(&args.job)?;
    let composition = ComposeRegions::new(&regions).execute()?;

    for diagnostic in &composition.diagnostics {
        eprintln!("warning: {diagnostic}");
    }

    let output = args
        .output
        .or_else(|| job.output.map(|p| relative_to_job(&args.job, &p)))
        .unwrap_or_else(|| args.job.with_extension("k"));

    keyword::save(&composition.document, &output)
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!(
        "Wrote {} ({} regions, {} nodes)",
        output.display(),
        composition.summaries.len(),
        composition.document.node_count()
    );
    Ok(())
}

/// Resolves an output path from the job file against the job's directory.
fn relative_to_job(job: &Path, output: &Path) -> PathBuf {
    match job.parent() {
        Some(dir) if output.is_relative() => dir.join(output),
        _ => output.to_path_buf(),
    }
}
