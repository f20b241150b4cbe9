use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use primesh::operations::compose::ComposeRegions;

#[derive(Args)]
pub struct CheckArgs {
    /// Path to the job file
    pub job: PathBuf,
}

pub fn execute(args: CheckArgs) -> Result<()> {
    let (_, regions) = super::load_job(&args.job)?;
    let composition = ComposeRegions::new(&regions).execute()?;

    println!("{}", args.job.display());
    for summary in &composition.summaries {
        println!("  {summary}");
        if summary.min_hex_volume.is_some_and(|v| v <= 0.0) {
            println!("    contains inverted elements");
        }
    }
    if composition.summaries.is_empty() {
        println!("  no enabled regions");
    }

    for diagnostic in &composition.diagnostics {
        println!("  warning: {diagnostic}");
    }
    Ok(())
}
