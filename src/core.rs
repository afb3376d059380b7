use std::path::{Path, PathBuf};

use crate::cli::Args;
use crate::consts::SAMPLESHEET;

pub mod pairs;
pub mod sheet;

use pairs::find_fastq_pairs;
use sheet::write_samplesheet;

/// Resolve the FASTQ folder to an absolute directory path
///
/// # Example
///
/// ```rust, no_run
/// use fqsheet::core::resolve_fastq_dir;
/// use std::path::Path;
///
/// let dir = resolve_fastq_dir(Path::new("reads")).unwrap();
/// assert!(dir.is_absolute());
/// ```
pub fn resolve_fastq_dir(folder: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let fastq_dir = std::path::absolute(folder)?;

    if !fastq_dir.is_dir() {
        return Err(format!("ERROR: {} is not a directory", fastq_dir.display()).into());
    }

    Ok(fastq_dir)
}

/// Scan the FASTQ folder and write the samplesheet into `out_dir`
///
/// # Returns
///
/// Number of samplesheet entries written
pub fn run_in(args: &Args, out_dir: &Path) -> Result<usize, Box<dyn std::error::Error>> {
    let fastq_dir = resolve_fastq_dir(&args.fastq_folder)?;
    log::info!("INFO: scanning {} for paired FASTQ files...", fastq_dir.display());

    let pairs = find_fastq_pairs(&fastq_dir);
    if pairs.is_empty() {
        return Err("ERROR: No paired FASTQ files found.".into());
    }

    write_samplesheet(&pairs, &args.strandedness, &out_dir.join(SAMPLESHEET))
}

/// Scan the FASTQ folder and write ./samplesheet.csv
pub fn run(args: Args) -> Result<usize, Box<dyn std::error::Error>> {
    run_in(&args, Path::new(""))
}
