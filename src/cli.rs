use clap::Parser;
use std::path::PathBuf;

use crate::consts::DEFAULT_STRANDEDNESS;

/// Generate a samplesheet.csv from a directory of paired-end FASTQ files
///
/// # Example
///
/// ```bash,no_run
/// fqsheet -f /data/run_42/fastq -s reverse
/// ```
///
/// # Arguments
///
/// * `fastq_folder` - Folder containing FASTQ files (scanned recursively)
/// * `strandedness` - Value for the strandedness column
///
/// # Note
///
/// * The samplesheet is always written to ./samplesheet.csv
/// * Strandedness is not validated, it is copied verbatim into every row
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(
        short = 'f',
        long = "fastq-folder",
        help = "Path to folder containing FASTQ files (will scan recursively)",
        value_name = "DIR",
        required = true
    )]
    pub fastq_folder: PathBuf,

    #[arg(
        short = 's',
        long = "strandedness",
        help = "Value to put in the strandedness column",
        value_name = "STRANDEDNESS",
        default_value = DEFAULT_STRANDEDNESS
    )]
    pub strandedness: String,
}
