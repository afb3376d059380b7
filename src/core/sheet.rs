use csv::{Terminator, WriterBuilder};
use serde::Serialize;

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::consts::{SAMPLESHEET_HEADER, SAMPLE_DELIMITER};
use crate::core::pairs::PairMap;

/// One line of the samplesheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleSheetRow {
    pub sample: String,
    pub fastq_1: String,
    pub fastq_2: String,
    pub strandedness: String,
}

/// Sample identifier for a prefix: everything before the first underscore
///
/// # Example
///
/// ```rust, no_run
/// use fqsheet::core::sheet::sample_id;
///
/// assert_eq!(sample_id("sampleA_rep1"), "sampleA");
/// assert_eq!(sample_id("sampleB"), "sampleB");
/// ```
pub fn sample_id(prefix: &str) -> &str {
    prefix
        .split_once(SAMPLE_DELIMITER)
        .map_or(prefix, |(sample, _)| sample)
}

/// Build samplesheet rows ordered by prefix
pub fn samplesheet_rows(pairs: &PairMap, strandedness: &str) -> Vec<SampleSheetRow> {
    let mut prefixes = pairs.keys().collect::<Vec<_>>();
    prefixes.sort_unstable();

    prefixes
        .into_iter()
        .map(|prefix| {
            let pair = &pairs[prefix];
            SampleSheetRow {
                sample: sample_id(prefix).to_string(),
                fastq_1: pair.r1.display().to_string(),
                fastq_2: pair.r2.display().to_string(),
                strandedness: strandedness.to_string(),
            }
        })
        .collect()
}

/// Write the samplesheet CSV to any writer
///
/// Lines end in CRLF and fields are quoted only when needed, so the output
/// reads back the same with any standard CSV reader.
///
/// # Returns
///
/// Number of rows written, header excluded
pub fn write_samplesheet_to<W: Write>(
    writer: W,
    pairs: &PairMap,
    strandedness: &str,
) -> Result<usize, Box<dyn std::error::Error>> {
    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    wtr.write_record(SAMPLESHEET_HEADER)?;

    let rows = samplesheet_rows(pairs, strandedness);
    for row in &rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(rows.len())
}

/// Write the samplesheet to `out_file`, overwriting it
///
/// # Arguments
///
/// * `pairs` - Complete pairs keyed by prefix
/// * `strandedness` - Label copied verbatim into every row
/// * `out_file` - Destination path
///
/// # Example
///
/// ```rust, no_run
/// use fqsheet::core::{pairs::find_fastq_pairs, sheet::write_samplesheet};
/// use std::path::Path;
///
/// let pairs = find_fastq_pairs(Path::new("/data/fastq"));
/// write_samplesheet(&pairs, "auto", Path::new("samplesheet.csv")).unwrap();
/// ```
pub fn write_samplesheet(
    pairs: &PairMap,
    strandedness: &str,
    out_file: &Path,
) -> Result<usize, Box<dyn std::error::Error>> {
    let file = File::create(out_file)?;
    let entries = write_samplesheet_to(file, pairs, strandedness)?;

    println!("Wrote {} with {} entries.", out_file.display(), entries);

    Ok(entries)
}
