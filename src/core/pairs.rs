use hashbrown::HashMap;
use lazy_static::lazy_static;
use regex::Regex;
use walkdir::WalkDir;

use std::path::{Path, PathBuf};

use crate::consts::FASTQ_NAME_PATTERN;

lazy_static! {
    static ref FASTQ_NAME_REGEX: Regex =
        Regex::new(FASTQ_NAME_PATTERN).expect("ERROR: invalid FASTQ filename pattern");
}

/// Complete pairs keyed by filename prefix
pub type PairMap = HashMap<String, ReadPair>;

/// Which end of a paired-end read a file holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mate {
    First,
    Second,
}

impl Mate {
    /// Parse the mate digit captured from a filename
    ///
    /// # Example
    ///
    /// ```rust, no_run
    /// use fqsheet::core::pairs::Mate;
    ///
    /// assert_eq!(Mate::from_digit("2"), Some(Mate::Second));
    /// assert_eq!(Mate::from_digit("3"), None);
    /// ```
    pub fn from_digit(digit: &str) -> Option<Self> {
        match digit {
            "1" => Some(Mate::First),
            "2" => Some(Mate::Second),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mate::First => "1",
            Mate::Second => "2",
        }
    }
}

/// A filename that matched the mate-marker grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqName {
    pub prefix: String,
    pub mate: Mate,
}

/// Classify a filename against the mate-marker grammar
///
/// The prefix is matched non-greedily, the `R` marker and the extension
/// are case-insensitive. Returns `None` for anything that is not a
/// paired FASTQ name.
///
/// # Example
///
/// ```rust, no_run
/// use fqsheet::core::pairs::{parse_fastq_name, Mate};
///
/// let name = parse_fastq_name("heart_S1_L002_R2_001.fastq.gz").unwrap();
///
/// assert_eq!(name.prefix, "heart_S1_L002");
/// assert_eq!(name.mate, Mate::Second);
/// ```
pub fn parse_fastq_name(filename: &str) -> Option<FastqName> {
    let caps = FASTQ_NAME_REGEX.captures(filename)?;

    let prefix = caps.name("prefix")?.as_str().to_string();
    let mate = Mate::from_digit(caps.name("which")?.as_str())?;

    Some(FastqName { prefix, mate })
}

/// Up to two FASTQ files sharing a prefix
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FastqPair {
    pub r1: Option<PathBuf>,
    pub r2: Option<PathBuf>,
}

impl FastqPair {
    /// Store `path` under `mate`, returning the path it replaced (if any)
    pub fn insert(&mut self, mate: Mate, path: PathBuf) -> Option<PathBuf> {
        match mate {
            Mate::First => self.r1.replace(path),
            Mate::Second => self.r2.replace(path),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.r1.is_some() && self.r2.is_some()
    }

    /// Consume the group, yielding both mates only if both are present
    pub fn complete(self) -> Option<ReadPair> {
        match (self.r1, self.r2) {
            (Some(r1), Some(r2)) => Some(ReadPair { r1, r2 }),
            _ => None,
        }
    }
}

/// A complete mate pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadPair {
    pub r1: PathBuf,
    pub r2: PathBuf,
}

/// Walk `dir` recursively and group every paired FASTQ file by prefix
///
/// Entries are visited in file-name order, so when two files map to the
/// same prefix and mate the one visited last wins, independently of the
/// order the filesystem hands entries back in.
///
/// # Arguments
///
/// * `dir` - Root directory to scan
///
/// # Returns
///
/// Every group found, complete or not
pub fn collect_fastq_groups(dir: &Path) -> HashMap<String, FastqPair> {
    let mut groups: HashMap<String, FastqPair> = HashMap::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("WARN: skipping unreadable entry: {}", e);
                continue;
            }
        };

        let path = entry.path();
        if path.is_dir() {
            continue;
        }

        let Some(filename) = entry.file_name().to_str() else {
            log::debug!("DEBUG: skipping non UTF-8 filename {}", path.display());
            continue;
        };

        let Some(name) = parse_fastq_name(filename) else {
            continue;
        };

        let group = groups.entry(name.prefix).or_default();
        if let Some(previous) = group.insert(name.mate, path.to_path_buf()) {
            log::warn!(
                "WARN: {} replaces {} as mate {}",
                path.display(),
                previous.display(),
                name.mate.as_str()
            );
        }
    }

    groups
}

/// Split groups into complete pairs and the sorted prefixes left without a mate
pub fn split_complete(groups: HashMap<String, FastqPair>) -> (PairMap, Vec<String>) {
    let mut complete = PairMap::new();
    let mut missing = Vec::new();

    for (prefix, group) in groups {
        match group.complete() {
            Some(pair) => {
                complete.insert(prefix, pair);
            }
            None => missing.push(prefix),
        }
    }

    missing.sort_unstable();
    (complete, missing)
}

/// Aggregated warning for incomplete groups, `None` when there are none
pub fn incomplete_warning(missing: &[String]) -> Option<String> {
    if missing.is_empty() {
        return None;
    }

    Some(format!(
        "WARN: found {} prefix(es) without full pairs, skipping: {}",
        missing.len(),
        missing.join(", ")
    ))
}

/// Find complete FASTQ mate pairs under `dir`
///
/// Incomplete groups are dropped and reported once as a warning.
///
/// # Example
///
/// ```rust, no_run
/// use fqsheet::core::pairs::find_fastq_pairs;
/// use std::path::Path;
///
/// let pairs = find_fastq_pairs(Path::new("/data/fastq"));
/// ```
pub fn find_fastq_pairs(dir: &Path) -> PairMap {
    let (complete, missing) = split_complete(collect_fastq_groups(dir));

    if let Some(warning) = incomplete_warning(&missing) {
        log::warn!("{}", warning);
    }

    log::info!(
        "INFO: found {} complete pair(s) in {}",
        complete.len(),
        dir.display()
    );

    complete
}
