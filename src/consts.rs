// output
pub const SAMPLESHEET: &str = "samplesheet.csv";
pub const SAMPLESHEET_HEADER: [&str; 4] = ["sample", "fastq_1", "fastq_2", "strandedness"];

// defaults
pub const DEFAULT_STRANDEDNESS: &str = "auto";

// filename grammar
pub const SAMPLE_DELIMITER: char = '_';
pub const FASTQ_NAME_PATTERN: &str = r"(?i)^(?P<prefix>.+?)_(?P<read>R?)(?P<which>[12])(?:_[^/]*)?\.(?:fastq|fq)(?:\.gz)?$";
