//! End-to-end runs of the fqsheet binary

use pretty_assertions::assert_eq;
use std::fs::{self, File};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn fqsheet(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fqsheet"))
        .args(args)
        .current_dir(cwd)
        .output()
        .unwrap()
}

fn touch(dir: &Path, names: &[&str]) {
    for name in names {
        let path = dir.join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        File::create(path).unwrap();
    }
}

#[test]
fn test_mixed_directory_writes_sorted_sheet() {
    let fastq = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();
    touch(
        fastq.path(),
        &["foo_1.fastq", "foo_2.fastq", "bar_R1.fq.gz", "bar_R2.fq.gz", "baz_1.fastq"],
    );

    let out = fqsheet(cwd.path(), &["-f", fastq.path().to_str().unwrap()]);

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stdout.contains("Wrote samplesheet.csv with 2 entries."));
    assert!(stderr.contains("found 1 prefix(es) without full pairs, skipping: baz"));

    let mut rdr = csv::Reader::from_path(cwd.path().join("samplesheet.csv")).unwrap();
    let rows = rdr
        .records()
        .map(|r| r.unwrap().iter().map(String::from).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    let root = std::path::absolute(fastq.path()).unwrap();
    let abs = |name: &str| root.join(name).display().to_string();
    assert_eq!(
        rows,
        vec![
            vec!["bar".to_string(), abs("bar_R1.fq.gz"), abs("bar_R2.fq.gz"), "auto".to_string()],
            vec!["foo".to_string(), abs("foo_1.fastq"), abs("foo_2.fastq"), "auto".to_string()],
        ]
    );
}

#[test]
fn test_no_warning_when_every_prefix_is_paired() {
    let fastq = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();
    touch(fastq.path(), &["a_1.fq", "a_2.fq"]);

    let out = fqsheet(cwd.path(), &["-f", fastq.path().to_str().unwrap()]);

    assert!(out.status.success());
    assert!(!String::from_utf8_lossy(&out.stderr).contains("without full pairs"));
}

#[test]
fn test_strandedness_is_copied_verbatim() {
    let fastq = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();
    touch(fastq.path(), &["s_R1.fq", "s_R2.fq", "t_R1.fq", "t_R2.fq"]);

    let out = fqsheet(
        cwd.path(),
        &["--fastq-folder", fastq.path().to_str().unwrap(), "--strandedness", "Reverse"],
    );

    assert!(out.status.success());
    let mut rdr = csv::Reader::from_path(cwd.path().join("samplesheet.csv")).unwrap();
    for record in rdr.records() {
        assert_eq!(&record.unwrap()[3], "Reverse");
    }
}

#[test]
fn test_two_runs_are_byte_identical() {
    let fastq = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();
    touch(
        fastq.path(),
        &["x/c_1.fq", "x/c_2.fq", "y/a_R1.fastq.gz", "y/a_R2.fastq.gz", "b_1.FQ", "b_2.FQ"],
    );
    let folder = fastq.path().to_str().unwrap();

    assert!(fqsheet(cwd.path(), &["-f", folder]).status.success());
    let first = fs::read(cwd.path().join("samplesheet.csv")).unwrap();
    assert!(fqsheet(cwd.path(), &["-f", folder]).status.success());
    let second = fs::read(cwd.path().join("samplesheet.csv")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_empty_directory_fails_without_output() {
    let fastq = TempDir::new().unwrap();
    let cwd = TempDir::new().unwrap();

    let out = fqsheet(cwd.path(), &["-f", fastq.path().to_str().unwrap()]);

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("No paired FASTQ files found."));
    assert!(!cwd.path().join("samplesheet.csv").exists());
}

#[test]
fn test_regular_file_is_not_a_directory() {
    let cwd = TempDir::new().unwrap();
    touch(cwd.path(), &["reads_1.fastq"]);

    let out = fqsheet(cwd.path(), &["-f", "reads_1.fastq"]);

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("is not a directory"));
    assert!(!cwd.path().join("samplesheet.csv").exists());
}

#[test]
fn test_missing_folder_argument_fails() {
    let cwd = TempDir::new().unwrap();

    let out = fqsheet(cwd.path(), &[]);

    assert!(!out.status.success());
    assert!(!cwd.path().join("samplesheet.csv").exists());
}
