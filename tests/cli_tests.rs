//! End-to-end tests for the tag-demux command line.
//!
//! Each test writes a tag file and FASTQ inputs into a scratch directory,
//! runs the binary, and checks the files it produced and the summary it
//! printed.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const TAGS: &str = "ATCGCA\ts0\nCCAGTG\ts1\nGGTAAT\ts2\n*\ttrash\n";

fn fastq(records: &[(&str, &str)]) -> String {
    records
        .iter()
        .map(|(name, seq)| format!("@{name}\n{seq}\n+\n{}\n", "I".repeat(seq.len())))
        .collect()
}

fn write(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.display().to_string()
}

fn read(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap()
}

fn tag_demux() -> Command {
    Command::cargo_bin("tag-demux").unwrap()
}

#[test]
fn test_single_end_exact() {
    let dir = TempDir::new().unwrap();
    let tags = write(dir.path(), "tags.txt", TAGS);
    let reads = write(
        dir.path(),
        "reads.fastq",
        &fastq(&[
            ("r1", "CCAGTGAAAA"),
            ("r2", "GGTAATCCCC"),
            ("r3", "CCAGGGTTTT"),
            ("r4", "ATCGCAGGGG"),
        ]),
    );
    let prefix = dir.path().join("out").display().to_string();

    tag_demux()
        .args(["demux", &tags, "-f", &reads, "-p", &prefix])
        .assert()
        .success()
        .stdout(predicate::str::contains("s1 1 reads"))
        .stdout(predicate::str::contains("trash 1 reads"));

    assert_eq!(read(dir.path(), "out-s1.fastq"), fastq(&[("r1", "AAAA")]));
    assert_eq!(read(dir.path(), "out-s2.fastq"), fastq(&[("r2", "CCCC")]));
    assert_eq!(read(dir.path(), "out-s0.fastq"), fastq(&[("r4", "GGGG")]));
    assert_eq!(
        read(dir.path(), "out-trash.fastq"),
        fastq(&[("r3", "CCAGGGTTTT")])
    );
}

#[test]
fn test_single_end_similarity() {
    let dir = TempDir::new().unwrap();
    let tags = write(dir.path(), "tags.txt", TAGS);
    let reads = write(
        dir.path(),
        "reads.fastq",
        &fastq(&[("r1", "CCAGGGTTTT"), ("r2", "AAAAAATTTT")]),
    );
    let prefix = dir.path().join("out").display().to_string();

    tag_demux()
        .args(["demux", &tags, "-f", &reads, "-p", &prefix, "-l", "0.75"])
        .assert()
        .success();

    assert_eq!(read(dir.path(), "out-s1.fastq"), fastq(&[("r1", "TTTT")]));
    assert_eq!(
        read(dir.path(), "out-trash.fastq"),
        fastq(&[("r2", "AAAAAATTTT")])
    );
}

#[test]
fn test_paired_end_independent_and_all() {
    let dir = TempDir::new().unwrap();
    let tags = write(dir.path(), "tags.txt", TAGS);
    let r1 = write(dir.path(), "r1.fastq", &fastq(&[("p1", "CCAGGGACGT")]));
    let r2 = write(dir.path(), "r2.fastq", &fastq(&[("p1", "AAAAAAACGT")]));

    let loose = dir.path().join("loose").display().to_string();
    tag_demux()
        .args(["demux", &tags, "-f", &r1, "-F", &r2, "-p", &loose, "-l", "0.75"])
        .assert()
        .success();
    assert_eq!(read(dir.path(), "loose-s1_1.fastq"), fastq(&[("p1", "ACGT")]));
    assert_eq!(read(dir.path(), "loose-s1_2.fastq"), fastq(&[("p1", "ACGT")]));

    let strict = dir.path().join("strict").display().to_string();
    tag_demux()
        .args([
            "demux", &tags, "-f", &r1, "-F", &r2, "-p", &strict, "-l", "0.75", "--all",
        ])
        .assert()
        .success();
    assert_eq!(read(dir.path(), "strict-s1_1.fastq"), "");
    assert_eq!(
        read(dir.path(), "strict-trash_1.fastq"),
        fastq(&[("p1", "CCAGGGACGT")])
    );
}

#[test]
fn test_shared_output_name() {
    let dir = TempDir::new().unwrap();
    let tags = write(dir.path(), "tags.txt", "AAAA pool\nCCCC pool\n* trash\n");
    let reads = write(
        dir.path(),
        "reads.fastq",
        &fastq(&[("r1", "AAAAGT"), ("r2", "CCCCTG")]),
    );
    let prefix = dir.path().join("out").display().to_string();

    tag_demux()
        .args(["demux", &tags, "-f", &reads, "-p", &prefix, "--format", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("AAAA\tpool\t1"))
        .stdout(predicate::str::contains("CCCC\tpool\t1"));

    assert_eq!(
        read(dir.path(), "out-pool.fastq"),
        fastq(&[("r1", "GT"), ("r2", "TG")])
    );
}

#[test]
fn test_json_summary() {
    let dir = TempDir::new().unwrap();
    let tags = write(dir.path(), "tags.txt", TAGS);
    let reads = write(dir.path(), "reads.fastq", &fastq(&[("r1", "GGTAATAC")]));
    let prefix = dir.path().join("out").display().to_string();

    let output = tag_demux()
        .args(["demux", &tags, "-f", &reads, "-p", &prefix, "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["units"], 1);
    assert_eq!(summary["layout"], "single_end");
    assert_eq!(summary["counts"][2]["tag"], "GGTAAT");
    assert_eq!(summary["counts"][2]["reads"], 1);
}

#[test]
fn test_verbose_lists_outputs() {
    let dir = TempDir::new().unwrap();
    let tags = write(dir.path(), "tags.txt", TAGS);
    let reads = write(dir.path(), "reads.fastq", &fastq(&[("r1", "CCAGTGAC")]));
    let prefix = dir.path().join("out").display().to_string();

    tag_demux()
        .args(["-v", "demux", &tags, "-f", &reads, "-p", &prefix, "-l", "0.8"])
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stderr(predicate::str::contains("similarity (rate 0.8) matching"))
        .stderr(predicate::str::contains("out-s1.fastq"))
        .stderr(predicate::str::contains("out-trash.fastq"))
        .stderr(predicate::str::contains("routed=1"));
}

#[test]
fn test_missing_default_is_fatal() {
    let dir = TempDir::new().unwrap();
    let tags = write(dir.path(), "tags.txt", "ACGT a\n");
    let reads = write(dir.path(), "reads.fastq", &fastq(&[("r1", "ACGT")]));

    tag_demux()
        .args(["demux", &tags, "-f", &reads])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No default destination"));
}

#[test]
fn test_invalid_rate_is_fatal() {
    let dir = TempDir::new().unwrap();
    let tags = write(dir.path(), "tags.txt", TAGS);
    let reads = write(dir.path(), "reads.fastq", &fastq(&[("r1", "ACGT")]));

    tag_demux()
        .args(["demux", &tags, "-f", &reads, "-l", "1.5"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid similarity rate"));
}

#[test]
fn test_uneven_paired_inputs() {
    let dir = TempDir::new().unwrap();
    let tags = write(dir.path(), "tags.txt", TAGS);
    let r1 = write(
        dir.path(),
        "r1.fastq",
        &fastq(&[("p1", "ACGT"), ("p2", "ACGT")]),
    );
    let r2 = write(dir.path(), "r2.fastq", &fastq(&[("p1", "ACGT")]));
    let prefix = dir.path().join("out").display().to_string();

    tag_demux()
        .args(["demux", &tags, "-f", &r1, "-F", &r2, "-p", &prefix])
        .assert()
        .failure()
        .stderr(predicate::str::contains("different lengths"));
}

#[test]
fn test_analogy() {
    let dir = TempDir::new().unwrap();
    let tags = write(dir.path(), "tags.txt", "AAAAAT a\nAAAAGT b\n* trash\n");

    tag_demux()
        .args(["analogy", &tags])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Maximal similarity ratio between tags is 0.833333",
        ));
}
