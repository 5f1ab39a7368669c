use std::fs;
use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

fn write_inputs(dir: &Path) {
    let reference = dir.join("reference");
    fs::create_dir_all(&reference).unwrap();
    fs::write(reference.join("reaction_to_enzyme.tsv"), "R1\tK1\n").unwrap();
    fs::write(reference.join("compound_to_reaction.tsv"), "C1\tR1\n").unwrap();
    fs::write(reference.join("compound_descriptions.tsv"), "C1\tAlpha\n").unwrap();
    fs::write(dir.join("compounds.txt"), "C1\n").unwrap();
    fs::write(dir.join("matrix.tsv"), "ID\tG1\tG2\nK1\t1\t0\n").unwrap();
    fs::write(dir.join("metadata.tsv"), "G1\tA\nG2\tB\n").unwrap();
}

fn command(dir: &Path, sub: &str) -> Command {
    let mut cmd = Command::cargo_bin("kira-compound-usage").unwrap();
    cmd.arg(sub)
        .arg("--compounds")
        .arg(dir.join("compounds.txt"))
        .arg("--annotations")
        .arg(dir.join("matrix.tsv"))
        .arg("--metadata")
        .arg(dir.join("metadata.tsv"))
        .arg("--reference")
        .arg(dir.join("reference"));
    cmd
}

#[test]
fn run_command_writes_outputs() {
    let tmp = TempDir::new().unwrap();
    write_inputs(tmp.path());
    let out = tmp.path().join("out");

    let mut cmd = command(tmp.path(), "run");
    cmd.arg("--out").arg(&out).arg("--json");
    cmd.assert().success();

    assert!(out.join("frequency_matrix.tsv").exists());
    assert!(out.join("enrichment_results.tsv").exists());
    assert!(out.join("uses_report.json").exists());
}

#[test]
fn validate_command_ok() {
    let tmp = TempDir::new().unwrap();
    write_inputs(tmp.path());

    let mut cmd = command(tmp.path(), "validate");
    cmd.assert().success();
}

#[test]
fn validate_command_fails_on_bad_metadata() {
    let tmp = TempDir::new().unwrap();
    write_inputs(tmp.path());
    fs::write(tmp.path().join("metadata.tsv"), "G1\n").unwrap();

    let mut cmd = command(tmp.path(), "validate");
    let output = cmd.output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("metadata"));
}
