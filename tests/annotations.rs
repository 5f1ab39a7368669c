use std::fs;

use kira_compound_usage::io::annotations::{
    parse_annotation_matrix, parse_copy_number, read_annotation_matrix,
};
use tempfile::TempDir;

#[test]
fn matrix_parse_columns_and_rows() {
    let content = "ID\tG2\tG1\nK00001\t3\t0\nK00002\t1.0\t2\n";
    let (m, warnings) = parse_annotation_matrix(content, "matrix").unwrap();
    assert!(warnings.is_empty());
    assert_eq!(m.genomes, vec!["G2", "G1"]);
    assert_eq!(m.enzymes, vec!["K00001", "K00002"]);
    assert_eq!(m.copy_number("G2", "K00001"), 3);
    assert_eq!(m.copy_number("G1", "K00001"), 0);
    assert_eq!(m.copy_number("G2", "K00002"), 1);
    assert_eq!(m.copy_number("G1", "K99999"), 0);
    assert_eq!(m.copy_number("G9", "K00001"), 0);
}

#[test]
fn matrix_from_file_with_crlf() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("matrix.tsv");
    fs::write(&path, "ID\tG1\r\nK1\t4\r\n\r\n").unwrap();

    let (m, _) = read_annotation_matrix(&path).unwrap();
    assert_eq!(m.genomes, vec!["G1"]);
    assert_eq!(m.copy_number("G1", "K1"), 4);
}

#[test]
fn matrix_rejects_non_numeric_copy_number() {
    let err = parse_annotation_matrix("ID\tG1\nK1\tabc\n", "matrix").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("matrix:2"));
    assert!(msg.contains("abc"));

    assert!(parse_annotation_matrix("ID\tG1\nK1\t1.5\n", "matrix").is_err());
}

#[test]
fn matrix_rejects_wrong_column_count() {
    let err = parse_annotation_matrix("ID\tG1\tG2\nK1\t1\n", "matrix").unwrap_err();
    assert!(err.to_string().contains("expected 3 columns, found 2"));
}

#[test]
fn matrix_rejects_empty_and_duplicate_headers() {
    assert!(parse_annotation_matrix("", "matrix").is_err());
    assert!(parse_annotation_matrix("ID\n", "matrix").is_err());
    let err = parse_annotation_matrix("ID\tG1\tG1\nK1\t1\t1\n", "matrix").unwrap_err();
    assert!(err.to_string().contains("duplicate genome"));
}

#[test]
fn matrix_duplicate_row_keeps_last_with_warning() {
    let (m, warnings) = parse_annotation_matrix("ID\tG1\nK1\t1\nK1\t5\n", "matrix").unwrap();
    assert_eq!(m.enzymes, vec!["K1"]);
    assert_eq!(m.copy_number("G1", "K1"), 5);
    assert_eq!(warnings.len(), 1);
}

#[test]
fn copy_number_forms() {
    assert_eq!(parse_copy_number("7"), Some(7));
    assert_eq!(parse_copy_number("-2"), Some(-2));
    assert_eq!(parse_copy_number("3.0"), Some(3));
    assert_eq!(parse_copy_number("2.5"), None);
    assert_eq!(parse_copy_number("NaN"), None);
    assert_eq!(parse_copy_number(""), None);
}
