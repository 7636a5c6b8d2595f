use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression;
use flate2::write::GzEncoder;

use super::{RowIndex, find_metric_files, read_table, sample_id_from_path, sniff_delimiter};
use crate::error::PivotError;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("kira_metricpivot_input_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_file(path: &Path, contents: &str) {
    let mut f = BufWriter::new(File::create(path).unwrap());
    f.write_all(contents.as_bytes()).unwrap();
}

fn write_gz(path: &Path, contents: &str) {
    let mut enc = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    enc.write_all(contents.as_bytes()).unwrap();
    enc.finish().unwrap();
}

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_sniff_delimiter_prefers_tab() {
    assert_eq!(sniff_delimiter(b"Metric Name\ta,b\tc"), b'\t');
    assert_eq!(sniff_delimiter(b"Metric Name,a,b"), b',');
    assert_eq!(sniff_delimiter(b""), b',');
}

#[test]
fn test_read_table_comma_with_quotes() {
    let dir = make_temp_dir();
    let path = dir.join("s1.csv");
    write_file(
        &path,
        "Metric Name,\"Reads, total\",\"multi\nline\"\nMetric Value,\"1,234\",5\n",
    );

    let rows = read_table(&path).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], row(&["Metric Name", "Reads, total", "multi\nline"]));
    assert_eq!(rows[1], row(&["Metric Value", "1,234", "5"]));
}

#[test]
fn test_read_table_tab_only_from_first_line() {
    let dir = make_temp_dir();
    let path = dir.join("s1.csv");
    write_file(&path, "Metric Name\ta,b\tc\nMetric Value\t1\t2\n");

    let rows = read_table(&path).unwrap();
    assert_eq!(rows[0], row(&["Metric Name", "a,b", "c"]));
    assert_eq!(rows[1], row(&["Metric Value", "1", "2"]));
}

#[test]
fn test_read_table_cr_line_endings_sniff_first_line_only() {
    let dir = make_temp_dir();
    let path = dir.join("mac.csv");
    write_file(&path, "Metric Name,a,b\rMetric Value,1\t2,3\r");

    let rows = read_table(&path).unwrap();
    assert_eq!(rows[0], row(&["Metric Name", "a", "b"]));
    assert_eq!(rows[1], row(&["Metric Value", "1\t2", "3"]));
}

#[test]
fn test_read_table_crlf_line_endings() {
    let dir = make_temp_dir();
    let path = dir.join("win.tsv");
    write_file(&path, "Metric Name\ta\r\nMetric Value\t1\r\n");

    let rows = read_table(&path).unwrap();
    assert_eq!(rows[0], row(&["Metric Name", "a"]));
    assert_eq!(rows[1], row(&["Metric Value", "1"]));
}

#[test]
fn test_read_table_ragged_rows() {
    let dir = make_temp_dir();
    let path = dir.join("ragged.tsv");
    write_file(&path, "Category\tA\nMetric Name\ta\tb\tc\n");

    let rows = read_table(&path).unwrap();
    assert_eq!(rows[0].len(), 2);
    assert_eq!(rows[1].len(), 4);
}

#[test]
fn test_read_table_strips_bom() {
    let dir = make_temp_dir();
    let path = dir.join("bom.csv");
    write_file(&path, "\u{feff}Metric Name,a\nMetric Value,1\n");

    let rows = read_table(&path).unwrap();
    assert_eq!(rows[0][0], "Metric Name");
}

#[test]
fn test_read_table_gzip_content() {
    let dir = make_temp_dir();
    let path = dir.join("packed.tsv");
    write_gz(&path, "Metric Name\tx\nMetric Value\t7\n");

    let rows = read_table(&path).unwrap();
    assert_eq!(rows[1], row(&["Metric Value", "7"]));
}

#[test]
fn test_read_table_empty_file() {
    let dir = make_temp_dir();
    let path = dir.join("empty.csv");
    write_file(&path, "");

    let err = read_table(&path).unwrap_err();
    assert!(matches!(err, PivotError::EmptyInput { .. }));

    let gz = dir.join("empty_gz.csv");
    write_gz(&gz, "");
    assert!(matches!(
        read_table(&gz).unwrap_err(),
        PivotError::EmptyInput { .. }
    ));
}

#[test]
fn test_row_index_trims_and_skips() {
    let rows = vec![
        row(&["  Metric Name  ", "a", "b"]),
        row(&["", "orphan"]),
        row(&["   ", "blank"]),
        vec![],
        row(&["Metric Value", " 1 ", "2"]),
    ];
    let index = RowIndex::from_rows(rows);
    assert_eq!(index.label_count(), 2);
    assert_eq!(index.get("Metric Name").unwrap(), &row(&["a", "b"])[..]);
    // Values are kept verbatim.
    assert_eq!(index.get("Metric Value").unwrap(), &row(&[" 1 ", "2"])[..]);
    assert!(index.get("").is_none());
}

#[test]
fn test_row_index_last_duplicate_wins() {
    let rows = vec![
        row(&["Metric Name", "first"]),
        row(&["Metric Name", "second", "third"]),
    ];
    let index = RowIndex::from_rows(rows);
    assert_eq!(
        index.get("Metric Name").unwrap(),
        &row(&["second", "third"])[..]
    );
}

#[test]
fn test_row_index_require_reports_label() {
    let index = RowIndex::from_rows(vec![row(&["Metric Name", "a"])]);
    let err = index
        .require("Metric Value", Path::new("s1.csv"))
        .unwrap_err();
    match err {
        PivotError::MissingRequiredRow { label, path } => {
            assert_eq!(label, "Metric Value");
            assert_eq!(path, PathBuf::from("s1.csv"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_find_metric_files_sorted_non_recursive() {
    let dir = make_temp_dir();
    write_file(&dir.join("b.csv"), "x");
    write_file(&dir.join("a.tsv"), "x");
    write_file(&dir.join("c.txt"), "x");
    write_file(&dir.join(".hidden.csv"), "x");
    fs::create_dir_all(dir.join("nested")).unwrap();
    write_file(&dir.join("nested").join("d.csv"), "x");

    let files = find_metric_files(&dir).unwrap();
    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.tsv".to_string(), "b.csv".to_string()]);
}

#[test]
fn test_find_metric_files_empty_dir() {
    let dir = make_temp_dir();
    assert!(find_metric_files(&dir).unwrap().is_empty());
}

#[test]
fn test_sample_id_from_path() {
    assert_eq!(sample_id_from_path(Path::new("/data/run1/S01.csv")), "S01");
    assert_eq!(sample_id_from_path(Path::new("lib.v2.tsv")), "lib.v2");
}
