use std::fs;
use std::path::PathBuf;

use fieldclean_ingest::{
    IngestError, IngestOptions, column_text, frame_rows, read_csv_frame,
    read_csv_frame_with_options, trim_frame,
};
use tempfile::TempDir;

fn temp_csv(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn reads_every_column_as_text() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_csv(
        &dir,
        "dados.csv",
        "Nome,Telefone,Idade\nAna,011988887777,30\nJo,,7\n",
    );

    let df = read_csv_frame(&path).expect("read csv");

    assert_eq!(df.height(), 2);
    assert_eq!(
        column_text(&df, "Telefone").unwrap(),
        vec![Some("011988887777".to_string()), None]
    );
    assert_eq!(
        column_text(&df, "Idade").unwrap(),
        vec![Some("30".to_string()), Some("7".to_string())]
    );
}

#[test]
fn strips_byte_order_mark_from_first_header() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_csv(&dir, "bom.csv", "\u{feff}Nome,E-mail\nAna,ana@mail.com\n");

    let df = read_csv_frame(&path).expect("read csv");
    let (headers, rows) = frame_rows(&df).expect("rows");

    assert_eq!(headers, vec!["Nome", "E-mail"]);
    assert_eq!(rows, vec![vec!["Ana", "ana@mail.com"]]);
}

#[test]
fn trims_headers_when_requested() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_csv(&dir, "headers.csv", " Nome ,E-mail\nAna,a@b.com\n");

    let raw = read_csv_frame(&path).expect("read csv");
    assert!(column_text(&raw, "Nome").is_err());

    let options = IngestOptions::default().with_trim_headers(true);
    let df = read_csv_frame_with_options(&path, options).expect("read csv");
    assert_eq!(
        column_text(&df, "Nome").unwrap(),
        vec![Some("Ana".to_string())]
    );
}

#[test]
fn missing_file_is_reported_with_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let error = read_csv_frame(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(error, IngestError::NotFound { .. }));
    assert!(error.to_string().contains("absent.csv"));
}

#[test]
fn trim_pass_matches_basic_cleanup() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_csv(
        &dir,
        "sujo.csv",
        "Nome , Cidade\n  Ana  , São Paulo \nBruno,\n",
    );

    let df = read_csv_frame(&path).expect("read csv");
    let trimmed = trim_frame(&df).expect("trim");
    let (headers, rows) = frame_rows(&trimmed).expect("rows");

    assert_eq!(headers, vec!["Nome", "Cidade"]);
    assert_eq!(rows, vec![vec!["Ana", "São Paulo"], vec!["Bruno", ""]]);
}
