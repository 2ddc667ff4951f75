//! Command-level tests against files in a temp directory.

use std::fs;
use std::path::{Path, PathBuf};

use fieldclean_cli::cli::{CleanArgs, FormatArg, NameStrategyArg, TrimArgs};
use fieldclean_cli::commands::{run_clean, run_trim};
use tempfile::TempDir;

const SAMPLE: &str = "Nome,E-mail,Telefone,Cidade\n\
Ana Maria,ana..silva@ gmail.com,(11) 9 8888-7777,São Paulo\n\
Jo,not-an-email,123,Recife\n";

fn write_input(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("clientes.csv");
    fs::write(&path, contents).expect("write input");
    path
}

fn clean_args(input: &Path) -> CleanArgs {
    CleanArgs {
        input: input.to_path_buf(),
        output: None,
        format: FormatArg::Csv,
        config: None,
        name_strategy: None,
        no_canonicalize: false,
        trim_headers: false,
        report: None,
        dry_run: false,
    }
}

#[test]
fn clean_writes_default_output_next_to_input() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(&dir, SAMPLE);

    let report = run_clean(&clean_args(&input)).expect("clean");

    let output = dir.path().join("clientes_limpo.csv");
    assert_eq!(report.output.as_deref(), Some(output.display().to_string().as_str()));
    assert!(report.generated_at.is_some());
    assert_eq!(report.rows, 2);
    assert_eq!(report.invalid_count(), 3);

    let written = fs::read_to_string(&output).expect("read output");
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Nome,E-mail,Telefone,Cidade,Nome_corrigido,Nome_valido,Nome_sugestao"));
    assert!(lines[1].starts_with("Ana Maria,ana..silva@ gmail.com,11 9 8888-7777,Sao Paulo,AnaMaria,true,,"));
}

#[test]
fn name_strategy_flag_overrides_default() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(&dir, SAMPLE);
    let output = dir.path().join("saida.csv");
    let mut args = clean_args(&input);
    args.output = Some(output.clone());
    args.name_strategy = Some(NameStrategyArg::JoinLowercaseFragments);

    run_clean(&args).expect("clean");

    let written = fs::read_to_string(&output).expect("read output");
    assert!(written.lines().nth(1).unwrap().contains(",Ana Maria,true,"));
}

#[test]
fn dry_run_writes_only_the_report() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(&dir, SAMPLE);
    let report_path = dir.path().join("relatorio.json");
    let mut args = clean_args(&input);
    args.dry_run = true;
    args.report = Some(report_path.clone());

    let report = run_clean(&args).expect("clean");

    assert!(report.output.is_none());
    assert!(!dir.path().join("clientes_limpo.csv").exists());
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).expect("read report"))
            .expect("report json");
    assert_eq!(json["rows"], 2);
    assert_eq!(json["fields"][0]["column"], "Nome");
    assert_eq!(json["fields"][2]["invalid"], 1);
    assert!(json.get("output").is_none());
}

#[test]
fn config_file_selects_fields_and_labels() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(&dir, SAMPLE);
    let config = dir.path().join("fieldclean.toml");
    fs::write(
        &config,
        r#"
[[fields]]
column = "E-mail"
kind = "email"
label = "Email"

[[fields]]
column = "Cidade"
kind = "text"

[[fields]]
column = "CPF"
kind = "text"
"#,
    )
    .expect("write config");
    let mut args = clean_args(&input);
    args.config = Some(config);
    args.format = FormatArg::SheetJson;

    let report = run_clean(&args).expect("clean");

    assert_eq!(report.skipped, vec!["CPF"]);
    let output = dir.path().join("clientes_limpo.json");
    let body: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(output).expect("read output")).expect("json");
    let header = body["values"][0].as_array().expect("header row");
    let names: Vec<&str> = header.iter().filter_map(|v| v.as_str()).collect();
    assert_eq!(
        &names[4..],
        &[
            "Email_corrigido",
            "Email_valido",
            "Email_sugestao",
            "Cidade_corrigido",
            "Cidade_valido",
            "Cidade_sugestao",
        ]
    );
}

#[test]
fn broken_config_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(&dir, SAMPLE);
    let config = dir.path().join("fieldclean.toml");
    fs::write(&config, "[phone]\nmin_digits = 20\n").expect("write config");
    let mut args = clean_args(&input);
    args.config = Some(config);

    let error = run_clean(&args).unwrap_err();

    assert!(format!("{error:#}").contains("phone.min_digits"));
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let args = clean_args(&dir.path().join("nao-existe.csv"));
    assert!(run_clean(&args).is_err());
}

#[test]
fn trim_strips_headers_and_cells() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(&dir, " Nome , Cidade \n  Ana  ,Recife \n");

    let trimmed = run_trim(&TrimArgs {
        input,
        output: None,
        format: FormatArg::Csv,
    })
    .expect("trim");

    assert_eq!(trimmed.rows, 1);
    let written = fs::read_to_string(trimmed.output).expect("read output");
    insta::assert_snapshot!(written, @r"
    Nome,Cidade
    Ana,Recife
    ");
}
