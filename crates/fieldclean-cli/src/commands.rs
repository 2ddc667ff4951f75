use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use comfy_table::Table;
use polars::prelude::DataFrame;
use tracing::{debug, info, info_span};

use fieldclean_core::{CleanPipeline, OutputFormat, open_sink};
use fieldclean_ingest::{IngestOptions, read_csv_frame, read_csv_frame_with_options, trim_frame};
use fieldclean_model::{CleanConfig, CleanReport};
use fieldclean_normalize::FieldNormalizer;

use crate::cli::{CleanArgs, FieldsArgs, TrimArgs};
use crate::summary::{apply_table_style, header_cell};

/// Output of the trim pass.
#[derive(Debug, Clone)]
pub struct TrimResult {
    pub output: PathBuf,
    pub rows: usize,
}

pub fn run_clean(args: &CleanArgs) -> Result<CleanReport> {
    let span = info_span!("clean_file", input = %args.input.display());
    let _guard = span.enter();

    let mut config = load_config(args.config.as_deref())?;
    if let Some(strategy) = args.name_strategy {
        config.name_strategy = strategy.into();
    }
    if args.no_canonicalize {
        config.canonicalize = false;
    }

    let pipeline = CleanPipeline::new(&config).context("build field handlers")?;
    let options = IngestOptions::default().with_trim_headers(args.trim_headers);
    let df = read_csv_frame_with_options(&args.input, options)
        .with_context(|| format!("read {}", args.input.display()))?;
    debug!(rows = df.height(), columns = df.width(), "input loaded");

    let outcome = pipeline.run(&df).context("clean fields")?;
    let mut report = outcome.report(args.input.display().to_string());
    report.generated_at = Some(Utc::now().to_rfc3339());

    let format = OutputFormat::from(args.format);
    if args.dry_run {
        info!("dry run, output not written");
    } else {
        let output = args
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&args.input, format));
        write_frame(&outcome.frame, &output, format)?;
        report.output = Some(output.display().to_string());
    }

    if let Some(path) = &args.report {
        write_report(&report, path)?;
    }
    Ok(report)
}

pub fn run_trim(args: &TrimArgs) -> Result<TrimResult> {
    let df = read_csv_frame(&args.input).with_context(|| format!("read {}", args.input.display()))?;
    let trimmed = trim_frame(&df).context("trim cells")?;
    let format = OutputFormat::from(args.format);
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input, format));
    let rows = write_frame(&trimmed, &output, format)?;
    info!(rows, output = %output.display(), "trim complete");
    Ok(TrimResult { output, rows })
}

pub fn run_fields(args: &FieldsArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let pipeline = CleanPipeline::new(&config).context("build field handlers")?;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Kind"),
        header_cell("Output columns"),
        header_cell("Rule"),
    ]);
    apply_table_style(&mut table);
    for (spec, handler) in pipeline.fields() {
        table.add_row(vec![
            spec.column.clone(),
            spec.kind.to_string(),
            format!(
                "{}\n{}\n{}",
                spec.corrected_column(),
                spec.valid_column(),
                spec.suggestion_column()
            ),
            handler.description().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// `<stem>_limpo.<ext>` next to `input`.
pub fn default_output_path(input: &Path, format: OutputFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "dados".to_string(), |stem| stem.to_string_lossy().into_owned());
    input.with_file_name(format!("{stem}_limpo.{}", format.extension()))
}

fn load_config(path: Option<&Path>) -> Result<CleanConfig> {
    match path {
        Some(path) => {
            let config = CleanConfig::load(path).context("load config")?;
            debug!(path = %path.display(), fields = config.fields.len(), "config loaded");
            Ok(config)
        }
        None => Ok(CleanConfig::default()),
    }
}

fn write_frame(frame: &DataFrame, path: &Path, format: OutputFormat) -> Result<usize> {
    let mut sink = open_sink(path, format)?;
    let rows = sink
        .write(frame)
        .with_context(|| format!("write {}", path.display()))?;
    debug!(rows, path = %path.display(), "output written");
    Ok(rows)
}

fn write_report(report: &CleanReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize report")?;
    fs::write(path, format!("{json}\n"))
        .with_context(|| format!("write report {}", path.display()))?;
    debug!(path = %path.display(), "report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_sits_next_to_input() {
        let input = Path::new("/tmp/planilha/clientes.csv");
        assert_eq!(
            default_output_path(input, OutputFormat::Csv),
            PathBuf::from("/tmp/planilha/clientes_limpo.csv")
        );
        assert_eq!(
            default_output_path(input, OutputFormat::SheetJson),
            PathBuf::from("/tmp/planilha/clientes_limpo.json")
        );
    }
}
