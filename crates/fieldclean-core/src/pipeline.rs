//! Dataset-level cleaning.
//!
//! The pipeline works on a frame whose cells are text:
//!
//! 1. Canonicalize every text cell (optional, on by default).
//! 2. For each configured field whose column exists, normalize and validate
//!    every value, appending `<label>_corrigido`, `<label>_valido` and
//!    `<label>_sugestao`.
//! 3. Missing columns are skipped with a warning.

use fieldclean_ingest::{column_text, has_column, map_text_cells};
use fieldclean_model::{CleanConfig, CleanReport, FieldSpec, FieldSummary};
use fieldclean_normalize::{FieldHandler, FieldNormalizer, canonicalize_text};
use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};
use tracing::{debug, info, info_span, trace, warn};

use crate::error::PipelineError;
use crate::redact::redact_value;

/// Handlers built once from a [`CleanConfig`] and applied to any number of frames.
#[derive(Debug, Clone)]
pub struct CleanPipeline {
    canonicalize: bool,
    fields: Vec<(FieldSpec, FieldHandler)>,
}

/// Cleaned frame plus per-field verdict counts.
#[derive(Debug, Clone)]
pub struct CleanOutcome {
    pub frame: DataFrame,
    pub fields: Vec<FieldSummary>,
    /// Configured columns absent from the input.
    pub skipped: Vec<String>,
}

impl CleanOutcome {
    pub fn report(&self, input: impl Into<String>) -> CleanReport {
        CleanReport {
            input: input.into(),
            output: None,
            generated_at: None,
            rows: self.frame.height(),
            fields: self.fields.clone(),
            skipped: self.skipped.clone(),
        }
    }
}

impl CleanPipeline {
    pub fn new(config: &CleanConfig) -> Result<Self, PipelineError> {
        let mut fields = Vec::with_capacity(config.fields.len());
        for spec in &config.fields {
            let handler = FieldHandler::for_kind(spec.kind, config).map_err(|source| {
                PipelineError::Handler {
                    column: spec.column.clone(),
                    source,
                }
            })?;
            fields.push((spec.clone(), handler));
        }
        Ok(Self {
            canonicalize: config.canonicalize,
            fields,
        })
    }

    pub fn fields(&self) -> impl Iterator<Item = (&FieldSpec, &FieldHandler)> {
        self.fields.iter().map(|(spec, handler)| (spec, handler))
    }

    pub fn run(&self, df: &DataFrame) -> Result<CleanOutcome, PipelineError> {
        let span = info_span!("clean", rows = df.height(), columns = df.width());
        let _guard = span.enter();

        let mut frame = if self.canonicalize {
            map_text_cells(df, canonicalize_text)?
        } else {
            df.clone()
        };

        let mut summaries = Vec::with_capacity(self.fields.len());
        let mut skipped = Vec::new();
        for (spec, handler) in &self.fields {
            if !has_column(&frame, &spec.column) {
                warn!(column = %spec.column, kind = %spec.kind, "column not found, skipping");
                skipped.push(spec.column.clone());
                continue;
            }
            let summary = clean_field(&mut frame, spec, handler)?;
            debug!(
                column = %spec.column,
                kind = %spec.kind,
                valid = summary.valid,
                invalid = summary.invalid,
                missing = summary.missing,
                "field cleaned"
            );
            summaries.push(summary);
        }

        info!(
            rows = frame.height(),
            fields = summaries.len(),
            skipped = skipped.len(),
            "cleaning complete"
        );
        Ok(CleanOutcome {
            frame,
            fields: summaries,
            skipped,
        })
    }
}

fn clean_field(
    frame: &mut DataFrame,
    spec: &FieldSpec,
    handler: &FieldHandler,
) -> Result<FieldSummary, PipelineError> {
    let raw = column_text(frame, &spec.column)?;
    let mut summary = FieldSummary::new(&spec.column, spec.output_label(), spec.kind);
    let mut corrected: Vec<Option<String>> = Vec::with_capacity(raw.len());
    let mut valid: Vec<bool> = Vec::with_capacity(raw.len());
    let mut suggestions: Vec<String> = Vec::with_capacity(raw.len());

    for (row, value) in raw.iter().enumerate() {
        let (normalized, verdict) = handler.apply(value.as_deref());
        if !verdict.valid {
            trace!(
                row,
                column = %spec.column,
                value = redact_value(normalized.as_deref().unwrap_or("")),
                reason = verdict.reason_text(),
                "invalid value"
            );
        }
        summary.record(&verdict, value.is_none());
        suggestions.push(verdict.reason_text().to_string());
        valid.push(verdict.valid);
        corrected.push(normalized);
    }

    frame.with_column(Series::new(spec.corrected_column().into(), corrected).into_column())?;
    frame.with_column(Series::new(spec.valid_column().into(), valid).into_column())?;
    frame.with_column(Series::new(spec.suggestion_column().into(), suggestions).into_column())?;
    Ok(summary)
}
