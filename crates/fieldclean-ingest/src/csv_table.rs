//! CSV loading.
//!
//! Every column is read as text (no schema inference), so numeric-looking
//! values such as phone numbers keep their original digits and empty cells
//! arrive as nulls.

use std::path::Path;

use polars::prelude::{Column, CsvReadOptions, DataFrame, SerReader};
use tracing::debug;

use crate::error::{IngestError, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct IngestOptions {
    /// Trim header names and collapse their internal whitespace.
    pub trim_headers: bool,
}

impl IngestOptions {
    #[must_use]
    pub fn with_trim_headers(mut self, enable: bool) -> Self {
        self.trim_headers = enable;
        self
    }
}

/// Strip a byte-order mark and surrounding whitespace, collapsing inner runs.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn strip_bom(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').to_string()
}

pub fn read_csv_frame(path: &Path) -> Result<DataFrame> {
    read_csv_frame_with_options(path, IngestOptions::default())
}

pub fn read_csv_frame_with_options(path: &Path, options: IngestOptions) -> Result<DataFrame> {
    if !path.is_file() {
        return Err(IngestError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    if df.width() == 0 {
        return Err(IngestError::NoHeader {
            path: path.to_path_buf(),
        });
    }
    let df = rename_headers(df, options)?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded csv"
    );
    Ok(df)
}

fn rename_headers(df: DataFrame, options: IngestOptions) -> Result<DataFrame> {
    let columns: Vec<Column> = df
        .get_columns()
        .iter()
        .map(|column| {
            let raw = column.name().as_str();
            let name = if options.trim_headers {
                normalize_header(raw)
            } else {
                strip_bom(raw)
            };
            let mut column = column.clone();
            column.rename(name.as_str().into());
            column
        })
        .collect();
    Ok(DataFrame::new(columns)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_header_strips_bom_and_collapses_spaces() {
        assert_eq!(normalize_header("\u{feff}Nome"), "Nome");
        assert_eq!(normalize_header("  Data   de  nascimento "), "Data de nascimento");
        assert_eq!(normalize_header("   "), "");
    }

    #[test]
    fn strip_bom_keeps_whitespace() {
        assert_eq!(strip_bom("\u{feff}E-mail "), "E-mail ");
    }
}
