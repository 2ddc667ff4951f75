//! Output sinks for cleaned rows.
//!
//! A sink receives the header row and every data row as text. The CSV sink
//! writes a file; the sheet-values sink writes the `{"values": [[...]]}` body
//! a spreadsheet values-update request expects.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use fieldclean_ingest::frame_rows;
use polars::prelude::DataFrame;
use serde::Serialize;

use crate::error::SinkError;

/// Destination for a cleaned frame.
pub trait RowSink {
    /// Write the header and all rows; returns the number of data rows written.
    fn write(&mut self, frame: &DataFrame) -> Result<usize, SinkError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    SheetJson,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::SheetJson => "json",
        }
    }
}

/// Create `path` and return a boxed sink for `format`.
pub fn open_sink(path: &Path, format: OutputFormat) -> Result<Box<dyn RowSink>, SinkError> {
    let file = File::create(path).map_err(|source| SinkError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let writer = BufWriter::new(file);
    Ok(match format {
        OutputFormat::Csv => Box::new(CsvSink::new(writer)),
        OutputFormat::SheetJson => Box::new(SheetValuesSink::new(writer)),
    })
}

pub struct CsvSink<W: Write> {
    writer: W,
}

impl<W: Write> CsvSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RowSink for CsvSink<W> {
    fn write(&mut self, frame: &DataFrame) -> Result<usize, SinkError> {
        let (headers, rows) = frame_rows(frame)?;
        let mut writer = csv::Writer::from_writer(&mut self.writer);
        writer.write_record(&headers)?;
        for row in &rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(rows.len())
    }
}

#[derive(Serialize)]
struct SheetValues<'a> {
    values: Vec<&'a [String]>,
}

pub struct SheetValuesSink<W: Write> {
    writer: W,
}

impl<W: Write> SheetValuesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RowSink for SheetValuesSink<W> {
    fn write(&mut self, frame: &DataFrame) -> Result<usize, SinkError> {
        let (headers, rows) = frame_rows(frame)?;
        let mut values: Vec<&[String]> = Vec::with_capacity(rows.len() + 1);
        values.push(&headers);
        values.extend(rows.iter().map(Vec::as_slice));
        serde_json::to_writer_pretty(&mut self.writer, &SheetValues { values })?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(rows.len())
    }
}
