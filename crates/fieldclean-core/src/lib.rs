//! Row-level field cleaning.
//!
//! - **pipeline**: canonicalize a dataset, then normalize and validate each
//!   configured field, appending `_corrigido`, `_valido` and `_sugestao` columns
//! - **sink**: hand the cleaned rows to a CSV file or a sheet-values JSON body
//! - **redact**: keeps personal data out of logs unless explicitly allowed

pub mod error;
pub mod pipeline;
pub mod redact;
pub mod sink;

pub use error::{PipelineError, SinkError};
pub use pipeline::{CleanOutcome, CleanPipeline};
pub use sink::{CsvSink, OutputFormat, RowSink, SheetValuesSink, open_sink};
