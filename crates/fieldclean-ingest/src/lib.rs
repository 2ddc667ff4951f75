//! CSV ingestion for fieldclean.
//!
//! Input files are loaded into a polars [`DataFrame`](polars::prelude::DataFrame)
//! with every column kept as text.

pub mod csv_table;
pub mod error;
pub mod polars_utils;
pub mod trim;

pub use csv_table::{IngestOptions, normalize_header, read_csv_frame, read_csv_frame_with_options};
pub use error::{IngestError, Result};
pub use polars_utils::{any_to_string, column_text, frame_rows, has_column, map_text_cells};
pub use trim::trim_frame;
