//! Basic cleanup: trim header names and text cells, nothing else.

use polars::prelude::{Column, DataFrame};

use crate::error::Result;
use crate::polars_utils::map_text_cells;

pub fn trim_frame(df: &DataFrame) -> Result<DataFrame> {
    let trimmed = map_text_cells(df, |value| value.trim().to_string())?;
    let columns: Vec<Column> = trimmed
        .get_columns()
        .iter()
        .map(|column| {
            let name = column.name().as_str().trim_matches('\u{feff}').trim().to_string();
            let mut column = column.clone();
            column.rename(name.as_str().into());
            column
        })
        .collect();
    Ok(DataFrame::new(columns)?)
}
