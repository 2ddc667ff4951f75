//! Polars value helpers.
//!
//! Conversions between polars columns and plain text cells.

use polars::prelude::{AnyValue, Column, DataFrame, DataType, IntoColumn, NamedFrom, Series};

use crate::error::{IngestError, Result};

/// Converts a polars `AnyValue` to text. Null becomes the empty string and
/// booleans are written as `true`/`false`.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_names().iter().any(|column| column.as_str() == name)
}

/// Values of a column as optional text; nulls stay `None`.
pub fn column_text(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df.column(name).map_err(|_| IngestError::ColumnNotFound {
        column: name.to_string(),
    })?;
    if column.dtype() == &DataType::String {
        let values = column.str()?;
        return Ok(values
            .into_iter()
            .map(|value| value.map(str::to_string))
            .collect());
    }
    let mut values = Vec::with_capacity(column.len());
    for idx in 0..column.len() {
        let value = column.get(idx)?;
        if matches!(value, AnyValue::Null) {
            values.push(None);
        } else {
            values.push(Some(any_to_string(value)));
        }
    }
    Ok(values)
}

/// Rewrite every non-null text cell with `f`; other columns are kept as is.
pub fn map_text_cells<F>(df: &DataFrame, f: F) -> Result<DataFrame>
where
    F: Fn(&str) -> String,
{
    let mut columns: Vec<Column> = Vec::with_capacity(df.width());
    for column in df.get_columns() {
        if column.dtype() != &DataType::String {
            columns.push(column.clone());
            continue;
        }
        let values: Vec<Option<String>> = column
            .str()?
            .into_iter()
            .map(|value| value.map(&f))
            .collect();
        columns.push(Series::new(column.name().clone(), values).into_column());
    }
    Ok(DataFrame::new(columns)?)
}

/// Header row plus every row rendered as text, in column order.
pub fn frame_rows(df: &DataFrame) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let headers: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.as_str().to_owned())
        .collect();
    let mut rows = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let mut row = Vec::with_capacity(headers.len());
        for column in df.get_columns() {
            row.push(any_to_string(column.get(idx)?));
        }
        rows.push(row);
    }
    Ok((headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_to_string_formats_scalars() {
        assert_eq!(any_to_string(AnyValue::Null), "");
        assert_eq!(any_to_string(AnyValue::Boolean(true)), "true");
        assert_eq!(any_to_string(AnyValue::Int64(11)), "11");
        assert_eq!(any_to_string(AnyValue::Float64(10.50)), "10.5");
        assert_eq!(any_to_string(AnyValue::Float64(3.0)), "3");
        assert_eq!(any_to_string(AnyValue::String("Ana")), "Ana");
    }
}
