//! Stateless column-level cleaning transforms.
//!
//! Each operation consumes a DataFrame and returns the transformed frame;
//! nothing outside the passed frame is read or written. Callers must use the
//! returned value. Failures surface as [`PipelineError`] variants instead of
//! being coerced away.

use std::collections::BTreeSet;

use polars::prelude::*;

use ventas_model::{PipelineError, Result};

use crate::data_utils::{any_to_f64, any_to_string};

/// Trim, lowercase, and underscore-join every column name.
///
/// Two distinct names that normalize to the same identifier ("Price" and
/// "price ") are reported as [`PipelineError::NameCollision`] rather than
/// silently merging columns.
pub fn normalize_column_names(mut df: DataFrame) -> Result<DataFrame> {
    let mut seen = BTreeSet::new();
    let mut names = Vec::with_capacity(df.width());
    for name in df.get_column_names_owned() {
        let normalized = name.trim().to_lowercase().replace(' ', "_");
        if !seen.insert(normalized.clone()) {
            return Err(PipelineError::NameCollision(normalized));
        }
        names.push(normalized);
    }
    df.set_column_names(names)?;
    Ok(df)
}

/// Drop every row that has a null in any column.
///
/// An all-null column therefore empties the table.
pub fn drop_incomplete_rows(df: DataFrame) -> Result<DataFrame> {
    if df.height() == 0 {
        return Ok(df);
    }
    let mut keep = BooleanChunked::from_slice("keep".into(), &vec![true; df.height()]);
    for column in df.get_columns() {
        keep = &keep & &column.as_materialized_series().is_not_null();
    }
    Ok(df.filter(&keep)?)
}

/// Keep only rows whose value in `column` is a number greater than zero.
///
/// Null and non-numeric values fail the comparison and their rows are
/// dropped. The column itself must exist.
pub fn filter_positive(df: DataFrame, column: &str) -> Result<DataFrame> {
    let series = column_or_err(&df, column)?;
    let mut keep = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let value = series.get(idx).unwrap_or(AnyValue::Null);
        keep.push(any_to_f64(value).is_some_and(|v| v > 0.0));
    }
    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    Ok(df.filter(&mask)?)
}

/// Keep the first row for each distinct value of `column`, preserving the
/// original row order.
pub fn dedupe_by_key(df: DataFrame, column: &str) -> Result<DataFrame> {
    let series = column_or_err(&df, column)?;
    let mut seen = BTreeSet::new();
    let mut keep = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let key = any_to_string(series.get(idx).unwrap_or(AnyValue::Null));
        keep.push(seen.insert(key));
    }
    let mask = BooleanChunked::from_slice("first_seen".into(), &keep);
    Ok(df.filter(&mask)?)
}

/// Append `<column>_norm`: the column scaled linearly onto 0..=100.
///
/// A column with no spread (min == max, or no non-null values at all) has no
/// defined scaling and is rejected as [`PipelineError::DegenerateRange`].
pub fn normalize_to_percentage(mut df: DataFrame, column: &str) -> Result<DataFrame> {
    let series = column_or_err(&df, column)?;
    let mut values: Vec<Option<f64>> = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        match series.get(idx).unwrap_or(AnyValue::Null) {
            AnyValue::Null => values.push(None),
            value => match any_to_f64(value) {
                Some(v) => values.push(Some(v)),
                None => {
                    return Err(PipelineError::MalformedValue {
                        column: column.to_string(),
                        expected: "numeric",
                    });
                }
            },
        }
    }

    let mut bounds: Option<(f64, f64)> = None;
    for v in values.iter().flatten() {
        bounds = Some(match bounds {
            Some((min, max)) => (min.min(*v), max.max(*v)),
            None => (*v, *v),
        });
    }
    let Some((min, max)) = bounds else {
        return Err(PipelineError::DegenerateRange(column.to_string()));
    };
    if min == max {
        return Err(PipelineError::DegenerateRange(column.to_string()));
    }
    let span = max - min;

    let name = format!("{column}_norm");
    let mut builder = PrimitiveChunkedBuilder::<Float64Type>::new(name.as_str().into(), df.height());
    for value in &values {
        match value {
            Some(v) => builder.append_value((v - min) / span * 100.0),
            None => builder.append_null(),
        }
    }
    df.with_column(builder.finish().into_series())?;
    Ok(df)
}

/// Append `<column>_upper`: each value of a text column uppercased.
///
/// Only string columns are accepted; a numeric column fails with
/// [`PipelineError::MalformedValue`] instead of being coerced.
pub fn uppercase_text(mut df: DataFrame, column: &str) -> Result<DataFrame> {
    let series = column_or_err(&df, column)?;
    let ca = series.str().map_err(|_| PipelineError::MalformedValue {
        column: column.to_string(),
        expected: "text",
    })?;

    let name = format!("{column}_upper");
    let mut builder = StringChunkedBuilder::new(name.as_str().into(), df.height());
    for value in ca.into_iter() {
        match value {
            Some(text) => builder.append_value(text.to_uppercase()),
            None => builder.append_null(),
        }
    }
    let upper = builder.finish().into_series();
    df.with_column(upper)?;
    Ok(df)
}

fn column_or_err<'a>(df: &'a DataFrame, column: &str) -> Result<&'a Column> {
    df.column(column)
        .map_err(|_| PipelineError::ColumnNotFound(column.to_string()))
}
