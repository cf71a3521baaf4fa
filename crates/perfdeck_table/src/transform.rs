//! Return-column rescaling.
//!
//! Return columns stay `Float64` after rescaling; the percent string is only
//! produced by [`format_return_percent`] when a cell is rendered.

use polars::prelude::{Column, DataFrame, NamedFrom};
use tracing::debug;

use crate::conf::C_RETURN_COLUMN_MARKER;
use crate::spec::TransformError;
use crate::util::derive_f64_from_any_value;

/// Whether `name` designates a return column.
pub fn is_return_column(name: &str) -> bool {
    name.contains(C_RETURN_COLUMN_MARKER)
}

/// Fractional return to percent points, rounded half-to-even at 2 decimals.
pub fn scale_return_value(x: f64) -> f64 {
    (x * 100.0 * 100.0).round_ties_even() / 100.0
}

/// Render a scaled return with one decimal and a trailing `%`.
pub fn format_return_percent(x: f64) -> String {
    format!("{x:.1}%")
}

/// Rescale every return column of `df`; other columns are passed through.
pub fn transform_return_columns(df: &DataFrame) -> Result<DataFrame, TransformError> {
    let mut l_cols_out = Vec::with_capacity(df.width());

    for col in df.get_columns() {
        let c_name = col.name().as_str();
        if !is_return_column(c_name) {
            l_cols_out.push(col.clone());
            continue;
        }

        if !col.dtype().is_numeric() {
            return Err(TransformError::NonNumericColumn {
                column: c_name.to_string(),
                dtype: col.dtype().to_string(),
            });
        }

        let mut l_values = Vec::with_capacity(col.len());
        for n_idx_row in 0..col.len() {
            let value = col.get(n_idx_row)?;
            let Some(n_value) = derive_f64_from_any_value(value) else {
                return Err(TransformError::MissingValue {
                    column: c_name.to_string(),
                    row: n_idx_row,
                });
            };
            l_values.push(scale_return_value(n_value));
        }

        debug!(column = c_name, rows = l_values.len(), "rescaled return column");
        l_cols_out.push(Column::new(col.name().clone(), l_values));
    }

    Ok(DataFrame::new(l_cols_out)?)
}
