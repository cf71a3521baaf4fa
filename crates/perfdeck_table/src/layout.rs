//! Column width estimation and allocation.
//!
//! Auto columns get a natural width from their longest rendered string and are
//! then scaled so that, together with the fixed columns, they fill the table
//! budget. All widths are in EMU.

use tracing::debug;

use crate::conf::N_WIDTH_PER_CHAR_EMU;
use crate::spec::{LayoutError, SpecColumnWidthPlan, SpecTableLayout};

////////////////////////////////////////////////////////////////////////////////
// #region WidthEstimation

/// Estimates the rendered width of one line of text.
pub trait WidthEstimator {
    /// Width in EMU.
    fn estimate(&self, text: &str) -> f64;
}

/// `display_length(text) * width_per_char`; ignores real font metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearWidthEstimator {
    /// Width of one ASCII character in EMU.
    pub width_per_char: f64,
}

impl Default for LinearWidthEstimator {
    fn default() -> Self {
        Self {
            width_per_char: N_WIDTH_PER_CHAR_EMU,
        }
    }
}

impl WidthEstimator for LinearWidthEstimator {
    fn estimate(&self, text: &str) -> f64 {
        estimate_display_length(text) as f64 * self.width_per_char
    }
}

/// Character count with non-ASCII characters weighted 1.6.
pub fn estimate_display_length(s: &str) -> usize {
    let n_ascii = s.chars().filter(|chr| chr.is_ascii()).count();
    let n_non_ascii = s.chars().count().saturating_sub(n_ascii);
    n_ascii + (n_non_ascii as f64 * 1.6).round() as usize
}

/// Max estimated width per column over `texts_by_col[col]`; fixed columns report `0.0`.
pub fn estimate_natural_widths(
    layout: &SpecTableLayout,
    texts_by_col: &[Vec<String>],
    estimator: &dyn WidthEstimator,
) -> Result<Vec<f64>, LayoutError> {
    if texts_by_col.len() != layout.columns.len() {
        return Err(LayoutError::ColumnCountMismatch {
            expected: layout.columns.len(),
            actual: texts_by_col.len(),
        });
    }

    Ok(layout
        .columns
        .iter()
        .zip(texts_by_col)
        .map(|(col, l_texts)| {
            if col.is_fixed() {
                return 0.0;
            }
            l_texts
                .iter()
                .map(|text| estimator.estimate(text))
                .fold(0.0, f64::max)
        })
        .collect())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region WidthAllocation

/// Scale auto columns into the budget left by the fixed columns.
///
/// Returns `(widths, scaling_factor)`; `scaling_factor` is `None` when the
/// layout has no auto column.
pub fn allocate_column_widths(
    layout: &SpecTableLayout,
    widths_natural: &[f64],
) -> Result<(Vec<f64>, Option<f64>), LayoutError> {
    validate_layout_budget(layout)?;
    if widths_natural.len() != layout.columns.len() {
        return Err(LayoutError::ColumnCountMismatch {
            expected: layout.columns.len(),
            actual: widths_natural.len(),
        });
    }
    if let Some(n_bad) = widths_natural.iter().find(|val| !val.is_finite() || **val < 0.0) {
        return Err(LayoutError::InvalidBudget(format!(
            "natural width must be finite and >= 0, got {n_bad}"
        )));
    }

    let n_count_fixed = layout.count_fixed();
    let n_count_auto = layout.count_auto();
    let n_width_fixed_total = layout.width_fixed_emu * n_count_fixed as i64;
    let n_width_remaining = layout.width_total_emu - n_width_fixed_total;

    let if_overflow = if n_count_auto == 0 {
        n_width_remaining < 0
    } else {
        n_width_remaining <= 0
    };
    if if_overflow {
        return Err(LayoutError::FixedWidthExceedsBudget {
            width_fixed_total_emu: n_width_fixed_total,
            width_total_emu: layout.width_total_emu,
        });
    }

    if n_count_auto == 0 {
        let l_widths = vec![layout.width_fixed_emu as f64; layout.columns.len()];
        return Ok((l_widths, None));
    }

    let n_width_natural_total: f64 = layout
        .columns
        .iter()
        .zip(widths_natural)
        .filter(|(col, _)| !col.is_fixed())
        .map(|(_, n_width)| *n_width)
        .sum();
    if n_width_natural_total == 0.0 {
        return Err(LayoutError::ZeroNaturalWidth {
            count_auto: n_count_auto,
        });
    }

    let n_scaling_factor = n_width_remaining as f64 / n_width_natural_total;
    let l_widths = layout
        .columns
        .iter()
        .zip(widths_natural)
        .map(|(col, n_width)| {
            if col.is_fixed() {
                layout.width_fixed_emu as f64
            } else {
                n_width * n_scaling_factor
            }
        })
        .collect();

    Ok((l_widths, Some(n_scaling_factor)))
}

/// Estimate natural widths from rendered texts and allocate final EMU widths.
pub fn plan_column_widths(
    layout: &SpecTableLayout,
    texts_by_col: &[Vec<String>],
    estimator: &dyn WidthEstimator,
) -> Result<SpecColumnWidthPlan, LayoutError> {
    let widths_natural = estimate_natural_widths(layout, texts_by_col, estimator)?;
    let (l_widths, scaling_factor) = allocate_column_widths(layout, &widths_natural)?;

    // Flooring keeps the sum within the budget.
    let widths_emu: Vec<i64> = l_widths.iter().map(|val| val.floor() as i64).collect();

    for (col, n_width) in layout.columns.iter().zip(&widths_emu) {
        debug!(column = col.field.as_str(), width_emu = *n_width, "allocated column width");
    }

    Ok(SpecColumnWidthPlan {
        widths_natural,
        scaling_factor,
        widths_emu,
    })
}

fn validate_layout_budget(layout: &SpecTableLayout) -> Result<(), LayoutError> {
    if layout.width_total_emu <= 0 {
        return Err(LayoutError::InvalidBudget(format!(
            "width_total_emu must be > 0, got {}",
            layout.width_total_emu
        )));
    }
    if layout.width_fixed_emu < 0 {
        return Err(LayoutError::InvalidBudget(format!(
            "width_fixed_emu must be >= 0, got {}",
            layout.width_fixed_emu
        )));
    }
    Ok(())
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
