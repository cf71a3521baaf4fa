//! Shared table specification models.

use polars::prelude::PolarsError;
use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////
// #region CellFormatSpecification

/// Horizontal paragraph alignment inside a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnumCellAlign {
    /// Flush left (identity columns).
    #[default]
    Left,
    /// Centered.
    Center,
    /// Flush right (numeric columns).
    Right,
}

impl EnumCellAlign {
    /// DrawingML `algn` attribute value.
    pub fn as_ooxml(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
        }
    }
}

/// Vertical text anchor inside a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnumCellAnchor {
    /// Top edge.
    Top,
    /// Vertically centered.
    #[default]
    Middle,
    /// Bottom edge.
    Bottom,
}

impl EnumCellAnchor {
    /// DrawingML `anchor` attribute value.
    pub fn as_ooxml(&self) -> &'static str {
        match self {
            Self::Top => "t",
            Self::Middle => "ctr",
            Self::Bottom => "b",
        }
    }
}

/// Cell text format; every field is optional so presets can be overlaid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SpecCellFormat {
    /// Latin font family name.
    pub font_name: Option<String>,
    /// Font size in points.
    pub font_size: Option<i64>,
    /// Bold style.
    pub bold: Option<bool>,
    /// Horizontal alignment.
    pub align: Option<EnumCellAlign>,
    /// Vertical anchor.
    pub anchor: Option<EnumCellAnchor>,
}

impl SpecCellFormat {
    /// Return a new format by overlaying `patch` onto `self`.
    pub fn with_(&self, patch: SpecCellFormat) -> SpecCellFormat {
        self.merge(&patch)
    }

    /// Merge two formats with right-side non-`None` overwrite semantics.
    pub fn merge(&self, other: &SpecCellFormat) -> SpecCellFormat {
        SpecCellFormat {
            font_name: other.font_name.clone().or_else(|| self.font_name.clone()),
            font_size: other.font_size.or(self.font_size),
            bold: other.bold.or(self.bold),
            align: other.align.or(self.align),
            anchor: other.anchor.or(self.anchor),
        }
    }

    /// Font size in hundredths of a point (DrawingML `sz`).
    pub fn font_size_centipoints(&self) -> Option<i64> {
        self.font_size.map(|n_pt| n_pt * 100)
    }
}

/// Header/body format presets for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecTableFormats {
    /// Format applied to every header cell before column alignment.
    pub header: SpecCellFormat,
    /// Format applied to every body cell before column alignment.
    pub body: SpecCellFormat,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ColumnSpecification

/// Column width class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnumColumnWidthRule {
    /// Width derived from content length and scaled into the remaining budget.
    #[default]
    Auto,
    /// Constant width taken from [`SpecTableLayout::width_fixed_emu`].
    Fixed,
}

/// One rendered table column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecColumn {
    /// Header label; `\n` splits it into one paragraph per line.
    pub header: String,
    /// Source field name in the loaded table.
    pub field: String,
    /// Horizontal alignment for header and body cells.
    pub align: EnumCellAlign,
    /// Width class.
    pub rule_width: EnumColumnWidthRule,
}

impl SpecColumn {
    /// Left-aligned auto-width column.
    pub fn identity(field: &str, header: &str) -> Self {
        Self {
            header: header.to_string(),
            field: field.to_string(),
            align: EnumCellAlign::Left,
            rule_width: EnumColumnWidthRule::Auto,
        }
    }

    /// Right-aligned fixed-width column.
    pub fn numeric(field: &str, header: &str) -> Self {
        Self {
            header: header.to_string(),
            field: field.to_string(),
            align: EnumCellAlign::Right,
            rule_width: EnumColumnWidthRule::Fixed,
        }
    }

    /// Header label split at line breaks.
    pub fn header_lines(&self) -> Vec<&str> {
        self.header.split('\n').collect()
    }

    pub fn is_fixed(&self) -> bool {
        matches!(self.rule_width, EnumColumnWidthRule::Fixed)
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region TableLayoutSpecification

/// Ordered columns plus the geometric budget they are laid out in (EMU).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecTableLayout {
    /// Rendered columns, left to right.
    pub columns: Vec<SpecColumn>,
    /// Total table width budget.
    pub width_total_emu: i64,
    /// Width of every [`EnumColumnWidthRule::Fixed`] column.
    pub width_fixed_emu: i64,
    /// Header row height.
    pub height_row_header_emu: i64,
    /// Body row height.
    pub height_row_body_emu: i64,
}

impl SpecTableLayout {
    /// Number of fixed-width columns.
    pub fn count_fixed(&self) -> usize {
        self.columns.iter().filter(|col| col.is_fixed()).count()
    }

    /// Number of auto-width columns.
    pub fn count_auto(&self) -> usize {
        self.columns.len() - self.count_fixed()
    }
}

/// Result of one width allocation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecColumnWidthPlan {
    /// Estimated natural width per column; `0.0` for fixed columns.
    pub widths_natural: Vec<f64>,
    /// `(W - k*f) / sum(natural)`; `None` when the layout has no auto column.
    pub scaling_factor: Option<f64>,
    /// Final widths, floored to whole EMU.
    pub widths_emu: Vec<i64>,
}

impl SpecColumnWidthPlan {
    pub fn width_total_emu(&self) -> i64 {
        self.widths_emu.iter().sum()
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Degenerate width allocation inputs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    /// Budget values are negative or not finite.
    #[error("invalid width budget: {0}")]
    InvalidBudget(String),
    /// Column text list does not line up with the layout.
    #[error("column count mismatch: layout has {expected} columns, got {actual}")]
    ColumnCountMismatch {
        /// Columns in the layout.
        expected: usize,
        /// Columns provided by the caller.
        actual: usize,
    },
    /// Fixed columns leave no room for auto columns (or exceed the budget).
    #[error(
        "fixed columns need {width_fixed_total_emu} EMU but the table budget is {width_total_emu} EMU"
    )]
    FixedWidthExceedsBudget {
        /// `k * f`.
        width_fixed_total_emu: i64,
        /// `W`.
        width_total_emu: i64,
    },
    /// Every auto column has zero natural width; the scaling factor divides by zero.
    #[error("division by zero: natural widths of {count_auto} auto columns sum to zero")]
    ZeroNaturalWidth {
        /// Number of auto columns.
        count_auto: usize,
    },
}

/// Return-column rescaling failures.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A return column does not hold numbers.
    #[error("return column {column:?} is not numeric (dtype {dtype})")]
    NonNumericColumn {
        /// Column name.
        column: String,
        /// Observed dtype.
        dtype: String,
    },
    /// A return cell is null or could not be read as a number.
    #[error("return column {column:?} has no numeric value at row {row}")]
    MissingValue {
        /// Column name.
        column: String,
        /// Zero-based data row.
        row: usize,
    },
    /// Underlying dataframe operation failed.
    #[error("dataframe error: {0}")]
    Frame(#[from] PolarsError),
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_prefers_right_side_values() {
        let fmt_base = SpecCellFormat {
            font_name: Some("Arial".to_string()),
            font_size: Some(9),
            bold: Some(false),
            align: Some(EnumCellAlign::Left),
            anchor: Some(EnumCellAnchor::Middle),
        };
        let fmt_final = fmt_base.with_(SpecCellFormat {
            bold: Some(true),
            align: Some(EnumCellAlign::Right),
            ..Default::default()
        });

        assert_eq!(fmt_final.font_name.as_deref(), Some("Arial"));
        assert_eq!(fmt_final.font_size, Some(9));
        assert_eq!(fmt_final.bold, Some(true));
        assert_eq!(fmt_final.align, Some(EnumCellAlign::Right));
        assert_eq!(fmt_final.anchor, Some(EnumCellAnchor::Middle));
        assert_eq!(fmt_final.font_size_centipoints(), Some(900));
    }

    #[test]
    fn test_header_lines_split_on_line_breaks() {
        let col = SpecColumn::numeric("3yr_rtn_fund", "3Y Ann.\nFund");
        assert_eq!(col.header_lines(), vec!["3Y Ann.", "Fund"]);
        assert!(col.is_fixed());
        assert_eq!(col.align, EnumCellAlign::Right);
    }
}
