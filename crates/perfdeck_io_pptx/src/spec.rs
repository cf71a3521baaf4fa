//! Slide table grid, writer options, report and errors.

use std::fmt;
use std::path::PathBuf;

use perfdeck_table::{LayoutError, SpecCellFormat};
use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////
// #region GridSpecification

/// One table cell: one paragraph per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecTableCell {
    pub paragraphs: Vec<String>,
    pub format: SpecCellFormat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecTableRow {
    pub height_emu: i64,
    pub cells: Vec<SpecTableCell>,
}

/// Fully resolved table: final column widths plus header and body rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecTableGrid {
    /// Column widths in EMU.
    pub widths_emu: Vec<i64>,
    /// Header row first.
    pub rows: Vec<SpecTableRow>,
}

impl SpecTableGrid {
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.widths_emu.len()
    }

    /// Sum of column widths.
    pub fn width_emu(&self) -> i64 {
        self.widths_emu.iter().sum()
    }

    /// Sum of row heights.
    pub fn height_emu(&self) -> i64 {
        self.rows.iter().map(|row| row.height_emu).sum()
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region WriteOptions

/// Axis-aligned box on the slide (EMU).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecShapeBox {
    pub left: i64,
    pub top: i64,
    pub width: i64,
    pub height: i64,
}

/// Presentation-wide geometry and title styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecDeckWriteOptions {
    /// Slide width.
    pub width_slide_emu: i64,
    /// Slide height.
    pub height_slide_emu: i64,
    /// Title placeholder box.
    pub box_title: SpecShapeBox,
    /// Title font size in points.
    pub font_size_title: i64,
    /// Table frame left offset.
    pub left_table_emu: i64,
    /// Table frame top offset.
    pub top_table_emu: i64,
    /// Theme major/minor latin font.
    pub font_name_theme: String,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ReportSpecification

/// Summary of one rendered deck.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecDeckReport {
    /// Output file path.
    pub path_file_out: PathBuf,
    /// Table rows including the header row.
    pub n_rows: usize,
    pub n_cols: usize,
    /// Final column widths in EMU.
    pub widths_emu: Vec<i64>,
    /// Non-fatal warnings.
    pub warnings: Vec<String>,
}

impl SpecDeckReport {
    /// Add a warning message.
    pub fn warn(&mut self, msg: impl AsRef<str>) {
        self.warnings.push(msg.as_ref().to_string());
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        format!(
            "{prefix} file={} rows={} cols={} width_emu={} warnings={}",
            self.path_file_out.display(),
            self.n_rows,
            self.n_cols,
            self.widths_emu.iter().sum::<i64>(),
            self.warnings.len()
        )
    }
}

impl fmt::Display for SpecDeckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[DECK]"))
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Grid construction and package write failures.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Layout names a field the table does not have.
    #[error("table has no column {0:?}")]
    MissingColumn(String),
    /// A return cell could not be read as a number.
    #[error("column {column:?} row {row}: return value is not numeric")]
    NonNumericReturn {
        /// Column name.
        column: String,
        /// Zero-based data row.
        row: usize,
    },
    /// Width allocation failed.
    #[error(transparent)]
    Layout(#[from] LayoutError),
    /// Dataframe access failed.
    #[error("dataframe error: {0}")]
    Frame(#[from] polars::prelude::PolarsError),
    /// Writer already holds its slide.
    #[error("presentation already contains a table slide")]
    SlideAlreadyWritten,
    /// `close()` was called before any slide was written.
    #[error("presentation has no slide to save")]
    NoSlide,
    /// Write attempted after `close()`.
    #[error("cannot write after close()")]
    Closed,
    /// Zip packaging failed.
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    /// Filesystem write failed.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        /// Output path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_format_sums_widths() {
        let mut report = SpecDeckReport {
            path_file_out: PathBuf::from("deck.pptx"),
            n_rows: 4,
            n_cols: 2,
            widths_emu: vec![100, 250],
            warnings: Vec::new(),
        };
        report.warn("table taller than slide");

        assert_eq!(
            report.to_string(),
            "[DECK] file=deck.pptx rows=4 cols=2 width_emu=350 warnings=1"
        );
    }

    #[test]
    fn test_grid_extent_sums_rows_and_columns() {
        let row = SpecTableRow {
            height_emu: 10,
            cells: Vec::new(),
        };
        let grid = SpecTableGrid {
            widths_emu: vec![5, 7, 9],
            rows: vec![row.clone(), row],
        };
        assert_eq!(grid.n_rows(), 2);
        assert_eq!(grid.n_cols(), 3);
        assert_eq!(grid.width_emu(), 21);
        assert_eq!(grid.height_emu(), 20);
    }
}
