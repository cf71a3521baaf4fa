//! Record model, load options and errors.

use std::path::PathBuf;

use polars::prelude::PolarsError;
use rust_xlsxwriter::XlsxError;
use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////
// #region RecordSpecification

/// One fund row in the expected input schema.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecFundRecord {
    pub fund_name: String,
    pub benchmark: String,
    pub ref_code: String,
    /// 3-month fund return (fraction).
    pub rtn_3m_fund: f64,
    /// 3-month return relative to benchmark (fraction).
    pub rtn_3m_rel: f64,
    pub rtn_1yr_fund: f64,
    pub rtn_1yr_rel: f64,
    /// 3-year annualized.
    pub rtn_3yr_fund: f64,
    pub rtn_3yr_rel: f64,
    /// 5-year annualized.
    pub rtn_5yr_fund: f64,
    pub rtn_5yr_rel: f64,
}

impl SpecFundRecord {
    /// Identity fields in schema order.
    pub fn identity_values(&self) -> [&str; 3] {
        [&self.fund_name, &self.benchmark, &self.ref_code]
    }

    /// Return fields in schema order.
    pub fn return_values(&self) -> [f64; 8] {
        [
            self.rtn_3m_fund,
            self.rtn_3m_rel,
            self.rtn_1yr_fund,
            self.rtn_1yr_rel,
            self.rtn_3yr_fund,
            self.rtn_3yr_rel,
            self.rtn_5yr_fund,
            self.rtn_5yr_rel,
        ]
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region LoadOptions

/// Loader options.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecLoadOptions {
    /// Worksheet to read; the first worksheet when `None`.
    pub sheet_name: Option<String>,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region Errors

/// Spreadsheet loading failures; all abort the run.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Workbook could not be opened or a worksheet could not be read.
    #[error("failed to read workbook {}: {message}", path.display())]
    Workbook {
        /// Input path.
        path: PathBuf,
        /// Underlying reader error text.
        message: String,
    },
    /// Workbook has no worksheet (or not the requested one).
    #[error("worksheet not found: {0}")]
    WorksheetNotFound(String),
    /// Worksheet has no header row.
    #[error("worksheet {0:?} is empty")]
    EmptyWorksheet(String),
    /// Header row repeats a column name.
    #[error("{0}")]
    DuplicateColumns(String),
    /// Expected columns are absent from the header row.
    #[error("schema mismatch: missing columns {missing:?}")]
    SchemaMismatch {
        /// Expected names not found.
        missing: Vec<String>,
    },
    /// A return cell is not a number.
    #[error("column {column:?} row {row}: expected a numeric return, got {value:?}")]
    NonNumericReturn {
        /// Column name.
        column: String,
        /// One-based worksheet row.
        row: usize,
        /// Cell text as read.
        value: String,
    },
    /// DataFrame construction failed.
    #[error("dataframe error: {0}")]
    Frame(#[from] PolarsError),
}

/// Sample workbook write failures.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("xlsx write error: {0}")]
    Xlsx(#[from] XlsxError),
    #[error("index overflow: {0}")]
    IndexOverflow(String),
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
