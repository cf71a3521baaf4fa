//! `perfdeck_io_xlsx` v1:
//! Spreadsheet side of the report pipeline.
//!
//! - `conf`   : sample data presets
//! - `spec`   : records, load options and errors
//! - `util`   : schema checks and cell conversion
//! - `reader` : worksheet -> `DataFrame` loader
//! - `writer` : sample workbook writer
pub mod conf;
pub mod reader;
pub mod spec;
pub mod util;
pub mod writer;

pub use conf::derive_sample_fund_records;
pub use reader::{derive_dataframe_from_rows, load_performance_table};
pub use spec::{LoadError, SpecFundRecord, SpecLoadOptions, WriteError};
pub use util::{validate_schema_columns, validate_unique_columns};
pub use writer::write_sample_workbook;
