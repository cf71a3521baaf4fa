//! Default paths and run options.

use std::path::PathBuf;

use perfdeck_io_pptx::{C_TITLE_DEFAULT, SpecDeckWriteOptions, derive_default_deck_write_options};
use perfdeck_table::{
    SpecTableFormats, SpecTableLayout, derive_default_cell_formats, derive_default_table_layout,
};

/// Input workbook read when no path is given.
pub const C_PATH_INPUT_DEFAULT: &str = "dummy_data.xlsx";
/// Presentation written when no path is given.
pub const C_PATH_OUTPUT_DEFAULT: &str = "test.pptx";

/// Everything one report run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecRunOptions {
    pub path_input: PathBuf,
    pub path_output: PathBuf,
    /// Slide title.
    pub title: String,
    /// Worksheet to read; first worksheet when `None`.
    pub sheet_name: Option<String>,
    pub layout: SpecTableLayout,
    pub formats: SpecTableFormats,
    pub deck: SpecDeckWriteOptions,
}

impl Default for SpecRunOptions {
    fn default() -> Self {
        Self {
            path_input: PathBuf::from(C_PATH_INPUT_DEFAULT),
            path_output: PathBuf::from(C_PATH_OUTPUT_DEFAULT),
            title: C_TITLE_DEFAULT.to_string(),
            sheet_name: None,
            layout: derive_default_table_layout(),
            formats: derive_default_cell_formats(),
            deck: derive_default_deck_write_options(),
        }
    }
}
