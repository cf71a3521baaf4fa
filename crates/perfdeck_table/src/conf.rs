//! Layout constants and default preset factories.

use crate::spec::{
    EnumCellAnchor, SpecCellFormat, SpecColumn, SpecTableFormats, SpecTableLayout,
};

/// English Metric Units per inch.
pub const N_EMU_PER_INCH: i64 = 914_400;
/// English Metric Units per typographic point.
pub const N_EMU_PER_POINT: i64 = 12_700;

/// Total table width budget (9 in).
pub const N_WIDTH_TABLE_EMU: i64 = 9 * N_EMU_PER_INCH;
/// Width of every fixed (return) column (0.75 in).
pub const N_WIDTH_COL_FIXED_EMU: i64 = 3 * N_EMU_PER_INCH / 4;
/// Estimated width of one rendered character (0.09 in).
pub const N_WIDTH_PER_CHAR_EMU: f64 = 0.09 * N_EMU_PER_INCH as f64;
/// Header row height (0.6 in).
pub const N_HEIGHT_ROW_HEADER_EMU: i64 = 6 * N_EMU_PER_INCH / 10;
/// Body row height (0.3 in).
pub const N_HEIGHT_ROW_BODY_EMU: i64 = 3 * N_EMU_PER_INCH / 10;

/// Header font size in points.
pub const N_FONT_SIZE_HEADER_PT: i64 = 10;
/// Body font size in points.
pub const N_FONT_SIZE_BODY_PT: i64 = 9;
/// Table font family.
pub const C_FONT_NAME_TABLE: &str = "Arial";

/// Substring that marks a column as a return column.
pub const C_RETURN_COLUMN_MARKER: &str = "rtn";

/// Column names the input spreadsheet must provide.
pub const TUP_SCHEMA_COLUMNS: [&str; 11] = [
    "fund_name",
    "benchmark",
    "ref_code",
    "3m_rtn_fund",
    "3m_rtn_rel",
    "1yr_rtn_fund",
    "1yr_rtn_rel",
    "3yr_rtn_fund",
    "3yr_rtn_rel",
    "5yr_rtn_fund",
    "5yr_rtn_rel",
];

/// Default report columns: three identity columns followed by eight return columns.
pub fn derive_default_column_specs() -> Vec<SpecColumn> {
    vec![
        SpecColumn::identity("fund_name", "Fund Name"),
        SpecColumn::identity("benchmark", "Benchmark"),
        SpecColumn::identity("ref_code", "Ref\nCode"),
        SpecColumn::numeric("3m_rtn_fund", "3M\nFund"),
        SpecColumn::numeric("3m_rtn_rel", "3M\nRelative"),
        SpecColumn::numeric("1yr_rtn_fund", "1Y\nFund"),
        SpecColumn::numeric("1yr_rtn_rel", "1Y\nRelative"),
        SpecColumn::numeric("3yr_rtn_fund", "3Y Ann.\nFund"),
        SpecColumn::numeric("3yr_rtn_rel", "3Y Ann.\nRelative"),
        SpecColumn::numeric("5yr_rtn_fund", "5Y Ann.\nFund"),
        SpecColumn::numeric("5yr_rtn_rel", "5Y Ann.\nRelative"),
    ]
}

/// Default table layout built from [`derive_default_column_specs`].
pub fn derive_default_table_layout() -> SpecTableLayout {
    SpecTableLayout {
        columns: derive_default_column_specs(),
        width_total_emu: N_WIDTH_TABLE_EMU,
        width_fixed_emu: N_WIDTH_COL_FIXED_EMU,
        height_row_header_emu: N_HEIGHT_ROW_HEADER_EMU,
        height_row_body_emu: N_HEIGHT_ROW_BODY_EMU,
    }
}

/// Build default header/body cell formats.
pub fn derive_default_cell_formats() -> SpecTableFormats {
    let cfg_base_fmt_spec = SpecCellFormat {
        font_name: Some(C_FONT_NAME_TABLE.to_string()),
        font_size: Some(N_FONT_SIZE_BODY_PT),
        bold: Some(false),
        anchor: Some(EnumCellAnchor::Middle),
        ..Default::default()
    };

    SpecTableFormats {
        header: cfg_base_fmt_spec.with_(SpecCellFormat {
            font_size: Some(N_FONT_SIZE_HEADER_PT),
            bold: Some(true),
            ..Default::default()
        }),
        body: cfg_base_fmt_spec,
    }
}
