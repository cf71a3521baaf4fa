//! Sample workbook writer.

use std::path::Path;

use perfdeck_table::TUP_SCHEMA_COLUMNS;
use rust_xlsxwriter::{Format, FormatAlign, Workbook};
use tracing::info;

use crate::conf::{C_NUM_FORMAT_RETURN, C_SHEET_NAME_SAMPLE};
use crate::spec::{SpecFundRecord, WriteError};

/// Write `records` to `path` in the expected input schema.
pub fn write_sample_workbook(path: &Path, records: &[SpecFundRecord]) -> Result<(), WriteError> {
    let mut workbook = Workbook::new();
    let fmt_header = Format::new().set_bold().set_align(FormatAlign::Center);
    let fmt_return = Format::new().set_num_format(C_NUM_FORMAT_RETURN);

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(C_SHEET_NAME_SAMPLE)?;

    for (n_idx_col, c_name) in TUP_SCHEMA_COLUMNS.iter().enumerate() {
        let n_col = cast_col_num(n_idx_col)?;
        worksheet.write_string_with_format(0, n_col, *c_name, &fmt_header)?;
        worksheet.set_column_width(n_col, usize::max(12, c_name.len() + 2) as f64)?;
    }

    for (n_idx_row, record) in records.iter().enumerate() {
        let n_row = cast_row_num(n_idx_row + 1)?;
        let l_identity = record.identity_values();
        let l_returns = record.return_values();

        for (n_idx_col, c_value) in l_identity.iter().enumerate() {
            worksheet.write_string(n_row, cast_col_num(n_idx_col)?, *c_value)?;
        }
        for (n_offset, n_value) in l_returns.iter().enumerate() {
            worksheet.write_number_with_format(
                n_row,
                cast_col_num(l_identity.len() + n_offset)?,
                *n_value,
                &fmt_return,
            )?;
        }
    }

    workbook.save(path)?;
    info!(path = %path.display(), rows = records.len(), "wrote sample workbook");
    Ok(())
}

fn cast_row_num(value: usize) -> Result<u32, WriteError> {
    u32::try_from(value).map_err(|_| WriteError::IndexOverflow(format!("row index {value}")))
}

fn cast_col_num(value: usize) -> Result<u16, WriteError> {
    u16::try_from(value).map_err(|_| WriteError::IndexOverflow(format!("column index {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conf::derive_sample_fund_records;

    #[test]
    fn test_write_sample_workbook_creates_file() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("sample.xlsx");
        write_sample_workbook(&path, &derive_sample_fund_records()).expect("write");
        assert!(path.exists());
    }

    #[test]
    fn test_write_header_only_workbook() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("empty.xlsx");
        write_sample_workbook(&path, &[]).expect("write");
        assert!(path.exists());
    }
}
