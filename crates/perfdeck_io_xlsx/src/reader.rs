//! Worksheet loader producing the typed performance table.

use std::path::Path;

use calamine::{Data, Reader, Sheets, open_workbook_auto};
use perfdeck_table::is_return_column;
use polars::prelude::{Column, DataFrame, NamedFrom, PlSmallStr};
use tracing::{debug, info, warn};

use crate::spec::{LoadError, SpecLoadOptions};
use crate::util::{
    convert_data_to_f64, convert_data_to_text, derive_extra_columns, is_blank_row,
    validate_schema_columns, validate_unique_columns,
};

/// Read the performance worksheet at `path` into a `DataFrame`.
///
/// Row 0 is the header row. Return columns become `Float64`, all other
/// columns `String`.
pub fn load_performance_table(
    path: &Path,
    options: &SpecLoadOptions,
) -> Result<DataFrame, LoadError> {
    let mut workbook: Sheets<_> = open_workbook_auto(path).map_err(|err| LoadError::Workbook {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    let l_sheet_names = workbook.sheet_names();
    let c_sheet_name = match &options.sheet_name {
        Some(c_name) => {
            if !l_sheet_names.contains(c_name) {
                return Err(LoadError::WorksheetNotFound(c_name.clone()));
            }
            c_name.clone()
        }
        None => l_sheet_names
            .first()
            .cloned()
            .ok_or_else(|| LoadError::WorksheetNotFound(path.display().to_string()))?,
    };

    let range = workbook
        .worksheet_range(&c_sheet_name)
        .map_err(|err| LoadError::Workbook {
            path: path.to_path_buf(),
            message: format!("sheet {c_sheet_name:?}: {err}"),
        })?;

    // The range starts at the first used cell, not at A1.
    let n_row_header = range
        .start()
        .map_or(1, |(n_row_start, _)| n_row_start as usize + 1);
    let l_rows: Vec<&[Data]> = range.rows().collect();
    let df = derive_dataframe_from_rows(&c_sheet_name, &l_rows, n_row_header)?;
    info!(
        path = %path.display(),
        sheet = c_sheet_name.as_str(),
        rows = df.height(),
        cols = df.width(),
        "loaded performance table"
    );
    Ok(df)
}

/// Convert raw worksheet rows (header first) into the typed table.
///
/// `row_header` is the one-based worksheet row of `rows[0]`; error rows are
/// reported relative to it. Columns with an empty header cell and fully blank
/// rows are skipped.
pub fn derive_dataframe_from_rows(
    sheet_name: &str,
    rows: &[&[Data]],
    row_header: usize,
) -> Result<DataFrame, LoadError> {
    let Some((l_header_cells, l_body_rows)) = rows.split_first() else {
        return Err(LoadError::EmptyWorksheet(sheet_name.to_string()));
    };

    let l_cols_idx_named: Vec<(usize, String)> = l_header_cells
        .iter()
        .enumerate()
        .map(|(n_idx, value)| (n_idx, convert_data_to_text(value).trim().to_string()))
        .filter(|(_, c_name)| !c_name.is_empty())
        .collect();
    if l_cols_idx_named.is_empty() {
        return Err(LoadError::EmptyWorksheet(sheet_name.to_string()));
    }

    let l_colnames: Vec<String> = l_cols_idx_named
        .iter()
        .map(|(_, c_name)| c_name.clone())
        .collect();
    validate_unique_columns(&l_colnames)?;
    validate_schema_columns(&l_colnames)?;
    for c_name in derive_extra_columns(&l_colnames) {
        warn!(column = c_name.as_str(), "column is not part of the report layout");
    }

    // One-based worksheet row numbers.
    let l_body_rows: Vec<(usize, &[Data])> = l_body_rows
        .iter()
        .enumerate()
        .map(|(n_idx, row)| (row_header + n_idx + 1, *row))
        .filter(|(n_row, row)| {
            let if_blank = is_blank_row(row);
            if if_blank {
                debug!(row = *n_row, "skipping blank row");
            }
            !if_blank
        })
        .collect();

    let mut l_cols = Vec::with_capacity(l_cols_idx_named.len());
    for (n_idx_col, c_name) in &l_cols_idx_named {
        let column = if is_return_column(c_name) {
            let mut l_values = Vec::with_capacity(l_body_rows.len());
            for (n_row, row) in &l_body_rows {
                let value = row.get(*n_idx_col).unwrap_or(&Data::Empty);
                let Some(n_value) = convert_data_to_f64(value) else {
                    return Err(LoadError::NonNumericReturn {
                        column: c_name.clone(),
                        row: *n_row,
                        value: convert_data_to_text(value),
                    });
                };
                l_values.push(n_value);
            }
            Column::new(PlSmallStr::from(c_name.as_str()), l_values)
        } else {
            let l_values: Vec<String> = l_body_rows
                .iter()
                .map(|(_, row)| convert_data_to_text(row.get(*n_idx_col).unwrap_or(&Data::Empty)))
                .collect();
            Column::new(PlSmallStr::from(c_name.as_str()), l_values)
        };
        l_cols.push(column);
    }

    Ok(DataFrame::new(l_cols)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conf::derive_sample_fund_records;
    use crate::writer::write_sample_workbook;
    use perfdeck_table::{TUP_SCHEMA_COLUMNS, derive_f64_from_any_value};
    use polars::prelude::AnyValue;

    fn create_header() -> Vec<Data> {
        TUP_SCHEMA_COLUMNS
            .iter()
            .map(|c_name| Data::String(c_name.to_string()))
            .collect()
    }

    fn create_row(name: &str, rtn_3m_fund: Data) -> Vec<Data> {
        let mut row = vec![
            Data::String(name.to_string()),
            Data::String("MSCI World".to_string()),
            Data::String("ALF001".to_string()),
            rtn_3m_fund,
        ];
        row.extend((0..7).map(|n_idx| Data::Float(n_idx as f64 / 100.0)));
        row
    }

    #[test]
    fn test_rows_become_typed_columns() {
        let header = create_header();
        let row = create_row("Alpha Fund", Data::Float(0.0512));
        let df = derive_dataframe_from_rows("s", &[&header, &row], 1).expect("frame");

        assert_eq!(df.height(), 1);
        assert_eq!(df.width(), 11);
        let col_name = df.column("fund_name").expect("fund_name");
        assert_eq!(col_name.get(0).expect("cell"), AnyValue::String("Alpha Fund"));
        let col_rtn = df.column("3m_rtn_fund").expect("3m_rtn_fund");
        assert_eq!(derive_f64_from_any_value(col_rtn.get(0).expect("cell")), Some(0.0512));
    }

    #[test]
    fn test_header_only_sheet_gives_empty_table() {
        let header = create_header();
        let df = derive_dataframe_from_rows("s", &[&header], 1).expect("frame");
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 11);
    }

    #[test]
    fn test_blank_rows_are_skipped() {
        let header = create_header();
        let row = create_row("Alpha Fund", Data::Int(1));
        let blank = vec![Data::Empty; 11];
        let df = derive_dataframe_from_rows("s", &[&header, &blank, &row], 1).expect("frame");
        assert_eq!(df.height(), 1);
    }

    #[test]
    fn test_non_numeric_return_reports_worksheet_row() {
        let header = create_header();
        let row_ok = create_row("Alpha Fund", Data::Float(0.01));
        let row_bad = create_row("Beta Fund", Data::String("n/a".to_string()));
        let err = derive_dataframe_from_rows("s", &[&header, &row_ok, &row_bad], 1)
            .expect_err("must fail");
        match err {
            LoadError::NonNumericReturn { column, row, value } => {
                assert_eq!(column, "3m_rtn_fund");
                assert_eq!(row, 3);
                assert_eq!(value, "n/a");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_numeric_text_in_return_column_is_rejected() {
        let header = create_header();
        let row = create_row("Alpha Fund", Data::String("0.0512".to_string()));
        let err = derive_dataframe_from_rows("s", &[&header, &row], 1).expect_err("must fail");
        match err {
            LoadError::NonNumericReturn { column, row, value } => {
                assert_eq!(column, "3m_rtn_fund");
                assert_eq!(row, 2);
                assert_eq!(value, "0.0512");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_error_rows_follow_header_offset() {
        let header = create_header();
        let row_bad = create_row("Beta Fund", Data::Empty);
        let err =
            derive_dataframe_from_rows("s", &[&header, &row_bad], 4).expect_err("must fail");
        assert!(matches!(err, LoadError::NonNumericReturn { row: 5, .. }));
    }

    #[test]
    fn test_extra_columns_are_carried_through() {
        let mut header = create_header();
        header.push(Data::String("isin".to_string()));
        let mut row = create_row("Alpha Fund", Data::Float(0.0512));
        row.push(Data::String("LU0000000001".to_string()));

        let df = derive_dataframe_from_rows("s", &[&header, &row], 1).expect("frame");
        assert_eq!(df.width(), 12);
        let col_isin = df.column("isin").expect("isin");
        assert_eq!(col_isin.get(0).expect("cell"), AnyValue::String("LU0000000001"));
    }

    #[test]
    fn test_missing_schema_column_is_rejected() {
        let header: Vec<Data> = create_header().into_iter().take(10).collect();
        let err = derive_dataframe_from_rows("s", &[&header], 1).expect_err("must fail");
        assert!(matches!(err, LoadError::SchemaMismatch { .. }));
    }

    #[test]
    fn test_empty_sheet_is_rejected() {
        let err = derive_dataframe_from_rows("s", &[], 1).expect_err("must fail");
        assert!(matches!(err, LoadError::EmptyWorksheet(_)));
    }

    #[test]
    fn test_load_sample_workbook_round_trip() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("dummy_data.xlsx");
        let l_records = derive_sample_fund_records();
        write_sample_workbook(&path, &l_records).expect("write sample");

        let df = load_performance_table(&path, &SpecLoadOptions::default()).expect("load");
        assert_eq!(df.height(), l_records.len());
        assert_eq!(df.get_column_names_str(), TUP_SCHEMA_COLUMNS.to_vec());

        let col_ref = df.column("ref_code").expect("ref_code");
        assert_eq!(col_ref.get(1).expect("cell"), AnyValue::String("BIF014"));
    }

    #[test]
    fn test_missing_file_is_workbook_error() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let err = load_performance_table(&tmp.path().join("absent.xlsx"), &SpecLoadOptions::default())
            .expect_err("must fail");
        assert!(matches!(err, LoadError::Workbook { .. }));
    }

    #[test]
    fn test_unknown_sheet_is_rejected() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("dummy_data.xlsx");
        write_sample_workbook(&path, &derive_sample_fund_records()).expect("write sample");

        let options = SpecLoadOptions {
            sheet_name: Some("missing".to_string()),
        };
        let err = load_performance_table(&path, &options).expect_err("must fail");
        assert!(matches!(err, LoadError::WorksheetNotFound(_)));
    }

    #[test]
    fn test_leading_blank_row_shifts_reported_row() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("offset.xlsx");

        let mut workbook = rust_xlsxwriter::Workbook::new();
        let worksheet = workbook.add_worksheet();
        // Row 1 stays empty; the header sits on worksheet row 2.
        for (n_idx, c_name) in TUP_SCHEMA_COLUMNS.iter().enumerate() {
            worksheet
                .write_string(1, n_idx as u16, *c_name)
                .expect("header");
        }
        for n_idx in 0..3u16 {
            worksheet.write_string(2, n_idx, "Alpha Fund").expect("identity");
        }
        worksheet.write_string(2, 3, "0.0512").expect("text return");
        for n_idx in 4..11u16 {
            worksheet.write_number(2, n_idx, 0.01).expect("return");
        }
        workbook.save(&path).expect("save");

        let err = load_performance_table(&path, &SpecLoadOptions::default())
            .expect_err("must fail");
        match err {
            LoadError::NonNumericReturn { column, row, .. } => {
                assert_eq!(column, "3m_rtn_fund");
                assert_eq!(row, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
