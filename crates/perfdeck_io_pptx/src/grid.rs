//! Table grid construction from the transformed performance table.

use perfdeck_table::{
    SpecCellFormat, SpecTableFormats, SpecTableLayout, WidthEstimator, derive_f64_from_any_value,
    derive_text_from_any_value, format_return_percent, is_return_column, plan_column_widths,
};
use polars::prelude::DataFrame;
use tracing::info;

use crate::spec::{RenderError, SpecTableCell, SpecTableGrid, SpecTableRow};

/// Render every body cell of the layout columns to its display text.
///
/// Returns one `Vec` per layout column, in row order.
pub fn derive_body_texts(
    df: &DataFrame,
    layout: &SpecTableLayout,
) -> Result<Vec<Vec<String>>, RenderError> {
    let mut l_texts_by_col = Vec::with_capacity(layout.columns.len());

    for spec_col in &layout.columns {
        let col = df
            .column(&spec_col.field)
            .map_err(|_| RenderError::MissingColumn(spec_col.field.clone()))?;
        let if_is_return_col = is_return_column(&spec_col.field);

        let mut l_texts = Vec::with_capacity(df.height());
        for n_idx_row in 0..df.height() {
            let value = col.get(n_idx_row)?;
            let c_text = if if_is_return_col {
                let Some(n_value) = derive_f64_from_any_value(value) else {
                    return Err(RenderError::NonNumericReturn {
                        column: spec_col.field.clone(),
                        row: n_idx_row,
                    });
                };
                format_return_percent(n_value)
            } else {
                derive_text_from_any_value(value)
            };
            l_texts.push(c_text);
        }
        l_texts_by_col.push(l_texts);
    }

    Ok(l_texts_by_col)
}

/// Build the header + body grid with allocated column widths.
///
/// The grid has `df.height() + 1` rows and `layout.columns.len()` columns.
pub fn build_table_grid(
    df: &DataFrame,
    layout: &SpecTableLayout,
    formats: &SpecTableFormats,
    estimator: &dyn WidthEstimator,
) -> Result<SpecTableGrid, RenderError> {
    let l_body_texts_by_col = derive_body_texts(df, layout)?;

    let l_width_texts_by_col: Vec<Vec<String>> = layout
        .columns
        .iter()
        .zip(&l_body_texts_by_col)
        .map(|(spec_col, l_body_texts)| {
            spec_col
                .header_lines()
                .into_iter()
                .map(str::to_string)
                .chain(l_body_texts.iter().cloned())
                .collect()
        })
        .collect();
    let plan_widths = plan_column_widths(layout, &l_width_texts_by_col, estimator)?;

    let l_fmts_header: Vec<SpecCellFormat> = layout
        .columns
        .iter()
        .map(|spec_col| {
            formats.header.with_(SpecCellFormat {
                align: Some(spec_col.align),
                ..Default::default()
            })
        })
        .collect();
    let l_fmts_body: Vec<SpecCellFormat> = layout
        .columns
        .iter()
        .map(|spec_col| {
            formats.body.with_(SpecCellFormat {
                align: Some(spec_col.align),
                ..Default::default()
            })
        })
        .collect();

    let mut l_rows = Vec::with_capacity(df.height() + 1);
    l_rows.push(SpecTableRow {
        height_emu: layout.height_row_header_emu,
        cells: layout
            .columns
            .iter()
            .zip(&l_fmts_header)
            .map(|(spec_col, fmt)| SpecTableCell {
                paragraphs: spec_col.header_lines().into_iter().map(str::to_string).collect(),
                format: fmt.clone(),
            })
            .collect(),
    });

    for n_idx_row in 0..df.height() {
        l_rows.push(SpecTableRow {
            height_emu: layout.height_row_body_emu,
            cells: l_body_texts_by_col
                .iter()
                .zip(&l_fmts_body)
                .map(|(l_texts, fmt)| SpecTableCell {
                    paragraphs: vec![l_texts[n_idx_row].clone()],
                    format: fmt.clone(),
                })
                .collect(),
        });
    }

    let grid = SpecTableGrid {
        widths_emu: plan_widths.widths_emu,
        rows: l_rows,
    };
    info!(
        rows = grid.n_rows(),
        cols = grid.n_cols(),
        width_emu = grid.width_emu(),
        "built table grid"
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use perfdeck_table::{
        EnumCellAlign, LayoutError, LinearWidthEstimator, SpecColumn, derive_default_cell_formats,
        derive_default_table_layout, transform_return_columns,
    };
    use polars::prelude::{Column, NamedFrom, PlSmallStr};

    fn create_frame(l_names: &[&str], rtn_3m_fund: &[f64]) -> DataFrame {
        let n_rows = l_names.len();
        let mut l_cols = vec![
            Column::new(
                PlSmallStr::from("fund_name"),
                l_names.iter().map(|val| val.to_string()).collect::<Vec<_>>(),
            ),
            Column::new(PlSmallStr::from("benchmark"), vec!["MSCI World".to_string(); n_rows]),
            Column::new(PlSmallStr::from("ref_code"), vec!["ALF001".to_string(); n_rows]),
            Column::new(PlSmallStr::from("3m_rtn_fund"), rtn_3m_fund.to_vec()),
        ];
        for c_name in [
            "3m_rtn_rel",
            "1yr_rtn_fund",
            "1yr_rtn_rel",
            "3yr_rtn_fund",
            "3yr_rtn_rel",
            "5yr_rtn_fund",
            "5yr_rtn_rel",
        ] {
            l_cols.push(Column::new(PlSmallStr::from(c_name), vec![0.01; n_rows]));
        }
        DataFrame::new(l_cols).expect("frame")
    }

    fn build_default(df: &DataFrame) -> Result<SpecTableGrid, RenderError> {
        build_table_grid(
            df,
            &derive_default_table_layout(),
            &derive_default_cell_formats(),
            &LinearWidthEstimator::default(),
        )
    }

    #[test]
    fn test_grid_renders_percent_and_identity_text() {
        let df = transform_return_columns(&create_frame(&["Alpha Fund"], &[0.0512]))
            .expect("transform");
        let grid = build_default(&df).expect("grid");

        assert_eq!(grid.n_rows(), 2);
        assert_eq!(grid.n_cols(), 11);
        assert_eq!(grid.rows[1].cells[0].paragraphs, vec!["Alpha Fund".to_string()]);
        assert_eq!(grid.rows[1].cells[3].paragraphs, vec!["5.1%".to_string()]);
        assert_eq!(grid.rows[1].cells[4].paragraphs, vec!["1.0%".to_string()]);
    }

    #[test]
    fn test_header_row_splits_lines_and_is_bold() {
        let df = transform_return_columns(&create_frame(&["Alpha Fund"], &[0.0512]))
            .expect("transform");
        let grid = build_default(&df).expect("grid");
        let layout = derive_default_table_layout();

        let row_header = &grid.rows[0];
        assert_eq!(row_header.cells.len(), layout.columns.len());
        assert_eq!(row_header.height_emu, layout.height_row_header_emu);
        assert_eq!(
            row_header.cells[3].paragraphs,
            vec!["3M".to_string(), "Fund".to_string()]
        );
        assert!(row_header.cells.iter().all(|cell| cell.format.bold == Some(true)));
        assert_eq!(row_header.cells[0].format.align, Some(EnumCellAlign::Left));
        assert_eq!(row_header.cells[3].format.align, Some(EnumCellAlign::Right));
        assert_eq!(grid.rows[1].cells[3].format.align, Some(EnumCellAlign::Right));
        assert_eq!(grid.rows[1].cells[0].format.bold, Some(false));
    }

    #[test]
    fn test_zero_records_give_header_only_grid() {
        let df = create_frame(&[], &[]);
        let grid = build_default(&df).expect("grid");
        assert_eq!(grid.n_rows(), 1);
        assert_eq!(grid.n_cols(), 11);
        assert!(grid.width_emu() <= derive_default_table_layout().width_total_emu);
    }

    #[test]
    fn test_widths_fill_budget() {
        let df = create_frame(&["Alpha Fund", "Gamma Emerging Markets"], &[0.01, 0.02]);
        let grid = build_default(&df).expect("grid");
        let layout = derive_default_table_layout();

        assert!(grid.width_emu() <= layout.width_total_emu);
        assert!(layout.width_total_emu - grid.width_emu() <= layout.count_auto() as i64);
        assert!(grid.widths_emu[3..].iter().all(|val| *val == layout.width_fixed_emu));
    }

    #[test]
    fn test_extra_frame_columns_are_not_rendered() {
        let mut df = create_frame(&["Alpha Fund"], &[0.0512]);
        df.with_column(Column::new(
            PlSmallStr::from("isin"),
            vec!["LU0000000001".to_string()],
        ))
        .expect("isin column");
        assert_eq!(df.width(), 12);

        let grid = build_default(&transform_return_columns(&df).expect("transform"))
            .expect("grid");
        assert_eq!(grid.n_cols(), 11);
        assert!(grid.rows.iter().all(|row| row.cells.len() == 11));
        assert!(grid.rows.iter().flat_map(|row| &row.cells).all(|cell| {
            cell.paragraphs
                .iter()
                .all(|c_text| c_text != "isin" && c_text != "LU0000000001")
        }));
    }

    #[test]
    fn test_missing_layout_column_is_rejected() {
        let df = create_frame(&["Alpha Fund"], &[0.01]);
        let mut layout = derive_default_table_layout();
        layout.columns.push(SpecColumn::numeric("10yr_rtn_fund", "10Y"));
        layout.width_fixed_emu = 1;

        let err = build_table_grid(
            &df,
            &layout,
            &derive_default_cell_formats(),
            &LinearWidthEstimator::default(),
        )
        .expect_err("must fail");
        assert!(matches!(err, RenderError::MissingColumn(c_name) if c_name == "10yr_rtn_fund"));
    }

    #[test]
    fn test_blank_auto_columns_surface_layout_error() {
        let df = create_frame(&[], &[]);
        let mut layout = derive_default_table_layout();
        for spec_col in layout.columns.iter_mut().filter(|col| !col.is_fixed()) {
            spec_col.header = String::new();
        }

        let err = build_table_grid(
            &df,
            &layout,
            &derive_default_cell_formats(),
            &LinearWidthEstimator::default(),
        )
        .expect_err("must fail");
        assert!(matches!(
            err,
            RenderError::Layout(LayoutError::ZeroNaturalWidth { count_auto: 3 })
        ));
    }
}
