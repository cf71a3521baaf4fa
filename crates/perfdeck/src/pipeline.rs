//! One-shot report pipeline.

use std::path::Path;

use anyhow::{Context, Result};
use perfdeck_io_pptx::{PptxWriter, SpecDeckReport, build_table_grid};
use perfdeck_io_xlsx::{
    SpecLoadOptions, derive_sample_fund_records, load_performance_table, write_sample_workbook,
};
use perfdeck_table::{LinearWidthEstimator, transform_return_columns};
use tracing::info;

use crate::conf::SpecRunOptions;

/// Load, transform, lay out and render the input workbook into one slide.
///
/// The output file is only written once every stage succeeded.
pub fn run_report(options: &SpecRunOptions) -> Result<SpecDeckReport> {
    let df_raw = load_performance_table(
        &options.path_input,
        &SpecLoadOptions {
            sheet_name: options.sheet_name.clone(),
        },
    )
    .with_context(|| format!("loading {}", options.path_input.display()))?;

    let df = transform_return_columns(&df_raw).context("rescaling return columns")?;

    let grid = build_table_grid(
        &df,
        &options.layout,
        &options.formats,
        &LinearWidthEstimator::default(),
    )
    .context("building table grid")?;

    let mut writer = PptxWriter::new(options.path_output.clone(), options.deck.clone());
    writer
        .write_table_slide(&options.title, &grid)
        .context("rendering table slide")?;
    writer
        .close()
        .with_context(|| format!("saving {}", writer.file_out()))?;

    let report = writer.report();
    info!(rows = report.n_rows, cols = report.n_cols, "report complete");
    Ok(report)
}

/// Write the demo workbook; returns the number of fund rows written.
pub fn run_sample(path: &Path) -> Result<usize> {
    let l_records = derive_sample_fund_records();
    write_sample_workbook(path, &l_records)
        .with_context(|| format!("writing sample workbook {}", path.display()))?;
    Ok(l_records.len())
}
