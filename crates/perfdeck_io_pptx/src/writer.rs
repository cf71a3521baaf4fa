//! Presentation writer kernel that packages one table slide into a `.pptx`.

use std::io::{Cursor, Write};
use std::path::PathBuf;

use tracing::{info, warn};
use zip::ZipWriter;
use zip::write::FileOptions;

use crate::spec::{RenderError, SpecDeckReport, SpecDeckWriteOptions, SpecTableGrid};
use crate::xml::{
    C_PART_CONTENT_TYPES, C_PART_PRESENTATION, C_PART_PRESENTATION_RELS, C_PART_ROOT_RELS,
    C_PART_SLIDE, C_PART_SLIDE_LAYOUT, C_PART_SLIDE_LAYOUT_RELS, C_PART_SLIDE_MASTER,
    C_PART_SLIDE_MASTER_RELS, C_PART_SLIDE_RELS, C_PART_THEME, derive_content_types_xml,
    derive_presentation_rels_xml, derive_presentation_xml, derive_root_rels_xml,
    derive_slide_layout_rels_xml, derive_slide_layout_xml, derive_slide_master_rels_xml,
    derive_slide_master_xml, derive_slide_rels_xml, derive_slide_xml, derive_theme_xml,
};

/// Stateful presentation writer.
pub struct PptxWriter {
    path_file_out: PathBuf,
    write_options: SpecDeckWriteOptions,
    slide_xml: Option<String>,
    report: SpecDeckReport,
    if_closed: bool,
}

impl PptxWriter {
    /// Create writer bound to output path and geometry options.
    ///
    /// The presentation is buffered in memory until [`Self::close`] is called.
    pub fn new(path_file_out: PathBuf, write_options: SpecDeckWriteOptions) -> Self {
        Self {
            report: SpecDeckReport {
                path_file_out: path_file_out.clone(),
                ..Default::default()
            },
            path_file_out,
            write_options,
            slide_xml: None,
            if_closed: false,
        }
    }

    /// Return output file path as string.
    pub fn file_out(&self) -> String {
        self.path_file_out.to_string_lossy().to_string()
    }

    /// Return snapshot of the write report.
    pub fn report(&self) -> SpecDeckReport {
        self.report.clone()
    }

    /// Add the single slide: title placeholder plus the table grid.
    pub fn write_table_slide(&mut self, title: &str, grid: &SpecTableGrid) -> Result<(), RenderError> {
        if self.if_closed {
            return Err(RenderError::Closed);
        }
        if self.slide_xml.is_some() {
            return Err(RenderError::SlideAlreadyWritten);
        }

        let n_right = self.write_options.left_table_emu + grid.width_emu();
        if n_right > self.write_options.width_slide_emu {
            self.report.warn(format!(
                "Table overflows slide width: right edge {n_right} > {} EMU.",
                self.write_options.width_slide_emu
            ));
        }
        let n_bottom = self.write_options.top_table_emu + grid.height_emu();
        if n_bottom > self.write_options.height_slide_emu {
            self.report.warn(format!(
                "Table overflows slide height: bottom edge {n_bottom} > {} EMU.",
                self.write_options.height_slide_emu
            ));
        }
        for c_msg in &self.report.warnings {
            warn!("{c_msg}");
        }

        self.slide_xml = Some(derive_slide_xml(&self.write_options, title, grid));
        self.report.n_rows = grid.n_rows();
        self.report.n_cols = grid.n_cols();
        self.report.widths_emu = grid.widths_emu.clone();
        Ok(())
    }

    /// Serialize the package and write it to disk. Idempotent.
    pub fn close(&mut self) -> Result<(), RenderError> {
        if self.if_closed {
            return Ok(());
        }
        let Some(c_slide_xml) = &self.slide_xml else {
            return Err(RenderError::NoSlide);
        };

        let v_package = self.derive_package_bytes(c_slide_xml)?;
        std::fs::write(&self.path_file_out, v_package).map_err(|err| RenderError::Io {
            path: self.path_file_out.clone(),
            source: err,
        })?;
        self.if_closed = true;

        info!(path = %self.path_file_out.display(), "saved presentation");
        Ok(())
    }

    fn derive_package_bytes(&self, slide_xml: &str) -> Result<Vec<u8>, RenderError> {
        let l_parts = [
            (C_PART_CONTENT_TYPES, derive_content_types_xml()),
            (C_PART_ROOT_RELS, derive_root_rels_xml()),
            (C_PART_PRESENTATION, derive_presentation_xml(&self.write_options)),
            (C_PART_PRESENTATION_RELS, derive_presentation_rels_xml()),
            (C_PART_SLIDE_MASTER, derive_slide_master_xml(&self.write_options)),
            (C_PART_SLIDE_MASTER_RELS, derive_slide_master_rels_xml()),
            (C_PART_SLIDE_LAYOUT, derive_slide_layout_xml(&self.write_options)),
            (C_PART_SLIDE_LAYOUT_RELS, derive_slide_layout_rels_xml()),
            (C_PART_THEME, derive_theme_xml(&self.write_options)),
            (C_PART_SLIDE, slide_xml.to_string()),
            (C_PART_SLIDE_RELS, derive_slide_rels_xml()),
        ];

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            FileOptions::<()>::default().compression_method(zip::CompressionMethod::Deflated);
        for (c_part, c_xml) in l_parts {
            zip.start_file(c_part, options)?;
            zip.write_all(c_xml.as_bytes())
                .map_err(|err| RenderError::Io {
                    path: self.path_file_out.clone(),
                    source: err,
                })?;
        }

        Ok(zip.finish()?.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{SpecTableCell, SpecTableRow};
    use perfdeck_table::SpecCellFormat;
    use std::io::Read;
    use zip::ZipArchive;

    fn create_grid(n_rows_body: usize) -> SpecTableGrid {
        let cell = SpecTableCell {
            paragraphs: vec!["x".to_string()],
            format: SpecCellFormat::default(),
        };
        let mut rows = vec![SpecTableRow {
            height_emu: 100,
            cells: vec![cell.clone(), cell.clone()],
        }];
        rows.extend((0..n_rows_body).map(|_| SpecTableRow {
            height_emu: 50,
            cells: vec![cell.clone(), cell.clone()],
        }));
        SpecTableGrid {
            widths_emu: vec![1000, 2000],
            rows,
        }
    }

    fn read_part(path: &std::path::Path, part: &str) -> String {
        let file = std::fs::File::open(path).expect("open pptx");
        let mut archive = ZipArchive::new(file).expect("zip archive");
        let mut entry = archive.by_name(part).expect("part");
        let mut c_text = String::new();
        entry.read_to_string(&mut c_text).expect("read part");
        c_text
    }

    #[test]
    fn test_close_writes_all_parts() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("deck.pptx");
        let mut writer = PptxWriter::new(path.clone(), SpecDeckWriteOptions::default());
        writer.write_table_slide("Title", &create_grid(2)).expect("slide");
        writer.close().expect("close");

        let file = std::fs::File::open(&path).expect("open pptx");
        let archive = ZipArchive::new(file).expect("zip archive");
        assert_eq!(archive.len(), 11);

        let c_slide = read_part(&path, C_PART_SLIDE);
        assert_eq!(c_slide.matches("<a:tr ").count(), 3);
        assert!(c_slide.contains("<a:t>Title</a:t>"));

        let report = writer.report();
        assert_eq!(report.n_rows, 3);
        assert_eq!(report.n_cols, 2);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_nothing_is_written_before_close() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("deck.pptx");
        let mut writer = PptxWriter::new(path.clone(), SpecDeckWriteOptions::default());
        writer.write_table_slide("Title", &create_grid(0)).expect("slide");
        assert!(!path.exists());
    }

    #[test]
    fn test_close_is_idempotent_and_blocks_writes() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("deck.pptx");
        let mut writer = PptxWriter::new(path, SpecDeckWriteOptions::default());
        writer.write_table_slide("Title", &create_grid(1)).expect("slide");
        writer.close().expect("close");
        writer.close().expect("close again");

        let err = writer.write_table_slide("Again", &create_grid(1)).expect_err("must fail");
        assert!(matches!(err, RenderError::Closed));
    }

    #[test]
    fn test_second_slide_and_empty_close_are_rejected() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let mut writer = PptxWriter::new(tmp.path().join("deck.pptx"), SpecDeckWriteOptions::default());
        assert!(matches!(writer.close().expect_err("must fail"), RenderError::NoSlide));

        writer.write_table_slide("One", &create_grid(1)).expect("slide");
        let err = writer.write_table_slide("Two", &create_grid(1)).expect_err("must fail");
        assert!(matches!(err, RenderError::SlideAlreadyWritten));
    }

    #[test]
    fn test_tall_table_reports_overflow_warning() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let options = SpecDeckWriteOptions {
            height_slide_emu: 200,
            top_table_emu: 0,
            ..SpecDeckWriteOptions::default()
        };
        let mut writer = PptxWriter::new(tmp.path().join("deck.pptx"), options);
        writer.write_table_slide("Title", &create_grid(3)).expect("slide");
        assert_eq!(writer.report().warnings.len(), 1);
    }
}
