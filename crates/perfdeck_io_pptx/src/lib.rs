//! `perfdeck_io_pptx` v1:
//! Slide-deck renderer for the performance table.
//!
//! - `conf`   : slide geometry constants and default presets
//! - `spec`   : grid/options/report models and errors
//! - `grid`   : `DataFrame` -> table grid with allocated widths
//! - `xml`    : OOXML part builders
//! - `writer` : buffered `.pptx` package writer
pub mod conf;
pub mod grid;
pub mod spec;
pub mod writer;
pub mod xml;

pub use conf::{C_TITLE_DEFAULT, derive_default_deck_write_options};
pub use grid::{build_table_grid, derive_body_texts};
pub use spec::{
    RenderError, SpecDeckReport, SpecDeckWriteOptions, SpecShapeBox, SpecTableCell, SpecTableGrid,
    SpecTableRow,
};
pub use writer::PptxWriter;
