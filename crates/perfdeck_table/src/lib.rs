//! `perfdeck_table` v1:
//! Table model shared by the loader and the slide renderer.
//!
//! - `conf`      : layout constants and default presets
//! - `spec`      : column/table/format specs and errors
//! - `transform` : return-column rescaling and percent formatting
//! - `layout`    : column width estimation and allocation
//! - `util`      : cell value helpers
pub mod conf;
pub mod layout;
pub mod spec;
pub mod transform;
pub mod util;

pub use conf::{
    C_RETURN_COLUMN_MARKER, N_EMU_PER_INCH, N_EMU_PER_POINT, TUP_SCHEMA_COLUMNS,
    derive_default_cell_formats, derive_default_column_specs, derive_default_table_layout,
};
pub use layout::{
    LinearWidthEstimator, WidthEstimator, allocate_column_widths, estimate_display_length,
    estimate_natural_widths, plan_column_widths,
};
pub use spec::{
    EnumCellAlign, EnumCellAnchor, EnumColumnWidthRule, LayoutError, SpecCellFormat, SpecColumn,
    SpecColumnWidthPlan, SpecTableFormats, SpecTableLayout, TransformError,
};
pub use transform::{
    format_return_percent, is_return_column, scale_return_value, transform_return_columns,
};
pub use util::{derive_f64_from_any_value, derive_text_from_any_value};
