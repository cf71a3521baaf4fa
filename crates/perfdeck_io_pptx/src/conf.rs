//! Slide geometry constants and default presets.

use perfdeck_table::N_EMU_PER_INCH;

use crate::spec::{SpecDeckWriteOptions, SpecShapeBox};

/// 4:3 slide width (10 in).
pub const N_WIDTH_SLIDE_EMU: i64 = 10 * N_EMU_PER_INCH;
/// 4:3 slide height (7.5 in).
pub const N_HEIGHT_SLIDE_EMU: i64 = 15 * N_EMU_PER_INCH / 2;
/// Table frame offset from the left slide edge (0.5 in).
pub const N_LEFT_TABLE_EMU: i64 = N_EMU_PER_INCH / 2;
/// Table frame offset from the top slide edge (1.5 in).
pub const N_TOP_TABLE_EMU: i64 = 3 * N_EMU_PER_INCH / 2;
/// Title font size in points.
pub const N_FONT_SIZE_TITLE_PT: i64 = 28;
/// Theme font.
pub const C_FONT_NAME_THEME: &str = "Calibri";
/// Slide title used when none is given.
pub const C_TITLE_DEFAULT: &str = "Fund Performance";

/// Build default presentation geometry.
pub fn derive_default_deck_write_options() -> SpecDeckWriteOptions {
    SpecDeckWriteOptions::default()
}

impl Default for SpecDeckWriteOptions {
    fn default() -> Self {
        Self {
            width_slide_emu: N_WIDTH_SLIDE_EMU,
            height_slide_emu: N_HEIGHT_SLIDE_EMU,
            box_title: SpecShapeBox {
                left: N_LEFT_TABLE_EMU,
                top: N_EMU_PER_INCH / 4,
                width: N_WIDTH_SLIDE_EMU - 2 * N_LEFT_TABLE_EMU,
                height: N_EMU_PER_INCH,
            },
            font_size_title: N_FONT_SIZE_TITLE_PT,
            left_table_emu: N_LEFT_TABLE_EMU,
            top_table_emu: N_TOP_TABLE_EMU,
            font_name_theme: C_FONT_NAME_THEME.to_string(),
        }
    }
}
