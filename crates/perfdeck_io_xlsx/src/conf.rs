//! Sample data presets.

use crate::spec::SpecFundRecord;

/// Worksheet name used by the sample workbook.
pub const C_SHEET_NAME_SAMPLE: &str = "performance";
/// Number format applied to sample return cells.
pub const C_NUM_FORMAT_RETURN: &str = "0.0000";

/// Deterministic demo funds in the expected input schema.
pub fn derive_sample_fund_records() -> Vec<SpecFundRecord> {
    vec![
        SpecFundRecord {
            fund_name: "Alpha Fund".to_string(),
            benchmark: "MSCI World".to_string(),
            ref_code: "ALF001".to_string(),
            rtn_3m_fund: 0.0512,
            rtn_3m_rel: 0.0034,
            rtn_1yr_fund: 0.1245,
            rtn_1yr_rel: 0.0112,
            rtn_3yr_fund: 0.0821,
            rtn_3yr_rel: -0.0045,
            rtn_5yr_fund: 0.0917,
            rtn_5yr_rel: 0.0068,
        },
        SpecFundRecord {
            fund_name: "Beta Income Fund".to_string(),
            benchmark: "Bloomberg Global Aggregate".to_string(),
            ref_code: "BIF014".to_string(),
            rtn_3m_fund: 0.0118,
            rtn_3m_rel: -0.0021,
            rtn_1yr_fund: 0.0345,
            rtn_1yr_rel: 0.0009,
            rtn_3yr_fund: -0.0132,
            rtn_3yr_rel: 0.0041,
            rtn_5yr_fund: 0.0154,
            rtn_5yr_rel: 0.0023,
        },
        SpecFundRecord {
            fund_name: "Gamma Emerging Markets".to_string(),
            benchmark: "MSCI EM".to_string(),
            ref_code: "GEM203".to_string(),
            rtn_3m_fund: -0.0276,
            rtn_3m_rel: -0.0102,
            rtn_1yr_fund: 0.0631,
            rtn_1yr_rel: -0.0187,
            rtn_3yr_fund: 0.0215,
            rtn_3yr_rel: 0.0077,
            rtn_5yr_fund: 0.0448,
            rtn_5yr_rel: 0.0019,
        },
    ]
}
