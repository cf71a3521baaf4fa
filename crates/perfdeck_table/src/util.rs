//! Stateless cell value helpers.

use polars::prelude::AnyValue;

/// Read a numeric cell as `f64`; numeric strings are parsed, everything else is `None`.
pub fn derive_f64_from_any_value(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::UInt32(val) => Some(val as f64),
        AnyValue::UInt64(val) => Some(val as f64),
        AnyValue::Int32(val) => Some(val as f64),
        AnyValue::Int64(val) => Some(val as f64),
        AnyValue::Float32(val) => Some(val as f64),
        AnyValue::Float64(val) => Some(val),
        AnyValue::String(val) => val.trim().parse::<f64>().ok(),
        AnyValue::StringOwned(val) => val.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Direct string conversion of a cell; null becomes an empty string.
pub fn derive_text_from_any_value(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(val) => val.to_string(),
        AnyValue::StringOwned(val) => val.to_string(),
        AnyValue::Float64(val) => val.to_string(),
        AnyValue::Int64(val) => val.to_string(),
        _ => value.to_string(),
    }
}
