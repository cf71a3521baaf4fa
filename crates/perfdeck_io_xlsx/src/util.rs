//! Stateless helpers used by the loader.

use std::collections::{BTreeMap, BTreeSet};

use calamine::Data;
use perfdeck_table::TUP_SCHEMA_COLUMNS;

use crate::spec::LoadError;

////////////////////////////////////////////////////////////////////////////////
// #region SchemaValidation

/// Validate that `columns` has no duplicated names.
pub fn validate_unique_columns(columns: &[String]) -> Result<(), LoadError> {
    if columns.len() == columns.iter().collect::<BTreeSet<_>>().len() {
        return Ok(());
    }

    let mut dict_pos: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (n_idx, c_name) in columns.iter().enumerate() {
        dict_pos.entry(c_name).or_default().push(n_idx);
    }

    let c_msg = dict_pos
        .iter()
        .filter_map(|(c_name, l_pos)| {
            if l_pos.len() > 1 {
                Some(format!("{c_name:?} x{} at indices {:?}", l_pos.len(), l_pos))
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("; ");

    Err(LoadError::DuplicateColumns(format!(
        "Duplicate column names detected: {c_msg}"
    )))
}

/// Validate that every expected schema column is present.
pub fn validate_schema_columns(columns: &[String]) -> Result<(), LoadError> {
    let set_cols: BTreeSet<&str> = columns.iter().map(String::as_str).collect();
    let l_missing: Vec<String> = TUP_SCHEMA_COLUMNS
        .iter()
        .filter(|c_name| !set_cols.contains(*c_name))
        .map(|c_name| c_name.to_string())
        .collect();

    if l_missing.is_empty() {
        Ok(())
    } else {
        Err(LoadError::SchemaMismatch { missing: l_missing })
    }
}

/// Names present in `columns` but not part of the expected schema.
pub fn derive_extra_columns(columns: &[String]) -> Vec<String> {
    columns
        .iter()
        .filter(|c_name| !TUP_SCHEMA_COLUMNS.contains(&c_name.as_str()))
        .cloned()
        .collect()
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region CellConversion

/// Direct string conversion of a worksheet cell; empty cells become `""`.
pub fn convert_data_to_text(value: &Data) -> String {
    match value {
        Data::Empty => String::new(),
        Data::String(val) => val.clone(),
        _ => value.to_string(),
    }
}

/// Numeric value of a worksheet cell; only float and integer cells count.
pub fn convert_data_to_f64(value: &Data) -> Option<f64> {
    match value {
        Data::Float(val) => Some(*val),
        Data::Int(val) => Some(*val as f64),
        _ => None,
    }
}

/// Whether every cell of a row is empty.
pub fn is_blank_row(row: &[Data]) -> bool {
    row.iter().all(|value| matches!(value, Data::Empty))
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
