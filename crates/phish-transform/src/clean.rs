use std::collections::BTreeMap;

use phish_model::{CellValue, ColumnName, ColumnRole, Table};

/// Token the source datasets use for an unknown value.
pub const MISSING_SENTINEL: &str = "?";

/// Strip leading/trailing whitespace from every cell of the categorical
/// columns.
///
/// Numeric columns (continuous/discrete roles) are left untouched; columns
/// without a recorded role are treated as categorical.
pub fn strip_whitespace(table: &mut Table, roles: &BTreeMap<ColumnName, ColumnRole>) {
    let textual: Vec<bool> = table
        .columns()
        .iter()
        .map(|column| {
            roles
                .get(column)
                .copied()
                .unwrap_or(ColumnRole::Categorical)
                == ColumnRole::Categorical
        })
        .collect();
    for row in table.rows_mut() {
        for (cell, is_textual) in row.iter_mut().zip(&textual) {
            if !is_textual {
                continue;
            }
            if let CellValue::Text(value) = cell {
                let trimmed = value.trim();
                if trimmed.len() != value.len() {
                    *cell = CellValue::text(trimmed);
                }
            }
        }
    }
}

/// Replace every cell equal to the literal sentinel with a missing marker,
/// uniformly across all columns.
pub fn replace_missing_sentinel(table: &mut Table, sentinel: &str) {
    for row in table.rows_mut() {
        for cell in row.iter_mut() {
            if cell.as_text() == Some(sentinel) {
                *cell = CellValue::Missing;
            }
        }
    }
}
