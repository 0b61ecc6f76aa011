use phish_model::Table;

use crate::TransformError;

/// Target value that maps to label `0`; every other value maps to `1`.
///
/// This binarization is a fixed convention of this system, not a
/// configurable rule.
pub const NEGATIVE_SENTINEL: &str = "-1";

/// Remove the target column from `table` and binarize it into labels.
///
/// A missing target cell is not the negative sentinel and therefore maps
/// to `1`, matching the upstream convention.
pub fn extract_target(mut table: Table, target_column: &str) -> Result<(Table, Vec<u8>), TransformError> {
    let cells = table
        .take_column(target_column)
        .map_err(|_| TransformError::TargetNotFound(target_column.to_string()))?;
    let labels = cells
        .iter()
        .map(|cell| u8::from(cell.as_text() != Some(NEGATIVE_SENTINEL)))
        .collect();
    Ok((table, labels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use phish_model::{CellValue, ColumnName};

    fn table_with_targets(targets: &[CellValue]) -> Table {
        let mut table = Table::new(vec![
            ColumnName::new("A").unwrap(),
            ColumnName::new("Result").unwrap(),
        ]);
        for (index, target) in targets.iter().enumerate() {
            table
                .push_row(vec![CellValue::text(index.to_string()), target.clone()])
                .unwrap();
        }
        table
    }

    #[test]
    fn negative_sentinel_maps_to_zero_everything_else_to_one() {
        let table = table_with_targets(&[
            CellValue::text("-1"),
            CellValue::text("1"),
            CellValue::text("0"),
            CellValue::Missing,
        ]);
        let (features, labels) = extract_target(table, "Result").unwrap();
        assert_eq!(labels, vec![0, 1, 1, 1]);
        assert_eq!(features.width(), 1);
        assert_eq!(features.height(), labels.len());
    }

    #[test]
    fn missing_target_column_is_an_error() {
        let table = table_with_targets(&[CellValue::text("-1")]);
        let err = extract_target(table, "Label").unwrap_err();
        assert!(matches!(err, TransformError::TargetNotFound(_)));
    }
}
