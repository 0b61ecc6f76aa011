use std::collections::BTreeSet;

use crate::{ColumnName, ModelError};

/// A single cell of a delimited dataset.
///
/// All source data arrives as text; numeric interpretation happens at the
/// consumer (role inference, the trainer), never here.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Missing,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Missing => None,
        }
    }
}

/// An in-memory tabular dataset with an ordered column header.
///
/// Rows are positional: `rows[i][j]` is the cell of row `i` at column `j`
/// of [`Table::columns`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    columns: Vec<ColumnName>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(columns: Vec<ColumnName>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn columns(&self) -> &[ColumnName] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Vec<CellValue>] {
        &mut self.rows
    }

    /// Number of data rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.as_str() == name)
    }

    /// Append a row; its arity must match the column count.
    pub fn push_row(&mut self, row: Vec<CellValue>) -> Result<(), ModelError> {
        if row.len() != self.columns.len() {
            return Err(ModelError::RowArity {
                expected: self.columns.len(),
                got: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Iterate the cells of one column.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &CellValue> {
        self.rows.iter().map(move |row| &row[index])
    }

    /// Remove the named column, returning its cells in row order.
    pub fn take_column(&mut self, name: &str) -> Result<Vec<CellValue>, ModelError> {
        let index = self
            .column_index(name)
            .ok_or_else(|| ModelError::ColumnNotFound(name.to_string()))?;
        self.columns.remove(index);
        let mut cells = Vec::with_capacity(self.rows.len());
        for row in &mut self.rows {
            cells.push(row.remove(index));
        }
        Ok(cells)
    }

    /// A new table containing the rows at `indices`, in the given order.
    ///
    /// Indices may repeat; out-of-range indices are a caller bug and panic.
    pub fn select_rows(&self, indices: &[usize]) -> Self {
        let rows = indices.iter().map(|&index| self.rows[index].clone()).collect();
        Self {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Concatenate tables row-wise.
    ///
    /// All inputs must share the same column set; columns are realigned to
    /// the first table's order. An empty input list is a fatal error, never
    /// a silently empty table.
    pub fn concat(tables: Vec<Table>) -> Result<Table, ModelError> {
        let mut inputs = tables.into_iter();
        let mut merged = inputs.next().ok_or(ModelError::EmptyConcat)?;
        let column_set: BTreeSet<&ColumnName> = merged.columns.iter().collect();
        for table in inputs {
            let other_set: BTreeSet<&ColumnName> = table.columns.iter().collect();
            if column_set != other_set {
                return Err(ModelError::ColumnMismatch {
                    left: merged.columns.iter().map(|c| c.as_str().to_string()).collect(),
                    right: table.columns.iter().map(|c| c.as_str().to_string()).collect(),
                });
            }
            // Map the other table's column positions onto the merged order.
            let mapping: Vec<usize> = merged
                .columns
                .iter()
                .map(|column| {
                    table
                        .columns
                        .iter()
                        .position(|other| other == column)
                        .expect("column sets already checked equal")
                })
                .collect();
            for row in table.rows {
                let aligned: Vec<CellValue> =
                    mapping.iter().map(|&index| row[index].clone()).collect();
                merged.rows.push(aligned);
            }
        }
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Vec<ColumnName> {
        names.iter().map(|n| ColumnName::new(*n).unwrap()).collect()
    }

    fn text_row(values: &[&str]) -> Vec<CellValue> {
        values.iter().map(|v| CellValue::text(*v)).collect()
    }

    #[test]
    fn push_row_checks_arity() {
        let mut table = Table::new(columns(&["A", "B"]));
        assert!(table.push_row(text_row(&["1", "2"])).is_ok());
        let err = table.push_row(text_row(&["1"])).unwrap_err();
        assert!(matches!(err, ModelError::RowArity { expected: 2, got: 1 }));
    }

    #[test]
    fn concat_requires_at_least_one_table() {
        let err = Table::concat(Vec::new()).unwrap_err();
        assert!(matches!(err, ModelError::EmptyConcat));
    }

    #[test]
    fn concat_rejects_mismatched_columns() {
        let left = Table::new(columns(&["A", "B"]));
        let right = Table::new(columns(&["A", "C"]));
        let err = Table::concat(vec![left, right]).unwrap_err();
        assert!(matches!(err, ModelError::ColumnMismatch { .. }));
    }

    #[test]
    fn concat_realigns_column_order() {
        let mut left = Table::new(columns(&["A", "B"]));
        left.push_row(text_row(&["1", "x"])).unwrap();
        let mut right = Table::new(columns(&["B", "A"]));
        right.push_row(text_row(&["y", "2"])).unwrap();

        let merged = Table::concat(vec![left, right]).unwrap();
        assert_eq!(merged.height(), 2);
        let a = merged.column_index("A").unwrap();
        assert_eq!(merged.rows()[1][a], CellValue::text("2"));
    }

    #[test]
    fn take_column_removes_cells_in_row_order() {
        let mut table = Table::new(columns(&["A", "Result"]));
        table.push_row(text_row(&["1", "-1"])).unwrap();
        table.push_row(text_row(&["2", "1"])).unwrap();

        let cells = table.take_column("Result").unwrap();
        assert_eq!(cells, vec![CellValue::text("-1"), CellValue::text("1")]);
        assert_eq!(table.width(), 1);
        assert_eq!(table.rows()[0].len(), 1);

        assert!(matches!(
            table.take_column("Result"),
            Err(ModelError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn select_rows_allows_repeats() {
        let mut table = Table::new(columns(&["A"]));
        table.push_row(text_row(&["1"])).unwrap();
        table.push_row(text_row(&["2"])).unwrap();

        let picked = table.select_rows(&[1, 1, 0]);
        assert_eq!(picked.height(), 3);
        assert_eq!(picked.rows()[0][0], CellValue::text("2"));
        assert_eq!(picked.rows()[2][0], CellValue::text("1"));
    }
}
