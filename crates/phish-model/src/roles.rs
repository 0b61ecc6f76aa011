use std::collections::{BTreeMap, BTreeSet};

use crate::{CellValue, ColumnName, Table};

/// Unique-count threshold below which any column counts as categorical.
const CATEGORICAL_UNIQUE_LIMIT: usize = 10;
/// Unique-count threshold above which a numeric column counts as continuous.
const CONTINUOUS_UNIQUE_LIMIT: usize = 20;

/// Preprocessing role of a column, decided once during validation and
/// carried as metadata into the transformer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum ColumnRole {
    Categorical,
    Continuous,
    Discrete,
}

/// Infer a role for every column of `table`.
///
/// A column is numeric when every non-missing cell parses as `f64`.
/// Non-numeric columns and low-cardinality columns are categorical;
/// numeric columns are continuous above [`CONTINUOUS_UNIQUE_LIMIT`]
/// distinct values and discrete otherwise.
pub fn infer_column_roles(table: &Table) -> BTreeMap<ColumnName, ColumnRole> {
    let mut roles = BTreeMap::new();
    for (index, column) in table.columns().iter().enumerate() {
        let mut uniques: BTreeSet<&str> = BTreeSet::new();
        let mut numeric = true;
        for cell in table.column_values(index) {
            let CellValue::Text(value) = cell else {
                continue;
            };
            let trimmed = value.trim();
            uniques.insert(trimmed);
            if trimmed.parse::<f64>().is_err() {
                numeric = false;
            }
        }
        let role = if !numeric || uniques.len() < CATEGORICAL_UNIQUE_LIMIT {
            ColumnRole::Categorical
        } else if uniques.len() > CONTINUOUS_UNIQUE_LIMIT {
            ColumnRole::Continuous
        } else {
            ColumnRole::Discrete
        };
        roles.insert(column.clone(), role);
    }
    roles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ModelError;

    fn table_of(column: &str, values: &[&str]) -> Table {
        let mut table = Table::new(vec![ColumnName::new(column).unwrap()]);
        for value in values {
            table.push_row(vec![CellValue::text(*value)]).unwrap();
        }
        table
    }

    #[test]
    fn low_cardinality_numeric_is_categorical() {
        let table = table_of("Result", &["-1", "1", "-1", "1"]);
        let roles = infer_column_roles(&table);
        let name = ColumnName::new("Result").unwrap();
        assert_eq!(roles[&name], ColumnRole::Categorical);
    }

    #[test]
    fn textual_column_is_categorical_regardless_of_cardinality() {
        let values: Vec<String> = (0..30).map(|i| format!("url{i}")).collect();
        let refs: Vec<&str> = values.iter().map(String::as_str).collect();
        let table = table_of("Domain", &refs);
        let roles = infer_column_roles(&table);
        let name = ColumnName::new("Domain").unwrap();
        assert_eq!(roles[&name], ColumnRole::Categorical);
    }

    #[test]
    fn wide_numeric_column_is_continuous() -> Result<(), ModelError> {
        let values: Vec<String> = (0..25).map(|i| format!("{}.5", i)).collect();
        let refs: Vec<&str> = values.iter().map(String::as_str).collect();
        let table = table_of("Score", &refs);
        let roles = infer_column_roles(&table);
        assert_eq!(roles[&ColumnName::new("Score")?], ColumnRole::Continuous);
        Ok(())
    }

    #[test]
    fn mid_cardinality_numeric_column_is_discrete() -> Result<(), ModelError> {
        let values: Vec<String> = (0..15).map(|i| i.to_string()).collect();
        let refs: Vec<&str> = values.iter().map(String::as_str).collect();
        let table = table_of("Count", &refs);
        let roles = infer_column_roles(&table);
        assert_eq!(roles[&ColumnName::new("Count")?], ColumnRole::Discrete);
        Ok(())
    }
}
