use std::path::PathBuf;

use anyhow::Context;

use phish_model::{CellValue, Table};

use crate::csv_io::read_table;

/// Token the source database uses for absent values.
const NA_TOKEN: &str = "na";
/// Internal document identifier column, dropped on export.
const ID_COLUMN: &str = "_id";

/// The source document store, scoped to one named database.
///
/// The pipeline only needs to enumerate collections and materialize each
/// one as a table; everything else about the store is opaque.
pub trait DocumentStore {
    /// Names of all collections in the database, in a stable order.
    fn collection_names(&self) -> anyhow::Result<Vec<String>>;

    /// Materialize one collection as a table.
    fn read_collection(&self, name: &str) -> anyhow::Result<Table>;
}

/// A document store backed by a directory of delimited files.
///
/// Each `<name>.csv` file in the database directory is one collection.
/// Mirrors the export-side quirks of the upstream database client: a
/// literal `_id` column is dropped and the `na` token becomes a missing
/// value.
#[derive(Debug, Clone)]
pub struct DirStore {
    database_dir: PathBuf,
}

impl DirStore {
    pub fn new(database_dir: impl Into<PathBuf>) -> Self {
        Self {
            database_dir: database_dir.into(),
        }
    }
}

impl DocumentStore for DirStore {
    fn collection_names(&self) -> anyhow::Result<Vec<String>> {
        let mut names = Vec::new();
        let entries = std::fs::read_dir(&self.database_dir)
            .with_context(|| format!("read database dir {}", self.database_dir.display()))?;
        for entry in entries {
            let path = entry
                .with_context(|| format!("read database dir {}", self.database_dir.display()))?
                .path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("csv") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn read_collection(&self, name: &str) -> anyhow::Result<Table> {
        let path = self.database_dir.join(format!("{name}.csv"));
        let mut table =
            read_table(&path).with_context(|| format!("materialize collection {name:?}"))?;
        if table.column_index(ID_COLUMN).is_some() {
            table.take_column(ID_COLUMN)?;
        }
        for row in table.rows_mut() {
            for cell in row {
                if cell.as_text() == Some(NA_TOKEN) {
                    *cell = CellValue::Missing;
                }
            }
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_store_lists_csv_collections_sorted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.csv"), "A\n1\n").unwrap();
        std::fs::write(dir.path().join("a.csv"), "A\n1\n").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignore").unwrap();

        let store = DirStore::new(dir.path());
        assert_eq!(store.collection_names().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn dir_store_drops_id_column_and_maps_na() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("batch.csv"), "_id,A,B\nx1,na,2\n").unwrap();

        let store = DirStore::new(dir.path());
        let table = store.read_collection("batch").unwrap();
        assert_eq!(table.width(), 2);
        assert!(table.column_index("_id").is_none());
        assert_eq!(table.rows()[0][0], CellValue::Missing);
        assert_eq!(table.rows()[0][1], CellValue::text("2"));
    }

    #[test]
    fn missing_collection_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirStore::new(dir.path());
        assert!(store.read_collection("absent").is_err());
    }
}
