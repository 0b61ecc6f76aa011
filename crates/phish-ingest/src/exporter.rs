use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use phish_model::RunLayout;

use crate::csv_io::write_table;
use crate::{DocumentStore, IngestError};

/// Exports every collection of the source database into the run's raw-data
/// directory, one `<collection>.csv` file per collection.
///
/// Fail-fast: the first store or filesystem error aborts the export with
/// the cause attached; previously written files are left in place.
pub struct RawDataExporter<'a, S> {
    store: &'a S,
    raw_data_dir: PathBuf,
}

impl<'a, S: DocumentStore> RawDataExporter<'a, S> {
    pub fn new(store: &'a S, layout: &RunLayout) -> Self {
        Self {
            store,
            raw_data_dir: layout.data_ingestion_dir(),
        }
    }

    /// Run the export and return the raw-data directory.
    ///
    /// The directory is created even when the store has no collections;
    /// downstream stages decide what an empty batch means.
    pub fn export(&self) -> Result<PathBuf, IngestError> {
        fs::create_dir_all(&self.raw_data_dir).map_err(|source| IngestError::CreateDir {
            path: self.raw_data_dir.clone(),
            source,
        })?;
        debug!(dir = %self.raw_data_dir.display(), "exporting raw data");

        let collections = self
            .store
            .collection_names()
            .map_err(IngestError::ListCollections)?;
        for collection in collections {
            let table =
                self.store
                    .read_collection(&collection)
                    .map_err(|source| IngestError::Store {
                        collection: collection.clone(),
                        source,
                    })?;
            info!(
                collection = %collection,
                rows = table.height(),
                columns = table.width(),
                "exported collection"
            );
            let path = self.raw_data_dir.join(format!("{collection}.csv"));
            write_table(&path, &table)?;
        }
        Ok(self.raw_data_dir.clone())
    }
}
