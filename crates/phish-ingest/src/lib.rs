//! Data ingestion for the phishing training pipeline.
//!
//! The [`DocumentStore`] trait is the seam to the source database; the
//! pipeline treats it as opaque. [`RawDataExporter`] materializes every
//! collection of one database as a raw CSV batch file under the run's
//! `data_ingestion` directory.

#![deny(unsafe_code)]

mod csv_io;
mod error;
mod exporter;
mod store;

pub use csv_io::{read_table, write_table};
pub use error::IngestError;
pub use exporter::RawDataExporter;
pub use store::{DirStore, DocumentStore};
