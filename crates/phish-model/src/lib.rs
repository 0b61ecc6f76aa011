//! Shared data model for the phishing training pipeline.
//!
//! Every pipeline stage speaks in terms of these types: [`Table`] for
//! delimited tabular data, [`ColumnRole`] for per-column preprocessing
//! metadata, [`RunId`]/[`RunLayout`] for the per-run artifact directory
//! tree, and [`DatasetSchema`] for the validation rules file.

#![deny(unsafe_code)]

mod artifact;
mod error;
mod ids;
mod layout;
mod roles;
mod schema;
mod table;

pub use artifact::TransformedData;
pub use error::ModelError;
pub use ids::{ColumnName, RunId};
pub use layout::RunLayout;
pub use roles::{ColumnRole, infer_column_roles};
pub use schema::DatasetSchema;
pub use table::{CellValue, Table};
