use std::path::PathBuf;

use crate::Table;

/// Output of the data transformation stage, handed to the trainer.
///
/// Invariant: within each partition the feature row count equals the label
/// count. Labels are binary: `0` for the negative sentinel target value,
/// `1` for everything else.
#[derive(Debug, Clone)]
pub struct TransformedData {
    pub train_features: Table,
    pub train_labels: Vec<u8>,
    pub test_features: Table,
    pub test_labels: Vec<u8>,
    /// Path of the persisted preprocessing object; downstream stages reload
    /// it from here rather than receiving it in memory.
    pub preprocessor_path: PathBuf,
}

impl TransformedData {
    /// Check the feature/label row parity invariant.
    pub fn is_consistent(&self) -> bool {
        self.train_features.height() == self.train_labels.len()
            && self.test_features.height() == self.test_labels.len()
    }
}
