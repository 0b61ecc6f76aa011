use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, info_span};

use phish_ingest::write_table;
use phish_model::{ColumnName, ColumnRole, RunLayout, TransformedData};

use crate::clean::{MISSING_SENTINEL, replace_missing_sentinel, strip_whitespace};
use crate::impute::MostFrequentImputer;
use crate::merge::merge_valid_files;
use crate::sample::oversample;
use crate::split::train_test_split;
use crate::target::extract_target;
use crate::TransformError;

/// Fraction of the balanced data held out for testing.
pub(crate) const TEST_FRACTION: f64 = 0.2;

/// Static configuration of the transformation stage, derived once from
/// the run layout and immutable afterwards.
#[derive(Debug, Clone)]
pub struct TransformationConfig {
    pub target_column: String,
    pub preprocessor_path: PathBuf,
    /// Convenience artifacts; the preprocessing object is the contract.
    pub train_matrix_path: Option<PathBuf>,
    pub test_matrix_path: Option<PathBuf>,
    /// Explicit seed for oversampling and splitting; entropy-derived when
    /// absent.
    pub seed: Option<u64>,
}

impl TransformationConfig {
    pub fn for_run(layout: &RunLayout, target_column: impl Into<String>) -> Self {
        Self {
            target_column: target_column.into(),
            preprocessor_path: layout.preprocessor_path(),
            train_matrix_path: Some(layout.train_matrix_path()),
            test_matrix_path: Some(layout.test_matrix_path()),
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

/// The transformation stage: validated files in, balanced imputed
/// train/test matrices and a persisted preprocessing object out.
pub struct DataTransformation {
    config: TransformationConfig,
}

impl DataTransformation {
    pub fn new(config: TransformationConfig) -> Self {
        Self { config }
    }

    /// Run the full transformation over one run's validated data.
    ///
    /// Any failure in any step aborts with the originating cause; no
    /// partial results are returned.
    pub fn run(
        &self,
        valid_data_dir: &Path,
        column_roles: &BTreeMap<ColumnName, ColumnRole>,
    ) -> Result<TransformedData, TransformError> {
        let span = info_span!("data_transformation", valid_dir = %valid_data_dir.display());
        let _guard = span.enter();

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut merged = merge_valid_files(valid_data_dir)?;
        info!(rows = merged.height(), columns = merged.width(), "merged validated files");

        strip_whitespace(&mut merged, column_roles);
        replace_missing_sentinel(&mut merged, MISSING_SENTINEL);

        let (features, labels) = extract_target(merged, &self.config.target_column)?;
        let (balanced_features, balanced_labels) = oversample(&features, &labels, &mut rng)?;
        info!(
            before = labels.len(),
            after = balanced_labels.len(),
            "balanced classes"
        );

        let split = train_test_split(&balanced_features, &balanced_labels, TEST_FRACTION, &mut rng);

        let imputer = MostFrequentImputer::fit(&split.train_features)?;
        let train_features = imputer.transform(&split.train_features)?;
        let test_features = imputer.transform(&split.test_features)?;

        imputer.save(&self.config.preprocessor_path)?;
        info!(
            path = %self.config.preprocessor_path.display(),
            "persisted preprocessing object"
        );

        if let Some(path) = &self.config.train_matrix_path {
            write_table(path, &train_features)?;
        }
        if let Some(path) = &self.config.test_matrix_path {
            write_table(path, &test_features)?;
        }

        let transformed = TransformedData {
            train_features,
            train_labels: split.train_labels,
            test_features,
            test_labels: split.test_labels,
            preprocessor_path: self.config.preprocessor_path.clone(),
        };
        debug_assert!(transformed.is_consistent());
        Ok(transformed)
    }
}
