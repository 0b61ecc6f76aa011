use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use phish_model::{RunLayout, TransformedData};

use crate::model::{BaselineModel, TrainedModel, accuracy, numeric_matrix};
use crate::TrainError;

/// Score below which no model is accepted.
const DEFAULT_ACCEPTANCE_THRESHOLD: f64 = 0.5;

/// The seam the orchestrator depends on: arrays and a preprocessor path
/// in, a quality score out.
pub trait ModelTrainer {
    fn train(&self, data: &TransformedData) -> Result<f64, TrainError>;
}

#[derive(Debug, Clone)]
pub struct TrainerConfig {
    pub trained_model_path: PathBuf,
    pub acceptance_threshold: f64,
}

impl TrainerConfig {
    pub fn for_run(layout: &RunLayout) -> Self {
        Self {
            trained_model_path: layout.trained_model_path(),
            acceptance_threshold: DEFAULT_ACCEPTANCE_THRESHOLD,
        }
    }
}

/// Fits every candidate baseline model on the training partition, scores
/// each on the test partition, and persists the best one.
pub struct BaselineTrainer {
    config: TrainerConfig,
}

impl BaselineTrainer {
    pub fn new(config: TrainerConfig) -> Self {
        Self { config }
    }

    fn fit_candidates(
        train: &[Vec<f64>],
        train_labels: &[u8],
    ) -> Result<Vec<BaselineModel>, TrainError> {
        if train.is_empty() {
            return Err(TrainError::EmptyTrainingSet);
        }
        Ok(vec![
            fit_majority_class(train_labels),
            fit_nearest_centroid(train, train_labels),
        ])
    }
}

impl ModelTrainer for BaselineTrainer {
    fn train(&self, data: &TransformedData) -> Result<f64, TrainError> {
        let train = numeric_matrix(&data.train_features)?;
        let test = numeric_matrix(&data.test_features)?;

        let mut best: Option<(BaselineModel, f64)> = None;
        for model in Self::fit_candidates(&train, &data.train_labels)? {
            let score = accuracy(&model.predict(&test), &data.test_labels);
            debug!(model = model.name(), score, "evaluated candidate");
            if best
                .as_ref()
                .is_none_or(|(_, best_score)| score > *best_score)
            {
                best = Some((model, score));
            }
        }
        let (model, score) = best.expect("candidate list is never empty");

        if score < self.config.acceptance_threshold {
            return Err(TrainError::ScoreBelowThreshold {
                score,
                threshold: self.config.acceptance_threshold,
            });
        }

        let artifact = TrainedModel {
            model,
            preprocessor_path: data.preprocessor_path.clone(),
            score,
        };
        persist_model(&artifact, &self.config.trained_model_path)?;
        info!(
            model = artifact.model.name(),
            score,
            path = %self.config.trained_model_path.display(),
            "persisted trained model"
        );
        Ok(score)
    }
}

fn fit_majority_class(labels: &[u8]) -> BaselineModel {
    let ones = labels.iter().filter(|&&l| l == 1).count();
    let label = u8::from(ones * 2 >= labels.len());
    BaselineModel::MajorityClass { label }
}

fn fit_nearest_centroid(train: &[Vec<f64>], labels: &[u8]) -> BaselineModel {
    let width = train.first().map_or(0, Vec::len);
    let mut negative = vec![0.0; width];
    let mut positive = vec![0.0; width];
    let mut negative_count = 0usize;
    let mut positive_count = 0usize;
    for (row, &label) in train.iter().zip(labels) {
        let (centroid, count) = if label == 0 {
            (&mut negative, &mut negative_count)
        } else {
            (&mut positive, &mut positive_count)
        };
        for (sum, value) in centroid.iter_mut().zip(row) {
            *sum += value;
        }
        *count += 1;
    }
    for sum in &mut negative {
        *sum /= negative_count.max(1) as f64;
    }
    for sum in &mut positive {
        *sum /= positive_count.max(1) as f64;
    }
    BaselineModel::NearestCentroid { negative, positive }
}

fn persist_model(artifact: &TrainedModel, path: &Path) -> Result<(), TrainError> {
    let persist_err = |source| TrainError::Persist {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(persist_err)?;
    }
    let body = serde_json::to_string_pretty(artifact)
        .map_err(|source| persist_err(std::io::Error::other(source)))?;
    fs::write(path, body).map_err(persist_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use phish_model::{CellValue, ColumnName, RunId, Table};

    fn feature_table(values: &[&[&str]]) -> Table {
        let width = values.first().map_or(0, |row| row.len());
        let columns = (0..width)
            .map(|index| ColumnName::new(format!("F{index}")).unwrap())
            .collect();
        let mut table = Table::new(columns);
        for row in values {
            table
                .push_row(row.iter().map(|v| CellValue::text(*v)).collect())
                .unwrap();
        }
        table
    }

    fn transformed(dir: &std::path::Path) -> TransformedData {
        // Cleanly separable clusters around 0 and 10.
        TransformedData {
            train_features: feature_table(&[
                &["0.0", "1.0"],
                &["1.0", "0.0"],
                &["10.0", "9.0"],
                &["9.0", "10.0"],
            ]),
            train_labels: vec![0, 0, 1, 1],
            test_features: feature_table(&[&["0.5", "0.5"], &["9.5", "9.5"]]),
            test_labels: vec![0, 1],
            preprocessor_path: dir.join("preprocessing.json"),
        }
    }

    #[test]
    fn trains_scores_and_persists_best_model() {
        let dir = tempfile::tempdir().unwrap();
        let layout = RunLayout::new(dir.path(), &RunId::new("test_run").unwrap());
        let trainer = BaselineTrainer::new(TrainerConfig::for_run(&layout));

        let score = trainer.train(&transformed(dir.path())).unwrap();
        assert!((0.0..=1.0).contains(&score));
        assert_eq!(score, 1.0);

        let body = fs::read_to_string(layout.trained_model_path()).unwrap();
        let artifact: TrainedModel = serde_json::from_str(&body).unwrap();
        assert_eq!(artifact.model.name(), "nearest_centroid");
        assert_eq!(artifact.score, 1.0);
    }

    #[test]
    fn below_threshold_score_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let layout = RunLayout::new(dir.path(), &RunId::new("test_run").unwrap());
        let mut config = TrainerConfig::for_run(&layout);
        config.acceptance_threshold = 1.1;
        let trainer = BaselineTrainer::new(config);

        let err = trainer.train(&transformed(dir.path())).unwrap_err();
        assert!(matches!(err, TrainError::ScoreBelowThreshold { .. }));
    }

    #[test]
    fn empty_training_partition_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let layout = RunLayout::new(dir.path(), &RunId::new("test_run").unwrap());
        let trainer = BaselineTrainer::new(TrainerConfig::for_run(&layout));

        let mut data = transformed(dir.path());
        data.train_features = feature_table(&[]);
        data.train_labels.clear();
        let err = trainer.train(&data).unwrap_err();
        assert!(matches!(err, TrainError::EmptyTrainingSet));
    }
}
