use std::path::PathBuf;

use phish_model::ColumnName;

/// Errors from the training stage.
#[derive(Debug, thiserror::Error)]
pub enum TrainError {
    #[error("feature column {column} has a non-numeric cell {value:?}")]
    NonNumericFeature { column: ColumnName, value: String },

    #[error("feature column {0} has a missing cell after imputation")]
    MissingFeature(ColumnName),

    #[error("training partition is empty")]
    EmptyTrainingSet,

    #[error("best model score {score:.3} is below the acceptance threshold {threshold:.3}")]
    ScoreBelowThreshold { score: f64, threshold: f64 },

    #[error("persist trained model at {path}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
