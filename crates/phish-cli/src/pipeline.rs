//! The training pipeline orchestrator.
//!
//! Sequences the stages `Init → Ingested → Validated → Transformed →
//! Trained → Done`, threading each stage's artifact into the next. Every
//! stage failure moves the run to the terminal `Failed` state: the error
//! is wrapped with the failing stage's context and propagated, nothing is
//! retried, and no partial artifacts are cleaned up. Re-running the whole
//! pipeline (with a fresh run directory) is the only recovery path.

use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{error, info, info_span};

use phish_ingest::{DocumentStore, RawDataExporter};
use phish_model::{DatasetSchema, RunId, RunLayout};
use phish_train::{BaselineTrainer, ModelTrainer, TrainerConfig};
use phish_transform::{DataTransformation, TransformationConfig};
use phish_validate::DataValidation;

use crate::config::PipelineConfig;

/// Observable state of one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Init,
    Ingested,
    Validated,
    Transformed,
    Trained,
    Done,
    Failed,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Init => "init",
            Self::Ingested => "ingested",
            Self::Validated => "validated",
            Self::Transformed => "transformed",
            Self::Trained => "trained",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Result of a completed run, for the operator summary.
#[derive(Debug)]
pub struct PipelineReport {
    pub run_id: RunId,
    pub run_root: PathBuf,
    pub valid_count: usize,
    pub invalid_count: usize,
    pub train_rows: usize,
    pub test_rows: usize,
    pub preprocessor_path: PathBuf,
    pub model_path: PathBuf,
    pub model_score: f64,
}

/// Strictly sequential orchestrator over one document store and one
/// configuration.
pub struct TrainingPipeline<'a, S> {
    store: &'a S,
    config: &'a PipelineConfig,
    schema: DatasetSchema,
    run_id: RunId,
}

impl<'a, S: DocumentStore> TrainingPipeline<'a, S> {
    /// New pipeline with a wall-clock run id.
    pub fn new(store: &'a S, config: &'a PipelineConfig, schema: DatasetSchema) -> Self {
        Self::with_run_id(store, config, schema, RunId::now())
    }

    /// New pipeline with an explicit run id, for tests and replays.
    pub fn with_run_id(
        store: &'a S,
        config: &'a PipelineConfig,
        schema: DatasetSchema,
        run_id: RunId,
    ) -> Self {
        Self {
            store,
            config,
            schema,
            run_id,
        }
    }

    /// Execute the full run.
    pub fn run(&self) -> Result<PipelineReport> {
        let layout = RunLayout::new(&self.config.artifact_root, &self.run_id);
        let span = info_span!("training_pipeline", run_id = %self.run_id);
        let _guard = span.enter();
        info!(root = %layout.root().display(), "starting training run");

        let mut stage = PipelineStage::Init;
        match self.run_stages(&layout, &mut stage) {
            Ok(report) => Ok(report),
            Err(err) => {
                let reached = stage;
                stage = PipelineStage::Failed;
                error!(%stage, last_completed = %reached, "pipeline run aborted");
                Err(err)
            }
        }
    }

    fn run_stages(
        &self,
        layout: &RunLayout,
        stage: &mut PipelineStage,
    ) -> Result<PipelineReport> {
        let raw_dir = info_span!("data_ingestion").in_scope(|| {
            RawDataExporter::new(self.store, layout)
                .export()
                .context("data ingestion stage")
        })?;
        *stage = PipelineStage::Ingested;

        let outcome = info_span!("data_validation").in_scope(|| {
            DataValidation::new(&raw_dir, layout, self.schema.clone())
                .run()
                .context("data validation stage")
        })?;
        *stage = PipelineStage::Validated;

        let transform_config = TransformationConfig::for_run(layout, &self.config.target_column)
            .with_seed(self.config.seed);
        let data = DataTransformation::new(transform_config)
            .run(&outcome.valid_dir, &outcome.column_roles)
            .context("data transformation stage")?;
        *stage = PipelineStage::Transformed;

        let trainer = BaselineTrainer::new(TrainerConfig::for_run(layout));
        let model_score = info_span!("model_training").in_scope(|| {
            trainer.train(&data).context("model training stage")
        })?;
        *stage = PipelineStage::Trained;

        info!(model_score, "training run completed");
        *stage = PipelineStage::Done;
        Ok(PipelineReport {
            run_id: self.run_id.clone(),
            run_root: layout.root().to_path_buf(),
            valid_count: outcome.valid_count,
            invalid_count: outcome.invalid_count,
            train_rows: data.train_labels.len(),
            test_rows: data.test_labels.len(),
            preprocessor_path: data.preprocessor_path,
            model_path: layout.trained_model_path(),
            model_score,
        })
    }
}
