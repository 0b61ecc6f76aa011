//! Subcommand implementations.

use anyhow::{Context, Result};

use phish_cli::config::PipelineConfig;
use phish_cli::pipeline::{PipelineReport, TrainingPipeline};
use phish_ingest::DirStore;
use phish_model::DatasetSchema;

use crate::cli::{SchemaArgs, TrainArgs};

pub fn run_train(args: &TrainArgs) -> Result<PipelineReport> {
    let mut config = match &args.config {
        Some(path) => PipelineConfig::load(path)?,
        None => PipelineConfig::default(),
    };
    if let Some(root) = &args.artifact_root {
        config.artifact_root = root.clone();
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let schema = DatasetSchema::load(&args.schema)
        .with_context(|| format!("load dataset schema {}", args.schema.display()))?;
    let store = DirStore::new(args.source_dir.join(&config.database_name));

    TrainingPipeline::new(&store, &config, schema).run()
}

pub fn run_schema(args: &SchemaArgs) -> Result<()> {
    let schema = DatasetSchema::load(&args.schema)
        .with_context(|| format!("load dataset schema {}", args.schema.display()))?;
    println!(
        "filename rule: {}_<{} digits>_<{} digits>.csv",
        schema.file_prefix, schema.date_stamp_length, schema.time_stamp_length
    );
    println!("expected columns ({}):", schema.number_of_columns);
    for name in &schema.column_names {
        println!("  {name}");
    }
    Ok(())
}
