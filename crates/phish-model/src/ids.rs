use std::fmt;

use chrono::{DateTime, Local};

use crate::ModelError;

/// Format of the timestamp-derived run directory name.
const RUN_ID_FORMAT: &str = "%m_%d_%Y_%H_%M_%S";

/// Unique identifier for one pipeline run.
///
/// Constructed once at orchestrator start and passed explicitly into every
/// stage config; no component derives it from the wall clock on its own.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub struct RunId(String);

impl RunId {
    /// Run id for the current local time.
    pub fn now() -> Self {
        Self::from_timestamp(Local::now())
    }

    pub fn from_timestamp(timestamp: DateTime<Local>) -> Self {
        Self(timestamp.format(RUN_ID_FORMAT).to_string())
    }

    /// Run id from an arbitrary non-empty string, for tests and replays.
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidRunId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated, non-empty column name.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ColumnName(String);

impl ColumnName {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim_matches('\u{feff}').trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidColumnName(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
