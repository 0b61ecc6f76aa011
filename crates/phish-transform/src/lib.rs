//! Core transformation stage of the phishing training pipeline.
//!
//! Turns the validated batch files of one run into balanced, imputed
//! train/test feature matrices plus a persisted preprocessing object:
//!
//! 1. merge all validated files into one table
//! 2. strip whitespace from categorical cells
//! 3. normalize the `?` sentinel to a missing marker
//! 4. extract and binarize the target column
//! 5. oversample the minority class
//! 6. split 80/20 into train and test
//! 7. fit a most-frequent imputer on train, apply to both
//! 8. persist the fitted imputer

#![deny(unsafe_code)]

mod clean;
mod error;
mod impute;
mod merge;
mod sample;
mod split;
mod target;
mod transformer;

pub use clean::{MISSING_SENTINEL, replace_missing_sentinel, strip_whitespace};
pub use error::TransformError;
pub use impute::MostFrequentImputer;
pub use merge::merge_valid_files;
pub use sample::oversample;
pub use split::{Split, train_test_split};
pub use target::{NEGATIVE_SENTINEL, extract_target};
pub use transformer::{DataTransformation, TransformationConfig};
