use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use phish_model::Table;

/// Result of the train/test split.
#[derive(Debug, Clone)]
pub struct Split {
    pub train_features: Table,
    pub train_labels: Vec<u8>,
    pub test_features: Table,
    pub test_labels: Vec<u8>,
}

/// Randomly partition `(features, labels)` into train and test sets.
///
/// The test partition holds `ceil(n * test_fraction)` rows, so a 20%
/// fraction of an odd total rounds the extra row into test. Train and
/// test always sum to the input row count.
pub fn train_test_split<R: Rng>(
    features: &Table,
    labels: &[u8],
    test_fraction: f64,
    rng: &mut R,
) -> Split {
    debug_assert_eq!(features.height(), labels.len());

    let total = labels.len();
    let test_len = ((total as f64) * test_fraction).ceil() as usize;
    let mut indices: Vec<usize> = (0..total).collect();
    indices.shuffle(rng);
    let (test_indices, train_indices) = indices.split_at(test_len.min(total));

    let split = Split {
        train_features: features.select_rows(train_indices),
        train_labels: train_indices.iter().map(|&index| labels[index]).collect(),
        test_features: features.select_rows(test_indices),
        test_labels: test_indices.iter().map(|&index| labels[index]).collect(),
    };
    debug!(
        train = split.train_labels.len(),
        test = split.test_labels.len(),
        "split balanced data"
    );
    split
}
