use rand::Rng;
use tracing::debug;

use phish_model::Table;

use crate::TransformError;

/// Random oversampling of the minority class until both classes have
/// equal counts.
///
/// Every original row keeps its position; duplicated minority rows are
/// appended at the end. Runs before the train/test split, so duplicates
/// can land in both partitions — an accepted property of this pipeline,
/// preserved because reordering the steps changes downstream numbers.
pub fn oversample<R: Rng>(
    features: &Table,
    labels: &[u8],
    rng: &mut R,
) -> Result<(Table, Vec<u8>), TransformError> {
    debug_assert_eq!(features.height(), labels.len());

    let positives: Vec<usize> = indices_of(labels, 1);
    let negatives: Vec<usize> = indices_of(labels, 0);
    let (minority_label, minority, majority_len) = if positives.len() < negatives.len() {
        (1u8, positives, negatives.len())
    } else {
        (0u8, negatives, positives.len())
    };
    if minority.is_empty() {
        return Err(TransformError::DegenerateClass {
            label: minority_label,
        });
    }

    let mut indices: Vec<usize> = (0..labels.len()).collect();
    let deficit = majority_len - minority.len();
    for _ in 0..deficit {
        indices.push(minority[rng.gen_range(0..minority.len())]);
    }

    let balanced_features = features.select_rows(&indices);
    let balanced_labels: Vec<u8> = indices.iter().map(|&index| labels[index]).collect();
    debug!(
        original = labels.len(),
        duplicated = deficit,
        balanced = balanced_labels.len(),
        "oversampled minority class"
    );
    Ok((balanced_features, balanced_labels))
}

fn indices_of(labels: &[u8], label: u8) -> Vec<usize> {
    labels
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value == label)
        .map(|(index, _)| index)
        .collect()
}
