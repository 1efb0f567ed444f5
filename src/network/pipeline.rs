use super::{classify, predict_series};
use crate::{data::Dataset, error::Result, genome::Weights};

/// Label individual `idx` of `data`
pub fn predict_individual(weights: &Weights, data: &Dataset, idx: usize) -> Result<u8> {
    let recurrent = predict_series(data.sequence(idx), &weights.cells)?;
    classify(&recurrent, data.statics(idx), weights.classifier.as_ref())
}

/// Label every individual of `data`, in order
pub fn predict(weights: &Weights, data: &Dataset) -> Result<Vec<u8>> {
    (0..data.len())
        .map(|idx| predict_individual(weights, data, idx))
        .collect()
}
