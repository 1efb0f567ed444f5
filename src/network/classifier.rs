use super::activate::sigmoid;
use crate::{
    constants::GENLSTM_DECISION_THRESHOLD,
    error::{Error, Result},
    genome::ClassifierWeights,
};

/// Squashed weighted sum of `recurrent` then `statics` features, plus the bias
pub fn activation(
    recurrent: &[f64],
    statics: &[f64],
    weights: &ClassifierWeights,
) -> Result<f64> {
    let features = recurrent.len() + statics.len();
    if features != weights.weights.len() {
        return Err(Error::DimensionMismatch {
            what: "classifier features",
            expected: weights.weights.len(),
            actual: features,
        });
    }

    let sum = recurrent
        .iter()
        .chain(statics)
        .zip(&weights.weights)
        .fold(weights.bias, |acc, (x, w)| acc + x * w);
    Ok(sigmoid(sum))
}

/// Binary label for one individual. Without classifier weights every recurrent output is
/// weighted 1 with no bias, and static features are ignored.
///
/// An activation of exactly 0.5 is labelled 0.
pub fn classify(
    recurrent: &[f64],
    statics: &[f64],
    weights: Option<&ClassifierWeights>,
) -> Result<u8> {
    let activation = match weights {
        Some(weights) => activation(recurrent, statics, weights)?,
        None => sigmoid(recurrent.iter().sum()),
    };
    Ok(u8::from(activation > GENLSTM_DECISION_THRESHOLD))
}
