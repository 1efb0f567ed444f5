//! Fitness metrics comparing true labels to predicted labels. Higher is better, and a metric
//! should never be negative.

/// A fitness signal for a whole set of predictions
pub trait Metric: Sync {
    fn score(&self, truth: &[u8], predicted: &[u8]) -> f64;
}

impl<F: Fn(&[u8], &[u8]) -> f64 + Sync> Metric for F {
    fn score(&self, truth: &[u8], predicted: &[u8]) -> f64 {
        self(truth, predicted)
    }
}

/// F1 averaged over every label present in either truth or prediction. A label with no true
/// positives scores 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct MacroF1;

impl MacroF1 {
    fn f1(truth: &[u8], predicted: &[u8], label: u8) -> f64 {
        let (mut tp, mut fp, mut fneg) = (0usize, 0usize, 0usize);
        for (t, p) in truth.iter().zip(predicted) {
            match (*t == label, *p == label) {
                (true, true) => tp += 1,
                (false, true) => fp += 1,
                (true, false) => fneg += 1,
                (false, false) => (),
            }
        }

        if tp == 0 {
            0.
        } else {
            (2 * tp) as f64 / (2 * tp + fp + fneg) as f64
        }
    }
}

impl Metric for MacroF1 {
    fn score(&self, truth: &[u8], predicted: &[u8]) -> f64 {
        debug_assert_eq!(truth.len(), predicted.len());
        let mut labels = truth.iter().chain(predicted).copied().collect::<Vec<_>>();
        labels.sort_unstable();
        labels.dedup();

        if labels.is_empty() {
            return 0.;
        }

        labels
            .iter()
            .map(|label| Self::f1(truth, predicted, *label))
            .sum::<f64>()
            / labels.len() as f64
    }
}

/// Fraction of labels predicted correctly
#[derive(Debug, Clone, Copy, Default)]
pub struct Accuracy;

impl Metric for Accuracy {
    fn score(&self, truth: &[u8], predicted: &[u8]) -> f64 {
        if truth.is_empty() {
            return 0.;
        }
        truth.iter().zip(predicted).filter(|(t, p)| t == p).count() as f64 / truth.len() as f64
    }
}
