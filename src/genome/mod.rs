//! Genes and the codec mapping them onto the weights a forward pipeline consumes.
//!
//! A gene is laid out as `R` consecutive cell blocks of [GENLSTM_CELL_PARAMS] values, one per
//! recurrent variable, followed (only when there are static features) by `R + C` classifier
//! weights and a single classifier bias.

pub mod params;
pub use params::{CellParams, Gate};

use crate::{
    constants::GENLSTM_CELL_PARAMS,
    error::{Error, Result},
};
use serde::{Deserialize, Serialize};

/// Flat weights of one candidate solution
pub type Gene = Vec<f64>;

/// Shape of the model a gene encodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Variables modelled by a recurrent cell
    pub recurrent: usize,
    /// Static per-individual features fed straight into the classifier
    pub constant: usize,
}

impl Layout {
    /// A layout for `recurrent` cells and `constant` static features. Fails for layouts whose
    /// genes would be empty.
    pub fn new(recurrent: usize, constant: usize) -> Result<Self> {
        let layout = Self {
            recurrent,
            constant,
        };
        if layout.gene_len() == 0 {
            return Err(Error::Configuration(format!(
                "layout ({recurrent}, {constant}) encodes empty genes"
            )));
        }
        Ok(layout)
    }

    /// Whether genes of this layout carry classifier weights
    #[inline]
    pub fn has_classifier(&self) -> bool {
        self.constant != 0
    }

    /// Number of classifier features, recurrent outputs first
    #[inline]
    pub fn features(&self) -> usize {
        self.recurrent + self.constant
    }

    #[inline]
    pub fn cells_len(&self) -> usize {
        GENLSTM_CELL_PARAMS * self.recurrent
    }

    /// `12R` without static features, `12R + R + C + 1` with them
    #[inline]
    pub fn gene_len(&self) -> usize {
        if self.has_classifier() {
            self.cells_len() + self.features() + 1
        } else {
            self.cells_len()
        }
    }
}

/// Linear classifier weights. The gene stores `weights` then `bias`, traditionally
/// named `wvar1 .. wvar{R+C+1}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierWeights {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl ClassifierWeights {
    /// Weights from a gene tail whose last value is the bias
    pub fn from_tail(tail: &[f64]) -> Option<Self> {
        let (bias, weights) = tail.split_last()?;
        Some(Self {
            weights: weights.to_vec(),
            bias: *bias,
        })
    }
}

/// Everything a gene decodes into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    /// One cell per recurrent variable, in variable column order
    pub cells: Vec<CellParams>,
    /// Present only when the layout has static features
    pub classifier: Option<ClassifierWeights>,
}

impl Weights {
    /// Flatten back into the gene these weights were decoded from
    pub fn flatten(&self) -> Gene {
        let mut gene: Gene = self.cells.iter().flat_map(|c| c.to_block()).collect();
        if let Some(classifier) = &self.classifier {
            gene.extend_from_slice(&classifier.weights);
            gene.push(classifier.bias);
        }
        gene
    }
}

/// Decode a gene into structured weights, validating its length against `layout`
pub fn decode(gene: &[f64], layout: Layout) -> Result<Weights> {
    let expected = layout.gene_len();
    if gene.len() != expected {
        return Err(Error::GeneLength {
            expected,
            actual: gene.len(),
        });
    }

    let cells = gene[..layout.cells_len()]
        .chunks_exact(GENLSTM_CELL_PARAMS)
        .map(CellParams::from_block)
        .collect();

    let classifier = if layout.has_classifier() {
        ClassifierWeights::from_tail(&gene[gene.len() - (layout.features() + 1)..])
    } else {
        None
    };

    Ok(Weights { cells, classifier })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::random::WyRng;
    use rand::Rng;

    #[test]
    fn test_gene_len() {
        assert_eq!(12, Layout::new(1, 0).unwrap().gene_len());
        assert_eq!(36, Layout::new(3, 0).unwrap().gene_len());
        assert_eq!(28, Layout::new(2, 1).unwrap().gene_len());
        assert_eq!(4, Layout::new(0, 3).unwrap().gene_len());
    }

    #[test]
    fn test_empty_layout() {
        assert!(matches!(Layout::new(0, 0), Err(Error::Configuration(_))));
    }

    #[test]
    fn test_decode_no_classifier() {
        let layout = Layout::new(3, 0).unwrap();
        let gene: Gene = (0..36).map(f64::from).collect();
        let weights = decode(&gene, layout).unwrap();
        assert!(weights.classifier.is_none());
        assert_eq!(3, weights.cells.len());
        for (idx, cell) in weights.cells.iter().enumerate() {
            assert_eq!(cell.to_block(), gene[idx * 12..(idx + 1) * 12]);
        }
    }

    #[test]
    fn test_decode_halves() {
        let layout = Layout::new(2, 1).unwrap();
        let weights = decode(&vec![0.5; layout.gene_len()], layout).unwrap();
        assert_eq!(2, weights.cells.len());
        for cell in weights.cells.iter() {
            assert!(cell.to_block().iter().all(|v| *v == 0.5));
        }
        let classifier = weights.classifier.unwrap();
        assert_eq!(vec![0.5; 3], classifier.weights);
        assert_eq!(0.5, classifier.bias);
    }

    #[test]
    fn test_decode_classifier_order() {
        let layout = Layout::new(1, 2).unwrap();
        let gene: Gene = (0..16).map(f64::from).collect();
        let classifier = decode(&gene, layout).unwrap().classifier.unwrap();
        assert_eq!(vec![12., 13., 14.], classifier.weights);
        assert_eq!(15., classifier.bias);
    }

    #[test]
    fn test_decode_bad_len() {
        let layout = Layout::new(2, 1).unwrap();
        assert_eq!(
            Err(Error::GeneLength {
                expected: 28,
                actual: 24
            }),
            decode(&[0.; 24], layout)
        );
        assert_eq!(
            Err(Error::GeneLength {
                expected: 12,
                actual: 13
            }),
            decode(&[0.; 13], Layout::new(1, 0).unwrap())
        );
    }

    #[test]
    fn test_flatten_restores_gene() {
        let mut rng = WyRng::seeded(11);
        for (r, c) in [(1, 0), (3, 0), (1, 1), (2, 1), (4, 3), (0, 2)] {
            let layout = Layout::new(r, c).unwrap();
            let gene: Gene = (0..layout.gene_len())
                .map(|_| rng.random_range(-2. ..2.))
                .collect();
            assert_eq!(gene, decode(&gene, layout).unwrap().flatten(), "{layout:?}");
        }
    }
}
