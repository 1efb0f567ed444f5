use crate::constants::{GENLSTM_CELL_PARAMS, GENLSTM_GATE_PARAMS};
use serde::{Deserialize, Serialize};

/// One gate of a recurrent cell, squashing `short · w_short + input · w_input + bias`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Gate {
    pub w_short: f64,
    pub w_input: f64,
    pub bias: f64,
}

impl Gate {
    pub fn new(w_short: f64, w_input: f64, bias: f64) -> Self {
        Self {
            w_short,
            w_input,
            bias,
        }
    }

    /// Weighted sum of this gate's inputs, before squashing
    #[inline]
    pub fn sum(&self, short: f64, input: f64) -> f64 {
        short * self.w_short + input * self.w_input + self.bias
    }

    #[inline]
    fn from_slice(v: &[f64]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    #[inline]
    fn to_array(self) -> [f64; GENLSTM_GATE_PARAMS] {
        [self.w_short, self.w_input, self.bias]
    }
}

/// Weights of the recurrent cell modelling a single variable.
///
/// Gene order is `forget, relevance, candidate, output`, each gate contributing
/// `(w_short, w_input, bias)`; traditionally named `w01 w11 b11 w02 w12 b12 w03 w13 b13 w04 w14 b14`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CellParams {
    /// How much long term memory is retained
    pub forget: Gate,
    /// How much of the candidate makes it into long term memory
    pub relevance: Gate,
    /// Candidate long term memory contribution
    pub candidate: Gate,
    /// How much of the squashed long term memory becomes the short term memory
    pub output: Gate,
}

impl CellParams {
    /// Build cell params out of one gene block. Panics unless `block` holds exactly
    /// [GENLSTM_CELL_PARAMS] values, length is checked by the codec before we get here.
    pub fn from_block(block: &[f64]) -> Self {
        assert_eq!(block.len(), GENLSTM_CELL_PARAMS, "cell block length");
        let mut gates = block.chunks_exact(GENLSTM_GATE_PARAMS).map(Gate::from_slice);
        let mut next = || gates.next().unwrap_or_default();
        Self {
            forget: next(),
            relevance: next(),
            candidate: next(),
            output: next(),
        }
    }

    /// The gene block these params were decoded from
    pub fn to_block(&self) -> [f64; GENLSTM_CELL_PARAMS] {
        let mut block = [0.; GENLSTM_CELL_PARAMS];
        for (dst, gate) in block.chunks_exact_mut(GENLSTM_GATE_PARAMS).zip([
            self.forget,
            self.relevance,
            self.candidate,
            self.output,
        ]) {
            dst.copy_from_slice(&gate.to_array());
        }
        block
    }
}
