//! The forward-only model a gene expresses: one LSTM-like cell per time-varying variable,
//! whose final short term memories feed a binary linear classifier alongside static features.

pub mod cell;
pub mod classifier;
pub mod pipeline;
pub mod recurrent;

pub use cell::Memory;
pub use classifier::classify;
pub use pipeline::{predict, predict_individual};
pub use recurrent::{predict_series, predict_variable};

use crate::error::{Error, Result};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

pub mod activate {
    /// Logistic sigmoid, always within (0, 1) for finite input
    pub fn sigmoid(x: f64) -> f64 {
        1. / (1. + (-x).exp())
    }

    /// Hyperbolic tangent, always within (-1, 1) for finite input
    pub fn tanh(x: f64) -> f64 {
        x.tanh()
    }
}

/// Bounded nonlinearity applied to a gate's weighted sum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Squash {
    Sigmoid,
    Tanh,
}

impl Squash {
    #[inline]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Sigmoid => activate::sigmoid(x),
            Self::Tanh => activate::tanh(x),
        }
    }
}

impl FromStr for Squash {
    type Err = Error;

    /// Accepts `sigmoid` (or its historical alias `exp`) and `tanh`
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sigmoid" | "exp" => Ok(Self::Sigmoid),
            "tanh" => Ok(Self::Tanh),
            other => Err(Error::Configuration(format!(
                "unknown squash function {other:?}"
            ))),
        }
    }
}
