//! Search configuration, loadable from JSON.

use crate::{
    constants::{
        GENLSTM_GENERATIONS, GENLSTM_MAX_ATTEMPTS, GENLSTM_MUTATION_PROB, GENLSTM_POOL_MAX,
        GENLSTM_POOL_MIN, GENLSTM_POOL_SIZE, GENLSTM_POPULATION, GENLSTM_TOLERANCE,
    },
    data::linspace,
    error::{Error, Result},
};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Values genes are drawn from, both initially and when mutating
    pub pool: Vec<f64>,
    /// Genes per generation. Odd sizes lose one gene to reproduction after the first generation
    pub population: usize,
    /// Upper bound on generations evaluated
    pub generations: usize,
    /// Chance of replacing each mutable gene position
    pub mutation: f64,
    /// Minimum improvement over the best fitness so far that counts as progress
    pub tolerance: f64,
    /// Consecutive generations without progress before stopping early
    pub max_attempts: usize,
    /// Seed for a reproducible search, random when absent
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            pool: linspace(GENLSTM_POOL_MIN, GENLSTM_POOL_MAX, GENLSTM_POOL_SIZE),
            population: GENLSTM_POPULATION,
            generations: GENLSTM_GENERATIONS,
            mutation: GENLSTM_MUTATION_PROB,
            tolerance: GENLSTM_TOLERANCE,
            max_attempts: GENLSTM_MAX_ATTEMPTS,
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.pool.is_empty() {
            return Err(Error::Configuration("genetic pool is empty".to_string()));
        }
        if self.pool.iter().any(|v| !v.is_finite()) {
            return Err(Error::Configuration(
                "genetic pool holds non-finite values".to_string(),
            ));
        }
        if self.population < 2 {
            return Err(Error::Configuration(format!(
                "population of {} cannot reproduce",
                self.population
            )));
        }
        if !(0. ..=1.).contains(&self.mutation) {
            return Err(Error::Configuration(format!(
                "mutation probability {} is not within [0, 1]",
                self.mutation
            )));
        }
        if self.tolerance.is_nan() || self.tolerance < 0. {
            return Err(Error::Configuration(format!(
                "tolerance {} must be non-negative",
                self.tolerance
            )));
        }
        Ok(())
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)
            .map_err(|e| Error::Configuration(format!("malformed search config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let s = fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_str(&s)
    }
}
