//! Centralized defaults for genetic search parameters.
//!
//! Every default used by [crate::config::SearchConfig] lives here with the `GENLSTM_` prefix.

// ============================================================================
// Gene Layout
// ============================================================================

/// Values per recurrent cell: 4 gates of (weight on short memory, weight on input, bias)
pub const GENLSTM_CELL_PARAMS: usize = 12;

/// Values per gate inside a cell block
pub const GENLSTM_GATE_PARAMS: usize = 3;

// ============================================================================
// Search Parameters
// ============================================================================

/// Number of genes per generation
pub const GENLSTM_POPULATION: usize = 100;

/// Upper bound on generations evaluated by a single search
pub const GENLSTM_GENERATIONS: usize = 100;

/// Chance of replacing any single mutable gene position with a fresh pool draw
pub const GENLSTM_MUTATION_PROB: f64 = 0.01;

/// Minimum improvement over the best fitness so far that resets patience
pub const GENLSTM_TOLERANCE: f64 = 1e-4;

/// Consecutive non-improving generations tolerated before stopping early
pub const GENLSTM_MAX_ATTEMPTS: usize = 10;

// ============================================================================
// Genetic Pool
// ============================================================================

/// Lower bound of the default evenly spaced genetic pool
pub const GENLSTM_POOL_MIN: f64 = -2.0;

/// Upper bound of the default evenly spaced genetic pool
pub const GENLSTM_POOL_MAX: f64 = 2.0;

/// Number of values in the default genetic pool
pub const GENLSTM_POOL_SIZE: usize = 50;

// ============================================================================
// Classification
// ============================================================================

/// Classifier outputs strictly above this are labelled 1
pub const GENLSTM_DECISION_THRESHOLD: f64 = 0.5;
