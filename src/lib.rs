pub mod config;
pub mod constants;
pub mod crossover;
pub mod data;
pub mod error;
pub mod genome;
pub mod macros;
pub mod metric;
pub mod network;
pub mod population;
pub mod random;
pub mod reproduce;
pub mod scenario;

pub use config::SearchConfig;
pub use data::Dataset;
pub use error::{Error, Result};
pub use genome::{decode, Gene, Layout, Weights};
pub use metric::{MacroF1, Metric};
pub use scenario::{evolve, search, Classification, EvolutionHooks, Outcome, Scenario, Stats};
