use thiserror::Error;

/// Every way a search, or one of its pieces, can fail. None of these are recoverable: they are
/// handed back to whoever called the offending operation, and a search that meets one is over.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("dimension mismatch in {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("gene length mismatch: expected {expected}, got {actual}")]
    GeneLength { expected: usize, actual: usize },

    #[error("degenerate fitness: every individual scored zero")]
    DegenerateFitness,

    #[error("data error: {0}")]
    Data(String),
}

pub type Result<T> = core::result::Result<T, Error>;
