use super::Memory;
use crate::{
    error::{Error, Result},
    genome::CellParams,
};
use rulinalg::matrix::{BaseMatrix, Matrix};

/// Walk a fresh cell over column `column` of `series`, oldest row first, and return its final
/// short term memory. An empty series, or one without variables, predicts 0.
///
/// `column` should be within `series`, which [predict_series] checks.
pub fn predict_variable(series: &Matrix<f64>, column: usize, params: &CellParams) -> f64 {
    let mut memory = Memory::default();
    if series.cols() == 0 {
        return memory.output();
    }
    for x in series.data().iter().skip(column).step_by(series.cols()) {
        memory.step(*x, params);
    }
    memory.output()
}

/// Predict every variable of one individual's series, one cell per variable in column order.
/// There may be fewer cells than columns, but never more.
pub fn predict_series(series: &Matrix<f64>, cells: &[CellParams]) -> Result<Vec<f64>> {
    if cells.len() > series.cols() {
        return Err(Error::DimensionMismatch {
            what: "recurrent cells per series variable",
            expected: series.cols(),
            actual: cells.len(),
        });
    }

    Ok(cells
        .iter()
        .enumerate()
        .map(|(column, params)| predict_variable(series, column, params))
        .collect())
}
