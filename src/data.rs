//! Prepared data a search scores genes against, and helpers for getting tabular records into
//! that shape.

use crate::{
    error::{Error, Result},
    genome::Layout,
};
use core::hash::Hash;
use rulinalg::matrix::{BaseMatrix, Matrix};
use std::collections::HashMap;

/// Labelled individuals. Each individual has a time series of observations (rows are time steps,
/// columns are variables), an optional row of static features, and a binary label.
#[derive(Debug, Clone)]
pub struct Dataset {
    sequences: Vec<Matrix<f64>>,
    statics: Option<Matrix<f64>>,
    labels: Vec<u8>,
}

impl Dataset {
    /// Validate and bundle prepared data. Every sequence must share one variable width, the
    /// static matrix must have a row per individual, and labels must be 0 or 1.
    pub fn new(
        sequences: Vec<Matrix<f64>>,
        statics: Option<Matrix<f64>>,
        labels: Vec<u8>,
    ) -> Result<Self> {
        if sequences.len() != labels.len() {
            return Err(Error::Data(format!(
                "{} sequences but {} labels",
                sequences.len(),
                labels.len()
            )));
        }

        if let Some(width) = sequences.first().map(|s| s.cols()) {
            if let Some((idx, s)) = sequences
                .iter()
                .enumerate()
                .find(|(_, s)| s.cols() != width)
            {
                return Err(Error::Data(format!(
                    "sequence {idx} has {} variables, expected {width}",
                    s.cols()
                )));
            }
        }

        if let Some(m) = &statics {
            if m.rows() != labels.len() {
                return Err(Error::Data(format!(
                    "{} static rows for {} individuals",
                    m.rows(),
                    labels.len()
                )));
            }
        }

        if let Some(label) = labels.iter().find(|l| **l > 1) {
            return Err(Error::Data(format!("label {label} is not binary")));
        }

        Ok(Self {
            sequences,
            statics,
            labels,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[inline]
    pub fn labels(&self) -> &[u8] {
        &self.labels
    }

    #[inline]
    pub fn sequences(&self) -> &[Matrix<f64>] {
        &self.sequences
    }

    #[inline]
    pub fn sequence(&self, idx: usize) -> &Matrix<f64> {
        &self.sequences[idx]
    }

    /// Static features of individual `idx`, empty when there are none
    pub fn statics(&self, idx: usize) -> &[f64] {
        match &self.statics {
            Some(m) => m.row(idx).raw_slice(),
            None => &[],
        }
    }

    /// Number of variables observed over time
    pub fn variables(&self) -> usize {
        self.sequences.first().map_or(0, |s| s.cols())
    }

    /// Number of static features per individual
    pub fn constants(&self) -> usize {
        self.statics.as_ref().map_or(0, |m| m.cols())
    }

    /// Gene layout modelling every variable and static feature in this data
    pub fn layout(&self) -> Result<Layout> {
        Layout::new(self.variables(), self.constants())
    }
}

/// Group tabular records by individual into one sequence matrix per individual, in the order
/// individuals are first seen. Records of one individual keep their relative order as time
/// steps, and every record must have the same width.
pub fn group_records<K: Eq + Hash>(
    records: impl IntoIterator<Item = (K, Vec<f64>)>,
) -> Result<Vec<Matrix<f64>>> {
    let mut order: HashMap<K, usize> = HashMap::new();
    let mut grouped: Vec<(usize, Vec<f64>)> = Vec::new();
    let mut width = None;

    for (key, row) in records {
        match width {
            None => width = Some(row.len()),
            Some(w) if w != row.len() => {
                return Err(Error::Data(format!(
                    "record of width {} among records of width {w}",
                    row.len()
                )))
            }
            _ => (),
        }

        let next = grouped.len();
        let idx = *order.entry(key).or_insert(next);
        if idx == next {
            grouped.push((0, Vec::new()));
        }
        let (rows, data) = &mut grouped[idx];
        *rows += 1;
        data.extend(row);
    }

    let width = width.unwrap_or(0);
    Ok(grouped
        .into_iter()
        .map(|(rows, data)| Matrix::new(rows, width, data))
        .collect())
}

/// Split a flat matrix of `individuals` stacked, equally long sequences into one matrix each
pub fn reshape_uniform(flat: &Matrix<f64>, individuals: usize) -> Result<Vec<Matrix<f64>>> {
    if individuals == 0 || flat.rows() % individuals != 0 {
        return Err(Error::Data(format!(
            "{} rows do not split evenly between {individuals} individuals",
            flat.rows()
        )));
    }

    let steps = flat.rows() / individuals;
    let cols = flat.cols();
    let block = steps * cols;
    Ok((0..individuals)
        .map(|idx| Matrix::new(steps, cols, flat.data()[idx * block..(idx + 1) * block].to_vec()))
        .collect())
}

/// `n` evenly spaced values from `lo` to `hi` inclusive, the usual genetic pool
pub fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![lo],
        _ => {
            let step = (hi - lo) / (n - 1) as f64;
            (0..n).map(|i| lo + step * i as f64).collect()
        }
    }
}
