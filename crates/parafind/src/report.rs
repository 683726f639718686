//! Column-oriented run report.
//!
//! Flattens a [`SolveResult`](crate::SolveResult) into parallel columns with
//! the roots pre-rendered through the complex display format, which is the
//! shape downstream consumers serialize (keys `iterations`, `roots`,
//! `errors`, `final_root`, `message`). Enable the `serialize` feature for
//! the serde derives.

use crate::solver::muller::SolveResult;
use az::CastFrom;
use num_traits::Float;
use std::fmt;

/// Wire-shaped view of a finished run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Report<T> {
    /// 1-based pass numbers of the trailing history.
    pub iterations: Vec<usize>,
    /// Candidate roots, rendered with six decimal digits.
    pub roots: Vec<String>,
    /// Per-pass errors.
    pub errors: Vec<T>,
    /// The final root, rendered like the history entries.
    pub final_root: String,
    /// Human-readable status message.
    pub message: String,
}

impl<T: Float + CastFrom<f64> + fmt::Display> Report<T> {
    pub fn new(result: &SolveResult<T>) -> Self {
        Self {
            iterations: result.history.iter().map(|it| it.index).collect(),
            roots: result.history.iter().map(|it| it.root.to_string()).collect(),
            errors: result.history.iter().map(|it| it.error).collect(),
            final_root: result.root.to_string(),
            message: result.status.to_string(),
        }
    }
}

impl<T: Float + CastFrom<f64> + fmt::Display> From<&SolveResult<T>> for Report<T> {
    fn from(result: &SolveResult<T>) -> Self {
        Self::new(result)
    }
}
