//! Root-finding solvers and the seams they consume.

use thiserror::Error;

pub mod muller;

/// Trait defining a real-valued function of one real variable.
///
/// This is the seam through which callers inject the function whose root is
/// sought; the solver never sees an expression, only something it can
/// evaluate. Any failure the evaluator raises (a panic) unwinds through the
/// solver unchanged — there is no retry and no recovery.
pub trait RealFunction<T> {
    /// Evaluates the function at a point.
    fn eval(&self, x: T) -> T;
}

impl<T, F: Fn(T) -> T> RealFunction<T> for F {
    fn eval(&self, x: T) -> T {
        self(x)
    }
}

/// Fatal conditions that abort a solver run.
///
/// None of these is ever swallowed: each aborts the entire run with no
/// partial result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The divisor of a complex division has zero magnitude.
    #[error("complex division by a divisor of zero magnitude")]
    DivisionByZero,
    /// A denominator needed to advance the iteration was exactly zero.
    #[error("singular step at iteration {iteration}: denominator is zero")]
    SingularStep {
        /// 1-based iteration at which the step degenerated.
        iteration: usize,
    },
    /// Consecutive seed points coincide, leaving the finite-difference
    /// slopes undefined.
    #[error("seed points must satisfy p0 != p1 and p1 != p2")]
    InvalidSeeds,
}
