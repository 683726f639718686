//! Muller's-method solver.
//!
//! Each pass fits a parabola through the three most recent points and steps
//! to the parabola zero nearest the newest point. A negative discriminant
//! produces a complex candidate root; the candidate is recorded in the
//! history as-is, but only its real component feeds the next pass, so the
//! iteration itself never leaves the real line.

use crate::complex::Complex;
use crate::solver::{RealFunction, SolveError};
use az::CastFrom;
use num_traits::Float;
use numeric_literals::replace_float_literals;
use std::fmt;

/// Muller's-method solver.
///
/// All parameters are expected positive; the iteration budget is the sole
/// bound on work performed. A run holds no state outside its stack frame, so
/// independent runs may execute concurrently without coordination.
pub struct Muller<T> {
    /// Number of passes after which the run stops unconverged.
    pub max_iterations: usize,
    /// Number of trailing iteration records kept in the result.
    pub history_size: usize,
    /// Convergence threshold on the per-pass error.
    pub tolerance: T,
}

impl<T> Muller<T> {
    pub const fn new(max_iterations: usize, history_size: usize, tolerance: T) -> Self {
        Self {
            max_iterations,
            history_size,
            tolerance,
        }
    }
}

/// One pass of the iteration. Created once per pass and never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct Iteration<T> {
    /// 1-based pass number.
    pub index: usize,
    /// Candidate root produced by this pass.
    pub root: Complex<T>,
    /// Absolute change of the real component since the previous pass.
    pub error: T,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum Status {
    /// The per-pass error dropped below the tolerance.
    Converged,
    /// The iteration budget ran out first.
    MaxIterationsReached,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Converged => f.write_str("Converged"),
            Status::MaxIterationsReached => f.write_str("Max iterations reached"),
        }
    }
}

/// Outcome of a run, owned by the caller.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct SolveResult<T> {
    /// The most recent `min(history_size, passes)` iteration records, in
    /// chronological order.
    pub history: Vec<Iteration<T>>,
    /// Root computed by the final pass.
    pub root: Complex<T>,
    /// Whether the run converged or exhausted its budget.
    pub status: Status,
}

impl<T: Float + CastFrom<f64>> Muller<T> {
    /// Runs the iteration on `function` from three seed points.
    ///
    /// The seeds must be distinct in sequence (`p0 != p1`, `p1 != p2`);
    /// otherwise the finite-difference slopes of the first pass are undefined
    /// and the run fails with [`SolveError::InvalidSeeds`]. A pass whose
    /// advancing denominator is exactly zero fails with
    /// [`SolveError::SingularStep`]; the run aborts with no partial result.
    #[replace_float_literals(T::cast_from(literal))]
    pub fn solve<F: RealFunction<T>>(
        &self,
        function: &F,
        seeds: [T; 3],
    ) -> Result<SolveResult<T>, SolveError> {
        let [mut p0, mut p1, mut p2] = seeds;
        if p1 == p0 || p2 == p1 {
            return Err(SolveError::InvalidSeeds);
        }

        let mut f0 = function.eval(p0);
        let mut f1 = function.eval(p1);
        let mut f2 = function.eval(p2);

        let mut history = Vec::new();
        let mut prev_root = p2;
        let mut last_root = Complex::from_real(p2);

        for i in 1..=self.max_iterations {
            let h0 = p1 - p0;
            let h1 = p2 - p1;
            let d0 = (f1 - f0) / h0;
            let d1 = (f2 - f1) / h1;

            let a = (d1 - d0) / (h1 + h0);
            let b = a * h1 + d1;
            let c = f2;

            let discriminant = b * b - 4.0 * a * c;

            let root = if discriminant >= 0.0 {
                let sqrt_disc = discriminant.sqrt();
                // The larger-magnitude denominator avoids catastrophic
                // cancellation in 2c / denom; ties go to `b + sqrt_disc`.
                let denom = if (b + sqrt_disc).abs() >= (b - sqrt_disc).abs() {
                    b + sqrt_disc
                } else {
                    b - sqrt_disc
                };
                if denom == 0.0 {
                    return Err(SolveError::SingularStep { iteration: i });
                }
                Complex::from_real(p2 - 2.0 * c / denom)
            } else {
                if a == 0.0 {
                    return Err(SolveError::SingularStep { iteration: i });
                }
                let two_a = 2.0 * a;
                Complex::new(p2 - b / two_a, (-discriminant).sqrt() / two_a)
            };

            // The error tracks the real component only, even for complex
            // candidates. Changing this would change convergence results.
            let error = (root.re - prev_root).abs();
            history.push(Iteration {
                index: i,
                root,
                error,
            });

            if error < self.tolerance {
                return Ok(self.finish(history, root, Status::Converged));
            }

            p0 = p1;
            f0 = f1;
            p1 = p2;
            f1 = f2;
            p2 = root.re;
            f2 = function.eval(p2);
            prev_root = root.re;
            last_root = root;
        }

        Ok(self.finish(history, last_root, Status::MaxIterationsReached))
    }

    /// Trims the run history to its trailing window and assembles the result.
    fn finish(
        &self,
        mut history: Vec<Iteration<T>>,
        root: Complex<T>,
        status: Status,
    ) -> SolveResult<T> {
        let excess = history.len().saturating_sub(self.history_size);
        history.drain(..excess);
        SolveResult {
            history,
            root,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    // f(x) = x³ - x² - x - 1, real root near x = 1.839287
    fn cubic(x: f64) -> f64 {
        x.powi(3) - x.powi(2) - x - 1.0
    }

    // f(x) = x² - 2, roots at ±√2
    fn quadratic(x: f64) -> f64 {
        x * x - 2.0
    }

    #[test]
    fn test_cubic_end_to_end() {
        let solver = Muller::new(50, 5, 1e-6);
        let result = solver.solve(&cubic, [0.0, 1.0, 2.0]).unwrap();

        assert_eq!(result.status, Status::Converged);
        assert_abs_diff_eq!(result.root.re, 1.839287, epsilon = 1e-5);
        assert_eq!(result.root.im, 0.0);
        assert!(result.history.len() <= 5);
        assert_eq!(result.history.last().unwrap().root, result.root);
    }

    #[test]
    fn test_quadratic_converges_quickly() {
        let solver = Muller::new(20, 20, 1e-10);
        let result = solver.solve(&quadratic, [0.0, 1.0, 2.0]).unwrap();

        assert_eq!(result.status, Status::Converged);
        assert_abs_diff_eq!(result.root.re, 2f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn test_closure_function() {
        let offset = 2.0;
        let solver = Muller::new(20, 5, 1e-10);
        let result = solver.solve(&|x: f64| x * x - offset, [0.0, 1.0, 2.0]).unwrap();

        assert_eq!(result.status, Status::Converged);
        assert_abs_diff_eq!(result.root.re, 2f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn test_history_indices_consecutive() {
        let solver = Muller::new(50, 3, 1e-12);
        let result = solver.solve(&cubic, [0.0, 1.0, 2.0]).unwrap();

        assert_eq!(result.history.len(), 3);
        for pair in result.history.windows(2) {
            assert_eq!(pair[1].index, pair[0].index + 1);
        }
    }

    #[test]
    fn test_history_shorter_than_window() {
        let solver = Muller::new(2, 100, 1e-12);
        let result = solver.solve(&cubic, [0.0, 1.0, 2.0]).unwrap();

        assert_eq!(result.status, Status::MaxIterationsReached);
        assert_eq!(result.history.len(), 2);
        assert_eq!(result.history[0].index, 1);
        assert_eq!(result.history[1].index, 2);
    }

    #[test]
    fn test_max_iterations_reached() {
        let solver = Muller::new(3, 5, 1e-6);
        let result = solver.solve(&cubic, [0.0, 1.0, 2.0]).unwrap();

        assert_eq!(result.status, Status::MaxIterationsReached);
        assert_eq!(result.history.len(), 3);
        // The final root is the one computed by the last pass.
        assert_eq!(result.root, result.history.last().unwrap().root);
    }

    #[test]
    fn test_tie_break_takes_positive_branch() {
        // Seeds chosen so the first pass has b == 0: both denominators have
        // the same magnitude, and the +sqrt branch must win, stepping towards
        // +√2 instead of -√2.
        let solver = Muller::new(1, 10, 1e-12);
        let result = solver.solve(&quadratic, [-1.0, 1.0, 0.0]).unwrap();

        assert_abs_diff_eq!(result.history[0].root.re, 2f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_complex_candidate_root() {
        // f(x) = x² + 1 has no real roots; the first parabola through
        // (0, 1), (1, 2), (2, 5) has discriminant -4 and candidate root i.
        let solver = Muller::new(1, 10, 1e-12);
        let result = solver.solve(&|x: f64| x * x + 1.0, [0.0, 1.0, 2.0]).unwrap();

        assert_eq!(result.history[0].root, Complex::new(0.0, 1.0));
        assert_eq!(result.root, Complex::new(0.0, 1.0));
    }

    #[test]
    fn test_iteration_stays_real_after_complex_candidate() {
        let solver = Muller::new(6, 10, 1e-15);
        let result = solver.solve(&|x: f64| x * x + 1.0, [0.0, 1.0, 2.0]).unwrap();

        assert!(result.history[0].root.im != 0.0);
        // Later passes exist and carry consecutive indices: the run kept
        // going on the real line after logging the complex candidate.
        assert!(result.history.len() > 1);
        for pair in result.history.windows(2) {
            assert_eq!(pair[1].index, pair[0].index + 1);
        }
    }

    #[test]
    fn test_invalid_seeds() {
        let solver = Muller::new(10, 5, 1e-6);
        assert_eq!(
            solver.solve(&cubic, [1.0, 1.0, 2.0]),
            Err(SolveError::InvalidSeeds)
        );
        assert_eq!(
            solver.solve(&cubic, [0.0, 1.0, 1.0]),
            Err(SolveError::InvalidSeeds)
        );
    }

    #[test]
    fn test_singular_step() {
        // With f(x) = x² and seeds (-1, 1, 0), the first parabola has b = 0
        // and c = 0, so both denominators are exactly zero.
        let solver = Muller::new(10, 5, 1e-6);
        assert_eq!(
            solver.solve(&|x: f64| x * x, [-1.0, 1.0, 0.0]),
            Err(SolveError::SingularStep { iteration: 1 })
        );
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(Status::Converged.to_string(), "Converged");
        assert_eq!(Status::MaxIterationsReached.to_string(), "Max iterations reached");
    }

    #[cfg(not(miri))]
    proptest! {
        #[test]
        fn test_history_bound(max_iterations in 1usize..40, history_size in 1usize..10) {
            let solver = Muller::new(max_iterations, history_size, 1e-9);
            let result = solver.solve(&cubic, [0.0, 1.0, 2.0]).unwrap();

            let passes = result.history.last().unwrap().index;
            prop_assert!(passes <= max_iterations);
            prop_assert_eq!(result.history.len(), passes.min(history_size));

            for pair in result.history.windows(2) {
                prop_assert_eq!(pair[1].index, pair[0].index + 1);
            }
        }

        #[test]
        fn test_runs_are_deterministic(p2 in 1.5..4.0f64) {
            // A run owns all of its state, so repeating it reproduces the
            // history, root and status exactly.
            let solver = Muller::new(50, 5, 1e-9);
            let first = solver.solve(&cubic, [0.0, 1.0, p2]).unwrap();
            let second = solver.solve(&cubic, [0.0, 1.0, p2]).unwrap();

            prop_assert_eq!(first, second);
        }
    }
}
