//! Root finding for real-valued functions of one real variable using Muller's method.
//!
//! Muller's method fits a parabola through the three most recent points and steps to
//! the nearest zero of that parabola, giving near-cubic convergence without requiring
//! derivatives. When the parabola's discriminant goes negative, the candidate root is
//! complex; the candidate is recorded as-is while the iteration itself continues on
//! the real line.
//!
//! # Usage
//!
//! ```
//! use parafind::{Muller, Status};
//!
//! let solver = Muller::new(50, 5, 1e-6);
//! let result = solver
//!     .solve(&|x: f64| x.powi(3) - x.powi(2) - x - 1.0, [0.0, 1.0, 2.0])
//!     .unwrap();
//!
//! assert_eq!(result.status, Status::Converged);
//! assert!((result.root.re - 1.839287).abs() < 1e-5);
//! ```

pub mod complex;
pub mod report;
pub mod solver;

pub use complex::Complex;
pub use solver::muller::{Iteration, Muller, SolveResult, Status};
pub use solver::{RealFunction, SolveError};
