//! Minimal complex-number value type.
//!
//! This exists to carry candidate roots out of the parabolic step when the
//! discriminant goes negative. It is not a general complex-math library; it
//! provides exactly the arithmetic the solver and its report layer need.

use crate::solver::SolveError;
use az::CastFrom;
use num_traits::Float;
use std::fmt;
use std::ops;

/// A complex value with real and imaginary components.
///
/// Immutable value type; every operation returns a new value. All arithmetic is
/// total except division, which fails when the divisor has zero magnitude (see
/// [`Complex::checked_div`]).
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Complex<T> {
    /// Real component.
    pub re: T,
    /// Imaginary component.
    pub im: T,
}

impl<T> Complex<T> {
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

impl<T: Float> Complex<T> {
    /// A real number embedded in the complex plane.
    pub fn from_real(re: T) -> Self {
        Self {
            re,
            im: T::zero(),
        }
    }

    /// Euclidean norm `sqrt(re² + im²)`.
    pub fn magnitude(self) -> T {
        (self.re * self.re + self.im * self.im).sqrt()
    }

    /// Principal square root, computed in polar form.
    ///
    /// Returns the root whose half-angle lies in `(-π/2, π/2]`, i.e. the one
    /// with non-negative real part.
    pub fn sqrt(self) -> Self {
        let two = T::one() + T::one();
        let r = self.magnitude().sqrt();
        let half_theta = self.im.atan2(self.re) / two;
        Self {
            re: r * half_theta.cos(),
            im: r * half_theta.sin(),
        }
    }

    /// Complex division.
    ///
    /// Division is the one partial operation on this type, so it is only
    /// exposed fallibly: a divisor of zero magnitude returns
    /// [`SolveError::DivisionByZero`] instead of an IEEE non-finite value.
    pub fn checked_div(self, rhs: Self) -> Result<Self, SolveError> {
        let denom = rhs.re * rhs.re + rhs.im * rhs.im;
        if denom == T::zero() {
            return Err(SolveError::DivisionByZero);
        }
        Ok(Self {
            re: (self.re * rhs.re + self.im * rhs.im) / denom,
            im: (self.im * rhs.re - self.re * rhs.im) / denom,
        })
    }
}

impl<T: Float> ops::Add for Complex<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl<T: Float> ops::Sub for Complex<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl<T: Float> ops::Mul for Complex<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

impl<T: Float> ops::Neg for Complex<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl<T: Float + CastFrom<f64> + fmt::Display> fmt::Display for Complex<T> {
    /// Renders with six decimal digits; values whose imaginary component is
    /// below `1e-10` in magnitude render as plain reals. The threshold is a
    /// display-only epsilon and feeds no numeric decision.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im.abs() < T::cast_from(1e-10) {
            write!(f, "{:.6}", self.re)
        } else {
            write!(f, "{:.6} + {:.6}i", self.re, self.im)
        }
    }
}
