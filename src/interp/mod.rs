//! Cubic cardinal B-spline interpolation on uniform grids.
//!
//! Fitting runs the coefficient solver once and produces an immutable
//! [`CardinalSpline`] holding `n + 2` control coefficients `c₋₁ … cₙ`. The
//! spline satisfies, at every grid index `i`,
//!
//! `yᵢ = (cᵢ₋₁ + 4·cᵢ + cᵢ₊₁) / 6`
//!
//! plus two end conditions chosen by [`BoundaryCondition`]. Evaluation locates
//! the containing interval by division rather than search, then combines four
//! coefficients with the cubic B-spline basis. Out-of-range queries follow the
//! spline's [`Extrapolate`] mode.
//!
//! # Examples
//!
//! ```
//! use cardinal_spline::interp::{BoundaryCondition, CardinalSpline};
//!
//! // sin(x) on 9 points over [0, π]
//! let h = core::f64::consts::PI / 8.0;
//! let ys: Vec<f64> = (0..9).map(|i| (h * i as f64).sin()).collect();
//! let spline = CardinalSpline::fit(&ys, h, 0.0, BoundaryCondition::NotAKnot).unwrap();
//!
//! let x = 1.0;
//! assert!((spline.eval(x) - x.sin()).abs() < 5e-4);
//! let (_, slope) = spline.eval_derivative(x);
//! assert!((slope - x.cos()).abs() < 5e-3);
//! ```

mod basis;
mod boundary;
mod grid;
mod solver;
mod spline;


pub use boundary::{BoundaryCondition, Extrapolate};
pub use grid::UniformGrid;
pub use solver::solve_coefficients;
pub use spline::{evaluate, fit, CardinalSpline};

use crate::traits::FloatScalar;

/// Smallest number of samples that anchors a cubic.
pub const MIN_SAMPLES: usize = 4;

/// Highest derivative order the evaluator answers.
pub const MAX_DERIVATIVE_ORDER: usize = 3;

/// Errors from fitting and evaluating cardinal splines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InterpError {
    /// Fewer than four samples.
    InvalidGridSize,
    /// Boundary condition tag is not one of `natural`, `not-a-knot`,
    /// `clamped` or `periodic`.
    UnsupportedBoundaryCondition,
    /// Derivative order above three.
    UnsupportedDerivativeOrder,
    /// A sample, query, grid parameter or boundary derivative is NaN or infinite.
    NonFiniteInput,
    /// Grid spacing is zero or negative.
    InvalidSpacing,
    /// Periodic fit whose last sample does not repeat the first.
    PeriodicMismatch,
    /// Output buffer length differs from the number of queries.
    LengthMismatch,
}

impl core::fmt::Display for InterpError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InterpError::InvalidGridSize => {
                write!(f, "at least {MIN_SAMPLES} samples are required")
            }
            InterpError::UnsupportedBoundaryCondition => write!(
                f,
                "boundary condition must be one of natural, not-a-knot, clamped, periodic"
            ),
            InterpError::UnsupportedDerivativeOrder => {
                write!(f, "derivative order must be at most {MAX_DERIVATIVE_ORDER}")
            }
            InterpError::NonFiniteInput => write!(f, "inputs must be finite"),
            InterpError::InvalidSpacing => write!(f, "grid spacing must be positive"),
            InterpError::PeriodicMismatch => {
                write!(f, "periodic data must end with the value it starts with")
            }
            InterpError::LengthMismatch => {
                write!(f, "output length must equal the number of queries")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InterpError {}

/// Check everything the solver assumes before any pass touches the data.
///
/// Order: size, spacing, finiteness, periodic closure.
fn validate_fit<T: FloatScalar>(
    samples: &[T],
    spacing: T,
    origin: T,
    boundary: &BoundaryCondition<T>,
) -> Result<(), InterpError> {
    if samples.len() < MIN_SAMPLES {
        return Err(InterpError::InvalidGridSize);
    }
    if !spacing.is_finite() || !origin.is_finite() {
        return Err(InterpError::NonFiniteInput);
    }
    if spacing <= T::zero() {
        return Err(InterpError::InvalidSpacing);
    }
    if samples.iter().any(|y| !y.is_finite()) {
        return Err(InterpError::NonFiniteInput);
    }
    match *boundary {
        BoundaryCondition::Clamped { left, right }
        | BoundaryCondition::SecondDerivative { left, right } => {
            if !left.is_finite() || !right.is_finite() {
                return Err(InterpError::NonFiniteInput);
            }
        }
        BoundaryCondition::Periodic => {
            let first = samples[0];
            let last = samples[samples.len() - 1];
            let four = T::from(4).unwrap();
            let scale = first.abs().max(last.abs()).max(T::one());
            if (first - last).abs() > four * T::epsilon() * scale {
                return Err(InterpError::PeriodicMismatch);
            }
        }
        BoundaryCondition::Natural | BoundaryCondition::NotAKnot => {}
    }
    Ok(())
}

fn validate_order(order: usize) -> Result<(), InterpError> {
    if order > MAX_DERIVATIVE_ORDER {
        return Err(InterpError::UnsupportedDerivativeOrder);
    }
    Ok(())
}

/// Direct interval lookup on a uniform grid of `n` points.
///
/// `u` is the query in grid units, `(x - x₀) / h`. Returns `(k, t)` with
/// `k = floor(u)` clamped to `[0, n - 2]` and `t = u - k`. Inside the grid
/// `t ∈ [0, 1)` (or exactly 1 at the last knot); beyond either end `t` leaves
/// that range and the boundary interval's cubic is extended. A NaN query
/// yields `t = NaN`, so the result propagates NaN.
fn locate<T: FloatScalar>(u: T, n: usize) -> (usize, T) {
    debug_assert!(n >= 2);
    let last = n - 2;
    let k = if u <= T::zero() {
        0
    } else {
        u.floor().to_usize().map_or(last, |k| k.min(last))
    };
    (k, u - T::from(k).unwrap())
}
