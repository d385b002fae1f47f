use core::str::FromStr;

use crate::traits::FloatScalar;

use super::InterpError;

/// End conditions of the spline.
///
/// Each variant replaces only the two boundary equations of the coefficient
/// system; the interior pattern `(1, 4, 1) / 6` is shared by all of them.
///
/// # Example
///
/// ```
/// use cardinal_spline::BoundaryCondition;
///
/// let bc: BoundaryCondition<f64> = "not-a-knot".parse().unwrap();
/// assert_eq!(bc, BoundaryCondition::NotAKnot);
///
/// // "clamped" as a tag means zero slope at both ends
/// let bc: BoundaryCondition<f64> = "clamped".parse().unwrap();
/// assert_eq!(bc, BoundaryCondition::Clamped { left: 0.0, right: 0.0 });
///
/// assert!("quadratic".parse::<BoundaryCondition<f64>>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryCondition<T> {
    /// Zero second derivative at both ends.
    Natural,
    /// Third derivative continuous across the first and last interior knots,
    /// so the first two and the last two intervals share one cubic each.
    NotAKnot,
    /// Prescribed first derivative at each end.
    Clamped { left: T, right: T },
    /// Prescribed second derivative at each end. `Natural` is the zero case.
    SecondDerivative { left: T, right: T },
    /// Value and first two derivatives match across the wrap point. The
    /// period is `(n-1)·h` and the last sample must repeat the first.
    Periodic,
}

impl<T> Default for BoundaryCondition<T> {
    fn default() -> Self {
        BoundaryCondition::NotAKnot
    }
}

impl<T: FloatScalar> FromStr for BoundaryCondition<T> {
    type Err = InterpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        let is = |name: &str| tag.eq_ignore_ascii_case(name);
        if is("natural") {
            Ok(BoundaryCondition::Natural)
        } else if is("not-a-knot") || is("not_a_knot") || is("notaknot") {
            Ok(BoundaryCondition::NotAKnot)
        } else if is("clamped") {
            Ok(BoundaryCondition::Clamped {
                left: T::zero(),
                right: T::zero(),
            })
        } else if is("periodic") {
            Ok(BoundaryCondition::Periodic)
        } else {
            Err(InterpError::UnsupportedBoundaryCondition)
        }
    }
}

/// Treatment of queries outside `[x₀, x₀ + (n-1)·h]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extrapolate {
    /// Extend the cubic of the nearest boundary interval.
    #[default]
    Extend,
    /// Wrap the query into the base period before evaluating. Chosen
    /// automatically for splines fitted with [`BoundaryCondition::Periodic`].
    Periodic,
}
