//! Control coefficients from samples.
//!
//! Every variant reduces to a tridiagonal system with unit off-diagonals and 4
//! on the interior diagonal; only the first and last diagonal entries differ.
//! Forward elimination on such a system produces the weight sequence
//!
//! `w₀ = 1 / d₀`, `wᵢ = 1 / (4 - wᵢ₋₁)`
//!
//! whose fixed points are `α = 2 - √3` and `β = 1/α`. The Möbius map
//! contracts towards `α` with ratio `α²`, giving the closed form
//!
//! `ρᵢ = (wᵢ - α) / (wᵢ - β) = ρ₀·α²ⁱ`
//!
//! so any weight can be recomputed on the backward pass instead of stored. A
//! first diagonal of 4 gives `ρ₀ = α⁴`, a first diagonal of 2 gives
//! `ρ₀ = -α²`. Past a short horizon `ρᵢ` is below machine epsilon and the
//! weight is `α` itself.
//!
//! Coefficients are written into one buffer of `n + 2` entries, where
//! `buf[j]` holds `cⱼ₋₁`. Forward intermediates live in the same buffer.

use alloc::vec;
use alloc::vec::Vec;

use crate::traits::FloatScalar;

use super::basis::alpha;
use super::{validate_fit, BoundaryCondition, InterpError};

/// Solve for the `n + 2` control coefficients `c₋₁ … cₙ` of the cardinal
/// cubic spline through `samples` on a grid of the given `spacing`.
///
/// # Errors
///
/// - [`InterpError::InvalidGridSize`] if fewer than 4 samples.
/// - [`InterpError::InvalidSpacing`] if `spacing <= 0`.
/// - [`InterpError::NonFiniteInput`] if a sample, the spacing or a boundary
///   derivative is not finite.
/// - [`InterpError::PeriodicMismatch`] for a periodic fit whose last sample
///   differs from the first.
///
/// # Example
///
/// ```
/// use cardinal_spline::{solve_coefficients, BoundaryCondition};
///
/// // Cubic data: not-a-knot reproduces it, cᵢ = p(i) - p''(i)/6
/// let ys = [0.0_f64, 1.0, 8.0, 27.0, 64.0];
/// let c = solve_coefficients(&ys, 1.0, &BoundaryCondition::NotAKnot).unwrap();
/// assert_eq!(c.len(), ys.len() + 2);
/// for (j, &cj) in c.iter().enumerate() {
///     let i = j as f64 - 1.0;
///     assert!((cj - (i * i * i - i)).abs() < 1e-12);
/// }
/// ```
pub fn solve_coefficients<T: FloatScalar>(
    samples: &[T],
    spacing: T,
    boundary: &BoundaryCondition<T>,
) -> Result<Vec<T>, InterpError> {
    validate_fit(samples, spacing, T::zero(), boundary)?;
    Ok(solve(samples, spacing, boundary))
}

/// Solver body; inputs already validated.
pub(super) fn solve<T: FloatScalar>(
    samples: &[T],
    spacing: T,
    boundary: &BoundaryCondition<T>,
) -> Vec<T> {
    let mut c = vec![T::zero(); samples.len() + 2];
    match *boundary {
        BoundaryCondition::Natural => {
            second_derivative(samples, spacing, T::zero(), T::zero(), &mut c)
        }
        BoundaryCondition::SecondDerivative { left, right } => {
            second_derivative(samples, spacing, left, right, &mut c)
        }
        BoundaryCondition::NotAKnot => not_a_knot(samples, &mut c),
        BoundaryCondition::Clamped { left, right } => {
            clamped(samples, spacing, left, right, &mut c)
        }
        BoundaryCondition::Periodic => periodic(samples, &mut c),
    }
    c
}

/// Closed-form forward weights for one reduced system.
struct Sweep<T> {
    alpha: T,
    beta: T,
    rho0: T,
    /// First index whose weight equals `α` to working precision.
    horizon: usize,
    /// Diagonal of the last row.
    last: T,
}

impl<T: FloatScalar> Sweep<T> {
    fn new(rho0: T, last: T) -> Self {
        let alpha = alpha::<T>();
        let alpha2 = alpha * alpha;
        let mut horizon = 0;
        let mut r = rho0.abs();
        while r > T::epsilon() {
            r = r * alpha2;
            horizon += 1;
        }
        Self {
            alpha,
            beta: alpha.recip(),
            rho0,
            horizon,
            last,
        }
    }

    /// First and last diagonal 4: rows next to known coefficients.
    fn interior() -> Self {
        let alpha = alpha::<T>();
        let four = T::from(4).unwrap();
        Self::new(alpha.powi(4), four)
    }

    /// First and last diagonal 2: slope rows, halved.
    fn slope() -> Self {
        let alpha = alpha::<T>();
        let two = T::one() + T::one();
        Self::new(-(alpha * alpha), two)
    }

    fn weight(&self, i: usize) -> T {
        if i >= self.horizon {
            return self.alpha;
        }
        let rho = self.rho0 * self.alpha.powi(2 * i as i32);
        (self.alpha - self.beta * rho) / (T::one() - rho)
    }

    /// Solve in place. `x` holds the right-hand side on entry and the
    /// solution on exit. A single unknown uses the last-row diagonal.
    fn run(&self, x: &mut [T]) {
        let m = x.len();
        match m {
            0 => return,
            1 => {
                x[0] = x[0] / self.last;
                return;
            }
            _ => {}
        }

        // Forward: x[i] <- gᵢ
        x[0] = x[0] * self.weight(0);
        for i in 1..m - 1 {
            x[i] = (x[i] - x[i - 1]) * self.weight(i);
        }
        x[m - 1] = (x[m - 1] - x[m - 2]) / (self.last - self.weight(m - 2));

        // Backward: x[i] <- gᵢ - wᵢ·xᵢ₊₁
        for i in (0..m - 1).rev() {
            x[i] = x[i] - self.weight(i) * x[i + 1];
        }
    }
}

/// `S''(x₀) = left`, `S''(xₙ₋₁) = right`; natural is the zero case.
///
/// Subtracting the curvature row from the interpolation row pins
/// `c₀ = y₀ - h²·left/6` and `cₙ₋₁ = yₙ₋₁ - h²·right/6`, leaving `c₁ … cₙ₋₂`.
fn second_derivative<T: FloatScalar>(ys: &[T], h: T, left: T, right: T, c: &mut [T]) {
    let n = ys.len();
    let two = T::one() + T::one();
    let six = T::from(6).unwrap();
    let h2 = h * h;

    c[1] = ys[0] - h2 * left / six;
    c[n] = ys[n - 1] - h2 * right / six;
    for i in 1..n - 1 {
        c[i + 1] = six * ys[i];
    }
    c[2] = c[2] - c[1];
    c[n - 1] = c[n - 1] - c[n];
    Sweep::interior().run(&mut c[2..n]);

    c[0] = h2 * left + two * c[1] - c[2];
    c[n + 1] = h2 * right + two * c[n] - c[n - 1];
}

/// `S'(x₀) = left`, `S'(xₙ₋₁) = right`.
///
/// The slope rows give `c₋₁ = c₁ - 2h·left` and `cₙ = cₙ₋₂ + 2h·right`;
/// folding them into the end interpolation rows leaves `(2, 1)` and `(1, 2)`
/// rows over `c₀ … cₙ₋₁`.
fn clamped<T: FloatScalar>(ys: &[T], h: T, left: T, right: T, c: &mut [T]) {
    let n = ys.len();
    let two = T::one() + T::one();
    let three = two + T::one();
    let six = three + three;

    c[1] = three * ys[0] + h * left;
    for i in 1..n - 1 {
        c[i + 1] = six * ys[i];
    }
    c[n] = three * ys[n - 1] - h * right;
    Sweep::slope().run(&mut c[1..n + 1]);

    c[0] = c[2] - two * h * left;
    c[n + 1] = c[n - 1] + two * h * right;
}

/// Third derivative continuous at x₁ and xₙ₋₂.
///
/// A vanishing fourth difference of `c₋₁ … c₃`, with the first three
/// interpolation rows eliminated, pins `c₁ = (8y₁ - y₀ - y₂) / 6`, and
/// likewise `cₙ₋₂` at the right end. The inner system covers `c₂ … cₙ₋₃`
/// and is empty for four samples.
fn not_a_knot<T: FloatScalar>(ys: &[T], c: &mut [T]) {
    let n = ys.len();
    let four = T::from(4).unwrap();
    let six = T::from(6).unwrap();
    let eight = T::from(8).unwrap();

    c[2] = (eight * ys[1] - ys[0] - ys[2]) / six;
    c[n - 1] = (eight * ys[n - 2] - ys[n - 1] - ys[n - 3]) / six;
    if n > 4 {
        for i in 2..n - 2 {
            c[i + 1] = six * ys[i];
        }
        c[3] = c[3] - c[2];
        c[n - 2] = c[n - 2] - c[n - 1];
        Sweep::interior().run(&mut c[3..n - 1]);
    }

    // Remaining coefficients from the end interpolation rows
    c[1] = six * ys[1] - four * c[2] - c[3];
    c[0] = six * ys[0] - four * c[1] - c[2];
    c[n] = six * ys[n - 2] - four * c[n - 1] - c[n - 2];
    c[n + 1] = six * ys[n - 1] - four * c[n] - c[n - 1];
}

/// Circulant system over `p = n - 1` distinct coefficients.
///
/// Splitting off `c₀`, the rest is `cᵢ = uᵢ + c₀·vᵢ` where `u` solves the
/// interior system with zero ends and `v` is the homogeneous solution with
/// `v₀ = vₚ = 1`:
///
/// `vᵢ = (zⁱ + zᵖ⁻ⁱ) / (1 + zᵖ)`, `z = -α`
///
/// The wrapped row 0 then closes for `c₀`.
fn periodic<T: FloatScalar>(ys: &[T], c: &mut [T]) {
    let n = ys.len();
    let p = n - 1;
    let two = T::one() + T::one();
    let four = two + two;
    let six = four + two;
    let z = -alpha::<T>();

    for i in 1..p {
        c[i + 1] = six * ys[i];
    }
    Sweep::interior().run(&mut c[2..p + 1]);

    let zp = z.powi(p as i32);
    let norm = T::one() + zp;
    let v_sum = two * (z + z.powi(p as i32 - 1)) / norm;
    let c0 = (six * ys[0] - c[2] - c[p]) / (four + v_sum);

    // Wrap-around correction, decaying away from both ends
    let scale = c0 / norm;
    let mut zi = z;
    for i in 1..p {
        c[i + 1] = c[i + 1] + scale * zi;
        zi = zi * z;
    }
    let mut zi = z;
    for i in (1..p).rev() {
        c[i + 1] = c[i + 1] + scale * zi;
        zi = zi * z;
    }

    c[1] = c0;
    c[n] = c0;
    c[0] = c[p];
    c[n + 1] = c[2];
}
