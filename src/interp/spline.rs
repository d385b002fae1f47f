use alloc::vec::Vec;

use crate::traits::FloatScalar;

use super::basis::{antiderivatives, combine, weights};
use super::{
    locate, solver, validate_fit, validate_order, BoundaryCondition, Extrapolate, InterpError,
    UniformGrid,
};

/// Cubic cardinal B-spline interpolant on a uniform grid.
///
/// Holds the grid, the `n + 2` control coefficients `c₋₁ … cₙ` and the
/// boundary condition they were solved with. Immutable once fitted; re-fitting
/// produces a new value. Evaluation only reads, so a shared reference can be
/// used from any number of threads.
///
/// On interval `k` (between `xₖ` and `xₖ₊₁`) with `t = (x - xₖ)/h`:
/// `S(x) = Σⱼ Bⱼ(t)·cₖ₋₁₊ⱼ`, `j = 0 … 3`.
///
/// # Example
///
/// ```
/// use cardinal_spline::{BoundaryCondition, CardinalSpline};
///
/// let ys = [0.0_f64, 1.0, 0.0, -1.0, 0.0];
/// let spline = CardinalSpline::fit(&ys, 1.0, 0.0, BoundaryCondition::Natural).unwrap();
///
/// // Passes through the samples exactly
/// assert!((spline.eval(1.0) - 1.0).abs() < 1e-12);
/// assert!((spline.eval(3.0) + 1.0).abs() < 1e-12);
///
/// // Same value as the classical natural cubic spline
/// assert!((spline.eval(0.5) - 0.6875).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CardinalSpline<T> {
    grid: UniformGrid<T>,
    boundary: BoundaryCondition<T>,
    extrapolate: Extrapolate,
    // c₋₁ … cₙ; coeffs[j] is cⱼ₋₁
    coeffs: Vec<T>,
}

impl<T: FloatScalar> CardinalSpline<T> {
    /// Fit the spline through `samples` taken at `origin + i·spacing`.
    ///
    /// Periodic fits default to [`Extrapolate::Periodic`], all others to
    /// [`Extrapolate::Extend`].
    ///
    /// # Errors
    ///
    /// - [`InterpError::InvalidGridSize`] if fewer than 4 samples.
    /// - [`InterpError::InvalidSpacing`] if `spacing <= 0`.
    /// - [`InterpError::NonFiniteInput`] if a sample, the origin, the spacing
    ///   or a boundary derivative is not finite.
    /// - [`InterpError::PeriodicMismatch`] for a periodic fit whose last
    ///   sample differs from the first.
    ///
    /// Nothing is built unless every check passes.
    pub fn fit(
        samples: &[T],
        spacing: T,
        origin: T,
        boundary: BoundaryCondition<T>,
    ) -> Result<Self, InterpError> {
        if let Err(err) = validate_fit(samples, spacing, origin, &boundary) {
            log::warn!("rejecting fit of {} samples: {}", samples.len(), err);
            return Err(err);
        }
        log::debug!(
            "fitting {} samples, spacing {:?}, boundary {:?}",
            samples.len(),
            spacing,
            boundary
        );

        let coeffs = solver::solve(samples, spacing, &boundary);
        let extrapolate = match boundary {
            BoundaryCondition::Periodic => Extrapolate::Periodic,
            _ => Extrapolate::Extend,
        };
        Ok(Self {
            grid: UniformGrid::new(origin, spacing, samples.len()),
            boundary,
            extrapolate,
            coeffs,
        })
    }

    /// Same spline with a different treatment of out-of-range queries.
    ///
    /// # Example
    ///
    /// ```
    /// use cardinal_spline::{BoundaryCondition, CardinalSpline, Extrapolate};
    ///
    /// let ys = [0.0_f64, 1.0, 2.0, 3.0];
    /// let line = CardinalSpline::fit(&ys, 1.0, 0.0, BoundaryCondition::Natural).unwrap();
    /// assert!((line.eval(5.0) - 5.0).abs() < 1e-12);
    ///
    /// let wrapped = line.with_extrapolate(Extrapolate::Periodic);
    /// assert!((wrapped.eval(5.0) - 2.0).abs() < 1e-12); // 5 wraps to 2
    /// ```
    pub fn with_extrapolate(mut self, mode: Extrapolate) -> Self {
        self.extrapolate = mode;
        self
    }

    /// Evaluate the spline at `x`.
    pub fn eval(&self, x: T) -> T {
        self.eval_unchecked(x, 0)
    }

    /// Evaluate the spline and its first derivative at `x`.
    pub fn eval_derivative(&self, x: T) -> (T, T) {
        let (k, t) = self.locate(x);
        let window = &self.coeffs[k..k + 4];
        let value = combine(&weights(t, 0), window);
        let slope = combine(&weights(t, 1), window) / self.grid.spacing();
        (value, slope)
    }

    /// Evaluate the `order`-th derivative at `x` (`order = 0` is the value).
    ///
    /// The third derivative is constant on each interval and may jump at
    /// knots; at a knot the interval to its right is used.
    ///
    /// # Errors
    ///
    /// [`InterpError::UnsupportedDerivativeOrder`] if `order > 3`.
    pub fn eval_nth(&self, x: T, order: usize) -> Result<T, InterpError> {
        validate_order(order)?;
        Ok(self.eval_unchecked(x, order))
    }

    /// Evaluate the `order`-th derivative at every query, preserving order.
    ///
    /// # Errors
    ///
    /// - [`InterpError::UnsupportedDerivativeOrder`] if `order > 3`, checked
    ///   before any query is looked at.
    /// - [`InterpError::NonFiniteInput`] if any query is NaN or infinite.
    pub fn evaluate(&self, queries: &[T], order: usize) -> Result<Vec<T>, InterpError> {
        let mut out = alloc::vec![T::zero(); queries.len()];
        self.evaluate_into(queries, order, &mut out)?;
        Ok(out)
    }

    /// Like [`evaluate`](Self::evaluate), writing into caller storage.
    ///
    /// `out` is left untouched on error.
    ///
    /// # Errors
    ///
    /// As [`evaluate`](Self::evaluate), plus [`InterpError::LengthMismatch`]
    /// if `out.len() != queries.len()`.
    pub fn evaluate_into(
        &self,
        queries: &[T],
        order: usize,
        out: &mut [T],
    ) -> Result<(), InterpError> {
        validate_order(order)?;
        if out.len() != queries.len() {
            return Err(InterpError::LengthMismatch);
        }
        if queries.iter().any(|x| !x.is_finite()) {
            return Err(InterpError::NonFiniteInput);
        }
        log::trace!("evaluating order {} at {} points", order, queries.len());

        for (y, &x) in out.iter_mut().zip(queries) {
            *y = self.eval_unchecked(x, order);
        }
        Ok(())
    }

    /// Definite integral of the spline from `a` to `b`.
    ///
    /// Outside the grid the integrand follows the extrapolation mode: the
    /// boundary cubics are integrated as they extend, or whole periods are
    /// summed in periodic mode. `integrate(b, a) == -integrate(a, b)`.
    ///
    /// # Example
    ///
    /// ```
    /// use cardinal_spline::{BoundaryCondition, CardinalSpline};
    ///
    /// // y = x² is reproduced exactly by not-a-knot
    /// let ys: Vec<f64> = (0..6).map(|i| (i * i) as f64).collect();
    /// let s = CardinalSpline::fit(&ys, 1.0, 0.0, BoundaryCondition::NotAKnot).unwrap();
    /// assert!((s.integrate(0.0, 3.0) - 9.0).abs() < 1e-12);
    /// ```
    pub fn integrate(&self, a: T, b: T) -> T {
        if a > b {
            return -self.integrate(b, a);
        }
        match self.extrapolate {
            Extrapolate::Extend => self.integrate_extended(a, b),
            Extrapolate::Periodic => self.primitive_periodic(b) - self.primitive_periodic(a),
        }
    }

    /// The grid the spline was fitted on.
    pub fn grid(&self) -> &UniformGrid<T> {
        &self.grid
    }

    /// The boundary condition the spline was fitted with.
    pub fn boundary(&self) -> &BoundaryCondition<T> {
        &self.boundary
    }

    /// Current treatment of out-of-range queries.
    pub fn extrapolate(&self) -> Extrapolate {
        self.extrapolate
    }

    /// Number of samples the spline was fitted to.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.grid.num_points()
    }

    /// The `n + 2` control coefficients, `c₋₁` first.
    pub fn coefficients(&self) -> &[T] {
        &self.coeffs
    }

    fn locate(&self, x: T) -> (usize, T) {
        let n = self.grid.num_points();
        let mut u = self.grid.to_grid_units(x);
        if self.extrapolate == Extrapolate::Periodic {
            let period = T::from(n - 1).unwrap();
            u = u - period * (u / period).floor();
            if u >= period {
                u = T::zero();
            }
        }
        locate(u, n)
    }

    fn eval_unchecked(&self, x: T, order: usize) -> T {
        let (k, t) = self.locate(x);
        self.eval_segment(k, t, order)
    }

    /// Interval `k`'s cubic at local offset `t`, any real `t`.
    pub(super) fn eval_segment(&self, k: usize, t: T, order: usize) -> T {
        let v = combine(&weights(t, order), &self.coeffs[k..k + 4]);
        match order {
            0 => v,
            _ => v / self.grid.spacing().powi(order as i32),
        }
    }

    /// `∫` over interval `k` between local offsets `t0` and `t1`.
    fn segment_integral(&self, k: usize, t0: T, t1: T) -> T {
        let a0 = antiderivatives(t0);
        let a1 = antiderivatives(t1);
        let w = [a1[0] - a0[0], a1[1] - a0[1], a1[2] - a0[2], a1[3] - a0[3]];
        combine(&w, &self.coeffs[k..k + 4]) * self.grid.spacing()
    }

    /// `∫` over a whole interior interval: `h·(cₖ₋₁ + 11cₖ + 11cₖ₊₁ + cₖ₊₂)/24`.
    fn full_segment_integral(&self, k: usize) -> T {
        let eleven = T::from(11).unwrap();
        let twenty_four = T::from(24).unwrap();
        let c = &self.coeffs[k..k + 4];
        (c[0] + eleven * (c[1] + c[2]) + c[3]) / twenty_four * self.grid.spacing()
    }

    /// Integral for `a <= b` with boundary cubics extended past the grid.
    fn integrate_extended(&self, a: T, b: T) -> T {
        let n = self.grid.num_points();
        let (ka, ta) = locate(self.grid.to_grid_units(a), n);
        let (kb, tb) = locate(self.grid.to_grid_units(b), n);
        if ka == kb {
            return self.segment_integral(ka, ta, tb);
        }
        let mut total = self.segment_integral(ka, ta, T::one());
        for k in ka + 1..kb {
            total = total + self.full_segment_integral(k);
        }
        total + self.segment_integral(kb, T::zero(), tb)
    }

    /// Running integral from `x₀` to `x`, counting whole periods.
    fn primitive_periodic(&self, x: T) -> T {
        let start = self.grid.start();
        let period = self.grid.period();
        let laps = ((x - start) / period).floor();
        let rest = (x - start) - laps * period;
        let one_period = self.integrate_extended(start, self.grid.end());
        laps * one_period + self.integrate_extended(start, start + rest)
    }
}

/// Fit a cardinal spline; free-function form of [`CardinalSpline::fit`].
pub fn fit<T: FloatScalar>(
    samples: &[T],
    spacing: T,
    origin: T,
    boundary: BoundaryCondition<T>,
) -> Result<CardinalSpline<T>, InterpError> {
    CardinalSpline::fit(samples, spacing, origin, boundary)
}

/// Evaluate a fitted spline; free-function form of
/// [`CardinalSpline::evaluate`].
pub fn evaluate<T: FloatScalar>(
    spline: &CardinalSpline<T>,
    queries: &[T],
    order: usize,
) -> Result<Vec<T>, InterpError> {
    spline.evaluate(queries, order)
}
