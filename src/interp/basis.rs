//! Cubic B-spline basis on one interval and the constants of the interior
//! recurrence.
//!
//! On interval `k` with local offset `t ∈ [0, 1]` the four nonzero basis
//! functions multiply `cₖ₋₁ … cₖ₊₂`:
//!
//! ```text
//! B₀(t) = (1 - t)³ / 6
//! B₁(t) = (3t³ - 6t² + 4) / 6
//! B₂(t) = (-3t³ + 3t² + 3t + 1) / 6
//! B₃(t) = t³ / 6
//! ```

use crate::traits::FloatScalar;

/// Magnitude of the decaying root of `1 + 4z + z² = 0`, `α = 2 - √3`.
///
/// The root itself is `-α`.
pub(super) fn alpha<T: FloatScalar>() -> T {
    let two = T::one() + T::one();
    let three = two + T::one();
    two - three.sqrt()
}

/// Weights of `cₖ₋₁ … cₖ₊₂` for the `order`-th derivative with respect to
/// `t`. Divide by `hᵒʳᵈᵉʳ` for the derivative with respect to `x`.
///
/// `order` must be at most 3.
pub(super) fn weights<T: FloatScalar>(t: T, order: usize) -> [T; 4] {
    let one = T::one();
    let two = one + one;
    let three = two + one;
    let four = two + two;
    let six = three + three;
    let s = one - t;
    match order {
        0 => {
            let t2 = t * t;
            let t3 = t2 * t;
            [
                s * s * s / six,
                (three * t3 - six * t2 + four) / six,
                (-three * t3 + three * t2 + three * t + one) / six,
                t3 / six,
            ]
        }
        1 => {
            let t2 = t * t;
            [
                -s * s / two,
                (three * t2 - four * t) / two,
                (-three * t2 + two * t + one) / two,
                t2 / two,
            ]
        }
        2 => [s, three * t - two, one - three * t, t],
        3 => [-one, three, -three, one],
        _ => unreachable!("derivative order checked by caller"),
    }
}

/// Integrals `∫₀ᵗ Bⱼ(s) ds` of the four basis functions.
pub(super) fn antiderivatives<T: FloatScalar>(t: T) -> [T; 4] {
    let one = T::one();
    let two = one + one;
    let three = two + one;
    let four = two + two;
    let six = three + three;
    let eight = four + four;
    let twenty_four = four * six;
    let s = one - t;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    [
        (one - s * s * s * s) / twenty_four,
        t4 / eight - t3 / three + two * t / three,
        -t4 / eight + t3 / six + t2 / four + t / six,
        t4 / twenty_four,
    ]
}

/// Weighted sum `Σ wⱼ·cⱼ` over one four-coefficient window.
#[inline]
pub(super) fn combine<T: FloatScalar>(w: &[T; 4], c: &[T]) -> T {
    w[0] * c[0] + w[1] * c[1] + w[2] * c[2] + w[3] * c[3]
}
