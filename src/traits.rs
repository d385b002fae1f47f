use core::fmt::Debug;
use num_traits::Float;

/// Trait for floating-point sample and coefficient types.
///
/// Blanket-implemented for all types satisfying the bounds, which in practice
/// means `f32` and `f64`. Required by everything that needs `sqrt`, `floor`,
/// `powi` or finiteness checks.
///
/// `Float` is only available when `num-traits` is built with either the `std`
/// or the `libm` feature, so `no_std` users must enable this crate's `libm`
/// feature.
pub trait FloatScalar: Float + Debug {}

impl<T: Float + Debug> FloatScalar for T {}
