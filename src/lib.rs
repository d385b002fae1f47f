//! # cardinal-spline
//!
//! Cubic cardinal B-spline interpolation for data sampled on a uniformly spaced
//! grid. A faster, drop-in alternative to a general cubic spline when the knots
//! are equally spaced: control coefficients come from a closed-form two-pass
//! recursion instead of a banded solve, and every query is answered in O(1)
//! without an interval search.
//!
//! ## Quick start
//!
//! ```
//! use cardinal_spline::{BoundaryCondition, CardinalSpline};
//!
//! let samples = [0.0_f64, 1.0, 0.0, -1.0, 0.0];
//! let spline = CardinalSpline::fit(&samples, 1.0, 0.0, BoundaryCondition::Natural).unwrap();
//!
//! // Passes through every sample
//! let at_knots = spline.evaluate(&[0.0, 1.0, 2.0, 3.0, 4.0], 0).unwrap();
//! for (v, y) in at_knots.iter().zip(samples.iter()) {
//!     assert!((v - y).abs() < 1e-12);
//! }
//!
//! // Second derivative vanishes at the ends
//! assert!(spline.eval_nth(0.0, 2).unwrap().abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`interp`]: The coefficient solver, the fitted [`CardinalSpline`] and its
//!   evaluator (values, derivatives up to third order, definite integrals),
//!   the [`BoundaryCondition`] variants, the [`UniformGrid`] descriptor and
//!   [`InterpError`].
//!
//! - [`traits`]: [`FloatScalar`], the element bound (`f32`, `f64`).
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Hardware FPU via system libm, `std::error::Error` impls |
//! | `libm`  | no      | Pure-Rust software float fallback for `no_std` targets |
//!
//! A heap allocator is always required: each fitted spline owns its `n + 2`
//! control coefficients.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod interp;
pub mod traits;

pub use interp::{
    evaluate, fit, solve_coefficients, BoundaryCondition, CardinalSpline, Extrapolate,
    InterpError, UniformGrid,
};
pub use traits::FloatScalar;
