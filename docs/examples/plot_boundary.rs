// Boundary condition comparison: sin(x) sampled at 6 knots on [0, 2π].
// Prints JSON with knot points and 200 evaluation points for each variant:
//   {"kx":[...], "ky":[...], "x":[...], "y_true":[...],
//    "y_natural":[...], "y_not_a_knot":[...], "y_clamped":[...], "y_periodic":[...]}
// Set RUST_LOG=debug to see each fit logged on stderr.

use cardinal_spline::{BoundaryCondition, CardinalSpline};

fn fmt_arr(v: &[f64]) -> String {
    let inner: Vec<String> = v.iter().map(|x| format!("{x:.6}")).collect();
    format!("[{}]", inner.join(","))
}

fn main() {
    env_logger::init();

    let tau = 2.0 * std::f64::consts::PI;
    let h = tau / 5.0;
    let kx: [f64; 6] = core::array::from_fn(|i| h * i as f64);
    let mut ky: [f64; 6] = core::array::from_fn(|i| kx[i].sin());
    // sin(2π) rounds to about -2.4e-16; close the period exactly
    ky[5] = ky[0];

    let fit = |bc| CardinalSpline::fit(&ky, h, 0.0, bc).unwrap();
    let natural = fit(BoundaryCondition::Natural);
    let not_a_knot = fit(BoundaryCondition::NotAKnot);
    let clamped = fit(BoundaryCondition::Clamped {
        left: 1.0,
        right: 1.0,
    }); // sin' = cos
    let periodic = fit(BoundaryCondition::Periodic);

    const N: usize = 200;
    let x_vals: Vec<f64> = (0..N).map(|i| tau * i as f64 / (N - 1) as f64).collect();
    let y_true: Vec<f64> = x_vals.iter().map(|x| x.sin()).collect();

    println!(
        "{{\"kx\":{},\"ky\":{},\"x\":{},\"y_true\":{},\"y_natural\":{},\"y_not_a_knot\":{},\"y_clamped\":{},\"y_periodic\":{}}}",
        fmt_arr(&kx),
        fmt_arr(&ky),
        fmt_arr(&x_vals),
        fmt_arr(&y_true),
        fmt_arr(&natural.evaluate(&x_vals, 0).unwrap()),
        fmt_arr(&not_a_knot.evaluate(&x_vals, 0).unwrap()),
        fmt_arr(&clamped.evaluate(&x_vals, 0).unwrap()),
        fmt_arr(&periodic.evaluate(&x_vals, 0).unwrap()),
    );
}
