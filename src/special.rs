//! Normal quantile approximation for confidence intervals.

/// Approximation of the inverse standard normal CDF (quantile function).
///
/// Given `p ∈ (0, 1)`, returns `z` with `Φ(z) ≈ p`.
///
/// # Algorithm
/// Abramowitz & Stegun formula 26.2.23, rational approximation.
///
/// # Accuracy
/// Maximum absolute error < 4.5 × 10⁻⁴.
///
/// # Returns
/// - `f64::NAN` if `p` is outside `[0, 1]` or NaN.
/// - `f64::NEG_INFINITY` if `p == 0.0`, `f64::INFINITY` if `p == 1.0`.
///
/// # Examples
/// ```
/// use percolation::special::inverse_normal_cdf;
/// assert!((inverse_normal_cdf(0.975) - 1.96).abs() < 0.01);
/// ```
pub fn inverse_normal_cdf(p: f64) -> f64 {
    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p == 0.0 {
        return f64::NEG_INFINITY;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }

    let (q, sign) = if p > 0.5 { (1.0 - p, 1.0) } else { (p, -1.0) };
    let t = (-2.0 * q.ln()).sqrt();

    const C0: f64 = 2.515517;
    const C1: f64 = 0.802853;
    const C2: f64 = 0.010328;
    const D1: f64 = 1.432788;
    const D2: f64 = 0.189269;
    const D3: f64 = 0.001308;

    let z = t - (C0 + C1 * t + C2 * t * t) / (1.0 + D1 * t + D2 * t * t + D3 * t * t * t);
    sign * z
}
