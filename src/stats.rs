//! Descriptive statistics over percolation threshold samples.
//!
//! # Algorithms
//!
//! - **Mean**: Neumaier compensated summation, O(ε) error independent of n.
//! - **Variance/StdDev**: Welford's online algorithm with Bessel's
//!   correction. A set of identical samples yields exactly `0.0`.
//!   Reference: Welford (1962), "Note on a Method for Calculating
//!   Corrected Sums of Squares and Products", *Technometrics* 4(3).

/// Computes the arithmetic mean using compensated summation.
///
/// # Returns
/// - `None` if `data` is empty or contains any NaN/Inf.
///
/// # Examples
/// ```
/// use percolation::stats::mean;
/// assert!((mean(&[0.5, 0.6, 0.7]).unwrap() - 0.6).abs() < 1e-15);
/// assert_eq!(mean(&[]), None);
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() || !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    Some(kahan_sum(data) / data.len() as f64)
}

/// Computes the sample variance (denominator `n − 1`).
///
/// # Returns
/// - `None` if `data.len() < 2` or contains NaN/Inf.
pub fn variance(data: &[f64]) -> Option<f64> {
    if data.len() < 2 || !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    let mut acc = WelfordAccumulator::new();
    for &x in data {
        acc.update(x);
    }
    acc.sample_variance()
}

/// Computes the sample standard deviation, `sqrt(variance(data))`.
///
/// # Returns
/// - `None` if `data.len() < 2` or contains NaN/Inf.
///
/// # Examples
/// ```
/// use percolation::stats::std_dev;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((std_dev(&v).unwrap() - 2.138089935299395).abs() < 1e-10);
/// assert_eq!(std_dev(&[1.0; 10]), Some(0.0));
/// ```
pub fn std_dev(data: &[f64]) -> Option<f64> {
    variance(data).map(f64::sqrt)
}

/// Neumaier compensated summation.
///
/// Improves on plain Kahan summation by also compensating when the
/// addend is larger in magnitude than the running sum.
///
/// Reference: Neumaier (1974), *ZAMM* 54(1), pp. 39–51.
pub fn kahan_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

/// Streaming mean and variance accumulator.
///
/// # Examples
/// ```
/// use percolation::stats::WelfordAccumulator;
/// let mut acc = WelfordAccumulator::new();
/// for &x in &[0.55, 0.60, 0.65] {
///     acc.update(x);
/// }
/// assert_eq!(acc.count(), 3);
/// assert!((acc.mean().unwrap() - 0.6).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WelfordAccumulator {
    count: u64,
    mean_acc: f64,
    m2: f64,
}

impl WelfordAccumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one sample.
    pub fn update(&mut self, value: f64) {
        self.count += 1;
        if self.count == 1 {
            self.mean_acc = value;
            return;
        }
        let delta = value - self.mean_acc;
        self.mean_acc += delta / self.count as f64;
        self.m2 += delta * (value - self.mean_acc);
    }

    /// Number of samples seen.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Running mean, or `None` before the first sample.
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean_acc)
    }

    /// Sample variance, or `None` with fewer than 2 samples.
    pub fn sample_variance(&self) -> Option<f64> {
        (self.count >= 2).then(|| self.m2 / (self.count - 1) as f64)
    }

    /// Sample standard deviation, or `None` with fewer than 2 samples.
    pub fn sample_std_dev(&self) -> Option<f64> {
        self.sample_variance().map(f64::sqrt)
    }
}
