//! Monte Carlo estimation of the percolation threshold.
//!
//! Each trial opens uniformly random closed sites on a fresh grid until it
//! percolates and records the open fraction at that moment. The samples
//! are then summarised by their mean, sample standard deviation, and a
//! normal-approximation confidence interval `mean ± z·s/√T`.

use rand::Rng;
use tracing::{debug, info};

use crate::config::SimulationConfig;
use crate::error::{PercolationError, Result};
use crate::grid::Percolation;
use crate::random::{create_rng, random_site, trial_seed};
use crate::special::inverse_normal_cdf;
use crate::stats;

/// Critical value of the standard normal distribution at 97.5%.
pub const Z_95: f64 = 1.96;

/// Runs one trial on a fresh `n × n` grid and returns the open fraction
/// at which it first percolates.
///
/// # Errors
/// [`PercolationError::InvalidArgument`] if `n == 0`.
pub fn run_trial<R: Rng>(n: usize, rng: &mut R) -> Result<f64> {
    let mut grid = Percolation::new(n)?;
    while !grid.percolates() {
        let (row, col) = loop {
            let (r, c) = random_site(n, rng);
            if !grid.is_open(r, c)? {
                break (r, c);
            }
        };
        grid.open(row, col)?;
    }
    Ok(grid.open_sites() as f64 / (n * n) as f64)
}

/// Aggregated results of `T` independent percolation trials.
///
/// # Examples
/// ```
/// use percolation::{PercolationStats, random::create_rng};
///
/// let mut rng = create_rng(7);
/// let stats = PercolationStats::new(20, 50, &mut rng).unwrap();
/// assert!(stats.mean() > 0.4 && stats.mean() < 0.8);
/// assert!(stats.confidence_lo() <= stats.mean());
/// assert!(stats.mean() <= stats.confidence_hi());
/// ```
#[derive(Debug, Clone)]
pub struct PercolationStats {
    samples: Vec<f64>,
    mean: f64,
    stddev: f64,
}

impl PercolationStats {
    /// Runs `trials` sequential trials on `n × n` grids, drawing every site
    /// from `rng`.
    ///
    /// # Errors
    /// [`PercolationError::InvalidArgument`] if `n == 0` or `trials == 0`.
    pub fn new<R: Rng>(n: usize, trials: usize, rng: &mut R) -> Result<Self> {
        SimulationConfig::new(n, trials)?;
        let samples = (0..trials)
            .map(|trial| {
                let threshold = run_trial(n, rng)?;
                debug!(trial, threshold, "trial percolated");
                Ok(threshold)
            })
            .collect::<Result<Vec<f64>>>()?;
        Self::from_samples(samples)
    }

    /// Runs the simulation described by `config`.
    ///
    /// Trial `i` uses its own generator seeded with
    /// [`trial_seed`]`(config.seed(), i)`, so the sequential and parallel
    /// paths produce identical samples.
    pub fn run(config: &SimulationConfig) -> Result<Self> {
        let n = config.grid_size();
        info!(
            grid_size = n,
            trials = config.trials(),
            seed = config.seed(),
            parallel = config.parallel(),
            "starting percolation simulation"
        );
        let one = |trial: usize| -> Result<f64> {
            let mut rng = create_rng(trial_seed(config.seed(), trial as u64));
            let threshold = run_trial(n, &mut rng)?;
            debug!(trial, threshold, "trial percolated");
            Ok(threshold)
        };

        let samples = if config.parallel() {
            run_parallel(config.trials(), one)?
        } else {
            (0..config.trials()).map(one).collect::<Result<Vec<f64>>>()?
        };

        let stats = Self::from_samples(samples)?;
        info!(
            mean = stats.mean,
            stddev = stats.stddev,
            "percolation simulation finished"
        );
        Ok(stats)
    }

    /// Builds statistics from precomputed threshold samples.
    ///
    /// # Errors
    /// [`PercolationError::InvalidArgument`] if `samples` is empty or holds
    /// a non-finite value.
    pub fn from_samples(samples: Vec<f64>) -> Result<Self> {
        if samples.is_empty() {
            return Err(PercolationError::invalid(
                "trial count must be positive, got 0",
            ));
        }
        let mean = stats::mean(&samples)
            .ok_or_else(|| PercolationError::invalid("threshold samples must be finite"))?;
        // Undefined for a single trial; NaN propagates into the interval.
        let stddev = stats::std_dev(&samples).unwrap_or(f64::NAN);
        Ok(Self {
            samples,
            mean,
            stddev,
        })
    }

    /// Sample mean of the percolation threshold.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample standard deviation of the threshold; NaN for a single trial.
    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    /// Low endpoint of the 95% confidence interval.
    pub fn confidence_lo(&self) -> f64 {
        self.mean - self.half_width(Z_95)
    }

    /// High endpoint of the 95% confidence interval.
    pub fn confidence_hi(&self) -> f64 {
        self.mean + self.half_width(Z_95)
    }

    /// Normal-approximation interval at an arbitrary confidence `level`.
    ///
    /// The critical value comes from [`inverse_normal_cdf`], so bounds at
    /// `0.95` agree with [`confidence_lo`](Self::confidence_lo) only to
    /// about three decimal places of `z`.
    ///
    /// # Errors
    /// [`PercolationError::InvalidArgument`] unless `0 < level < 1`.
    pub fn confidence_interval(&self, level: f64) -> Result<(f64, f64)> {
        if !(level > 0.0 && level < 1.0) {
            return Err(PercolationError::invalid(format!(
                "confidence level must lie in (0, 1), got {level}"
            )));
        }
        let z = inverse_normal_cdf(0.5 + level / 2.0);
        let half = self.half_width(z);
        Ok((self.mean - half, self.mean + half))
    }

    /// Number of trials aggregated.
    pub fn trials(&self) -> usize {
        self.samples.len()
    }

    /// Per-trial thresholds in trial order.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    fn half_width(&self, z: f64) -> f64 {
        z * self.stddev / (self.samples.len() as f64).sqrt()
    }
}

#[cfg(feature = "parallel")]
fn run_parallel<F>(trials: usize, one: F) -> Result<Vec<f64>>
where
    F: Fn(usize) -> Result<f64> + Sync + Send,
{
    use rayon::prelude::*;
    (0..trials).into_par_iter().map(one).collect()
}

#[cfg(not(feature = "parallel"))]
fn run_parallel<F>(trials: usize, one: F) -> Result<Vec<f64>>
where
    F: Fn(usize) -> Result<f64>,
{
    tracing::warn!("built without the `parallel` feature; running trials sequentially");
    (0..trials).map(one).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_site_trials_are_exact() {
        let mut rng = create_rng(3);
        let stats = PercolationStats::new(1, 100, &mut rng).unwrap();
        assert_eq!(stats.trials(), 100);
        assert_eq!(stats.mean(), 1.0);
        assert_eq!(stats.stddev(), 0.0);
        assert_eq!(stats.confidence_lo(), 1.0);
        assert_eq!(stats.confidence_hi(), 1.0);
    }

    #[test]
    fn test_rejects_invalid_arguments() {
        let mut rng = create_rng(0);
        for &(n, t) in &[(0, 10), (10, 0), (0, 0)] {
            assert!(matches!(
                PercolationStats::new(n, t, &mut rng),
                Err(PercolationError::InvalidArgument(_))
            ));
        }
        assert!(matches!(
            run_trial(0, &mut rng),
            Err(PercolationError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_trial_fraction_bounds() {
        let mut rng = create_rng(99);
        for n in 2..10 {
            let p = run_trial(n, &mut rng).unwrap();
            let sites = (n * n) as f64;
            // At least one full column is needed; at most every site.
            assert!(p >= n as f64 / sites, "n={n} p={p}");
            assert!(p <= 1.0);
        }
    }

    #[test]
    fn test_two_by_two_thresholds() {
        // A 2x2 grid percolates after 2 or 3 opens, never 1 or 4.
        let mut rng = create_rng(5);
        let stats = PercolationStats::new(2, 200, &mut rng).unwrap();
        for &s in stats.samples() {
            assert!(s == 0.5 || s == 0.75, "unexpected sample {s}");
        }
    }

    #[test]
    fn test_same_rng_seed_same_result() {
        let a = PercolationStats::new(8, 20, &mut create_rng(17)).unwrap();
        let b = PercolationStats::new(8, 20, &mut create_rng(17)).unwrap();
        assert_eq!(a.samples(), b.samples());
    }

    #[test]
    fn test_run_sequential_matches_parallel() {
        let config = SimulationConfig::new(12, 40).unwrap().with_seed(2024);
        let seq = PercolationStats::run(&config).unwrap();
        let par = PercolationStats::run(&config.with_parallel(true)).unwrap();
        assert_eq!(seq.samples(), par.samples());
        assert_eq!(seq.mean(), par.mean());
    }

    #[test]
    fn test_threshold_estimate_is_plausible() {
        let config = SimulationConfig::new(50, 60).unwrap().with_seed(1);
        let stats = PercolationStats::run(&config).unwrap();
        // p* ≈ 0.5927 for site percolation on the square lattice.
        assert!((stats.mean() - 0.5927).abs() < 0.03, "mean {}", stats.mean());
        assert!(stats.stddev() > 0.0);
        assert!(stats.confidence_lo() < stats.confidence_hi());
    }

    #[test]
    fn test_from_samples_known_values() {
        let stats = PercolationStats::from_samples(vec![0.5, 0.75, 0.5, 0.75]).unwrap();
        assert_eq!(stats.mean(), 0.625);
        let s = (1.0_f64 / 48.0).sqrt();
        assert!((stats.stddev() - s).abs() < 1e-12);
        let half = 1.96 * s / 2.0;
        assert!((stats.confidence_lo() - (0.625 - half)).abs() < 1e-12);
        assert!((stats.confidence_hi() - (0.625 + half)).abs() < 1e-12);
    }

    #[test]
    fn test_single_trial_has_undefined_spread() {
        let stats = PercolationStats::from_samples(vec![0.6]).unwrap();
        assert_eq!(stats.mean(), 0.6);
        assert!(stats.stddev().is_nan());
        assert!(stats.confidence_lo().is_nan());
    }

    #[test]
    fn test_from_samples_rejects_bad_input() {
        assert!(PercolationStats::from_samples(vec![]).is_err());
        assert!(PercolationStats::from_samples(vec![0.5, f64::NAN]).is_err());
    }

    #[test]
    fn test_confidence_interval_levels() {
        let stats = PercolationStats::from_samples(vec![0.55, 0.6, 0.65, 0.62, 0.58]).unwrap();
        let (lo95, hi95) = stats.confidence_interval(0.95).unwrap();
        assert!((lo95 - stats.confidence_lo()).abs() < 1e-3);
        assert!((hi95 - stats.confidence_hi()).abs() < 1e-3);

        let (lo99, hi99) = stats.confidence_interval(0.99).unwrap();
        assert!(lo99 < lo95 && hi99 > hi95);

        for &bad in &[0.0, 1.0, -0.5, f64::NAN] {
            assert!(stats.confidence_interval(bad).is_err());
        }
    }
}
