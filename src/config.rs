//! Simulation parameters.

use crate::error::{PercolationError, Result};

/// Parameters of a Monte Carlo percolation run.
///
/// # Examples
/// ```
/// use percolation::SimulationConfig;
///
/// let config = SimulationConfig::new(200, 100)
///     .unwrap()
///     .with_seed(2024)
///     .with_parallel(true);
/// assert_eq!(config.grid_size(), 200);
/// assert_eq!(config.seed(), 2024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    grid_size: usize,
    trials: usize,
    seed: u64,
    parallel: bool,
}

impl SimulationConfig {
    /// Creates a sequential configuration with seed `0`.
    ///
    /// # Errors
    /// [`PercolationError::InvalidArgument`] if `grid_size` or `trials` is 0.
    pub fn new(grid_size: usize, trials: usize) -> Result<Self> {
        if grid_size == 0 {
            return Err(PercolationError::invalid(
                "grid size must be positive, got 0",
            ));
        }
        if trials == 0 {
            return Err(PercolationError::invalid(
                "trial count must be positive, got 0",
            ));
        }
        Ok(Self {
            grid_size,
            trials,
            seed: 0,
            parallel: false,
        })
    }

    /// Like [`SimulationConfig::new`], for signed input such as CLI arguments.
    ///
    /// # Errors
    /// [`PercolationError::InvalidArgument`] if either value is `<= 0`.
    pub fn from_signed(grid_size: i64, trials: i64) -> Result<Self> {
        if grid_size <= 0 {
            return Err(PercolationError::invalid(format!(
                "grid size must be positive, got {grid_size}"
            )));
        }
        if trials <= 0 {
            return Err(PercolationError::invalid(format!(
                "trial count must be positive, got {trials}"
            )));
        }
        let grid_size = usize::try_from(grid_size)
            .map_err(|_| PercolationError::invalid(format!("grid size {grid_size} too large")))?;
        let trials = usize::try_from(trials)
            .map_err(|_| PercolationError::invalid(format!("trial count {trials} too large")))?;
        Self::new(grid_size, trials)
    }

    /// Sets the base seed from which per-trial seeds are derived.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Runs trials on the rayon pool when the `parallel` feature is enabled.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }
}
