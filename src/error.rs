//! Error types for grid construction, site access, and simulation setup.

use thiserror::Error;

/// Result type for percolation operations.
pub type Result<T> = std::result::Result<T, PercolationError>;

/// Errors reported by the grid and the Monte Carlo driver.
///
/// Every error is raised before any state is mutated, so a failed call
/// leaves an existing grid exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PercolationError {
    /// A size, trial count, or statistical parameter is outside its domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A 1-based site coordinate lies outside `[1, size]`.
    #[error("site ({row}, {col}) is outside the {size}x{size} grid")]
    IndexOutOfRange { row: usize, col: usize, size: usize },
}

impl PercolationError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        PercolationError::InvalidArgument(msg.into())
    }
}
