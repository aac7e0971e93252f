//! # percolation
//!
//! Monte Carlo estimation of the site percolation threshold on an
//! `n × n` square grid.
//!
//! ## Modules
//!
//! - [`grid`]: the percolation system: open sites, full-site and
//!   percolation queries backed by two union-find forests
//! - [`collections`]: weighted union-find with path compression
//! - [`monte_carlo`]: repeated trials and threshold statistics
//! - [`stats`]: compensated mean and Welford variance
//! - [`random`]: seeded generators and per-trial seed derivation
//! - [`special`]: inverse normal CDF for confidence intervals
//! - [`config`]: simulation parameters
//!
//! ## Design Philosophy
//!
//! - **No backwash**: `is_full` and `percolates` never share a forest
//! - **Checked coordinates**: out-of-range sites are errors, not panics
//! - **Reproducible**: every random draw comes from an injected or seeded
//!   generator
//! - **Property-based testing**: grid queries checked against a flood-fill
//!   oracle via proptest

pub mod collections;
pub mod config;
pub mod error;
pub mod grid;
pub mod monte_carlo;
pub mod random;
pub mod special;
pub mod stats;

pub use config::SimulationConfig;
pub use error::{PercolationError, Result};
pub use grid::Percolation;
pub use monte_carlo::PercolationStats;
