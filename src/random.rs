//! Seeded random sources for percolation trials.
//!
//! # Reproducibility
//!
//! Each trial gets its own generator seeded by [`trial_seed`], so a run is
//! fully determined by its base seed regardless of how many threads
//! execute the trials or in which order they finish. The underlying
//! algorithm (SmallRng) is deterministic for a given seed on the same
//! platform.

use rand::Rng;

/// Golden-ratio increment used by SplitMix64.
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Creates a fast, seeded random number generator.
///
/// # Examples
/// ```
/// use percolation::random::create_rng;
/// use rand::Rng;
/// let mut a = create_rng(7);
/// let mut b = create_rng(7);
/// assert_eq!(a.random::<u64>(), b.random::<u64>());
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Derives the seed of trial `index` from a run's base seed.
///
/// One SplitMix64 output step over `base + (index + 1) * γ`, which
/// scatters consecutive indices across the full 64-bit range.
pub fn trial_seed(base: u64, index: u64) -> u64 {
    let mut z = base.wrapping_add(index.wrapping_add(1).wrapping_mul(GOLDEN_GAMMA));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Draws a site uniformly from `[1, n] × [1, n]`.
///
/// # Panics
/// Panics if `n == 0`.
pub fn random_site<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    (rng.random_range(1..=n), rng.random_range(1..=n))
}
