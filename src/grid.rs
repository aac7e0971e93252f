//! N-by-N site percolation grid.
//!
//! Sites are addressed by 1-based `(row, col)` pairs and flattened to
//! `(row - 1) * n + (col - 1)`. Two sentinel nodes live past the real
//! sites: virtual top at `n²` and virtual bottom at `n² + 1`.
//!
//! # Backwash
//!
//! A single forest wired to both sentinels would report a bottom-row site
//! as full as soon as the system percolates through some *other* column,
//! because the site reaches virtual top via virtual bottom. The grid
//! therefore keeps two forests:
//!
//! - `full_uf` spans the real sites plus virtual top and answers
//!   [`Percolation::is_full`].
//! - `perc_uf` additionally holds virtual bottom and answers
//!   [`Percolation::percolates`].
//!
//! Every `open` unions into both.

use crate::collections::UnionFind;
use crate::error::{PercolationError, Result};

/// Percolation system on an `n × n` grid of initially closed sites.
///
/// # Examples
/// ```
/// use percolation::Percolation;
///
/// let mut grid = Percolation::new(3).unwrap();
/// grid.open(1, 2).unwrap();
/// grid.open(2, 2).unwrap();
/// assert!(grid.is_full(2, 2).unwrap());
/// assert!(!grid.percolates());
///
/// grid.open(3, 2).unwrap();
/// assert!(grid.percolates());
/// ```
#[derive(Debug, Clone)]
pub struct Percolation {
    n: usize,
    opened: Vec<bool>,
    open_count: usize,
    full_uf: UnionFind,
    perc_uf: UnionFind,
    virtual_top: usize,
    virtual_bottom: usize,
}

impl Percolation {
    /// Creates an `n × n` grid with every site closed.
    ///
    /// Virtual top is pre-linked to the first row in both forests and
    /// virtual bottom to the last row in the percolation forest only.
    ///
    /// # Errors
    /// [`PercolationError::InvalidArgument`] if `n == 0`.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(PercolationError::invalid(
                "grid size must be positive, got 0",
            ));
        }
        let sites = n.checked_mul(n).ok_or_else(|| {
            PercolationError::invalid(format!("grid size {n} overflows the site count"))
        })?;
        let virtual_top = sites;
        let virtual_bottom = sites + 1;

        let mut full_uf = UnionFind::new(sites + 1);
        let mut perc_uf = UnionFind::new(sites + 2);
        for col in 0..n {
            full_uf.union(virtual_top, col);
            perc_uf.union(virtual_top, col);
            perc_uf.union(virtual_bottom, (n - 1) * n + col);
        }

        Ok(Self {
            n,
            opened: vec![false; sites],
            open_count: 0,
            full_uf,
            perc_uf,
            virtual_top,
            virtual_bottom,
        })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Number of distinct sites opened so far.
    pub fn open_sites(&self) -> usize {
        self.open_count
    }

    /// Opens site `(row, col)` and links it to every open neighbor.
    ///
    /// Opening an already open site leaves the grid unchanged.
    ///
    /// # Errors
    /// [`PercolationError::IndexOutOfRange`] if either coordinate is
    /// outside `[1, n]`. The grid is not modified in that case.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let site = self.index(row, col)?;
        if !self.opened[site] {
            self.opened[site] = true;
            self.open_count += 1;
        }

        let (r, c) = (row - 1, col - 1);
        let n = self.n;
        let neighbors = [
            (r > 0).then(|| site - n),
            (r + 1 < n).then(|| site + n),
            (c > 0).then(|| site - 1),
            (c + 1 < n).then(|| site + 1),
        ];
        for neighbor in neighbors.into_iter().flatten() {
            if self.opened[neighbor] {
                self.full_uf.union(site, neighbor);
                self.perc_uf.union(site, neighbor);
            }
        }
        Ok(())
    }

    /// Returns whether site `(row, col)` is open.
    ///
    /// # Errors
    /// [`PercolationError::IndexOutOfRange`] for coordinates outside `[1, n]`.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        let site = self.index(row, col)?;
        Ok(self.opened[site])
    }

    /// Returns whether site `(row, col)` is open and connected to the top row.
    ///
    /// Closed sites short-circuit to `false`. Takes `&mut self` because the
    /// lookup compresses paths in the underlying forest.
    ///
    /// # Errors
    /// [`PercolationError::IndexOutOfRange`] for coordinates outside `[1, n]`.
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        let site = self.index(row, col)?;
        if !self.opened[site] {
            return Ok(false);
        }
        Ok(self.full_uf.connected(site, self.virtual_top))
    }

    /// Returns whether an open path joins the top row to the bottom row.
    ///
    /// A 1×1 grid is wired to both sentinels through the same site, so
    /// its sentinels are linked before anything opens; it percolates
    /// exactly when that site is open.
    pub fn percolates(&mut self) -> bool {
        if self.n == 1 {
            return self.opened[0];
        }
        self.perc_uf.connected(self.virtual_top, self.virtual_bottom)
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row == 0 || col == 0 || row > self.n || col > self.n {
            return Err(PercolationError::IndexOutOfRange {
                row,
                col,
                size: self.n,
            });
        }
        Ok((row - 1) * self.n + (col - 1))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::VecDeque;

    /// Breadth-first flood from the open top-row sites.
    fn flood_from_top(n: usize, open: &[bool]) -> Vec<bool> {
        let mut full = vec![false; n * n];
        let mut queue: VecDeque<usize> = (0..n).filter(|&c| open[c]).collect();
        for &s in &queue {
            full[s] = true;
        }
        while let Some(s) = queue.pop_front() {
            let (r, c) = (s / n, s % n);
            let mut visit = |t: usize| {
                if open[t] && !full[t] {
                    full[t] = true;
                    queue.push_back(t);
                }
            };
            if r > 0 {
                visit(s - n);
            }
            if r + 1 < n {
                visit(s + n);
            }
            if c > 0 {
                visit(s - 1);
            }
            if c + 1 < n {
                visit(s + 1);
            }
        }
        full
    }

    fn open_sequence() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
        (1_usize..8).prop_flat_map(|n| {
            (
                Just(n),
                proptest::collection::vec((1..=n, 1..=n), 0..(n * n * 2)),
            )
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn matches_flood_fill_oracle((n, seq) in open_sequence()) {
            let mut grid = Percolation::new(n).unwrap();
            let mut open = vec![false; n * n];
            for &(r, c) in &seq {
                grid.open(r, c).unwrap();
                open[(r - 1) * n + (c - 1)] = true;
            }
            let full = flood_from_top(n, &open);
            for r in 1..=n {
                for c in 1..=n {
                    let s = (r - 1) * n + (c - 1);
                    prop_assert_eq!(grid.is_open(r, c).unwrap(), open[s]);
                    prop_assert_eq!(grid.is_full(r, c).unwrap(), full[s]);
                }
            }
            let reaches_bottom = (0..n).any(|c| full[(n - 1) * n + c]);
            prop_assert_eq!(grid.percolates(), reaches_bottom);
            prop_assert_eq!(grid.open_sites(), open.iter().filter(|&&o| o).count());
        }

        #[test]
        fn full_and_percolates_are_monotonic((n, seq) in open_sequence()) {
            let mut grid = Percolation::new(n).unwrap();
            let mut was_full = vec![false; n * n];
            let mut was_percolating = false;
            for &(r, c) in &seq {
                grid.open(r, c).unwrap();
                let perc = grid.percolates();
                prop_assert!(perc || !was_percolating);
                was_percolating = perc;
                for rr in 1..=n {
                    for cc in 1..=n {
                        let s = (rr - 1) * n + (cc - 1);
                        let full = grid.is_full(rr, cc).unwrap();
                        prop_assert!(full || !was_full[s]);
                        prop_assert!(!full || grid.is_open(rr, cc).unwrap());
                        was_full[s] = full;
                    }
                }
            }
        }
    }
}
