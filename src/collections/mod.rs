//! Data structures backing the percolation grid.

mod union_find;

pub use union_find::UnionFind;
