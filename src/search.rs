//! Backtracking search for the planes of the lattice.
//!
//! The search walks strictly increasing index sequences depth first. Every partial
//! candidate goes through the fast step filter before it is extended, and every
//! complete candidate goes through the selected exact check.

mod proc_errors;
mod cfg;
mod lattice;
mod enumerator;
pub mod filter;
pub mod methods;

use serde::{Serialize, Deserialize};
use strum::Display;
use clap::ValueEnum;

use crate::geo_4d::{LatticePoint, DIM};

// Re-export errors
pub use proc_errors::{
    SearchError,
    ProcResult,
    err_str,
};
// Re-export cfg handling
pub use cfg::{
    SearchCfg,
    SearchTarget,
};
pub use lattice::Lattice;
pub use enumerator::Enumerator;
// Re-export check methods
pub use methods::{
    CoplanarityCheck,
    MethodEnum,
};

/// Number of points in an accepted plane.
pub const PLANE_SIZE: usize = 9;

/// Number of points in the 4D lattice.
pub const LATTICE_SIZE: usize = 81;

/// Kind of affine flat a candidate must lie in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Flat {
    /// Rank 1: colinear points.
    Line,
    /// Rank 2: coplanar points.
    Plane,
}
impl Flat {
    /// Dimension of the flat, which is also the bound on distinct consecutive steps.
    pub fn rank(&self) -> usize {
        match self {
            Flat::Line => 1,
            Flat::Plane => 2,
        }
    }
}

/// An accepted candidate.
/// Indices are strictly increasing and the points are listed in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plane<const D: usize> {
    pub indices: Vec<usize>,
    pub points: Vec<LatticePoint<D>>,
}
impl<const D: usize> Plane<D> {
    /// Check if the plane passes through the all-zero point.
    pub fn contains_origin(&self) -> bool {
        self.points.iter().any(|p| p.is_origin())
    }
}

/// Counters kept while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Partial candidates tested by the fast filter.
    pub nodes_visited: u64,
    /// Partial candidates rejected by the fast filter.
    pub pruned: u64,
    /// Complete candidates given to the exact check.
    pub full_checks: u64,
    /// Complete candidates accepted.
    pub accepted: u64,
}

/// Enumerate every 9-point plane of the 4D lattice, in index-lexicographic order.
pub fn enumerate_planes<'a, C: CoplanarityCheck>(lattice: &'a Lattice<DIM>, check: &'a C) -> Enumerator<'a, DIM, C> {
    Enumerator::start(lattice, check, Flat::Plane, PLANE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_ranks_and_names() {
        assert_eq!(Flat::Line.rank(), 1);
        assert_eq!(Flat::Plane.rank(), 2);
        assert_eq!(Flat::Plane.to_string(), "plane");
    }

    #[test]
    fn constants_match_lattice() {
        assert_eq!(Lattice::<DIM>::new().count(), LATTICE_SIZE);
    }

    #[test]
    fn first_plane_is_lowest_grid() {
        let lattice = Lattice::<DIM>::new();
        let method = MethodEnum::default();
        let first = enumerate_planes(&lattice, &method).next().unwrap();
        assert_eq!(first.indices, (0..9).collect::<Vec<_>>());
        assert!(!first.contains_origin());
        assert_eq!(first.points[0].to_string(), "-1 -1 -1 -1");
        assert_eq!(first.points[8].to_string(), "-1 -1 1 1");
    }
}
