//! Cheap necessary condition used to prune the search.
//!
//! In an index-sorted set of lattice points lying in a common flat of rank `r`,
//! consecutive points differ by at most `r` distinct vectors. Every prefix of a
//! candidate inherits a subset of those steps, so a prefix with more than `r`
//! distinct steps can never be extended into an accepted set.
//!
//! The rank-2 bound has been checked against the exact test over the whole 4D
//! lattice rather than proved in full for chains with three or more distinct
//! step coefficients; the exact check stays the final arbiter.

use itertools::Itertools;

use crate::geo_4d::DiffVector;
use crate::search::{Flat, Lattice};

/// Check a candidate prefix against the step bound for `flat`.
/// Stops as soon as the bound is exceeded.
pub fn passes_fast_filter<const D: usize>(lattice: &Lattice<D>, flat: Flat, candidate: &[usize]) -> bool {
    let points = lattice.points();
    let mut seen = Vec::<DiffVector<D>>::with_capacity(flat.rank() + 1);
    for (&prev, &next) in candidate.iter().tuple_windows() {
        let step = points[next] - points[prev];
        if !seen.contains(&step) {
            seen.push(step);
            if seen.len() > flat.rank() {
                return false;
            }
        }
    }
    true
}

/// The distinct steps between consecutive points of a candidate, in first-seen order.
pub fn distinct_steps<const D: usize>(lattice: &Lattice<D>, candidate: &[usize]) -> Vec<DiffVector<D>> {
    let points = lattice.points();
    candidate.iter()
        .tuple_windows()
        .map(|(&prev, &next)| points[next] - points[prev])
        .unique()
        .collect()
}
