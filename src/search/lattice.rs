use itertools::Itertools;

use crate::geo_4d::{LatticePoint, LATTICE_VALUES};
use crate::search::{ProcResult, SearchError};

/// The ordered universe of lattice points.
/// Built once and read-only afterwards; the index of a point is its position in
/// lexicographic order, so index order and point order agree.
#[derive(Debug, Clone)]
pub struct Lattice<const D: usize> {
    points: Vec<LatticePoint<D>>,
}
impl<const D: usize> Lattice<D> {
    /// Build the lattice in lexicographic order (first component varies slowest).
    pub fn new() -> Self {
        let points = (0..D)
            .map(|_| LATTICE_VALUES.iter().copied())
            .multi_cartesian_product()
            .map(|coords| {
                let mut fixed = [0i8; D];
                fixed.copy_from_slice(&coords);
                LatticePoint::new(fixed)
            })
            .collect::<Option<Vec<_>>>()
            .unwrap_or_else(|| panic!("BUG: lattice component outside {:?}", LATTICE_VALUES));
        Lattice{points}
    }

    /// Number of points in the lattice (3^D).
    pub fn count(&self) -> usize {
        self.points.len()
    }

    /// All points, in index order.
    pub fn points(&self) -> &[LatticePoint<D>] {
        &self.points
    }

    /// Get the point at an index.
    pub fn point_at(&self, index: usize) -> ProcResult<LatticePoint<D>> {
        self.points.get(index).copied().ok_or(SearchError::OutOfRange{index, count: self.count()})
    }

    /// Get the index of a point (base-3 digits of the shifted components).
    pub fn index_of(&self, point: &LatticePoint<D>) -> usize {
        point.coords().iter().fold(0, |idx, &c| idx * LATTICE_VALUES.len() + (c + 1) as usize)
    }

    /// Index of the all-zero point.
    pub fn origin_index(&self) -> usize {
        self.index_of(&LatticePoint::origin())
    }

    /// Resolve a list of indices into points.
    pub fn resolve(&self, indices: &[usize]) -> ProcResult<Vec<LatticePoint<D>>> {
        indices.iter().map(|&idx| self.point_at(idx)).collect()
    }
}
impl<const D: usize> Default for Lattice<D> {
    fn default() -> Self {
        Self::new()
    }
}
