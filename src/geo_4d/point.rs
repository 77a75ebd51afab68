use std::ops::Sub;
use std::fmt;
use serde::{Serialize, Serializer};

use crate::geo_4d::{DiffVector, LATTICE_VALUES};

/// A point of the {-1, 0, 1}^D lattice.
/// Ordering is lexicographic on the components, which matches the lattice index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LatticePoint<const D: usize> {
    coords: [i8; D],
}
impl<const D: usize> LatticePoint<D> {
    /// Create a new point.
    /// Returns `None` if any component is outside {-1, 0, 1}.
    pub fn new(coords: [i8; D]) -> Option<Self> {
        if coords.iter().all(|c| LATTICE_VALUES.contains(c)) {
            Some(LatticePoint{coords})
        }
        else {
            None
        }
    }

    /// The point with every component zero.
    pub fn origin() -> Self {
        LatticePoint{coords: [0; D]}
    }

    /// Get the components of the point.
    pub fn coords(&self) -> &[i8; D] {
        &self.coords
    }

    /// Check if this is the origin.
    pub fn is_origin(&self) -> bool {
        self.coords.iter().all(|&c| c == 0)
    }
}
impl<const D: usize> Sub for LatticePoint<D> {
    type Output = DiffVector<D>;

    fn sub(self, rhs: Self) -> DiffVector<D> {
        let mut components = [0i64; D];
        for (out, (a, b)) in components.iter_mut().zip(self.coords.iter().zip(rhs.coords.iter())) {
            *out = i64::from(*a) - i64::from(*b);
        }
        DiffVector::new(components)
    }
}
/// Space-separated components, one point per report line.
impl<const D: usize> fmt::Display for LatticePoint<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
// serde only derives for fixed array lengths, so the components go out as a sequence.
impl<const D: usize> Serialize for LatticePoint<D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.coords.iter())
    }
}
