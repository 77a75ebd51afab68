/*!
 * Integer geometry on the {-1, 0, 1}^D lattice.
 *
 * Points are stored as small integer arrays. Differences between points are
 * integer vectors, and the projections used by the coplanarity checks are done
 * either fraction-free on integers (`DiffVector`) or in `f64` (`FloatVector`).
 */

mod point;
mod vector;

pub use point::LatticePoint;
pub use vector::{
    DiffVector,
    FloatVector,
};

/// Dimension of the lattice the planes are drawn from.
pub const DIM: usize = 4;

/// Component values available along each axis, in increasing order.
pub const LATTICE_VALUES: [i8; 3] = [-1, 0, 1];
