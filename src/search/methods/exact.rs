use crate::search::{methods, Flat};
use crate::geo_4d::{DiffVector, LatticePoint};

use serde::{Serialize, Deserialize};

/// Exact Method struct.
/// Gram-Schmidt on integers: every rejection is scaled by the squared norm of the
/// vector it removes, so residuals stay integral and are tested against zero exactly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Method {}

impl methods::CoplanarityCheck for Method {
    /// Get the name of the check method.
    fn get_method_name(&self) -> String {
        "Exact Integer Gram-Schmidt".to_string()
    }

    fn lies_in_flat<const D: usize>(&self, points: &[LatticePoint<D>], flat: Flat) -> bool {
        let Some((origin, rest)) = points.split_first() else {
            return true;
        };
        if rest.len() < 2 {
            return true;
        }

        let relative: Vec<DiffVector<D>> = rest.iter().map(|p| *p - *origin).collect();
        let basis1 = relative[0];

        // Components orthogonal to basis1, scaled by |basis1|^2
        let residuals: Vec<DiffVector<D>> = relative.iter().map(|p| p.scaled_rejection(&basis1)).collect();

        match flat {
            Flat::Line => residuals.iter().all(|r| r.is_zero()),
            Flat::Plane => {
                // First vector not parallel to basis1; its residual is already orthogonal to basis1
                let Some(basis2) = residuals.iter().find(|r| !r.is_zero()).copied() else {
                    return true;
                };
                residuals.iter().all(|r| r.scaled_rejection(&basis2).is_zero())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::methods::CoplanarityCheck;

    fn pts<const D: usize>(coords: &[[i8; D]]) -> Vec<LatticePoint<D>> {
        coords.iter().map(|c| LatticePoint::new(*c).unwrap()).collect()
    }

    #[test]
    fn diagonal_plane() {
        // x = y in 3D
        let plane = pts(&[
            [-1, -1, -1], [-1, -1, 0], [-1, -1, 1],
            [0, 0, -1], [0, 0, 0], [0, 0, 1],
            [1, 1, -1], [1, 1, 0], [1, 1, 1],
        ]);
        assert!(Method::default().lies_in_flat(&plane, Flat::Plane));
        assert!(!Method::default().lies_in_flat(&plane, Flat::Line));
    }

    #[test]
    fn second_basis_skips_half_multiples() {
        // basis1 = (2, 0), then (1, 0) is parallel but not in {-b, 2b, -2b}
        let points = pts(&[[-1, 0], [1, 0], [0, 0], [0, 1]]);
        assert!(Method::default().lies_in_flat(&points, Flat::Plane));
        let points = pts(&[[-1, 0, 0], [1, 0, 0], [0, 0, 0], [0, 1, 0], [0, 0, 1]]);
        assert!(!Method::default().lies_in_flat(&points, Flat::Plane));
    }

    #[test]
    fn off_plane_point() {
        let points = pts(&[[-1, -1, 0, 0], [-1, 0, 0, 0], [0, -1, 0, 0], [0, 0, 0, 1]]);
        assert!(!Method::default().lies_in_flat(&points, Flat::Plane));
    }
}
