use crate::search::{methods, Flat};
use crate::geo_4d::{DiffVector, FloatVector, LatticePoint};

use serde::{Serialize, Deserialize};

/// Tolerance Method struct.
/// Floating point Gram-Schmidt. The second basis vector is the first relative
/// vector that is not `-b1`, `2 b1` or `-2 b1`, the only other multiples of `b1`
/// reachable with components in {-2, ..., 2}.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Method {
    /// Absolute tolerance on each residual component.
    #[serde(default = "Method::default_tolerance", alias = "epsilon")]
    tolerance: f64,
}
impl Method {
    pub fn default_tolerance() -> f64 {
        1e-9
    }

    /// Create a method with a given tolerance.
    pub fn with_tolerance(tolerance: f64) -> Self {
        Method{tolerance}
    }
}
impl Default for Method {
    fn default() -> Self {
        Method{
            tolerance: Method::default_tolerance(),
        }
    }
}

impl methods::CoplanarityCheck for Method {
    /// Get the name of the check method.
    fn get_method_name(&self) -> String {
        format!("Floating Gram-Schmidt (tolerance {:e})", self.tolerance)
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
        let basis1_f = basis1.to_float();
        if basis1_f.norm_sq() <= self.tolerance {
            panic!("BUG: zero first basis vector for candidate {:?}", points);
        }

        if flat == Flat::Line {
            return relative.iter().all(|p| p.to_float().rej_onto(&basis1_f).is_zero_within(self.tolerance));
        }

        let basis2 = relative[1..].iter().find(|&&p| {
            p != -basis1 && p != basis1 * 2 && p != basis1 * -2
        });
        let Some(basis2) = basis2 else {
            // Every point is colinear with basis1
            return true;
        };

        // Orthogonalise basis2
        let basis2_f: FloatVector<D> = basis2.to_float().rej_onto(&basis1_f);
        if basis2_f.norm_sq() <= self.tolerance {
            panic!("BUG: second basis vector {} is parallel to {} for candidate {:?}", basis2, basis1, points);
        }

        relative.iter().all(|p| {
            p.to_float()
                .rej_onto(&basis1_f)
                .rej_onto(&basis2_f)
                .is_zero_within(self.tolerance)
        })
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
    fn doubled_basis_is_skipped() {
        // (-1,-1), (-1,0), (-1,1): the third relative vector is 2 * basis1
        let points = pts(&[[-1, -1], [-1, 0], [-1, 1], [0, -1]]);
        assert!(Method::default().lies_in_flat(&points, Flat::Plane));
        let colinear = pts(&[[-1, -1, 0], [-1, 0, 0], [-1, 1, 0]]);
        assert!(Method::default().lies_in_flat(&colinear, Flat::Plane));
        assert!(Method::default().lies_in_flat(&colinear, Flat::Line));
    }

    #[test]
    fn anti_diagonal_plane() {
        // x = -y in 3D
        let plane = pts(&[
            [-1, 1, -1], [-1, 1, 0], [-1, 1, 1],
            [0, 0, -1], [0, 0, 0], [0, 0, 1],
            [1, -1, -1], [1, -1, 0], [1, -1, 1],
        ]);
        assert!(Method::default().lies_in_flat(&plane, Flat::Plane));
        let mut bent = plane.clone();
        bent[8] = LatticePoint::new([1, 0, 1]).unwrap();
        assert!(!Method::default().lies_in_flat(&bent, Flat::Plane));
    }

    #[test]
    #[should_panic(expected = "BUG")]
    fn parallel_second_basis_panics() {
        // Unsorted input: basis1 = (2, 0) and the midpoint gives (1, 0).
        let points = pts(&[[-1, 0], [1, 0], [0, 0]]);
        Method::default().lies_in_flat(&points, Flat::Plane);
    }

    #[test]
    fn tolerance_is_configurable() {
        let method: Method = serde_yaml::from_str("tolerance: 1.0e-6").unwrap();
        assert_eq!(method.tolerance, 1e-6);
        let method: Method = serde_yaml::from_str("{}").unwrap();
        assert_eq!(method.tolerance, Method::default_tolerance());
        assert_eq!(Method::with_tolerance(0.5).tolerance, 0.5);
    }
}
