/*!
 * This is the exact check methods module.
 * Adding new methods should be done here.
 *
 * New methods need:
 * - A struct implementing `CoplanarityCheck` (and `Default`, for listing)
 * - An enum variant containing that struct in `MethodEnum`
 *
 */

use enum_dispatch::enum_dispatch;
use serde::{Serialize, Deserialize};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

use crate::args;
use crate::geo_4d::LatticePoint;
use crate::search::Flat;

//
// ------------------------------------------------------------
// Code that requires modification to add a new check method
//      |
//      V
//

// Source files for the check methods
mod exact;
mod tolerance;

/// Check methods enum.
/// To add a new method:
/// include it here
/// and implement the `CoplanarityCheck` trait for it.
/// The serde tag and the CLI name are both the snake_case variant name.
#[derive(Debug, Clone, Serialize, Deserialize, EnumIter, AsRefStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[enum_dispatch(CoplanarityCheck)]
pub enum MethodEnum {
    /// Fraction-free integer Gram-Schmidt, no tolerance.
    Exact(exact::Method),
    /// Floating point Gram-Schmidt with an absolute tolerance.
    Tolerance(tolerance::Method),
}
impl Default for MethodEnum {
    fn default() -> Self {
        MethodEnum::Exact(exact::Method::default())
    }
}

//
// ------------------------------------------------------------
// Traits that don't need modification,
// but are references for adding a new check method
//      |
//      V
//

/// Exact check trait.
/// Decides whether a full candidate really lies in a flat of the given kind.
/// Points arrive in index order; the first one is taken as the origin of the flat.
#[enum_dispatch] // This is a macro that allows the enum to be used in a trait object-like way
pub trait CoplanarityCheck {
    /// Get the name of the check method.
    fn get_method_name(&self) -> String;

    /// Check whether `points` lie in a common affine flat of kind `flat`.
    fn lies_in_flat<const D: usize>(&self, points: &[LatticePoint<D>], flat: Flat) -> bool;
}

//
// ------------------------------------------------------------
// Functions with no modification or reference needed
//      |
//      V
//

impl MethodEnum {
    /// Construct a check method with default parameters from its name.
    pub fn from_name(name: &str) -> args::ProcResult<Self> {
        if let Some(method) = MethodEnum::iter().find(|method| method.as_ref() == name) {
            return Ok(method);
        }

        // If the name is not found, return an error with the available methods
        let mut error_str = format!("Check method not found: {name}\n");
        error_str.push_str("Available methods:\n");
        error_str.push_str(&available_methods_str());
        args::err_str(&error_str)
    }
}

/// Names of all available methods, one per line.
pub fn available_methods_str() -> String {
    MethodEnum::iter()
        .map(|method| format!("    {}\n", method.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Lattice;

    fn points(lattice: &Lattice<4>, indices: &[usize]) -> Vec<LatticePoint<4>> {
        lattice.resolve(indices).unwrap()
    }

    #[test]
    fn names_round_trip() {
        for method in MethodEnum::iter() {
            let rebuilt = MethodEnum::from_name(method.as_ref()).unwrap();
            assert_eq!(rebuilt.as_ref(), method.as_ref());
        }
        assert!(MethodEnum::from_name("numpy").is_err());
        assert_eq!(MethodEnum::default().as_ref(), "exact");
    }

    #[test]
    fn grid_with_two_fixed_coordinates_is_coplanar() {
        // x = -1, w = 0 leaves a 3x3 grid.
        let lattice = Lattice::<4>::new();
        let grid: Vec<usize> = lattice.points().iter().enumerate()
            .filter(|(_, p)| p.coords()[0] == -1 && p.coords()[3] == 0)
            .map(|(idx, _)| idx)
            .collect();
        assert_eq!(grid.len(), 9);
        for method in MethodEnum::iter() {
            assert!(method.lies_in_flat(&points(&lattice, &grid), Flat::Plane), "{}", method.get_method_name());
        }
    }

    #[test]
    fn perturbed_grid_is_rejected() {
        let lattice = Lattice::<4>::new();
        let mut grid: Vec<usize> = lattice.points().iter().enumerate()
            .filter(|(_, p)| p.coords()[0] == -1 && p.coords()[3] == 0)
            .map(|(idx, _)| idx)
            .collect();
        // Swap the last grid point (-1, 1, 1, 0) for (-1, 1, 1, 1).
        let last = grid.pop().unwrap();
        grid.push(last + 1);
        for method in MethodEnum::iter() {
            assert!(!method.lies_in_flat(&points(&lattice, &grid), Flat::Plane), "{}", method.get_method_name());
        }
    }

    #[test]
    fn short_candidates_are_trivially_flat() {
        let lattice = Lattice::<4>::new();
        for method in MethodEnum::iter() {
            assert!(method.lies_in_flat::<4>(&[], Flat::Plane));
            assert!(method.lies_in_flat(&points(&lattice, &[3]), Flat::Line));
            assert!(method.lies_in_flat(&points(&lattice, &[3, 70]), Flat::Line));
        }
    }

    #[test]
    fn lines_through_origin() {
        let lattice = Lattice::<4>::new();
        // (-1,-1,-1,-1), (0,0,0,0), (1,1,1,1)
        let diagonal = [0, 40, 80];
        // (-1,-1,-1,-1), (0,0,0,0), (1,1,1,0)
        let bent = [0, 40, 79];
        for method in MethodEnum::iter() {
            assert!(method.lies_in_flat(&points(&lattice, &diagonal), Flat::Line));
            assert!(!method.lies_in_flat(&points(&lattice, &bent), Flat::Line));
            assert!(method.lies_in_flat(&points(&lattice, &bent), Flat::Plane));
        }
    }

    #[test]
    fn serde_tags_use_method_names() {
        let yaml = serde_yaml::to_string(&MethodEnum::default()).unwrap();
        assert!(yaml.contains("exact"));
        let method: MethodEnum = serde_json::from_str(r#"{"tolerance": {"tolerance": 1e-6}}"#).unwrap();
        assert_eq!(method.as_ref(), "tolerance");
    }
}
