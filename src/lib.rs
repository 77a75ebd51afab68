//! Enumeration of the 9-point planes of the {-1, 0, 1}^4 lattice.
//!
//! The core is [`search`]: a depth-first search over strictly increasing index
//! sequences, pruned by a cheap step filter and settled by an exact Gram-Schmidt
//! check. [`report`] consumes the search output; everything else is the command line
//! and config plumbing around it.

pub mod args;
pub mod io;
pub mod geo_4d;
pub mod search;
pub mod report;
pub mod example;
mod crate_errors;

use itertools::Itertools;

use geo_4d::{LatticePoint, DIM};
use search::{
    CoplanarityCheck,
    Flat,
    Lattice,
    MethodEnum,
    SearchError,
    SearchTarget,
};

pub use crate_errors::{
    PlanesError,
    PlanesResult,
};

/// Handle the parsed command line.
pub fn handle_cli_args(cli: args::PlanesCli) -> PlanesResult<()> {
    match cli.command {
        args::Command::Run(run_args) => {
            let target = SearchTarget::from_run_args(&run_args)?;
            let report = run_search(&target)?;
            report.save(target.format, target.output_path.as_deref())?;
        },
        args::Command::Check(check_args) => {
            let method = match &check_args.method {
                Some(method_name) => MethodEnum::from_name(method_name)?,
                None => MethodEnum::default(),
            };
            let lattice = Lattice::<DIM>::new();
            let outcome = check_candidate(&lattice, &method, check_args.flat, &check_args.indices)?;
            print!("{}", outcome.to_text());
        },
        args::Command::Lattice => {
            print!("{}", lattice_listing(&Lattice::<DIM>::new()));
        },
        args::Command::Example(example_args) => {
            print!("{}", example::example_config(example_args.method.as_deref(), example_args.format)?);
        },
    }
    Ok(())
}

/// Run the search described by a target and collect the report.
pub fn run_search(target: &SearchTarget) -> PlanesResult<report::Report<DIM>> {
    eprintln!();
    eprintln!("#################");
    eprintln!("Running search...");
    eprintln!("#################");
    eprintln!();
    eprintln!("Exact check method: {}", target.method.get_method_name());
    if let Some(limit) = target.limit {
        eprintln!("Stopping after {} planes", limit);
    }

    let lattice = Lattice::<DIM>::new();
    let mut planes = search::enumerate_planes(&lattice, &target.method);
    let report = report::Report::collect(&mut planes, target.limit, target.progress);

    eprintln!(
        "Found {} planes ({} through origin), {} of {} partial candidates pruned",
        report.total, report.through_origin, report.stats.pruned, report.stats.nodes_visited,
    );
    Ok(report)
}

/// Result of checking a single candidate.
#[derive(Debug)]
pub struct CandidateCheck<const D: usize> {
    pub flat: Flat,
    pub method_name: String,
    pub indices: Vec<usize>,
    pub points: Vec<LatticePoint<D>>,
    pub steps: Vec<geo_4d::DiffVector<D>>,
    pub passes_filter: bool,
    pub lies_in_flat: bool,
}
impl<const D: usize> CandidateCheck<D> {
    /// Human readable summary.
    pub fn to_text(&self) -> String {
        let mut text = format!("Candidate: {:?}\n", self.indices);
        for (idx, point) in self.indices.iter().zip(self.points.iter()) {
            text.push_str(&format!("{:>4}: {}\n", idx, point));
        }
        text.push_str(&format!(
            "Distinct steps: {} (at most {} for a {})\n",
            self.steps.iter().join(" "), self.flat.rank(), self.flat,
        ));
        text.push_str(&format!("Fast filter: {}\n", if self.passes_filter { "pass" } else { "fail" }));
        text.push_str(&format!(
            "{}: {}\n",
            self.method_name, if self.lies_in_flat { "accepted" } else { "rejected" },
        ));
        text
    }
}

/// Run both tests on a single candidate.
/// Indices must be strictly increasing and inside the lattice.
pub fn check_candidate<const D: usize, C: CoplanarityCheck>(
    lattice: &Lattice<D>,
    method: &C,
    flat: Flat,
    indices: &[usize],
) -> PlanesResult<CandidateCheck<D>> {
    if let Some((a, b)) = indices.iter().tuple_windows().find(|(a, b)| a >= b) {
        return Err(SearchError::InvalidCandidate(format!("indices must be strictly increasing, got {} then {}", a, b)).into());
    }
    let points = lattice.resolve(indices)?;

    Ok(CandidateCheck{
        flat,
        method_name: method.get_method_name(),
        indices: indices.to_vec(),
        steps: search::filter::distinct_steps(lattice, indices),
        passes_filter: search::filter::passes_fast_filter(lattice, flat, indices),
        lies_in_flat: method.lies_in_flat(&points, flat),
        points,
    })
}

/// One `index: point` line per lattice point.
pub fn lattice_listing<const D: usize>(lattice: &Lattice<D>) -> String {
    lattice.points()
        .iter()
        .enumerate()
        .map(|(idx, point)| format!("{:>4}: {}\n", idx, point))
        .collect()
}

/// Top-level tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_accepts_first_plane() {
        let lattice = Lattice::<DIM>::new();
        let indices: Vec<usize> = (0..9).collect();
        let outcome = check_candidate(&lattice, &MethodEnum::default(), Flat::Plane, &indices).unwrap();
        assert!(outcome.passes_filter);
        assert!(outcome.lies_in_flat);
        assert_eq!(outcome.steps.len(), 2);
        let text = outcome.to_text();
        assert!(text.contains("   0: -1 -1 -1 -1"));
        assert!(text.contains("Fast filter: pass"));
        assert!(text.ends_with("accepted\n"));
    }

    #[test]
    fn check_rejects_unsorted_and_out_of_range() {
        let lattice = Lattice::<DIM>::new();
        let method = MethodEnum::default();
        match check_candidate(&lattice, &method, Flat::Plane, &[3, 3, 4]) {
            Err(PlanesError::SearchError(SearchError::InvalidCandidate(_))) => {},
            other => panic!("expected InvalidCandidate, got {:?}", other),
        }
        match check_candidate(&lattice, &method, Flat::Plane, &[3, 81]) {
            Err(PlanesError::SearchError(SearchError::OutOfRange{index: 81, count: 81})) => {},
            other => panic!("expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn check_reports_filter_failure() {
        let lattice = Lattice::<DIM>::new();
        // Coplanar (x = y = -1) but with three distinct steps, so no sorted
        // nonet of that plane starts this way.
        let outcome = check_candidate(&lattice, &MethodEnum::default(), Flat::Plane, &[0, 1, 3, 7]).unwrap();
        assert!(!outcome.passes_filter);
        assert!(outcome.lies_in_flat);
        assert_eq!(outcome.steps.len(), 3);
    }

    #[test]
    fn lattice_listing_has_every_point() {
        let listing = lattice_listing(&Lattice::<DIM>::new());
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 81);
        assert_eq!(lines[40], "  40: 0 0 0 0");
    }
}
