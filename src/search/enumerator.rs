use std::iter::FusedIterator;

use crate::search::{
    err_str,
    filter,
    CoplanarityCheck,
    Flat,
    Lattice,
    Plane,
    ProcResult,
    SearchStats,
};

/// Depth-first enumerator of the accepted candidates.
///
/// Keeps an explicit stack instead of recursing: `candidate` holds the chosen
/// indices and `cursors[d]` the next index to try at depth `d`. Planes come out in
/// lexicographic order of their index sequences. The enumerator is one-shot; dropping
/// it or stopping iteration ends the search without further work.
#[derive(Debug)]
pub struct Enumerator<'a, const D: usize, C: CoplanarityCheck> {
    lattice: &'a Lattice<D>,
    check: &'a C,
    flat: Flat,
    size: usize,
    candidate: Vec<usize>,
    cursors: Vec<usize>,
    stats: SearchStats,
}
impl<'a, const D: usize, C: CoplanarityCheck> Enumerator<'a, D, C> {
    /// Create an enumerator over candidates of `size` points lying in a `flat`.
    pub fn new(lattice: &'a Lattice<D>, check: &'a C, flat: Flat, size: usize) -> ProcResult<Self> {
        if size == 0 || size > lattice.count() {
            return err_str(&format!("Candidate size must be between 1 and {}, got {}", lattice.count(), size));
        }
        Ok(Self::start(lattice, check, flat, size))
    }

    /// Create an enumerator without checking the size.
    pub(crate) fn start(lattice: &'a Lattice<D>, check: &'a C, flat: Flat, size: usize) -> Self {
        let mut cursors = Vec::with_capacity(size);
        // The empty root always passes the filter
        cursors.push(0);
        Enumerator{
            lattice,
            check,
            flat,
            size,
            candidate: Vec::with_capacity(size),
            cursors,
            stats: SearchStats::default(),
        }
    }

    /// Counters for the part of the search done so far.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    fn accept(&self) -> Option<Plane<D>> {
        let points: Vec<_> = self.candidate.iter().map(|&idx| self.lattice.points()[idx]).collect();
        if self.check.lies_in_flat(&points, self.flat) {
            Some(Plane{indices: self.candidate.clone(), points})
        }
        else {
            None
        }
    }
}
impl<'a, const D: usize, C: CoplanarityCheck> Iterator for Enumerator<'a, D, C> {
    type Item = Plane<D>;

    fn next(&mut self) -> Option<Plane<D>> {
        let count = self.lattice.count();
        while let Some(cursor) = self.cursors.last_mut() {
            // Leave room for the indices still to be chosen after this one
            let depth = self.candidate.len();
            let last_start = count - (self.size - depth);
            if *cursor > last_start {
                self.cursors.pop();
                self.candidate.pop();
                continue;
            }
            let idx = *cursor;
            *cursor += 1;
            self.candidate.push(idx);

            if self.candidate.len() == self.size {
                self.stats.full_checks += 1;
                let plane = self.accept();
                self.candidate.pop();
                if plane.is_some() {
                    self.stats.accepted += 1;
                    return plane;
                }
            }
            else {
                self.stats.nodes_visited += 1;
                if filter::passes_fast_filter(self.lattice, self.flat, &self.candidate) {
                    self.cursors.push(idx + 1);
                }
                else {
                    self.stats.pruned += 1;
                    self.candidate.pop();
                }
            }
        }
        None
    }
}
impl<'a, const D: usize, C: CoplanarityCheck> FusedIterator for Enumerator<'a, D, C> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::MethodEnum;

    #[test]
    fn rejects_bad_sizes() {
        let lattice = Lattice::<2>::new();
        let method = MethodEnum::default();
        assert!(Enumerator::new(&lattice, &method, Flat::Plane, 0).is_err());
        assert!(Enumerator::new(&lattice, &method, Flat::Plane, 10).is_err());
        assert!(Enumerator::new(&lattice, &method, Flat::Plane, 9).is_ok());
    }

    #[test]
    fn single_points_are_all_lines() {
        let lattice = Lattice::<2>::new();
        let method = MethodEnum::default();
        let singles: Vec<_> = Enumerator::new(&lattice, &method, Flat::Line, 1).unwrap().collect();
        assert_eq!(singles.len(), 9);
        assert_eq!(singles[4].indices, vec![4]);
    }

    #[test]
    fn whole_square_is_one_plane() {
        let lattice = Lattice::<2>::new();
        let method = MethodEnum::default();
        let planes: Vec<_> = Enumerator::new(&lattice, &method, Flat::Plane, 9).unwrap().collect();
        assert_eq!(planes.len(), 1);
        assert!(planes[0].contains_origin());
    }

    #[test]
    fn square_lines_in_order() {
        let lattice = Lattice::<2>::new();
        let method = MethodEnum::default();
        let mut search = Enumerator::new(&lattice, &method, Flat::Line, 3).unwrap();
        let lines: Vec<Vec<usize>> = search.by_ref().map(|line| line.indices).collect();
        assert_eq!(lines, vec![
            vec![0, 1, 2], vec![0, 3, 6], vec![0, 4, 8], vec![1, 4, 7],
            vec![2, 4, 6], vec![2, 5, 8], vec![3, 4, 5], vec![6, 7, 8],
        ]);
        assert_eq!(search.next(), None);
        let stats = search.stats();
        assert_eq!(stats.accepted, 8);
        // Pairs never break the one-step bound, so every triple reaches the exact check
        assert_eq!(stats.pruned, 0);
        assert_eq!(stats.full_checks, 84);
    }

    #[test]
    fn stops_early() {
        let lattice = Lattice::<3>::new();
        let method = MethodEnum::default();
        let mut search = Enumerator::new(&lattice, &method, Flat::Plane, 9).unwrap();
        let first_two: Vec<_> = search.by_ref().take(2).collect();
        assert_eq!(first_two.len(), 2);
        assert_eq!(search.stats().accepted, 2);
        assert_eq!(first_two[1].indices, vec![0, 1, 2, 9, 10, 11, 18, 19, 20]);
    }
}
