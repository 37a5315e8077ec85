//! Exhaustive package selection by backtracking.
//!
//! The search walks a binary decision tree over the region's tours in
//! catalogue order: at each depth it first explores the branch that leaves
//! the tour out, then the branch that takes it. Every node is a candidate
//! package, the root (nothing taken) included. An include branch is cut
//! together with all its descendants when the tour would break a ceiling or
//! would cover no attraction that is not already covered: cultural value is
//! a non-negative union, so such a tour adds nothing here and the sibling
//! exclude branch has already covered every completion without it.
//!
//! Ties keep the package found first. For a fixed catalogue order the result
//! is therefore deterministic.

use log::{debug, trace};
use tourpack_core::{Catalog, Constraints, Diagnostics, Package, RegionId, SelectionRequest, Selector};

use crate::candidate::{Candidate, region_candidates};
use crate::state::{Admission, SearchState};

/// Exact selector maximising cultural value.
///
/// The worst case visits every subset of the region's tours, so the cost is
/// exponential in the region size; recursion depth equals the number of
/// tours. Callers needing a time bound should cap region size before calling.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactSelector;

impl Selector for ExactSelector {
    fn select(&self, catalog: &Catalog, request: &SelectionRequest) -> Package {
        select_optimal(catalog, &request.region, request.constraints)
    }
}

/// Find a package of maximal cultural value for `region`.
///
/// The returned tours are listed in the order the search took them. An
/// unknown region, an empty region or ceilings no tour fits all yield an
/// empty package with zero value.
///
/// # Examples
/// ```
/// use tourpack_core::{Constraints, RegionId, TourId};
/// use tourpack_core::test_support::overlapping_pair;
/// use tourpack_select::select_optimal;
///
/// let catalog = overlapping_pair().build().expect("valid catalogue");
/// let limits = Constraints::unbounded().with_max_days(3).with_max_budget(120);
/// let package = select_optimal(&catalog, &RegionId::from("R1"), limits);
/// assert_eq!(package.tours, vec![TourId::new(1)]);
/// assert_eq!(package.total_cost, 100);
/// assert_eq!(package.cultural_value, 30);
/// ```
#[must_use]
pub fn select_optimal(catalog: &Catalog, region: &RegionId, constraints: Constraints) -> Package {
    let candidates = region_candidates(catalog, region);
    let mut search = Search::new(&candidates, constraints, catalog.attraction_count());
    search.explore(0);
    debug_assert!(
        search.state.is_pristine(),
        "search state must be fully reverted after backtracking"
    );

    let package = search.finish();
    debug!(
        "exact selection for region {region}: {} of {} tours, cost {}, value {}, {} nodes, {} pruned",
        package.tours.len(),
        package.diagnostics.candidates,
        package.total_cost,
        package.cultural_value,
        package.diagnostics.nodes_visited,
        package.diagnostics.pruned
    );
    package
}

struct Search<'c> {
    candidates: &'c [Candidate],
    constraints: Constraints,
    state: SearchState,
    best: Package,
    nodes_visited: u64,
    pruned: u64,
}

impl<'c> Search<'c> {
    fn new(candidates: &'c [Candidate], constraints: Constraints, attractions: usize) -> Self {
        Self {
            candidates,
            constraints,
            state: SearchState::with_capacity(attractions, candidates.len()),
            best: Package::empty(),
            nodes_visited: 0,
            pruned: 0,
        }
    }

    fn explore(&mut self, depth: usize) {
        self.nodes_visited = self.nodes_visited.saturating_add(1);
        if self.state.value() > self.best.cultural_value {
            self.best = self.state.snapshot();
            trace!(
                "new best package at depth {depth}: {:?} with value {}",
                self.best.tours,
                self.best.cultural_value
            );
        }

        let candidates = self.candidates;
        let Some(candidate) = candidates.get(depth) else {
            return;
        };
        let next = depth.saturating_add(1);

        self.explore(next);

        match self.state.admission(candidate, &self.constraints) {
            Admission::Admitted(step) => {
                let inclusion = self.state.include(candidate, step);
                self.explore(next);
                self.state.revert(inclusion);
            }
            rejected => {
                self.pruned = self.pruned.saturating_add(1);
                trace!("tour {} pruned at depth {depth}: {rejected:?}", candidate.id);
            }
        }
    }

    fn finish(self) -> Package {
        Package {
            diagnostics: Diagnostics {
                candidates: self.candidates.len(),
                nodes_visited: self.nodes_visited,
                pruned: self.pruned,
            },
            ..self.best
        }
    }
}

#[cfg(test)]
mod tests;
