//! First-fit package selection.

use log::debug;
use tourpack_core::{Catalog, Constraints, Diagnostics, Package, RegionId, SelectionRequest, Selector};

use crate::candidate::region_candidates;
use crate::state::{Admission, SearchState};

/// Single-pass heuristic selector.
///
/// Tours are scanned in catalogue order. A tour is accepted when it fits the
/// remaining day and budget slack and covers at least one attraction not
/// already covered. The result respects both ceilings but is not guaranteed
/// to be optimal: a different tour order may yield a better package.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySelector;

impl Selector for GreedySelector {
    fn select(&self, catalog: &Catalog, request: &SelectionRequest) -> Package {
        select_greedy(catalog, &request.region, request.constraints)
    }
}

/// Assemble a package for `region` with the first-fit heuristic.
///
/// An unknown or empty region yields an empty package.
///
/// # Examples
/// ```
/// use tourpack_core::{Constraints, RegionId, TourId};
/// use tourpack_core::test_support::overlapping_pair;
/// use tourpack_select::select_greedy;
///
/// let catalog = overlapping_pair().build().expect("valid catalogue");
/// let package = select_greedy(&catalog, &RegionId::from("R1"), Constraints::unbounded());
/// assert_eq!(package.tours, vec![TourId::new(1), TourId::new(2)]);
/// assert_eq!(package.cultural_value, 35);
/// ```
#[must_use]
pub fn select_greedy(catalog: &Catalog, region: &RegionId, constraints: Constraints) -> Package {
    let candidates = region_candidates(catalog, region);
    let mut state = SearchState::with_capacity(catalog.attraction_count(), candidates.len());
    let mut pruned = 0_u64;

    for candidate in &candidates {
        match state.admission(candidate, &constraints) {
            Admission::Admitted(step) => state.commit(candidate, step),
            Admission::ExceedsDays | Admission::ExceedsBudget | Admission::NoNewAttractions => {
                pruned = pruned.saturating_add(1);
            }
        }
    }

    let diagnostics = Diagnostics {
        candidates: candidates.len(),
        nodes_visited: u64::try_from(candidates.len()).unwrap_or(u64::MAX),
        pruned,
    };
    let package = state.into_package(diagnostics);
    debug!(
        "greedy selection for region {region}: {} of {} tours, cost {}, value {}",
        package.tours.len(),
        diagnostics.candidates,
        package.total_cost,
        package.cultural_value
    );
    package
}
