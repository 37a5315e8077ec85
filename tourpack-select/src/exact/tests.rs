//! Unit tests for the exhaustive selector.

use super::*;
use proptest::prelude::*;
use rstest::{fixture, rstest};
use tourpack_core::test_support::{CatalogBuilder, overlapping_pair};
use tourpack_core::TourId;

use crate::select_greedy;

#[fixture]
fn region() -> RegionId {
    RegionId::from("R1")
}

fn tour_ids(package: &Package) -> Vec<u64> {
    package.tours.iter().map(|tour| tour.get()).collect()
}

#[rstest]
#[case::budget_admits_one(120, vec![1], 100, 30)]
#[case::budget_admits_both(150, vec![1, 2], 150, 35)]
#[case::budget_admits_cheap(60, vec![2], 50, 25)]
#[case::budget_admits_none(49, vec![], 0, 0)]
fn overlapping_pair_scenarios(
    region: RegionId,
    #[case] budget: u64,
    #[case] expected_tours: Vec<u64>,
    #[case] expected_cost: u64,
    #[case] expected_value: u64,
) {
    let catalog = overlapping_pair().build().expect("valid catalogue");
    let limits = Constraints::unbounded().with_max_days(3).with_max_budget(budget);
    let package = select_optimal(&catalog, &region, limits);
    assert_eq!(tour_ids(&package), expected_tours);
    assert_eq!(package.total_cost, expected_cost);
    assert_eq!(package.cultural_value, expected_value);
}

#[rstest]
fn dominated_tour_is_skipped_once_its_cover_is_taken(region: RegionId) {
    // Tour 2 (C) visits a subset of tour 1 (D) and costs more.
    let catalog = CatalogBuilder::new()
        .region("R1")
        .attraction(1, 10)
        .attraction(2, 20)
        .tour(1, "R1", 10, 1, &[1, 2])
        .tour(2, "R1", 50, 1, &[2])
        .build()
        .expect("valid catalogue");

    let both_fit = select_optimal(&catalog, &region, Constraints::unbounded());
    assert_eq!(tour_ids(&both_fit), vec![1]);
    assert_eq!(both_fit.cultural_value, 30);

    // When D cannot be afforded, C alone is still considered.
    let d_unaffordable = CatalogBuilder::new()
        .region("R1")
        .attraction(1, 10)
        .attraction(2, 20)
        .tour(1, "R1", 60, 1, &[1, 2])
        .tour(2, "R1", 50, 1, &[2])
        .build()
        .expect("valid catalogue");
    let c_alone = select_optimal(
        &d_unaffordable,
        &region,
        Constraints::unbounded().with_max_budget(50),
    );
    assert_eq!(tour_ids(&c_alone), vec![2]);
    assert_eq!(c_alone.cultural_value, 20);
}

#[rstest]
fn finds_optimum_the_greedy_pass_misses(region: RegionId) {
    let catalog = CatalogBuilder::new()
        .region("R1")
        .attraction(1, 10)
        .attraction(2, 9)
        .attraction(3, 9)
        .tour(1, "R1", 10, 1, &[1])
        .tour(2, "R1", 5, 1, &[2])
        .tour(3, "R1", 5, 1, &[3])
        .build()
        .expect("valid catalogue");
    let limits = Constraints::unbounded().with_max_budget(10);

    let exact = select_optimal(&catalog, &region, limits);
    let greedy = select_greedy(&catalog, &region, limits);
    assert_eq!(tour_ids(&exact), vec![2, 3]);
    assert_eq!(exact.cultural_value, 18);
    assert_eq!(greedy.cultural_value, 10);
}

#[rstest]
fn ties_keep_the_first_package_found(region: RegionId) {
    // Both tours are worth 10; the exclude-first walk reaches tour 2 alone
    // before tour 1 alone.
    let catalog = CatalogBuilder::new()
        .region("R1")
        .attraction(1, 10)
        .attraction(2, 10)
        .tour(1, "R1", 5, 1, &[1])
        .tour(2, "R1", 1, 1, &[2])
        .build()
        .expect("valid catalogue");
    let package = select_optimal(&catalog, &region, Constraints::unbounded().with_max_days(1));
    assert_eq!(tour_ids(&package), vec![2]);
    assert_eq!(package.total_cost, 1);
}

#[rstest]
fn zero_bounds_admit_only_free_instant_tours(region: RegionId) {
    let catalog = overlapping_pair()
        .attraction(4, 3)
        .tour(3, "R1", 0, 0, &[4])
        .build()
        .expect("valid catalogue");
    let limits = Constraints::unbounded().with_max_days(0).with_max_budget(0);
    let package = select_optimal(&catalog, &region, limits);
    assert_eq!(tour_ids(&package), vec![3]);
    assert_eq!(package.cultural_value, 3);
}

#[rstest]
fn zero_value_attractions_never_replace_the_empty_package(region: RegionId) {
    let catalog = CatalogBuilder::new()
        .region("R1")
        .attraction(1, 0)
        .tour(1, "R1", 5, 1, &[1])
        .build()
        .expect("valid catalogue");
    let package = select_optimal(&catalog, &region, Constraints::unbounded());
    assert!(package.is_empty());
    assert_eq!(package.cultural_value, 0);
}

#[rstest]
#[case::unknown("nowhere")]
#[case::empty("R2")]
fn empty_regions_yield_empty_packages(#[case] target: &str) {
    let catalog = overlapping_pair()
        .region("R2")
        .build()
        .expect("valid catalogue");
    let package = select_optimal(&catalog, &RegionId::from(target), Constraints::unbounded());
    assert!(package.is_empty());
    assert_eq!(package.total_cost, 0);
    assert_eq!(package.cultural_value, 0);
    assert_eq!(package.diagnostics.candidates, 0);
    assert_eq!(package.diagnostics.nodes_visited, 1);
}

#[rstest]
fn unconstrained_disjoint_tours_visit_every_node(region: RegionId) {
    let catalog = CatalogBuilder::new()
        .region("R1")
        .attraction(1, 1)
        .attraction(2, 2)
        .attraction(3, 4)
        .tour(1, "R1", 1, 1, &[1])
        .tour(2, "R1", 1, 1, &[2])
        .tour(3, "R1", 1, 1, &[3])
        .build()
        .expect("valid catalogue");
    let package = select_optimal(&catalog, &region, Constraints::unbounded());
    assert_eq!(tour_ids(&package), vec![1, 2, 3]);
    assert_eq!(package.cultural_value, 7);
    // A full binary tree over three decisions has 15 nodes.
    assert_eq!(package.diagnostics.nodes_visited, 15);
    assert_eq!(package.diagnostics.pruned, 0);
}

#[rstest]
fn pruning_cuts_redundant_include_branches(region: RegionId) {
    let catalog = CatalogBuilder::new()
        .region("R1")
        .attraction(1, 5)
        .tour(1, "R1", 1, 1, &[1])
        .tour(2, "R1", 1, 1, &[1])
        .build()
        .expect("valid catalogue");
    let package = select_optimal(&catalog, &region, Constraints::unbounded());
    assert_eq!(tour_ids(&package), vec![2]);
    assert_eq!(package.diagnostics.pruned, 1);
    assert_eq!(package.diagnostics.nodes_visited, 6);
}

#[rstest]
#[case::unbounded(Constraints::unbounded())]
#[case::max_budget(Constraints::unbounded().with_max_budget(u64::MAX))]
fn totals_beyond_u64_are_never_accepted(region: RegionId, #[case] limits: Constraints) {
    let half = 1_u64 << 63;
    let catalog = CatalogBuilder::new()
        .region("R1")
        .attraction(1, 4)
        .attraction(2, 6)
        .tour(1, "R1", half, 1, &[1])
        .tour(2, "R1", half, 1, &[2])
        .build()
        .expect("valid catalogue");

    let exact = select_optimal(&catalog, &region, limits);
    assert_eq!(tour_ids(&exact), vec![2]);
    assert_eq!(exact.total_cost, half);

    let greedy = select_greedy(&catalog, &region, limits);
    assert_eq!(tour_ids(&greedy), vec![1]);
    assert_eq!(greedy.total_cost, half);
}

#[rstest]
fn selector_trait_delegates_to_function() {
    let catalog = overlapping_pair().build().expect("valid catalogue");
    let request = SelectionRequest::new("R1")
        .with_constraints(Constraints::unbounded().with_max_days(3).with_max_budget(150));
    let package = ExactSelector.select(&catalog, &request);
    assert_eq!(package.tours, vec![TourId::new(1), TourId::new(2)]);
}

/// Raw generated tour: cost, days and attraction ids.
type TourSpec = (u64, u32, Vec<u64>);

fn generated_catalog(values: &[u32], tours: &[TourSpec]) -> Catalog {
    let with_attractions = values
        .iter()
        .zip(0_u64..)
        .fold(CatalogBuilder::new().region("R1"), |builder, (value, id)| {
            builder.attraction(id, *value)
        });
    tours
        .iter()
        .zip(0_u64..)
        .fold(with_attractions, |builder, ((cost, days, visits), id)| {
            builder.tour(id, "R1", *cost, *days, visits)
        })
        .build()
        .expect("generated catalogue is valid")
}

fn brute_force_value(catalog: &Catalog, constraints: Constraints) -> u64 {
    let tours: Vec<_> = catalog
        .tours_in_region(&RegionId::from("R1"))
        .map(|entry| entry.tour().clone())
        .collect();
    let subsets = 1_usize << tours.len();
    (0..subsets)
        .filter_map(|mask| {
            let chosen: Vec<_> = tours
                .iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1 << bit) != 0)
                .map(|(_, tour)| tour)
                .collect();
            let days: u64 = chosen.iter().map(|tour| u64::from(tour.duration_days)).sum();
            let cost: u64 = chosen.iter().map(|tour| tour.cost).sum();
            constraints.admits(days, cost).then(|| {
                let ids: Vec<TourId> = chosen.iter().map(|tour| tour.id).collect();
                catalog.coverage_value(&ids)
            })
        })
        .max()
        .unwrap_or(0)
}

fn tour_strategy() -> impl Strategy<Value = TourSpec> {
    (
        0_u64..60,
        0_u32..4,
        proptest::collection::vec(0_u64..6, 0..4),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The search leaves its working state exactly as it found it.
    #[test]
    fn search_state_is_restored(
        values in proptest::collection::vec(0_u32..30, 6),
        tours in proptest::collection::vec(tour_strategy(), 0..9),
        max_days in proptest::option::of(0_u32..8),
        max_budget in proptest::option::of(0_u64..150),
    ) {
        let catalog = generated_catalog(&values, &tours);
        let candidates = region_candidates(&catalog, &RegionId::from("R1"));
        let constraints = Constraints { max_days, max_budget };
        let mut search = Search::new(&candidates, constraints, catalog.attraction_count());
        search.explore(0);
        prop_assert!(search.state.is_pristine());
    }

    /// The search agrees with enumerating every subset.
    #[test]
    fn matches_brute_force(
        values in proptest::collection::vec(0_u32..30, 6),
        tours in proptest::collection::vec(tour_strategy(), 0..9),
        max_days in proptest::option::of(0_u32..8),
        max_budget in proptest::option::of(0_u64..150),
    ) {
        let catalog = generated_catalog(&values, &tours);
        let constraints = Constraints { max_days, max_budget };
        let package = select_optimal(&catalog, &RegionId::from("R1"), constraints);
        prop_assert_eq!(package.cultural_value, brute_force_value(&catalog, constraints));
    }
}
