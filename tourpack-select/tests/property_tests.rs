//! Property-based tests for the package selectors.
//!
//! # Invariants tested
//!
//! - **Constraint compliance:** every package fits its day and budget ceilings.
//! - **Consistent totals:** reported cost, days and value match the chosen tours.
//! - **Distinct tours:** no tour appears twice and all belong to the region.
//! - **Dominance:** the exact package is never worth less than the greedy one.
//! - **Monotonicity:** relaxing a ceiling never lowers the optimum.


use std::collections::HashSet;

use proptest::prelude::*;
use tourpack_core::{Catalog, Constraints, Package, RegionId};
use tourpack_select::{select_greedy, select_optimal};

use proptest_support::{catalog_strategy, constraints_strategy, region};

fn assert_package_consistent(
    catalog: &Catalog,
    package: &Package,
    constraints: Constraints,
) -> Result<(), TestCaseError> {
    prop_assert!(constraints.admits(package.total_days, package.total_cost));

    let mut seen = HashSet::new();
    let mut cost = 0_u64;
    let mut days = 0_u64;
    for id in &package.tours {
        prop_assert!(seen.insert(*id), "tour {} selected twice", id);
        let tour = catalog.tour(*id);
        prop_assert!(tour.is_some(), "unknown tour {}", id);
        if let Some(tour) = tour {
            prop_assert_eq!(&tour.region, &region());
            cost = cost.saturating_add(tour.cost);
            days = days.saturating_add(u64::from(tour.duration_days));
        }
    }
    prop_assert_eq!(package.total_cost, cost);
    prop_assert_eq!(package.total_days, days);
    prop_assert_eq!(package.cultural_value, catalog.coverage_value(&package.tours));
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    /// Property: both selectors return packages that respect the request.
    #[test]
    fn packages_respect_constraints(
        spec in catalog_strategy(9),
        constraints in constraints_strategy(),
    ) {
        let catalog = spec.build();
        let exact = select_optimal(&catalog, &region(), constraints);
        let greedy = select_greedy(&catalog, &region(), constraints);
        assert_package_consistent(&catalog, &exact, constraints)?;
        assert_package_consistent(&catalog, &greedy, constraints)?;
    }

    /// Property: the exhaustive search dominates the greedy pass.
    #[test]
    fn exact_dominates_greedy(
        spec in catalog_strategy(9),
        constraints in constraints_strategy(),
    ) {
        let catalog = spec.build();
        let exact = select_optimal(&catalog, &region(), constraints);
        let greedy = select_greedy(&catalog, &region(), constraints);
        prop_assert!(
            exact.cultural_value >= greedy.cultural_value,
            "exact {} below greedy {}",
            exact.cultural_value,
            greedy.cultural_value
        );
    }

    /// Property: raising or removing a ceiling never lowers the optimum.
    #[test]
    fn relaxing_constraints_never_hurts(
        spec in catalog_strategy(8),
        constraints in constraints_strategy(),
        extra_days in 0_u32..4,
        extra_budget in 0_u64..60,
    ) {
        let catalog = spec.build();
        let base = select_optimal(&catalog, &region(), constraints).cultural_value;

        let relaxed = Constraints {
            max_days: constraints.max_days.map(|days| days.saturating_add(extra_days)),
            max_budget: constraints
                .max_budget
                .map(|budget| budget.saturating_add(extra_budget)),
        };
        let relaxed_value = select_optimal(&catalog, &region(), relaxed).cultural_value;
        let unbounded_value =
            select_optimal(&catalog, &region(), Constraints::unbounded()).cultural_value;

        prop_assert!(relaxed_value >= base);
        prop_assert!(unbounded_value >= relaxed_value);
    }

    /// Property: regions without tours always yield the empty package.
    #[test]
    fn tourless_regions_yield_empty_packages(
        spec in catalog_strategy(6),
        constraints in constraints_strategy(),
    ) {
        let catalog = spec.build();
        for target in ["R2", "unknown"] {
            let package = select_optimal(&catalog, &RegionId::from(target), constraints);
            prop_assert_eq!(package.tours.len(), 0);
            prop_assert_eq!(package.total_cost, 0);
            prop_assert_eq!(package.cultural_value, 0);
            prop_assert!(select_greedy(&catalog, &RegionId::from(target), constraints).is_empty());
        }
    }
}
