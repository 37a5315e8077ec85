//! Packages: the tours chosen by a selector and their totals.

use crate::TourId;

/// Counters describing how a package was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics {
    /// Tours of the region that were candidates.
    pub candidates: usize,
    /// Decision points visited.
    pub nodes_visited: u64,
    /// Candidate inclusions rejected by a ceiling or for adding no new
    /// attraction.
    pub pruned: u64,
}

/// The tours selected for a region together with their totals.
///
/// `tours` is ordered by acceptance. `cultural_value` counts each covered
/// attraction once.
///
/// # Examples
/// ```
/// use tourpack_core::Package;
///
/// let package = Package::empty();
/// assert!(package.is_empty());
/// assert_eq!(package.total_cost, 0);
/// assert_eq!(package.cultural_value, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Package {
    /// Selected tours in acceptance order.
    pub tours: Vec<TourId>,
    /// Sum of the tours' costs.
    pub total_cost: u64,
    /// Sum of the tours' durations in days.
    pub total_days: u64,
    /// Cultural value of the union of covered attractions.
    pub cultural_value: u64,
    /// Search counters.
    #[cfg_attr(feature = "serde", serde(default))]
    pub diagnostics: Diagnostics,
}

impl Package {
    /// The package containing no tours.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            tours: Vec::new(),
            total_cost: 0,
            total_days: 0,
            cultural_value: 0,
            diagnostics: Diagnostics {
                candidates: 0,
                nodes_visited: 0,
                pruned: 0,
            },
        }
    }

    /// Whether no tour was selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }

    /// Whether `tour` is part of the package.
    #[must_use]
    pub fn contains(&self, tour: TourId) -> bool {
        self.tours.contains(&tour)
    }
}
