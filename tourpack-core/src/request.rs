//! Selection requests: a target region plus optional ceilings.

use crate::RegionId;

/// Optional ceilings on a package's total duration and cost.
///
/// `None` means unbounded. Zero bounds are not special-cased: they admit only
/// tours with zero duration or zero cost respectively.
///
/// # Examples
/// ```
/// use tourpack_core::Constraints;
///
/// let constraints = Constraints::unbounded().with_max_days(3).with_max_budget(120);
/// assert!(constraints.admits(3, 120));
/// assert!(!constraints.admits(4, 100));
/// assert!(!constraints.admits(2, 121));
/// assert!(Constraints::unbounded().admits(u64::MAX, u64::MAX));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constraints {
    /// Maximum total duration in days.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_days: Option<u32>,
    /// Maximum total cost.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_budget: Option<u64>,
}

impl Constraints {
    /// Constraints with neither ceiling set.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_days: None,
            max_budget: None,
        }
    }

    /// Set the maximum total duration.
    #[must_use]
    pub const fn with_max_days(mut self, days: u32) -> Self {
        self.max_days = Some(days);
        self
    }

    /// Set the maximum total cost.
    #[must_use]
    pub const fn with_max_budget(mut self, budget: u64) -> Self {
        self.max_budget = Some(budget);
        self
    }

    /// Whether running totals of `days` and `cost` stay within both ceilings.
    #[must_use]
    pub fn admits(&self, days: u64, cost: u64) -> bool {
        self.max_days.is_none_or(|limit| days <= u64::from(limit))
            && self.max_budget.is_none_or(|limit| cost <= limit)
    }
}

/// A request to assemble a package for one region.
///
/// # Examples
/// ```
/// use tourpack_core::{Constraints, SelectionRequest};
///
/// let request = SelectionRequest::new("R1").with_constraints(Constraints::unbounded());
/// assert_eq!(request.region.as_str(), "R1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionRequest {
    /// Region whose tours are candidates.
    pub region: RegionId,
    /// Duration and budget ceilings.
    #[cfg_attr(feature = "serde", serde(default))]
    pub constraints: Constraints,
}

impl SelectionRequest {
    /// Request an unconstrained package for `region`.
    #[must_use]
    pub fn new(region: impl Into<RegionId>) -> Self {
        Self {
            region: region.into(),
            constraints: Constraints::unbounded(),
        }
    }

    /// Replace the constraints.
    #[must_use]
    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }
}
