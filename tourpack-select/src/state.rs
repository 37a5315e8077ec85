//! Mutable working state shared by the selectors.
//!
//! The state tracks the tours taken so far, the attractions they cover and
//! the running totals. The exact search mutates it on the way down and
//! reverts every change on the way back up; [`Inclusion`] carries exactly
//! what is needed to undo one step.

use std::collections::HashSet;

use tourpack_core::{AttractionSlot, Constraints, Diagnostics, Package, TourId};

use crate::candidate::Candidate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Totals {
    cost: u64,
    days: u64,
    value: u64,
}

/// Cost and day totals the selection reaches once an admitted candidate
/// joins it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Step {
    cost: u64,
    days: u64,
}

/// Outcome of checking whether a candidate may join the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Admission {
    Admitted(Step),
    ExceedsDays,
    ExceedsBudget,
    NoNewAttractions,
}

/// Undo record returned by [`SearchState::include`].
#[derive(Debug)]
#[must_use = "an inclusion must be reverted to restore the search state"]
pub(crate) struct Inclusion {
    added: Vec<AttractionSlot>,
    previous: Totals,
}

#[derive(Debug, Default)]
pub(crate) struct SearchState {
    covered: HashSet<AttractionSlot>,
    tours: Vec<TourId>,
    totals: Totals,
}

impl SearchState {
    pub(crate) fn with_capacity(attractions: usize, tours: usize) -> Self {
        Self {
            covered: HashSet::with_capacity(attractions),
            tours: Vec::with_capacity(tours),
            totals: Totals::default(),
        }
    }

    pub(crate) const fn value(&self) -> u64 {
        self.totals.value
    }

    /// Check the ceilings first, then whether the candidate covers anything
    /// new. A candidate with no attractions never covers anything new.
    ///
    /// A total that does not fit in `u64` exceeds every ceiling, unbounded
    /// ones included.
    pub(crate) fn admission(&self, candidate: &Candidate, constraints: &Constraints) -> Admission {
        let Some(days) = self.totals.days.checked_add(u64::from(candidate.days)) else {
            return Admission::ExceedsDays;
        };
        if !constraints.admits(days, 0) {
            return Admission::ExceedsDays;
        }
        let Some(cost) = self.totals.cost.checked_add(candidate.cost) else {
            return Admission::ExceedsBudget;
        };
        if !constraints.admits(0, cost) {
            return Admission::ExceedsBudget;
        }
        if candidate
            .attractions
            .iter()
            .all(|(slot, _)| self.covered.contains(slot))
        {
            return Admission::NoNewAttractions;
        }
        Admission::Admitted(Step { cost, days })
    }

    /// Take `candidate` at the totals its admission computed, returning the
    /// record needed to undo the step.
    pub(crate) fn include(&mut self, candidate: &Candidate, step: Step) -> Inclusion {
        let previous = self.totals;
        let added = self.extend(candidate, step);
        Inclusion { added, previous }
    }

    /// Take `candidate` permanently.
    pub(crate) fn commit(&mut self, candidate: &Candidate, step: Step) {
        self.extend(candidate, step);
    }

    /// Undo the most recent [`include`](Self::include).
    pub(crate) fn revert(&mut self, inclusion: Inclusion) {
        for slot in inclusion.added {
            self.covered.remove(&slot);
        }
        self.tours.pop();
        self.totals = inclusion.previous;
    }

    /// Whether the state is back to its freshly constructed value.
    pub(crate) fn is_pristine(&self) -> bool {
        self.covered.is_empty() && self.tours.is_empty() && self.totals == Totals::default()
    }

    pub(crate) fn snapshot(&self) -> Package {
        Package {
            tours: self.tours.clone(),
            total_cost: self.totals.cost,
            total_days: self.totals.days,
            cultural_value: self.totals.value,
            diagnostics: Diagnostics::default(),
        }
    }

    pub(crate) fn into_package(self, diagnostics: Diagnostics) -> Package {
        Package {
            tours: self.tours,
            total_cost: self.totals.cost,
            total_days: self.totals.days,
            cultural_value: self.totals.value,
            diagnostics,
        }
    }

    fn extend(&mut self, candidate: &Candidate, step: Step) -> Vec<AttractionSlot> {
        let mut added = Vec::new();
        let mut gained = 0_u64;
        for (slot, cultural_value) in &candidate.attractions {
            if self.covered.insert(*slot) {
                added.push(*slot);
                gained = gained.saturating_add(u64::from(*cultural_value));
            }
        }
        self.tours.push(candidate.id);
        self.totals = Totals {
            cost: step.cost,
            days: step.days,
            value: self.totals.value.saturating_add(gained),
        };
        added
    }
}
