//! Named selection strategies for configuration surfaces.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tourpack_core::{Catalog, Package, SelectionRequest, Selector};

use crate::{ExactSelector, GreedySelector};

/// The available selection strategies.
///
/// # Examples
/// ```
/// use tourpack_select::SelectorKind;
///
/// let kind: SelectorKind = "greedy".parse().expect("known strategy");
/// assert_eq!(kind, SelectorKind::Greedy);
/// assert_eq!(SelectorKind::default().to_string(), "exact");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorKind {
    /// First-fit heuristic.
    Greedy,
    /// Exhaustive backtracking search.
    #[default]
    Exact,
}

impl SelectorKind {
    /// Every strategy, in display order.
    pub const ALL: [Self; 2] = [Self::Greedy, Self::Exact];

    /// Configuration name of the strategy.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Greedy => "greedy",
            Self::Exact => "exact",
        }
    }
}

impl Selector for SelectorKind {
    fn select(&self, catalog: &Catalog, request: &SelectionRequest) -> Package {
        match self {
            Self::Greedy => GreedySelector.select(catalog, request),
            Self::Exact => ExactSelector.select(catalog, request),
        }
    }
}

impl fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing an unrecognised strategy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown selection strategy {name:?} (expected \"greedy\" or \"exact\")")]
pub struct UnknownSelectorError {
    /// The rejected name.
    pub name: String,
}

impl FromStr for SelectorKind {
    type Err = UnknownSelectorError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| UnknownSelectorError {
                name: name.to_owned(),
            })
    }
}
