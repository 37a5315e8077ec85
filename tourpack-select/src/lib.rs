//! Package selectors for Tourpack.
//!
//! Two strategies implement [`Selector`](tourpack_core::Selector) over the
//! same [`Catalog`](tourpack_core::Catalog):
//!
//! - [`GreedySelector`] scans a region's tours once in catalogue order and
//!   accepts every tour that fits the remaining ceilings and covers at least
//!   one new attraction. It is fast but sensitive to ordering.
//! - [`ExactSelector`] runs an exclude-first backtracking search over every
//!   subset of the region's tours and returns one of maximal cultural value.
//!   Its worst case is exponential in the number of tours, so it targets
//!   regions with tens of tours.
//!
//! Both are pure, synchronous and deterministic for a fixed catalogue.
//!
//! # Examples
//! ```
//! use tourpack_core::{Constraints, RegionId, TourId};
//! use tourpack_core::test_support::overlapping_pair;
//! use tourpack_select::select_optimal;
//!
//! let catalog = overlapping_pair().build().expect("valid catalogue");
//! let limits = Constraints::unbounded().with_max_days(3).with_max_budget(150);
//! let package = select_optimal(&catalog, &RegionId::from("R1"), limits);
//! assert_eq!(package.tours, vec![TourId::new(1), TourId::new(2)]);
//! assert_eq!(package.cultural_value, 35);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod candidate;
mod exact;
mod greedy;
mod kind;
mod state;

pub use exact::{ExactSelector, select_optimal};
pub use greedy::{GreedySelector, select_greedy};
pub use kind::{SelectorKind, UnknownSelectorError};
