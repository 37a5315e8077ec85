//! Facade crate for the Tourpack package selector.
//!
//! This crate re-exports the catalogue and request types and exposes the
//! selectors behind the `select` feature flag.
//!
//! # Examples
//! ```
//! # #[cfg(feature = "select")]
//! # fn main() -> Result<(), tourpack::CatalogError> {
//! use tourpack::{
//!     Attraction, AttractionId, Catalog, Constraints, ExactSelector, Region, RegionId,
//!     SelectionRequest, Selector, Tour, TourAttraction, TourId,
//! };
//!
//! let catalog = Catalog::build(
//!     vec![Region::new("R1")],
//!     vec![Tour::new(TourId::new(1), RegionId::from("R1"), 80, 2)],
//!     vec![Attraction::new(AttractionId::new(1), 12)],
//!     [TourAttraction::new(TourId::new(1), AttractionId::new(1))],
//! )?;
//! let request = SelectionRequest::new("R1")
//!     .with_constraints(Constraints::unbounded().with_max_budget(100));
//! let package = ExactSelector.select(&catalog, &request);
//! assert_eq!(package.cultural_value, 12);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "select"))]
//! # fn main() {}
//! ```

#![forbid(unsafe_code)]

pub use tourpack_core::{
    Attraction, AttractionId, AttractionSource, Catalog, CatalogError, CatalogLoadError,
    Constraints, Diagnostics, Package, Region, RegionId, RegionSource, SelectionRequest,
    Selector, SourceError, Tour, TourAttraction, TourId, TourSource, load_catalog,
};

#[cfg(feature = "test-support")]
pub use tourpack_core::test_support;

#[cfg(feature = "select")]
pub use tourpack_select::{
    ExactSelector, GreedySelector, SelectorKind, UnknownSelectorError, select_greedy,
    select_optimal,
};
