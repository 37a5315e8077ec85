//! Core domain types for the Tourpack engine.
//!
//! The crate holds the in-memory catalogue graph of regions, tours and
//! attractions, the data-access traits used to load it, and the request and
//! package types exchanged with selectors. Selection algorithms live in
//! `tourpack-select`.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod attraction;
pub mod catalog;
mod ids;
mod package;
mod region;
mod request;
mod selector;
mod source;
mod tour;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use attraction::Attraction;
pub use catalog::{AttractionSlot, Catalog, CatalogError, TourEntry};
pub use ids::{AttractionId, RegionId, TourId};
pub use package::{Diagnostics, Package};
pub use region::Region;
pub use request::{Constraints, SelectionRequest};
pub use selector::Selector;
pub use source::{
    AttractionSource, CatalogLoadError, RegionSource, SourceError, TourSource, load_catalog,
};
pub use tour::{Tour, TourAttraction};
