//! Integrity errors raised while wiring a catalogue.

use thiserror::Error;

use crate::{AttractionId, RegionId, TourId};

/// Errors returned by [`Catalog::build`](crate::Catalog::build).
///
/// Construction is atomic: when any of these is returned no catalogue is
/// produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two regions share an identifier.
    #[error("region {region} is defined more than once")]
    DuplicateRegion {
        /// Repeated identifier.
        region: RegionId,
    },
    /// Two tours share an identifier.
    #[error("tour {tour} is defined more than once")]
    DuplicateTour {
        /// Repeated identifier.
        tour: TourId,
    },
    /// Two attractions share an identifier.
    #[error("attraction {attraction} is defined more than once")]
    DuplicateAttraction {
        /// Repeated identifier.
        attraction: AttractionId,
    },
    /// A tour belongs to a region absent from the region collection.
    #[error("tour {tour} belongs to unknown region {region}")]
    UnknownRegion {
        /// Tour naming the region.
        tour: TourId,
        /// Missing region.
        region: RegionId,
    },
    /// A relation record names a tour absent from the tour collection.
    #[error("relation ({tour}, {attraction}) references unknown tour {tour}")]
    UnknownTour {
        /// Missing tour.
        tour: TourId,
        /// Attraction side of the offending relation.
        attraction: AttractionId,
    },
    /// A relation record names an attraction absent from the attraction
    /// collection.
    #[error("relation ({tour}, {attraction}) references unknown attraction {attraction}")]
    UnknownAttraction {
        /// Tour side of the offending relation.
        tour: TourId,
        /// Missing attraction.
        attraction: AttractionId,
    },
}
