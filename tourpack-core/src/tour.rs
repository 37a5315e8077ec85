//! Purchasable multi-day tours and their attraction relation records.

use crate::{AttractionId, RegionId, TourId};

/// A multi-day itinerary offered in one region.
///
/// `cost` is an integral amount in the catalogue's currency unit.
///
/// # Examples
/// ```
/// use tourpack_core::{RegionId, Tour, TourId};
///
/// let tour = Tour::new(TourId::new(1), RegionId::from("R1"), 100, 2);
/// assert_eq!(tour.cost, 100);
/// assert_eq!(tour.duration_days, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    /// Unique tour key.
    pub id: TourId,
    /// Region offering the tour.
    pub region: RegionId,
    /// Human-readable name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Price of the tour.
    pub cost: u64,
    /// Length of the tour in days.
    pub duration_days: u32,
}

impl Tour {
    /// Construct an unnamed tour.
    #[must_use]
    pub const fn new(id: TourId, region: RegionId, cost: u64, duration_days: u32) -> Self {
        Self {
            id,
            region,
            name: String::new(),
            cost,
            duration_days,
        }
    }

    /// Attach a display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// A `(tour, attraction)` pair emitted by the data-access layer.
///
/// Relation records are consumed once while wiring the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourAttraction {
    /// Tour side of the relation.
    pub tour: TourId,
    /// Attraction side of the relation.
    pub attraction: AttractionId,
}

impl TourAttraction {
    /// Pair a tour with an attraction it visits.
    #[must_use]
    pub const fn new(tour: TourId, attraction: AttractionId) -> Self {
        Self { tour, attraction }
    }
}
