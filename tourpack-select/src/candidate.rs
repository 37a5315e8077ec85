//! Flattened view of a region's tours used by the selectors.

use tourpack_core::{AttractionSlot, Catalog, RegionId, TourId};

/// A tour reduced to what selection needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub(crate) id: TourId,
    pub(crate) cost: u64,
    pub(crate) days: u32,
    pub(crate) attractions: Vec<(AttractionSlot, u32)>,
}

/// Candidates for `region` in catalogue order.
pub(crate) fn region_candidates(catalog: &Catalog, region: &RegionId) -> Vec<Candidate> {
    catalog
        .tours_in_region(region)
        .map(|entry| {
            let tour = entry.tour();
            Candidate {
                id: tour.id,
                cost: tour.cost,
                days: tour.duration_days,
                attractions: entry
                    .attractions()
                    .map(|(slot, attraction)| (slot, attraction.cultural_value))
                    .collect(),
            }
        })
        .collect()
}
