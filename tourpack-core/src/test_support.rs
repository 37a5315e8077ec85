//! Test-only catalogue builders and an in-memory data source used by unit and
//! behaviour tests.

use crate::{
    Attraction, AttractionId, AttractionSource, Catalog, CatalogError, Region, RegionId,
    RegionSource, SourceError, Tour, TourAttraction, TourId, TourSource,
};

/// Fluent builder for small catalogues keyed by raw numeric ids.
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    regions: Vec<Region>,
    tours: Vec<Tour>,
    attractions: Vec<Attraction>,
    relations: Vec<TourAttraction>,
}

impl CatalogBuilder {
    /// Start an empty catalogue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a region.
    #[must_use]
    pub fn region(mut self, id: &str) -> Self {
        self.regions.push(Region::new(id));
        self
    }

    /// Add an attraction with the given cultural value.
    #[must_use]
    pub fn attraction(mut self, id: u64, cultural_value: u32) -> Self {
        self.attractions
            .push(Attraction::new(AttractionId::new(id), cultural_value));
        self
    }

    /// Add a tour and relation records for each listed attraction.
    #[must_use]
    pub fn tour(mut self, id: u64, region: &str, cost: u64, days: u32, attractions: &[u64]) -> Self {
        let tour = TourId::new(id);
        self.tours
            .push(Tour::new(tour, RegionId::from(region), cost, days));
        self.relations.extend(
            attractions
                .iter()
                .map(|attraction| TourAttraction::new(tour, AttractionId::new(*attraction))),
        );
        self
    }

    /// Add a single relation record.
    #[must_use]
    pub fn relation(mut self, tour: u64, attraction: u64) -> Self {
        self.relations.push(TourAttraction::new(
            TourId::new(tour),
            AttractionId::new(attraction),
        ));
        self
    }

    /// Wire the catalogue.
    ///
    /// # Errors
    /// Propagates [`CatalogError`] from [`Catalog::build`].
    pub fn build(self) -> Result<Catalog, CatalogError> {
        Catalog::build(self.regions, self.tours, self.attractions, self.relations)
    }

    /// Expose the collected records through the data-access traits.
    #[must_use]
    pub fn into_source(self) -> MemoryCatalogSource {
        MemoryCatalogSource {
            regions: self.regions,
            tours: self.tours,
            attractions: self.attractions,
            relations: self.relations,
        }
    }
}

/// In-memory implementation of every data-access trait.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalogSource {
    regions: Vec<Region>,
    tours: Vec<Tour>,
    attractions: Vec<Attraction>,
    relations: Vec<TourAttraction>,
}

impl MemoryCatalogSource {
    /// Append an extra relation record.
    #[must_use]
    pub fn with_relation(mut self, relation: TourAttraction) -> Self {
        self.relations.push(relation);
        self
    }
}

impl RegionSource for MemoryCatalogSource {
    fn regions(&self) -> Result<Vec<Region>, SourceError> {
        Ok(self.regions.clone())
    }
}

impl TourSource for MemoryCatalogSource {
    fn tours(&self) -> Result<Vec<Tour>, SourceError> {
        Ok(self.tours.clone())
    }

    fn tour_attractions(&self) -> Result<Vec<TourAttraction>, SourceError> {
        Ok(self.relations.clone())
    }
}

impl AttractionSource for MemoryCatalogSource {
    fn attractions(&self) -> Result<Vec<Attraction>, SourceError> {
        Ok(self.attractions.clone())
    }
}

/// Records for region `R1` with two overlapping tours.
///
/// Tour 1 costs 100 over 2 days and visits attractions 1 (value 10) and
/// 2 (value 20). Tour 2 costs 50 over 1 day and visits attractions 2 and
/// 3 (value 5).
#[must_use]
pub fn overlapping_pair() -> CatalogBuilder {
    CatalogBuilder::new()
        .region("R1")
        .attraction(1, 10)
        .attraction(2, 20)
        .attraction(3, 5)
        .tour(1, "R1", 100, 2, &[1, 2])
        .tour(2, "R1", 50, 1, &[2, 3])
}
