//! The in-memory entity graph of regions, tours and attractions.
//!
//! Tours and attractions live in arenas addressed by dense slots. Both
//! directions of the tour/attraction association are stored as ordered slot
//! sets, so the graph holds plain data rather than shared ownership. A
//! [`Catalog`] is immutable once built and can be shared freely between
//! threads.

use std::collections::{BTreeSet, HashMap};

use log::debug;

use crate::{Attraction, AttractionId, Region, RegionId, Tour, TourAttraction, TourId};

mod error;

pub use error::CatalogError;

/// Dense handle of an attraction within one [`Catalog`].
///
/// Slots are only meaningful for the catalogue that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttractionSlot(usize);

impl AttractionSlot {
    /// Position of the attraction in the catalogue arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct TourSlot(usize);

#[derive(Debug)]
struct TourNode {
    tour: Tour,
    attractions: BTreeSet<AttractionSlot>,
}

#[derive(Debug)]
struct RegionNode {
    position: usize,
    tours: Vec<TourSlot>,
}

#[derive(Debug)]
struct AttractionNode {
    attraction: Attraction,
    tours: BTreeSet<TourSlot>,
}

/// Read-only graph of the tour catalogue.
///
/// Tours of a region are yielded in catalogue order, i.e. the order in which
/// the tour collection was supplied to [`Catalog::build`]. Selectors rely on
/// that order for deterministic output.
///
/// # Examples
/// ```
/// use tourpack_core::{
///     Attraction, AttractionId, Catalog, Region, RegionId, Tour, TourAttraction, TourId,
/// };
///
/// # fn main() -> Result<(), tourpack_core::CatalogError> {
/// let catalog = Catalog::build(
///     vec![Region::new("R1")],
///     vec![Tour::new(TourId::new(1), RegionId::from("R1"), 100, 2)],
///     vec![Attraction::new(AttractionId::new(10), 25)],
///     [TourAttraction::new(TourId::new(1), AttractionId::new(10))],
/// )?;
///
/// let names: Vec<_> = catalog
///     .tours_of(AttractionId::new(10))
///     .map(|tour| tour.id)
///     .collect();
/// assert_eq!(names, vec![TourId::new(1)]);
/// assert_eq!(catalog.coverage_value(&[TourId::new(1)]), 25);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Catalog {
    regions: Vec<Region>,
    tours: Vec<TourNode>,
    attractions: Vec<AttractionNode>,
    tour_slots: HashMap<TourId, TourSlot>,
    attraction_slots: HashMap<AttractionId, AttractionSlot>,
    region_index: HashMap<RegionId, RegionNode>,
}

impl Catalog {
    /// Build the graph from fetched collections and relation records.
    ///
    /// Repeated relation records are merged. Construction fails atomically on
    /// duplicate identifiers, on tours naming an unknown region and on
    /// relations naming an unknown tour or attraction.
    ///
    /// # Errors
    /// Returns [`CatalogError`] describing the first integrity violation.
    pub fn build<I>(
        regions: Vec<Region>,
        tours: Vec<Tour>,
        attractions: Vec<Attraction>,
        relations: I,
    ) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = TourAttraction>,
    {
        let mut region_index: HashMap<RegionId, RegionNode> = HashMap::with_capacity(regions.len());
        for (position, region) in regions.iter().enumerate() {
            let node = RegionNode {
                position,
                tours: Vec::new(),
            };
            if region_index.insert(region.id.clone(), node).is_some() {
                return Err(CatalogError::DuplicateRegion {
                    region: region.id.clone(),
                });
            }
        }

        let mut tour_slots = HashMap::with_capacity(tours.len());
        for (position, tour) in tours.iter().enumerate() {
            let slot = TourSlot(position);
            if tour_slots.insert(tour.id, slot).is_some() {
                return Err(CatalogError::DuplicateTour { tour: tour.id });
            }
            region_index
                .get_mut(&tour.region)
                .ok_or_else(|| CatalogError::UnknownRegion {
                    tour: tour.id,
                    region: tour.region.clone(),
                })?
                .tours
                .push(slot);
        }

        let mut attraction_slots = HashMap::with_capacity(attractions.len());
        for (position, attraction) in attractions.iter().enumerate() {
            if attraction_slots
                .insert(attraction.id, AttractionSlot(position))
                .is_some()
            {
                return Err(CatalogError::DuplicateAttraction {
                    attraction: attraction.id,
                });
            }
        }

        let mut tour_nodes: Vec<TourNode> = tours
            .into_iter()
            .map(|tour| TourNode {
                tour,
                attractions: BTreeSet::new(),
            })
            .collect();
        let mut attraction_nodes: Vec<AttractionNode> = attractions
            .into_iter()
            .map(|attraction| AttractionNode {
                attraction,
                tours: BTreeSet::new(),
            })
            .collect();

        let mut links = 0_usize;
        let mut repeated = 0_usize;
        for relation in relations {
            let unknown_tour = || CatalogError::UnknownTour {
                tour: relation.tour,
                attraction: relation.attraction,
            };
            let unknown_attraction = || CatalogError::UnknownAttraction {
                tour: relation.tour,
                attraction: relation.attraction,
            };
            let tour_slot = *tour_slots.get(&relation.tour).ok_or_else(unknown_tour)?;
            let attraction_slot = *attraction_slots
                .get(&relation.attraction)
                .ok_or_else(unknown_attraction)?;
            let tour_node = tour_nodes.get_mut(tour_slot.0).ok_or_else(unknown_tour)?;
            let attraction_node = attraction_nodes
                .get_mut(attraction_slot.0)
                .ok_or_else(unknown_attraction)?;
            let fresh = tour_node.attractions.insert(attraction_slot);
            attraction_node.tours.insert(tour_slot);
            if fresh {
                links = links.saturating_add(1);
            } else {
                repeated = repeated.saturating_add(1);
            }
        }

        if repeated > 0 {
            debug!("merged {repeated} repeated tour/attraction relation records");
        }
        debug!(
            "catalogue built: {} regions, {} tours, {} attractions, {} links",
            regions.len(),
            tour_nodes.len(),
            attraction_nodes.len(),
            links
        );

        Ok(Self {
            regions,
            tours: tour_nodes,
            attractions: attraction_nodes,
            tour_slots,
            attraction_slots,
            region_index,
        })
    }

    /// All regions in catalogue order.
    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Look up a region by identifier.
    #[must_use]
    pub fn region(&self, id: &RegionId) -> Option<&Region> {
        self.region_index
            .get(id)
            .and_then(|node| self.regions.get(node.position))
    }

    /// Number of tours across all regions.
    #[must_use]
    pub const fn tour_count(&self) -> usize {
        self.tours.len()
    }

    /// Number of attractions in the catalogue.
    ///
    /// Every [`AttractionSlot`] issued by this catalogue is below this bound.
    #[must_use]
    pub const fn attraction_count(&self) -> usize {
        self.attractions.len()
    }

    /// Look up a tour by identifier.
    #[must_use]
    pub fn tour(&self, id: TourId) -> Option<&Tour> {
        self.tour_node(id).map(|node| &node.tour)
    }

    /// Look up an attraction by identifier.
    #[must_use]
    pub fn attraction(&self, id: AttractionId) -> Option<&Attraction> {
        self.attraction_slots
            .get(&id)
            .and_then(|slot| self.attraction_at(*slot))
    }

    /// Resolve an attraction slot issued by this catalogue.
    #[must_use]
    pub fn attraction_at(&self, slot: AttractionSlot) -> Option<&Attraction> {
        self.attractions.get(slot.0).map(|node| &node.attraction)
    }

    /// Tours offered in `region`, in catalogue order.
    ///
    /// An unknown region yields nothing.
    pub fn tours_in_region(&self, region: &RegionId) -> impl Iterator<Item = TourEntry<'_>> {
        self.region_index
            .get(region)
            .into_iter()
            .flat_map(|node| node.tours.iter())
            .filter_map(move |slot| self.tour_entry(*slot))
    }

    /// Attractions visited by `tour`, ordered by catalogue position.
    pub fn attractions_of(&self, tour: TourId) -> impl Iterator<Item = &Attraction> {
        self.tour_node(tour)
            .into_iter()
            .flat_map(|node| node.attractions.iter())
            .filter_map(move |slot| self.attraction_at(*slot))
    }

    /// Tours that include `attraction`, in catalogue order.
    pub fn tours_of(&self, attraction: AttractionId) -> impl Iterator<Item = &Tour> {
        self.attraction_slots
            .get(&attraction)
            .and_then(|slot| self.attractions.get(slot.0))
            .into_iter()
            .flat_map(|node| node.tours.iter())
            .filter_map(move |slot| self.tours.get(slot.0).map(|node| &node.tour))
    }

    /// Cultural value of the union of attractions covered by `tours`.
    ///
    /// Each attraction counts once however many of the tours visit it.
    /// Unknown tour identifiers contribute nothing.
    #[must_use]
    pub fn coverage_value(&self, tours: &[TourId]) -> u64 {
        let covered: BTreeSet<AttractionSlot> = tours
            .iter()
            .filter_map(|id| self.tour_node(*id))
            .flat_map(|node| node.attractions.iter().copied())
            .collect();
        covered
            .into_iter()
            .filter_map(|slot| self.attraction_at(slot))
            .map(|attraction| u64::from(attraction.cultural_value))
            .sum()
    }

    fn tour_node(&self, id: TourId) -> Option<&TourNode> {
        self.tour_slots
            .get(&id)
            .and_then(|slot| self.tours.get(slot.0))
    }

    fn tour_entry(&self, slot: TourSlot) -> Option<TourEntry<'_>> {
        self.tours.get(slot.0).map(|node| TourEntry {
            catalog: self,
            node,
        })
    }
}

/// A tour together with its wired attraction set.
#[derive(Debug, Clone, Copy)]
pub struct TourEntry<'a> {
    catalog: &'a Catalog,
    node: &'a TourNode,
}

impl<'a> TourEntry<'a> {
    /// The tour record.
    #[must_use]
    pub const fn tour(self) -> &'a Tour {
        &self.node.tour
    }

    /// Slots of the attractions the tour visits, in ascending order.
    pub fn attraction_slots(self) -> impl Iterator<Item = AttractionSlot> + 'a {
        self.node.attractions.iter().copied()
    }

    /// Attractions the tour visits, paired with their slots.
    pub fn attractions(self) -> impl Iterator<Item = (AttractionSlot, &'a Attraction)> + 'a {
        let catalog = self.catalog;
        self.node
            .attractions
            .iter()
            .filter_map(move |slot| catalog.attraction_at(*slot).map(|found| (*slot, found)))
    }
}
