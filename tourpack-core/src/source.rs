//! Data-access seam for loading the catalogue.
//!
//! The backing store is reached through three services mirroring its
//! collections: regions, tours (which also own the tour/attraction relation)
//! and attractions. [`load_catalog`] fetches everything and wires the
//! [`Catalog`] in one step.

use std::error::Error as StdError;

use log::debug;
use thiserror::Error;

use crate::{Attraction, Catalog, CatalogError, Region, Tour, TourAttraction};

type BoxedSource = Box<dyn StdError + Send + Sync + 'static>;

/// A data-access service failed to supply a collection.
#[derive(Debug, Error)]
#[error("failed to fetch {collection}: {message}")]
pub struct SourceError {
    collection: &'static str,
    message: String,
    #[source]
    source: Option<BoxedSource>,
}

impl SourceError {
    /// Describe a failure without an underlying cause.
    #[must_use]
    pub fn new(collection: &'static str, message: impl Into<String>) -> Self {
        Self {
            collection,
            message: message.into(),
            source: None,
        }
    }

    /// Wrap an underlying error raised while fetching `collection`.
    #[must_use]
    pub fn with_source<E>(collection: &'static str, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            collection,
            message: source.to_string(),
            source: Some(Box::new(source)),
        }
    }

    /// Name of the collection that could not be fetched.
    #[must_use]
    pub const fn collection(&self) -> &'static str {
        self.collection
    }
}

/// Supplies the region collection.
pub trait RegionSource {
    /// Fetch every region.
    ///
    /// # Errors
    /// Returns [`SourceError`] when the backing store cannot be read.
    fn regions(&self) -> Result<Vec<Region>, SourceError>;
}

/// Supplies tours and the tour/attraction relation.
pub trait TourSource {
    /// Fetch every tour, in the order selectors should consider them.
    ///
    /// # Errors
    /// Returns [`SourceError`] when the backing store cannot be read.
    fn tours(&self) -> Result<Vec<Tour>, SourceError>;

    /// Fetch every `(tour, attraction)` relation record.
    ///
    /// # Errors
    /// Returns [`SourceError`] when the backing store cannot be read.
    fn tour_attractions(&self) -> Result<Vec<TourAttraction>, SourceError>;
}

/// Supplies the attraction collection.
pub trait AttractionSource {
    /// Fetch every attraction.
    ///
    /// # Errors
    /// Returns [`SourceError`] when the backing store cannot be read.
    fn attractions(&self) -> Result<Vec<Attraction>, SourceError>;
}

/// Errors returned by [`load_catalog`].
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// A data-access service failed.
    #[error(transparent)]
    Source(#[from] SourceError),
    /// The fetched records violate catalogue integrity.
    #[error("catalogue integrity check failed: {0}")]
    Integrity(#[from] CatalogError),
}

/// Fetch all collections and build the [`Catalog`].
///
/// # Examples
/// ```
/// use tourpack_core::{
///     Attraction, AttractionSource, Region, RegionSource, SourceError, Tour, TourAttraction,
///     TourSource, load_catalog,
/// };
///
/// struct Empty;
///
/// impl RegionSource for Empty {
///     fn regions(&self) -> Result<Vec<Region>, SourceError> {
///         Ok(vec![Region::new("R1")])
///     }
/// }
///
/// impl TourSource for Empty {
///     fn tours(&self) -> Result<Vec<Tour>, SourceError> {
///         Ok(Vec::new())
///     }
///
///     fn tour_attractions(&self) -> Result<Vec<TourAttraction>, SourceError> {
///         Ok(Vec::new())
///     }
/// }
///
/// impl AttractionSource for Empty {
///     fn attractions(&self) -> Result<Vec<Attraction>, SourceError> {
///         Ok(Vec::new())
///     }
/// }
///
/// let catalog = load_catalog(&Empty, &Empty, &Empty).expect("load");
/// assert_eq!(catalog.regions().len(), 1);
/// assert_eq!(catalog.tour_count(), 0);
/// ```
///
/// # Errors
/// Returns [`CatalogLoadError::Source`] when a service fails and
/// [`CatalogLoadError::Integrity`] when the records cannot be wired.
pub fn load_catalog<R, T, A>(
    regions: &R,
    tours: &T,
    attractions: &A,
) -> Result<Catalog, CatalogLoadError>
where
    R: RegionSource + ?Sized,
    T: TourSource + ?Sized,
    A: AttractionSource + ?Sized,
{
    let region_records = regions.regions()?;
    let tour_records = tours.tours()?;
    let attraction_records = attractions.attractions()?;
    let relations = tours.tour_attractions()?;
    debug!(
        "fetched {} regions, {} tours, {} attractions, {} relations",
        region_records.len(),
        tour_records.len(),
        attraction_records.len(),
        relations.len()
    );
    Ok(Catalog::build(
        region_records,
        tour_records,
        attraction_records,
        relations,
    )?)
}
