//! JSON catalogue files.
//!
//! A catalogue file holds the four collections the loader needs:
//!
//! ```json
//! {
//!   "regions": [{ "id": "R1", "name": "Lombardy" }],
//!   "tours": [{ "id": 1, "region": "R1", "cost": 100, "duration_days": 2 }],
//!   "attractions": [{ "id": 10, "cultural_value": 25 }],
//!   "relations": [{ "tour": 1, "attraction": 10 }]
//! }
//! ```
//!
//! Missing arrays are treated as empty.

use std::io::BufReader;

use camino::Utf8Path;
use log::debug;
use serde::{Deserialize, Serialize};
use tourpack_core::{
    Attraction, AttractionSource, Catalog, Region, RegionSource, SourceError, Tour,
    TourAttraction, TourSource, load_catalog,
};

use crate::CliError;
use crate::fs::open_utf8_file;

/// Decoded contents of a catalogue file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct CatalogFile {
    pub(crate) regions: Vec<Region>,
    pub(crate) tours: Vec<Tour>,
    pub(crate) attractions: Vec<Attraction>,
    pub(crate) relations: Vec<TourAttraction>,
}

impl CatalogFile {
    /// Decode a catalogue file from disk.
    pub(crate) fn open(path: &Utf8Path) -> Result<Self, CliError> {
        let file = open_utf8_file(path).map_err(|source| CliError::OpenCatalogue {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);
        let decoded: Self =
            serde_json::from_reader(reader).map_err(|source| CliError::ParseCatalogue {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(
            "read catalogue {path}: {} regions, {} tours, {} attractions, {} relations",
            decoded.regions.len(),
            decoded.tours.len(),
            decoded.attractions.len(),
            decoded.relations.len()
        );
        Ok(decoded)
    }

    /// Decode and wire the catalogue at `path`.
    pub(crate) fn load(path: &Utf8Path) -> Result<Catalog, CliError> {
        let file = Self::open(path)?;
        load_catalog(&file, &file, &file).map_err(|source| CliError::LoadCatalogue {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl RegionSource for CatalogFile {
    fn regions(&self) -> Result<Vec<Region>, SourceError> {
        Ok(self.regions.clone())
    }
}

impl TourSource for CatalogFile {
    fn tours(&self) -> Result<Vec<Tour>, SourceError> {
        Ok(self.tours.clone())
    }

    fn tour_attractions(&self) -> Result<Vec<TourAttraction>, SourceError> {
        Ok(self.relations.clone())
    }
}

impl AttractionSource for CatalogFile {
    fn attractions(&self) -> Result<Vec<Attraction>, SourceError> {
        Ok(self.attractions.clone())
    }
}
