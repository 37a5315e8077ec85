//! Regions partition the tour catalogue.

use crate::RegionId;

/// A geographic region grouping tours.
///
/// Only the identifier matters to selection; the name is carried for
/// presentation.
///
/// # Examples
/// ```
/// use tourpack_core::Region;
///
/// let region = Region::new("LOM").with_name("Lombardia");
/// assert_eq!(region.id.as_str(), "LOM");
/// assert_eq!(region.name, "Lombardia");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    /// Unique region key.
    pub id: RegionId,
    /// Human-readable name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
}

impl Region {
    /// Construct an unnamed region.
    #[must_use]
    pub fn new(id: impl Into<RegionId>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
        }
    }

    /// Attach a display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
