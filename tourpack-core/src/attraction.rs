//! Points of cultural interest visited by tours.

use crate::AttractionId;

/// An attraction with its cultural-value score.
///
/// Cultural value is the quantity selectors maximise. It is counted once per
/// attraction, however many selected tours visit it.
///
/// # Examples
/// ```
/// use tourpack_core::{Attraction, AttractionId};
///
/// let duomo = Attraction::new(AttractionId::new(1), 90).with_name("Duomo");
/// assert_eq!(duomo.cultural_value, 90);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attraction {
    /// Unique attraction key.
    pub id: AttractionId,
    /// Human-readable name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Non-negative cultural-value score.
    pub cultural_value: u32,
}

impl Attraction {
    /// Construct an unnamed attraction.
    #[must_use]
    pub const fn new(id: AttractionId, cultural_value: u32) -> Self {
        Self {
            id,
            name: String::new(),
            cultural_value,
        }
    }

    /// Attach a display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
