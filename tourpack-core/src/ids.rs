//! Opaque identifiers for catalogue entities.
//!
//! Regions are keyed by free-form strings; tours and attractions by the
//! numeric keys assigned by the backing store.

use std::fmt;

/// Identifier of a geographic region.
///
/// # Examples
/// ```
/// use tourpack_core::RegionId;
///
/// let region = RegionId::from("LOM");
/// assert_eq!(region.as_str(), "LOM");
/// assert_eq!(region.to_string(), "LOM");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RegionId(String);

impl RegionId {
    /// Wrap a region key.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the underlying key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RegionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RegionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw key.
            #[must_use]
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Return the raw key.
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(
    /// Identifier of a tour.
    ///
    /// # Examples
    /// ```
    /// use tourpack_core::TourId;
    ///
    /// let id = TourId::new(7);
    /// assert_eq!(id.get(), 7);
    /// ```
    TourId
);

numeric_id!(
    /// Identifier of an attraction.
    AttractionId
);
