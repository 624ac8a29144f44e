// SPDX-License-Identifier: MPL-2.0
//! The photo gallery catalog: item types, category filtering, and
//! circular navigation.
//!
//! The catalog is an ordered, immutable list of [`MediaItem`]s built once
//! from a fixed definition. It answers lookup, filter, and wraparound
//! next/previous queries; the "currently shown" item id is owned by the
//! caller and never stored here.
//!
//! # Example
//!
//! ```
//! use araucarias::gallery::{CategoryFilter, GalleryCatalog};
//!
//! let catalog = GalleryCatalog::builtin();
//! let edificio = catalog.filter_by_slug("edificio");
//! assert!(!edificio.is_empty());
//!
//! // The lightbox wraps from the last photo back to the first
//! let last = catalog.last().expect("catalog is not empty");
//! let wrapped = catalog.next(&last.id).expect("catalog is not empty");
//! assert_eq!(wrapped.id, catalog.first().expect("catalog is not empty").id);
//! ```

pub mod builtin;
pub mod catalog;
pub mod filter;

use serde::Serialize;
use std::fmt;

// Re-export commonly used types
pub use catalog::GalleryCatalog;
pub use filter::CategoryFilter;

/// Gallery sections a photo can belong to.
///
/// Every item carries exactly one concrete category; "show everything"
/// exists only as [`CategoryFilter::All`] and is never a tag on an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// The rental units themselves.
    Unidades,
    /// Bedrooms and interiors.
    Habitaciones,
    /// The building and common areas.
    Edificio,
}

impl Category {
    /// All concrete categories, in the order the gallery tabs show them.
    pub const VARIANTS: [Category; 3] =
        [Category::Unidades, Category::Habitaciones, Category::Edificio];

    /// Returns the URL/filter slug for this category.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Category::Unidades => "unidades",
            Category::Habitaciones => "habitaciones",
            Category::Edificio => "edificio",
        }
    }

    /// Parses a category from its slug. Unknown slugs yield `None`.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Category::VARIANTS.into_iter().find(|c| c.slug() == slug)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Orientation hint for layout; navigation ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectRatio {
    Landscape,
    Portrait,
}

impl AspectRatio {
    /// Returns the slug used in file names and data exports.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            AspectRatio::Landscape => "landscape",
            AspectRatio::Portrait => "portrait",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// One gallery photo.
///
/// `id` is the stable navigation key and must be unique within a catalog.
/// `src` is a site-relative asset path; nothing here checks that the file
/// exists (that is the deployment's problem, as it was for the website).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaItem {
    pub id: String,
    pub src: String,
    pub alt: String,
    pub category: Category,
    #[serde(rename = "aspectRatio")]
    pub aspect_ratio: AspectRatio,
}

impl MediaItem {
    /// Creates a new media item.
    pub fn new(
        id: impl Into<String>,
        src: impl Into<String>,
        alt: impl Into<String>,
        category: Category,
        aspect_ratio: AspectRatio,
    ) -> Self {
        Self {
            id: id.into(),
            src: src.into(),
            alt: alt.into(),
            category,
            aspect_ratio,
        }
    }
}
