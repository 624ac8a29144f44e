// SPDX-License-Identifier: MPL-2.0
//! The unit listing: suite types, amenities, and availability queries.
//!
//! Suites are the rentable units of the property. The list is small and
//! hand-maintained from the owner's fact sheet, so unlike the gallery it
//! is validated on construction: ids and slugs must be unique and every
//! highlighted amenity must actually be offered.

pub mod builtin;
pub mod catalog;
pub mod filter;

use serde::Serialize;
use std::fmt;

// Re-export commonly used types
pub use catalog::SuiteCatalog;
pub use filter::TypeFilter;

/// Amenities a suite can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Amenity {
    Kitchen,
    Wifi,
    Ac,
    Tv,
    Linens,
    Closet,
    Intercom,
    Patio,
    Living,
    Toilette,
}

impl Amenity {
    /// All amenities, in fact-sheet order.
    pub const VARIANTS: [Amenity; 10] = [
        Amenity::Kitchen,
        Amenity::Wifi,
        Amenity::Ac,
        Amenity::Tv,
        Amenity::Linens,
        Amenity::Closet,
        Amenity::Intercom,
        Amenity::Patio,
        Amenity::Living,
        Amenity::Toilette,
    ];

    /// Returns the data key for this amenity.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Amenity::Kitchen => "kitchen",
            Amenity::Wifi => "wifi",
            Amenity::Ac => "ac",
            Amenity::Tv => "tv",
            Amenity::Linens => "linens",
            Amenity::Closet => "closet",
            Amenity::Intercom => "intercom",
            Amenity::Patio => "patio",
            Amenity::Living => "living",
            Amenity::Toilette => "toilette",
        }
    }

    /// Parses an amenity from its data key.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        Amenity::VARIANTS.into_iter().find(|a| a.slug() == slug)
    }
}

impl fmt::Display for Amenity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// The unit tiers the property rents out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuiteType {
    Confort,
    Superior,
    Executive,
}

impl SuiteType {
    /// All suite types, smallest tier first.
    pub const VARIANTS: [SuiteType; 3] =
        [SuiteType::Confort, SuiteType::Superior, SuiteType::Executive];

    /// Returns the slug for this suite type.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            SuiteType::Confort => "confort",
            SuiteType::Superior => "superior",
            SuiteType::Executive => "executive",
        }
    }

    /// Parses a suite type from its slug.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        SuiteType::VARIANTS.into_iter().find(|t| t.slug() == slug)
    }
}

impl fmt::Display for SuiteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// How many people and rooms a suite holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capacity {
    pub guests: u8,
    pub bedrooms: u8,
    pub bathrooms: u8,
    /// Separate guest toilette, where the unit has one.
    #[serde(rename = "toilette", skip_serializing_if = "Capacity::no_toilette")]
    pub toilettes: u8,
}

impl Capacity {
    fn no_toilette(count: &u8) -> bool {
        *count == 0
    }
}

/// One rentable unit, as listed on the rooms page.
///
/// `id` is the stable data key; `slug` is the public URL segment and may
/// differ from it. `price` is a nightly rate in whole pesos; `None` means
/// "ask us", which is how the property currently lists everything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suite {
    pub id: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub suite_type: SuiteType,
    pub price: Option<u32>,
    pub available: bool,
    pub capacity: Capacity,
    #[serde(rename = "bedSize")]
    pub bed_size: String,
    pub amenities: Vec<Amenity>,
    pub featured: bool,
    pub images: Vec<String>,
    /// Short amenity list for cards; must be a subset of `amenities`.
    pub highlights: Vec<Amenity>,
}

/// Formats a nightly price for display.
///
/// `None` and a zero price both render as `"Consultar"`; otherwise the
/// amount is shown in whole pesos with dot-grouped thousands, the way
/// the es-AR locale writes currency.
#[must_use]
pub fn format_price(price: Option<u32>) -> String {
    match price {
        None | Some(0) => String::from("Consultar"),
        Some(amount) => format!("$ {}", group_thousands(amount)),
    }
}

fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}
