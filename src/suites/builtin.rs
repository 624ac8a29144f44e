// SPDX-License-Identifier: MPL-2.0
//! The unit listing shipped with the site, from the owner's fact sheet.

use super::{Amenity, Capacity, Suite, SuiteType};

fn suite_images(stem: &str, count: usize) -> Vec<String> {
    (1..=count)
        .map(|i| format!("images/suites/{stem}/{stem}-{i:03}.webp"))
        .collect()
}

/// Builds the full built-in unit listing, smallest tier first.
///
/// Prices are deliberately absent; the property quotes on request, so
/// every card renders "Consultar" until rates are published.
#[must_use]
pub fn builtin_suites() -> Vec<Suite> {
    vec![
        Suite {
            id: "confort".into(),
            slug: "confort".into(),
            suite_type: SuiteType::Confort,
            price: None,
            available: true,
            capacity: Capacity {
                guests: 2,
                bedrooms: 0,
                bathrooms: 1,
                toilettes: 0,
            },
            bed_size: "1 cama de 2.00 x 2.00 m".into(),
            amenities: vec![
                Amenity::Kitchen,
                Amenity::Wifi,
                Amenity::Ac,
                Amenity::Tv,
                Amenity::Linens,
                Amenity::Intercom,
                Amenity::Patio,
            ],
            featured: true,
            images: suite_images("confort", 4),
            highlights: vec![Amenity::Kitchen, Amenity::Ac, Amenity::Patio],
        },
        Suite {
            id: "superior".into(),
            slug: "superior".into(),
            suite_type: SuiteType::Superior,
            price: None,
            available: true,
            capacity: Capacity {
                guests: 3,
                bedrooms: 1,
                bathrooms: 1,
                toilettes: 0,
            },
            bed_size: "1 cama de 2.00 x 2.00 m".into(),
            amenities: vec![
                Amenity::Kitchen,
                Amenity::Wifi,
                Amenity::Ac,
                Amenity::Tv,
                Amenity::Linens,
                Amenity::Closet,
                Amenity::Intercom,
                Amenity::Patio,
            ],
            featured: true,
            images: suite_images("superior", 3),
            highlights: vec![Amenity::Kitchen, Amenity::Closet, Amenity::Patio],
        },
        // Announced but not bookable yet; detail page only.
        Suite {
            id: "executive".into(),
            slug: "executive-suite".into(),
            suite_type: SuiteType::Executive,
            price: None,
            available: false,
            capacity: Capacity {
                guests: 4,
                bedrooms: 2,
                bathrooms: 1,
                toilettes: 1,
            },
            bed_size: "1 cama de 2.00 x 2.00 m + 1 cama de 1.20 x 1.90 m".into(),
            amenities: Amenity::VARIANTS.to_vec(),
            featured: true,
            images: suite_images("executive", 6),
            highlights: vec![Amenity::Living, Amenity::Kitchen, Amenity::Patio],
        },
    ]
}
