// SPDX-License-Identifier: MPL-2.0
//! The built-in photo set shipped with the site.
//!
//! Photos are exported in numbered batches per section, so the catalog is
//! generated rather than written out by hand. Ids follow the asset file
//! stems (`edificio-001-landscape`), which keeps deep links stable across
//! re-exports as long as the counts only grow.

use super::{AspectRatio, Category, MediaItem};

struct Section {
    category: Category,
    aspect_ratio: AspectRatio,
    count: usize,
    /// Directory and file-name stem under `/images/gallery/`.
    stem: &'static str,
    /// Alt-text subject, completed with a per-section view number.
    label: &'static str,
}

/// Export batches in gallery order. Counters restart at 1 per batch.
const SECTIONS: [Section; 5] = [
    Section {
        category: Category::Edificio,
        aspect_ratio: AspectRatio::Landscape,
        count: 4,
        stem: "edificio",
        label: "Edificio Araucarias",
    },
    Section {
        category: Category::Edificio,
        aspect_ratio: AspectRatio::Portrait,
        count: 10,
        stem: "edificio",
        label: "Edificio Araucarias",
    },
    Section {
        category: Category::Habitaciones,
        aspect_ratio: AspectRatio::Landscape,
        count: 8,
        stem: "habitacion",
        label: "Habitación Araucarias",
    },
    Section {
        category: Category::Unidades,
        aspect_ratio: AspectRatio::Landscape,
        count: 11,
        stem: "unidades",
        label: "Unidad Araucarias",
    },
    Section {
        category: Category::Unidades,
        aspect_ratio: AspectRatio::Portrait,
        count: 9,
        stem: "unidades",
        label: "Unidad Araucarias",
    },
];

/// Builds the full built-in photo list in gallery order.
#[must_use]
pub fn builtin_items() -> Vec<MediaItem> {
    let total: usize = SECTIONS.iter().map(|section| section.count).sum();
    let mut items = Vec::with_capacity(total);
    for section in &SECTIONS {
        for i in 1..=section.count {
            let name = format!("{}-{i:03}-{}", section.stem, section.aspect_ratio.slug());
            items.push(MediaItem::new(
                name.clone(),
                format!("/images/gallery/{}/{name}.webp", section.stem),
                format!("{} - Vista {i}", section.label),
                section.category,
                section.aspect_ratio,
            ));
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::GalleryCatalog;

    #[test]
    fn builtin_has_forty_two_photos() {
        assert_eq!(builtin_items().len(), 42);
    }

    #[test]
    fn builtin_ids_are_unique() {
        assert!(GalleryCatalog::new(builtin_items()).is_ok());
    }

    #[test]
    fn builtin_starts_and_ends_where_the_gallery_does() {
        let items = builtin_items();
        assert_eq!(items.first().map(|i| i.id.as_str()), Some("edificio-001-landscape"));
        assert_eq!(items.last().map(|i| i.id.as_str()), Some("unidades-009-portrait"));
    }

    #[test]
    fn builtin_category_counts_match_the_export() {
        let items = builtin_items();
        let count = |category| items.iter().filter(|i| i.category == category).count();
        assert_eq!(count(Category::Edificio), 14);
        assert_eq!(count(Category::Habitaciones), 8);
        assert_eq!(count(Category::Unidades), 20);
    }

    #[test]
    fn builtin_srcs_and_alts_follow_the_asset_layout() {
        let catalog = GalleryCatalog::builtin();
        let item = catalog
            .find_by_id("habitacion-003-landscape")
            .expect("known photo");
        assert_eq!(
            item.src,
            "/images/gallery/habitacion/habitacion-003-landscape.webp"
        );
        assert_eq!(item.alt, "Habitación Araucarias - Vista 3");
        assert_eq!(item.aspect_ratio, AspectRatio::Landscape);
    }

    #[test]
    fn builtin_counters_are_zero_padded() {
        let items = builtin_items();
        assert!(items.iter().any(|i| i.id == "unidades-011-landscape"));
        assert!(items.iter().any(|i| i.id == "edificio-010-portrait"));
        assert!(!items.iter().any(|i| i.id.contains("-0100-")));
    }
}
