// SPDX-License-Identifier: MPL-2.0
//! The gallery catalog: ordered item storage with lookup, filtering,
//! and wraparound navigation.
//!
//! Navigation is keyed by item id rather than by a stored cursor, so the
//! catalog stays immutable and any number of views can walk it at once.
//! An id that is not in the catalog is treated as "no selection" and
//! snaps to a deterministic end instead of failing.

use super::{CategoryFilter, MediaItem};
use crate::error::CatalogError;
use std::collections::HashSet;

/// An ordered, immutable collection of gallery photos.
///
/// Order is fixed at construction and is the order items appear in the
/// gallery grid and the order next/previous walks them.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryCatalog {
    items: Vec<MediaItem>,
}

impl GalleryCatalog {
    /// Creates a catalog from a list of items, keeping their order.
    ///
    /// Returns [`CatalogError::DuplicateId`] if two items share an id;
    /// ids are the navigation keys and must be unique.
    pub fn new(items: Vec<MediaItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    /// Returns the catalog of photos shipped with the site.
    #[must_use]
    pub fn builtin() -> Self {
        // Generated ids carry a per-section counter, so they cannot collide.
        Self {
            items: super::builtin::builtin_items(),
        }
    }

    /// Returns all items in catalog order.
    #[must_use]
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    /// Returns the total number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the catalog has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the first item, if any.
    #[must_use]
    pub fn first(&self) -> Option<&MediaItem> {
        self.items.first()
    }

    /// Returns the last item, if any.
    #[must_use]
    pub fn last(&self) -> Option<&MediaItem> {
        self.items.last()
    }

    /// Looks up an item by its id.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&MediaItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Returns the items passing the filter, in catalog order.
    #[must_use]
    pub fn filter(&self, filter: CategoryFilter) -> Vec<&MediaItem> {
        self.items.iter().filter(|item| filter.matches(item)).collect()
    }

    /// Returns the items matching a category slug, in catalog order.
    ///
    /// `"all"` and the empty string select everything. An unrecognized
    /// slug selects nothing; bad filter input degrades to an empty view
    /// rather than an error, as the gallery page always did.
    #[must_use]
    pub fn filter_by_slug(&self, slug: &str) -> Vec<&MediaItem> {
        match CategoryFilter::from_slug(slug) {
            Some(filter) => self.filter(filter),
            None => Vec::new(),
        }
    }

    /// Returns the item after the one with the given id, wrapping around
    /// to the first item when at the last.
    ///
    /// An unknown id also snaps to the first item. Returns `None` only
    /// when the catalog is empty.
    #[must_use]
    pub fn next(&self, current_id: &str) -> Option<&MediaItem> {
        match self.index_of(current_id) {
            Some(index) if index + 1 < self.items.len() => self.items.get(index + 1),
            _ => self.items.first(),
        }
    }

    /// Returns the item before the one with the given id, wrapping around
    /// to the last item when at the first.
    ///
    /// An unknown id also snaps to the last item. Returns `None` only
    /// when the catalog is empty.
    #[must_use]
    pub fn previous(&self, current_id: &str) -> Option<&MediaItem> {
        match self.index_of(current_id) {
            Some(index) if index > 0 => self.items.get(index - 1),
            _ => self.items.last(),
        }
    }

    /// Returns the 1-based position of an item for "N of M" counters,
    /// or `0` if the id is not in the catalog.
    #[must_use]
    pub fn position_of(&self, id: &str) -> usize {
        self.index_of(id).map_or(0, |index| index + 1)
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}
