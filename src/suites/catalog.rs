// SPDX-License-Identifier: MPL-2.0
//! The suite catalog: validated unit storage and availability queries.

use super::{Suite, TypeFilter};
use crate::error::CatalogError;
use std::collections::HashSet;

/// The validated list of units, in listing order.
///
/// Every query that feeds a public page filters on `available`; the only
/// way to reach an unavailable suite is direct lookup by id or slug,
/// which the detail page needs for units announced but not yet bookable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteCatalog {
    suites: Vec<Suite>,
}

impl SuiteCatalog {
    /// Creates a catalog from a list of suites, keeping their order.
    ///
    /// Rejects duplicate ids, duplicate slugs, and highlights naming an
    /// amenity the suite does not list.
    pub fn new(suites: Vec<Suite>) -> Result<Self, CatalogError> {
        let mut ids = HashSet::with_capacity(suites.len());
        let mut slugs = HashSet::with_capacity(suites.len());
        for suite in &suites {
            if !ids.insert(suite.id.as_str()) {
                return Err(CatalogError::DuplicateId(suite.id.clone()));
            }
            if !slugs.insert(suite.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(suite.slug.clone()));
            }
            for highlight in &suite.highlights {
                if !suite.amenities.contains(highlight) {
                    return Err(CatalogError::UnlistedHighlight {
                        suite: suite.id.clone(),
                        amenity: highlight.slug().to_string(),
                    });
                }
            }
        }
        Ok(Self { suites })
    }

    /// Returns the unit listing shipped with the site.
    #[must_use]
    pub fn builtin() -> Self {
        // The built-in listing is checked against the same rules in tests.
        Self {
            suites: super::builtin::builtin_suites(),
        }
    }

    /// Returns all suites in listing order, available or not.
    #[must_use]
    pub fn suites(&self) -> &[Suite] {
        &self.suites
    }

    /// Returns the total number of suites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.suites.len()
    }

    /// Checks if the catalog has no suites.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }

    /// Returns the suites currently open for booking.
    #[must_use]
    pub fn available(&self) -> Vec<&Suite> {
        self.suites.iter().filter(|s| s.available).collect()
    }

    /// Returns the suites promoted on the home page.
    ///
    /// A suite must be both featured and available to appear; a featured
    /// unit that is not bookable yet stays off the home page.
    #[must_use]
    pub fn featured(&self) -> Vec<&Suite> {
        self.suites
            .iter()
            .filter(|s| s.featured && s.available)
            .collect()
    }

    /// Returns the available suites passing the type filter.
    #[must_use]
    pub fn of_type(&self, filter: TypeFilter) -> Vec<&Suite> {
        self.suites
            .iter()
            .filter(|s| s.available && filter.matches(s.suite_type))
            .collect()
    }

    /// Returns the available suites matching a type slug.
    ///
    /// `"all"` and the empty string select every available suite; an
    /// unrecognized slug selects nothing.
    #[must_use]
    pub fn of_type_slug(&self, slug: &str) -> Vec<&Suite> {
        match TypeFilter::from_slug(slug) {
            Some(filter) => self.of_type(filter),
            None => Vec::new(),
        }
    }

    /// Looks up a suite by its data id.
    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<&Suite> {
        self.suites.iter().find(|s| s.id == id)
    }

    /// Looks up a suite by its URL slug.
    #[must_use]
    pub fn by_slug(&self, slug: &str) -> Option<&Suite> {
        self.suites.iter().find(|s| s.slug == slug)
    }

    /// Returns the lowest and highest nightly price across available,
    /// priced suites, or `None` while everything is "ask us".
    #[must_use]
    pub fn price_range(&self) -> Option<(u32, u32)> {
        let mut range: Option<(u32, u32)> = None;
        for suite in &self.suites {
            if !suite.available {
                continue;
            }
            let Some(price) = suite.price.filter(|p| *p > 0) else {
                continue;
            };
            range = Some(match range {
                Some((min, max)) => (min.min(price), max.max(price)),
                None => (price, price),
            });
        }
        range
    }
}
