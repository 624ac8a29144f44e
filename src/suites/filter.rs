// SPDX-License-Identifier: MPL-2.0
//! Suite type filter for the rooms page.

use super::SuiteType;
use std::fmt;

/// Filter state for the unit listing: every tier or a single one.
///
/// Note that unlike the gallery filter this never widens past
/// availability; the listing only ever shows bookable units, whichever
/// tier is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    /// Show every available suite.
    #[default]
    All,
    /// Show only available suites of one tier.
    Only(SuiteType),
}

impl TypeFilter {
    /// Checks whether a suite of the given type passes the filter.
    #[must_use]
    pub fn matches(&self, suite_type: SuiteType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(only) => suite_type == *only,
        }
    }

    /// Parses a filter from a slug; empty and `"all"` select everything.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        if slug.is_empty() || slug == "all" {
            return Some(TypeFilter::All);
        }
        SuiteType::from_slug(slug).map(TypeFilter::Only)
    }

    /// Returns the slug of this filter.
    #[must_use]
    pub fn slug(&self) -> &'static str {
        match self {
            TypeFilter::All => "all",
            TypeFilter::Only(suite_type) => suite_type.slug(),
        }
    }
}

impl From<SuiteType> for TypeFilter {
    fn from(suite_type: SuiteType) -> Self {
        TypeFilter::Only(suite_type)
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_every_tier() {
        for suite_type in SuiteType::VARIANTS {
            assert!(TypeFilter::All.matches(suite_type));
        }
    }

    #[test]
    fn only_matches_its_own_tier() {
        let filter = TypeFilter::Only(SuiteType::Superior);
        assert!(filter.matches(SuiteType::Superior));
        assert!(!filter.matches(SuiteType::Confort));
        assert!(!filter.matches(SuiteType::Executive));
    }

    #[test]
    fn from_slug_accepts_all_empty_and_tiers() {
        assert_eq!(TypeFilter::from_slug(""), Some(TypeFilter::All));
        assert_eq!(TypeFilter::from_slug("all"), Some(TypeFilter::All));
        assert_eq!(
            TypeFilter::from_slug("executive"),
            Some(TypeFilter::Only(SuiteType::Executive))
        );
        assert_eq!(TypeFilter::from_slug("loft"), None);
    }

    #[test]
    fn default_is_all() {
        assert_eq!(TypeFilter::default(), TypeFilter::All);
    }
}
