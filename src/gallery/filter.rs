// SPDX-License-Identifier: MPL-2.0
//! Category filter applied to gallery views.

use super::{Category, MediaItem};
use std::fmt;

/// Filter state for the gallery: either everything or one category.
///
/// `All` is the pseudo-category of the filter bar. It exists only here;
/// no [`MediaItem`] is ever tagged with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show every item regardless of category.
    #[default]
    All,
    /// Show only items of one concrete category.
    Only(Category),
}

impl CategoryFilter {
    /// Checks whether the given item passes the filter.
    #[must_use]
    pub fn matches(&self, item: &MediaItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.category == *category,
        }
    }

    /// Returns `true` when the filter narrows the view at all.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, CategoryFilter::All)
    }

    /// Parses a filter from a slug as the filter bar sends it.
    ///
    /// The empty string and `"all"` both select [`CategoryFilter::All`].
    /// Any other unrecognized slug yields `None`; the caller decides
    /// whether that means "empty view" or "reject input".
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        if slug.is_empty() || slug == "all" {
            return Some(CategoryFilter::All);
        }
        Category::from_slug(slug).map(CategoryFilter::Only)
    }

    /// Returns the slug of this filter.
    #[must_use]
    pub fn slug(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.slug(),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
