// SPDX-License-Identifier: MPL-2.0
//! The site's page table: routes and navigation membership.
//!
//! Labels are left to the presentation layer; this module only knows
//! which pages exist, what their routes are, and which of them belong
//! in the header navigation (the booking page is reached through its
//! call-to-action button instead).

use std::fmt;

/// The pages the site serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Rooms,
    Gallery,
    Location,
    Reservations,
}

impl Page {
    /// Every page, in declaration order.
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Rooms,
        Page::Gallery,
        Page::Location,
        Page::Reservations,
    ];

    /// The header navigation, in display order.
    pub const NAV: [Page; 4] = [Page::Home, Page::Rooms, Page::Gallery, Page::Location];

    /// Returns the route path for this page.
    #[must_use]
    pub fn route(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Rooms => "/habitaciones",
            Page::Gallery => "/galeria",
            Page::Location => "/ubicacion",
            Page::Reservations => "/reservas",
        }
    }

    /// Resolves a route path to its page. Matching is exact; unknown
    /// paths yield `None` and the caller decides how to 404.
    #[must_use]
    pub fn from_route(route: &str) -> Option<Self> {
        Page::ALL.into_iter().find(|page| page.route() == route)
    }

    /// Checks if this page appears in the header navigation.
    #[must_use]
    pub fn is_in_nav(self) -> bool {
        Page::NAV.contains(&self)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_round_trip_through_from_route() {
        for page in Page::ALL {
            assert_eq!(Page::from_route(page.route()), Some(page));
        }
    }

    #[test]
    fn unknown_and_inexact_routes_are_none() {
        assert_eq!(Page::from_route("/spa"), None);
        assert_eq!(Page::from_route("/galeria/"), None); // exact matching
        assert_eq!(Page::from_route(""), None);
    }

    #[test]
    fn reservations_is_reachable_but_not_in_nav() {
        assert!(!Page::Reservations.is_in_nav());
        assert!(Page::ALL.contains(&Page::Reservations));
        for page in Page::NAV {
            assert!(page.is_in_nav());
        }
    }

    #[test]
    fn nav_order_matches_the_header() {
        let routes: Vec<&str> = Page::NAV.iter().map(|p| p.route()).collect();
        assert_eq!(routes, ["/", "/habitaciones", "/galeria", "/ubicacion"]);
    }
}
