// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the site configuration.
//!
//! This module is the single source of truth for deployment defaults.
//! Constants are organized by configuration section.

// ==========================================================================
// Asset Defaults
// ==========================================================================

/// Default deployment base URL (the site served from the domain root).
pub const ASSET_BASE_URL: &str = "/";

// ==========================================================================
// Contact Defaults
// ==========================================================================

/// Default endpoint the contact form posts to, relative to the site.
pub const CONTACT_ENDPOINT: &str = "/api/contact.php";

/// Default timeout for a contact submission round trip (in seconds).
pub const CONTACT_TIMEOUT_SECS: u64 = 10;

// ==========================================================================
// Booking Defaults
// ==========================================================================

/// DOM id of the container the booking widget mounts into.
pub const BOOKING_CONTAINER_ID: &str = "wubook-reservations-iframe";

/// Booking engine URL for the property, including its property code.
pub const BOOKING_WIDGET_URL: &str =
    "https://wubook.net/nneb/bk?f=today&n=1&ep=75436910&o=1.0.0.0";
