// SPDX-License-Identifier: MPL-2.0
use araucarias::assets::AssetResolver;
use araucarias::carousel::SlideCursor;
use araucarias::config::{self, AssetsConfig, BookingConfig, ContactConfig, SiteConfig};
use araucarias::contact::{ContactClient, SubmissionState, GENERIC_REJECTION};
use araucarias::error::ContactError;
use araucarias::gallery::{Category, CategoryFilter, GalleryCatalog};
use araucarias::pages::Page;
use araucarias::suites::SuiteCatalog;
use std::collections::HashSet;
use tempfile::tempdir;

#[test]
fn test_lightbox_walks_the_whole_catalog_and_wraps() {
    let catalog = GalleryCatalog::builtin();

    // 1. Walk forward one full lap from the first photo
    let start = catalog.first().expect("builtin catalog is not empty");
    let mut seen = HashSet::new();
    let mut id = start.id.clone();
    for _ in 0..catalog.len() {
        assert!(seen.insert(id.clone()), "photo {id} visited twice in one lap");
        id = catalog.next(&id).expect("non-empty catalog").id.clone();
    }

    // 2. Every photo was visited and the walk is back where it began
    assert_eq!(seen.len(), catalog.len());
    assert_eq!(id, start.id);

    // 3. The same holds walking backward
    let mut id = start.id.clone();
    for _ in 0..catalog.len() {
        id = catalog.previous(&id).expect("non-empty catalog").id.clone();
    }
    assert_eq!(id, start.id);
}

#[test]
fn test_every_photo_is_reachable_by_id_and_counted_in_order() {
    let catalog = GalleryCatalog::builtin();
    for (index, item) in catalog.items().iter().enumerate() {
        assert_eq!(catalog.find_by_id(&item.id), Some(item));
        assert_eq!(catalog.position_of(&item.id), index + 1);
    }

    let first = catalog.first().expect("non-empty catalog");
    let last = catalog.last().expect("non-empty catalog");
    assert_eq!(catalog.position_of(&first.id), 1);
    assert_eq!(catalog.position_of(&last.id), catalog.len());
}

#[test]
fn test_next_and_previous_are_inverse_on_every_photo() {
    let catalog = GalleryCatalog::builtin();
    for item in catalog.items() {
        let there = catalog.next(&item.id).expect("non-empty catalog");
        let back = catalog.previous(&there.id).expect("non-empty catalog");
        assert_eq!(back.id, item.id, "previous(next({})) drifted", item.id);
    }
}

#[test]
fn test_category_filters_partition_the_catalog() {
    let catalog = GalleryCatalog::builtin();

    let mut total = 0;
    let mut seen = HashSet::new();
    for category in Category::VARIANTS {
        let filtered = catalog.filter(CategoryFilter::Only(category));
        assert!(!filtered.is_empty(), "{category} has no photos");
        for item in &filtered {
            assert_eq!(item.category, category);
            assert!(seen.insert(item.id.clone()), "{} in two categories", item.id);
        }
        total += filtered.len();
    }

    assert_eq!(total, catalog.len());
    assert_eq!(catalog.filter(CategoryFilter::All).len(), catalog.len());
}

#[test]
fn test_gallery_page_flow_filter_open_and_page_through() {
    let catalog = GalleryCatalog::builtin();

    // 1. Guest selects the "unidades" tab
    let units = catalog.filter_by_slug("unidades");
    assert_eq!(units.len(), 20);

    // 2. Opens the third photo of the filtered grid in the lightbox
    let opened = units[2];
    assert_eq!(opened.category, Category::Unidades);

    // 3. The lightbox counter is 1-based over the full catalog
    let position = catalog.position_of(&opened.id);
    assert!(position >= 1 && position <= catalog.len());
    assert_eq!(catalog.position_of("not-a-photo"), 0);

    // 4. Arrow keys move through the full catalog from there
    let next = catalog.next(&opened.id).expect("non-empty catalog");
    assert_eq!(catalog.position_of(&next.id), position + 1);
}

#[test]
fn test_bad_gallery_input_degrades_without_panicking() {
    let catalog = GalleryCatalog::builtin();

    // Unknown filter slugs give an empty grid, not an error
    assert!(catalog.filter_by_slug("cocheras").is_empty());

    // Unknown ids snap to the catalog ends
    let first = catalog.first().expect("non-empty").id.clone();
    let last = catalog.last().expect("non-empty").id.clone();
    assert_eq!(catalog.next("deleted-photo").expect("non-empty").id, first);
    assert_eq!(catalog.previous("deleted-photo").expect("non-empty").id, last);

    // An empty catalog answers None everywhere instead of panicking
    let empty = GalleryCatalog::new(Vec::new()).expect("empty catalog is valid");
    assert_eq!(empty.next("anything"), None);
    assert_eq!(empty.previous("anything"), None);
    assert_eq!(empty.position_of("anything"), 0);
}

#[test]
fn test_rooms_page_lists_bookable_units_only() {
    let catalog = SuiteCatalog::builtin();

    // The listing shows available units; executive is announced only
    let listed = catalog.of_type_slug("all");
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|s| s.available));

    // The home page promotes the same two for now
    assert_eq!(catalog.featured(), listed);

    // The detail page still reaches the announced unit by slug
    let executive = catalog.by_slug("executive-suite").expect("announced unit");
    assert!(!executive.available);
    assert_eq!(executive.capacity.bedrooms, 2);
}

#[test]
fn test_suite_carousel_wraps_over_the_unit_photos() {
    let catalog = SuiteCatalog::builtin();
    let confort = catalog.by_id("confort").expect("listed unit");

    let mut cursor = SlideCursor::new(confort.images.len());
    assert_eq!(cursor.position(), 1);

    // One full lap forward lands back on the first photo
    for _ in 0..confort.images.len() {
        cursor.advance();
    }
    assert_eq!(cursor.index(), 0);

    // Stepping back from the first shows the last photo
    cursor.rewind();
    assert_eq!(cursor.index(), confort.images.len() - 1);
    assert_eq!(&confort.images[cursor.index()], "images/suites/confort/confort-004.webp");
}

#[test]
fn test_sub_path_deployment_resolves_all_catalog_assets() {
    let resolver = AssetResolver::new("/araucarias/");

    let gallery = GalleryCatalog::builtin();
    for item in gallery.items() {
        let resolved = resolver.resolve(&item.src);
        assert!(
            resolved.starts_with("/araucarias/images/gallery/"),
            "unexpected resolution: {resolved}"
        );
        assert!(!resolved.contains("//"), "doubled separator in {resolved}");
    }

    let suites = SuiteCatalog::builtin();
    for suite in suites.suites() {
        for image in &suite.images {
            let resolved = resolver.resolve(image);
            assert!(resolved.starts_with("/araucarias/images/suites/"));
        }
    }
}

#[test]
fn test_config_round_trip_drives_assets_and_contact() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("site.toml");

    // 1. Save a staging configuration
    let staging = SiteConfig {
        assets: AssetsConfig {
            base_url: "/staging/".to_string(),
        },
        contact: ContactConfig {
            endpoint: "https://staging.example.com/api/contact.php".to_string(),
            timeout_secs: 15,
        },
        booking: BookingConfig::default(),
    };
    config::save_to_path(&staging, &config_path).expect("Failed to write config file");

    // 2. Load it back and wire the collaborators from it
    let loaded = config::load_from_path(&config_path).expect("Failed to load config from path");
    assert_eq!(loaded, staging);

    let resolver = AssetResolver::new(loaded.assets.base_url.clone());
    assert_eq!(
        resolver.resolve("images/logo.webp"),
        "/staging/images/logo.webp"
    );

    let client = ContactClient::new(&loaded.contact).expect("absolute endpoint builds a client");
    assert_eq!(client.endpoint(), "https://staging.example.com/api/contact.php");

    // 3. The stock config keeps the browser-relative endpoint, which a
    //    standalone client cannot use
    assert!(ContactClient::new(&SiteConfig::default().contact).is_err());

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_submission_state_mirrors_the_form_lifecycle() {
    let mut state = SubmissionState::default();
    assert_eq!(state, SubmissionState::Idle);

    state.begin();
    assert!(state.is_sending());

    // A declined submission shows the endpoint's own words
    state.settle(&Err(ContactError::Rejected("Mensaje demasiado corto".into())));
    assert_eq!(state.rejection_message(), Some("Mensaje demasiado corto"));

    // A transport failure shows the generic text instead
    state.begin();
    state.settle(&Err(ContactError::Network("dns error".into())));
    assert_eq!(state.rejection_message(), Some(GENERIC_REJECTION));

    state.reset();
    assert_eq!(state, SubmissionState::Idle);
}

#[test]
fn test_every_nav_route_resolves_to_its_page() {
    for page in Page::NAV {
        assert_eq!(Page::from_route(page.route()), Some(page));
    }
    assert_eq!(Page::from_route("/reservas"), Some(Page::Reservations));
    assert!(!Page::Reservations.is_in_nav());
    assert_eq!(Page::from_route("/no-such-page"), None);
}
