// SPDX-License-Identifier: MPL-2.0
//! `araucarias` is the content core of the Araucarias Apartamentos
//! website: the photo gallery catalog with its circular navigation, the
//! unit listing, asset path resolution, and guest inquiry delivery.
//!
//! Rendering, translation, and theming live with the site; this crate
//! owns the data and the rules the pages follow.

#![doc(html_root_url = "https://docs.rs/araucarias/0.2.0")]

pub mod assets;
pub mod carousel;
pub mod config;
pub mod contact;
pub mod error;
pub mod gallery;
pub mod pages;
pub mod suites;
