// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(CatalogError),
    Contact(ContactError),
}

/// Invariant violations detected while building a catalog.
///
/// Catalogs are constructed once from a fixed definition, so these are
/// errors in the data itself, not runtime conditions to recover from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two entries share the same id.
    DuplicateId(String),

    /// Two suites share the same URL slug.
    DuplicateSlug(String),

    /// A suite highlights an amenity it does not list.
    UnlistedHighlight { suite: String, amenity: String },
}

/// Failures of the contact-form submission path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A required form field is blank.
    MissingField(&'static str),

    /// The email address does not have a plausible `user@host` shape.
    InvalidEmail(String),

    /// The request never produced a well-formed answer (connection,
    /// timeout, or an unreadable response body).
    Network(String),

    /// The endpoint answered but declined the submission; carries the
    /// message to show the guest.
    Rejected(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::DuplicateId(id) => write!(f, "duplicate id: {}", id),
            CatalogError::DuplicateSlug(slug) => write!(f, "duplicate slug: {}", slug),
            CatalogError::UnlistedHighlight { suite, amenity } => {
                write!(f, "suite {} highlights unlisted amenity {}", suite, amenity)
            }
        }
    }
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactError::MissingField(field) => write!(f, "missing required field: {}", field),
            ContactError::InvalidEmail(email) => write!(f, "invalid email address: {}", email),
            ContactError::Network(msg) => write!(f, "network error: {}", msg),
            ContactError::Rejected(msg) => write!(f, "submission rejected: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::Contact(e) => write!(f, "Contact Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl std::error::Error for CatalogError {}

impl std::error::Error for ContactError {}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        Error::Catalog(err)
    }
}

impl From<ContactError> for Error {
    fn from(err: ContactError) -> Self {
        Error::Contact(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
