#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Static property collections, aggregation index and listing queries.
//!
//! Listings are authored as four TOML collections (upcoming, ongoing,
//! completed, investment) that are embedded into the binary. A [`Catalog`]
//! is built from them once at startup, validated, and then handed to
//! whatever needs to query listings. It is immutable after construction,
//! so a shared reference is all callers ever need.

pub mod collections;
pub mod detail;
pub mod index;
pub mod options;
pub mod queries;

use std::path::PathBuf;

use realty_property_models::{Collection, PropertyStatus};

pub use index::Catalog;
pub use options::{CatalogOptions, DuplicatePolicy};

/// Errors that can occur while loading the catalog.
///
/// Queries never fail; only building a [`Catalog`] can.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A collection file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A collection file is not valid TOML or does not match the schema.
    #[error("Failed to parse {collection} collection: {source}")]
    Toml {
        /// Collection whose file failed to parse.
        collection: Collection,
        /// Underlying parse error.
        source: toml::de::Error,
    },

    /// Two properties share an id.
    #[error("Duplicate property id '{id}' in {collection} collection")]
    DuplicateId {
        /// The repeated id.
        id: String,
        /// Collection holding the second occurrence.
        collection: Collection,
    },

    /// Two properties share a slug.
    #[error("Duplicate property slug '{slug}' in {collection} collection")]
    DuplicateSlug {
        /// The repeated slug.
        slug: String,
        /// Collection holding the second occurrence.
        collection: Collection,
    },

    /// A property's status does not belong in the collection it was
    /// authored in.
    #[error("Property '{id}' has status {status} but is filed under {collection}")]
    MisfiledStatus {
        /// Offending property id.
        id: String,
        /// Its authored status.
        status: PropertyStatus,
        /// Collection it was found in.
        collection: Collection,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_the_file() {
        let err = CatalogError::Io {
            path: PathBuf::from("/data/ongoing.toml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Failed to read /data/ongoing.toml: denied");
    }
}
