//! The four property collections, embedded from TOML at compile time.
//!
//! Each file under `packages/catalog/collections/` holds a top-level
//! `[[properties]]` array. The same files can also be read from a
//! directory at runtime (see [`read_collections`]) so content edits don't
//! need a rebuild.

use std::path::Path;

use realty_property_models::{Collection, Property};
use serde::Deserialize;

use crate::CatalogError;

/// Collection files embedded at compile time, in aggregation order.
const COLLECTION_TOMLS: &[(Collection, &str)] = &[
    (
        Collection::Upcoming,
        include_str!("../collections/upcoming.toml"),
    ),
    (
        Collection::Ongoing,
        include_str!("../collections/ongoing.toml"),
    ),
    (
        Collection::Completed,
        include_str!("../collections/completed.toml"),
    ),
    (
        Collection::Investment,
        include_str!("../collections/investment.toml"),
    ),
];

/// Number of properties across the embedded collections. Enforced by a
/// test.
#[cfg(test)]
pub(crate) const EXPECTED_PROPERTY_COUNT: usize = 12;

#[derive(Debug, Deserialize)]
struct CollectionFile {
    #[serde(default)]
    properties: Vec<Property>,
}

/// File name of a collection inside a data directory.
#[must_use]
pub fn file_name(collection: Collection) -> String {
    format!("{collection}.toml")
}

/// Parses one collection file.
///
/// # Errors
///
/// Returns [`CatalogError::Toml`] if the content is malformed.
pub fn parse_collection(
    collection: Collection,
    toml_str: &str,
) -> Result<Vec<Property>, CatalogError> {
    let file: CollectionFile = toml::de::from_str(toml_str)
        .map_err(|source| CatalogError::Toml { collection, source })?;
    Ok(file.properties)
}

/// Parses every embedded collection.
///
/// # Errors
///
/// Returns [`CatalogError::Toml`] if an embedded file is malformed. This is
/// a development error and is caught by the tests below.
pub fn embedded_collections() -> Result<Vec<(Collection, Vec<Property>)>, CatalogError> {
    COLLECTION_TOMLS
        .iter()
        .map(|(collection, toml_str)| -> Result<_, CatalogError> {
            Ok((*collection, parse_collection(*collection, toml_str)?))
        })
        .collect()
}

/// Reads every collection from `dir`. A missing file is treated as an empty
/// collection.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] if a present file can't be read, or
/// [`CatalogError::Toml`] if it is malformed.
pub fn read_collections(dir: &Path) -> Result<Vec<(Collection, Vec<Property>)>, CatalogError> {
    Collection::ALL
        .iter()
        .map(|collection| -> Result<_, CatalogError> {
            let path = dir.join(file_name(*collection));
            if !path.exists() {
                log::warn!(
                    "No {collection} collection at {}, treating as empty",
                    path.display()
                );
                return Ok((*collection, Vec::new()));
            }

            let content = std::fs::read_to_string(&path)
                .map_err(|source| CatalogError::Io { path, source })?;
            Ok((*collection, parse_collection(*collection, &content)?))
        })
        .collect()
}
