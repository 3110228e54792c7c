//! Per-property filters used by listing detail pages: floor plans by unit
//! type, grouped amenities and nearby landmarks.

use realty_property_models::{Configuration, FlatType, Landmark, Property};

/// Category used for amenities authored without one.
pub const GENERAL_AMENITIES: &str = "General";

/// Unit type labels in authored order.
#[must_use]
pub fn flat_type_names(property: &Property) -> Vec<&str> {
    property.flat_types.iter().map(|f| f.kind.as_str()).collect()
}

/// Configurations of the unit type `flat_type` (case-insensitive).
///
/// A blank filter or `"all"` returns every configuration.
#[must_use]
pub fn floor_plans<'a>(
    property: &'a Property,
    flat_type: &str,
) -> Vec<(&'a FlatType, &'a Configuration)> {
    let wanted = flat_type.trim().to_lowercase();
    if wanted.is_empty() || wanted == "all" {
        return property.configurations().collect();
    }

    property
        .configurations()
        .filter(|(flat, _)| flat.kind.to_lowercase() == wanted)
        .collect()
}

/// Amenity names grouped by category, categories in first-seen order.
/// Uncategorized amenities go under [`GENERAL_AMENITIES`].
#[must_use]
pub fn amenities_by_category(property: &Property) -> Vec<(&str, Vec<&str>)> {
    let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();
    for amenity in &property.amenities {
        let category = amenity.category().unwrap_or(GENERAL_AMENITIES);
        match groups.iter_mut().find(|(name, _)| *name == category) {
            Some((_, names)) => names.push(amenity.name()),
            None => groups.push((category, vec![amenity.name()])),
        }
    }
    groups
}

/// Landmarks tagged `kind` (case-insensitive). A blank kind returns all.
#[must_use]
pub fn landmarks_by_type<'a>(property: &'a Property, kind: &str) -> Vec<&'a Landmark> {
    let kind = kind.trim().to_lowercase();
    property
        .location
        .landmarks
        .iter()
        .filter(|landmark| {
            kind.is_empty()
                || landmark
                    .kind
                    .as_deref()
                    .is_some_and(|k| k.to_lowercase() == kind)
        })
        .collect()
}
