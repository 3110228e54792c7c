//! Listing queries over a [`Catalog`].
//!
//! Every query is pure and total: nothing here mutates the catalog, and
//! "no match" is an empty `Vec`, never an error. Results keep aggregation
//! order unless a query says otherwise.

use std::str::FromStr as _;

use realty_property_models::{Collection, Property, PropertyStatus};

use crate::Catalog;

/// Sort key used for properties without a completion date, so they sort
/// after every real date.
pub const UNDATED_SENTINEL: &str = "9999-12-31";

fn completion_key(property: &Property) -> &str {
    property.completion_date.as_deref().unwrap_or(UNDATED_SENTINEL)
}

fn same_text(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Lower-cased text a free-text search matches against: name, description,
/// address fields and status.
#[must_use]
pub fn searchable_text(property: &Property) -> String {
    let location = &property.location;
    [
        property.name.as_str(),
        property.description.as_deref().unwrap_or_default(),
        location.address.as_str(),
        location.city.as_str(),
        location.state.as_str(),
        location.zip_code.as_deref().unwrap_or_default(),
        property.status.as_ref(),
        property.status.label(),
    ]
    .join(" ")
    .to_lowercase()
}

impl Catalog {
    /// Properties for a status.
    ///
    /// `status` is first read as a collection key (`upcoming`, `ongoing`,
    /// `completed`, `investment`) and returns that whole collection. Any
    /// other exact status value (e.g. `under-construction`) filters the
    /// aggregate by status. Unknown input returns nothing.
    ///
    /// With `sorted`, results are ordered by completion date string,
    /// undated properties last. The sort is stable.
    #[must_use]
    pub fn properties_by_status(&self, status: &str, sorted: bool) -> Vec<&Property> {
        let key = status.trim().to_lowercase();

        let mut properties: Vec<&Property> = if let Ok(collection) = Collection::from_str(&key) {
            self.collection(collection).iter().collect()
        } else if let Ok(status) = PropertyStatus::from_str(&key) {
            self.iter().filter(|p| p.status == status).collect()
        } else {
            log::debug!("Unknown status filter '{status}'");
            Vec::new()
        };

        if sorted {
            properties.sort_by(|a, b| completion_key(a).cmp(completion_key(b)));
        }

        properties
    }

    /// Free-text search.
    ///
    /// The query is lower-cased and split on whitespace; a property matches
    /// when every token is a substring of its [`searchable_text`]. A blank
    /// query matches everything.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Property> {
        let query = query.to_lowercase();
        let tokens: Vec<&str> = query.split_whitespace().collect();
        if tokens.is_empty() {
            return self.all();
        }

        self.iter()
            .filter(|property| {
                let text = searchable_text(property);
                tokens.iter().all(|token| text.contains(token))
            })
            .collect()
    }

    /// Properties in `city`, compared case-insensitively. A blank city
    /// returns everything.
    #[must_use]
    pub fn properties_by_location(&self, city: &str) -> Vec<&Property> {
        let city = city.trim();
        if city.is_empty() {
            return self.all();
        }

        self.iter()
            .filter(|p| same_text(&p.location.city, city))
            .collect()
    }

    /// Properties whose `type` equals `kind`, compared case-insensitively.
    /// A blank type returns everything.
    #[must_use]
    pub fn properties_by_type(&self, kind: &str) -> Vec<&Property> {
        let kind = kind.trim();
        if kind.is_empty() {
            return self.all();
        }

        self.iter().filter(|p| same_text(&p.kind, kind)).collect()
    }

    /// Properties whose whole price band lies within `[min, max]`.
    ///
    /// Either bound may be omitted. With both omitted everything is
    /// returned; otherwise properties without any price are excluded.
    #[must_use]
    pub fn properties_by_price_range(&self, min: Option<u64>, max: Option<u64>) -> Vec<&Property> {
        if min.is_none() && max.is_none() {
            return self.all();
        }

        self.iter()
            .filter(|property| {
                property.price_bounds().is_some_and(|(low, high)| {
                    min.is_none_or(|min| low >= min) && max.is_none_or(|max| high <= max)
                })
            })
            .collect()
    }

    /// Up to `limit` properties sharing a city or type with property `id`,
    /// never including `id` itself. Aggregation order, not ranked. An
    /// unknown id returns nothing.
    #[must_use]
    pub fn related_properties(&self, id: &str, limit: usize) -> Vec<&Property> {
        let Some(target) = self.by_id(id) else {
            return Vec::new();
        };

        self.iter()
            .filter(|p| p.id != target.id)
            .filter(|p| {
                same_text(&p.location.city, &target.location.city) || same_text(&p.kind, &target.kind)
            })
            .take(limit)
            .collect()
    }

    /// The first `limit` properties in aggregation order.
    #[must_use]
    pub fn featured_properties(&self, limit: usize) -> Vec<&Property> {
        self.iter().take(limit).collect()
    }

    /// Distinct cities in first-seen order, for filter menus.
    #[must_use]
    pub fn cities(&self) -> Vec<&str> {
        distinct(self.iter().map(|p| p.location.city.as_str()))
    }

    /// Distinct property types in first-seen order, for filter menus.
    #[must_use]
    pub fn types(&self) -> Vec<&str> {
        distinct(self.iter().map(|p| p.kind.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen: Vec<&str> = Vec::new();
    for value in values {
        if !seen.iter().any(|s| same_text(s, value)) {
            seen.push(value);
        }
    }
    seen
}
