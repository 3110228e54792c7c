#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Property listing types shared across the realty catalog.
//!
//! Every listing on the site is a [`Property`]. Listings are authored as
//! TOML records grouped into four [`Collection`]s and never change at
//! runtime, so all types here are plain immutable values.
//!
//! Several fields come in more than one shape in the source data (images,
//! amenities, specifications). Each of those is modelled as an enum so
//! consumers match on the shape instead of probing for fields.

pub mod details;
pub mod media;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

pub use details::{
    Amenity, Configuration, ConstructionProgress, ConstructionStage, FlatType, SpecValue,
    Specifications,
};
pub use media::{ImageSet, PropertyImage, PropertyImages};

/// Construction/sales status of a property.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PropertyStatus {
    /// Announced, not yet launched for construction
    Upcoming,
    /// Construction in progress
    UnderConstruction,
    /// Construction nearly done, possession imminent
    NearingPossession,
    /// Occupancy certificate received, units available
    ReadyToMoveIn,
    /// Fully delivered project
    Completed,
}

impl PropertyStatus {
    /// Human-readable label shown on listing cards.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::UnderConstruction => "Under Construction",
            Self::NearingPossession => "Nearing Possession",
            Self::ReadyToMoveIn => "Ready to Move In",
            Self::Completed => "Completed",
        }
    }

    /// CSS class used for the status badge.
    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Upcoming => "badge-upcoming",
            Self::UnderConstruction => "badge-construction",
            Self::NearingPossession => "badge-possession",
            Self::ReadyToMoveIn => "badge-ready",
            Self::Completed => "badge-completed",
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Upcoming,
            Self::UnderConstruction,
            Self::NearingPossession,
            Self::ReadyToMoveIn,
            Self::Completed,
        ]
    }
}

/// One of the four source collections a property is authored in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Collection {
    /// Projects not yet under construction
    Upcoming,
    /// Projects currently being built
    Ongoing,
    /// Delivered projects
    Completed,
    /// Units offered as investment opportunities
    Investment,
}

impl Collection {
    /// All collections in aggregation order.
    pub const ALL: [Self; 4] = [
        Self::Upcoming,
        Self::Ongoing,
        Self::Completed,
        Self::Investment,
    ];

    /// Whether a property with `status` may be filed under this collection.
    #[must_use]
    pub const fn admits(self, status: PropertyStatus) -> bool {
        match self {
            Self::Upcoming => matches!(status, PropertyStatus::Upcoming),
            Self::Ongoing => matches!(
                status,
                PropertyStatus::UnderConstruction | PropertyStatus::NearingPossession
            ),
            Self::Completed => matches!(
                status,
                PropertyStatus::Completed | PropertyStatus::ReadyToMoveIn
            ),
            Self::Investment => true,
        }
    }

    /// Position of this collection in [`Collection::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

/// A point of interest near a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Landmark {
    /// Landmark name (e.g. "Thane Railway Station").
    pub name: String,
    /// Free-text distance as authored ("1.2 km", "5 mins walk").
    pub distance: String,
    /// Category tag (e.g. "transport", "school", "hospital").
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Optional longer description.
    #[serde(default)]
    pub details: Option<String>,
}

/// Postal location of a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Street address.
    pub address: String,
    /// City name.
    pub city: String,
    /// State name.
    pub state: String,
    /// PIN code.
    #[serde(default)]
    pub zip_code: Option<String>,
    /// Map coordinates.
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
    /// Nearby points of interest.
    #[serde(default)]
    pub landmarks: Vec<Landmark>,
}

/// Price band in rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Lowest unit price.
    pub min: u64,
    /// Highest unit price, absent for open-ended ranges.
    #[serde(default)]
    pub max: Option<u64>,
}

/// A property listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Unique identifier.
    pub id: String,
    /// Unique URL-safe identifier.
    pub slug: String,
    /// Project name.
    pub name: String,
    /// Construction/sales status.
    pub status: PropertyStatus,
    /// Free-text category ("Residential", "Commercial", "investment").
    #[serde(rename = "type")]
    pub kind: String,
    /// Investment listings only: asset class (e.g. "Office Space").
    #[serde(default)]
    pub property_type: Option<String>,
    /// Investment listings only: finer asset class (e.g. "Pre-leased").
    #[serde(default)]
    pub sub_type: Option<String>,
    /// Marketing description.
    #[serde(default)]
    pub description: Option<String>,
    /// Where the property is.
    pub location: Location,
    /// Property photos in either supported shape.
    #[serde(default)]
    pub images: PropertyImages,
    /// Unit types and their configurations.
    #[serde(default)]
    pub flat_types: Vec<FlatType>,
    /// Price band across all units.
    #[serde(default)]
    pub price_range: Option<PriceRange>,
    /// Advertised starting price.
    #[serde(default)]
    pub starting_price: Option<u64>,
    /// Project amenities.
    #[serde(default)]
    pub amenities: Vec<Amenity>,
    /// Construction specifications grouped by category.
    #[serde(default)]
    pub specifications: Specifications,
    /// Free-form key/value project facts ("Total Towers" = "3").
    #[serde(default)]
    pub project_overview: std::collections::BTreeMap<String, String>,
    /// Build progress, for projects under construction.
    #[serde(default)]
    pub construction_progress: Option<ConstructionProgress>,
    /// Expected or actual completion date (`YYYY-MM` or `YYYY-MM-DD`).
    #[serde(default)]
    pub completion_date: Option<String>,
    /// Short selling points.
    #[serde(default)]
    pub highlights: Vec<String>,
    /// RERA registration number.
    #[serde(default)]
    pub rera_number: Option<String>,
    /// Path to the RERA certificate document.
    #[serde(default)]
    pub rera_certificate: Option<String>,
    /// Path to the RERA QR code image.
    #[serde(default)]
    pub rera_qr_code: Option<String>,
}

impl Property {
    /// Iterates every `(flat type, configuration)` pair in source order.
    pub fn configurations(&self) -> impl Iterator<Item = (&FlatType, &Configuration)> {
        self.flat_types
            .iter()
            .flat_map(|flat| flat.configurations.iter().map(move |c| (flat, c)))
    }

    /// Returns the `(low, high)` price of this property.
    ///
    /// Uses `price_range` when present, then `starting_price`, then the
    /// cheapest and dearest configuration prices. `None` when the property
    /// has no price information at all.
    #[must_use]
    pub fn price_bounds(&self) -> Option<(u64, u64)> {
        if let Some(range) = self.price_range {
            return Some((range.min, range.max.unwrap_or(range.min).max(range.min)));
        }
        if let Some(price) = self.starting_price {
            return Some((price, price));
        }

        let mut prices = self.configurations().filter_map(|(_, c)| c.price);
        let first = prices.next()?;
        Some(prices.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }
}
