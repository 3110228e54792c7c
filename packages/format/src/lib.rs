#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Display formatting for property listings.
//!
//! Everything here turns listing data into strings for the page: prices in
//! Lakh/Crore, areas, status labels and badge classes, slugs, phone
//! numbers and image paths. Missing data never errors; it degrades to a
//! placeholder ("Price on Request", "N/A", a fallback image).

pub mod image;
pub mod price;
pub mod status;
pub mod text;

pub use image::{ImageResolver, ImageSource, property_image_url};
pub use price::{format_indian_number, format_price, format_price_range, format_property_price};
pub use status::{readable_status, status_badge_class};
pub use text::{format_area, format_phone, slugify, title_case};
