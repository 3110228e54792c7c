//! Image path resolution for listing cards and detail pages.
//!
//! A requested image type is resolved through a fixed chain:
//!
//! 1. a gallery image tagged with the type, or whose alt text mentions it
//! 2. the first gallery image
//! 3. the matching slot of an `{ thumbnail, featured, gallery }` set
//! 4. a conventional path built from the property's status and id
//! 5. the fallback image
//!
//! Steps 1-2 only apply to gallery-shaped images and step 3 only to
//! set-shaped ones.

use realty_property_models::{Property, PropertyImages};

/// Image type requested when the caller doesn't name one.
pub const DEFAULT_IMAGE_TYPE: &str = "featured";

/// Root of the conventional `<root>/<status>/<id>/<type>.jpg` layout.
pub const DEFAULT_IMAGE_ROOT: &str = "/images/properties";

/// Placeholder shown when nothing else resolves.
pub const DEFAULT_FALLBACK_IMAGE: &str = "/images/placeholder-property.jpg";

/// Which step of the chain produced an image path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    /// Gallery image matching the requested type.
    Typed,
    /// First gallery image.
    First,
    /// Named slot of an image set.
    Slot,
    /// Conventional path built from status and id.
    Derived,
    /// The fallback image.
    Fallback,
}

/// Settings for the resolution chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResolver {
    /// Root for derived paths. Derived paths are skipped when `None`.
    pub image_root: Option<String>,
    /// Image used when nothing else resolves and the caller gives none.
    pub fallback: String,
}

impl Default for ImageResolver {
    fn default() -> Self {
        Self {
            image_root: Some(DEFAULT_IMAGE_ROOT.to_string()),
            fallback: DEFAULT_FALLBACK_IMAGE.to_string(),
        }
    }
}

impl ImageResolver {
    /// Reads `REALTY_IMAGE_ROOT` and `REALTY_FALLBACK_IMAGE`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a resolver from an arbitrary variable lookup.
    ///
    /// `REALTY_IMAGE_ROOT=none` disables derived paths. Empty values count
    /// as unset.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let image_root = match var("REALTY_IMAGE_ROOT") {
            Some(root) if root.eq_ignore_ascii_case("none") => None,
            Some(root) => Some(root),
            None => defaults.image_root,
        };

        Self {
            image_root,
            fallback: var("REALTY_FALLBACK_IMAGE").unwrap_or(defaults.fallback),
        }
    }

    /// Resolves an image path for `property`.
    ///
    /// `kind` defaults to [`DEFAULT_IMAGE_TYPE`]; `fallback` overrides the
    /// resolver's own fallback for this call.
    #[must_use]
    pub fn resolve(&self, property: &Property, kind: Option<&str>, fallback: Option<&str>) -> String {
        self.resolve_with_source(property, kind, fallback).0
    }

    /// Like [`ImageResolver::resolve`], also reporting which step matched.
    #[must_use]
    pub fn resolve_with_source(
        &self,
        property: &Property,
        kind: Option<&str>,
        fallback: Option<&str>,
    ) -> (String, ImageSource) {
        let wanted = kind
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .unwrap_or(DEFAULT_IMAGE_TYPE)
            .to_lowercase();

        match &property.images {
            PropertyImages::Gallery(images) => {
                let usable = || images.iter().filter(|image| !image.url.trim().is_empty());

                let typed = usable().find(|image| {
                    image
                        .kind
                        .as_deref()
                        .is_some_and(|k| k.to_lowercase() == wanted)
                        || image.alt.to_lowercase().contains(&wanted)
                });
                if let Some(image) = typed {
                    return (image.url.clone(), ImageSource::Typed);
                }
                if let Some(image) = usable().next() {
                    return (image.url.clone(), ImageSource::First);
                }
            }
            PropertyImages::Set(set) => {
                if let Some(url) = set.slot(&wanted).filter(|url| !url.trim().is_empty()) {
                    return (url.to_string(), ImageSource::Slot);
                }
            }
        }

        if let Some(root) = &self.image_root {
            if !property.id.trim().is_empty() {
                let path = format!(
                    "{}/{}/{}/{wanted}.jpg",
                    root.trim_end_matches('/'),
                    property.status,
                    property.id
                );
                return (path, ImageSource::Derived);
            }
        }

        log::debug!("No '{wanted}' image for property '{}', using fallback", property.id);
        (
            fallback.unwrap_or(&self.fallback).to_string(),
            ImageSource::Fallback,
        )
    }
}

/// Resolves an image path with the default [`ImageResolver`].
#[must_use]
pub fn property_image_url(property: &Property, kind: Option<&str>, fallback: Option<&str>) -> String {
    ImageResolver::default().resolve(property, kind, fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use realty_property_models::{
        ImageSet, Location, PropertyImage, PropertyStatus, Specifications,
    };

    const FALLBACK: &str = "/img/fallback.jpg";

    fn property(id: &str, images: PropertyImages) -> Property {
        Property {
            id: id.to_string(),
            slug: id.to_string(),
            name: "Fixture".to_string(),
            status: PropertyStatus::UnderConstruction,
            kind: "Residential".to_string(),
            property_type: None,
            sub_type: None,
            description: None,
            location: Location {
                address: String::new(),
                city: "Thane".to_string(),
                state: "Maharashtra".to_string(),
                zip_code: None,
                coordinates: None,
                landmarks: Vec::new(),
            },
            images,
            flat_types: Vec::new(),
            price_range: None,
            starting_price: None,
            amenities: Vec::new(),
            specifications: Specifications::default(),
            project_overview: std::collections::BTreeMap::new(),
            construction_progress: None,
            completion_date: None,
            highlights: Vec::new(),
            rera_number: None,
            rera_certificate: None,
            rera_qr_code: None,
        }
    }

    fn image(url: &str, alt: &str, kind: Option<&str>) -> PropertyImage {
        PropertyImage {
            url: url.to_string(),
            alt: alt.to_string(),
            kind: kind.map(str::to_string),
        }
    }

    fn mixed_gallery() -> PropertyImages {
        PropertyImages::Gallery(vec![
            image("/interior.jpg", "Living room", Some("interior")),
            image("/exterior.jpg", "Front view", Some("exterior")),
            image("/pool.jpg", "Rooftop amenity pool", None),
        ])
    }

    #[test]
    fn gallery_prefers_type_match() {
        let p = property("p", mixed_gallery());
        assert_eq!(
            property_image_url(&p, Some("exterior"), Some(FALLBACK)),
            "/exterior.jpg"
        );
        assert_eq!(
            ImageResolver::default().resolve_with_source(&p, Some("EXTERIOR"), None),
            ("/exterior.jpg".to_string(), ImageSource::Typed)
        );
    }

    #[test]
    fn gallery_matches_alt_text() {
        let p = property("p", mixed_gallery());
        assert_eq!(property_image_url(&p, Some("amenity"), None), "/pool.jpg");
    }

    #[test]
    fn gallery_falls_back_to_first_image() {
        let p = property("p", mixed_gallery());
        assert_eq!(
            ImageResolver::default().resolve_with_source(&p, Some("aerial"), Some(FALLBACK)),
            ("/interior.jpg".to_string(), ImageSource::First)
        );
    }

    #[test]
    fn gallery_skips_blank_urls() {
        let p = property(
            "p",
            PropertyImages::Gallery(vec![
                image("", "Exterior", Some("exterior")),
                image("/second.jpg", "", None),
            ]),
        );
        assert_eq!(property_image_url(&p, Some("exterior"), None), "/second.jpg");
    }

    #[test]
    fn set_resolves_named_slot() {
        let p = property(
            "inv",
            PropertyImages::Set(ImageSet {
                thumbnail: Some("/thumb.jpg".to_string()),
                featured: Some("/featured.jpg".to_string()),
                gallery: vec!["/g1.jpg".to_string()],
            }),
        );
        assert_eq!(property_image_url(&p, Some("thumbnail"), None), "/thumb.jpg");
        assert_eq!(property_image_url(&p, None, None), "/featured.jpg");
        assert_eq!(property_image_url(&p, Some("gallery"), None), "/g1.jpg");
    }

    #[test]
    fn set_without_slot_uses_derived_path() {
        let p = property(
            "inv",
            PropertyImages::Set(ImageSet {
                thumbnail: Some("/thumb.jpg".to_string()),
                ..ImageSet::default()
            }),
        );
        assert_eq!(
            ImageResolver::default().resolve_with_source(&p, Some("featured"), Some(FALLBACK)),
            (
                "/images/properties/under-construction/inv/featured.jpg".to_string(),
                ImageSource::Derived
            )
        );
    }

    #[test]
    fn empty_images_use_derived_path() {
        let p = property("lakeview", PropertyImages::default());
        let resolver = ImageResolver {
            image_root: Some("/cdn/".to_string()),
            fallback: FALLBACK.to_string(),
        };
        assert_eq!(
            resolver.resolve(&p, Some("Exterior"), None),
            "/cdn/under-construction/lakeview/exterior.jpg"
        );
    }

    #[test]
    fn unresolvable_returns_fallback() {
        let nameless = property("", PropertyImages::default());
        assert_eq!(
            property_image_url(&nameless, Some("exterior"), Some(FALLBACK)),
            FALLBACK
        );

        let no_root = ImageResolver {
            image_root: None,
            ..ImageResolver::default()
        };
        let p = property("p", PropertyImages::Set(ImageSet::default()));
        assert_eq!(
            no_root.resolve_with_source(&p, Some("exterior"), None),
            (DEFAULT_FALLBACK_IMAGE.to_string(), ImageSource::Fallback)
        );
    }

    #[test]
    fn resolver_reads_lookup() {
        let resolver = ImageResolver::from_lookup(|key| match key {
            "REALTY_IMAGE_ROOT" => Some("none".to_string()),
            "REALTY_FALLBACK_IMAGE" => Some(" /x.jpg ".to_string()),
            _ => None,
        });
        assert_eq!(resolver.image_root, None);
        assert_eq!(resolver.fallback, "/x.jpg");
        assert_eq!(ImageResolver::from_lookup(|_| None), ImageResolver::default());
    }
}
