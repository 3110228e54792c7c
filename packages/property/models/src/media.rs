//! Property image shapes.
//!
//! Most listings carry an array of typed images. Investment listings carry
//! a fixed `{ thumbnail, featured, gallery }` set instead. Both shapes are
//! accepted and told apart by [`PropertyImages`].

use serde::{Deserialize, Serialize};

/// A single photo in a gallery-shaped image list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyImage {
    /// Image path or URL.
    pub url: String,
    /// Alt text.
    #[serde(default)]
    pub alt: String,
    /// Photo type tag ("exterior", "interior", "amenity", "floor-plan").
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Fixed-slot image set used by investment listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSet {
    /// Small card image.
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Hero image.
    #[serde(default)]
    pub featured: Option<String>,
    /// Additional photos.
    #[serde(default)]
    pub gallery: Vec<String>,
}

impl ImageSet {
    /// Looks up an image slot by name.
    ///
    /// `"gallery"` resolves to the first gallery photo. Unknown slot names
    /// resolve to `None`.
    #[must_use]
    pub fn slot(&self, name: &str) -> Option<&str> {
        match name.to_ascii_lowercase().as_str() {
            "thumbnail" => self.thumbnail.as_deref(),
            "featured" => self.featured.as_deref(),
            "gallery" => self.gallery.first().map(String::as_str),
            _ => None,
        }
    }
}

/// Images attached to a property, in whichever shape they were authored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyImages {
    /// Array of typed photos.
    Gallery(Vec<PropertyImage>),
    /// Named slots.
    Set(ImageSet),
}

impl Default for PropertyImages {
    fn default() -> Self {
        Self::Gallery(Vec::new())
    }
}

impl PropertyImages {
    /// Whether no image path is present in either shape.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Gallery(images) => images.is_empty(),
            Self::Set(set) => {
                set.thumbnail.is_none() && set.featured.is_none() && set.gallery.is_empty()
            }
        }
    }

    /// Every image path in display order.
    #[must_use]
    pub fn urls(&self) -> Vec<&str> {
        match self {
            Self::Gallery(images) => images.iter().map(|i| i.url.as_str()).collect(),
            Self::Set(set) => set
                .featured
                .iter()
                .chain(set.thumbnail.iter())
                .chain(set.gallery.iter())
                .map(String::as_str)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        images: PropertyImages,
    }

    #[test]
    fn array_shape_deserializes_as_gallery() {
        let holder: Holder = toml::from_str(
            r#"
            [[images]]
            url = "/a.jpg"
            alt = "Tower exterior"
            type = "exterior"

            [[images]]
            url = "/b.jpg"
            "#,
        )
        .unwrap();

        let PropertyImages::Gallery(images) = holder.images else {
            panic!("expected gallery shape");
        };
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].kind.as_deref(), Some("exterior"));
        assert_eq!(images[1].alt, "");
    }

    #[test]
    fn table_shape_deserializes_as_set() {
        let holder: Holder = toml::from_str(
            r#"
            [images]
            thumbnail = "/t.jpg"
            gallery = ["/g1.jpg", "/g2.jpg"]
            "#,
        )
        .unwrap();

        let PropertyImages::Set(set) = &holder.images else {
            panic!("expected set shape");
        };
        assert_eq!(set.slot("thumbnail"), Some("/t.jpg"));
        assert_eq!(set.slot("featured"), None);
        assert_eq!(set.slot("Gallery"), Some("/g1.jpg"));
        assert_eq!(holder.images.urls(), vec!["/t.jpg", "/g1.jpg", "/g2.jpg"]);
    }

    #[test]
    fn default_is_empty_gallery() {
        assert!(PropertyImages::default().is_empty());
        assert!(PropertyImages::Set(ImageSet::default()).is_empty());
    }
}
