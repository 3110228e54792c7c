//! Unit configurations, amenities, specifications and build progress.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A unit type (e.g. "2 BHK") and its size/price variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatType {
    /// Unit type label.
    #[serde(rename = "type")]
    pub kind: String,
    /// Size/price variants of this unit type.
    #[serde(default)]
    pub configurations: Vec<Configuration>,
}

/// One size/price variant of a [`FlatType`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Carpet area in square feet.
    #[serde(default)]
    pub carpet_area: Option<u32>,
    /// Price in rupees.
    #[serde(default)]
    pub price: Option<u64>,
    /// Bedroom count.
    #[serde(default)]
    pub bedrooms: Option<u8>,
    /// Bathroom count.
    #[serde(default)]
    pub bathrooms: Option<u8>,
    /// Floor plan image path.
    #[serde(default)]
    pub floor_plan: Option<String>,
}

/// A project amenity, authored either as a bare name or with a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amenity {
    /// Bare amenity name.
    Plain(String),
    /// Amenity with an optional grouping category.
    Named {
        /// Amenity name.
        name: String,
        /// Grouping category ("Sports", "Leisure", ...).
        #[serde(default)]
        category: Option<String>,
    },
}

impl Amenity {
    /// Amenity name regardless of shape.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Plain(name) | Self::Named { name, .. } => name,
        }
    }

    /// Category, if one was authored.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        match self {
            Self::Plain(_) => None,
            Self::Named { category, .. } => category.as_deref(),
        }
    }
}

/// The value of one specification category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecValue {
    /// Single sentence ("RCC framed earthquake resistant structure").
    Text(String),
    /// Bullet list.
    List(Vec<String>),
    /// Sub-keyed values (`living = "Vitrified tiles"`).
    Table(BTreeMap<String, String>),
}

impl SpecValue {
    /// Renders the value as display lines. Table entries become
    /// `"Key: value"` lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Text(text) => vec![text.clone()],
            Self::List(items) => items.clone(),
            Self::Table(entries) => entries
                .iter()
                .map(|(key, value)| format!("{}: {value}", capitalize(key)))
                .collect(),
        }
    }
}

/// Construction specifications.
///
/// Known categories get their own field; anything else lands in `other`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specifications {
    /// Frame and foundation ("RCC framed structure").
    #[serde(default)]
    pub structure: Option<SpecValue>,
    /// Wall and plaster finishes.
    #[serde(default)]
    pub walls: Option<SpecValue>,
    /// Floor finishes, often per room.
    #[serde(default)]
    pub flooring: Option<SpecValue>,
    /// Main and internal doors.
    #[serde(default)]
    pub doors: Option<SpecValue>,
    /// Window frames and glazing.
    #[serde(default)]
    pub windows: Option<SpecValue>,
    /// Kitchen platform, sink and fittings.
    #[serde(default)]
    pub kitchen: Option<SpecValue>,
    /// Bathroom tiling and sanitaryware.
    #[serde(default)]
    pub bathroom: Option<SpecValue>,
    /// Wiring, switches and backup.
    #[serde(default)]
    pub electrical: Option<SpecValue>,
    /// Pipework and water supply.
    #[serde(default)]
    pub plumbing: Option<SpecValue>,
    /// Access control and surveillance.
    #[serde(default)]
    pub security: Option<SpecValue>,
    /// Categories without a dedicated field, keyed by their authored name.
    #[serde(flatten)]
    pub other: BTreeMap<String, SpecValue>,
}

impl Specifications {
    /// Every present category as `(label, value)`, known categories first
    /// in a fixed order, then the rest alphabetically.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, &SpecValue)> {
        let known = [
            ("Structure", &self.structure),
            ("Walls", &self.walls),
            ("Flooring", &self.flooring),
            ("Doors", &self.doors),
            ("Windows", &self.windows),
            ("Kitchen", &self.kitchen),
            ("Bathroom", &self.bathroom),
            ("Electrical", &self.electrical),
            ("Plumbing", &self.plumbing),
            ("Security", &self.security),
        ];

        known
            .into_iter()
            .filter_map(|(label, value)| value.as_ref().map(|v| (label.to_string(), v)))
            .chain(self.other.iter().map(|(key, v)| (capitalize(key), v)))
            .collect()
    }

    /// Whether no category is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

/// Overall and per-stage build progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructionProgress {
    /// Overall completion percentage (0-100).
    pub overall: u8,
    /// Individual stages.
    #[serde(default)]
    pub stages: Vec<ConstructionStage>,
}

/// A single construction stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructionStage {
    /// Stage name ("Excavation", "Slab work").
    pub name: String,
    /// Completion percentage (0-100).
    pub progress: u8,
    /// Free-text status ("completed", "in-progress").
    #[serde(default)]
    pub status: Option<String>,
}

impl ConstructionProgress {
    /// Number of stages at 100%.
    #[must_use]
    pub fn completed_stages(&self) -> usize {
        self.stages.iter().filter(|s| s.progress >= 100).count()
    }
}

fn capitalize(text: &str) -> String {
    let spaced = text.replace(['_', '-'], " ");
    let mut chars = spaced.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
