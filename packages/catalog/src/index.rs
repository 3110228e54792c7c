//! The aggregated, validated property catalog.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::LazyLock;

use realty_property_models::{Collection, Property};
use regex::Regex;

use crate::{CatalogError, CatalogOptions, DuplicatePolicy, collections};

/// Shape every slug must have to be usable in a URL path segment.
static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid regex"));

/// Position of a property inside the catalog.
#[derive(Debug, Clone, Copy)]
struct Slot {
    collection: Collection,
    position: usize,
}

/// All property collections plus id/slug lookup tables.
///
/// Build once with [`Catalog::load`] and share by reference.
#[derive(Debug, Default)]
pub struct Catalog {
    collections: [Vec<Property>; 4],
    by_id: HashMap<String, Slot>,
    by_slug: HashMap<String, Slot>,
}

impl Catalog {
    /// Loads the catalog from the embedded collections, or from
    /// `options.data_dir` when set.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if a collection can't be read or parsed,
    /// or if validation fails under [`DuplicatePolicy::Reject`].
    pub fn load(options: &CatalogOptions) -> Result<Self, CatalogError> {
        let collections = match &options.data_dir {
            Some(dir) => {
                log::debug!("Loading collections from {}", dir.display());
                collections::read_collections(dir)?
            }
            None => collections::embedded_collections()?,
        };

        Self::from_collections(collections, options.duplicate_policy)
    }

    /// Builds a catalog from already-parsed collections.
    ///
    /// Properties given for the same collection more than once are appended
    /// in the order given.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] for duplicate ids, duplicate slugs, or a
    /// status that doesn't belong in its collection, unless `policy` is
    /// [`DuplicatePolicy::Warn`].
    pub fn from_collections(
        collections: impl IntoIterator<Item = (Collection, Vec<Property>)>,
        policy: DuplicatePolicy,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();
        for (collection, properties) in collections {
            catalog.collections[collection.index()].extend(properties);
        }

        for collection in Collection::ALL {
            for (position, property) in catalog.collections[collection.index()].iter().enumerate()
            {
                if !collection.admits(property.status) {
                    policy.handle(CatalogError::MisfiledStatus {
                        id: property.id.clone(),
                        status: property.status,
                        collection,
                    })?;
                }

                if !SLUG_RE.is_match(&property.slug) {
                    log::warn!(
                        "Property '{}' has a slug that is not URL-safe: '{}'",
                        property.id,
                        property.slug
                    );
                }

                let slot = Slot {
                    collection,
                    position,
                };

                match catalog.by_id.entry(property.id.clone()) {
                    Entry::Occupied(_) => policy.handle(CatalogError::DuplicateId {
                        id: property.id.clone(),
                        collection,
                    })?,
                    Entry::Vacant(entry) => {
                        entry.insert(slot);
                    }
                }

                match catalog.by_slug.entry(property.slug.clone()) {
                    Entry::Occupied(_) => policy.handle(CatalogError::DuplicateSlug {
                        slug: property.slug.clone(),
                        collection,
                    })?,
                    Entry::Vacant(entry) => {
                        entry.insert(slot);
                    }
                }
            }
        }

        log::debug!(
            "Loaded {} properties ({} upcoming, {} ongoing, {} completed, {} investment)",
            catalog.len(),
            catalog.collection(Collection::Upcoming).len(),
            catalog.collection(Collection::Ongoing).len(),
            catalog.collection(Collection::Completed).len(),
            catalog.collection(Collection::Investment).len(),
        );

        Ok(catalog)
    }

    /// Iterates every property in aggregation order.
    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        Collection::ALL
            .into_iter()
            .flat_map(|collection| self.collections[collection.index()].iter())
    }

    /// Every property: upcoming, then ongoing, completed and investment,
    /// each in authored order.
    #[must_use]
    pub fn all(&self) -> Vec<&Property> {
        self.iter().collect()
    }

    /// One source collection in authored order.
    #[must_use]
    pub fn collection(&self, collection: Collection) -> &[Property] {
        &self.collections[collection.index()]
    }

    /// Total number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.collections.iter().map(Vec::len).sum()
    }

    /// Whether the catalog holds no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up a property by id. `None` is an ordinary outcome (e.g. a
    /// stale link), not an error.
    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<&Property> {
        self.by_id.get(id).map(|slot| self.resolve(*slot))
    }

    /// Looks up a property by slug.
    #[must_use]
    pub fn by_slug(&self, slug: &str) -> Option<&Property> {
        self.by_slug.get(slug).map(|slot| self.resolve(*slot))
    }

    /// Looks up a property by id, then by slug.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Property> {
        self.by_id(key).or_else(|| self.by_slug(key))
    }

    fn resolve(&self, slot: Slot) -> &Property {
        &self.collections[slot.collection.index()][slot.position]
    }
}
