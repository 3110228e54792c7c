//! Catalog loading options.

use std::path::PathBuf;
use std::str::FromStr as _;

use strum_macros::{AsRefStr, Display, EnumString};

use crate::CatalogError;

/// What to do when loading finds duplicate ids/slugs or a property filed
/// under the wrong collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DuplicatePolicy {
    /// Fail the load.
    #[default]
    Reject,
    /// Log a warning and keep going. The first occurrence wins lookups.
    Warn,
}

impl DuplicatePolicy {
    /// Applies the policy to a validation failure.
    ///
    /// # Errors
    ///
    /// Returns `error` unchanged under [`DuplicatePolicy::Reject`].
    pub fn handle(self, error: CatalogError) -> Result<(), CatalogError> {
        match self {
            Self::Reject => Err(error),
            Self::Warn => {
                log::warn!("{error}");
                Ok(())
            }
        }
    }
}

/// Options controlling how a [`crate::Catalog`] is loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogOptions {
    /// Directory holding `upcoming.toml`, `ongoing.toml`, `completed.toml`
    /// and `investment.toml`. Uses the embedded collections when `None`.
    pub data_dir: Option<PathBuf>,
    /// Validation policy.
    pub duplicate_policy: DuplicatePolicy,
}

impl CatalogOptions {
    /// Reads options from `REALTY_DATA_DIR` and `REALTY_DUPLICATE_POLICY`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds options from an arbitrary variable lookup. Empty values count
    /// as unset; unparseable values fall back to the default with a warning.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let data_dir = var("REALTY_DATA_DIR").map(PathBuf::from);

        let duplicate_policy = var("REALTY_DUPLICATE_POLICY")
            .map_or_else(DuplicatePolicy::default, |raw| {
                DuplicatePolicy::from_str(raw.trim()).unwrap_or_else(|_| {
                    log::warn!(
                        "Unknown REALTY_DUPLICATE_POLICY '{raw}', using {}",
                        DuplicatePolicy::default()
                    );
                    DuplicatePolicy::default()
                })
            });

        Self {
            data_dir,
            duplicate_policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let options = CatalogOptions::from_lookup(lookup_from(&[]));
        assert_eq!(options, CatalogOptions::default());
        assert_eq!(options.duplicate_policy, DuplicatePolicy::Reject);
    }

    #[test]
    fn reads_data_dir_and_policy() {
        let options = CatalogOptions::from_lookup(lookup_from(&[
            ("REALTY_DATA_DIR", "/srv/listings"),
            ("REALTY_DUPLICATE_POLICY", "WARN"),
        ]));
        assert_eq!(options.data_dir, Some(PathBuf::from("/srv/listings")));
        assert_eq!(options.duplicate_policy, DuplicatePolicy::Warn);
    }

    #[test]
    fn blank_and_unknown_values_fall_back() {
        let options = CatalogOptions::from_lookup(lookup_from(&[
            ("REALTY_DATA_DIR", "  "),
            ("REALTY_DUPLICATE_POLICY", "ignore"),
        ]));
        assert_eq!(options.data_dir, None);
        assert_eq!(options.duplicate_policy, DuplicatePolicy::Reject);
    }

    #[test]
    fn warn_policy_swallows_errors() {
        let error = || CatalogError::DuplicateId {
            id: "x".to_string(),
            collection: realty_property_models::Collection::Upcoming,
        };
        assert!(DuplicatePolicy::Warn.handle(error()).is_ok());
        assert!(DuplicatePolicy::Reject.handle(error()).is_err());
    }
}
