//! Status labels and badge classes for raw status strings.

use std::str::FromStr as _;

use realty_property_models::PropertyStatus;

use crate::text::title_case;

/// Badge class for statuses outside the known set.
pub const DEFAULT_BADGE_CLASS: &str = "badge-default";

fn parse(raw: &str) -> Option<PropertyStatus> {
    PropertyStatus::from_str(&raw.trim().to_lowercase()).ok()
}

/// Display label for a status value. Unknown values are title-cased
/// (`"pre-launch"` becomes `"Pre Launch"`).
#[must_use]
pub fn readable_status(raw: &str) -> String {
    parse(raw).map_or_else(|| title_case(raw), |status| status.label().to_string())
}

/// Badge CSS class for a status value, [`DEFAULT_BADGE_CLASS`] when unknown.
#[must_use]
pub fn status_badge_class(raw: &str) -> &'static str {
    parse(raw).map_or(DEFAULT_BADGE_CLASS, PropertyStatus::badge_class)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_use_lookup_table() {
        assert_eq!(readable_status("ready-to-move-in"), "Ready to Move In");
        assert_eq!(readable_status("Under-Construction"), "Under Construction");
        assert_eq!(status_badge_class("nearing-possession"), "badge-possession");
        assert_eq!(status_badge_class(" completed "), "badge-completed");
    }

    #[test]
    fn every_status_has_a_distinct_badge() {
        let mut classes: Vec<&str> = PropertyStatus::all()
            .iter()
            .map(|s| status_badge_class(s.as_ref()))
            .collect();
        classes.sort_unstable();
        classes.dedup();
        assert_eq!(classes.len(), PropertyStatus::all().len());
        assert!(!classes.contains(&DEFAULT_BADGE_CLASS));
    }

    #[test]
    fn unknown_status_falls_back() {
        assert_eq!(readable_status("pre-launch"), "Pre Launch");
        assert_eq!(readable_status("sold_out"), "Sold Out");
        assert_eq!(status_badge_class("pre-launch"), DEFAULT_BADGE_CLASS);
    }
}
