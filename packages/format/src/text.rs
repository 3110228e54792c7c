//! Slugs, areas, phone numbers and title casing.

use std::sync::LazyLock;

use regex::Regex;

/// Anything that isn't a lowercase word character or hyphen.
static NON_SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9_-]+").expect("valid regex"));

/// Runs of two or more hyphens.
static HYPHEN_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-{2,}").expect("valid regex"));

/// Placeholder for missing areas.
pub const AREA_NOT_AVAILABLE: &str = "N/A";

/// URL slug for `text`: lower-cased, whitespace to hyphens, other
/// non-word characters removed, hyphen runs collapsed and trimmed.
///
/// ```
/// assert_eq!(realty_format::slugify("Skyline Heights, Phase 2!"), "skyline-heights-phase-2");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let hyphenated = text
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    let stripped = NON_SLUG_RE.replace_all(&hyphenated, "");
    let collapsed = HYPHEN_RUN_RE.replace_all(&stripped, "-");
    collapsed.trim_matches('-').to_string()
}

/// `"685 sq.ft."`, or `"N/A"` when the area is unknown.
#[must_use]
pub fn format_area(carpet_area: Option<u32>) -> String {
    carpet_area.map_or_else(
        || AREA_NOT_AVAILABLE.to_string(),
        |area| format!("{area} sq.ft."),
    )
}

/// Formats an Indian phone number as `"+91 98200 12345"`.
///
/// Accepts 10-digit numbers, 11 digits with a trunk `0`, or 12 digits with
/// the `91` country code, ignoring punctuation. Anything else is returned
/// trimmed but otherwise untouched.
#[must_use]
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    let national = match digits.len() {
        10 => Some(digits.as_str()),
        11 if digits.starts_with('0') => Some(&digits[1..]),
        12 if digits.starts_with("91") => Some(&digits[2..]),
        _ => None,
    };

    national.map_or_else(
        || raw.trim().to_string(),
        |n| format!("+91 {} {}", &n[..5], &n[5..]),
    )
}

/// Title-cases a raw identifier: `"pre-launch"` becomes `"Pre Launch"`.
#[must_use]
pub fn title_case(raw: &str) -> String {
    raw.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_basic() {
        assert_eq!(slugify("Skyline Heights"), "skyline-heights");
        assert_eq!(slugify("  Lakeview   Towers  "), "lakeview-towers");
    }

    #[test]
    fn slugify_strips_symbols_and_collapses_hyphens() {
        assert_eq!(slugify("A & B"), "a-b");
        assert_eq!(slugify("--Palm -- Grove!!--"), "palm-grove");
        assert_eq!(slugify("BKC Pre-leased Office"), "bkc-pre-leased-office");
        assert_eq!(slugify("Royal_Orchid"), "royal_orchid");
        assert_eq!(slugify("Café Court"), "caf-court");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn slugify_is_case_insensitive() {
        assert_eq!(slugify("METRO PLAZA"), slugify("metro plaza"));
    }

    #[test]
    fn area_formats_or_falls_back() {
        assert_eq!(format_area(Some(685)), "685 sq.ft.");
        assert_eq!(format_area(None), "N/A");
    }

    #[test]
    fn phone_numbers_normalize_to_plus_91() {
        assert_eq!(format_phone("9820012345"), "+91 98200 12345");
        assert_eq!(format_phone("+91-98200-12345"), "+91 98200 12345");
        assert_eq!(format_phone("098200 12345"), "+91 98200 12345");
        assert_eq!(format_phone(" 1800-22-33 "), "1800-22-33");
    }

    #[test]
    fn title_case_splits_on_separators() {
        assert_eq!(title_case("pre-launch"), "Pre Launch");
        assert_eq!(title_case("sold_OUT"), "Sold Out");
        assert_eq!(title_case(""), "");
    }
}
