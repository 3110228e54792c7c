//! Rupee price formatting in the Indian Lakh/Crore convention.
//!
//! Amounts are divided as `f64` and rounded to two decimals for Crore and
//! one for Lakh, trailing zeros dropped. Rounding works on the exact binary
//! value of the quotient with ties going up, the same as JavaScript's
//! `toFixed`. So 82,35,000 shows as "82.3 Lakh" (the quotient is just
//! below 82.35) and a value just under one Crore shows as "100 Lakh".

use realty_property_models::{PriceRange, Property};

/// 1 Lakh = 1,00,000.
pub const LAKH: u64 = 100_000;

/// 1 Crore = 1,00,00,000.
pub const CRORE: u64 = 10_000_000;

/// Placeholder for missing or zero prices.
pub const PRICE_ON_REQUEST: &str = "Price on Request";

/// Formats a rupee amount.
///
/// * `>= 1 Cr`: `"₹ 1.19 Cr"`
/// * `>= 1 Lakh`: `"₹ 82.4 Lakh"`
/// * below that: `"₹95,000"` with Indian digit grouping
/// * `None` or zero: `"Price on Request"`
#[must_use]
pub fn format_price(value: Option<u64>) -> String {
    match value {
        None | Some(0) => PRICE_ON_REQUEST.to_string(),
        Some(value) if value >= CRORE => format!("₹ {} Cr", scaled(value, CRORE, 100, 2)),
        Some(value) if value >= LAKH => format!("₹ {} Lakh", scaled(value, LAKH, 10, 1)),
        Some(value) => format!("₹{}", format_indian_number(value)),
    }
}

/// `"<min> Onwards"` for open-ended or single-price ranges, otherwise
/// `"<min> - <max>"`.
#[must_use]
pub fn format_price_range(range: &PriceRange) -> String {
    match range.max {
        Some(max) if max != range.min => format!(
            "{} - {}",
            format_price(Some(range.min)),
            format_price(Some(max))
        ),
        _ => format!("{} Onwards", format_price(Some(range.min))),
    }
}

/// Best available price line for a listing card.
///
/// Uses `price_range`, then `starting_price` (as "Onwards"), then the span
/// of configuration prices.
#[must_use]
pub fn format_property_price(property: &Property) -> String {
    if let Some(range) = &property.price_range {
        return format_price_range(range);
    }

    match property.price_bounds() {
        Some((low, high)) => format_price_range(&PriceRange {
            min: low,
            max: Some(high),
        }),
        None => PRICE_ON_REQUEST.to_string(),
    }
}

/// Groups digits the Indian way: last three, then pairs (`12,34,567`).
#[must_use]
pub fn format_indian_number(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}

/// `value / unit` as `f64`, rounded to `width` decimals
/// (`factor = 10^width`) from the quotient's exact binary expansion, ties
/// upward. Trailing zeros are dropped.
fn scaled(value: u64, unit: u64, factor: u64, width: usize) -> String {
    #[allow(clippy::cast_precision_loss)]
    let quotient = value as f64 / unit as f64;

    // 60 places is exact for any f64 >= 1 with a 52-bit mantissa.
    let exact = format!("{quotient:.60}");
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut rounded = whole
        .bytes()
        .chain(fraction.bytes().take(width))
        .fold(0_u64, |acc, digit| acc * 10 + u64::from(digit - b'0'));
    if fraction.bytes().nth(width).is_some_and(|digit| digit >= b'5') {
        rounded += 1;
    }

    let whole = rounded / factor;
    let fraction = rounded % factor;

    if fraction == 0 {
        return whole.to_string();
    }

    let fraction = format!("{fraction:0width$}");
    format!("{whole}.{}", fraction.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crore_rounds_to_two_decimals() {
        assert_eq!(format_price(Some(11_900_000)), "₹ 1.19 Cr");
        assert_eq!(format_price(Some(11_200_000)), "₹ 1.12 Cr");
        assert_eq!(format_price(Some(12_000_000)), "₹ 1.2 Cr");
        assert_eq!(format_price(Some(10_000_000)), "₹ 1 Cr");
        assert_eq!(format_price(Some(45_000_000)), "₹ 4.5 Cr");
    }

    #[test]
    fn rounding_follows_the_float_quotient() {
        // 1.005 and 82.35 are stored just below the tie.
        assert_eq!(format_price(Some(10_050_000)), "₹ 1 Cr");
        assert_eq!(format_price(Some(8_235_000)), "₹ 82.3 Lakh");
        // 82.25 and 1.125 are exact ties and round up.
        assert_eq!(format_price(Some(8_225_000)), "₹ 82.3 Lakh");
        assert_eq!(format_price(Some(11_250_000)), "₹ 1.13 Cr");
    }

    #[test]
    fn lakh_rounds_to_one_decimal() {
        assert_eq!(format_price(Some(8_236_000)), "₹ 82.4 Lakh");
        assert_eq!(format_price(Some(8_250_000)), "₹ 82.5 Lakh");
        assert_eq!(format_price(Some(6_500_000)), "₹ 65 Lakh");
        assert_eq!(format_price(Some(100_000)), "₹ 1 Lakh");
        assert_eq!(format_price(Some(9_999_999)), "₹ 100 Lakh");
    }

    #[test]
    fn small_amounts_use_indian_grouping() {
        assert_eq!(format_price(Some(95_000)), "₹95,000");
        assert_eq!(format_price(Some(999)), "₹999");
    }

    #[test]
    fn missing_or_zero_is_price_on_request() {
        assert_eq!(format_price(None), PRICE_ON_REQUEST);
        assert_eq!(format_price(Some(0)), PRICE_ON_REQUEST);
    }

    #[test]
    fn equal_or_open_range_is_onwards() {
        let same = PriceRange {
            min: 8_250_000,
            max: Some(8_250_000),
        };
        assert_eq!(format_price_range(&same), "₹ 82.5 Lakh Onwards");
        assert!(
            format_price_range(&PriceRange {
                min: 15_000_000,
                max: None
            })
            .ends_with("Onwards")
        );
    }

    #[test]
    fn distinct_range_uses_separator() {
        let range = PriceRange {
            min: 8_250_000,
            max: Some(11_200_000),
        };
        assert_eq!(format_price_range(&range), "₹ 82.5 Lakh - ₹ 1.12 Cr");
    }

    #[test]
    fn indian_grouping() {
        assert_eq!(format_indian_number(0), "0");
        assert_eq!(format_indian_number(1_000), "1,000");
        assert_eq!(format_indian_number(12_345), "12,345");
        assert_eq!(format_indian_number(1_234_567), "12,34,567");
        assert_eq!(format_indian_number(123_456_789), "12,34,56,789");
    }
}
