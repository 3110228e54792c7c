//! Table and JSON rendering for CLI results.

use realty_format::{
    ImageResolver, format_area, format_indian_number, format_price, format_property_price,
};
use realty_property_models::{Configuration, FlatType, Property};
use serde_json::json;

const RULE_WIDTH: usize = 100;

pub fn listing(properties: &[&Property], json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(properties)?);
        return Ok(());
    }

    if properties.is_empty() {
        println!("No properties found.");
        return Ok(());
    }

    println!(
        "{:<24} {:<26} {:<20} {:<14} PRICE",
        "ID", "NAME", "STATUS", "CITY"
    );
    println!("{}", "-".repeat(RULE_WIDTH));
    for property in properties {
        println!(
            "{:<24} {:<26} {:<20} {:<14} {}",
            clip(&property.id, 24),
            clip(&property.name, 26),
            property.status.label(),
            clip(&property.location.city, 14),
            format_property_price(property)
        );
    }
    println!("\n{} propert{}", properties.len(), if properties.len() == 1 { "y" } else { "ies" });

    Ok(())
}

pub fn detail(
    property: &Property,
    images: &ImageResolver,
    json: bool,
) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(property)?);
        return Ok(());
    }

    let location = &property.location;
    println!("{} ({})", property.name, property.slug);
    println!("{}", "-".repeat(RULE_WIDTH));
    println!("{:<14} {}", "Status", property.status.label());
    println!("{:<14} {}", "Type", property.kind);
    if let Some(asset) = &property.property_type {
        println!("{:<14} {asset}", "Asset class");
    }
    println!(
        "{:<14} {}, {}, {}",
        "Location", location.address, location.city, location.state
    );
    println!("{:<14} {}", "Price", format_property_price(property));
    if let Some(date) = &property.completion_date {
        println!("{:<14} {date}", "Completion");
    }
    if let Some(rera) = &property.rera_number {
        println!("{:<14} {rera}", "RERA");
    }
    println!("{:<14} {}", "Image", images.resolve(property, None, None));

    if let Some(progress) = &property.construction_progress {
        println!(
            "{:<14} {}% ({} of {} stages complete)",
            "Progress",
            progress.overall,
            progress.completed_stages(),
            progress.stages.len()
        );
    }

    if let Some(description) = &property.description {
        println!("\n{description}");
    }

    if !property.highlights.is_empty() {
        println!("\nHighlights");
        for highlight in &property.highlights {
            println!("  * {highlight}");
        }
    }

    if !property.specifications.is_empty() {
        println!("\nSpecifications");
        for (label, value) in property.specifications.entries() {
            println!("  {label}");
            for line in value.lines() {
                println!("    {line}");
            }
        }
    }

    if !location.landmarks.is_empty() {
        println!("\nNearby");
        for landmark in &location.landmarks {
            println!("  {:<30} {}", landmark.name, landmark.distance);
        }
    }

    Ok(())
}

pub fn floor_plans(
    plans: &[(&FlatType, &Configuration)],
    json: bool,
) -> Result<(), serde_json::Error> {
    if json {
        let rows: Vec<_> = plans
            .iter()
            .map(|(flat, config)| json!({ "flat_type": flat.kind, "configuration": config }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if plans.is_empty() {
        println!("No floor plans found.");
        return Ok(());
    }

    println!("{:<10} {:<14} {:<10} {:<18} FLOOR PLAN", "TYPE", "CARPET", "BEDROOMS", "PRICE");
    println!("{}", "-".repeat(RULE_WIDTH));
    for (flat, config) in plans {
        println!(
            "{:<10} {:<14} {:<10} {:<18} {}",
            clip(&flat.kind, 10),
            format_area(config.carpet_area),
            config.bedrooms.map_or_else(|| "-".to_string(), |b| b.to_string()),
            format_price(config.price),
            config.floor_plan.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}

pub fn amenities(groups: &[(&str, Vec<&str>)], json: bool) -> Result<(), serde_json::Error> {
    if json {
        let rows: Vec<_> = groups
            .iter()
            .map(|(category, names)| json!({ "category": category, "amenities": names }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if groups.is_empty() {
        println!("No amenities listed.");
    }
    for (category, names) in groups {
        println!("{category}");
        for name in names {
            println!("  * {name}");
        }
    }

    Ok(())
}

pub fn price(value: u64, json: bool) -> Result<(), serde_json::Error> {
    let formatted = format_price(Some(value));
    if json {
        let body = json!({
            "value": value,
            "formatted": formatted,
            "grouped": format_indian_number(value),
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        println!("{formatted} (₹{})", format_indian_number(value));
    }
    Ok(())
}

/// Shortens `text` to `width` characters, marking the cut with `~`.
fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(width.saturating_sub(1)).collect();
    clipped.push('~');
    clipped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_keeps_short_text() {
        assert_eq!(clip("Thane", 14), "Thane");
        assert_eq!(clip("", 4), "");
    }

    #[test]
    fn clip_marks_truncation() {
        assert_eq!(clip("Harbour Business Park", 10), "Harbour B~");
        assert_eq!(clip("Navi Mumbai", 11), "Navi Mumbai");
    }
}
