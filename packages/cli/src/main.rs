#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line browser for the property catalog.
//!
//! Loads the catalog (embedded collections, or `--data-dir`) and runs one
//! query against it, printing either a fixed-width table or JSON.

mod output;

use std::collections::HashSet;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use realty_catalog::{Catalog, CatalogOptions, DuplicatePolicy, detail};
use realty_format::ImageResolver;
use realty_property_models::Property;

#[derive(Parser)]
#[command(name = "realty", about = "Browse property listings")]
struct Cli {
    /// Directory holding the four collection files (overrides `REALTY_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    /// Warn about duplicate ids/slugs instead of failing
    #[arg(long, global = true)]
    allow_duplicates: bool,
    /// Print JSON instead of a table
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List properties, optionally filtered
    List {
        /// Collection key ("ongoing") or exact status ("ready-to-move-in")
        #[arg(long)]
        status: Option<String>,
        /// Sort by completion date, undated last
        #[arg(long, requires = "status")]
        sorted: bool,
        /// City (case-insensitive)
        #[arg(long)]
        city: Option<String>,
        /// Property type (case-insensitive)
        #[arg(long = "type")]
        kind: Option<String>,
        /// Lowest acceptable price in rupees
        #[arg(long)]
        min: Option<u64>,
        /// Highest acceptable price in rupees
        #[arg(long)]
        max: Option<u64>,
        /// Maximum number of rows
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show one property by id or slug
    Show {
        /// Property id or slug
        key: String,
    },
    /// Full-text search over names, descriptions and locations
    Search {
        /// Search terms
        #[arg(required = true)]
        query: Vec<String>,
    },
    /// Properties sharing a city or type with another
    Related {
        /// Property id
        id: String,
        #[arg(long, default_value = "3")]
        limit: usize,
    },
    /// Featured properties for the home page
    Featured {
        #[arg(long, default_value = "6")]
        limit: usize,
    },
    /// Floor plans of a property
    FloorPlans {
        /// Property id or slug
        key: String,
        /// Unit type ("2 BHK"), or "all"
        #[arg(long, default_value = "all")]
        flat_type: String,
    },
    /// Amenities of a property grouped by category
    Amenities {
        /// Property id or slug
        key: String,
    },
    /// Format a rupee amount
    Price {
        /// Amount in rupees
        value: u64,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let mut options = CatalogOptions::from_env();
    if cli.data_dir.is_some() {
        options.data_dir = cli.data_dir;
    }
    if cli.allow_duplicates {
        options.duplicate_policy = DuplicatePolicy::Warn;
    }

    let catalog = Catalog::load(&options)?;
    log::info!("Catalog loaded with {} properties", catalog.len());
    let images = ImageResolver::from_env();
    let json = cli.json;

    match cli.command {
        Commands::List {
            status,
            sorted,
            city,
            kind,
            min,
            max,
            limit,
        } => {
            let mut results = match status {
                Some(status) => catalog.properties_by_status(&status, sorted),
                None => catalog.all(),
            };
            if let Some(city) = city {
                retain_in(&mut results, &catalog.properties_by_location(&city));
            }
            if let Some(kind) = kind {
                retain_in(&mut results, &catalog.properties_by_type(&kind));
            }
            if min.is_some() || max.is_some() {
                retain_in(&mut results, &catalog.properties_by_price_range(min, max));
            }
            if let Some(limit) = limit {
                results.truncate(limit);
            }
            output::listing(&results, json)?;
        }
        Commands::Show { key } => {
            let property = lookup(&catalog, &key)?;
            output::detail(property, &images, json)?;
        }
        Commands::Search { query } => {
            let results = catalog.search(&query.join(" "));
            output::listing(&results, json)?;
        }
        Commands::Related { id, limit } => {
            let property = lookup(&catalog, &id)?;
            let results = catalog.related_properties(&property.id, limit);
            output::listing(&results, json)?;
        }
        Commands::Featured { limit } => {
            output::listing(&catalog.featured_properties(limit), json)?;
        }
        Commands::FloorPlans { key, flat_type } => {
            let property = lookup(&catalog, &key)?;
            output::floor_plans(&detail::floor_plans(property, &flat_type), json)?;
        }
        Commands::Amenities { key } => {
            let property = lookup(&catalog, &key)?;
            output::amenities(&detail::amenities_by_category(property), json)?;
        }
        Commands::Price { value } => output::price(value, json)?,
    }

    Ok(())
}

fn lookup<'a>(catalog: &'a Catalog, key: &str) -> Result<&'a Property, Box<dyn std::error::Error>> {
    catalog
        .get(key)
        .ok_or_else(|| format!("No property with id or slug '{key}'").into())
}

/// Keeps the entries of `results` that also appear in `allowed`.
fn retain_in(results: &mut Vec<&Property>, allowed: &[&Property]) {
    let ids: HashSet<&str> = allowed.iter().map(|p| p.id.as_str()).collect();
    results.retain(|p| ids.contains(p.id.as_str()));
}
