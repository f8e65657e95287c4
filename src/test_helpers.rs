//! Shared test utilities for the menu-site test suite.
//!
//! Provides a readable column mapping for hand-written CSV fixtures, CSV
//! builders, and a fully-populated [`Restaurant`] for renderer tests.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let csv = csv_with_names(&["Cafe", "Cafe"]);
//! let manifest = parse(&csv, &test_columns(), false).unwrap();
//! assert_eq!(slugs(&manifest), vec!["cafe", "cafe-2"]);
//! ```

use std::path::{Path, PathBuf};

use crate::config::ColumnConfig;
use crate::scan::Manifest;
use crate::types::{Link, Restaurant};

/// Header row matching [`test_columns`], one column per field.
pub const TEST_HEADER: &str = "name,map_url,rating,review_count,category,address,status,hours,\
image_url,service1,service2,service3,action_label,action_url,price,secondary_label,secondary_url";

/// Column mapping whose header names are the field names themselves.
pub fn test_columns() -> ColumnConfig {
    ColumnConfig {
        name: "name".to_string(),
        map_url: "map_url".to_string(),
        rating: "rating".to_string(),
        review_count: "review_count".to_string(),
        category: "category".to_string(),
        address: "address".to_string(),
        status: "status".to_string(),
        hours: "hours".to_string(),
        image_url: "image_url".to_string(),
        services: vec![
            "service1".to_string(),
            "service2".to_string(),
            "service3".to_string(),
        ],
        action_label: "action_label".to_string(),
        action_url: "action_url".to_string(),
        price: "price".to_string(),
        secondary_label: "secondary_label".to_string(),
        secondary_url: "secondary_url".to_string(),
    }
}

/// CSV with [`TEST_HEADER`] and one row per name, every other cell empty.
pub fn csv_with_names(names: &[&str]) -> String {
    let mut csv = format!("{TEST_HEADER}\n");
    for name in names {
        csv.push_str(name);
        csv.push_str(&",".repeat(16));
        csv.push('\n');
    }
    csv
}

/// Write `content` to `restaurants.csv` under `dir` and return its path.
pub fn write_csv(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("restaurants.csv");
    std::fs::write(&path, content).unwrap();
    path
}

/// Slugs of every record, in input order.
pub fn slugs(manifest: &Manifest) -> Vec<&str> {
    manifest
        .restaurants
        .iter()
        .map(|r| r.slug.as_str())
        .collect()
}

/// A restaurant with every field populated.
pub fn full_restaurant() -> Restaurant {
    Restaurant {
        slug: "noodle-house".to_string(),
        name: "Noodle House".to_string(),
        map_url: "https://maps.example/noodle".to_string(),
        rating: "4.6".to_string(),
        review_count: "1,024".to_string(),
        category: "麵食".to_string(),
        address: "台北市信義路 1 號".to_string(),
        status: "營業中".to_string(),
        hours: "21:00 打烊".to_string(),
        image_url: "https://img.example/noodle.jpg".to_string(),
        services: vec!["內用".to_string(), "外帶".to_string(), "外送".to_string()],
        action_label: "線上訂位".to_string(),
        action_url: "https://book.example/noodle".to_string(),
        price: "$200-400".to_string(),
        secondary_links: vec![Link {
            label: "菜單".to_string(),
            url: "https://menu.example/noodle".to_string(),
        }],
    }
}

/// A restaurant with only a name and slug.
pub fn bare_restaurant() -> Restaurant {
    Restaurant {
        slug: "bare".to_string(),
        name: "Bare".to_string(),
        ..Restaurant::default()
    }
}
