//! CSV reading and record building.
//!
//! Stage 1 of the build pipeline. Reads the restaurant export and turns each
//! row into a [`Restaurant`], producing a [`Manifest`] that the generate stage
//! consumes.
//!
//! ## Column Resolution
//!
//! Headers in the export are opaque scraper class names (`qBF1Pd`,
//! `W4Efsd (3)`, ...). The [`ColumnConfig`] maps each field to its header, and
//! that mapping is resolved against the header row exactly once. Headers that
//! are configured but absent are reported in [`Manifest::missing_columns`];
//! they read as empty for every row unless `strict_columns` turns them into a
//! [`ScanError::MissingColumns`].
//!
//! Rows shorter than the header row are fine: absent cells read as empty.
//!
//! ## Field Rules
//!
//! - Text fields go through [`clean::clean`].
//! - URL fields (map, image, action, secondary) are only trimmed.
//! - A blank name becomes `餐廳 N`, where `N` is the 1-based row index.
//! - Review counts lose their wrapping parentheses: `(128)` → `128`.
//! - Services drop empty cells but keep order and duplicates.
//! - The secondary link exists only when both label and URL are non-empty.

use crate::clean;
use crate::config::ColumnConfig;
use crate::naming::{SlugRegistry, slugify};
use crate::types::{Link, Restaurant};
use csv::StringRecord;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Unable to find data file at {0}")]
    MissingInput(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Configured columns not found in CSV header: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

/// Manifest output from the scan stage
#[derive(Debug, Serialize)]
pub struct Manifest {
    pub restaurants: Vec<Restaurant>,
    /// Configured headers that the CSV does not contain
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_columns: Vec<String>,
}

/// Read the CSV at `path` and build one record per row.
pub fn scan(path: &Path, columns: &ColumnConfig, strict: bool) -> Result<Manifest, ScanError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ScanError::MissingInput(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };
    parse(&content, columns, strict)
}

/// Build records from CSV text already in memory.
pub fn parse(content: &str, columns: &ColumnConfig, strict: bool) -> Result<Manifest, ScanError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let resolved = ResolvedColumns::resolve(columns, &headers);
    if !resolved.missing.is_empty() {
        if strict {
            return Err(ScanError::MissingColumns(resolved.missing));
        }
        tracing::warn!(
            missing = %resolved.missing.join(", "),
            "configured columns not found, reading them as empty"
        );
    }

    let rows = reader.records().collect::<Result<Vec<_>, _>>()?;
    let restaurants = build(&rows, &resolved);
    Ok(Manifest {
        restaurants,
        missing_columns: resolved.missing,
    })
}

/// Build records from rows in input order, reserving slugs as it goes.
fn build(rows: &[StringRecord], columns: &ResolvedColumns) -> Vec<Restaurant> {
    let mut slugs = SlugRegistry::new();
    rows.iter()
        .enumerate()
        .map(|(i, record)| build_record(i + 1, &Row { record, columns }, &mut slugs))
        .collect()
}

fn build_record(index: usize, row: &Row, slugs: &mut SlugRegistry) -> Restaurant {
    let name = match row.text(row.columns.name) {
        name if name.is_empty() => format!("餐廳 {index}"),
        name => name,
    };
    let slug = slugs.reserve(&slugify(&name));

    let services = row
        .columns
        .services
        .iter()
        .map(|&col| row.text(col))
        .filter(|service| !service.is_empty())
        .collect();

    let review_count = clean::strip_parens(&row.text(row.columns.review_count)).to_string();

    let secondary_label = row.text(row.columns.secondary_label);
    let secondary_url = row.url(row.columns.secondary_url);
    let secondary_links = if secondary_label.is_empty() || secondary_url.is_empty() {
        Vec::new()
    } else {
        vec![Link {
            label: secondary_label,
            url: secondary_url,
        }]
    };

    Restaurant {
        slug,
        name,
        map_url: row.url(row.columns.map_url),
        rating: row.text(row.columns.rating),
        review_count,
        category: row.text(row.columns.category),
        address: row.text(row.columns.address),
        status: row.text(row.columns.status),
        hours: row.text(row.columns.hours),
        image_url: row.url(row.columns.image_url),
        services,
        action_label: row.text(row.columns.action_label),
        action_url: row.url(row.columns.action_url),
        price: row.text(row.columns.price),
        secondary_links,
    }
}

/// Header positions for each field; `None` when the header is absent.
#[derive(Debug)]
struct ResolvedColumns {
    name: Option<usize>,
    map_url: Option<usize>,
    rating: Option<usize>,
    review_count: Option<usize>,
    category: Option<usize>,
    address: Option<usize>,
    status: Option<usize>,
    hours: Option<usize>,
    image_url: Option<usize>,
    services: Vec<Option<usize>>,
    action_label: Option<usize>,
    action_url: Option<usize>,
    price: Option<usize>,
    secondary_label: Option<usize>,
    secondary_url: Option<usize>,
    missing: Vec<String>,
}

impl ResolvedColumns {
    fn resolve(config: &ColumnConfig, headers: &StringRecord) -> Self {
        let mut missing = Vec::new();
        let mut find = |header: &str| {
            let position = headers.iter().position(|h| h == header);
            if position.is_none() && !missing.iter().any(|m| m == header) {
                missing.push(header.to_string());
            }
            position
        };

        let mut resolved = Self {
            name: find(&config.name),
            map_url: find(&config.map_url),
            rating: find(&config.rating),
            review_count: find(&config.review_count),
            category: find(&config.category),
            address: find(&config.address),
            status: find(&config.status),
            hours: find(&config.hours),
            image_url: find(&config.image_url),
            services: config.services.iter().map(|h| find(h)).collect(),
            action_label: find(&config.action_label),
            action_url: find(&config.action_url),
            price: find(&config.price),
            secondary_label: find(&config.secondary_label),
            secondary_url: find(&config.secondary_url),
            missing: Vec::new(),
        };
        resolved.missing = missing;
        resolved
    }
}

/// One CSV row viewed through the resolved column mapping.
struct Row<'a> {
    record: &'a StringRecord,
    columns: &'a ResolvedColumns,
}

impl Row<'_> {
    fn raw(&self, column: Option<usize>) -> &str {
        column.and_then(|i| self.record.get(i)).unwrap_or("")
    }

    fn text(&self, column: Option<usize>) -> String {
        clean::clean(self.raw(column))
    }

    fn url(&self, column: Option<usize>) -> String {
        clean::url(self.raw(column))
    }
}
