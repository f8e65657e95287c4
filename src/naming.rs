//! Slug generation for restaurant detail pages.
//!
//! Every restaurant gets a URL path segment derived from its display name.
//! Slugs are ASCII-only so detail paths are portable across file servers:
//!
//! - `"Noodle House"` → `"noodle-house"`
//! - `"Café  du_Monde"` → `"cafe-du-monde"` (NFKD strips the accent)
//! - `"牛肉麵 Noodle House"` → `"noodle-house"` (non-Latin script dropped)
//! - `"牛肉麵"` → `"restaurant"` (nothing left, fixed fallback)
//!
//! ## Uniqueness
//!
//! [`slugify`] is a pure function and knows nothing about other records.
//! Deduplication happens in [`SlugRegistry`], which the scan stage threads
//! through rows in input order: the first `cafe` keeps its slug, later ones
//! become `cafe-2`, `cafe-3`, ...

use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

/// Slug used when a name has no ASCII word characters at all.
pub const FALLBACK_SLUG: &str = "restaurant";

/// Derive a URL-safe path segment from a display name.
pub fn slugify(name: &str) -> String {
    let normalized: String = name.nfkd().collect();
    let lowered = normalized.trim().to_lowercase();

    let mut slug = String::with_capacity(lowered.len());
    let mut in_gap = false;
    for c in lowered.chars() {
        if c.is_whitespace() || c == '_' {
            in_gap = true;
            continue;
        }
        if in_gap {
            slug.push('-');
            in_gap = false;
        }
        if c.is_ascii_alphanumeric() || c == '-' {
            slug.push(c);
        }
    }

    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// Slugs handed out during one generation run.
#[derive(Debug, Default)]
pub struct SlugRegistry {
    used: HashSet<String>,
}

impl SlugRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `base`, or `base-N` for the first free `N >= 2`.
    pub fn reserve(&mut self, base: &str) -> String {
        let mut slug = base.to_string();
        let mut counter = 2;
        while self.used.contains(&slug) {
            slug = format!("{base}-{counter}");
            counter += 1;
        }
        if slug != base {
            tracing::debug!(base, slug = %slug, "slug collision resolved");
        }
        self.used.insert(slug.clone());
        slug
    }
}
