//! Shared types passed from the scan stage to the generate stage.
//!
//! A [`Restaurant`] is built once per CSV row and never mutated afterwards.
//! Every text field defaults to an empty string; downstream code treats
//! "absent" and "empty" identically.

use serde::Serialize;

/// A labelled external link shown in the detail page's action block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// One restaurant's cleaned data, derived from one CSV row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Restaurant {
    /// URL path segment, unique within a generation run
    pub slug: String,
    /// Display name (placeholder `餐廳 N` when the cell was blank)
    pub name: String,
    pub map_url: String,
    /// Free-form rating text, not guaranteed numeric
    pub rating: String,
    /// Review count with the surrounding parentheses removed
    pub review_count: String,
    pub category: String,
    pub address: String,
    /// Open/closed indicator text
    pub status: String,
    pub hours: String,
    pub image_url: String,
    /// Up to three service tags, empties dropped, source order kept
    pub services: Vec<String>,
    pub action_label: String,
    pub action_url: String,
    /// Price-tier label
    pub price: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub secondary_links: Vec<Link>,
}

impl Restaurant {
    /// The primary call-to-action, present only when both label and URL are.
    pub fn action(&self) -> Option<(&str, &str)> {
        if self.action_label.is_empty() || self.action_url.is_empty() {
            None
        } else {
            Some((&self.action_label, &self.action_url))
        }
    }

    /// Detail page path relative to the output root, e.g. `restaurants/cafe/`.
    pub fn detail_path(&self) -> String {
        format!("restaurants/{}/", self.slug)
    }
}
