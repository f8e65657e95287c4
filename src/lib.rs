//! # Menu Site
//!
//! A static site generator for restaurant listings. A CSV export is the data
//! source: each row becomes a restaurant with its own detail page, and an
//! index page lists them all as cards.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      restaurants.csv  →  Manifest   (rows → cleaned records)
//! 2. Generate  Manifest         →  docs/      (final HTML site)
//! ```
//!
//! Data flows one way. Records are built once, in input order, and never
//! mutated afterwards; the renderers are pure functions from a record to
//! markup, so they are tested without touching the filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1: reads the CSV, resolves the column mapping, builds records |
//! | [`generate`] | Stage 2: renders pages with Maud and writes the output tree |
//! | [`clean`] | Cell normalization: separators, multi-line cells, placeholder glyphs |
//! | [`naming`] | Slug generation and per-run slug deduplication |
//! | [`config`] | `config.toml` loading, validation, and the column mapping |
//! | [`types`] | The `Restaurant` record shared between stages |
//! | [`output`] | CLI output formatting for both stages |
//!
//! # Design Decisions
//!
//! ## Explicit Column Mapping
//!
//! The export's headers are scraper class names, not field names. Rather than
//! looking cells up by string all over the code, [`config::ColumnConfig`] maps
//! every field to its header and [`scan`] resolves that mapping once against
//! the header row. A header that is missing is reported once, up front.
//!
//! ## Last Line Wins
//!
//! Scraped cells often hold label lines followed by the value. [`clean::clean`]
//! keeps only the last non-empty line and drops lone icon-font glyphs. These
//! are fixed rules tied to the shape of the export.
//!
//! ## ASCII Slugs
//!
//! Detail pages live at `restaurants/<slug>/index.html`. Slugs are ASCII so
//! the tree is portable; names with no Latin characters fall back to
//! `restaurant`, and [`naming::SlugRegistry`] suffixes duplicates (`-2`, `-3`).
//!
//! ## Stylesheet Written Once
//!
//! `assets/style.css` is only written when absent, so a stylesheet edited by
//! hand survives regeneration. Everything else is rewritten on every run and
//! is byte-identical for identical input.

pub mod clean;
pub mod config;
pub mod generate;
pub mod naming;
pub mod output;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
