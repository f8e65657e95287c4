//! CLI output formatting for all pipeline stages.
//!
//! Output is **information-centric, not file-centric**: every restaurant leads
//! with its positional index and display name, with slugs and paths as
//! secondary context. Scan and generate output use the same header helper so
//! the same restaurant reads the same way in both.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Restaurants
//! 001 Noodle House
//!     Slug: noodle-house
//!     Category: 麵食
//!     Rating: 4.6 (1,024)
//! 002 餐廳 2
//!     Slug: 2
//!
//! Missing columns
//!     W4Efsd (5)
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html
//! 001 Noodle House → restaurants/noodle-house/index.html
//! 002 餐廳 2 → restaurants/2/index.html
//! Stylesheet → assets/style.css (kept existing)
//!
//! Generated 2 restaurant pages in docs
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure.

use crate::generate::GenerateReport;
use crate::scan::Manifest;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Index + name header shared by every stage.
fn entity_header(index: usize, name: &str) -> String {
    format!("{} {}", format_index(index), name)
}

/// Display a path relative to `root` when possible.
fn relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

/// Format scan stage output listing every built record.
pub fn format_scan_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = vec!["Restaurants".to_string()];

    for (i, r) in manifest.restaurants.iter().enumerate() {
        lines.push(entity_header(i + 1, &r.name));
        lines.push(format!("{}Slug: {}", indent(1), r.slug));
        if !r.category.is_empty() {
            lines.push(format!("{}Category: {}", indent(1), r.category));
        }
        if !r.rating.is_empty() {
            let rating = if r.review_count.is_empty() {
                r.rating.clone()
            } else {
                format!("{} ({})", r.rating, r.review_count)
            };
            lines.push(format!("{}Rating: {}", indent(1), rating));
        }
    }

    if !manifest.missing_columns.is_empty() {
        lines.push(String::new());
        lines.push("Missing columns".to_string());
        for column in &manifest.missing_columns {
            lines.push(format!("{}{}", indent(1), column));
        }
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest) {
    for line in format_scan_output(manifest) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Generate output
// ============================================================================

/// Format generate stage output mapping each restaurant to its page.
pub fn format_generate_output(report: &GenerateReport, output_dir: &Path) -> Vec<String> {
    let mut lines = vec![format!(
        "Home \u{2192} {}",
        relative(&report.index, output_dir)
    )];

    for (i, (name, path)) in report.pages.iter().enumerate() {
        lines.push(format!(
            "{} \u{2192} {}",
            entity_header(i + 1, name),
            relative(path, output_dir)
        ));
    }

    let status = if report.stylesheet_written {
        "written"
    } else {
        "kept existing"
    };
    lines.push(format!(
        "Stylesheet \u{2192} {} ({})",
        relative(&report.stylesheet, output_dir),
        status
    ));

    lines.push(String::new());
    let noun = if report.pages.len() == 1 { "page" } else { "pages" };
    lines.push(format!(
        "Generated {} restaurant {} in {}",
        report.pages.len(),
        noun,
        output_dir.display()
    ));
    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(report: &GenerateReport, output_dir: &Path) {
    for line in format_generate_output(report, output_dir) {
        println!("{}", line);
    }
}
