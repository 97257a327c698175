//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Pages are shown by title and sidebar position, with the source file as
//! an indented `Source:` context line. Headings are listed underneath in
//! document order with the anchor they link to, so `check` output doubles
//! as a preview of the sidebar.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Pages
//! 001 Home (3 headings)
//!     Source: Home.md
//!     # Welcome → Home.html#welcome
//!         ## Setup → Home.html#setup
//!         ## Usage → Home.html#usage
//! 002 FAQ
//!     Source: FAQ.md
//!
//! 2 pages, 3 headings
//! ```
//!
//! ## Build
//!
//! ```text
//! Created: Home.html
//! Created: FAQ.html
//!
//! Built 2 pages in webpages/
//! ```
//!
//! # Architecture
//!
//! Each output has a `format_*` function (returns `Vec<String>` or `String`)
//! for testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.

use crate::emit::EmittedPage;
use crate::headings::{HeadingDescriptor, HeadingLevel};
use crate::site_map::{PageRecord, SiteMap};
use std::path::Path;

// ============================================================================
// Shared helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Page header: index, title and heading count when there are any.
fn page_header(index: usize, page: &PageRecord) -> String {
    match page.headings.len() {
        0 => format!("{} {}", format_index(index), page.page_title),
        n => format!(
            "{} {} ({})",
            format_index(index),
            page.page_title,
            plural(n, "heading")
        ),
    }
}

/// One heading line, indented one level deeper for `<h2>`.
fn heading_line(page: &PageRecord, heading: &HeadingDescriptor) -> String {
    let (indent, marker) = match heading.level {
        HeadingLevel::H1 => ("    ", "#"),
        HeadingLevel::H2 => ("        ", "##"),
    };
    format!(
        "{}{} {} \u{2192} {}#{}",
        indent, marker, heading.text, page.output_filename, heading.id
    )
}

// ============================================================================
// Check output
// ============================================================================

/// Format the page and heading inventory of a site.
pub fn format_check_output(site: &SiteMap) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];

    for (i, page) in site.pages().iter().enumerate() {
        lines.push(page_header(i + 1, page));
        lines.push(format!("    Source: {}", page.source_filename));
        for heading in &page.headings {
            lines.push(heading_line(page, heading));
        }
    }

    let heading_count: usize = site.pages().iter().map(|p| p.headings.len()).sum();
    lines.push(String::new());
    lines.push(format!(
        "{}, {}",
        plural(site.len(), "page"),
        plural(heading_count, "heading")
    ));
    lines
}

pub fn print_check_output(site: &SiteMap) {
    for line in format_check_output(site) {
        println!("{}", line);
    }
}

/// The site map as pretty-printed JSON.
pub fn format_check_json(site: &SiteMap) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(site)
}

// ============================================================================
// Build output
// ============================================================================

pub fn format_created(page: &EmittedPage) -> String {
    format!("Created: {}", page.output_filename)
}

pub fn print_created(page: &EmittedPage) {
    println!("{}", format_created(page));
}

/// Summary printed after all pages are written.
pub fn format_build_summary(pages: &[EmittedPage], output_dir: &Path) -> Vec<String> {
    vec![
        String::new(),
        format!(
            "Built {} in {}/",
            plural(pages.len(), "page"),
            output_dir.display()
        ),
    ]
}

pub fn print_build_summary(pages: &[EmittedPage], output_dir: &Path) {
    for line in format_build_summary(pages, output_dir) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
