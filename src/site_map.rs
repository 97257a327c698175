//! Source scanning and per-page processing.
//!
//! Reads every wiki page in the source directory and runs it through the
//! conversion pipeline, producing one [`PageRecord`] per file:
//!
//! ```text
//! Home.md ─► markdown ─► index headings ─► rewrite links ─► sectionize ─► PageRecord
//! ```
//!
//! The order of the HTML stages matters. Headings get their ids before the
//! sectionizer moves them around, and links are rewritten while the document
//! still has its original shape.
//!
//! ## Directory Layout
//!
//! The source directory is flat. Subdirectories and files with other
//! extensions are ignored:
//!
//! ```text
//! readme/
//! ├── config.toml                  # Optional site config
//! ├── template.html                # Optional page template
//! ├── Home.md                      # → Home.html
//! ├── Production-Install.md        # → Production-Install.html
//! └── i2b2-Upgrade.readme          # → i2b2-Upgrade.html
//! ```
//!
//! Files are visited in file name order so that the scan, and everything
//! derived from it, is the same on every platform.

use crate::config::{PagesConfig, SiteConfig};
use crate::headings::{self, HeadingDescriptor, HeadingLevel};
use crate::order::PageOrder;
use crate::{links, markdown, sections};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteMapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// One converted wiki page.
#[derive(Debug, Clone, Serialize)]
pub struct PageRecord {
    /// File name in the source directory (`Home.md`).
    pub source_filename: String,
    /// File name without its extension (`Home`).
    pub page_title: String,
    /// Generated file name (`Home.html`).
    pub output_filename: String,
    /// Level-1 and level-2 headings, in document order.
    pub headings: Vec<HeadingDescriptor>,
    /// Fully processed page body.
    pub html: String,
}

impl PageRecord {
    pub fn h1s(&self) -> impl Iterator<Item = &HeadingDescriptor> {
        self.headings.iter().filter(|h| h.level == HeadingLevel::H1)
    }

    pub fn h2s(&self) -> impl Iterator<Item = &HeadingDescriptor> {
        self.headings.iter().filter(|h| h.level == HeadingLevel::H2)
    }
}

/// All pages of the site, in sidebar order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct SiteMap {
    pages: Vec<PageRecord>,
}

impl SiteMap {
    pub fn new(pages: Vec<PageRecord>) -> Self {
        Self { pages }
    }

    pub fn pages(&self) -> &[PageRecord] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Move pinned titles to the front; everything else keeps its current
    /// relative order.
    pub fn sort_by_order(&mut self, order: &PageOrder) {
        order.sort_by_title(&mut self.pages, |p| p.page_title.as_str());
    }
}

/// Page title for a source file name: the name minus its final extension.
pub fn page_title(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(dot) if dot > 0 => &filename[..dot],
        _ => filename,
    }
}

/// List the page files in `dir`, sorted by file name.
pub fn scan_sources(dir: &Path, pages: &PagesConfig) -> Result<Vec<PathBuf>, SiteMapError> {
    let entries = fs::read_dir(dir).map_err(|source| SiteMapError::Read {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && pages.is_page(&path) {
            files.push(path);
        }
    }
    files.sort();

    log::info!("Found {} pages in {}", files.len(), dir.display());
    Ok(files)
}

/// Convert one page's markdown into a [`PageRecord`].
pub fn build_page(filename: &str, markdown_source: &str) -> PageRecord {
    let html = markdown::to_html(markdown_source);
    let indexed = headings::index_headings(&html);
    let html = links::rewrite_links(&indexed.html);
    let html = sections::sectionize(&html);

    let page_title = page_title(filename).to_string();
    PageRecord {
        source_filename: filename.to_string(),
        output_filename: format!("{page_title}.html"),
        page_title,
        headings: indexed.headings,
        html,
    }
}

/// Read and convert every page in `dir`.
///
/// Pages come back in file name order; apply
/// [`SiteMap::sort_by_order`] for the final order.
pub fn build_site_map(dir: &Path, config: &SiteConfig) -> Result<SiteMap, SiteMapError> {
    let mut pages = Vec::new();
    for path in scan_sources(dir, &config.pages)? {
        let content = fs::read_to_string(&path).map_err(|source| SiteMapError::Read {
            path: path.clone(),
            source,
        })?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        let page = build_page(&filename, &content);
        log::debug!(
            "{} → {} ({} headings)",
            page.source_filename,
            page.output_filename,
            page.headings.len()
        );
        pages.push(page);
    }
    Ok(SiteMap::new(pages))
}
