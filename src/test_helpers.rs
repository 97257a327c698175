//! Shared test utilities.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let site = build_site_map(tmp.path(), &SiteConfig::default()).unwrap();
//!
//! let home = find_page(&site, "Home");
//! assert_eq!(home.output_filename, "Home.html");
//! assert_eq!(page_titles(&site), vec!["FAQ", "Home", "Production-Install", "i2b2-Upgrade"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::site_map::{PageRecord, SiteMap};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/wiki/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/wiki");
    for entry in std::fs::read_dir(&fixtures).unwrap() {
        let entry = entry.unwrap();
        std::fs::copy(entry.path(), tmp.path().join(entry.file_name())).unwrap();
    }
    tmp
}

/// Write `(file name, content)` pairs into `dir`.
pub fn write_pages(dir: &Path, pages: &[(&str, &str)]) {
    for (name, content) in pages {
        std::fs::write(dir.join(name), content).unwrap();
    }
}

// =========================================================================
// Lookups
// =========================================================================

/// Page titles in site order.
pub fn page_titles(site: &SiteMap) -> Vec<&str> {
    site.pages().iter().map(|p| p.page_title.as_str()).collect()
}

/// Find a page by title. Panics with the available titles if missing.
pub fn find_page<'a>(site: &'a SiteMap, title: &str) -> &'a PageRecord {
    site.pages()
        .iter()
        .find(|p| p.page_title == title)
        .unwrap_or_else(|| {
            panic!(
                "page {title:?} not found, available: {:?}",
                page_titles(site)
            )
        })
}
