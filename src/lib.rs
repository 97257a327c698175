//! # wiki-site
//!
//! Turns a flat directory of wiki-style markdown pages into a static HTML
//! site: one HTML file per page, each with a shared collapsible sidebar and
//! collapsible `<h2>` sections.
//!
//! # Architecture: Build Pipeline
//!
//! ```text
//! readme/*.md ─► site map ─► page order ─► sidebar ─► template ─► webpages/*.html
//! ```
//!
//! Each page is converted independently into a [`site_map::PageRecord`]
//! (markdown → heading ids → link rewriting → sections). The ordered
//! [`site_map::SiteMap`] then drives the sidebar, which is rendered once and
//! shared by every page.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`dom`] | Small kuchikiki helpers for parsing and serializing HTML fragments |
//! | [`markdown`] | Markdown → HTML with tables, strikethrough and code block classes |
//! | [`headings`] | Assigns stable ids to `<h1>`/`<h2>` and collects them |
//! | [`links`] | Rewrites wiki links to point at generated `.html` files |
//! | [`sections`] | Wraps the content after each `<h2>` in a hidden collapsible section |
//! | [`site_map`] | Scans the source directory and builds one record per page |
//! | [`order`] | Pins configured page titles to the top of the site |
//! | [`sidebar`] | Renders the site-wide navigation tree with Maud |
//! | [`emit`] | Renders pages through a minijinja template and writes them out |
//! | [`pipeline`] | Chains the stages for the CLI and integration tests |
//! | [`config`] | `config.toml` loading, merging, and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Links Follow Wiki Conventions
//!
//! Wiki links point at page names (`Production-Install`) or source files
//! (`Notes.md`). Both are rewritten to the generated file, while absolute
//! URLs, anchors and mail links pass through untouched. See [`links`].
//!
//! ## Sidebar Built Once
//!
//! The sidebar depends only on the ordered site map, so it is rendered a
//! single time and injected verbatim into every page. Changing a page's
//! headings changes the sidebar of every page.
//!
//! ## Templates At Runtime, Fragments At Compile Time
//!
//! Generated fragments (sidebar, toggle buttons, section wrappers) use Maud
//! so that their markup is checked at compile time. The page shell is a
//! minijinja template, so a wiki can bring its own layout without a rebuild.
//!
//! ## Deterministic Output
//!
//! Sources are read in file name order and every stage is a pure transform,
//! so the same input directory always produces byte-identical output.

pub mod config;
pub mod dom;
pub mod emit;
pub mod headings;
pub mod links;
pub mod markdown;
pub mod order;
pub mod output;
pub mod pipeline;
pub mod sections;
pub mod sidebar;
pub mod site_map;

#[cfg(test)]
pub(crate) mod test_helpers;
