//! Site-wide navigation sidebar.
//!
//! One sidebar is rendered for the whole site and injected into every page.
//! It is a three-level tree, each level collapsed until its toggle is clicked:
//!
//! ```text
//! ul.sidebar-root
//! └── li.sidebar-page          [+] Home
//!     └── ul.h1-list           (hidden)
//!         └── li.sidebar-h1    [+] Welcome          → Home.html#welcome
//!             └── ul.h2-list   (hidden)
//!                 ├── li.sidebar-h2  Setup          → Home.html#setup
//!                 └── li.sidebar-h2  Usage          → Home.html#usage
//! ```
//!
//! ## Level-2 Attachment
//!
//! The level-2 list under a level-1 entry is **every** `<h2>` of the page, not
//! just the ones that follow that `<h1>` in the document. A page with two
//! `<h1>`s shows the same `<h2>` list under both. Published wikis are laid out
//! around this, so it is intentional.

use crate::headings::HeadingDescriptor;
use crate::site_map::{PageRecord, SiteMap};
use maud::{Markup, html};

/// Class of the `+` toggle placed before an expandable sidebar entry.
pub const TOGGLE_CLASS: &str = "sidebar-toggle";

/// Render the sidebar for every page of the site, in site map order.
pub fn render_sidebar(site: &SiteMap) -> Markup {
    html! {
        ul.sidebar-root {
            @for page in site.pages() {
                (render_page_item(page))
            }
        }
    }
}

fn toggle() -> Markup {
    html! { span class=(TOGGLE_CLASS) { "+ " } }
}

fn heading_href(page: &PageRecord, heading: &HeadingDescriptor) -> String {
    format!("{}#{}", page.output_filename, heading.id)
}

fn render_page_item(page: &PageRecord) -> Markup {
    let h1s: Vec<&HeadingDescriptor> = page.h1s().collect();
    // Shared by every level-1 entry of the page; see module docs.
    let h2s: Vec<&HeadingDescriptor> = page.h2s().collect();

    html! {
        li.sidebar-page {
            @if !page.headings.is_empty() {
                (toggle())
            }
            a href=(page.output_filename) { (page.page_title) }
            @if !h1s.is_empty() {
                ul.h1-list style="display:none;" {
                    @for h1 in &h1s {
                        li.sidebar-h1 {
                            @if !h2s.is_empty() {
                                (toggle())
                            }
                            a href=(heading_href(page, h1)) { (h1.text) }
                            @if !h2s.is_empty() {
                                ul.h2-list style="display:none;" {
                                    @for h2 in &h2s {
                                        li.sidebar-h2 {
                                            a href=(heading_href(page, h2)) { (h2.text) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site_map::build_page;

    fn site(pages: &[(&str, &str)]) -> SiteMap {
        SiteMap::new(
            pages
                .iter()
                .map(|(name, md)| build_page(name, md))
                .collect(),
        )
    }

    fn render(pages: &[(&str, &str)]) -> String {
        render_sidebar(&site(pages)).into_string()
    }

    #[test]
    fn empty_site_renders_empty_root() {
        assert_eq!(render(&[]), r#"<ul class="sidebar-root"></ul>"#);
    }

    #[test]
    fn page_without_headings_has_no_toggle() {
        let html = render(&[("Plain.md", "just text")]);
        assert_eq!(
            html,
            r#"<ul class="sidebar-root"><li class="sidebar-page"><a href="Plain.html">Plain</a></li></ul>"#
        );
    }

    #[test]
    fn full_tree_for_one_h1_two_h2() {
        let html = render(&[("Home.md", "# Welcome\n## Setup\n## Usage\n")]);
        let expected = concat!(
            r#"<ul class="sidebar-root"><li class="sidebar-page">"#,
            r#"<span class="sidebar-toggle">+ </span><a href="Home.html">Home</a>"#,
            r#"<ul class="h1-list" style="display:none;"><li class="sidebar-h1">"#,
            r#"<span class="sidebar-toggle">+ </span><a href="Home.html#welcome">Welcome</a>"#,
            r#"<ul class="h2-list" style="display:none;">"#,
            r#"<li class="sidebar-h2"><a href="Home.html#setup">Setup</a></li>"#,
            r#"<li class="sidebar-h2"><a href="Home.html#usage">Usage</a></li>"#,
            r#"</ul></li></ul></li></ul>"#,
        );
        assert_eq!(html, expected);
    }

    #[test]
    fn every_h1_gets_every_h2_of_the_page() {
        // Intentional flat attachment: "Intro" precedes "Second" in the
        // document but still appears under both level-1 entries.
        let html = render(&[("P.md", "## Intro\n# First\n## A\n# Second\n## B\n")]);
        let h1_items: Vec<&str> = html.split(r#"<li class="sidebar-h1">"#).skip(1).collect();
        assert_eq!(h1_items.len(), 2);
        for item in h1_items {
            assert!(item.contains("P.html#intro"));
            assert!(item.contains("P.html#a"));
            assert!(item.contains("P.html#b"));
        }
    }

    #[test]
    fn h1_without_any_page_h2_has_no_toggle_or_list() {
        let html = render(&[("P.md", "# Only\n")]);
        assert!(html.contains(r#"<li class="sidebar-h1"><a href="P.html#only">Only</a></li>"#));
        assert!(!html.contains("h2-list"));
    }

    #[test]
    fn page_with_only_h2_gets_toggle_but_no_list() {
        let html = render(&[("P.md", "## Sub\n")]);
        assert_eq!(
            html,
            concat!(
                r#"<ul class="sidebar-root"><li class="sidebar-page">"#,
                r#"<span class="sidebar-toggle">+ </span><a href="P.html">P</a></li></ul>"#,
            )
        );
    }

    #[test]
    fn pages_appear_in_site_map_order() {
        let html = render(&[("B.md", ""), ("A.md", "")]);
        let b = html.find("B.html").unwrap();
        let a = html.find("A.html").unwrap();
        assert!(b < a);
    }

    #[test]
    fn heading_text_is_escaped() {
        let html = render(&[("P.md", "# a &lt;b&gt; c\n")]);
        assert!(html.contains("a &lt;b&gt; c</a>"));
        assert!(!html.contains("<b>"));
    }
}
