//! Collapsible `<h2>` sections.
//!
//! Restructures the top level of a page so each `<h2>` owns the content that
//! follows it, up to the next `<h2>`:
//!
//! ```text
//! <h1>T</h1>                    <h1>T</h1>
//! <p>intro</p>                  <p>intro</p>
//! <h2>Install</h2>       →      <h2><button class="h2-toggle">+</button>Install</h2>
//! <p>step 1</p>                 <div class="collapsible-section" style="display:none;">
//! <p>step 2</p>                   <p>step 1</p><p>step 2</p>
//!                               </div>
//! ```
//!
//! Only top-level nodes are considered. Content before the first `<h2>` is
//! left as-is, and a page without any `<h2>` comes out unchanged.
//! Sections are never nested; headings and their containers alternate.
//!
//! The page template is responsible for the script that flips
//! `display:none` when a toggle is clicked.

use crate::dom;
use kuchikiki::NodeRef;
use maud::{Markup, PreEscaped, html};

/// Class of the button injected into every `<h2>`.
pub const TOGGLE_CLASS: &str = "h2-toggle";
/// Class of the container wrapping a section's content.
pub const SECTION_CLASS: &str = "collapsible-section";

fn toggle_button() -> Markup {
    html! { button class=(TOGGLE_CLASS) { "+" } }
}

fn section_container(nodes: &[NodeRef]) -> Markup {
    let inner: String = nodes.iter().map(|node| node.to_string()).collect();
    html! {
        div class=(SECTION_CLASS) style="display:none;" { (PreEscaped(inner)) }
    }
}

/// Wrap the content following each top-level `<h2>` in a hidden container.
pub fn sectionize(html: &str) -> String {
    let body = dom::parse_fragment(html);
    let top_level: Vec<NodeRef> = body.children().collect();

    let mut out = String::with_capacity(html.len() + 128);
    // `None` until the first <h2>; afterwards the nodes of the open section.
    let mut section: Option<Vec<NodeRef>> = None;
    let mut count = 0usize;

    for node in top_level {
        if dom::tag_name(&node) == Some("h2") {
            if let Some(nodes) = section.take() {
                out.push_str(&section_container(&nodes).into_string());
            }
            if let Some(button) = dom::element_from_markup(toggle_button()) {
                node.prepend(button);
            }
            out.push_str(&node.to_string());
            section = Some(Vec::new());
            count += 1;
        } else if let Some(nodes) = section.as_mut() {
            nodes.push(node);
        } else {
            out.push_str(&node.to_string());
        }
    }

    if let Some(nodes) = section {
        out.push_str(&section_container(&nodes).into_string());
    }

    log::debug!("wrapped {count} collapsible sections");
    out
}
