//! Heading indexing.
//!
//! Finds every `<h1>` and `<h2>` in a fragment, makes sure each one carries an
//! `id` attribute, and reports them in document order. The ids are what the
//! sidebar links to (`page.html#id`), so they are written back into the HTML
//! that eventually gets emitted.
//!
//! ## Id Derivation
//!
//! A heading without an `id` gets one from its text:
//!
//! ```text
//! "  Quick Start  Guide "  →  "quick-start-guide"
//! ```
//!
//! Trim, lower-case, and collapse every whitespace run into a single `-`.
//! Nothing else is stripped: punctuation survives as-is. An existing `id` is
//! kept verbatim, which makes re-indexing a no-op.
//!
//! Two headings with the same text produce the same id; collisions are not
//! detected.

use crate::dom;
use serde::Serialize;

/// Heading levels that are indexed. Deeper headings are left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadingLevel {
    H1,
    H2,
}

impl HeadingLevel {
    /// Map a tag name (`h1`, `h2`) to a level.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "h1" => Some(Self::H1),
            "h2" => Some(Self::H2),
            _ => None,
        }
    }

    pub fn as_number(self) -> u8 {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
        }
    }
}

impl Serialize for HeadingLevel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_number())
    }
}

/// A level-1 or level-2 heading found on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingDescriptor {
    pub level: HeadingLevel,
    /// Text content with surrounding whitespace trimmed.
    pub text: String,
    /// Fragment identifier, without the leading `#`.
    pub id: String,
}

/// Result of [`index_headings`]: the annotated fragment plus its headings.
#[derive(Debug, Clone)]
pub struct IndexedFragment {
    pub html: String,
    pub headings: Vec<HeadingDescriptor>,
}

/// Derive a fragment identifier from heading text.
pub fn slugify(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Index the `<h1>`/`<h2>` headings of `html`, assigning ids where missing.
///
/// The input is not modified; the returned fragment carries the ids.
pub fn index_headings(html: &str) -> IndexedFragment {
    let body = dom::parse_fragment(html);
    let mut headings = Vec::new();

    for node in body.descendants() {
        let Some(level) = dom::tag_name(&node).and_then(HeadingLevel::from_tag) else {
            continue;
        };
        let Some(element) = node.as_element() else {
            continue;
        };

        let text = node.text_contents();
        let existing = element.attributes.borrow().get("id").map(str::to_owned);
        let id = match existing {
            Some(id) => id,
            None => {
                let id = slugify(&text);
                element.attributes.borrow_mut().insert("id", id.clone());
                id
            }
        };

        headings.push(HeadingDescriptor {
            level,
            text: text.trim().to_string(),
            id,
        });
    }

    log::debug!("indexed {} headings", headings.len());

    IndexedFragment {
        html: dom::inner_html(&body),
        headings,
    }
}
