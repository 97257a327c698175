//! Intra-site link rewriting.
//!
//! Wiki pages link to each other by source name (`Production-Install`,
//! `./Notes.md`). Once converted, those targets only exist as `.html` files,
//! so every `href` in a page is rewritten with these rules, first match wins:
//!
//! | Input | Output |
//! |-------|--------|
//! | empty, `http://…`, `https://…`, `mailto:…` | unchanged |
//! | `.` or `./` | `./index.html` |
//! | `….html` | unchanged |
//! | `….md` | extension replaced by `.html` |
//! | anything else | `.html` appended |
//!
//! The last rule also applies to references with a fragment:
//! `page#section` becomes `page#section.html`. Existing wikis rely on the
//! current output, so this is kept as-is.

use crate::dom;
use std::borrow::Cow;

const PASSTHROUGH_SCHEMES: &[&str] = &["http://", "https://", "mailto:"];
const SOURCE_EXTENSION: &str = ".md";

/// Rewrite a single link target.
pub fn rewrite_href(url: &str) -> Cow<'_, str> {
    if url.is_empty() || PASSTHROUGH_SCHEMES.iter().any(|s| url.starts_with(s)) {
        return Cow::Borrowed(url);
    }
    if url == "." || url == "./" {
        return Cow::Borrowed("./index.html");
    }
    if url.ends_with(".html") {
        return Cow::Borrowed(url);
    }
    let stem = url.strip_suffix(SOURCE_EXTENSION).unwrap_or(url);
    Cow::Owned(format!("{stem}.html"))
}

/// Rewrite the `href` attribute of every element in `html`.
pub fn rewrite_links(html: &str) -> String {
    let body = dom::parse_fragment(html);
    let mut rewritten = 0usize;

    for node in body.descendants() {
        let Some(element) = node.as_element() else {
            continue;
        };
        let href = element.attributes.borrow().get("href").map(str::to_owned);
        let Some(href) = href else {
            continue;
        };
        let new_href = rewrite_href(&href);
        if new_href != href {
            let new_href = new_href.into_owned();
            element.attributes.borrow_mut().insert("href", new_href);
            rewritten += 1;
        }
    }

    log::debug!("rewrote {rewritten} links");
    dom::inner_html(&body)
}
