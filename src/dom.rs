//! HTML fragment parsing and serialization.
//!
//! The post-processing stages work on fragments (the output of the markdown
//! converter), not whole documents. An HTML5 parser always synthesizes an
//! `<html><head><body>` scaffold around its input, so every stage parses with
//! [`parse_fragment`], works on the returned `<body>` element, and writes the
//! result back out with [`inner_html`]. The scaffold never reaches the output.
//!
//! The input is parsed after an explicit `<body>` start tag. Without it, a
//! page that opens with `<style>`, `<script>`, `<meta>` or a comment would
//! have those nodes placed in `<head>` (or on the document) and lost:
//!
//! ```text
//! <style>…</style><h1>T</h1>   parsed as-is      → head: style, body: h1
//! <body><style>…</style><h1>T</h1>                → body: style, h1
//! ```

use kuchikiki::NodeRef;
use kuchikiki::traits::*;
use maud::Markup;

const BODY_START: &str = "<body>";

/// Parse an HTML fragment and return the `<body>` element holding all of
/// its top-level nodes.
///
/// Falls back to the document node itself if the parser produced no body,
/// which cannot happen for HTML5 parsing but keeps the function total.
pub fn parse_fragment(html: &str) -> NodeRef {
    let mut source = String::with_capacity(BODY_START.len() + html.len());
    source.push_str(BODY_START);
    source.push_str(html);
    let document = kuchikiki::parse_html().one(source);
    match document.select_first("body") {
        Ok(body) => body.as_node().clone(),
        Err(()) => document,
    }
}

/// Serialize the children of `node`, in order, without the node's own tags.
pub fn inner_html(node: &NodeRef) -> String {
    node.children().map(|child| child.to_string()).collect()
}

/// Build a standalone element from maud markup, detached and ready to be
/// inserted into another tree.
///
/// Returns `None` if the markup does not start with an element.
pub fn element_from_markup(markup: Markup) -> Option<NodeRef> {
    let body = parse_fragment(&markup.into_string());
    let element = body.first_child().filter(|node| node.as_element().is_some())?;
    element.detach();
    Some(element)
}

/// Local tag name of an element node, or `None` for text, comments, etc.
pub fn tag_name(node: &NodeRef) -> Option<&str> {
    node.as_element().map(|element| &*element.name.local)
}
