//! Markdown to HTML conversion.
//!
//! Uses pulldown-cmark with tables enabled (fenced code blocks are core
//! CommonMark). Fenced code blocks are wrapped in a `codehilite` container
//! and tagged with a `language-*` class. The built-in page template loads
//! highlight.js, which colors every `pre > code` and reads the language from
//! that class:
//!
//! ```text
//! <div class="codehilite"><pre><code class="language-bash">...</code></pre></div>
//! ```

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd, html as md_html};

/// Parser options for wiki pages.
pub fn options() -> Options {
    Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH
}

/// Convert a markdown document to an HTML fragment.
pub fn to_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, options()).map(|event| match event {
        Event::Start(Tag::CodeBlock(kind)) => Event::Html(open_code_block(&kind).into()),
        Event::End(TagEnd::CodeBlock) => Event::Html("</code></pre></div>\n".into()),
        other => other,
    });

    let mut html = String::with_capacity(markdown.len() * 3 / 2);
    md_html::push_html(&mut html, parser);
    html
}

fn open_code_block(kind: &CodeBlockKind) -> String {
    let language = match kind {
        CodeBlockKind::Fenced(info) => info.split_whitespace().next().and_then(language_class),
        CodeBlockKind::Indented => None,
    };
    match language {
        Some(lang) => format!(r#"<div class="codehilite"><pre><code class="language-{lang}">"#),
        None => r#"<div class="codehilite"><pre><code>"#.to_string(),
    }
}

/// Accept only identifier-like language names; anything else is dropped
/// rather than escaped into the class attribute.
fn language_class(lang: &str) -> Option<&str> {
    let valid = !lang.is_empty()
        && lang
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+' | '#' | '.'));
    valid.then_some(lang)
}
