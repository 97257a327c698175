//! Page rendering and output.
//!
//! Every page is rendered through a [`PageTemplate`] with three values:
//!
//! | Slot | Value | Escaping |
//! |------|-------|----------|
//! | `title` | page title (file name without extension) | escaped |
//! | `sidebar` | the shared sidebar HTML | inserted verbatim |
//! | `content` | the processed page body | inserted verbatim |
//!
//! The production template is [`JinjaTemplate`], backed by minijinja. It is
//! either the built-in `templates/page.html` compiled into the binary or a
//! user template file loaded from disk.
//!
//! Output is always rewritten in full. The output directory is never
//! cleared, so pages whose source was renamed or removed stay behind.

use crate::site_map::SiteMap;
use minijinja::{Environment, Value, context};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Renders a complete HTML document for one page.
pub trait PageTemplate {
    fn render(&self, title: &str, sidebar: &str, content: &str) -> Result<String, EmitError>;
}

const BUILTIN_NAME: &str = "page.html";
const BUILTIN_TEMPLATE: &str = include_str!("../templates/page.html");

/// A minijinja page template.
pub struct JinjaTemplate {
    env: Environment<'static>,
    name: String,
}

impl JinjaTemplate {
    /// The template compiled into the binary.
    pub fn builtin() -> Result<Self, EmitError> {
        let mut env = Environment::new();
        env.add_template(BUILTIN_NAME, BUILTIN_TEMPLATE)?;
        Ok(Self {
            env,
            name: BUILTIN_NAME.to_string(),
        })
    }

    /// Load a template file. Other templates in the same directory can be
    /// pulled in with `{% include %}` / `{% extends %}`.
    pub fn from_file(path: &Path) -> Result<Self, EmitError> {
        let dir = path.parent().unwrap_or(Path::new("."));
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let mut env = Environment::new();
        env.set_loader(minijinja::path_loader(dir));
        // Fail on a missing or malformed template before any page is written.
        env.get_template(&name)?;
        log::info!("Using template {}", path.display());
        Ok(Self { env, name })
    }

    /// Use `path` if given, otherwise the built-in template.
    pub fn load(path: Option<&Path>) -> Result<Self, EmitError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::builtin(),
        }
    }
}

impl PageTemplate for JinjaTemplate {
    fn render(&self, title: &str, sidebar: &str, content: &str) -> Result<String, EmitError> {
        let template = self.env.get_template(&self.name)?;
        let html = template.render(context! {
            title => title,
            sidebar => Value::from_safe_string(sidebar.to_string()),
            content => Value::from_safe_string(content.to_string()),
        })?;
        Ok(html)
    }
}

/// A page that was written to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedPage {
    pub page_title: String,
    pub output_filename: String,
    pub path: PathBuf,
    pub bytes: usize,
}

/// Render every page of `site` and write it to `output_dir`.
///
/// `on_written` is called after each file is written, in site order. The
/// first failure aborts the run; pages written before it stay on disk.
pub fn emit_site(
    site: &SiteMap,
    sidebar: &str,
    template: &dyn PageTemplate,
    output_dir: &Path,
    mut on_written: impl FnMut(&EmittedPage),
) -> Result<Vec<EmittedPage>, EmitError> {
    fs::create_dir_all(output_dir).map_err(|source| EmitError::Write {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut emitted = Vec::with_capacity(site.len());
    for page in site.pages() {
        let html = template.render(&page.page_title, sidebar, &page.html)?;
        let path = output_dir.join(&page.output_filename);
        fs::write(&path, &html).map_err(|source| EmitError::Write {
            path: path.clone(),
            source,
        })?;

        let record = EmittedPage {
            page_title: page.page_title.clone(),
            output_filename: page.output_filename.clone(),
            path,
            bytes: html.len(),
        };
        on_written(&record);
        emitted.push(record);
    }

    log::info!("Wrote {} pages to {}", emitted.len(), output_dir.display());
    Ok(emitted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site_map::build_page;
    use std::cell::RefCell;
    use tempfile::TempDir;

    /// Template that records its inputs and renders a fixed shape.
    #[derive(Default)]
    struct RecordingTemplate {
        calls: RefCell<Vec<(String, String, String)>>,
    }

    impl PageTemplate for RecordingTemplate {
        fn render(&self, title: &str, sidebar: &str, content: &str) -> Result<String, EmitError> {
            self.calls
                .borrow_mut()
                .push((title.to_string(), sidebar.to_string(), content.to_string()));
            Ok(format!("[{title}]{sidebar}|{content}"))
        }
    }

    fn two_page_site() -> SiteMap {
        SiteMap::new(vec![
            build_page("Home.md", "# Home\n"),
            build_page("FAQ.md", "text\n"),
        ])
    }

    #[test]
    fn builtin_template_fills_all_slots() {
        let template = JinjaTemplate::builtin().unwrap();
        let html = template
            .render("My Page", "<ul class=\"sidebar-root\"></ul>", "<p>body</p>")
            .unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>My Page</title>"));
        assert!(html.contains(r#"<ul class="sidebar-root"></ul>"#));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn title_is_escaped_but_html_slots_are_not() {
        let template = JinjaTemplate::builtin().unwrap();
        let html = template.render("<b>", "<nav></nav>", "<i>x</i>").unwrap();
        assert!(html.contains("<title>&lt;b&gt;</title>"));
        assert!(html.contains("<nav></nav>"));
        assert!(html.contains("<i>x</i>"));
    }

    #[test]
    fn builtin_template_has_toggle_script() {
        let template = JinjaTemplate::builtin().unwrap();
        let html = template.render("t", "", "").unwrap();
        assert!(html.contains("h2-toggle"));
        assert!(html.contains("sidebar-toggle"));
    }

    #[test]
    fn builtin_template_highlights_code_blocks() {
        let template = JinjaTemplate::builtin().unwrap();
        let content = crate::markdown::to_html("```sql\nSELECT 1;\n```\n");
        let html = template.render("t", "", &content).unwrap();
        assert!(html.contains(r#"<code class="language-sql">SELECT 1;"#));
        assert!(html.contains("highlight.js/11.9.0/highlight.min.js"));
        assert!(html.contains("hljs.highlightAll();"));
        assert!(html.contains("highlight.js/11.9.0/styles/github.min.css"));
    }

    #[test]
    fn file_template_is_loaded() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("layout.html");
        fs::write(&path, "<h1>{{ title }}</h1>{{ sidebar }}{{ content }}").unwrap();

        let template = JinjaTemplate::from_file(&path).unwrap();
        let html = template.render("A & B", "<nav/>", "<p>c</p>").unwrap();
        assert_eq!(html, "<h1>A &amp; B</h1><nav/><p>c</p>");
    }

    #[test]
    fn missing_template_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = JinjaTemplate::from_file(&tmp.path().join("nope.html"));
        assert!(matches!(result, Err(EmitError::Template(_))));
    }

    #[test]
    fn malformed_template_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.html");
        fs::write(&path, "{% if %}").unwrap();
        assert!(JinjaTemplate::from_file(&path).is_err());
    }

    #[test]
    fn emit_writes_one_file_per_page() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("site");
        let template = RecordingTemplate::default();

        let emitted = emit_site(&two_page_site(), "SIDEBAR", &template, &out, |_| {}).unwrap();

        assert_eq!(emitted.len(), 2);
        assert_eq!(emitted[0].output_filename, "Home.html");
        assert_eq!(emitted[1].output_filename, "FAQ.html");
        let home = fs::read_to_string(out.join("Home.html")).unwrap();
        assert!(home.starts_with("[Home]SIDEBAR|"));
        assert!(home.contains(r#"<h1 id="home">Home</h1>"#));
        assert_eq!(emitted[0].bytes, home.len());
    }

    #[test]
    fn emit_passes_same_sidebar_to_every_page() {
        let tmp = TempDir::new().unwrap();
        let template = RecordingTemplate::default();
        emit_site(&two_page_site(), "SIDEBAR", &template, tmp.path(), |_| {}).unwrap();

        let calls = template.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert!(calls.iter().all(|(_, sidebar, _)| sidebar == "SIDEBAR"));
        assert_eq!(calls[0].0, "Home");
        assert_eq!(calls[1].0, "FAQ");
    }

    #[test]
    fn emit_reports_each_page_in_order() {
        let tmp = TempDir::new().unwrap();
        let mut seen = Vec::new();
        emit_site(
            &two_page_site(),
            "",
            &RecordingTemplate::default(),
            tmp.path(),
            |page| seen.push(page.output_filename.clone()),
        )
        .unwrap();
        assert_eq!(seen, vec!["Home.html", "FAQ.html"]);
    }

    #[test]
    fn emit_overwrites_and_keeps_stale_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("Home.html"), "old").unwrap();
        fs::write(tmp.path().join("Removed.html"), "stale").unwrap();

        emit_site(&two_page_site(), "", &RecordingTemplate::default(), tmp.path(), |_| {})
            .unwrap();

        assert_ne!(fs::read_to_string(tmp.path().join("Home.html")).unwrap(), "old");
        assert_eq!(fs::read_to_string(tmp.path().join("Removed.html")).unwrap(), "stale");
    }
}
