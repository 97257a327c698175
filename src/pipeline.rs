//! End-to-end pipeline used by the CLI and integration tests.
//!
//! ```text
//! load config ─► build site map ─► apply page order ─► render sidebar ─► emit pages
//! ```
//!
//! [`load_site`] stops after ordering and writes nothing; [`build_site`] runs
//! every stage.

use crate::config::{self, ConfigError, SiteConfig};
use crate::emit::{self, EmitError, EmittedPage, JinjaTemplate};
use crate::site_map::{self, SiteMap, SiteMapError};
use crate::sidebar;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    SiteMap(#[from] SiteMapError),
    #[error("{0}")]
    Emit(#[from] EmitError),
}

/// Load the config for `source` and build its ordered site map.
pub fn load_site(source: &Path) -> Result<(SiteConfig, SiteMap), PipelineError> {
    let config = config::load_config(source)?;
    let mut site = site_map::build_site_map(source, &config)?;
    site.sort_by_order(&config.pages.order);
    Ok((config, site))
}

/// Build the site in `source` into `output`.
///
/// `on_written` is called once per page as it is written.
pub fn build_site(
    source: &Path,
    output: &Path,
    on_written: impl FnMut(&EmittedPage),
) -> Result<Vec<EmittedPage>, PipelineError> {
    let (config, site) = load_site(source)?;
    let sidebar = sidebar::render_sidebar(&site).into_string();
    let template_path = config.template_path(source);
    let template = JinjaTemplate::load(template_path.as_deref())?;
    let pages = emit::emit_site(&site, &sidebar, &template, output, on_written)?;
    Ok(pages)
}
