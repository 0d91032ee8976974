//! Features section command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use quire_config::BuildContext;
use quire_features::{compose_with_columns, FeatureFile};

use crate::commands::check::assemble_site;

/// Arguments for the features command.
pub struct FeaturesArgs<'a> {
    pub config: &'a Path,
    pub site: &'a Path,
    pub file: &'a Path,
    pub static_dir: &'a Path,
    pub locale: Option<&'a str>,
    pub output: Option<&'a Path>,
}

/// Run the features command.
pub fn run(args: FeaturesArgs<'_>) -> Result<()> {
    // The configuration is complete before anything is rendered.
    let (_, assembly) = assemble_site(args.config, args.site)?;
    let config = &assembly.config;

    let ctx = match args.locale {
        Some(locale) => BuildContext::new(config, locale)
            .with_context(|| format!("Locale '{}' is not declared in i18n.locales", locale))?,
        None => BuildContext::default_locale(config),
    };

    let file = site_path(args.site, args.file);
    let html = render_features(&file, &site_path(args.site, args.static_dir), &ctx)?;

    match args.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).context("Failed to create output directory")?;
            }
            fs::write(path, &html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote features section to {}", path.display());
        }
        None => print!("{}", html),
    }

    Ok(())
}

/// Resolve a relative path against the site directory.
fn site_path(site: &Path, path: &Path) -> PathBuf {
    if path.is_relative() {
        site.join(path)
    } else {
        path.to_path_buf()
    }
}

/// Load, compose and render a features file for one locale.
pub fn render_features(file: &Path, static_dir: &Path, ctx: &BuildContext<'_>) -> Result<String> {
    let list = FeatureFile::load(file)
        .and_then(|f| f.resolve(static_dir))
        .with_context(|| format!("Failed to load features from {}", file.display()))?;

    let section = compose_with_columns(&list.features, list.columns);
    tracing::debug!(
        "Composed {} feature blocks for locale {}",
        section.blocks().len(),
        ctx.locale()
    );

    section
        .render(&ctx.base_url())
        .context("Failed to render features section")
}
