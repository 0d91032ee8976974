//! Configuration check command.

use std::path::Path;

use anyhow::{Context, Result};
use quire_config::{
    check_markdown_links, resolve_presets, Assembler, Assembly, Declarations, SiteIndex,
};

/// Load declarations, discover pages and assemble the configuration.
pub fn assemble_site(config_path: &Path, site: &Path) -> Result<(SiteIndex, Assembly)> {
    let config_path = if config_path.is_relative() {
        site.join(config_path)
    } else {
        config_path.to_path_buf()
    };

    let declarations = Declarations::load(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    // The page set must be complete before links are resolved.
    let presets = resolve_presets(&declarations.presets)?;
    let index = SiteIndex::discover(site, &presets).context("Failed to discover site pages")?;

    let assembly = Assembler::new(&index).assemble(&declarations)?;

    Ok((index, assembly))
}

/// Run the check command.
pub fn run(config_path: &Path, site: &Path, dump: bool) -> Result<()> {
    tracing::info!("Checking site configuration...");

    let (index, assembly) = assemble_site(config_path, site)?;
    let config = &assembly.config;

    let markdown =
        check_markdown_links(config.on_broken_markdown_links, index.docs(), &index)?;

    for ctx in config.contexts() {
        tracing::debug!("Locale {} served from {}", ctx.locale(), ctx.base_url());
    }

    tracing::info!(
        "Assembled \"{}\" with {} pages, {} docs and {} locales",
        config.title,
        index.pages().len(),
        index.docs().len(),
        config.i18n.locales.len()
    );

    let warnings = assembly.diagnostics.len() + markdown.len();
    if warnings > 0 {
        tracing::warn!("{} broken link(s) left dangling", warnings);
    }

    if dump {
        let json = serde_json::to_string_pretty(config)
            .context("Failed to serialize configuration")?;
        println!("{}", json);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const SITE: &str = r#"
title: Spider2
tagline: Ergonomic HTTP routing
url: https://spider2.example.com
baseUrl: /
onBrokenLinks: throw
presets:
  - - classic
    - docs:
        sidebarPath: sidebars.yaml
themeConfig:
  navbar:
    items:
      - type: docSidebar
        sidebarId: tutorialSidebar
        label: Tutorial
        position: left
      - to: /blog
        label: Blog
        position: left
  footer:
    links:
      - title: Basics
        items:
          - label: Tutorial
            to: /docs/intro
"#;

    fn scaffold(root: &Path) {
        fs::create_dir_all(root.join("docs")).unwrap();
        fs::write(root.join("docs/intro.md"), "# Intro\n\nSee the [blog](/blog).\n").unwrap();
        fs::write(root.join("sidebars.yaml"), "tutorialSidebar:\n  - intro\n").unwrap();
        fs::write(root.join("quire.yaml"), SITE).unwrap();
    }

    #[test]
    fn assembles_discovered_site() {
        let temp = tempdir().unwrap();
        scaffold(temp.path());

        let (index, assembly) = assemble_site(Path::new("quire.yaml"), temp.path()).unwrap();

        assert_eq!(index.docs().len(), 1);
        assert!(assembly.diagnostics.is_empty());
        assert_eq!(assembly.config.theme_config.navbar.items.len(), 2);
    }

    #[test]
    fn fails_on_missing_doc_under_throw() {
        let temp = tempdir().unwrap();
        scaffold(temp.path());
        fs::remove_file(temp.path().join("docs/intro.md")).unwrap();

        let err = assemble_site(Path::new("quire.yaml"), temp.path()).unwrap_err();

        assert!(err.to_string().contains("Tutorial"));
    }

    #[test]
    fn run_succeeds_for_valid_site() {
        let temp = tempdir().unwrap();
        scaffold(temp.path());

        run(Path::new("quire.yaml"), temp.path(), false).unwrap();
    }
}
