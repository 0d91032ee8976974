//! Scaffold a site configuration.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing quire...");

    let files: [(&Path, &str); 4] = [
        (config_path, DEFAULT_CONFIG),
        (Path::new("sidebars.yaml"), DEFAULT_SIDEBARS),
        (Path::new("features.yaml"), DEFAULT_FEATURES),
        (Path::new("docs/intro.md"), DEFAULT_INTRO),
    ];

    for (path, content) in files {
        if path.exists() && !yes {
            tracing::warn!("{} already exists. Use --yes to overwrite.", path.display());
            continue;
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!("Created {}", path.display());
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'quire check' to validate the configuration.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Quire site configuration

title: My Project
tagline: Documentation for my project
url: https://example.com
baseUrl: /

organizationName: my-org
projectName: my-project

onBrokenLinks: throw
onBrokenMarkdownLinks: warn

i18n:
  defaultLocale: en
  locales: [en]

presets:
  - - classic
    - docs:
        sidebarPath: ./sidebars.yaml
      blog: false
      theme:
        customCss: ./src/css/custom.css

themeConfig:
  navbar:
    title: My Project
    items:
      - type: docSidebar
        sidebarId: tutorialSidebar
        position: left
        label: Tutorial
      - href: https://github.com/my-org/my-project
        label: GitHub
        position: right
  footer:
    style: dark
    links:
      - title: Docs
        items:
          - label: Introduction
            to: /docs/intro
"#;

const DEFAULT_SIDEBARS: &str = r#"tutorialSidebar:
  - intro
"#;

const DEFAULT_FEATURES: &str = r#"columns: 3
features:
  - title: Easy to Use
    description: Write your docs in **Markdown** and ship a site.
  - title: Focus on What Matters
    description: Configuration is checked before anything is built.
  - title: Built with Rust
    description: Fast, predictable builds.
"#;

const DEFAULT_INTRO: &str = r#"---
title: Introduction
---

# Introduction

Welcome to your documentation.
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use quire_config::{assemble, Declarations, StaticPageIndex};
    use quire_features::FeatureFile;

    #[test]
    fn scaffolded_config_assembles() {
        let decl = Declarations::from_yaml(DEFAULT_CONFIG).unwrap();
        let index = StaticPageIndex::new()
            .with_page("/docs/intro")
            .with_sidebar("tutorialSidebar");

        let config = assemble(&decl, &index).unwrap();

        assert_eq!(config.title, "My Project");
        assert!(config.presets[0].blog.is_none());
    }

    #[test]
    fn scaffolded_features_parse() {
        let list = FeatureFile::parse(DEFAULT_FEATURES)
            .unwrap()
            .resolve(Path::new("static"))
            .unwrap();

        assert_eq!(list.features.len(), 3);
    }
}
