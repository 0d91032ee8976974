//! Raw site declarations as written by the site author.
//!
//! Every field is loose (`Option`, `String`) so that invariant failures are
//! reported by the assembler with a field path instead of by the
//! deserializer.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// The full nested declaration object.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Declarations {
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub favicon: Option<String>,
    pub url: Option<String>,
    pub base_url: Option<String>,
    pub organization_name: Option<String>,
    pub project_name: Option<String>,
    pub on_broken_links: Option<String>,
    pub on_broken_markdown_links: Option<String>,
    pub i18n: Option<I18nDeclaration>,
    #[serde(default)]
    pub presets: Vec<PresetDeclaration>,
    #[serde(default)]
    pub theme_config: ThemeConfigDeclaration,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct I18nDeclaration {
    pub default_locale: Option<String>,
    #[serde(default)]
    pub locales: Vec<String>,
}

/// A preset entry: `[name, options]`, `{name, options}` or a bare name.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PresetDeclaration {
    Pair(String, PresetOptionsDeclaration),
    Named {
        name: String,
        #[serde(default)]
        options: PresetOptionsDeclaration,
    },
    Bare(String),
}

impl PresetDeclaration {
    pub fn name(&self) -> &str {
        match self {
            Self::Pair(name, _) | Self::Named { name, .. } | Self::Bare(name) => name,
        }
    }

    pub fn options(&self) -> Option<&PresetOptionsDeclaration> {
        match self {
            Self::Pair(_, options) | Self::Named { options, .. } => Some(options),
            Self::Bare(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PresetOptionsDeclaration {
    pub docs: Option<Toggle<DocsDeclaration>>,
    pub blog: Option<Toggle<BlogDeclaration>>,
    pub theme: Option<ThemeDeclaration>,
}

/// A plugin section that is either switched on/off or configured.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Toggle<T> {
    Enabled(bool),
    Options(T),
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocsDeclaration {
    pub path: Option<String>,
    pub route_base_path: Option<String>,
    pub sidebar_path: Option<String>,
    pub edit_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogDeclaration {
    pub path: Option<String>,
    pub route_base_path: Option<String>,
    pub show_reading_time: Option<bool>,
    pub edit_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDeclaration {
    pub custom_css: Option<OneOrMany>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(value) => vec![value],
            Self::Many(values) => values,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfigDeclaration {
    pub image: Option<String>,
    #[serde(default)]
    pub navbar: NavbarDeclaration,
    #[serde(default)]
    pub footer: FooterDeclaration,
    pub prism: Option<PrismDeclaration>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct NavbarDeclaration {
    pub title: Option<String>,
    pub logo: Option<LogoDeclaration>,
    #[serde(default)]
    pub items: Vec<NavItemDeclaration>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct LogoDeclaration {
    pub alt: Option<String>,
    pub src: Option<String>,
}

/// A navigation entry before it is classified as a sidebar or direct link.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NavItemDeclaration {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub sidebar_id: Option<String>,
    pub to: Option<String>,
    pub href: Option<String>,
    pub label: Option<String>,
    pub position: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct FooterDeclaration {
    pub style: Option<String>,
    #[serde(default)]
    pub links: Vec<FooterColumnDeclaration>,
    pub copyright: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct FooterColumnDeclaration {
    pub title: Option<String>,
    #[serde(default)]
    pub items: Vec<NavItemDeclaration>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PrismDeclaration {
    pub theme: Option<String>,
    pub dark_theme: Option<String>,
}

impl Declarations {
    /// Load declarations from a `.toml`, `.yaml`/`.yml` or `.json` file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let parsed = match ext {
            "toml" => toml::from_str(&content).map_err(|e| e.to_string()),
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
            "json" => serde_json::from_str(&content).map_err(|e| e.to_string()),
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };

        let declarations = parsed.map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })?;

        tracing::debug!("Loaded declarations from {}", path.display());
        Ok(declarations)
    }

    /// Parse declarations from a YAML string.
    pub fn from_yaml(source: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(source)
    }
}
