//! Validated, immutable site configuration.

use serde::Serialize;

/// Build-time enforcement level for unresolved internal references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BrokenLinkPolicy {
    Ignore,
    Warn,
    Throw,
}

impl BrokenLinkPolicy {
    /// Parse a policy value (`ignore`, `warn` or `throw`).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ignore" => Some(Self::Ignore),
            "warn" => Some(Self::Warn),
            "throw" => Some(Self::Throw),
            _ => None,
        }
    }
}

/// Locale settings. `default_locale` is always a member of `locales`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct I18n {
    pub default_locale: String,
    pub locales: Vec<String>,
}

impl Default for I18n {
    fn default() -> Self {
        Self {
            default_locale: "en".to_string(),
            locales: vec!["en".to_string()],
        }
    }
}

/// A named bundle of generator behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub name: String,
    pub docs: Option<DocsOptions>,
    pub blog: Option<BlogOptions>,
    pub theme: ThemeOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocsOptions {
    /// Source directory, relative to the site root
    pub path: String,
    /// URL segment docs are served under (no slashes)
    pub route_base_path: String,
    pub sidebar_path: Option<String>,
    pub edit_url: Option<String>,
}

impl Default for DocsOptions {
    fn default() -> Self {
        Self {
            path: "docs".to_string(),
            route_base_path: "docs".to_string(),
            sidebar_path: None,
            edit_url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogOptions {
    pub path: String,
    pub route_base_path: String,
    pub show_reading_time: bool,
    pub edit_url: Option<String>,
}

impl Default for BlogOptions {
    fn default() -> Self {
        Self {
            path: "blog".to_string(),
            route_base_path: "blog".to_string(),
            show_reading_time: false,
            edit_url: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeOptions {
    pub custom_css: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Left,
    Right,
}

/// Where a direct link points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkTarget {
    /// Site-internal path, checked against the page index
    To(String),
    /// External URL, never checked
    Href(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NavItem {
    #[serde(rename = "docSidebar", rename_all = "camelCase")]
    Sidebar {
        sidebar_id: String,
        label: String,
        position: Option<Position>,
    },
    #[serde(rename = "default")]
    Link {
        target: LinkTarget,
        label: String,
        position: Option<Position>,
    },
}

impl NavItem {
    pub fn label(&self) -> &str {
        match self {
            Self::Sidebar { label, .. } | Self::Link { label, .. } => label,
        }
    }

    pub fn position(&self) -> Option<Position> {
        match self {
            Self::Sidebar { position, .. } | Self::Link { position, .. } => *position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Logo {
    pub alt: Option<String>,
    pub src: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Navbar {
    pub title: Option<String>,
    pub logo: Option<Logo>,
    pub items: Vec<NavItem>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    Dark,
    #[default]
    Light,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterColumn {
    pub title: String,
    pub items: Vec<NavItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub style: FooterStyle,
    pub links: Vec<FooterColumn>,
    pub copyright: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Prism {
    pub theme: Option<String>,
    pub dark_theme: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ThemeConfig {
    pub image: Option<String>,
    pub navbar: Navbar,
    pub footer: Footer,
    pub prism: Prism,
}

/// The assembled site configuration handed to the page generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub title: String,
    pub tagline: String,
    pub favicon: Option<String>,
    pub url: String,
    pub base_url: String,
    pub organization_name: Option<String>,
    pub project_name: Option<String>,
    pub on_broken_links: BrokenLinkPolicy,
    pub on_broken_markdown_links: BrokenLinkPolicy,
    pub i18n: I18n,
    pub presets: Vec<Preset>,
    pub theme_config: ThemeConfig,
}

impl SiteConfig {
    /// Source-hosting URL derived from the organization and project names.
    pub fn repository_url(&self) -> Option<String> {
        match (&self.organization_name, &self.project_name) {
            (Some(org), Some(project)) => Some(format!("https://github.com/{}/{}", org, project)),
            _ => None,
        }
    }

    /// All navigation items: navbar first, then footer columns in order.
    pub fn nav_items(&self) -> impl Iterator<Item = &NavItem> {
        self.theme_config.navbar.items.iter().chain(
            self.theme_config
                .footer
                .links
                .iter()
                .flat_map(|column| column.items.iter()),
        )
    }
}
