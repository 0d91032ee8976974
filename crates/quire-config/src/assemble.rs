//! Turns raw declarations into a validated [`SiteConfig`].

use std::sync::LazyLock;

use regex::Regex;

use crate::declaration::{
    BlogDeclaration, Declarations, DocsDeclaration, FooterDeclaration, I18nDeclaration,
    NavItemDeclaration, NavbarDeclaration, PresetDeclaration, ThemeConfigDeclaration, Toggle,
};
use crate::error::{ConfigError, FieldPath};
use crate::pages::PageIndex;
use crate::schema::{
    BlogOptions, BrokenLinkPolicy, DocsOptions, Footer, FooterColumn, FooterStyle, I18n,
    LinkTarget, Logo, NavItem, Navbar, Position, Preset, Prism, SiteConfig, ThemeConfig,
    ThemeOptions,
};

static ORIGIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^/\s?#]+$").expect("valid origin pattern"));
static HTTP_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://\S+$").expect("valid url pattern"));
static LOCALE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{2,8})*$").expect("valid locale pattern")
});

/// An unresolved link that was reported but did not fail the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDiagnostic {
    /// Field path or source file the link was declared in
    pub location: String,
    /// Declared label of the item (or link text)
    pub label: String,
    /// The path that failed to resolve
    pub target: String,
}

/// Result of assembling a configuration.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub config: SiteConfig,
    /// Broken links reported under the `warn` policy
    pub diagnostics: Vec<LinkDiagnostic>,
}

/// Builds validated configurations against a page index.
pub struct Assembler<'a> {
    pages: &'a dyn PageIndex,
}

impl<'a> Assembler<'a> {
    /// Create an assembler that resolves links against `pages`.
    pub fn new(pages: &'a dyn PageIndex) -> Self {
        Self { pages }
    }

    /// Validate declarations, apply defaults and resolve navigation links.
    pub fn assemble(&self, decl: &Declarations) -> Result<Assembly, ConfigError> {
        let config = build_config(decl)?;
        let diagnostics = self.resolve_links(&config)?;

        Ok(Assembly {
            config,
            diagnostics,
        })
    }

    fn resolve_links(&self, config: &SiteConfig) -> Result<Vec<LinkDiagnostic>, ConfigError> {
        let policy = config.on_broken_links;
        let mut diagnostics = Vec::new();

        let navbar_path = FieldPath::root("themeConfig").field("navbar").field("items");
        let footer_path = FieldPath::root("themeConfig").field("footer").field("links");

        let navbar = config
            .theme_config
            .navbar
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| (navbar_path.index(i), item));
        let footer = config
            .theme_config
            .footer
            .links
            .iter()
            .enumerate()
            .flat_map(|(c, column)| {
                let column_path = footer_path.index(c).field("items");
                column
                    .items
                    .iter()
                    .enumerate()
                    .map(move |(i, item)| (column_path.index(i), item))
            });

        for (path, item) in navbar.chain(footer) {
            let target = match item {
                NavItem::Sidebar { sidebar_id, .. } if !self.pages.contains_sidebar(sidebar_id) => {
                    sidebar_id
                }
                NavItem::Link {
                    target: LinkTarget::To(to),
                    ..
                } if !self.pages.contains(to) => to,
                _ => continue,
            };

            match policy {
                BrokenLinkPolicy::Throw => {
                    return Err(ConfigError::BrokenLink {
                        path,
                        label: item.label().to_string(),
                        target: target.clone(),
                    });
                }
                BrokenLinkPolicy::Warn => {
                    tracing::warn!(
                        label = item.label(),
                        path = %target,
                        field = %path,
                        "Broken link: target is not a known page"
                    );
                    diagnostics.push(LinkDiagnostic {
                        location: path.to_string(),
                        label: item.label().to_string(),
                        target: target.clone(),
                    });
                }
                BrokenLinkPolicy::Ignore => {}
            }
        }

        Ok(diagnostics)
    }
}

/// Assemble a configuration, discarding warn-level diagnostics.
pub fn assemble(decl: &Declarations, pages: &dyn PageIndex) -> Result<SiteConfig, ConfigError> {
    Assembler::new(pages).assemble(decl).map(|a| a.config)
}

/// Validate preset declarations on their own.
///
/// Page discovery needs the docs and blog options before the full
/// configuration can be assembled.
pub fn resolve_presets(presets: &[PresetDeclaration]) -> Result<Vec<Preset>, ConfigError> {
    let path = FieldPath::root("presets");
    presets
        .iter()
        .enumerate()
        .map(|(i, preset)| resolve_preset(preset, &path.index(i)))
        .collect()
}

fn build_config(decl: &Declarations) -> Result<SiteConfig, ConfigError> {
    let title = required(&decl.title, FieldPath::root("title"))?;
    let tagline = required(&decl.tagline, FieldPath::root("tagline"))?;
    let favicon = optional(&decl.favicon, FieldPath::root("favicon"))?;

    let url_path = FieldPath::root("url");
    let url = required(&decl.url, url_path.clone())?
        .trim_end_matches('/')
        .to_string();
    if !ORIGIN.is_match(&url) {
        return Err(ConfigError::invalid(
            url_path,
            format!("`{}` must be an absolute http(s) origin without a path", url),
        ));
    }

    let base_path = FieldPath::root("baseUrl");
    let base_url = required(&decl.base_url, base_path.clone())?;
    if !base_url.starts_with('/') || !base_url.ends_with('/') {
        return Err(ConfigError::invalid(
            base_path,
            format!("`{}` must start and end with `/`", base_url),
        ));
    }

    let organization_name =
        optional(&decl.organization_name, FieldPath::root("organizationName"))?;
    let project_name = optional(&decl.project_name, FieldPath::root("projectName"))?;

    let on_broken_links = policy(
        &decl.on_broken_links,
        FieldPath::root("onBrokenLinks"),
        BrokenLinkPolicy::Throw,
    )?;
    let on_broken_markdown_links = policy(
        &decl.on_broken_markdown_links,
        FieldPath::root("onBrokenMarkdownLinks"),
        BrokenLinkPolicy::Warn,
    )?;

    let i18n = match &decl.i18n {
        Some(i18n) => resolve_i18n(i18n, &FieldPath::root("i18n"))?,
        None => I18n::default(),
    };

    let presets = resolve_presets(&decl.presets)?;
    let theme_config = resolve_theme_config(&decl.theme_config, &FieldPath::root("themeConfig"))?;

    Ok(SiteConfig {
        title,
        tagline,
        favicon,
        url,
        base_url,
        organization_name,
        project_name,
        on_broken_links,
        on_broken_markdown_links,
        i18n,
        presets,
        theme_config,
    })
}

fn required(value: &Option<String>, path: FieldPath) -> Result<String, ConfigError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        Some(_) => Err(ConfigError::invalid(path, "must not be empty")),
        None => Err(ConfigError::invalid(path, "is required")),
    }
}

/// An optional field that must not be blank when present.
fn optional(value: &Option<String>, path: FieldPath) -> Result<Option<String>, ConfigError> {
    value
        .as_ref()
        .map(|_| required(value, path))
        .transpose()
}

fn policy(
    value: &Option<String>,
    path: FieldPath,
    default: BrokenLinkPolicy,
) -> Result<BrokenLinkPolicy, ConfigError> {
    match value {
        None => Ok(default),
        Some(v) => BrokenLinkPolicy::parse(v).ok_or_else(|| {
            ConfigError::invalid(
                path,
                format!("unknown policy `{}` (expected ignore, warn or throw)", v),
            )
        }),
    }
}

fn resolve_i18n(decl: &I18nDeclaration, path: &FieldPath) -> Result<I18n, ConfigError> {
    let default_locale = required(&decl.default_locale, path.field("defaultLocale"))?;

    let locales_path = path.field("locales");
    let mut locales: Vec<String> = Vec::with_capacity(decl.locales.len());
    for (i, locale) in decl.locales.iter().enumerate() {
        if !LOCALE.is_match(locale) {
            return Err(ConfigError::invalid(
                locales_path.index(i),
                format!("`{}` is not a valid locale tag", locale),
            ));
        }
        if !locales.contains(locale) {
            locales.push(locale.clone());
        }
    }

    if locales.is_empty() {
        return Err(ConfigError::invalid(locales_path, "must list at least one locale"));
    }
    if !locales.contains(&default_locale) {
        return Err(ConfigError::invalid(
            path.field("defaultLocale"),
            format!("`{}` is not one of the declared locales", default_locale),
        ));
    }

    Ok(I18n {
        default_locale,
        locales,
    })
}

fn resolve_preset(decl: &PresetDeclaration, path: &FieldPath) -> Result<Preset, ConfigError> {
    let name = decl.name().trim();
    if name.is_empty() {
        return Err(ConfigError::invalid(path.clone(), "preset name must not be empty"));
    }

    let options_path = path.index(1);
    let Some(options) = decl.options() else {
        return Ok(Preset {
            name: name.to_string(),
            docs: Some(DocsOptions::default()),
            blog: Some(BlogOptions::default()),
            theme: ThemeOptions::default(),
        });
    };

    let docs = match &options.docs {
        None | Some(Toggle::Enabled(true)) => Some(DocsOptions::default()),
        Some(Toggle::Enabled(false)) => None,
        Some(Toggle::Options(docs)) => Some(resolve_docs(docs, &options_path.field("docs"))?),
    };
    let blog = match &options.blog {
        None | Some(Toggle::Enabled(true)) => Some(BlogOptions::default()),
        Some(Toggle::Enabled(false)) => None,
        Some(Toggle::Options(blog)) => Some(resolve_blog(blog, &options_path.field("blog"))?),
    };
    let theme = ThemeOptions {
        custom_css: options
            .theme
            .as_ref()
            .and_then(|t| t.custom_css.clone())
            .map(|css| css.into_vec())
            .unwrap_or_default(),
    };

    Ok(Preset {
        name: name.to_string(),
        docs,
        blog,
        theme,
    })
}

fn resolve_docs(decl: &DocsDeclaration, path: &FieldPath) -> Result<DocsOptions, ConfigError> {
    let defaults = DocsOptions::default();
    Ok(DocsOptions {
        path: optional(&decl.path, path.field("path"))?.unwrap_or(defaults.path),
        route_base_path: decl
            .route_base_path
            .as_deref()
            .map(|p| p.trim_matches('/').to_string())
            .unwrap_or(defaults.route_base_path),
        sidebar_path: optional(&decl.sidebar_path, path.field("sidebarPath"))?,
        edit_url: edit_url(&decl.edit_url, path.field("editUrl"))?,
    })
}

fn resolve_blog(decl: &BlogDeclaration, path: &FieldPath) -> Result<BlogOptions, ConfigError> {
    let defaults = BlogOptions::default();
    Ok(BlogOptions {
        path: optional(&decl.path, path.field("path"))?.unwrap_or(defaults.path),
        route_base_path: decl
            .route_base_path
            .as_deref()
            .map(|p| p.trim_matches('/').to_string())
            .unwrap_or(defaults.route_base_path),
        show_reading_time: decl.show_reading_time.unwrap_or(defaults.show_reading_time),
        edit_url: edit_url(&decl.edit_url, path.field("editUrl"))?,
    })
}

fn edit_url(value: &Option<String>, path: FieldPath) -> Result<Option<String>, ConfigError> {
    let url = optional(value, path.clone())?;
    match url {
        Some(u) if !HTTP_URL.is_match(&u) => Err(ConfigError::invalid(
            path,
            format!("`{}` must be an absolute http(s) URL", u),
        )),
        other => Ok(other),
    }
}

fn resolve_theme_config(
    decl: &ThemeConfigDeclaration,
    path: &FieldPath,
) -> Result<ThemeConfig, ConfigError> {
    Ok(ThemeConfig {
        image: optional(&decl.image, path.field("image"))?,
        navbar: resolve_navbar(&decl.navbar, &path.field("navbar"))?,
        footer: resolve_footer(&decl.footer, &path.field("footer"))?,
        prism: decl
            .prism
            .as_ref()
            .map(|p| Prism {
                theme: p.theme.clone(),
                dark_theme: p.dark_theme.clone(),
            })
            .unwrap_or_default(),
    })
}

fn resolve_navbar(decl: &NavbarDeclaration, path: &FieldPath) -> Result<Navbar, ConfigError> {
    let logo = match &decl.logo {
        Some(logo) => {
            let logo_path = path.field("logo");
            Some(Logo {
                alt: logo.alt.clone(),
                src: required(&logo.src, logo_path.field("src"))?,
            })
        }
        None => None,
    };

    Ok(Navbar {
        title: optional(&decl.title, path.field("title"))?,
        logo,
        items: resolve_items(&decl.items, &path.field("items"))?,
    })
}

fn resolve_footer(decl: &FooterDeclaration, path: &FieldPath) -> Result<Footer, ConfigError> {
    let style = match decl.style.as_deref() {
        None => FooterStyle::default(),
        Some("dark") => FooterStyle::Dark,
        Some("light") => FooterStyle::Light,
        Some(other) => {
            return Err(ConfigError::invalid(
                path.field("style"),
                format!("unknown footer style `{}` (expected dark or light)", other),
            ));
        }
    };

    let links_path = path.field("links");
    let links = decl
        .links
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let column_path = links_path.index(i);
            Ok(FooterColumn {
                title: required(&column.title, column_path.field("title"))?,
                items: resolve_items(&column.items, &column_path.field("items"))?,
            })
        })
        .collect::<Result<Vec<_>, ConfigError>>()?;

    Ok(Footer {
        style,
        links,
        copyright: decl.copyright.clone(),
    })
}

fn resolve_items(
    items: &[NavItemDeclaration],
    path: &FieldPath,
) -> Result<Vec<NavItem>, ConfigError> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| resolve_item(item, &path.index(i)))
        .collect()
}

fn resolve_item(decl: &NavItemDeclaration, path: &FieldPath) -> Result<NavItem, ConfigError> {
    let label = required(&decl.label, path.field("label"))?;

    let position = match decl.position.as_deref() {
        None => None,
        Some("left") => Some(Position::Left),
        Some("right") => Some(Position::Right),
        Some(other) => {
            return Err(ConfigError::invalid(
                path.field("position"),
                format!("unknown position `{}` (expected left or right)", other),
            ));
        }
    };

    let kind = decl.kind.as_deref().unwrap_or(if decl.sidebar_id.is_some() {
        "docSidebar"
    } else {
        "default"
    });

    match kind {
        "docSidebar" => {
            if decl.to.is_some() || decl.href.is_some() {
                return Err(ConfigError::invalid(
                    path.clone(),
                    "a docSidebar item cannot also declare `to` or `href`",
                ));
            }
            Ok(NavItem::Sidebar {
                sidebar_id: required(&decl.sidebar_id, path.field("sidebarId"))?,
                label,
                position,
            })
        }
        "default" => {
            if decl.sidebar_id.is_some() {
                return Err(ConfigError::invalid(
                    path.field("sidebarId"),
                    "only docSidebar items may declare a sidebarId",
                ));
            }
            let target = match (&decl.to, &decl.href) {
                (Some(_), Some(_)) => {
                    return Err(ConfigError::invalid(
                        path.clone(),
                        format!("item \"{}\" declares both `to` and `href`", label),
                    ));
                }
                (None, None) => {
                    return Err(ConfigError::invalid(
                        path.clone(),
                        format!("item \"{}\" needs one of `to` or `href`", label),
                    ));
                }
                (Some(_), None) => {
                    let to = required(&decl.to, path.field("to"))?;
                    if !to.starts_with('/') {
                        return Err(ConfigError::invalid(
                            path.field("to"),
                            format!("`{}` must be a root-relative path", to),
                        ));
                    }
                    LinkTarget::To(to)
                }
                (None, Some(_)) => LinkTarget::Href(required(&decl.href, path.field("href"))?),
            };
            Ok(NavItem::Link {
                target,
                label,
                position,
            })
        }
        other => Err(ConfigError::invalid(
            path.field("type"),
            format!("unknown item type `{}` (expected docSidebar or default)", other),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::StaticPageIndex;
    use pretty_assertions::assert_eq;

    const SITE: &str = r#"
title: Spider2
tagline: Ergonomic HTTP routing
url: https://spider2.example.com
baseUrl: /
organizationName: example-org
projectName: spider2
onBrokenLinks: warn
i18n:
  defaultLocale: en
  locales: [en]
presets:
  - - classic
    - docs:
        sidebarPath: ./sidebars.yaml
        editUrl: https://github.com/example-org/spider2/docs
      blog:
        showReadingTime: true
      theme:
        customCss: ./src/css/custom.css
themeConfig:
  navbar:
    title: spider2
    items:
      - type: docSidebar
        sidebarId: tutorialSidebar
        position: left
        label: Tutorial
      - href: https://github.com/example-org/spider2
        label: GitHub
        position: right
"#;

    fn decl(source: &str) -> Declarations {
        Declarations::from_yaml(source).unwrap()
    }

    fn full_index() -> StaticPageIndex {
        StaticPageIndex::new()
            .with_page("/")
            .with_page("/blog")
            .with_page("/docs/intro")
            .with_sidebar("tutorialSidebar")
    }

    #[test]
    fn assembles_valid_site() {
        let config = assemble(&decl(SITE), &full_index()).unwrap();

        assert_eq!(config.title, "Spider2");
        assert_eq!(config.on_broken_links, BrokenLinkPolicy::Warn);
        assert_eq!(config.presets.len(), 1);

        let preset = &config.presets[0];
        assert_eq!(preset.name, "classic");
        assert_eq!(preset.theme.custom_css, vec!["./src/css/custom.css".to_string()]);
        assert!(preset.blog.as_ref().unwrap().show_reading_time);
        assert_eq!(
            preset.docs.as_ref().unwrap().sidebar_path.as_deref(),
            Some("./sidebars.yaml")
        );

        let items = &config.theme_config.navbar.items;
        assert_eq!(items.len(), 2);
        assert_eq!(
            items[1],
            NavItem::Link {
                target: LinkTarget::Href("https://github.com/example-org/spider2".to_string()),
                label: "GitHub".to_string(),
                position: Some(Position::Right),
            }
        );
        assert_eq!(
            config.repository_url().as_deref(),
            Some("https://github.com/example-org/spider2")
        );
    }

    #[test]
    fn assemble_is_idempotent() {
        let declarations = decl(SITE);
        let index = full_index();

        let first = assemble(&declarations, &index).unwrap();
        let second = assemble(&declarations, &index).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn applies_defaults() {
        let config = assemble(
            &decl("title: T\ntagline: G\nurl: https://x.dev/\nbaseUrl: /docs-site/\n"),
            &StaticPageIndex::new(),
        )
        .unwrap();

        assert_eq!(config.url, "https://x.dev");
        assert_eq!(config.on_broken_links, BrokenLinkPolicy::Throw);
        assert_eq!(config.on_broken_markdown_links, BrokenLinkPolicy::Warn);
        assert_eq!(config.i18n, I18n::default());
        assert_eq!(config.theme_config.footer.style, FooterStyle::Light);
        assert!(config.presets.is_empty());
    }

    #[test]
    fn markdown_policy_defaults_to_warn_regardless_of_link_policy() {
        for links in ["ignore", "warn", "throw"] {
            let source = format!(
                "title: T\ntagline: G\nurl: https://x.dev\nbaseUrl: /\nonBrokenLinks: {}\n",
                links
            );
            let config = assemble(&decl(&source), &StaticPageIndex::new()).unwrap();
            assert_eq!(config.on_broken_markdown_links, BrokenLinkPolicy::Warn);
        }
    }

    #[test]
    fn rejects_default_locale_outside_locales() {
        let source = "title: T\ntagline: G\nurl: https://x.dev\nbaseUrl: /\ni18n:\n  defaultLocale: fr\n  locales: [en, de]\n";
        let err = assemble(&decl(source), &StaticPageIndex::new()).unwrap_err();

        assert_eq!(
            err.field_path().map(FieldPath::as_str),
            Some("i18n.defaultLocale")
        );
    }

    #[test]
    fn collapses_duplicate_locales() {
        let source = "title: T\ntagline: G\nurl: https://x.dev\nbaseUrl: /\ni18n:\n  defaultLocale: en\n  locales: [en, zh-Hans, en]\n";
        let config = assemble(&decl(source), &StaticPageIndex::new()).unwrap();

        assert_eq!(config.i18n.locales, vec!["en".to_string(), "zh-Hans".to_string()]);
    }

    #[test]
    fn rejects_item_with_to_and_href() {
        let source = r#"
title: T
tagline: G
url: https://x.dev
baseUrl: /
themeConfig:
  footer:
    links:
      - title: More
        items:
          - label: Blog
            to: /blog
            href: https://x.dev/blog
"#;
        let err = assemble(&decl(source), &full_index()).unwrap_err();

        assert_eq!(
            err.field_path().map(FieldPath::as_str),
            Some("themeConfig.footer.links[0].items[0]")
        );
    }

    #[test]
    fn rejects_item_without_target() {
        let source = "title: T\ntagline: G\nurl: https://x.dev\nbaseUrl: /\nthemeConfig:\n  navbar:\n    items:\n      - label: Nowhere\n";
        assert!(assemble(&decl(source), &full_index()).is_err());
    }

    #[test]
    fn rejects_unknown_position() {
        let source = "title: T\ntagline: G\nurl: https://x.dev\nbaseUrl: /\nthemeConfig:\n  navbar:\n    items:\n      - label: Blog\n        to: /blog\n        position: center\n";
        let err = assemble(&decl(source), &full_index()).unwrap_err();

        assert_eq!(
            err.field_path().map(FieldPath::as_str),
            Some("themeConfig.navbar.items[0].position")
        );
    }

    #[test]
    fn rejects_malformed_urls() {
        let bad_base = "title: T\ntagline: G\nurl: https://x.dev\nbaseUrl: docs\n";
        let err = assemble(&decl(bad_base), &StaticPageIndex::new()).unwrap_err();
        assert_eq!(err.field_path().map(FieldPath::as_str), Some("baseUrl"));

        let bad_origin = "title: T\ntagline: G\nurl: https://x.dev/site\nbaseUrl: /\n";
        let err = assemble(&decl(bad_origin), &StaticPageIndex::new()).unwrap_err();
        assert_eq!(err.field_path().map(FieldPath::as_str), Some("url"));
    }

    #[test]
    fn rejects_missing_title() {
        let err = assemble(
            &decl("tagline: G\nurl: https://x.dev\nbaseUrl: /\n"),
            &StaticPageIndex::new(),
        )
        .unwrap_err();
        assert_eq!(err.field_path().map(FieldPath::as_str), Some("title"));
    }

    #[test]
    fn warns_on_unknown_sidebar() {
        let index = StaticPageIndex::new().with_page("/");
        let assembly = Assembler::new(&index).assemble(&decl(SITE)).unwrap();

        assert_eq!(
            assembly.diagnostics,
            vec![LinkDiagnostic {
                location: "themeConfig.navbar.items[0]".to_string(),
                label: "Tutorial".to_string(),
                target: "tutorialSidebar".to_string(),
            }]
        );
    }

    #[test]
    fn throws_on_unresolved_to_reference() {
        let source = r#"
title: T
tagline: G
url: https://x.dev
baseUrl: /
onBrokenLinks: throw
themeConfig:
  footer:
    links:
      - title: Basics
        items:
          - label: Tutorial
            to: /docs/intro
          - label: Routing
            to: /docs/routing
"#;
        let err = assemble(&decl(source), &full_index()).unwrap_err();

        match err {
            ConfigError::BrokenLink { label, target, .. } => {
                assert_eq!(label, "Routing");
                assert_eq!(target, "/docs/routing");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn ignore_policy_is_silent() {
        let source = SITE.replace("onBrokenLinks: warn", "onBrokenLinks: ignore");
        let index = StaticPageIndex::new();
        let assembly = Assembler::new(&index).assemble(&decl(&source)).unwrap();

        assert!(assembly.diagnostics.is_empty());
    }

    #[test]
    fn disabled_blog_is_absent() {
        let presets = resolve_presets(
            &decl("presets:\n  - - classic\n    - blog: false\n").presets,
        )
        .unwrap();

        assert!(presets[0].blog.is_none());
        assert_eq!(presets[0].docs, Some(DocsOptions::default()));
    }

    #[test]
    fn rejects_relative_edit_url() {
        let err = resolve_presets(
            &decl("presets:\n  - - classic\n    - docs:\n        editUrl: github.com/x\n").presets,
        )
        .unwrap_err();

        assert_eq!(
            err.field_path().map(FieldPath::as_str),
            Some("presets[0][1].docs.editUrl")
        );
    }
}
