//! Page discovery from site sources.
//!
//! Builds the complete page index a configuration is validated against:
//! doc routes from every enabled docs plugin, sidebar ids, blog routes and
//! the site root.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use walkdir::WalkDir;

use crate::error::ConfigError;
use crate::frontmatter::{extract_frontmatter, Frontmatter};
use crate::pages::{normalize_path, PageIndex, StaticPageIndex};
use crate::schema::{BlogOptions, DocsOptions, Preset};

/// Sidebar registered when a docs plugin has no sidebars file.
pub const DEFAULT_SIDEBAR: &str = "defaultSidebar";

/// Ordering prefix on doc file and directory names, e.g. `01-` in `01-intro.md`.
static NUMBER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\s*[-_.]+\s*").expect("valid number prefix pattern"));

/// A discovered docs page.
#[derive(Debug, Clone)]
pub struct DocPage {
    /// Source file path
    pub source_path: PathBuf,

    /// Path relative to the docs directory
    pub relative_path: PathBuf,

    /// Doc id (`dir/name`, or `dir/<frontmatter id>`)
    pub id: String,

    /// Site-relative route
    pub route: String,

    /// Parsed frontmatter (if present)
    pub frontmatter: Option<Frontmatter>,

    /// Markdown content without frontmatter
    pub content: String,
}

/// Page index discovered from the site directory.
#[derive(Debug, Default)]
pub struct SiteIndex {
    pages: StaticPageIndex,
    docs: Vec<DocPage>,
}

impl SiteIndex {
    /// Scan `root` for everything the given presets will generate.
    pub fn discover(root: &Path, presets: &[Preset]) -> Result<Self, ConfigError> {
        let mut index = Self::default();
        index.pages.insert_page("/");

        for preset in presets {
            if let Some(docs) = &preset.docs {
                index.discover_docs(root, docs)?;
                index.discover_sidebars(root, docs)?;
            }
            if let Some(blog) = &preset.blog {
                index.add_blog(blog);
            }
        }

        tracing::debug!(
            "Discovered {} pages ({} docs) under {}",
            index.pages.len(),
            index.docs.len(),
            root.display()
        );

        Ok(index)
    }

    pub fn docs(&self) -> &[DocPage] {
        &self.docs
    }

    pub fn pages(&self) -> &StaticPageIndex {
        &self.pages
    }

    /// Look up a doc by its source file.
    pub fn doc_for_file(&self, path: &Path) -> Option<&DocPage> {
        self.docs.iter().find(|doc| doc.source_path == path)
    }

    fn discover_docs(&mut self, root: &Path, options: &DocsOptions) -> Result<(), ConfigError> {
        let docs_dir = root.join(&options.path);
        if !docs_dir.is_dir() {
            return Err(ConfigError::Read {
                path: docs_dir,
                source: io::Error::new(io::ErrorKind::NotFound, "docs directory not found"),
            });
        }

        for entry in WalkDir::new(&docs_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if ext != "md" && ext != "mdx" {
                continue;
            }

            let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let (frontmatter, content) =
                extract_frontmatter(&source).map_err(|source| ConfigError::Frontmatter {
                    path: path.to_path_buf(),
                    source,
                })?;

            let relative_path = path.strip_prefix(&docs_dir).unwrap_or(path).to_path_buf();
            let id = doc_id(&relative_path, frontmatter.as_ref());
            let route = doc_route(&options.route_base_path, &relative_path, frontmatter.as_ref());

            self.pages.insert_page(&route);
            self.docs.push(DocPage {
                source_path: path.to_path_buf(),
                relative_path,
                id,
                route,
                frontmatter,
                content: content.to_string(),
            });
        }

        Ok(())
    }

    fn discover_sidebars(&mut self, root: &Path, options: &DocsOptions) -> Result<(), ConfigError> {
        let Some(sidebar_path) = &options.sidebar_path else {
            self.pages.insert_sidebar(DEFAULT_SIDEBAR);
            return Ok(());
        };

        let path = root.join(sidebar_path);
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !matches!(ext, "yaml" | "yml" | "json") {
            return Err(ConfigError::UnsupportedFormat(path));
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        // serde_yaml reads JSON sidebars too.
        let sidebars: BTreeMap<String, serde_yaml::Value> = serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::Parse {
                path: path.clone(),
                message: e.to_string(),
            })?;

        for id in sidebars.keys() {
            self.pages.insert_sidebar(id);
        }

        Ok(())
    }

    fn add_blog(&mut self, options: &BlogOptions) {
        let base = join_route(&options.route_base_path, "");
        self.pages.insert_page(&base);
        self.pages.insert_page(&join_route(&options.route_base_path, "archive"));
        self.pages.insert_page(&join_route(&options.route_base_path, "tags"));
    }
}

impl PageIndex for SiteIndex {
    fn contains(&self, path: &str) -> bool {
        self.pages.contains(path)
    }

    fn contains_sidebar(&self, sidebar_id: &str) -> bool {
        self.pages.contains_sidebar(sidebar_id)
    }
}

/// Directory (with `/` separators) and file stem of a docs-relative path,
/// with ordering prefixes removed.
fn path_stem(relative: &Path) -> (String, String) {
    let dir = relative
        .parent()
        .map(|p| {
            p.components()
                .map(|c| strip_number_prefix(&c.as_os_str().to_string_lossy()))
                .collect::<Vec<_>>()
                .join("/")
        })
        .unwrap_or_default();
    let stem = relative
        .file_stem()
        .and_then(|s| s.to_str())
        .map(strip_number_prefix)
        .unwrap_or_else(|| "index".to_string());
    (dir, stem)
}

fn strip_number_prefix(segment: &str) -> String {
    match NUMBER_PREFIX.replace(segment, "") {
        stripped if stripped.is_empty() => segment.to_string(),
        stripped => stripped.into_owned(),
    }
}

fn doc_id(relative: &Path, frontmatter: Option<&Frontmatter>) -> String {
    let (dir, stem) = path_stem(relative);
    let name = frontmatter.and_then(|f| f.id.clone()).unwrap_or(stem);
    if dir.is_empty() {
        name
    } else {
        format!("{}/{}", dir, name)
    }
}

fn doc_route(base: &str, relative: &Path, frontmatter: Option<&Frontmatter>) -> String {
    let (dir, stem) = path_stem(relative);

    if let Some(slug) = frontmatter.and_then(|f| f.slug.as_deref()) {
        return if slug.starts_with('/') {
            join_route(base, slug)
        } else {
            join_route(base, &format!("{}/{}", dir, slug))
        };
    }

    let is_index = stem.eq_ignore_ascii_case("index") || stem.eq_ignore_ascii_case("readme");
    if is_index {
        join_route(base, &dir)
    } else if dir.is_empty() {
        join_route(base, &stem)
    } else {
        join_route(base, &format!("{}/{}", dir, stem))
    }
}

fn join_route(base: &str, rest: &str) -> String {
    let base = base.trim_matches('/');
    let rest = rest.trim_matches('/');
    normalize_path(&format!("/{}/{}", base, rest).replace("//", "/"))
}
