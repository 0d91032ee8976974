//! The set of pages a build will produce.
//!
//! Link validation only needs membership checks, so the generator's page
//! discovery is represented by the [`PageIndex`] trait. [`StaticPageIndex`]
//! is a plain in-memory set; [`crate::discover::SiteIndex`] fills one from
//! the site sources.

use std::collections::BTreeSet;

/// Membership lookup over the pages and sidebars of a site.
pub trait PageIndex {
    /// Whether a page is generated at this site-relative path.
    fn contains(&self, path: &str) -> bool;

    /// Whether a sidebar with this id is declared.
    fn contains_sidebar(&self, _sidebar_id: &str) -> bool {
        false
    }
}

/// In-memory page index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticPageIndex {
    pages: BTreeSet<String>,
    sidebars: BTreeSet<String>,
}

impl StaticPageIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page path (normalized on insert).
    pub fn with_page(mut self, path: &str) -> Self {
        self.insert_page(path);
        self
    }

    pub fn with_sidebar(mut self, sidebar_id: &str) -> Self {
        self.insert_sidebar(sidebar_id);
        self
    }

    pub fn insert_page(&mut self, path: &str) {
        self.pages.insert(normalize_path(path));
    }

    pub fn insert_sidebar(&mut self, sidebar_id: &str) {
        self.sidebars.insert(sidebar_id.to_string());
    }

    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(String::as_str)
    }

    pub fn sidebars(&self) -> impl Iterator<Item = &str> {
        self.sidebars.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl PageIndex for StaticPageIndex {
    fn contains(&self, path: &str) -> bool {
        self.pages.contains(&normalize_path(path))
    }

    fn contains_sidebar(&self, sidebar_id: &str) -> bool {
        self.sidebars.contains(sidebar_id)
    }
}

/// Normalize a site-relative path for lookup.
///
/// Strips query and fragment, ensures a leading slash and drops the
/// trailing slash (except for the root).
pub fn normalize_path(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');

    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}
