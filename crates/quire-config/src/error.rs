//! Configuration errors and field paths.

use std::fmt;
use std::path::PathBuf;

use crate::frontmatter::FrontmatterError;

/// Dotted path to a declaration field, e.g. `themeConfig.navbar.items[1].to`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldPath(String);

impl FieldPath {
    /// Path to a top-level field.
    pub fn root(field: &str) -> Self {
        Self(field.to_string())
    }

    /// Path to a nested field.
    pub fn field(&self, name: &str) -> Self {
        if self.0.is_empty() {
            Self::root(name)
        } else {
            Self(format!("{}.{}", self.0, name))
        }
    }

    /// Path to a sequence element.
    pub fn index(&self, idx: usize) -> Self {
        Self(format!("{}[{}]", self.0, idx))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors raised while loading or assembling a site configuration.
///
/// All of these are build-time hard failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration at `{path}`: {message}")]
    Invalid { path: FieldPath, message: String },

    #[error("Broken link at `{path}`: item \"{label}\" points to `{target}`, which is not a known page")]
    BrokenLink {
        path: FieldPath,
        label: String,
        target: String,
    },

    #[error("Broken markdown link in {source_file}: `{target}` does not resolve to a page")]
    BrokenMarkdownLink { source_file: String, target: String },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("Frontmatter error in {path}: {source}")]
    Frontmatter {
        path: PathBuf,
        #[source]
        source: FrontmatterError,
    },
}

impl ConfigError {
    pub(crate) fn invalid(path: FieldPath, message: impl Into<String>) -> Self {
        Self::Invalid {
            path,
            message: message.into(),
        }
    }

    /// Field path of the offending declaration, if the error has one.
    pub fn field_path(&self) -> Option<&FieldPath> {
        match self {
            Self::Invalid { path, .. } | Self::BrokenLink { path, .. } => Some(path),
            _ => None,
        }
    }
}
