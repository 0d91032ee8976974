//! Feature records and their declaration file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::compose::{divides_grid, DEFAULT_COLUMNS};

/// How a feature is illustrated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Illustration {
    /// Raster image reference, rendered as `<img>`
    Image { src: String },
    /// Vector glyph, inlined as SVG markup
    Icon { svg: String },
}

/// One showcased capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub title: String,
    /// Markdown or inline HTML
    pub description: String,
    pub illustration: Option<Illustration>,
}

impl Feature {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            illustration: None,
        }
    }

    pub fn with_image(mut self, src: impl Into<String>) -> Self {
        self.illustration = Some(Illustration::Image { src: src.into() });
        self
    }

    pub fn with_icon(mut self, svg: impl Into<String>) -> Self {
        self.illustration = Some(Illustration::Icon { svg: svg.into() });
        self
    }
}

/// A feature as written in the features file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct FeatureDeclaration {
    pub title: Option<String>,
    pub description: Option<String>,
    pub img: Option<String>,
    /// Path to an SVG file, relative to the static directory
    pub icon: Option<String>,
}

/// The features file: layout settings plus the ordered records.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FeatureFile {
    #[serde(default = "default_columns")]
    pub columns: usize,
    #[serde(default)]
    pub features: Vec<FeatureDeclaration>,
}

fn default_columns() -> usize {
    DEFAULT_COLUMNS
}

/// Validated features in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureList {
    pub columns: usize,
    pub features: Vec<Feature>,
}

impl FeatureFile {
    pub fn parse(source: &str) -> Result<Self, FeatureError> {
        serde_yaml::from_str(source).map_err(|e| FeatureError::InvalidYaml(e.to_string()))
    }

    /// Read a features file from disk.
    pub fn load(path: &Path) -> Result<Self, FeatureError> {
        let content = fs::read_to_string(path).map_err(|source| FeatureError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Validate records and inline icon markup from `static_dir`.
    pub fn resolve(self, static_dir: &Path) -> Result<FeatureList, FeatureError> {
        if !divides_grid(self.columns) {
            return Err(FeatureError::UnsupportedColumns(self.columns));
        }

        let features = self
            .features
            .into_iter()
            .enumerate()
            .map(|(index, decl)| resolve_feature(index, decl, static_dir))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FeatureList {
            columns: self.columns,
            features,
        })
    }
}

fn resolve_feature(
    index: usize,
    decl: FeatureDeclaration,
    static_dir: &Path,
) -> Result<Feature, FeatureError> {
    let title = required(decl.title, index, "title")?;
    let description = required(decl.description, index, "description")?;

    let illustration = match (decl.img, decl.icon) {
        (Some(_), Some(_)) => return Err(FeatureError::AmbiguousIllustration { index, title }),
        (Some(src), None) => Some(Illustration::Image { src }),
        (None, Some(icon)) => Some(Illustration::Icon {
            svg: load_svg(&static_dir.join(icon.trim_start_matches('/')))?,
        }),
        (None, None) => None,
    };

    Ok(Feature {
        title,
        description,
        illustration,
    })
}

fn required(value: Option<String>, index: usize, field: &'static str) -> Result<String, FeatureError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(FeatureError::MissingField { index, field }),
    }
}

fn load_svg(path: &Path) -> Result<String, FeatureError> {
    let markup = fs::read_to_string(path).map_err(|source| FeatureError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let start = markup
        .find("<svg")
        .ok_or_else(|| FeatureError::NotSvg(path.to_path_buf()))?;

    // Drop any XML prolog or doctype before the root element.
    Ok(markup[start..].trim_end().to_string())
}

/// Errors that can occur when loading features.
#[derive(Debug, thiserror::Error)]
pub enum FeatureError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML in features file: {0}")]
    InvalidYaml(String),

    #[error("features[{index}]: `{field}` is required")]
    MissingField { index: usize, field: &'static str },

    #[error("features[{index}] \"{title}\": declare either `img` or `icon`, not both")]
    AmbiguousIllustration { index: usize, title: String },

    #[error("{0} does not contain an <svg> element")]
    NotSvg(PathBuf),

    #[error("columns must divide the 12-column grid (1, 2, 3, 4, 6 or 12), got {0}")]
    UnsupportedColumns(usize),
}
