//! Feature records to landing-page section.

use pulldown_cmark::{html, Options, Parser};

use crate::feature::{Feature, Illustration};
use crate::templates::SectionRenderer;

/// Columns per row when none are configured.
pub const DEFAULT_COLUMNS: usize = 3;

/// Width of the theme's grid.
pub const GRID_WIDTH: usize = 12;

/// One rendered feature card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub title: String,
    /// Description rendered to HTML
    pub description_html: String,
    pub illustration: Option<Illustration>,
}

/// An ordered group of blocks laid out in a wrapping grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    columns: usize,
    blocks: Vec<Block>,
}

impl Section {
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Grid class for one block, e.g. `col--4` for three columns.
    pub fn column_class(&self) -> String {
        format!("col--{}", GRID_WIDTH / self.columns)
    }

    /// Render the section as HTML with image sources resolved against `base_url`.
    pub fn render(&self, base_url: &str) -> Result<String, minijinja::Error> {
        SectionRenderer::new().render(self, base_url)
    }
}

/// Compose features into a section using the default column count.
pub fn compose(features: &[Feature]) -> Section {
    compose_with_columns(features, DEFAULT_COLUMNS)
}

/// Compose features into a section of `columns` blocks per row.
///
/// Block order follows `features`. A column count that does not divide the
/// grid is rounded down to the nearest one that does.
pub fn compose_with_columns(features: &[Feature], columns: usize) -> Section {
    Section {
        columns: fit_to_grid(columns),
        blocks: features.iter().map(to_block).collect(),
    }
}

/// Whether `columns` blocks fill a grid row exactly.
pub fn divides_grid(columns: usize) -> bool {
    columns > 0 && GRID_WIDTH % columns == 0
}

fn fit_to_grid(columns: usize) -> usize {
    (1..=columns.min(GRID_WIDTH))
        .rev()
        .find(|&n| divides_grid(n))
        .unwrap_or(1)
}

fn to_block(feature: &Feature) -> Block {
    Block {
        title: feature.title.clone(),
        description_html: render_markdown(&feature.description),
        illustration: feature.illustration.clone(),
    }
}

fn render_markdown(content: &str) -> String {
    let options = Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(content, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_block_per_feature_in_order() {
        let features: Vec<Feature> = (0..7)
            .map(|i| Feature::new(format!("Feature {}", i), "text"))
            .collect();

        let section = compose(&features);

        assert_eq!(section.blocks().len(), 7);
        for (i, block) in section.blocks().iter().enumerate() {
            assert_eq!(block.title, format!("Feature {}", i));
        }
    }

    #[test]
    fn empty_input_gives_empty_section() {
        assert!(compose(&[]).blocks().is_empty());
    }

    #[test]
    fn renders_description_markup() {
        let section = compose(&[Feature::new("DRY", "Reuse **components**.")]);

        assert_eq!(
            section.blocks()[0].description_html,
            "<p>Reuse <strong>components</strong>.</p>"
        );
    }

    #[test]
    fn clamps_columns() {
        assert_eq!(compose(&[]).column_class(), "col--4");
        assert_eq!(compose_with_columns(&[], 0).columns(), 1);
        assert_eq!(compose_with_columns(&[], 40).column_class(), "col--1");
        assert_eq!(compose_with_columns(&[], 2).column_class(), "col--6");
    }

    #[test]
    fn rounds_columns_down_to_grid_divisors() {
        assert_eq!(compose_with_columns(&[], 5).columns(), 4);
        assert_eq!(compose_with_columns(&[], 5).column_class(), "col--3");
        assert_eq!(compose_with_columns(&[], 11).columns(), 6);
        assert_eq!(compose_with_columns(&[], 12).column_class(), "col--1");
        assert!(divides_grid(6));
        assert!(!divides_grid(7));
        assert!(!divides_grid(0));
    }

    #[test]
    fn does_not_modify_input() {
        let features = vec![Feature::new("A", "a").with_image("a.png")];
        let before = features.clone();

        let _ = compose(&features);

        assert_eq!(features, before);
    }
}
