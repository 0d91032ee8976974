//! Template engine for rendering feature sections.

use minijinja::{context, Environment};
use serde::Serialize;

use crate::compose::Section;
use crate::feature::Illustration;

/// A block as seen by the template.
#[derive(Debug, Clone, Serialize)]
struct BlockView<'a> {
    title: &'a str,
    description: &'a str,
    image: Option<String>,
    icon: Option<&'a str>,
}

/// Section renderer using minijinja.
pub struct SectionRenderer {
    env: Environment<'static>,
}

impl SectionRenderer {
    /// Create a renderer with the built-in section template.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template("section.html", SECTION_TEMPLATE)
            .expect("Failed to add section template");

        Self { env }
    }

    /// Render a section; relative image sources are prefixed with `base_url`.
    pub fn render(&self, section: &Section, base_url: &str) -> Result<String, minijinja::Error> {
        let blocks: Vec<BlockView<'_>> = section
            .blocks()
            .iter()
            .map(|block| BlockView {
                title: &block.title,
                description: &block.description_html,
                image: match &block.illustration {
                    Some(Illustration::Image { src }) => {
                        Some(escape_attr(&resolve_src(base_url, src)))
                    }
                    _ => None,
                },
                icon: match &block.illustration {
                    Some(Illustration::Icon { svg }) => Some(svg.as_str()),
                    _ => None,
                },
            })
            .collect();

        let tmpl = self.env.get_template("section.html")?;
        tmpl.render(context! {
            column_class => section.column_class(),
            blocks => blocks,
        })
    }
}

impl Default for SectionRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape a value for a double-quoted attribute, leaving slashes intact.
fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Prefix site-relative asset paths with the base URL.
fn resolve_src(base_url: &str, src: &str) -> String {
    let external = src.starts_with("//")
        || src.starts_with("data:")
        || src.starts_with("http://")
        || src.starts_with("https://");
    if external {
        src.to_string()
    } else {
        format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            src.trim_start_matches('/')
        )
    }
}

const SECTION_TEMPLATE: &str = r##"<section class="features">
  <div class="container">
    <div class="row">
{%- for block in blocks %}
      <div class="col {{ column_class }}">
{%- if block.image %}
        <div class="text--center">
          <img class="featureSvg" src="{{ block.image | safe }}" alt="{{ block.title }}">
        </div>
{%- elif block.icon %}
        <div class="text--center">
          <span class="featureSvg" role="img">{{ block.icon | safe }}</span>
        </div>
{%- endif %}
        <div class="text--center padding-horiz--md">
          <h3 class="feature-heading">{{ block.title }}</h3>
          {{ block.description | safe }}
        </div>
      </div>
{%- endfor %}
    </div>
  </div>
</section>
"##;
