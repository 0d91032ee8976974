//! Cross-reference checks inside docs markdown.

use std::path::{Component, Path, PathBuf};

use pulldown_cmark::{Event, LinkType, Options, Parser, Tag, TagEnd};

use crate::assemble::LinkDiagnostic;
use crate::discover::DocPage;
use crate::error::ConfigError;
use crate::pages::PageIndex;
use crate::schema::BrokenLinkPolicy;

/// A link found in a markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownLink {
    /// Link text
    pub text: String,
    /// Destination as written
    pub dest: String,
}

/// Collect every inline and reference link from markdown content.
///
/// Email autolinks are not page references and are left out.
pub fn extract_links(content: &str) -> Vec<MarkdownLink> {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let mut links = Vec::new();
    let mut current: Option<MarkdownLink> = None;

    for event in Parser::new_ext(content, options) {
        match event {
            Event::Start(Tag::Link {
                link_type: LinkType::Email,
                ..
            }) => {}
            Event::Start(Tag::Link { dest_url, .. }) => {
                current = Some(MarkdownLink {
                    text: String::new(),
                    dest: dest_url.to_string(),
                });
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(link) = current.as_mut() {
                    link.text.push_str(&text);
                }
            }
            Event::End(TagEnd::Link) => {
                if let Some(link) = current.take() {
                    links.push(link);
                }
            }
            _ => {}
        }
    }

    links
}

/// Check links between docs, applying the markdown broken-link policy.
///
/// Links with a scheme and pure fragments are skipped. Links to `.md`/`.mdx`
/// files must name a discovered doc; other paths must be in `pages`.
pub fn check_markdown_links(
    policy: BrokenLinkPolicy,
    docs: &[DocPage],
    pages: &dyn PageIndex,
) -> Result<Vec<LinkDiagnostic>, ConfigError> {
    let mut diagnostics = Vec::new();

    for doc in docs {
        for link in extract_links(&doc.content) {
            if resolves(doc, &link.dest, docs, pages) {
                continue;
            }

            let location = doc.source_path.display().to_string();
            match policy {
                BrokenLinkPolicy::Throw => {
                    return Err(ConfigError::BrokenMarkdownLink {
                        source_file: location,
                        target: link.dest,
                    });
                }
                BrokenLinkPolicy::Warn => {
                    tracing::warn!(
                        label = %link.text,
                        path = %link.dest,
                        file = %location,
                        "Broken markdown link"
                    );
                    diagnostics.push(LinkDiagnostic {
                        location,
                        label: link.text,
                        target: link.dest,
                    });
                }
                BrokenLinkPolicy::Ignore => {}
            }
        }
    }

    Ok(diagnostics)
}

fn resolves(doc: &DocPage, dest: &str, docs: &[DocPage], pages: &dyn PageIndex) -> bool {
    if dest.is_empty() || dest.starts_with('#') || has_scheme(dest) {
        return true;
    }

    let end = dest.find(['?', '#']).unwrap_or(dest.len());
    let target = &dest[..end];

    if target.ends_with(".md") || target.ends_with(".mdx") {
        let file = if let Some(stripped) = target.strip_prefix('/') {
            docs_root(doc).join(stripped)
        } else {
            doc.source_path
                .parent()
                .unwrap_or(Path::new(""))
                .join(target)
        };
        let file = normalize_file(&file);
        return docs.iter().any(|d| normalize_file(&d.source_path) == file);
    }

    if target.starts_with('/') {
        pages.contains(target)
    } else {
        let parent = doc.route.rsplit_once('/').map(|(p, _)| p).unwrap_or("");
        pages.contains(&normalize_route(&format!("{}/{}", parent, target)))
    }
}

fn has_scheme(dest: &str) -> bool {
    match dest.find(':') {
        Some(pos) if pos > 0 => dest[..pos]
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')),
        _ => false,
    }
}

/// The docs directory a page was discovered in.
fn docs_root(doc: &DocPage) -> PathBuf {
    let depth = doc.relative_path.components().count();
    let mut root = doc.source_path.clone();
    for _ in 0..depth {
        root.pop();
    }
    root
}

fn normalize_file(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

fn normalize_route(route: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in route.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::StaticPageIndex;

    fn doc(dir: &str, relative: &str, route: &str, content: &str) -> DocPage {
        DocPage {
            source_path: Path::new(dir).join(relative),
            relative_path: PathBuf::from(relative),
            id: relative.trim_end_matches(".md").to_string(),
            route: route.to_string(),
            frontmatter: None,
            content: content.to_string(),
        }
    }

    fn site() -> (Vec<DocPage>, StaticPageIndex) {
        let docs = vec![
            doc(
                "/site/docs",
                "intro.md",
                "/docs/intro",
                "See [routing](./guides/routing.md), [the blog](/blog), \
                 [GitHub](https://github.com), [below](#setup) and [apis](guides/apis).",
            ),
            doc(
                "/site/docs",
                "guides/routing.md",
                "/docs/guides/routing",
                "Back to [intro](../intro.md#top) or [root](/intro.md).",
            ),
        ];
        let pages = StaticPageIndex::new()
            .with_page("/docs/intro")
            .with_page("/docs/guides/routing")
            .with_page("/docs/guides/apis")
            .with_page("/blog");
        (docs, pages)
    }

    #[test]
    fn extracts_link_text_and_destination() {
        let links = extract_links("Read [the `intro`](/docs/intro) first.");

        assert_eq!(
            links,
            vec![MarkdownLink {
                text: "the intro".to_string(),
                dest: "/docs/intro".to_string(),
            }]
        );
    }

    #[test]
    fn resolves_valid_links() {
        let (docs, pages) = site();

        let diagnostics = check_markdown_links(BrokenLinkPolicy::Throw, &docs, &pages).unwrap();

        assert!(diagnostics.is_empty());
    }

    #[test]
    fn warns_on_missing_file() {
        let (mut docs, pages) = site();
        docs[0].content = "[Middleware](./middleware.md)".to_string();

        let diagnostics = check_markdown_links(BrokenLinkPolicy::Warn, &docs, &pages).unwrap();

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].label, "Middleware");
        assert_eq!(diagnostics[0].target, "./middleware.md");
    }

    #[test]
    fn throws_on_missing_page() {
        let (mut docs, pages) = site();
        docs[1].content = "[Composition](/docs/composition)".to_string();

        let err = check_markdown_links(BrokenLinkPolicy::Throw, &docs, &pages).unwrap_err();

        assert!(matches!(err, ConfigError::BrokenMarkdownLink { ref target, .. } if target == "/docs/composition"));
    }

    #[test]
    fn ignores_when_asked() {
        let (mut docs, pages) = site();
        docs[0].content = "[gone](/gone)".to_string();

        let diagnostics = check_markdown_links(BrokenLinkPolicy::Ignore, &docs, &pages).unwrap();

        assert!(diagnostics.is_empty());
    }

    #[test]
    fn skips_email_autolinks() {
        let (mut docs, pages) = site();
        docs[0].content = "Contact <team@example.com> or [us](mailto:team@example.com).".to_string();

        assert_eq!(extract_links(&docs[0].content).len(), 1);
        let diagnostics = check_markdown_links(BrokenLinkPolicy::Throw, &docs, &pages).unwrap();
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn detects_schemes() {
        assert!(has_scheme("https://example.com"));
        assert!(has_scheme("mailto:team@example.com"));
        assert!(!has_scheme("/docs/intro"));
        assert!(!has_scheme("./a:b.md"));
    }
}
