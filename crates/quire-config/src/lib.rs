//! Site configuration for quire docs sites.
//!
//! Loads the author's declarations, applies defaults, validates structural
//! invariants and resolves navigation links against the pages the presets
//! will generate. The result is one immutable [`SiteConfig`].

pub mod assemble;
pub mod context;
pub mod declaration;
pub mod discover;
pub mod error;
pub mod frontmatter;
pub mod markdown;
pub mod pages;
pub mod schema;

pub use assemble::{assemble, resolve_presets, Assembler, Assembly, LinkDiagnostic};
pub use context::BuildContext;
pub use declaration::Declarations;
pub use discover::{DocPage, SiteIndex};
pub use error::{ConfigError, FieldPath};
pub use markdown::check_markdown_links;
pub use pages::{PageIndex, StaticPageIndex};
pub use schema::{BrokenLinkPolicy, LinkTarget, NavItem, Position, SiteConfig};
