//! Landing-page feature sections for quire docs sites.
//!
//! Maps an ordered list of feature records to uniform cards and renders
//! them as one HTML section.

pub mod compose;
pub mod feature;
pub mod templates;

pub use compose::{compose, compose_with_columns, Block, Section};
pub use feature::{Feature, FeatureError, FeatureFile, FeatureList, Illustration};
pub use templates::SectionRenderer;
