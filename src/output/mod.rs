// src/output/mod.rs
//! Article output with clear separation of assembly and delivery.
//!
//! Assembly (slug, front matter, final text) is pure; delivery is the only
//! step that touches the filesystem.

mod front_matter;
mod paths;
mod types;
mod writer;

// Re-export the public interface
pub use front_matter::{compose_article, render_front_matter};
pub use paths::{article_path, slugify};
pub use types::{ArticleDocument, ArticleMetadata, ArticleOutcome, WritePolicy};
pub use writer::{deliver_article, preview};
