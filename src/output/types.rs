// src/output/types.rs
//! Type definitions for article output.

use crate::api::types::ArticleSummary;
use crate::types::PageId;
use chrono::NaiveDate;
use std::path::PathBuf;

/// Everything the front matter records about an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleMetadata {
    pub title: String,
    pub date: NaiveDate,
    pub tags: Vec<String>,
    pub notion_id: PageId,
    pub slug: String,
}

impl ArticleMetadata {
    /// Metadata for exporting `summary` on `date`; the slug derives from the title.
    pub fn from_summary(summary: &ArticleSummary, date: NaiveDate) -> Self {
        Self {
            title: summary.title.clone(),
            date,
            tags: summary.tags.clone(),
            notion_id: summary.id.clone(),
            slug: super::slugify(&summary.title),
        }
    }
}

/// A fully assembled article, ready to be delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDocument {
    pub slug: String,
    /// Front matter followed by the body, ending in exactly one newline.
    pub content: String,
}

/// How delivery treats the filesystem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WritePolicy {
    /// Replace an existing article file.
    pub overwrite: bool,
    /// Produce a preview instead of writing.
    pub dry_run: bool,
}

/// What delivery did with an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleOutcome {
    Written { path: PathBuf, bytes_written: usize },
    /// The file existed and overwriting was not allowed.
    SkippedExisting { path: PathBuf },
    /// Dry run: nothing was written.
    Previewed { path: PathBuf, preview: String },
}

impl ArticleOutcome {
    /// The article path, whether or not it was written.
    pub fn path(&self) -> &PathBuf {
        match self {
            ArticleOutcome::Written { path, .. }
            | ArticleOutcome::SkippedExisting { path }
            | ArticleOutcome::Previewed { path, .. } => path,
        }
    }
}
