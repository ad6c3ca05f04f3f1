// src/pipeline.rs
//! Pipeline capability traits: the three stages of a Notion-to-article export.
//!
//! Each trait describes a single capability, enabling testing each stage in isolation.

use crate::error::AppError;
use crate::model::Block;
use crate::output::{ArticleDocument, ArticleMetadata, ArticleOutcome};
use crate::types::PageId;

/// Retrieves a page's fully expanded block tree.
#[async_trait::async_trait]
pub trait ContentSource {
    async fn fetch(&self, page: &PageId) -> Result<Vec<Block>, AppError>;
}

/// Turns a block tree into a finished article.
pub trait ArticleComposer {
    fn compose(&self, meta: &ArticleMetadata, blocks: &[Block])
        -> Result<ArticleDocument, AppError>;
}

/// Delivers an article to its destination.
pub trait ArticleDelivery {
    fn deliver(&self, article: &ArticleDocument) -> Result<ArticleOutcome, AppError>;
}
