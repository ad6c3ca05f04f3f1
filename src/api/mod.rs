// src/api/mod.rs
//! Notion API interaction: the ability to list a document's blocks and to
//! find the articles worth exporting.
//!
//! Business logic depends on the capability traits below, never on HTTP
//! details. The concrete source is chosen once, at construction.

pub mod catalog;
pub mod client;
pub mod fixture;
pub mod pagination;
pub mod parser;
pub mod tree_fetcher;
pub mod types;

use crate::error::AppError;
use crate::types::{BlockId, DataSourceId, DatabaseId};
use types::{ArticleSummary, ChildrenPage, DataSourceSummary, PaginatedResponse};

/// The ability to list the direct children of a block, one page at a time.
///
/// `cursor` is `None` for the first page, otherwise the `next_cursor` of
/// the previous page. Implementations ask for `NOTION_API_PAGE_SIZE`
/// children per page and report a non-success status as
/// `AppError::RemoteFetch`. No retries happen behind this trait.
#[async_trait::async_trait]
pub trait ChildrenSource: Send + Sync {
    async fn list_children(
        &self,
        node_id: &BlockId,
        cursor: Option<String>,
    ) -> Result<ChildrenPage, AppError>;
}

/// The ability to discover exportable articles in a Notion database.
#[async_trait::async_trait]
pub trait ArticleCatalog: Send + Sync {
    /// Lists the data sources attached to a database.
    async fn retrieve_data_sources(
        &self,
        database: &DatabaseId,
    ) -> Result<Vec<DataSourceSummary>, AppError>;

    /// One page of a data source query filtered on `Status == status`.
    async fn query_articles_page(
        &self,
        data_source: &DataSourceId,
        status: &str,
        cursor: Option<String>,
    ) -> Result<PaginatedResponse<ArticleSummary>, AppError>;
}

// Re-export the public interface
pub use client::NotionHttpClient;
pub use fixture::FixtureChildrenSource;
pub use tree_fetcher::TreeFetcher;
