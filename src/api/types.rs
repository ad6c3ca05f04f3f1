// src/api/types.rs
//! Type definitions for the Notion API module.

use crate::model::Block;
use crate::types::{DataSourceId, PageId};

// --- API Response Types ---

/// One page of a cursor-paginated Notion listing.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedResponse<T> {
    pub results: Vec<T>,
    pub has_more: bool,
    pub next_cursor: Option<String>,
}

/// One page of a block's direct children.
pub type ChildrenPage = PaginatedResponse<Block>;

/// Result of draining a cursor-chained listing.
#[derive(Debug, Clone)]
pub struct PaginationResult<T> {
    pub items: Vec<T>,
    pub pages_fetched: usize,
}

// --- Catalog Types ---

/// A data source attached to a Notion database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSourceSummary {
    pub id: DataSourceId,
    pub name: Option<String>,
}

impl DataSourceSummary {
    /// The name shown in menus and logs.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or("(no name)")
    }
}

/// A page offered for export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSummary {
    pub id: PageId,
    pub title: String,
    pub tags: Vec<String>,
}

// --- Fetch Metadata ---

/// Metadata about one tree fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchMetadata {
    /// Children-listing requests issued, one per page.
    pub requests_issued: usize,
    /// Blocks received across all listings.
    pub blocks_fetched: usize,
    /// Deepest recursion level that was listed.
    pub deepest_level: usize,
    /// Subtrees left unexpanded because the depth limit was exceeded.
    pub depth_truncations: usize,
    /// Children left unexpanded because their id was missing or already on
    /// the active path.
    pub cycles_skipped: usize,
}

/// A fetched tree together with how it was obtained.
#[derive(Debug, Clone)]
pub struct FetchResult<T> {
    pub data: T,
    pub metadata: FetchMetadata,
}
