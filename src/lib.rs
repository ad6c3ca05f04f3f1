// src/lib.rs
//! notion2article library: exports a Notion page's block tree as a Markdown
//! article with YAML front matter.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `ValidationError`
//! - **Configuration**: `CommandLineInput`, `ExportConfig`
//! - **Domain model**: `Block` and its per-kind payloads
//! - **API client**: `ChildrenSource`, `TreeFetcher`, `NotionHttpClient`, `FixtureChildrenSource`
//! - **Formatting**: `render_document`, `render_blocks`, `rich_text_to_markdown`
//! - **Output**: `compose_article`, `deliver_article`, `slugify`

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod selection;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, MalformedNodeError, NotionErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, ExportConfig, SourceConfig};

// --- Domain Model ---
pub use crate::model::{
    Block, BlockCommon, CalloutBlock, CodeBlock, DividerBlock, ImageBlock, ImageSource,
    TableBlock, TableRowBlock, TextBlock, ToDoBlock, UnsupportedBlock,
};

// --- Domain Types ---
pub use crate::types::{
    Annotations, BlockId, DataSourceId, DatabaseId, PageId, RichTextItem,
};

// --- API Client ---
pub use crate::api::{
    catalog::{query_articles, resolve_data_source},
    client::ApiResponse,
    types::{ArticleSummary, ChildrenPage, DataSourceSummary, FetchMetadata, PaginatedResponse},
    ArticleCatalog, ChildrenSource, FixtureChildrenSource, NotionHttpClient, TreeFetcher,
};

// --- Formatting ---
pub use crate::formatting::{
    render_block, render_blocks, render_document, rich_text_to_markdown, RenderContext,
};

// --- Output ---
pub use crate::output::{
    compose_article, deliver_article, slugify, ArticleDocument, ArticleMetadata, ArticleOutcome,
    WritePolicy,
};

// --- Pipeline Traits ---
pub use crate::pipeline::{ArticleComposer, ArticleDelivery, ContentSource};

// --- Interactive Selection ---
pub use crate::selection::SelectionMenu;
