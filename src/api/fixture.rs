// src/api/fixture.rs
//! A children source backed by recorded Notion responses.
//!
//! Used for offline exports (`--fixture`) and as the test double for the
//! tree fetcher. Every call is recorded so callers can assert exactly which
//! listings were requested and in what order.

use super::client::ApiResponse;
use super::parser;
use super::types::ChildrenPage;
use super::ChildrenSource;
use crate::error::AppError;
use crate::types::BlockId;
use parking_lot::Mutex;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

type PageKey = (String, Option<String>);

/// A recorded listing: the raw body and the status it came back with.
#[derive(Debug, Clone)]
struct RecordedResponse {
    status: StatusCode,
    body: String,
}

/// On-disk fixture layout.
#[derive(Debug, Deserialize)]
struct FixtureFile {
    pages: Vec<FixturePage>,
}

#[derive(Debug, Deserialize)]
struct FixturePage {
    block_id: String,
    #[serde(default)]
    start_cursor: Option<String>,
    #[serde(default)]
    status: Option<u16>,
    response: Value,
}

/// Serves block-children pages from memory, keyed by `(block_id, cursor)`.
#[derive(Debug, Default)]
pub struct FixtureChildrenSource {
    pages: HashMap<PageKey, RecordedResponse>,
    calls: Mutex<Vec<PageKey>>,
}

impl FixtureChildrenSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a successful listing page.
    pub fn with_page(self, block_id: &str, cursor: Option<&str>, response: Value) -> Self {
        self.with_response(block_id, cursor, StatusCode::OK, response)
    }

    /// Registers a listing page with an explicit status.
    pub fn with_response(
        mut self,
        block_id: &str,
        cursor: Option<&str>,
        status: StatusCode,
        response: Value,
    ) -> Self {
        self.pages.insert(
            (block_id.to_string(), cursor.map(str::to_string)),
            RecordedResponse {
                status,
                body: response.to_string(),
            },
        );
        self
    }

    /// Loads a fixture file of the form
    /// `{"pages": [{"block_id", "start_cursor"?, "status"?, "response"}]}`.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let fixture_error = |cause: String| AppError::Fixture {
            path: path.to_path_buf(),
            cause,
        };

        let raw = std::fs::read_to_string(path).map_err(|e| fixture_error(e.to_string()))?;
        let file: FixtureFile =
            serde_json::from_str(&raw).map_err(|e| fixture_error(e.to_string()))?;

        let mut source = Self::new();
        for page in file.pages {
            let status = match page.status {
                Some(code) => StatusCode::from_u16(code)
                    .map_err(|e| fixture_error(format!("bad status {}: {}", code, e)))?,
                None => StatusCode::OK,
            };
            source = source.with_response(
                &page.block_id,
                page.start_cursor.as_deref(),
                status,
                page.response,
            );
        }

        log::info!(
            "Loaded {} recorded listings from {}",
            source.pages.len(),
            path.display()
        );
        Ok(source)
    }

    /// Every `(block_id, cursor)` requested so far, in call order.
    pub fn calls(&self) -> Vec<(String, Option<String>)> {
        self.calls.lock().clone()
    }

    /// How many listings were requested for `block_id`.
    pub fn calls_for(&self, block_id: &str) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|(id, _)| id == block_id)
            .count()
    }
}

#[async_trait::async_trait]
impl ChildrenSource for FixtureChildrenSource {
    async fn list_children(
        &self,
        node_id: &BlockId,
        cursor: Option<String>,
    ) -> Result<ChildrenPage, AppError> {
        let key = (node_id.as_str().to_string(), cursor);
        self.calls.lock().push(key.clone());

        let url = format!("fixture://blocks/{}/children", node_id.as_str());
        let recorded = self.pages.get(&key).cloned().unwrap_or_else(|| {
            log::debug!("No recorded listing for {:?}", key);
            RecordedResponse {
                status: StatusCode::NOT_FOUND,
                body: serde_json::json!({
                    "object": "error",
                    "status": 404,
                    "code": "object_not_found",
                    "message": format!("No recorded listing for block {}", node_id.as_str()),
                })
                .to_string(),
            }
        });

        parser::parse_children_page(ApiResponse {
            data: recorded.body,
            status: recorded.status,
            url,
        })
    }
}
