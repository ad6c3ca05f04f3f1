// src/api/client.rs
//! Thin HTTP client for the Notion API.
//!
//! Handles authentication headers and request plumbing only; response
//! parsing lives in `parser`.

use super::types::{ArticleSummary, ChildrenPage, DataSourceSummary, PaginatedResponse};
use super::{parser, ArticleCatalog, ChildrenSource};
use crate::constants::{NOTION_API_BASE_URL, NOTION_API_PAGE_SIZE, NOTION_API_VERSION};
use crate::error::AppError;
use crate::types::{BlockId, DataSourceId, DatabaseId};
use reqwest::{header, Client, Response};
use serde::Serialize;

/// A thin wrapper around reqwest Client for Notion API requests.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
    base_url: String,
}

impl NotionHttpClient {
    /// Creates a new HTTP client with Notion API authentication.
    pub fn new(api_key: &str) -> Result<Self, AppError> {
        Self::with_base_url(api_key, NOTION_API_BASE_URL)
    }

    /// Creates a client against another base URL (a proxy or a local stub).
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(api_key)?)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates the default headers for Notion API requests.
    fn create_headers(api_key: &str) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", api_key);
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid API token format: {}", e))
            })?,
        );

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_static(NOTION_API_VERSION),
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    /// Makes a GET request to `endpoint` (relative to the base URL).
    pub async fn get(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<Response, AppError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        log::debug!("GET {} {:?}", url, query);
        Ok(self.client.get(url).query(query).send().await?)
    }

    /// Makes a POST request with a JSON body to `endpoint`.
    pub async fn post<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<Response, AppError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        log::debug!("POST {}", url);
        Ok(self.client.post(url).json(body).send().await?)
    }
}

#[async_trait::async_trait]
impl ChildrenSource for NotionHttpClient {
    async fn list_children(
        &self,
        node_id: &BlockId,
        cursor: Option<String>,
    ) -> Result<ChildrenPage, AppError> {
        let endpoint = format!("blocks/{}/children", node_id.as_str());
        let response = self.get(&endpoint, &children_query(cursor)).await?;
        let result = extract_response_text(response).await?;
        parser::parse_children_page(result)
    }
}

#[async_trait::async_trait]
impl ArticleCatalog for NotionHttpClient {
    async fn retrieve_data_sources(
        &self,
        database: &DatabaseId,
    ) -> Result<Vec<DataSourceSummary>, AppError> {
        let endpoint = format!("databases/{}", database.as_str());
        let response = self.get(&endpoint, &[]).await?;
        let result = extract_response_text(response).await?;
        parser::parse_data_sources(result)
    }

    async fn query_articles_page(
        &self,
        data_source: &DataSourceId,
        status: &str,
        cursor: Option<String>,
    ) -> Result<PaginatedResponse<ArticleSummary>, AppError> {
        let endpoint = format!("data_sources/{}/query", data_source.as_str());
        let mut body = serde_json::json!({
            "filter": {
                "property": "Status",
                "status": { "equals": status },
            },
            "page_size": NOTION_API_PAGE_SIZE,
        });
        if let Some(cursor) = cursor {
            body["start_cursor"] = serde_json::json!(cursor);
        }

        let response = self.post(&endpoint, &body).await?;
        let result = extract_response_text(response).await?;
        parser::parse_article_query(result)
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text with metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}

/// Query string for one page of a block's children.
fn children_query(cursor: Option<String>) -> Vec<(&'static str, String)> {
    let mut query = vec![("page_size", NOTION_API_PAGE_SIZE.to_string())];
    if let Some(cursor) = cursor {
        query.push(("start_cursor", cursor));
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_carry_token_and_api_version() {
        let headers = NotionHttpClient::create_headers("secret_abc").unwrap();
        assert_eq!(headers[header::AUTHORIZATION], "Bearer secret_abc");
        assert_eq!(headers["Notion-Version"], NOTION_API_VERSION);
    }

    #[test]
    fn token_with_newline_is_rejected() {
        let err = NotionHttpClient::create_headers("bad\ntoken").unwrap_err();
        assert!(matches!(err, AppError::MissingConfiguration(_)));
    }

    #[test]
    fn first_children_page_sends_only_page_size() {
        assert_eq!(children_query(None), vec![("page_size", "100".to_string())]);
    }

    #[test]
    fn later_children_pages_carry_the_cursor() {
        assert_eq!(
            children_query(Some("cursor-2".to_string())),
            vec![
                ("page_size", "100".to_string()),
                ("start_cursor", "cursor-2".to_string()),
            ]
        );
    }

    #[test]
    fn base_url_trailing_slash_is_ignored() {
        let client = NotionHttpClient::with_base_url("secret_abc", "http://localhost:9/v1/").unwrap();
        assert_eq!(client.base_url, "http://localhost:9/v1");
    }
}
