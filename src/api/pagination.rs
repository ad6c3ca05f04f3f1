// src/api/pagination.rs
//! Cursor-chained pagination over Notion listings.

use super::types::{PaginatedResponse, PaginationResult};
use super::ChildrenSource;
use crate::error::AppError;
use crate::model::Block;
use crate::types::BlockId;

/// Drains a cursor-paginated listing, preserving page order.
///
/// `fetch_fn` receives the cursor from the previous page (`None` for the
/// first). Stops when a page reports no more results, or when a page
/// claims more results but hands back no cursor to follow.
pub async fn fetch_all_pages<T, F, Fut>(mut fetch_fn: F) -> Result<PaginationResult<T>, AppError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: std::future::Future<Output = Result<PaginatedResponse<T>, AppError>>,
{
    let mut items = Vec::new();
    let mut cursor = None;
    let mut pages_fetched = 0usize;

    loop {
        let response = fetch_fn(cursor.take()).await?;
        pages_fetched += 1;
        items.extend(response.results);

        if !response.has_more {
            break;
        }
        match response.next_cursor {
            Some(next) => cursor = Some(next),
            None => {
                log::warn!("Listing reported more results but no cursor; stopping");
                break;
            }
        }
    }

    Ok(PaginationResult {
        items,
        pages_fetched,
    })
}

/// Lists every direct child of `node_id`, page after page.
pub async fn list_all_children(
    source: &dyn ChildrenSource,
    node_id: &BlockId,
) -> Result<PaginationResult<Block>, AppError> {
    fetch_all_pages(|cursor| source.list_children(node_id, cursor)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(items: &[u32], next: Option<&str>) -> PaginatedResponse<u32> {
        PaginatedResponse {
            results: items.to_vec(),
            has_more: next.is_some(),
            next_cursor: next.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn concatenates_pages_in_cursor_order() {
        let mut seen_cursors = Vec::new();
        let result = fetch_all_pages(|cursor| {
            seen_cursors.push(cursor.clone());
            let response = match cursor.as_deref() {
                None => page(&[1, 2], Some("c1")),
                Some("c1") => page(&[3], Some("c2")),
                _ => page(&[4, 5], None),
            };
            async move { Ok(response) }
        })
        .await
        .unwrap();

        assert_eq!(result.items, vec![1, 2, 3, 4, 5]);
        assert_eq!(result.pages_fetched, 3);
        assert_eq!(
            seen_cursors,
            vec![None, Some("c1".to_string()), Some("c2".to_string())]
        );
    }

    #[tokio::test]
    async fn stops_when_more_is_claimed_without_cursor() {
        let result = fetch_all_pages(|_| async {
            Ok(PaginatedResponse {
                results: vec![7u32],
                has_more: true,
                next_cursor: None,
            })
        })
        .await
        .unwrap();

        assert_eq!(result.items, vec![7]);
        assert_eq!(result.pages_fetched, 1);
    }

    #[tokio::test]
    async fn page_failure_aborts_the_listing() {
        let result: Result<PaginationResult<u32>, _> = fetch_all_pages(|cursor| async move {
            match cursor {
                None => Ok(page(&[1], Some("c1"))),
                Some(_) => Err(AppError::remote_fetch(500, "blocks/x/children", "boom")),
            }
        })
        .await;

        assert_eq!(result.unwrap_err().remote_status(), Some(500));
    }
}
