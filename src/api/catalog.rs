// src/api/catalog.rs
//! Finds the articles a Notion database offers for export.

use super::pagination::fetch_all_pages;
use super::types::{ArticleSummary, DataSourceSummary};
use super::ArticleCatalog;
use crate::error::AppError;
use crate::types::{DataSourceId, DatabaseId};

/// Decides which data source to query.
///
/// An explicit data source wins. Otherwise the database's data sources are
/// listed: a single one is used directly, several are handed to `choose`,
/// which returns the index of the one to use.
pub async fn resolve_data_source<F>(
    catalog: &dyn ArticleCatalog,
    explicit: Option<&DataSourceId>,
    database: Option<&DatabaseId>,
    choose: F,
) -> Result<DataSourceId, AppError>
where
    F: FnOnce(&[DataSourceSummary]) -> Result<usize, AppError>,
{
    if let Some(id) = explicit {
        return Ok(id.clone());
    }

    let database = database.ok_or_else(|| {
        AppError::MissingConfiguration(
            "set NOTION_DATA_SOURCE_ID or NOTION_DB_ID (or pass --data-source / --database)"
                .to_string(),
        )
    })?;

    let sources = catalog.retrieve_data_sources(database).await?;
    let chosen = match sources.len() {
        0 => {
            return Err(AppError::NoDataSource(format!(
                "database {} has no data sources; make sure it has at least one and that the \
                 API version supports data sources",
                database
            )))
        }
        1 => &sources[0],
        _ => {
            let index = choose(&sources)?;
            sources.get(index).ok_or_else(|| {
                AppError::Selection(format!("data source {} does not exist", index + 1))
            })?
        }
    };

    log::info!(
        "Using data source: {} [{}]",
        chosen.display_name(),
        chosen.id
    );
    Ok(chosen.id.clone())
}

/// Every article whose `Status` equals `status`, in query order.
pub async fn query_articles(
    catalog: &dyn ArticleCatalog,
    data_source: &DataSourceId,
    status: &str,
) -> Result<Vec<ArticleSummary>, AppError> {
    let result =
        fetch_all_pages(|cursor| catalog.query_articles_page(data_source, status, cursor)).await?;
    log::info!(
        "Data source {} has {} article(s) with status '{}'",
        data_source,
        result.items.len(),
        status
    );
    Ok(result.items)
}
