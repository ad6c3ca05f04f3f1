// src/api/parser.rs
//! Converts raw Notion API responses into the domain model.
//!
//! Listing failures become `AppError::RemoteFetch`. Individual blocks never
//! fail a page: a block whose payload is unreadable is logged and kept as
//! an unsupported placeholder.

use super::client::ApiResponse;
use super::types::{ArticleSummary, ChildrenPage, DataSourceSummary, PaginatedResponse};
use crate::error::{AppError, MalformedNodeError};
use crate::model::*;
use crate::types::{null_as_default, BlockId, DataSourceId, PageId, RichTextItem};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Envelope shared by every paginated Notion listing.
#[derive(Debug, Deserialize)]
struct RawListing {
    #[serde(default)]
    results: Vec<Value>,
    #[serde(default)]
    has_more: bool,
    #[serde(default)]
    next_cursor: Option<String>,
}

/// Checks the status and parses the body of a successful response.
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: DeserializeOwned,
{
    if !result.status.is_success() {
        log::error!(
            "Notion request {} failed with status {}",
            result.url,
            result.status
        );
        return Err(AppError::remote_fetch(
            result.status.as_u16(),
            result.url,
            &result.data,
        ));
    }

    serde_json::from_str(&result.data).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", result.url, e);
        AppError::MalformedResponse(format!("{} (from {})", e, result.url))
    })
}

/// Parses one page of a block-children listing.
pub fn parse_children_page(result: ApiResponse<String>) -> Result<ChildrenPage, AppError> {
    let listing: RawListing = parse_api_response(result)?;
    Ok(PaginatedResponse {
        results: listing.results.iter().map(parse_block).collect(),
        has_more: listing.has_more,
        next_cursor: listing.next_cursor,
    })
}

/// Parses a block object. Inline `children` arrays, as found in recorded
/// trees, are parsed recursively.
pub fn parse_block(value: &Value) -> Block {
    let id = value["id"].as_str().unwrap_or_default();
    let block_type = value["type"].as_str().unwrap_or("unknown");
    let children = value["children"]
        .as_array()
        .map(|items| items.iter().map(parse_block).collect())
        .unwrap_or_default();
    let common = BlockCommon {
        id: BlockId::from_api(id),
        has_children: value["has_children"].as_bool().unwrap_or(false),
        children,
    };

    match block_builder(block_type, value.get(block_type)) {
        Ok(build) => build(common),
        Err(reason) => {
            let malformed = MalformedNodeError {
                block_id: id.to_string(),
                block_type: block_type.to_string(),
                reason,
            };
            log::warn!("Rendering placeholder: {}", malformed);
            Block::Unsupported(UnsupportedBlock {
                common,
                block_type: block_type.to_string(),
                malformed: Some(malformed.reason),
            })
        }
    }
}

/// Parses a whole recorded tree: a JSON array of blocks with inline children.
pub fn parse_block_tree(json: &str) -> Result<Vec<Block>, AppError> {
    let values: Vec<Value> = serde_json::from_str(json)?;
    Ok(values.iter().map(parse_block).collect())
}

// --- Block payloads ---

#[derive(Deserialize)]
struct TextPayload {
    rich_text: Vec<RichTextItem>,
}

#[derive(Deserialize)]
struct ToDoPayload {
    rich_text: Vec<RichTextItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    checked: bool,
}

#[derive(Deserialize)]
struct CodePayload {
    rich_text: Vec<RichTextItem>,
    #[serde(default)]
    language: Option<String>,
}

#[derive(Deserialize)]
struct CalloutPayload {
    rich_text: Vec<RichTextItem>,
    #[serde(default)]
    icon: Option<IconPayload>,
}

#[derive(Deserialize)]
struct IconPayload {
    #[serde(default)]
    emoji: Option<String>,
}

#[derive(Deserialize)]
struct ImagePayload {
    #[serde(rename = "type", default)]
    source_type: Option<String>,
    #[serde(default)]
    external: Option<UrlPayload>,
    #[serde(default)]
    file: Option<UrlPayload>,
    #[serde(default)]
    caption: Vec<RichTextItem>,
}

#[derive(Deserialize)]
struct UrlPayload {
    url: String,
}

#[derive(Deserialize)]
struct TablePayload {
    #[serde(default)]
    table_width: usize,
    #[serde(default)]
    has_column_header: bool,
}

#[derive(Deserialize)]
struct TableRowPayload {
    cells: Vec<Vec<RichTextItem>>,
}

fn payload<T: DeserializeOwned>(block_type: &str, raw: Option<&Value>) -> Result<T, String> {
    let raw = raw.ok_or_else(|| format!("missing '{}' payload", block_type))?;
    T::deserialize(raw).map_err(|e| e.to_string())
}

/// Finishes a block once its shared header is known.
type BlockBuilder = Box<dyn FnOnce(BlockCommon) -> Block>;

fn text_builder(
    variant: fn(TextBlock) -> Block,
    block_type: &str,
    raw: Option<&Value>,
) -> Result<BlockBuilder, String> {
    let TextPayload { rich_text } = payload(block_type, raw)?;
    Ok(Box::new(move |common| variant(TextBlock { common, rich_text })))
}

/// Reads the payload for `block_type`. The header is attached afterwards,
/// so a failed read hands it back untouched for the placeholder.
fn block_builder(block_type: &str, raw: Option<&Value>) -> Result<BlockBuilder, String> {
    let builder: BlockBuilder = match block_type {
        "paragraph" => text_builder(Block::Paragraph, block_type, raw)?,
        "heading_1" => text_builder(Block::Heading1, block_type, raw)?,
        "heading_2" => text_builder(Block::Heading2, block_type, raw)?,
        "heading_3" => text_builder(Block::Heading3, block_type, raw)?,
        "bulleted_list_item" => text_builder(Block::BulletedListItem, block_type, raw)?,
        "numbered_list_item" => text_builder(Block::NumberedListItem, block_type, raw)?,
        "quote" => text_builder(Block::Quote, block_type, raw)?,
        "toggle" => text_builder(Block::Toggle, block_type, raw)?,
        "to_do" => {
            let p: ToDoPayload = payload(block_type, raw)?;
            Box::new(move |common| {
                Block::ToDo(ToDoBlock {
                    common,
                    rich_text: p.rich_text,
                    checked: p.checked,
                })
            })
        }
        "code" => {
            let p: CodePayload = payload(block_type, raw)?;
            Box::new(move |common| {
                Block::Code(CodeBlock {
                    common,
                    language: p.language.unwrap_or_default(),
                    rich_text: p.rich_text,
                })
            })
        }
        "callout" => {
            let p: CalloutPayload = payload(block_type, raw)?;
            Box::new(move |common| {
                Block::Callout(CalloutBlock {
                    common,
                    emoji: p.icon.and_then(|icon| icon.emoji),
                    rich_text: p.rich_text,
                })
            })
        }
        "divider" => Box::new(|common| Block::Divider(DividerBlock { common })),
        "image" => {
            let p: ImagePayload = payload(block_type, raw)?;
            let source = match p.source_type.as_deref() {
                Some("external") => p.external.map(|e| ImageSource::External { url: e.url }),
                _ => p.file.map(|f| ImageSource::File { url: f.url }),
            }
            .ok_or_else(|| "image has no url for its source type".to_string())?;
            let caption = p.caption;
            Box::new(move |common| {
                Block::Image(ImageBlock {
                    common,
                    source,
                    caption,
                })
            })
        }
        "table" => {
            let p: TablePayload = payload(block_type, raw)?;
            Box::new(move |common| {
                Block::Table(TableBlock {
                    common,
                    table_width: p.table_width,
                    has_column_header: p.has_column_header,
                })
            })
        }
        "table_row" => {
            let p: TableRowPayload = payload(block_type, raw)?;
            Box::new(move |common| {
                Block::TableRow(TableRowBlock {
                    common,
                    cells: p.cells,
                })
            })
        }
        other => {
            let block_type = other.to_string();
            Box::new(move |common| {
                Block::Unsupported(UnsupportedBlock {
                    common,
                    block_type,
                    malformed: None,
                })
            })
        }
    };
    Ok(builder)
}

// --- Catalog responses ---

/// Reads `data_sources[]` from a database object.
pub fn parse_data_sources(
    result: ApiResponse<String>,
) -> Result<Vec<DataSourceSummary>, AppError> {
    #[derive(Deserialize)]
    struct RawDatabase {
        #[serde(default)]
        data_sources: Vec<RawDataSource>,
    }

    #[derive(Deserialize)]
    struct RawDataSource {
        id: String,
        #[serde(default)]
        name: Option<String>,
    }

    let database: RawDatabase = parse_api_response(result)?;
    Ok(database
        .data_sources
        .into_iter()
        .map(|ds| DataSourceSummary {
            id: DataSourceId::from_api(ds.id),
            name: ds.name,
        })
        .collect())
}

/// Parses one page of a data source query into article summaries.
pub fn parse_article_query(
    result: ApiResponse<String>,
) -> Result<PaginatedResponse<ArticleSummary>, AppError> {
    let listing: RawListing = parse_api_response(result)?;
    let results = listing
        .results
        .iter()
        .map(parse_article_summary)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(PaginatedResponse {
        results,
        has_more: listing.has_more,
        next_cursor: listing.next_cursor,
    })
}

/// Title comes from the `Name` title property, tags from `Tags` multi-select.
pub fn parse_article_summary(page: &Value) -> Result<ArticleSummary, AppError> {
    let id = page["id"]
        .as_str()
        .ok_or_else(|| AppError::MalformedResponse("query result without an id".to_string()))?;
    let properties = &page["properties"];

    let title_runs: Vec<RichTextItem> =
        Vec::deserialize(&properties["Name"]["title"]).unwrap_or_default();
    let title = crate::types::plain_text_of(&title_runs);
    if title.is_empty() {
        log::warn!("Page {} has an empty Name title", id);
    }

    let tags = properties["Tags"]["multi_select"]
        .as_array()
        .map(|options| {
            options
                .iter()
                .filter_map(|option| option["name"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    Ok(ArticleSummary {
        id: PageId::from_api(id),
        title,
        tags,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use serde_json::json;

    fn ok(body: Value) -> ApiResponse<String> {
        ApiResponse {
            data: body.to_string(),
            status: StatusCode::OK,
            url: "blocks/test/children".to_string(),
        }
    }

    fn run(text: &str) -> Value {
        json!({"type": "text", "plain_text": text, "href": null, "annotations": {}})
    }

    #[test]
    fn parses_a_children_page() {
        let page = parse_children_page(ok(json!({
            "object": "list",
            "results": [
                {"id": "p1", "type": "paragraph", "has_children": false,
                 "paragraph": {"rich_text": [run("Top level")]}},
                {"id": "t1", "type": "to_do", "has_children": true,
                 "to_do": {"rich_text": [run("Ship it")], "checked": true}}
            ],
            "has_more": true,
            "next_cursor": "cursor-1"
        })))
        .unwrap();

        assert!(page.has_more);
        assert_eq!(page.next_cursor.as_deref(), Some("cursor-1"));
        assert_eq!(page.results.len(), 2);
        assert!(matches!(&page.results[1], Block::ToDo(b) if b.checked));
        assert!(page.results[1].has_children());
        assert!(page.results[1].children().is_empty());
    }

    #[test]
    fn non_success_status_is_a_remote_fetch_error() {
        let result = ApiResponse {
            data: r#"{"object":"error","status":404,"code":"object_not_found"}"#.to_string(),
            status: StatusCode::NOT_FOUND,
            url: "blocks/missing/children".to_string(),
        };

        let err = parse_children_page(result).unwrap_err();
        assert!(matches!(
            err,
            AppError::RemoteFetch { status: 404, code: crate::error::NotionErrorCode::ObjectNotFound, .. }
        ));
    }

    #[test]
    fn unknown_types_become_unsupported() {
        let block = parse_block(&json!({"id": "x", "type": "synced_block", "synced_block": {}}));
        match block {
            Block::Unsupported(b) => {
                assert_eq!(b.block_type, "synced_block");
                assert_eq!(b.malformed, None);
            }
            other => panic!("Expected Unsupported, got {:?}", other),
        }
    }

    #[test]
    fn missing_payload_degrades_to_placeholder() {
        let block = parse_block(&json!({"id": "x", "type": "paragraph", "has_children": true}));
        match block {
            Block::Unsupported(b) => {
                assert_eq!(b.block_type, "paragraph");
                assert!(b.malformed.is_some());
                assert!(b.common.has_children);
            }
            other => panic!("Expected Unsupported, got {:?}", other),
        }
    }

    #[test]
    fn null_checked_reads_as_unchecked() {
        let block = parse_block(&json!({"id": "t", "type": "to_do",
            "to_do": {"rich_text": [run("Later")], "checked": null}}));
        assert!(matches!(block, Block::ToDo(ref b) if !b.checked));
    }

    #[test]
    fn placeholder_keeps_inline_children() {
        let block = parse_block(&json!({"id": "q", "type": "quote", "has_children": true,
            "children": [{"id": "c", "type": "divider", "divider": {}}]}));
        assert!(matches!(block, Block::Unsupported(_)));
        assert_eq!(block.id().as_str(), "q");
        assert_eq!(block.children().len(), 1);
        assert_eq!(block.children()[0].block_type(), "divider");
    }

    #[test]
    fn image_url_follows_source_type() {
        let external = parse_block(&json!({"id": "i", "type": "image", "image": {
            "type": "external", "external": {"url": "https://img/x.png"}, "caption": []
        }}));
        let hosted = parse_block(&json!({"id": "i", "type": "image", "image": {
            "type": "file", "file": {"url": "https://s3/x.png", "expiry_time": "2025-01-01"}
        }}));

        assert!(matches!(external, Block::Image(ref b)
            if b.source == ImageSource::External { url: "https://img/x.png".into() }));
        assert!(matches!(hosted, Block::Image(ref b)
            if b.source == ImageSource::File { url: "https://s3/x.png".into() }));
    }

    #[test]
    fn callout_keeps_emoji_icon_only() {
        let block = parse_block(&json!({"id": "c", "type": "callout", "callout": {
            "rich_text": [run("Note")], "icon": {"type": "emoji", "emoji": "💡"}
        }}));
        assert!(matches!(block, Block::Callout(ref b) if b.emoji.as_deref() == Some("💡")));
    }

    #[test]
    fn inline_children_are_parsed_recursively() {
        let tree = parse_block_tree(
            &json!([{"type": "toggle", "toggle": {"rich_text": [run("A")]},
                     "children": [{"type": "paragraph", "paragraph": {"rich_text": [run("B")]}}]}])
            .to_string(),
        )
        .unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].children().len(), 1);
        assert_eq!(tree[0].children()[0].block_type(), "paragraph");
    }

    #[test]
    fn article_summary_reads_name_and_tags() {
        let summary = parse_article_summary(&json!({
            "id": "page-1",
            "properties": {
                "Name": {"title": [run("Protein "), run("Guide")]},
                "Tags": {"multi_select": [{"name": "nutrition"}, {"name": "fitness"}]}
            }
        }))
        .unwrap();

        assert_eq!(summary.title, "Protein Guide");
        assert_eq!(summary.tags, vec!["nutrition", "fitness"]);
        assert_eq!(summary.id.as_str(), "page-1");
    }

    #[test]
    fn article_without_tags_has_none() {
        let summary = parse_article_summary(&json!({
            "id": "page-2",
            "properties": {"Name": {"title": [run("Solo")]}}
        }))
        .unwrap();
        assert!(summary.tags.is_empty());
    }

    #[test]
    fn data_sources_are_listed_in_order() {
        let sources = parse_data_sources(ok(json!({
            "object": "database",
            "data_sources": [{"id": "ds-1", "name": "Articles"}, {"id": "ds-2"}]
        })))
        .unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].display_name(), "Articles");
        assert_eq!(sources[1].display_name(), "(no name)");
    }
}
