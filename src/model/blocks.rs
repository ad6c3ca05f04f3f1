use super::common::BlockCommon;
use crate::types::RichTextItem;

/// A block whose payload is a single rich text sequence
/// (paragraphs, headings, list items, quotes, toggles).
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub common: BlockCommon,
    pub rich_text: Vec<RichTextItem>,
}

/// To-do block
#[derive(Debug, Clone, PartialEq)]
pub struct ToDoBlock {
    pub common: BlockCommon,
    pub rich_text: Vec<RichTextItem>,
    pub checked: bool,
}

/// Code block
#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlock {
    pub common: BlockCommon,
    /// Language tag as declared in Notion; empty when unset.
    pub language: String,
    pub rich_text: Vec<RichTextItem>,
}

/// Divider block
#[derive(Debug, Clone, PartialEq)]
pub struct DividerBlock {
    pub common: BlockCommon,
}

/// Callout block
#[derive(Debug, Clone, PartialEq)]
pub struct CalloutBlock {
    pub common: BlockCommon,
    /// Only emoji icons are rendered; file icons are dropped.
    pub emoji: Option<String>,
    pub rich_text: Vec<RichTextItem>,
}

/// Where an image is hosted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    External { url: String },
    /// Notion-hosted file; the URL is signed and expires.
    File { url: String },
}

impl ImageSource {
    pub fn url(&self) -> &str {
        match self {
            ImageSource::External { url } | ImageSource::File { url } => url,
        }
    }
}

/// Image block
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBlock {
    pub common: BlockCommon,
    pub source: ImageSource,
    pub caption: Vec<RichTextItem>,
}

/// Table block; its rows arrive as `TableRow` children.
#[derive(Debug, Clone, PartialEq)]
pub struct TableBlock {
    pub common: BlockCommon,
    pub table_width: usize,
    pub has_column_header: bool,
}

/// Table row block
#[derive(Debug, Clone, PartialEq)]
pub struct TableRowBlock {
    pub common: BlockCommon,
    pub cells: Vec<Vec<RichTextItem>>,
}

/// A block the exporter cannot render, either because its type is not
/// supported or because its payload was malformed.
#[derive(Debug, Clone, PartialEq)]
pub struct UnsupportedBlock {
    pub common: BlockCommon,
    pub block_type: String,
    /// Set when the type is known but its payload could not be read.
    pub malformed: Option<String>,
}
