use super::blocks::*;
use super::common::BlockCommon;
use crate::types::BlockId;

/// Macro to reduce boilerplate in Block enum methods
macro_rules! match_all_blocks {
    ($self:expr, $pattern:pat => $result:expr) => {
        match $self {
            Block::Paragraph($pattern) => $result,
            Block::Heading1($pattern) => $result,
            Block::Heading2($pattern) => $result,
            Block::Heading3($pattern) => $result,
            Block::BulletedListItem($pattern) => $result,
            Block::NumberedListItem($pattern) => $result,
            Block::ToDo($pattern) => $result,
            Block::Toggle($pattern) => $result,
            Block::Quote($pattern) => $result,
            Block::Callout($pattern) => $result,
            Block::Code($pattern) => $result,
            Block::Divider($pattern) => $result,
            Block::Image($pattern) => $result,
            Block::Table($pattern) => $result,
            Block::TableRow($pattern) => $result,
            Block::Unsupported($pattern) => $result,
        }
    };
}

/// Block represents every Notion block kind the exporter distinguishes.
///
/// Anything else is parsed into `Unsupported`, which renders as a visible
/// placeholder instead of failing the export.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(TextBlock),
    Heading1(TextBlock),
    Heading2(TextBlock),
    Heading3(TextBlock),
    BulletedListItem(TextBlock),
    NumberedListItem(TextBlock),
    ToDo(ToDoBlock),
    Toggle(TextBlock),
    Quote(TextBlock),
    Callout(CalloutBlock),
    Code(CodeBlock),
    Divider(DividerBlock),
    Image(ImageBlock),
    Table(TableBlock),
    TableRow(TableRowBlock),
    Unsupported(UnsupportedBlock),
}

impl Block {
    /// Get the block's ID
    pub fn id(&self) -> &BlockId {
        &self.common().id
    }

    /// Get the block's children
    pub fn children(&self) -> &[Block] {
        &self.common().children
    }

    /// Whether the API reported descendants for this block.
    pub fn has_children(&self) -> bool {
        self.common().has_children
    }

    /// Get common block data
    pub fn common(&self) -> &BlockCommon {
        match_all_blocks!(self, b => &b.common)
    }

    /// Get mutable common block data
    pub fn common_mut(&mut self) -> &mut BlockCommon {
        match_all_blocks!(self, b => &mut b.common)
    }

    /// Set children
    pub fn set_children(&mut self, children: Vec<Block>) {
        self.common_mut().children = children;
    }

    /// The Notion type name of this block.
    pub fn block_type(&self) -> &str {
        match self {
            Block::Paragraph(_) => "paragraph",
            Block::Heading1(_) => "heading_1",
            Block::Heading2(_) => "heading_2",
            Block::Heading3(_) => "heading_3",
            Block::BulletedListItem(_) => "bulleted_list_item",
            Block::NumberedListItem(_) => "numbered_list_item",
            Block::ToDo(_) => "to_do",
            Block::Toggle(_) => "toggle",
            Block::Quote(_) => "quote",
            Block::Callout(_) => "callout",
            Block::Code(_) => "code",
            Block::Divider(_) => "divider",
            Block::Image(_) => "image",
            Block::Table(_) => "table",
            Block::TableRow(_) => "table_row",
            Block::Unsupported(b) => &b.block_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RichTextItem;

    fn paragraph(id: &str, children: Vec<Block>) -> Block {
        Block::Paragraph(TextBlock {
            common: BlockCommon::new(BlockId::from_api(id)).with_children(children),
            rich_text: vec![RichTextItem::plain_text(id)],
        })
    }

    #[test]
    fn unsupported_blocks_report_their_original_type() {
        let block = Block::Unsupported(UnsupportedBlock {
            common: BlockCommon::new(BlockId::from_api("b")),
            block_type: "synced_block".to_string(),
            malformed: None,
        });
        assert_eq!(block.block_type(), "synced_block");
    }

    #[test]
    fn set_children_replaces_fetched_children() {
        let mut parent = paragraph("parent", vec![]);
        assert!(parent.children().is_empty());

        parent.set_children(vec![paragraph("child", vec![])]);
        assert_eq!(parent.children().len(), 1);
        assert_eq!(parent.children()[0].id().as_str(), "child");
    }
}
