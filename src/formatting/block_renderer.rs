// src/formatting/block_renderer.rs
//! Block rendering engine: converts a fetched block tree to Markdown.
//!
//! Rendering is a depth-first walk. Each block renders to at most one
//! string, siblings are joined according to the [`RenderContext`], and a
//! block that cannot be rendered degrades to a visible placeholder rather
//! than failing the document.

use super::rich_text::rich_text_to_markdown;
use super::state::RenderContext;
use super::table::{render_table, render_table_row};
use crate::constants::CHARS_PER_BLOCK_ESTIMATE;
use crate::model::*;
use crate::types::RichTextItem;

// --- Public API ---

/// Renders a document's top-level blocks.
pub fn render_document(blocks: &[Block]) -> String {
    log::debug!("Rendering {} top-level blocks", blocks.len());
    render_blocks(blocks, RenderContext::root())
}

/// Renders a sibling sequence.
///
/// Blank renders are dropped before joining, so they never leave stray
/// separators behind.
pub fn render_blocks(blocks: &[Block], ctx: RenderContext) -> String {
    let mut output = String::with_capacity(blocks.len() * CHARS_PER_BLOCK_ESTIMATE);

    for rendered in blocks
        .iter()
        .filter_map(|block| render_block(block, ctx))
    {
        if !output.is_empty() {
            output.push_str(ctx.separator());
        }
        output.push_str(&rendered);
    }

    output
}

/// Renders one block and, where its kind calls for it, its children.
///
/// Returns `None` when the block renders to nothing visible.
pub fn render_block(block: &Block, ctx: RenderContext) -> Option<String> {
    let indent = ctx.indent();

    let rendered = match block {
        Block::Paragraph(b) => format!("{}{}", indent, rich_text_to_markdown(&b.rich_text)),
        Block::Heading1(b) => format!("{}# {}", indent, rich_text_to_markdown(&b.rich_text)),
        Block::Heading2(b) => format!("{}## {}", indent, rich_text_to_markdown(&b.rich_text)),
        Block::Heading3(b) => format!("{}### {}", indent, rich_text_to_markdown(&b.rich_text)),
        Block::BulletedListItem(b) => list_item(block, ctx, "- ", &b.rich_text),
        // Ordinals are left to the Markdown renderer
        Block::NumberedListItem(b) => list_item(block, ctx, "1. ", &b.rich_text),
        Block::ToDo(b) => {
            let marker = if b.checked { "- [x] " } else { "- [ ] " };
            list_item(block, ctx, marker, &b.rich_text)
        }
        Block::Quote(b) => format!("{}> {}", indent, rich_text_to_markdown(&b.rich_text)),
        Block::Code(b) => format!(
            "{indent}```{}\n{}\n{indent}```",
            b.language,
            rich_text_to_markdown(&b.rich_text),
        ),
        Block::Divider(_) => format!("{}---", indent),
        Block::Callout(b) => {
            let emoji = b
                .emoji
                .as_deref()
                .filter(|emoji| !emoji.is_empty())
                .map(|emoji| format!("{} ", emoji))
                .unwrap_or_default();
            format!("{}> {}{}", indent, emoji, rich_text_to_markdown(&b.rich_text))
        }
        Block::Image(b) => {
            let caption = rich_text_to_markdown(&b.caption);
            let alt = if caption.is_empty() { "image" } else { &caption };
            format!("{}![{}]({})", indent, alt, b.source.url())
        }
        Block::Toggle(b) => toggle(block, ctx, &b.rich_text),
        Block::Table(b) => render_table(b, ctx),
        Block::TableRow(b) => render_table_row(b, ctx),
        Block::Unsupported(b) => {
            if let Some(reason) = &b.malformed {
                log::debug!(
                    "Rendering placeholder for malformed {} {}: {}",
                    b.block_type,
                    b.common.id,
                    reason
                );
            }
            format!("{}<!-- Unsupported block type: {} -->", indent, b.block_type)
        }
    };

    if rendered.trim().is_empty() {
        None
    } else {
        Some(rendered)
    }
}

// --- Composite Blocks ---

/// A list line with its children attached tightly one level deeper.
fn list_item(
    block: &Block,
    ctx: RenderContext,
    marker: &str,
    rich_text: &[RichTextItem],
) -> String {
    let line = format!("{}{}{}", ctx.indent(), marker, rich_text_to_markdown(rich_text));
    let children = render_blocks(block.children(), ctx.nested_list());
    if children.is_empty() {
        return line;
    }
    format!("{}\n{}", line, children)
}

/// A `<details>` section whose body stays at the toggle's own depth.
fn toggle(block: &Block, ctx: RenderContext, rich_text: &[RichTextItem]) -> String {
    let indent = ctx.indent();
    let summary = rich_text_to_markdown(rich_text);

    let body = render_blocks(block.children(), ctx.section_body());
    if body.is_empty() {
        return format!(
            "{indent}<details>\n{indent}<summary>{}</summary>\n{indent}</details>",
            summary
        );
    }

    format!(
        "{indent}<details>\n{indent}<summary>{}</summary>\n\n{}\n\n{indent}</details>",
        summary, body
    )
}
