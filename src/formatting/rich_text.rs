// src/formatting/rich_text.rs
//! Converts rich text runs into inline Markdown.

use crate::types::{Annotations, RichTextItem};

/// Renders a run sequence as inline Markdown.
///
/// Each run is wrapped, when the matching flag is set, in this fixed order:
/// link, code, bold, italic, strikethrough, underline. Later wraps enclose
/// earlier ones, so a bold link reads `**[text](url)**`.
pub fn rich_text_to_markdown(items: &[RichTextItem]) -> String {
    items.iter().map(render_run).collect()
}

fn render_run(item: &RichTextItem) -> String {
    let mut text = item.plain_text.clone();

    if let Some(href) = item.href.as_deref().filter(|href| !href.is_empty()) {
        text = format!("[{}]({})", text, href);
    }
    apply_annotations(text, &item.annotations)
}

fn apply_annotations(mut text: String, annotations: &Annotations) -> String {
    if annotations.code {
        text = format!("`{}`", text);
    }
    if annotations.bold {
        text = format!("**{}**", text);
    }
    if annotations.italic {
        text = format!("*{}*", text);
    }
    if annotations.strikethrough {
        text = format!("~~{}~~", text);
    }
    // Markdown has no underline syntax
    if annotations.underline {
        text = format!("<u>{}</u>", text);
    }
    text
}

/// Makes inline Markdown safe inside a pipe-table cell.
pub fn escape_table_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', "<br>")
}
