// src/output/front_matter.rs
//! Assembles an article: YAML front matter followed by the rendered body.

use super::types::{ArticleDocument, ArticleMetadata};
use std::fmt::Write;

/// Builds the front matter block, closing `---` line included.
pub fn render_front_matter(meta: &ArticleMetadata) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "---")?;
    writeln!(out, "layout: article")?;
    writeln!(out, "title: \"{}\"", escape_quotes(&meta.title))?;
    writeln!(out, "date: \"{}\"", meta.date.format("%Y-%m-%d"))?;
    if !meta.tags.is_empty() {
        let tags: Vec<String> = meta
            .tags
            .iter()
            .map(|tag| format!("\"{}\"", escape_quotes(tag)))
            .collect();
        writeln!(out, "tags: [{}]", tags.join(", "))?;
    }
    writeln!(out, "notion_id: \"{}\"", meta.notion_id)?;
    writeln!(out, "slug: \"{}\"", meta.slug)?;
    writeln!(out, "---")?;
    Ok(out)
}

/// Front matter plus `body`, with trailing whitespace trimmed to one newline.
pub fn compose_article(
    meta: &ArticleMetadata,
    body: &str,
) -> Result<ArticleDocument, std::fmt::Error> {
    let front_matter = render_front_matter(meta)?;
    let content = format!("{}{}\n", front_matter, body.trim_end());
    Ok(ArticleDocument {
        slug: meta.slug.clone(),
        content,
    })
}

fn escape_quotes(value: &str) -> String {
    value.replace('"', "\\\"")
}
