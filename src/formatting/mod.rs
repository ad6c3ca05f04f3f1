// src/formatting/mod.rs
//! Renders fetched block trees into Markdown.

pub mod block_renderer;
mod rich_text;
mod state;
mod table;

// Re-export the public interface
pub use block_renderer::{render_block, render_blocks, render_document};
pub use rich_text::{escape_table_cell, rich_text_to_markdown};
pub use state::RenderContext;
pub use table::{render_table, render_table_row};
