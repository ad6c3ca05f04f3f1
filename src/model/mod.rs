//! The in-memory document tree: blocks as fetched from Notion.

mod block;
pub mod blocks;
mod common;

pub use block::Block;
pub use blocks::*;
pub use common::BlockCommon;
