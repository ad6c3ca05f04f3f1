// src/formatting/state.rs
//! Traversal state threaded through rendering.

use crate::constants::INDENT_SPACES;

/// Where in the tree a sequence of blocks is being rendered.
///
/// Immutable: each transition returns a new context for the children while
/// the caller keeps its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderContext {
    /// Nesting level; each level indents by `INDENT_SPACES`.
    pub depth: usize,
    /// Siblings are joined tightly (single newline) when set.
    pub list_context: bool,
}

impl RenderContext {
    /// Top-level document context.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn new(depth: usize, list_context: bool) -> Self {
        Self {
            depth,
            list_context,
        }
    }

    /// Context for the children of a list item: one level deeper, tight.
    pub fn nested_list(&self) -> Self {
        Self::new(self.depth + 1, true)
    }

    /// Context for the body of a collapsible section: same depth, loose.
    pub fn section_body(&self) -> Self {
        Self::new(self.depth, false)
    }

    /// Leading whitespace for a line at this depth.
    pub fn indent(&self) -> String {
        " ".repeat(self.depth * INDENT_SPACES)
    }

    /// Separator placed between rendered siblings.
    pub fn separator(&self) -> &'static str {
        if self.list_context {
            "\n"
        } else {
            "\n\n"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_list_indents_and_tightens() {
        let ctx = RenderContext::root().nested_list().nested_list();
        assert_eq!(ctx.indent(), "    ");
        assert_eq!(ctx.separator(), "\n");
    }

    #[test]
    fn section_body_keeps_depth_but_loosens() {
        let ctx = RenderContext::new(2, true).section_body();
        assert_eq!(ctx.depth, 2);
        assert_eq!(ctx.separator(), "\n\n");
    }
}
