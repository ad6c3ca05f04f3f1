// src/formatting/table.rs
//! Reconstructs GitHub-flavoured pipe tables from table blocks.

use super::rich_text::{escape_table_cell, rich_text_to_markdown};
use super::state::RenderContext;
use crate::model::{Block, TableBlock, TableRowBlock};
use crate::types::RichTextItem;

/// Renders a table block together with its fetched `table_row` children.
///
/// Width is the larger of the declared width and the longest row. Rows are
/// padded to that width. Without a declared column header an all-empty
/// header row is emitted, since pipe tables cannot omit one.
pub fn render_table(table: &TableBlock, ctx: RenderContext) -> String {
    let indent = ctx.indent();
    let rows: Vec<Vec<String>> = table
        .common
        .children
        .iter()
        .filter_map(|child| match child {
            Block::TableRow(row) => Some(render_cells(&row.cells)),
            _ => None,
        })
        .collect();

    let inferred_width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let width = inferred_width.max(table.table_width);
    if width == 0 {
        return format!("{}<table></table>", indent);
    }

    let mut rows = rows.into_iter().map(|mut row| {
        row.resize(width, String::new());
        row
    });

    let header = if table.has_column_header {
        rows.next().unwrap_or_else(|| vec![String::new(); width])
    } else {
        vec![String::new(); width]
    };

    let mut lines = Vec::with_capacity(2 + table.common.children.len());
    lines.push(format_row(&indent, &header));
    lines.push(format_row(&indent, &vec!["---".to_string(); width]));
    lines.extend(rows.map(|row| format_row(&indent, &row)));
    lines.join("\n")
}

/// Renders a row met outside of any table.
pub fn render_table_row(row: &TableRowBlock, ctx: RenderContext) -> String {
    format_row(&ctx.indent(), &render_cells(&row.cells))
}

fn render_cells(cells: &[Vec<RichTextItem>]) -> Vec<String> {
    cells
        .iter()
        .map(|cell| escape_table_cell(&rich_text_to_markdown(cell)))
        .collect()
}

fn format_row(indent: &str, cells: &[String]) -> String {
    format!("{}| {} |", indent, cells.join(" | "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BlockCommon;
    use crate::types::BlockId;
    use pretty_assertions::assert_eq;

    fn row(cells: &[&str]) -> Block {
        Block::TableRow(TableRowBlock {
            common: BlockCommon::new(BlockId::from_api("row")),
            cells: cells
                .iter()
                .map(|text| vec![RichTextItem::plain_text(text)])
                .collect(),
        })
    }

    fn table(width: usize, header: bool, rows: Vec<Block>) -> TableBlock {
        TableBlock {
            common: BlockCommon::new(BlockId::from_api("table")).with_children(rows),
            table_width: width,
            has_column_header: header,
        }
    }

    #[test]
    fn header_row_comes_from_first_row() {
        let t = table(3, true, vec![row(&["X", "Y", "Z"]), row(&["1", "2", "3"])]);
        assert_eq!(
            render_table(&t, RenderContext::root()),
            "| X | Y | Z |\n| --- | --- | --- |\n| 1 | 2 | 3 |"
        );
    }

    #[test]
    fn missing_header_is_synthesised_blank() {
        let t = table(3, false, vec![row(&["1", "2", "3"])]);
        assert_eq!(
            render_table(&t, RenderContext::root()),
            "|  |  |  |\n| --- | --- | --- |\n| 1 | 2 | 3 |"
        );
    }

    #[test]
    fn width_grows_to_longest_row_and_pads_short_rows() {
        let t = table(1, true, vec![row(&["a"]), row(&["b", "c"])]);
        assert_eq!(
            render_table(&t, RenderContext::root()),
            "| a |  |\n| --- | --- |\n| b | c |"
        );
    }

    #[test]
    fn declared_width_wins_over_narrow_rows() {
        let t = table(3, false, vec![row(&["a"])]);
        assert_eq!(
            render_table(&t, RenderContext::root()),
            "|  |  |  |\n| --- | --- | --- |\n| a |  |  |"
        );
    }

    #[test]
    fn zero_width_table_is_a_placeholder() {
        let t = table(0, true, vec![]);
        assert_eq!(render_table(&t, RenderContext::new(1, false)), "  <table></table>");
    }

    #[test]
    fn header_only_declared_with_no_rows() {
        let t = table(2, true, vec![]);
        assert_eq!(
            render_table(&t, RenderContext::root()),
            "|  |  |\n| --- | --- |"
        );
    }

    #[test]
    fn every_line_is_indented() {
        let t = table(1, true, vec![row(&["h"]), row(&["v"])]);
        assert_eq!(
            render_table(&t, RenderContext::new(1, false)),
            "  | h |\n  | --- |\n  | v |"
        );
    }

    #[test]
    fn non_row_children_are_ignored() {
        let stray = Block::Divider(crate::model::DividerBlock {
            common: BlockCommon::new(BlockId::from_api("d")),
        });
        let t = table(1, false, vec![stray, row(&["only"])]);
        assert_eq!(
            render_table(&t, RenderContext::root()),
            "|  |\n| --- |\n| only |"
        );
    }

    #[test]
    fn cells_are_escaped() {
        let t = table(1, true, vec![row(&["a|b\nc"])]);
        assert_eq!(
            render_table(&t, RenderContext::root()),
            "| a\\|b<br>c |\n| --- |"
        );
    }

    #[test]
    fn standalone_row_renders_as_pipe_line() {
        let Block::TableRow(r) = row(&["1", "2"]) else {
            unreachable!()
        };
        assert_eq!(render_table_row(&r, RenderContext::new(1, false)), "  | 1 | 2 |");
    }
}
