// src/selection.rs
//! Interactive numbered menus for choosing a data source or an article.
//!
//! Input and output are injected so the prompts can be driven from tests.

use crate::api::types::{ArticleSummary, DataSourceSummary};
use crate::error::AppError;
use std::io::{BufRead, Write};

/// A numbered menu read from `input` and printed to `output`.
pub struct SelectionMenu<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> SelectionMenu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Lists `articles` and asks for one.
    ///
    /// Returns `Ok(None)` when the user quits with `q`.
    pub fn choose_article<'a>(
        &mut self,
        articles: &'a [ArticleSummary],
    ) -> Result<Option<&'a ArticleSummary>, AppError> {
        writeln!(self.output, "\nArticles available for export:\n")?;
        for (idx, article) in articles.iter().enumerate() {
            writeln!(self.output, "{}", article_line(idx + 1, article))?;
        }

        let answer =
            self.prompt("\nEnter the number of the article to export (or 'q' to quit): ")?;
        if answer.eq_ignore_ascii_case("q") {
            writeln!(self.output, "Aborted.")?;
            return Ok(None);
        }

        let index = parse_choice(&answer, articles.len())?;
        Ok(Some(&articles[index]))
    }

    /// Lists `sources` and returns the index of the chosen one.
    pub fn choose_data_source(&mut self, sources: &[DataSourceSummary]) -> Result<usize, AppError> {
        writeln!(self.output, "Multiple data sources found for this database:")?;
        for (idx, source) in sources.iter().enumerate() {
            writeln!(
                self.output,
                "{}. {} [{}]",
                idx + 1,
                source.display_name(),
                source.id
            )?;
        }

        let answer = self.prompt("Select data source number: ")?;
        parse_choice(&answer, sources.len())
    }

    fn prompt(&mut self, question: &str) -> Result<String, AppError> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

/// One menu line: `"{n}. {title} [{tags}]"`.
pub fn article_line(number: usize, article: &ArticleSummary) -> String {
    let tags = if article.tags.is_empty() {
        "No tags".to_string()
    } else {
        article.tags.join(", ")
    };
    format!("{}. {} [{}]", number, article.title, tags)
}

/// Turns a 1-based answer into a 0-based index below `len`.
fn parse_choice(answer: &str, len: usize) -> Result<usize, AppError> {
    answer
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=len).contains(n))
        .map(|n| n - 1)
        .ok_or_else(|| AppError::Selection(format!("'{}' is not one of 1..={}", answer, len)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DataSourceId, PageId};
    use std::io::Cursor;

    fn articles() -> Vec<ArticleSummary> {
        vec![
            ArticleSummary {
                id: PageId::from_api("p1"),
                title: "First".to_string(),
                tags: vec!["rust".to_string(), "async".to_string()],
            },
            ArticleSummary {
                id: PageId::from_api("p2"),
                title: "Second".to_string(),
                tags: vec![],
            },
        ]
    }

    #[test]
    fn menu_lines_show_tags_or_placeholder() {
        let articles = articles();
        assert_eq!(article_line(1, &articles[0]), "1. First [rust, async]");
        assert_eq!(article_line(2, &articles[1]), "2. Second [No tags]");
    }

    #[test]
    fn picks_the_numbered_article() {
        let articles = articles();
        let mut out = Vec::new();
        let mut menu = SelectionMenu::new(Cursor::new("2\n"), &mut out);

        let chosen = menu.choose_article(&articles).unwrap().unwrap();
        assert_eq!(chosen.id.as_str(), "p2");

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("1. First [rust, async]"));
        assert!(printed.contains("2. Second [No tags]"));
    }

    #[test]
    fn q_quits_in_any_case() {
        let articles = articles();
        let mut menu = SelectionMenu::new(Cursor::new(" Q \n"), Vec::new());
        assert!(menu.choose_article(&articles).unwrap().is_none());
    }

    #[test]
    fn invalid_answers_are_selection_errors() {
        let articles = articles();
        for answer in ["0\n", "3\n", "two\n", "\n"] {
            let mut menu = SelectionMenu::new(Cursor::new(answer), Vec::new());
            let err = menu.choose_article(&articles).unwrap_err();
            assert!(matches!(err, AppError::Selection(_)), "answer {:?}", answer);
        }
    }

    #[test]
    fn data_source_choice_is_zero_based() {
        let sources = vec![
            DataSourceSummary {
                id: DataSourceId::from_api("ds-1"),
                name: None,
            },
            DataSourceSummary {
                id: DataSourceId::from_api("ds-2"),
                name: Some("Articles".to_string()),
            },
        ];
        let mut out = Vec::new();
        let mut menu = SelectionMenu::new(Cursor::new("2\n"), &mut out);

        assert_eq!(menu.choose_data_source(&sources).unwrap(), 1);
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("1. (no name) [ds-1]"));
        assert!(printed.contains("2. Articles [ds-2]"));
    }
}
