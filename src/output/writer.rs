// src/output/writer.rs
//! Delivers assembled articles to disk.
//!
//! This module is the only place where file I/O operations occur,
//! keeping the rest of the codebase pure and testable.

use super::paths::article_path;
use super::types::{ArticleDocument, ArticleOutcome, WritePolicy};
use crate::constants::DRY_RUN_PREVIEW_LINES;
use crate::error::AppError;
use std::fs;
use std::path::Path;

/// Writes `article` to `<articles_dir>/<slug>.md` according to `policy`.
///
/// An existing file is left untouched unless overwriting is allowed; that
/// is reported as an outcome, not an error. A dry run writes nothing and
/// returns a preview.
pub fn deliver_article(
    article: &ArticleDocument,
    articles_dir: &Path,
    policy: WritePolicy,
) -> Result<ArticleOutcome, AppError> {
    let path = article_path(articles_dir, &article.slug);

    if path.exists() && !policy.overwrite {
        log::warn!(
            "Refusing to overwrite existing file: {} (set OVERWRITE=1 to override)",
            path.display()
        );
        return Ok(ArticleOutcome::SkippedExisting { path });
    }

    if policy.dry_run {
        log::info!("Dry run: not writing {}", path.display());
        let preview = preview(&article.content, DRY_RUN_PREVIEW_LINES);
        return Ok(ArticleOutcome::Previewed { path, preview });
    }

    let bytes_written = write_file(&path, &article.content)?;
    Ok(ArticleOutcome::Written {
        path,
        bytes_written,
    })
}

/// The first `max_lines` lines of `content`, marked when cut short.
pub fn preview(content: &str, max_lines: usize) -> String {
    let lines: Vec<&str> = content.lines().collect();
    let mut preview = lines
        .iter()
        .take(max_lines)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");
    if lines.len() > max_lines {
        preview.push_str("\n\n... (truncated)");
    }
    preview
}

/// Writes content to a file.
fn write_file(path: &Path, content: &str) -> Result<usize, AppError> {
    log::debug!("Writing {} bytes to {}", content.len(), path.display());

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, content)?;

    log::info!("Wrote file: {}", path.display());
    Ok(content.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(content: &str) -> ArticleDocument {
        ArticleDocument {
            slug: "hello".to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn writes_into_a_fresh_directory() {
        let dir = tempfile::tempdir().unwrap();
        let articles_dir = dir.path().join("_articles");

        let outcome =
            deliver_article(&article("body\n"), &articles_dir, WritePolicy::default()).unwrap();

        let path = articles_dir.join("hello.md");
        assert_eq!(
            outcome,
            ArticleOutcome::Written {
                path: path.clone(),
                bytes_written: 5
            }
        );
        assert_eq!(fs::read_to_string(path).unwrap(), "body\n");
    }

    #[test]
    fn existing_file_is_kept_without_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hello.md");
        fs::write(&path, "original").unwrap();

        let outcome =
            deliver_article(&article("new\n"), dir.path(), WritePolicy::default()).unwrap();

        assert_eq!(outcome, ArticleOutcome::SkippedExisting { path: path.clone() });
        assert_eq!(fs::read_to_string(path).unwrap(), "original");
    }

    #[test]
    fn overwrite_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hello.md");
        fs::write(&path, "original").unwrap();

        let policy = WritePolicy {
            overwrite: true,
            dry_run: false,
        };
        deliver_article(&article("new\n"), dir.path(), policy).unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "new\n");
    }

    #[test]
    fn dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let policy = WritePolicy {
            overwrite: false,
            dry_run: true,
        };

        let outcome = deliver_article(&article("a\nb\n"), dir.path(), policy).unwrap();

        assert_eq!(
            outcome,
            ArticleOutcome::Previewed {
                path: dir.path().join("hello.md"),
                preview: "a\nb".to_string()
            }
        );
        assert!(!dir.path().join("hello.md").exists());
    }

    #[test]
    fn long_previews_are_truncated() {
        let content: String = (1..=70).map(|i| format!("line {}\n", i)).collect();
        let preview = preview(&content, 60);
        assert!(preview.starts_with("line 1\n"));
        assert!(preview.contains("line 60\n\n... (truncated)"));
        assert!(!preview.contains("line 61"));
    }
}
