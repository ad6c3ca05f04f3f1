// src/output/paths.rs
//! Pure functions for slugs and article paths.
//!
//! Nothing here touches the filesystem.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

static NON_SLUG_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("slug regex is valid"));

/// Slug used when a title has no usable characters.
const FALLBACK_SLUG: &str = "untitled";

/// Turns an article title into a URL slug.
///
/// Lowercases, replaces every run of characters outside `[a-z0-9]` with a
/// single `-` and trims leading and trailing dashes.
pub fn slugify(title: &str) -> String {
    let lowered = title.trim().to_lowercase();
    let slug = NON_SLUG_RUN.replace_all(&lowered, "-");
    let slug = slug.trim_matches('-');

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// Where the article with `slug` lives inside `articles_dir`.
pub fn article_path(articles_dir: &Path, slug: &str) -> PathBuf {
    articles_dir.join(format!("{}.md", slug))
}
