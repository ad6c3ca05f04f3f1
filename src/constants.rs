// src/constants.rs
//! Domain constants that define the operational boundaries of the exporter.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role. Reading these constants should tell you how deep the
//! exporter recurses, how much it asks for per request, and how it lays
//! out the article it writes.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// How many children the Notion API returns per page of results.
///
/// The Notion API maximum is 100. We use the maximum to minimize
/// round-trips while walking a document tree.
pub const NOTION_API_PAGE_SIZE: usize = 100;

/// Maximum nesting depth when recursively fetching block children.
///
/// Deeper levels are silently truncated (their children are left empty).
/// 50 levels is far deeper than any real Notion document.
pub const NOTION_MAX_FETCH_DEPTH: usize = 50;

/// The Notion API version this exporter speaks. Data sources need 2025-09-03.
pub const NOTION_API_VERSION: &str = "2025-09-03";

/// Base URL of the Notion REST API.
pub const NOTION_API_BASE_URL: &str = "https://api.notion.com/v1";

// ---------------------------------------------------------------------------
// Formatting boundaries
// ---------------------------------------------------------------------------

/// Number of spaces per indentation level in rendered Markdown.
pub const INDENT_SPACES: usize = 2;

/// Estimated characters per block, used to pre-allocate output strings.
pub const CHARS_PER_BLOCK_ESTIMATE: usize = 256;

// ---------------------------------------------------------------------------
// Article output
// ---------------------------------------------------------------------------

/// Directory articles are written into unless overridden.
pub const DEFAULT_ARTICLES_DIR: &str = "_articles";

/// Status value an article must carry to be offered for export.
pub const DEFAULT_EXPORT_STATUS: &str = "Done";

/// Lines shown when previewing an article in dry-run mode.
pub const DRY_RUN_PREVIEW_LINES: usize = 60;

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters kept from an error response body.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 800;
