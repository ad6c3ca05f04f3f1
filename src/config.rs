// src/config.rs
use crate::constants::{DEFAULT_ARTICLES_DIR, DEFAULT_EXPORT_STATUS};
use crate::error::AppError;
use crate::output::WritePolicy;
use crate::types::{DataSourceId, DatabaseId, PageId};
use clap::Parser;
use std::collections::HashMap;
use std::path::PathBuf;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Notion data source to query (overrides NOTION_DATA_SOURCE_ID)
    #[arg(long)]
    pub data_source: Option<String>,

    /// Notion database whose data source is queried (overrides NOTION_DB_ID)
    #[arg(long)]
    pub database: Option<String>,

    /// Export this page directly, skipping the article menu
    #[arg(long)]
    pub page: Option<String>,

    /// Directory the article is written into
    #[arg(long, default_value = DEFAULT_ARTICLES_DIR)]
    pub articles_dir: PathBuf,

    /// Status an article must have to be listed
    #[arg(long, default_value = DEFAULT_EXPORT_STATUS)]
    pub status: String,

    /// Title used for the front matter when exporting with --page
    #[arg(long)]
    pub title: Option<String>,

    /// Replace an existing article file (same as OVERWRITE=1)
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    /// Print a preview instead of writing (same as DRY_RUN=1)
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Read block listings from a recorded JSON fixture instead of the API
    #[arg(long)]
    pub fixture: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Where block listings come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceConfig {
    Api { api_key: String },
    Fixture { path: PathBuf },
}

/// Resolved export configuration: validated and ready to drive every stage.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub source: SourceConfig,
    pub data_source: Option<DataSourceId>,
    pub database: Option<DatabaseId>,
    pub page: Option<PageId>,
    pub title: Option<String>,
    pub articles_dir: PathBuf,
    pub status: String,
    pub policy: WritePolicy,
    pub verbose: bool,
}

impl ExportConfig {
    /// Resolves a configuration from CLI input and the process environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let env: HashMap<String, String> = std::env::vars().collect();
        Self::resolve_with_env(cli, &env)
    }

    /// Resolves against an explicit environment. CLI flags win over variables.
    pub fn resolve_with_env(
        cli: CommandLineInput,
        env: &HashMap<String, String>,
    ) -> Result<Self, AppError> {
        let var = |name: &str| env.get(name).map(|v| v.trim()).filter(|v| !v.is_empty());
        let flag = |name: &str| var(name) == Some("1");

        let source = match cli.fixture {
            Some(path) => SourceConfig::Fixture { path },
            None => {
                let api_key = var("NOTION_API_KEY").ok_or_else(|| {
                    AppError::MissingConfiguration(
                        "NOTION_API_KEY environment variable not set".to_string(),
                    )
                })?;
                SourceConfig::Api {
                    api_key: api_key.to_string(),
                }
            }
        };

        let page = cli.page.as_deref().map(PageId::parse).transpose()?;
        let data_source = cli
            .data_source
            .as_deref()
            .or_else(|| var("NOTION_DATA_SOURCE_ID"))
            .map(DataSourceId::parse)
            .transpose()?;
        let database = cli
            .database
            .as_deref()
            .or_else(|| var("NOTION_DB_ID"))
            .map(DatabaseId::parse)
            .transpose()?;

        if matches!(source, SourceConfig::Fixture { .. }) && page.is_none() {
            return Err(AppError::MissingConfiguration(
                "--fixture needs --page: fixtures only record block listings".to_string(),
            ));
        }
        if page.is_none() && data_source.is_none() && database.is_none() {
            return Err(AppError::MissingConfiguration(
                "set NOTION_DATA_SOURCE_ID or NOTION_DB_ID, or pass --page".to_string(),
            ));
        }

        Ok(ExportConfig {
            source,
            data_source,
            database,
            page,
            title: cli.title,
            articles_dir: cli.articles_dir,
            status: cli.status,
            policy: WritePolicy {
                overwrite: cli.overwrite || flag("OVERWRITE"),
                dry_run: cli.dry_run || flag("DRY_RUN"),
            },
            verbose: cli.verbose,
        })
    }
}
