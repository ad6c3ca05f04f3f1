// src/main.rs

use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use notion2article::{
    compose_article, deliver_article, query_articles, render_document, resolve_data_source,
    AppError, ArticleComposer, ArticleDelivery, ArticleDocument, ArticleMetadata, ArticleOutcome,
    ArticleSummary, BlockId, ChildrenSource, CommandLineInput, ContentSource, ExportConfig,
    FixtureChildrenSource, NotionHttpClient, PageId, SelectionMenu, SourceConfig, TreeFetcher,
};
use notion2article::model::Block;
use std::fs;
use std::sync::Arc;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("notion2article.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    // Logs go to stderr so a dry-run preview on stdout stays clean
    let console_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("console", Box::new(console_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("console")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Runs one export: choose article → fetch tree → render → deliver → report.
async fn execute_export(config: &ExportConfig) -> Result<(), AppError> {
    let (source, client): (Arc<dyn ChildrenSource>, Option<NotionHttpClient>) =
        match &config.source {
            SourceConfig::Api { api_key } => {
                let client = NotionHttpClient::new(api_key)?;
                (Arc::new(client.clone()), Some(client))
            }
            SourceConfig::Fixture { path } => {
                log::info!("Reading block listings from fixture {}", path.display());
                (Arc::new(FixtureChildrenSource::from_file(path)?), None)
            }
        };

    let selected = match (&config.page, &client) {
        (Some(page), _) => direct_article(page, config.title.as_deref()),
        (None, Some(client)) => match choose_article(config, client).await? {
            Some(article) => article,
            None => return Ok(()),
        },
        (None, None) => {
            return Err(AppError::MissingConfiguration(
                "no page given and no API access to list articles".to_string(),
            ))
        }
    };

    let date = chrono::Local::now().date_naive();
    let meta = ArticleMetadata::from_summary(&selected, date);
    println!(
        "\nExporting:\n Title: {}\n Slug: {}\n Date: {}\n Tags: {:?}\n",
        meta.title, meta.slug, meta.date, meta.tags
    );

    let export = ArticleExport::new(config, TreeFetcher::new(source));

    println!("Fetching Notion blocks...");
    let blocks = export.fetch(&meta.notion_id).await?;
    let article = export.compose(&meta, &blocks)?;
    let outcome = export.deliver(&article)?;
    report_outcome(&outcome);

    Ok(())
}

/// An article named on the command line rather than picked from the menu.
fn direct_article(page: &PageId, title: Option<&str>) -> ArticleSummary {
    ArticleSummary {
        id: page.clone(),
        title: title.map(str::to_string).unwrap_or_else(|| page.to_string()),
        tags: Vec::new(),
    }
}

/// Lists the exportable articles and lets the user pick one.
async fn choose_article(
    config: &ExportConfig,
    client: &NotionHttpClient,
) -> Result<Option<ArticleSummary>, AppError> {
    let mut menu = SelectionMenu::new(std::io::stdin().lock(), std::io::stdout());

    let data_source = resolve_data_source(
        client,
        config.data_source.as_ref(),
        config.database.as_ref(),
        |sources| menu.choose_data_source(sources),
    )
    .await?;

    let articles = query_articles(client, &data_source, &config.status).await?;
    if articles.is_empty() {
        println!("No pages found (check Status filter or check data source contents)");
        return Ok(None);
    }

    Ok(menu.choose_article(&articles)?.cloned())
}

fn report_outcome(outcome: &ArticleOutcome) {
    match outcome {
        ArticleOutcome::Written { path, bytes_written } => {
            println!("✓ Article saved to {} ({} bytes)", path.display(), bytes_written);
        }
        ArticleOutcome::SkippedExisting { path } => {
            eprintln!(
                "⚠️  Refusing to overwrite existing file: {} (set OVERWRITE=1 or pass --overwrite)",
                path.display()
            );
        }
        ArticleOutcome::Previewed { preview, .. } => {
            println!("DRY_RUN=1, preview only:");
            println!("{}", preview);
        }
    }
    println!("Output path: {}", outcome.path().display());
}

/// Orchestrates the retrieval, rendering, and delivery of one article.
struct ArticleExport<'a> {
    config: &'a ExportConfig,
    fetcher: TreeFetcher,
}

impl<'a> ArticleExport<'a> {
    fn new(config: &'a ExportConfig, fetcher: TreeFetcher) -> Self {
        Self { config, fetcher }
    }
}

#[async_trait::async_trait]
impl ContentSource for ArticleExport<'_> {
    async fn fetch(&self, page: &PageId) -> Result<Vec<Block>, AppError> {
        let result = self
            .fetcher
            .fetch_tree_with_metadata(&BlockId::from(page))
            .await?;

        let metadata = &result.metadata;
        if metadata.depth_truncations > 0 {
            eprintln!(
                "⚠️  Maximum recursion depth reached. Some deeply nested content is missing."
            );
        }
        println!(
            "📄 Fetched {} blocks with {} requests.",
            metadata.blocks_fetched, metadata.requests_issued
        );

        Ok(result.data)
    }
}

impl ArticleComposer for ArticleExport<'_> {
    fn compose(
        &self,
        meta: &ArticleMetadata,
        blocks: &[Block],
    ) -> Result<ArticleDocument, AppError> {
        let body = render_document(blocks);
        Ok(compose_article(meta, &body)?)
    }
}

impl ArticleDelivery for ArticleExport<'_> {
    fn deliver(&self, article: &ArticleDocument) -> Result<ArticleOutcome, AppError> {
        deliver_article(article, &self.config.articles_dir, self.config.policy)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = ExportConfig::resolve(cli)?;

    execute_export(&config).await?;

    Ok(())
}
