use anyhow::Context;
use clap::Parser;
use cureat::{
    config::Config, Combine, JsonCatalog, KeywordMatch, QueryFilter, SearchOutcome, SearchSession,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cureat", about = "Filter a restaurant catalog by search terms")]
struct Cli {
    /// Search terms. Every term must match unless --any is given.
    terms: Vec<String>,

    /// JSON catalog to search. Overrides `catalog.path` from the config file.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Config file to use instead of ~/.config/cureat/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Keep records matching at least one term instead of all of them.
    #[arg(long)]
    any: bool,

    /// Compare terms to keywords by equality instead of substring.
    #[arg(long)]
    exact_keywords: bool,

    /// Print matches as a JSON array.
    #[arg(long)]
    json: bool,

    /// Log at debug level to stderr.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(if cli.debug { "debug" } else { "info" })
            }),
        )
        .init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!(
                error = %e,
                path = %Config::path().display(),
                "config unreadable, using defaults"
            );
            Config::defaults()
        }),
    };

    let catalog = cli
        .catalog
        .clone()
        .or_else(|| config.catalog.path.clone())
        .context("no catalog given: pass --catalog or set catalog.path in the config file")?;

    let mut options = config.search.filter_options();
    if cli.any {
        options.combine = Combine::Any;
    }
    if cli.exact_keywords {
        options.keyword_match = KeywordMatch::Exact;
    }
    let source = JsonCatalog::new(catalog);
    tracing::debug!(catalog = %source.path().display(), ?options, "searching");

    let session = SearchSession::new(
        source,
        QueryFilter::new(options),
        config.history.capacity,
    );

    let records = match session.search(cli.terms).await? {
        SearchOutcome::Fresh(records) => records,
        SearchOutcome::Stale => anyhow::bail!("search was superseded"),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    } else {
        for record in &records {
            println!("{}\t{}\t{}", record.id, record.name, record.keywords.join(","));
        }
    }

    Ok(())
}
