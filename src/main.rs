use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rss_digest::catalog::SourceCatalog;
use rss_digest::cli::{Cli, Commands};
use rss_digest::config::Config;
use rss_digest::services::{CatalogService, DigestService, SummaryOptions, SummaryRenderer};
use rss_digest::sources::HttpFeedFetcher;

fn main() {
    // Diagnostics go to stderr so they never mix with the summaries on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env().context("failed to load configuration")?;
    let catalog_path = cli.catalog.or_else(|| config.catalog_path.clone());

    match cli.command {
        Commands::Run {
            category,
            day,
            max_items,
        } => {
            let catalog = load_catalog(catalog_path)?;
            let category = category.or_else(|| config.category.clone());
            cmd_run(&catalog, category.as_deref(), day, max_items, &config)
        }
        Commands::Show {
            url,
            day,
            max_items,
        } => cmd_show(&url, day, max_items, &config),
        Commands::Categories => cmd_categories(&load_catalog(catalog_path)?),
        Commands::Export { output } => cmd_export(&load_catalog(catalog_path)?, output),
    }
}

fn load_catalog(path: Option<PathBuf>) -> anyhow::Result<SourceCatalog> {
    match path {
        Some(path) => SourceCatalog::load(&path)
            .with_context(|| format!("failed to load catalog {}", path.display())),
        None => Ok(SourceCatalog::default()),
    }
}

fn digest_service(
    day: Option<u32>,
    max_items: Option<usize>,
    config: &Config,
) -> DigestService<HttpFeedFetcher> {
    let options = SummaryOptions::new(day, Some(max_items.unwrap_or(config.max_items)));
    DigestService::new(
        HttpFeedFetcher::with_timeout(config.timeout),
        SummaryRenderer::new(options),
    )
}

fn cmd_run(
    catalog: &SourceCatalog,
    category: Option<&str>,
    day: Option<u32>,
    max_items: Option<usize>,
    config: &Config,
) -> anyhow::Result<()> {
    let category = catalog.select(category)?;
    let service = digest_service(day, max_items, config);

    let mut out = io::stdout().lock();
    service.run(category, &mut out)?;
    out.flush()?;

    Ok(())
}

fn cmd_show(
    url: &str,
    day: Option<u32>,
    max_items: Option<usize>,
    config: &Config,
) -> anyhow::Result<()> {
    let service = digest_service(day, max_items, config);

    let mut out = io::stdout().lock();
    service.show(url, &mut out)?;
    out.flush()?;

    Ok(())
}

fn cmd_categories(catalog: &SourceCatalog) -> anyhow::Result<()> {
    let default = catalog.select(None).ok().map(|c| c.name.as_str());

    println!("Categories:\n");
    for category in &catalog.categories {
        let marker = if Some(category.name.as_str()) == default {
            " (default)"
        } else {
            ""
        };
        println!(
            "  {}{} - {} sources",
            category.name,
            marker,
            category.sources.len()
        );
    }

    Ok(())
}

fn cmd_export(catalog: &SourceCatalog, output: Option<PathBuf>) -> anyhow::Result<()> {
    let opml = CatalogService::export_opml(catalog)?;

    match output {
        Some(path) => {
            fs::write(&path, &opml)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Exported catalog to {}", path.display());
        }
        None => {
            println!("{}", opml);
        }
    }

    Ok(())
}
