//! seo-sieve main entry point
//!
//! This is the command-line interface for the seo-sieve sitemap crawler.

use anyhow::Context;
use clap::Parser;
use seo_sieve::config::{load_config_with_hash, validate, Config};
use seo_sieve::crawler::{candidate_urls, CrawlEvent, CrawlPipeline};
use seo_sieve::output::{
    describe_event, no_match_message, print_report, render_match_row, write_csv_file,
};
use seo_sieve::url::{join_origin, normalize_website_url, origin_of};
use seo_sieve::{SearchTerms, SieveError};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// seo-sieve: find the pages of a site that mention given keywords
///
/// seo-sieve locates a website's sitemap (robots.txt first, then well-known
/// paths), collects every page URL it lists, extracts each page's title, meta
/// description and first H1, and reports the pages mentioning any search
/// term. Matches are saved as CSV.
#[derive(Parser, Debug)]
#[command(name = "seo-sieve")]
#[command(version = "1.0.0")]
#[command(about = "Sitemap-driven SEO keyword crawler", long_about = None)]
struct Cli {
    /// Website to crawl; the scheme is optional (https:// is assumed)
    #[arg(value_name = "URL")]
    url: String,

    /// Comma-separated search terms, e.g. "2025, AI"
    #[arg(short, long, default_value = "")]
    terms: String,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// CSV output path (overrides the configuration)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Number of pages fetched concurrently (overrides the configuration)
    #[arg(short = 'j', long, value_name = "N")]
    concurrency: Option<u32>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and input and show what would be requested, without network access
    #[arg(long)]
    dry_run: bool,
}

/// Exit code used when the run was interrupted
const EXIT_CANCELLED: u8 = 130;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = load_effective_config(&cli)?;
    let terms = SearchTerms::parse(&cli.terms);

    if cli.dry_run {
        handle_dry_run(&cli, &config, &terms)?;
        return Ok(ExitCode::SUCCESS);
    }

    handle_crawl(&cli, config, terms).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr; stdout carries progress and results.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("seo_sieve=warn,error"),
            1 => EnvFilter::new("seo_sieve=info,warn"),
            2 => EnvFilter::new("seo_sieve=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the config file if one was given, then applies CLI overrides
fn load_effective_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::debug!("No configuration file given, using defaults");
            Config::default()
        }
    };

    if let Some(concurrency) = cli.concurrency {
        config.crawler.concurrency = concurrency;
    }
    if let Some(output) = &cli.output {
        config.output.csv_path = output.display().to_string();
    }

    validate(&config).context("Invalid command-line override")?;
    Ok(config)
}

/// Handles the --dry-run mode: validates input and shows what would be requested
fn handle_dry_run(cli: &Cli, config: &Config, terms: &SearchTerms) -> anyhow::Result<()> {
    let site = normalize_website_url(&cli.url)
        .with_context(|| format!("Invalid website URL: {}", cli.url.trim()))?;
    let origin = origin_of(&site);

    println!("=== seo-sieve Dry Run ===\n");

    println!("Target:");
    println!("  Website: {}", site);
    println!("  Origin: {}", origin);
    println!("  robots.txt: {}", join_origin(&origin, "/robots.txt"));
    println!("  Fallback sitemaps:");
    for candidate in candidate_urls(&origin) {
        println!("    * {}", candidate);
    }

    println!("\nSearch Terms ({}):", terms.len());
    for term in terms.iter() {
        println!("  - {}", term);
    }

    println!("\nCrawler Configuration:");
    println!("  Concurrency: {}", config.crawler.concurrency);
    println!("  robots.txt timeout: {}s", config.crawler.robots_timeout_secs);
    println!("  Sitemap timeout: {}s", config.crawler.sitemap_timeout_secs);
    println!("  Page timeout: {}s", config.crawler.page_timeout_secs);
    println!("  Max sitemaps: {}", config.crawler.max_sitemaps);
    println!("  User agent: {}", config.user_agent.value);

    println!("\nOutput:");
    println!("  CSV: {}", config.output.csv_path);

    println!("\n✓ Configuration is valid");
    if terms.is_empty() {
        println!("! No search terms given: no page would match");
    }

    Ok(())
}

/// Handles the main crawl operation
async fn handle_crawl(cli: &Cli, config: Config, terms: SearchTerms) -> anyhow::Result<ExitCode> {
    if terms.is_empty() {
        tracing::warn!("No search terms given; no page will match");
    }

    let csv_path = PathBuf::from(&config.output.csv_path);
    let pipeline = CrawlPipeline::new(config)?;

    let cancel = pipeline.cancel_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupt received, stopping crawl");
            cancel.cancel();
        }
    });

    let (mut events, handle) = pipeline.spawn(cli.url.clone(), terms);
    while let Some(event) = events.recv().await {
        if cli.quiet {
            continue;
        }
        if let Some(line) = describe_event(&event) {
            println!("{}", line);
        }
        if let CrawlEvent::PageProcessed(progress) = &event {
            if progress.matched {
                println!(
                    "    {}",
                    render_match_row(&progress.record, &progress.highlights)
                );
            }
        }
    }

    let result = handle.await.context("Crawl task failed")?;
    let report = match result {
        Ok(report) => report,
        Err(SieveError::SitemapNotFound { site }) => {
            eprintln!("Could not find a sitemap for {}", site);
            return Ok(ExitCode::FAILURE);
        }
        Err(SieveError::NoUrlsFound { sitemap }) => {
            eprintln!("No URLs found in the sitemap {}", sitemap);
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            return Err(e.into());
        }
    };

    if !cli.quiet {
        println!();
        print_report(&report);
    }

    if let Some(message) = no_match_message(&report) {
        println!("{}", message);
    } else {
        save_matches(&csv_path, &report.matches)?;
        println!(
            "Saved {} matching page(s) to {}",
            report.match_count(),
            csv_path.display()
        );
    }

    if report.is_complete() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(EXIT_CANCELLED))
    }
}

fn save_matches(path: &Path, matches: &[seo_sieve::PageRecord]) -> anyhow::Result<()> {
    write_csv_file(path, matches)
        .with_context(|| format!("Failed to write CSV report {}", path.display()))
}
