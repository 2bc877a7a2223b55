//! apache-search main entry point
//!
//! This is the command-line interface for listing autoindex directory pages.

use autoindex_search::config::{load_config_or_default, Config};
use autoindex_search::crawler::{build_http_client, Crawler, PageSource};
use autoindex_search::output::{render_heading, render_section, DisplayMode, Section};
use autoindex_search::url::parse_listing_url;
use autoindex_search::SearchError;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// apache-search: list files and directories of an autoindex page
///
/// Fetches the directory listing an HTTP file server (Apache httpd and
/// friends) generates for URL and prints its files and subdirectories.
/// URL must be the full path of the directory to list.
#[derive(Parser, Debug)]
#[command(name = "apache-search")]
#[command(version)]
#[command(about = "List files and directories of autoindex pages", long_about = None)]
struct Cli {
    /// Full URL of the directory listing
    #[arg(value_name = "URL")]
    url: String,

    /// Show files only
    #[arg(short, long, conflicts_with = "dirs")]
    files: bool,

    /// Show directories only
    #[arg(short, long, conflicts_with = "files")]
    dirs: bool,

    /// Show URLs only
    #[arg(short = 'u', long)]
    display_url: bool,

    /// List files of every directory below URL as well
    #[arg(short, long, conflicts_with_all = ["files", "dirs"])]
    recursive: bool,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress everything but errors in the log
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("apache-search failed: {:?}", e);
            eprintln!(">> ERR >> {}: {}", e.kind(), e);
            ExitCode::FAILURE
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so the tables on stdout stay clean.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("autoindex_search=warn,warn"),
            1 => EnvFilter::new("autoindex_search=info,warn"),
            2 => EnvFilter::new("autoindex_search=debug,info"),
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

/// Lists the requested sections for the URL given on the command line
async fn run(cli: Cli) -> Result<(), SearchError> {
    let config: Config = load_config_or_default(cli.config.as_deref())?;
    let url = parse_listing_url(&cli.url)?;
    let client = build_http_client(&config.http)?;
    let mode = DisplayMode::from_flags(cli.files, cli.dirs, cli.recursive);

    print!("{}", render_heading(&url));

    if mode == DisplayMode::Recursive {
        let crawler = Crawler::new(client, config.crawl.clone());
        let (files, stats) = crawler.crawl_with_stats(&url).await?;
        tracing::info!(
            "Listed {} pages ({} directories not followed)",
            stats.pages,
            stats.skipped
        );
        print!("{}", render_section(Section::Files, &files, cli.display_url));
        return Ok(());
    }

    // One page serves both sections
    let mut page = PageSource::new(url, client);
    if mode.shows_files() {
        let files = page.files().await?;
        print!("{}", render_section(Section::Files, files, cli.display_url));
    }
    if mode.shows_dirs() {
        let dirs = page.subpages().await?;
        print!("{}", render_section(Section::Directories, dirs, cli.display_url));
    }

    Ok(())
}
