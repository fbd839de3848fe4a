// main.rs - crawlrust - Domain crawler with secret, endpoint and file-type detection
// Purpose: Parse flags, load rule and ignore files, run the crawl, write reports

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};

mod crawler;
mod extract;
mod output;
mod rules;
mod scanner;
mod scope;

use crawler::{crawl, CrawlConfig};

/// crawlrust - crawl one domain and flag leaked secrets, juicy endpoints and
/// sensitive file types
#[derive(Parser, Debug)]
#[command(
    name = "crawlrust",
    version,
    about = "Crawl a single domain and classify every response against secret, endpoint and file-type rulesets",
    after_help = r#"EXAMPLES:

  Plain crawl:
    crawlrust -d example.com

  Crawl with all detections and an HTML report:
    crawlrust -d example.com -s -e -t 7 --html report.html

  Slow, polite crawl skipping the blog:
    crawlrust -d example.com -c 5 --delay 2 -i /blog

  Custom secret rules only:
    crawlrust -d example.com --secrets-file rules.txt
"#
)]
struct Args {
    /// Target domain, no scheme or path (e.g. example.com)
    #[arg(short, long, value_name = "DOMAIN", help_heading = "Target Options")]
    domain: String,

    /// Maximum concurrent fetches
    #[arg(short, long, default_value_t = 20, help_heading = "Crawl Options")]
    concurrency: usize,

    /// Seconds between successive fetch dispatches
    #[arg(long, default_value_t = 0, value_name = "SECS", help_heading = "Crawl Options")]
    delay: u64,

    /// Comma-separated substrings; URLs containing one are never fetched
    #[arg(short, long, value_name = "LIST", help_heading = "Crawl Options")]
    ignore: Option<String>,

    /// File with one ignore substring per line (overrides --ignore)
    #[arg(long, value_name = "FILE", help_heading = "Crawl Options")]
    ignore_file: Option<PathBuf>,

    /// Scan response bodies for leaked secrets
    #[arg(short, long, help_heading = "Detection Options")]
    secrets: bool,

    /// File with custom secret regexes, one per line (replaces the builtin table)
    #[arg(long, value_name = "FILE", help_heading = "Detection Options")]
    secrets_file: Option<PathBuf>,

    /// Flag URLs carrying juicy query parameters
    #[arg(short, long, help_heading = "Detection Options")]
    endpoints: bool,

    /// File with custom parameter names, one per line (replaces the builtin list)
    #[arg(long, value_name = "FILE", help_heading = "Detection Options")]
    endpoints_file: Option<PathBuf>,

    /// Sensitive file-type detection level 1-7, 0 disables
    #[arg(short = 't', long, default_value_t = 0, value_name = "LEVEL", help_heading = "Detection Options")]
    filetype: i32,

    /// Write crawled URLs and findings to a txt file
    #[arg(long, value_name = "FILE", help_heading = "Output Options")]
    txt: Option<PathBuf>,

    /// Write an HTML report
    #[arg(long, value_name = "FILE", help_heading = "Output Options")]
    html: Option<PathBuf>,

    /// Write a JSON report
    #[arg(long, value_name = "FILE", help_heading = "Output Options")]
    json: Option<PathBuf>,

    /// Print visited URLs only, no banner or colors
    #[arg(short, long, help_heading = "Output Options")]
    plain: bool,
}

fn print_banner() {
    println!("{}", "┌─────────────────────────────────────────────┐".cyan());
    println!("{}", "│  crawlrust - domain crawler & classifier    │".cyan().bold());
    println!("{}", "└─────────────────────────────────────────────┘".cyan());
}

/// Accept targets pasted with a scheme or trailing slash.
fn strip_protocol(input: &str) -> &str {
    input
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_end_matches('/')
}

fn split_csv(list: &str) -> Vec<String> {
    list.split(',')
        .map(|entry| entry.trim().to_string())
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// One entry per non-empty, non-comment line.
fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(content
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if !args.plain {
        print_banner();
    }

    let target = strip_protocol(args.domain.trim()).to_string();

    let mut ignore = args.ignore.as_deref().map(split_csv).unwrap_or_default();
    if let Some(path) = &args.ignore_file {
        ignore = read_lines(path)?;
    }
    let secret_rules = match &args.secrets_file {
        Some(path) => read_lines(path)?,
        None => Vec::new(),
    };
    let juicy_params = match &args.endpoints_file {
        Some(path) => read_lines(path)?,
        None => Vec::new(),
    };

    let mut config = CrawlConfig::new(target.clone());
    config.concurrency = args.concurrency;
    config.delay_secs = args.delay;
    config.ignore = ignore;
    config.secrets = args.secrets || args.secrets_file.is_some();
    config.secret_rules = secret_rules;
    config.endpoints = args.endpoints || args.endpoints_file.is_some();
    config.juicy_params = juicy_params;
    config.filetype_severity = args.filetype;
    config.plain = args.plain;

    if !args.plain {
        println!("{}", format!("[*] Crawling {target}...").cyan());
    }

    let results = crawl(&config).await?;

    output::print_summary(&results, &target, args.plain);
    if let Some(path) = &args.txt {
        output::save_txt(&results, path)?;
    }
    if let Some(path) = &args.html {
        output::save_html(&results, &target, path)?;
    }
    if let Some(path) = &args.json {
        output::save_json(&results, &target, path)?;
    }

    Ok(())
}
