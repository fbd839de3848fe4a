// output.rs - Crawl report writers
// Purpose: txt / HTML / JSON reports plus the terminal summary

use std::fs;
use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use colored::*;
use serde::Serialize;

use crate::crawler::{CrawlResults, CrawlStats};
use crate::scanner::{EndpointFinding, FileTypeFinding, SecretFinding};

/// Plain-text report: one crawled URL per line, findings appended below.
pub fn save_txt(results: &CrawlResults, path: &Path) -> Result<()> {
    let mut out = String::new();
    for url in &results.visited {
        writeln!(out, "{url}").ok();
    }
    for finding in &results.secrets {
        writeln!(out, "[SECRET] {} - {}", finding.rule.name, finding.url).ok();
    }
    for finding in &results.endpoints {
        writeln!(
            out,
            "[ENDPOINT] {} - {}",
            finding.parameters.join(","),
            finding.url
        )
        .ok();
    }
    for finding in &results.filetypes {
        writeln!(
            out,
            "[FILETYPE] .{} (severity {}) - {}",
            finding.rule.extension, finding.rule.severity, finding.url
        )
        .ok();
    }
    fs::write(path, out).with_context(|| format!("failed to write {}", path.display()))
}

#[derive(Serialize)]
struct JsonReport<'a> {
    target: &'a str,
    generated_at: DateTime<Utc>,
    stats: &'a CrawlStats,
    visited: &'a [String],
    secrets: &'a [SecretFinding],
    endpoints: &'a [EndpointFinding],
    filetypes: &'a [FileTypeFinding],
}

/// Machine-readable report with the full finding details.
pub fn save_json(results: &CrawlResults, target: &str, path: &Path) -> Result<()> {
    let report = JsonReport {
        target,
        generated_at: Utc::now(),
        stats: &results.stats,
        visited: &results.visited,
        secrets: &results.secrets,
        endpoints: &results.endpoints,
        filetypes: &results.filetypes,
    };
    let json = serde_json::to_string_pretty(&report)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn html_list(out: &mut String, title: &str, rows: &[String]) {
    writeln!(out, "<h2>{} ({})</h2>", escape(title), rows.len()).ok();
    writeln!(out, "<ul>").ok();
    for row in rows {
        writeln!(out, "<li><code>{}</code></li>", escape(row)).ok();
    }
    writeln!(out, "</ul>").ok();
}

/// Self-contained HTML report.
pub fn save_html(results: &CrawlResults, target: &str, path: &Path) -> Result<()> {
    let mut out = String::new();
    writeln!(out, "<!DOCTYPE html><html><head><meta charset=\"utf-8\">").ok();
    writeln!(out, "<title>crawlrust - {}</title>", escape(target)).ok();
    writeln!(
        out,
        "<style>body{{font-family:monospace;margin:2em}}h2{{border-bottom:1px solid #444}}</style>"
    )
    .ok();
    writeln!(out, "</head><body>").ok();
    writeln!(out, "<h1>crawlrust report - {}</h1>", escape(target)).ok();
    writeln!(
        out,
        "<p>{} pages fetched, {} failures, {:.1}s - generated {}</p>",
        results.stats.pages_fetched,
        results.stats.fetch_failures,
        results.stats.duration_seconds,
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
    )
    .ok();

    let secrets: Vec<String> = results
        .secrets
        .iter()
        .map(|f| format!("{} - {}", f.rule.name, f.url))
        .collect();
    let endpoints: Vec<String> = results
        .endpoints
        .iter()
        .map(|f| format!("{} - {}", f.parameters.join(","), f.url))
        .collect();
    let filetypes: Vec<String> = results
        .filetypes
        .iter()
        .map(|f| format!(".{} (severity {}) - {}", f.rule.extension, f.rule.severity, f.url))
        .collect();

    html_list(&mut out, "Secrets", &secrets);
    html_list(&mut out, "Juicy endpoints", &endpoints);
    html_list(&mut out, "Sensitive file types", &filetypes);
    html_list(&mut out, "Crawled URLs", &results.visited);
    writeln!(out, "</body></html>").ok();
    fs::write(path, out).with_context(|| format!("failed to write {}", path.display()))
}

/// Terminal summary printed after the crawl.
pub fn print_summary(results: &CrawlResults, target: &str, plain: bool) {
    if plain {
        println!(
            "{}: {} pages, {} secrets, {} endpoints, {} file types",
            target,
            results.stats.pages_fetched,
            results.secrets.len(),
            results.endpoints.len(),
            results.filetypes.len()
        );
        return;
    }

    println!();
    println!("{}", format!("─── Crawl summary: {} ───", target).cyan().bold());
    println!(
        "{}",
        format!(
            "  {} pages fetched, {} failures, {:.1}s",
            results.stats.pages_fetched,
            results.stats.fetch_failures,
            results.stats.duration_seconds
        )
        .white()
    );

    if !results.secrets.is_empty() {
        println!("{}", format!("  Secrets: {}", results.secrets.len()).red().bold());
        for finding in &results.secrets {
            println!("    {} {} - {}", "→".red(), finding.rule.name.red(), finding.url.white());
        }
    }
    if !results.endpoints.is_empty() {
        println!(
            "{}",
            format!("  Juicy endpoints: {}", results.endpoints.len()).yellow().bold()
        );
        for finding in &results.endpoints {
            println!(
                "    {} [{}] {}",
                "→".yellow(),
                finding.parameters.join(",").yellow(),
                finding.url.white()
            );
        }
    }
    if !results.filetypes.is_empty() {
        println!(
            "{}",
            format!("  Sensitive file types: {}", results.filetypes.len()).magenta().bold()
        );
        for finding in &results.filetypes {
            println!(
                "    {} .{} (severity {}) - {}",
                "→".magenta(),
                finding.rule.extension.magenta(),
                finding.rule.severity,
                finding.url.white()
            );
        }
    }
    if results.secrets.is_empty() && results.endpoints.is_empty() && results.filetypes.is_empty() {
        println!("{}", "  No findings".green());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::FileTypeRule;
    use crate::rules::SecretRule;

    fn sample_results() -> CrawlResults {
        let now = Utc::now();
        CrawlResults {
            visited: vec!["http://t.test/".to_string()],
            secrets: vec![SecretFinding {
                rule: SecretRule::custom("x"),
                url: "http://t.test/app.js".to_string(),
            }],
            endpoints: vec![EndpointFinding {
                url: "http://t.test/?redirect=1".to_string(),
                parameters: vec!["redirect".to_string()],
            }],
            filetypes: vec![FileTypeFinding {
                url: "http://t.test/a.sql".to_string(),
                rule: FileTypeRule { extension: "sql", severity: 5 },
            }],
            stats: CrawlStats {
                started_at: now,
                finished_at: now,
                pages_fetched: 1,
                fetch_failures: 0,
                duration_seconds: 0.0,
            },
        }
    }

    #[test]
    fn txt_report_lists_urls_and_findings() {
        let dir = std::env::temp_dir().join("crawlrust-txt-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("out.txt");
        save_txt(&sample_results(), &path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("http://t.test/\n"));
        assert!(written.contains("[SECRET] custom - http://t.test/app.js"));
        assert!(written.contains("[ENDPOINT] redirect - http://t.test/?redirect=1"));
        assert!(written.contains("[FILETYPE] .sql (severity 5) - http://t.test/a.sql"));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn json_report_round_trips_the_counts() {
        let dir = std::env::temp_dir().join("crawlrust-json-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("out.json");
        save_json(&sample_results(), "t.test", &path).unwrap();
        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed["target"], "t.test");
        assert_eq!(parsed["secrets"].as_array().unwrap().len(), 1);
        assert_eq!(parsed["stats"]["pages_fetched"], 1);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn html_report_escapes_urls() {
        let dir = std::env::temp_dir().join("crawlrust-html-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("out.html");
        let mut results = sample_results();
        results.visited.push("http://t.test/?a=<script>".to_string());
        save_html(&results, "t.test", &path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("&lt;script&gt;"));
        assert!(!written.contains("?a=<script>"));
        fs::remove_dir_all(&dir).ok();
    }
}
