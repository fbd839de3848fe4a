// extract.rs - Link extraction from fetched HTML
// Purpose: Turn a document into the absolute candidate URLs worth following

use scraper::{Html, Selector};
use url::Url;

fn push_resolved(base: &Url, raw: &str, out: &mut Vec<String>) {
    // Unresolvable values are dropped, not reported.
    if let Ok(resolved) = base.join(raw) {
        out.push(resolved.to_string());
    }
}

/// Collect candidate links from anchors, scripts, link elements and iframes,
/// resolved against the page's own URL. `link` elements whose `rel` is
/// `alternate` or `stylesheet` are skipped entirely.
pub fn extract_links(body: &str, base: &Url) -> Vec<String> {
    let document = Html::parse_document(body);
    let mut links = Vec::new();

    let anchors = Selector::parse("a[href]").unwrap();
    for element in document.select(&anchors) {
        if let Some(href) = element.value().attr("href") {
            push_resolved(base, href, &mut links);
        }
    }

    let scripts = Selector::parse("script[src]").unwrap();
    for element in document.select(&scripts) {
        if let Some(src) = element.value().attr("src") {
            push_resolved(base, src, &mut links);
        }
    }

    let link_tags = Selector::parse("link[href]").unwrap();
    for element in document.select(&link_tags) {
        let rel = element.value().attr("rel").unwrap_or("");
        if rel == "alternate" || rel == "stylesheet" {
            continue;
        }
        if let Some(href) = element.value().attr("href") {
            push_resolved(base, href, &mut links);
        }
    }

    let iframes = Selector::parse("iframe[src]").unwrap();
    for element in document.select(&iframes) {
        if let Some(src) = element.value().attr("src") {
            push_resolved(base, src, &mut links);
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(body: &str) -> Vec<String> {
        let base = Url::parse("http://example.com/dir/page.html").unwrap();
        extract_links(body, &base)
    }

    #[test]
    fn collects_anchors_scripts_and_iframes() {
        let links = extract(concat!(
            r#"<a href="/top">t</a>"#,
            r#"<a href="relative.html">r</a>"#,
            r#"<script src="/app.js"></script>"#,
            r#"<iframe src="http://example.com/frame"></iframe>"#,
        ));
        assert_eq!(
            links,
            vec![
                "http://example.com/top",
                "http://example.com/dir/relative.html",
                "http://example.com/app.js",
                "http://example.com/frame",
            ]
        );
    }

    #[test]
    fn excludes_stylesheet_and_alternate_link_elements() {
        let links = extract(concat!(
            r#"<link rel="stylesheet" href="/c.css">"#,
            r#"<link rel="alternate" href="/feed.xml">"#,
            r#"<link rel="icon" href="/d.ico">"#,
            r#"<link href="/bare">"#,
        ));
        assert_eq!(links, vec!["http://example.com/d.ico", "http://example.com/bare"]);
    }

    #[test]
    fn resolves_relative_to_the_page_url() {
        let links = extract(r#"<a href="../up">u</a><a href="?q=1">q</a>"#);
        assert_eq!(
            links,
            vec!["http://example.com/up", "http://example.com/dir/page.html?q=1"]
        );
    }

    #[test]
    fn drops_unresolvable_values() {
        let links = extract(r#"<a href="http://[broken">x</a><a href="/ok">y</a>"#);
        assert_eq!(links, vec!["http://example.com/ok"]);
    }

    #[test]
    fn empty_document_yields_nothing() {
        assert!(extract("not html at all").is_empty());
    }
}
