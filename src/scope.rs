// scope.rs - Crawl scope guard
// Purpose: Decide whether a discovered URL may join the frontier

use url::Url;

/// The URL's authority: host plus explicit port, when present.
fn authority(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    Some(match url.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    })
}

/// Pure scope predicate. A candidate may be enqueued only when it parses as
/// an http/https URL, its authority equals the target, and it contains none
/// of the ignore substrings.
pub fn allowed(candidate: &str, target: &str, ignore: &[String]) -> bool {
    let parsed = match Url::parse(candidate) {
        Ok(url) => url,
        Err(_) => return false,
    };
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return false;
    }
    match authority(&parsed) {
        Some(auth) if auth == target => {}
        _ => return false,
    }
    !ignore.iter().any(|needle| candidate.contains(needle.as_str()))
}

/// Canonical string form used as the visited-set key, so `http://t` and
/// `http://t/` count as one visit.
pub fn normalize(candidate: &str) -> Option<String> {
    Url::parse(candidate).map(|url| url.to_string()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ignore(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|e| e.to_string()).collect()
    }

    #[test]
    fn accepts_urls_on_the_target_authority() {
        assert!(allowed("http://example.com/index.html", "example.com", &[]));
        assert!(allowed("https://example.com/a/b?c=d", "example.com", &[]));
    }

    #[test]
    fn rejects_foreign_hosts_and_subdomains() {
        assert!(!allowed("http://evil.com/", "example.com", &[]));
        assert!(!allowed("http://sub.example.com/", "example.com", &[]));
        assert!(!allowed("http://example.com.evil.com/", "example.com", &[]));
    }

    #[test]
    fn authority_comparison_includes_explicit_port() {
        assert!(allowed("http://example.com:8080/x", "example.com:8080", &[]));
        assert!(!allowed("http://example.com:8080/x", "example.com", &[]));
        assert!(!allowed("http://example.com/x", "example.com:8080", &[]));
    }

    #[test]
    fn rejects_non_http_schemes_and_garbage() {
        assert!(!allowed("mailto:admin@example.com", "example.com", &[]));
        assert!(!allowed("javascript:void(0)", "example.com", &[]));
        assert!(!allowed("not a url", "example.com", &[]));
        assert!(!allowed("http://", "example.com", &[]));
    }

    #[test]
    fn ignore_list_filters_by_substring() {
        let list = ignore(&["/admin"]);
        assert!(!allowed("http://example.com/admin/login", "example.com", &list));
        assert!(allowed("http://example.com/user", "example.com", &list));
        // Empty list filters nothing.
        assert!(allowed("http://example.com/admin/login", "example.com", &[]));
    }

    #[test]
    fn normalize_adds_the_root_path() {
        assert_eq!(
            normalize("http://example.com").as_deref(),
            Some("http://example.com/")
        );
        assert_eq!(normalize("::nope::"), None);
    }
}
