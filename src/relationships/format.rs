//! Result formatting: ordering and domain stripping.

use serde::{Deserialize, Serialize};

use super::extract::HrefSet;

/// Marker after which an href is reduced to its path.
pub const DOMAIN_MARKER: &str = ".com/";

/// Payload returned for a successful comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueHrefsReport {
    pub unique_hrefs: Vec<String>,
    pub count: usize,
}

/// Return everything after the first `.com/`, or the href unchanged.
pub fn strip_domain(href: &str) -> &str {
    match href.split_once(DOMAIN_MARKER) {
        Some((_, rest)) => rest,
        None => href,
    }
}

/// Sort hrefs by raw string order, then strip domains.
///
/// Sorting happens on the full href, so the stripped list is ordered by the
/// original value rather than by the stripped suffix.
pub fn format_unique_hrefs(hrefs: HrefSet) -> UniqueHrefsReport {
    let mut sorted: Vec<String> = hrefs.into_iter().collect();
    sorted.sort_unstable();

    let unique_hrefs: Vec<String> = sorted
        .iter()
        .map(|href| strip_domain(href).to_owned())
        .collect();

    UniqueHrefsReport {
        count: unique_hrefs.len(),
        unique_hrefs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> HrefSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_strip_domain() {
        assert_eq!(strip_domain("https://instagram.com/alice"), "alice");
        assert_eq!(strip_domain("https://www.instagram.com/_u/bob/"), "_u/bob/");
        assert_eq!(strip_domain("nodotcom"), "nodotcom");
        assert_eq!(strip_domain("https://example.org/carol"), "https://example.org/carol");
    }

    #[test]
    fn test_strip_uses_first_marker() {
        assert_eq!(strip_domain("https://a.com/b.com/c"), "b.com/c");
        assert_eq!(strip_domain(".com/"), "");
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        assert_eq!(strip_domain("https://X.COM/dave"), "https://X.COM/dave");
    }

    #[test]
    fn test_sorted_before_stripping() {
        // "https://a.org/..." < "https://b.com/..." even though the stripped
        // "zed" would sort after "https://..."
        let report = format_unique_hrefs(set(&["https://b.com/zed", "https://a.org/amy"]));
        assert_eq!(report.unique_hrefs, vec!["https://a.org/amy", "zed"]);
        assert_eq!(report.count, 2);
    }

    #[test]
    fn test_order_is_case_sensitive() {
        let report = format_unique_hrefs(set(&["b", "B", "a", "A"]));
        assert_eq!(report.unique_hrefs, vec!["A", "B", "a", "b"]);
    }

    #[test]
    fn test_sorted_output_is_non_decreasing() {
        let report = format_unique_hrefs(set(&[
            "https://x.com/m",
            "https://x.com/c",
            "https://x.com/x",
            "https://x.com/a",
        ]));
        assert!(report.unique_hrefs.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_empty() {
        let report = format_unique_hrefs(HrefSet::new());
        assert!(report.unique_hrefs.is_empty());
        assert_eq!(report.count, 0);
    }

    #[test]
    fn test_report_serialization() {
        let report = format_unique_hrefs(set(&["https://instagram.com/alice"]));
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value, serde_json::json!({"unique_hrefs": ["alice"], "count": 1}));
    }
}
