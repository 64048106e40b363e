//! URL sanitation for externally sourced links
//!
//! Any URL that came from remote data must pass through [`sanitize_url`]
//! before being embedded as a link target.

/// Schemes permitted in rendered link targets
const ALLOWED_SCHEMES: [&str; 2] = ["http", "https"];

/// Sanitize a URL for embedding as a link target
///
/// Returns the normalized URL when it parses as absolute http(s), `None`
/// otherwise (relative references, `javascript:`, `data:`, etc.).
pub fn sanitize_url(raw: &str) -> Option<String> {
    let parsed = url::Url::parse(raw.trim()).ok()?;
    if ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        Some(parsed.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_https() {
        assert_eq!(
            sanitize_url("https://acme.my.salesforce.com/lightning/r/Case/500x/view"),
            Some("https://acme.my.salesforce.com/lightning/r/Case/500x/view".to_string())
        );
    }

    #[test]
    fn test_accepts_http_and_trims_whitespace() {
        assert_eq!(
            sanitize_url("  http://example.com/path  "),
            Some("http://example.com/path".to_string())
        );
    }

    #[test]
    fn test_rejects_javascript_scheme() {
        assert_eq!(sanitize_url("javascript:alert(1)"), None);
    }

    #[test]
    fn test_rejects_data_scheme() {
        assert_eq!(sanitize_url("data:text/html,<script></script>"), None);
    }

    #[test]
    fn test_rejects_relative_reference() {
        assert_eq!(sanitize_url("/lightning/r/Case/500x/view"), None);
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(sanitize_url(""), None);
    }
}
