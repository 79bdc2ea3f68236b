//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Backend address baked in at build time (`LUMI_API_BASE_URL=https://... trunk build`).
const API_BASE_URL: Option<&str> = option_env!("LUMI_API_BASE_URL");

/// Port used when no base address was configured at build time.
const FALLBACK_PORT: u16 = 8000;

/// Get the base URL for API requests
///
/// Uses the build-time `LUMI_API_BASE_URL` when set, otherwise the current window
/// location with port 8000.
///
/// # Returns
/// - API base URL like "https://api.example.com" or "http://localhost:8000"
/// - Empty string if neither is available
pub fn api_base() -> String {
    if let Some(base) = API_BASE_URL.and_then(normalize_base) {
        return base;
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, FALLBACK_PORT)
}

/// Percent-encode an identifier for use as a single path segment.
pub fn path_segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

fn normalize_base(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(
            normalize_base(" https://lumi-api.onrender.com/ "),
            Some("https://lumi-api.onrender.com".to_string())
        );
        assert_eq!(normalize_base("  "), None);
    }

    #[test]
    fn test_path_segment_encodes() {
        assert_eq!(path_segment("a b/c"), "a%20b%2Fc");
        assert_eq!(path_segment("3f2a-11"), "3f2a-11");
    }
}
