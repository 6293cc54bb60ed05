//! API utilities for frontend-backend communication
//!
//! The base URL comes from the `API_URL` environment variable at build
//! time. Without it the console talks to port 3000 of the host it was
//! served from.

/// Get the base URL for API requests, without a trailing slash.
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/products/{}", api_base(), id);
/// ```
pub fn api_base() -> String {
    if let Some(url) = option_env!("API_URL").and_then(normalize_base) {
        return url;
    }
    window_base()
}

/// Trims whitespace and trailing slashes; `None` for a blank value.
pub fn normalize_base(url: &str) -> Option<String> {
    let url = url.trim().trim_end_matches('/');
    if url.is_empty() {
        None
    } else {
        Some(url.to_string())
    }
}

fn window_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

pub fn join_url(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        assert_eq!(
            normalize_base(" http://localhost:8080/api/ "),
            Some("http://localhost:8080/api".to_string())
        );
        assert_eq!(normalize_base("   "), None);
        assert_eq!(normalize_base("/"), None);
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://h", "/materials"), "http://h/materials");
        assert_eq!(join_url("http://h", "materials"), "http://h/materials");
    }
}
