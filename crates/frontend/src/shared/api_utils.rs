//! API utilities for frontend-backend communication

use super::config::config;

/// Get the base URL for API requests
///
/// Uses `[api].base_url` when configured. Otherwise constructs the URL from the
/// current window location with the configured port and prefix.
///
/// # Returns
/// - API base URL like "http://localhost:3000/api"
/// - Just the prefix if window is not available
pub fn api_base() -> String {
    let api = &config().api;
    if let Some(base_url) = &api.base_url {
        return base_url.trim_end_matches('/').to_string();
    }

    let Some(window) = web_sys::window() else {
        return api.prefix.clone();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    origin_base(&protocol, &hostname, api.port, &api.prefix)
}

/// `{protocol}//{hostname}:{port}{prefix}`, prefix normalised to a leading slash
pub fn origin_base(protocol: &str, hostname: &str, port: u16, prefix: &str) -> String {
    let prefix = prefix.trim_matches('/');
    if prefix.is_empty() {
        format!("{}//{}:{}", protocol, hostname, port)
    } else {
        format!("{}//{}:{}/{}", protocol, hostname, port, prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_base() {
        assert_eq!(
            origin_base("http:", "localhost", 3000, "/api"),
            "http://localhost:3000/api"
        );
        assert_eq!(
            origin_base("https:", "admin.school.in", 8443, "api/v1/"),
            "https://admin.school.in:8443/api/v1"
        );
        assert_eq!(origin_base("http:", "10.0.0.2", 3000, ""), "http://10.0.0.2:3000");
    }
}
