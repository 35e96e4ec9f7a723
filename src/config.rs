const LOCAL_API_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub login_page: String,
    pub toast_timeout_ms: u32,
}

impl AppConfig {
    /// Builds the runtime configuration from the page the app is served on.
    pub fn from_window() -> Self {
        let hostname = web_sys::window()
            .and_then(|w| w.location().hostname().ok())
            .unwrap_or_default();

        AppConfig {
            api_base_url: resolve_api_base_url(option_env!("FINANZAS_API_URL"), &hostname),
            ..AppConfig::default()
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api_base_url: String::new(),
            login_page: "login.html".to_string(),
            toast_timeout_ms: 4000,
        }
    }
}

/// A compile-time override wins; local development talks to the API on port
/// 8000, any other host is served same-origin behind the API.
pub fn resolve_api_base_url(override_url: Option<&str>, hostname: &str) -> String {
    if let Some(url) = override_url.map(str::trim).filter(|u| !u.is_empty()) {
        return url.trim_end_matches('/').to_string();
    }

    match hostname {
        "localhost" | "127.0.0.1" => LOCAL_API_BASE_URL.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_hosts_use_dev_api() {
        assert_eq!(resolve_api_base_url(None, "localhost"), LOCAL_API_BASE_URL);
        assert_eq!(resolve_api_base_url(None, "127.0.0.1"), LOCAL_API_BASE_URL);
    }

    #[test]
    fn remote_host_is_same_origin() {
        assert_eq!(resolve_api_base_url(None, "finanzas.example.co"), "");
    }

    #[test]
    fn override_wins_and_loses_trailing_slash() {
        assert_eq!(
            resolve_api_base_url(Some("https://api.example.co/"), "localhost"),
            "https://api.example.co"
        );
        assert_eq!(resolve_api_base_url(Some("  "), "localhost"), LOCAL_API_BASE_URL);
    }
}
