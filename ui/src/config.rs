//! Client settings

/// Tenant selected before anyone logs in
pub const DEFAULT_TENANT: &str = "ac-1";

/// API base used when the page origin cannot be read
pub const FALLBACK_API_BASE: &str = "http://localhost:8080";

/// How long informational toasts stay up
pub const DEFAULT_TOAST_TIMEOUT_MS: u32 = 3000;

/// Settings the console starts with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    /// Base URL the `/config` paths are resolved against, without trailing slash
    pub api_base: String,

    /// Tenant of the initial session
    pub default_tenant: String,

    pub toast_timeout_ms: u32,
}

impl UiConfig {
    /// Settings for a console served by the backend itself
    ///
    /// The API is expected on the page's own origin.
    pub fn from_window() -> Self {
        let origin = web_sys::window().and_then(|w| w.location().origin().ok());
        Self::default().with_api_base(origin.as_deref().unwrap_or(FALLBACK_API_BASE))
    }

    pub fn with_api_base(mut self, api_base: &str) -> Self {
        self.api_base = api_base.trim_end_matches('/').to_string();
        self
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api_base: FALLBACK_API_BASE.to_string(),
            default_tenant: DEFAULT_TENANT.to_string(),
            toast_timeout_ms: DEFAULT_TOAST_TIMEOUT_MS,
        }
    }
}
