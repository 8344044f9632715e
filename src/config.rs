//! Console configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The console is shipped as a static WASM bundle, so configuration is fixed
//! at build time. Defaults can be overridden with `ADMIN_CONSOLE_*`
//! environment variables when the bundle is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

const DEFAULT_API_BASE: &str = "/api/admin";
const DEFAULT_ANONYMOUS_LANDING: &str = "/login";
const DEFAULT_AUTHENTICATED_LANDING: &str = "/";
const DEFAULT_CREDENTIAL_KEY: &str = "admin_console_token";

/// Paths, storage keys and timeouts shared by the whole console.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Prefix for every backend admin endpoint.
    pub api_base: String,
    /// Where `RequireAuth` sends visitors without an identity.
    pub anonymous_landing: String,
    /// Where `RequireAnonymous` sends visitors who are already signed in.
    pub authenticated_landing: String,
    /// `localStorage` key holding the bearer credential.
    pub credential_key: String,
    /// Upper bound on the startup credential check. `None` waits forever.
    pub resolve_timeout: Option<Duration>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            anonymous_landing: DEFAULT_ANONYMOUS_LANDING.to_owned(),
            authenticated_landing: DEFAULT_AUTHENTICATED_LANDING.to_owned(),
            credential_key: DEFAULT_CREDENTIAL_KEY.to_owned(),
            resolve_timeout: None,
        }
    }
}

impl ConsoleConfig {
    /// Defaults with build-time overrides applied.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_overrides(
            option_env!("ADMIN_CONSOLE_API_BASE"),
            option_env!("ADMIN_CONSOLE_RESOLVE_TIMEOUT_MS"),
        )
    }

    fn from_overrides(api_base: Option<&str>, resolve_timeout_ms: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = api_base.map(str::trim).filter(|b| !b.is_empty()) {
            config.api_base = base.trim_end_matches('/').to_owned();
        }
        config.resolve_timeout = resolve_timeout_ms
            .and_then(|ms| ms.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis);
        config
    }

    /// Join an endpoint path onto the API base.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}
