//! Application Configuration
//!
//! Compile-time settings for the API host, session storage and logging.

use log::LevelFilter;

const DEFAULT_API_BASE_URL: &str = "https://tmbill-backend-8tfv.onrender.com";
const DEFAULT_SESSION_KEY: &str = "token";

/// Frontend configuration, fixed at build time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Remote API host, without trailing slash
    pub api_base_url: &'static str,
    /// localStorage key holding the bearer token
    pub session_key: &'static str,
    /// Maximum level forwarded to the console
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL,
            session_key: DEFAULT_SESSION_KEY,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Build the config, honoring `TASKLIST_API_BASE_URL` and `TASKLIST_LOG`
    /// when they were set for the build.
    pub fn from_build_env() -> Self {
        Self::from_overrides(option_env!("TASKLIST_API_BASE_URL"), option_env!("TASKLIST_LOG"))
    }

    fn from_overrides(base_url: Option<&'static str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: base_url
                .map(|url| url.trim_end_matches('/'))
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.api_base_url),
            log_level: log_level.map(parse_level).unwrap_or(defaults.log_level),
            ..defaults
        }
    }
}

/// Parse a level name; unknown names fall back to `Info`
pub fn parse_level(name: &str) -> LevelFilter {
    name.trim().parse().unwrap_or(LevelFilter::Info)
}
