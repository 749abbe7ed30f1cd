//! Application Context
//!
//! Shared services provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpApi;
use crate::config::AppConfig;
use crate::session::LocalStorageSession;

/// App-wide services, cheap to copy into event handlers
#[derive(Clone, Copy, Debug)]
pub struct AppContext {
    /// Remote task API
    pub api: HttpApi,
    /// Bearer token storage
    pub session: LocalStorageSession,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            api: HttpApi::new(config.api_base_url),
            session: LocalStorageSession::new(config.session_key),
        }
    }
}

/// Get the app context provided by `App`
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
