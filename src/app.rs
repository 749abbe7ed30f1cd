//! Task List Frontend App
//!
//! App shell: resolves the stored session once, then mounts the router.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::config::AppConfig;
use crate::context::AppContext;
use crate::guard::{AuthState, LoginRoute, TasksRoute};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let ctx = AppContext::new(config);
    provide_context(ctx);

    let (resolved, set_resolved) = signal(false);

    // Read the session once at startup
    Effect::new(move |_| {
        let auth = AuthState::from_session(&ctx.session);
        log::info!("startup: {:?}", auth);
        set_resolved.set(true);
    });

    view! {
        <Show
            when=move || resolved.get()
            fallback=|| view! { <div class="app-loading">"Loading..."</div> }
        >
            <Router>
                <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                    <Route path=path!("/") view=LoginRoute />
                    <Route path=path!("/home") view=TasksRoute />
                </Routes>
            </Router>
        </Show>
    }
}
