//! Route Guard
//!
//! Decides which view a path may show, based on whether a session token
//! is present when the route renders.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::{LoginPage, TaskListPage};
use crate::context::use_app_context;
use crate::session::SessionProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated,
}

impl AuthState {
    pub fn from_session(session: &impl SessionProvider) -> Self {
        if session.is_authenticated() {
            AuthState::Authenticated
        } else {
            AuthState::Unauthenticated
        }
    }
}

/// Navigable views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    /// Root: login form
    Login,
    /// Protected task list
    Tasks,
}

impl AppRoute {
    pub const fn path(self) -> &'static str {
        match self {
            AppRoute::Login => "/",
            AppRoute::Tasks => "/home",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(AppRoute),
}

pub fn guard(route: AppRoute, auth: AuthState) -> GuardDecision {
    match (route, auth) {
        (AppRoute::Login, AuthState::Authenticated) => GuardDecision::Redirect(AppRoute::Tasks),
        (AppRoute::Tasks, AuthState::Unauthenticated) => GuardDecision::Redirect(AppRoute::Login),
        _ => GuardDecision::Render,
    }
}

fn guarded_view<V: IntoView + 'static>(route: AppRoute, page: impl FnOnce() -> V) -> AnyView {
    let ctx = use_app_context();
    match guard(route, AuthState::from_session(&ctx.session)) {
        GuardDecision::Render => page().into_any(),
        GuardDecision::Redirect(target) => {
            log::debug!("redirect {} -> {}", route.path(), target.path());
            view! { <Redirect path=target.path() /> }.into_any()
        }
    }
}

/// `/`: login form, or straight to the list when already logged in
#[component]
pub fn LoginRoute() -> impl IntoView {
    guarded_view(AppRoute::Login, || view! { <LoginPage /> })
}

/// `/home`: task list, or back to login without a session
#[component]
pub fn TasksRoute() -> impl IntoView {
    guarded_view(AppRoute::Tasks, || view! { <TaskListPage /> })
}
