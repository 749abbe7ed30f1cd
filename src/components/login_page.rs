//! Login Page
//!
//! Credential form; on success stores the token and opens the task list.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::context::use_app_context;
use crate::guard::AppRoute;
use crate::state::login::{self, LoginForm};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    let form = RwSignal::new(LoginForm::default());
    let busy = move || form.with(|f| f.busy);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = form.try_update(LoginForm::begin_submit).flatten() else {
            return;
        };
        let navigate = navigate.clone();
        spawn_local(async move {
            let outcome = login::submit(&ctx.api, &ctx.session, &credentials).await;
            let succeeded = outcome.is_ok();
            form.update(|f| f.finish_submit(outcome));
            if succeeded {
                navigate(AppRoute::Tasks.path(), Default::default());
            }
        });
    };

    view! {
        <div class="login-screen">
            <form class="login-card" on:submit=on_submit>
                <h2>"Login/Signup"</h2>
                {move || form.with(|f| f.error.clone()).map(|message| view! {
                    <p class="form-error">{message}</p>
                })}
                <input
                    type="email"
                    placeholder="Email"
                    required
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.email = value);
                    }
                />
                <input
                    type="password"
                    placeholder="Password"
                    required
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.password = value);
                    }
                />
                <button type="submit" class="btn btn-primary btn-block" disabled=busy>
                    {move || if busy() { "Logging in..." } else { "Login" }}
                </button>
                <p class="latency-note">
                    "Note: Backend is hosted on a free tier, "
                    "so it might take 50+ seconds to respond."
                </p>
            </form>
        </div>
    }
}
