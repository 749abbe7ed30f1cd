//! Delete Confirm Button Component
//!
//! Inline delete with a confirm/cancel step.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows "Delete" initially. When clicked, shows "Delete?" with ✓/✗ buttons.
///
/// # Arguments
/// * `pending` - A delete for this row is in flight; the button is disabled
/// * `on_confirm` - Callback to execute when user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                class="btn btn-danger"
                disabled=move || pending.get()
                on:click=move |_| set_confirm_delete.set(true)
            >
                {move || if pending.get() { "Deleting..." } else { "Delete" }}
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |_| {
                        set_confirm_delete.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |_| set_confirm_delete.set(false)
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
