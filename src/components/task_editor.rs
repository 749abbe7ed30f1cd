//! Task Editor Dialog
//!
//! Modal form for creating a task or updating an existing one.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::task_list::refresh;
use crate::context::use_app_context;
use crate::state::{actions, TaskBoard, TaskBoardStoreFields};

#[component]
pub fn TaskEditor(board: Store<TaskBoard>) -> impl IntoView {
    let ctx = use_app_context();
    let is_update = move || board.draft().with(|d| d.is_update());

    let submit = move |_| {
        let Some(request) = board.try_update(TaskBoard::begin_save).flatten() else {
            return;
        };
        spawn_local(async move {
            let result = actions::save_draft(&ctx.api, &ctx.session, &request).await;
            let saved = board.try_update(|b| b.finish_save(result)).unwrap_or(false);
            if saved {
                refresh(board, ctx).await;
            }
        });
    };

    view! {
        <div class="dialog-backdrop">
            <div class="dialog">
                <div class="dialog-header">
                    <h2>{move || if is_update() { "Update Todo" } else { "Add Todo" }}</h2>
                    <button
                        class="dialog-close"
                        disabled=move || board.saving().get()
                        on:click=move |_| board.update(TaskBoard::close_editor)
                    >
                        "×"
                    </button>
                </div>
                <input
                    type="text"
                    placeholder="Title"
                    required
                    prop:value=move || board.draft().with(|d| d.title.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        board.draft().update(|d| d.title = value);
                    }
                />
                <input
                    type="text"
                    placeholder="Description"
                    required
                    prop:value=move || board.draft().with(|d| d.description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        board.draft().update(|d| d.description = value);
                    }
                />
                // Completion can only be changed on existing tasks
                <Show when=is_update>
                    <div class="field">
                        <label>"Is Completed"</label>
                        <select
                            prop:value=move || board.draft().with(|d| d.is_completed.to_string())
                            on:change=move |ev| {
                                let completed = event_target_value(&ev) == "true";
                                board.draft().update(|d| d.is_completed = completed);
                            }
                        >
                            <option value="false">"False"</option>
                            <option value="true">"True"</option>
                        </select>
                    </div>
                </Show>
                <button
                    class="btn btn-primary btn-block"
                    disabled=move || board.saving().get()
                    on:click=submit
                >
                    {move || if board.saving().get() { "Saving..." } else { "Submit" }}
                </button>
            </div>
        </div>
    }
}
