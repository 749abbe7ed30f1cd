//! Task Row Component

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::models::{Task, TaskId};

/// One task with its completion flag and Edit/Delete actions
#[component]
pub fn TaskRow(
    task: Task,
    #[prop(into)] deleting: Signal<bool>,
    on_edit: Callback<Task>,
    on_delete: Callback<TaskId>,
) -> impl IntoView {
    let completed = if task.is_completed { "Yes" } else { "No" };
    let id = task.id.clone();
    let title = task.title.clone();
    let description = task.description.clone();

    view! {
        <div class="task-row">
            <h3 class="task-title">{title}</h3>
            <p class="task-description">{description}</p>
            <p class="task-status">"Completed: " {completed}</p>
            <div class="task-actions">
                <button class="btn btn-warning" on:click=move |_| on_edit.run(task.clone())>
                    "Edit"
                </button>
                <DeleteConfirmButton
                    pending=deleting
                    on_confirm=Callback::new(move |_: ()| on_delete.run(id.clone()))
                />
            </div>
        </div>
    }
}
