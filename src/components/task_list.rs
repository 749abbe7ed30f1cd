//! Task List Page
//!
//! Protected home view: header actions, error banner, the task list and
//! the editor dialog.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use reactive_stores::Store;

use crate::components::{TaskEditor, TaskRow};
use crate::context::{use_app_context, AppContext};
use crate::models::{Task, TaskId};
use crate::state::{actions, login, ListView, TaskBoard, TaskBoardStoreFields};

/// Fetch the full list and replace the local cache.
///
/// A call made while a fetch is in flight is folded into one extra fetch
/// run by the caller that owns the current one.
pub(crate) async fn refresh(board: Store<TaskBoard>, ctx: AppContext) {
    if !board.try_update(TaskBoard::begin_load).unwrap_or(false) {
        log::debug!("fetch already in flight, reload queued");
        return;
    }
    loop {
        let result = actions::fetch_tasks(&ctx.api, &ctx.session).await;
        if !board.try_update(|b| b.finish_load(result)).unwrap_or(false) {
            break;
        }
        log::debug!("reloading tasks");
    }
}

#[component]
pub fn TaskListPage() -> impl IntoView {
    let ctx = use_app_context();
    let navigate = use_navigate();
    let board = Store::new(TaskBoard::new());

    // Load tasks on mount
    Effect::new(move |_| {
        spawn_local(refresh(board, ctx));
    });

    let logout = move |_| {
        let route = login::logout(&ctx.session);
        navigate(route.path(), Default::default());
    };

    let on_edit = Callback::new(move |task: Task| board.update(|b| b.open_edit(&task)));

    let on_delete = Callback::new(move |id: TaskId| {
        if !board.try_update(|b| b.begin_delete(&id)).unwrap_or(false) {
            return;
        }
        spawn_local(async move {
            let result = actions::remove_task(&ctx.api, &ctx.session, &id).await;
            let removed = board.try_update(|b| b.finish_delete(&id, result)).unwrap_or(false);
            if removed {
                refresh(board, ctx).await;
            }
        });
    });

    let list_view = move || ListView::of(board.loading().get(), board.tasks().with(Vec::len));

    view! {
        <div class="home">
            <div class="home-header">
                <h1>"Welcome"</h1>
                <div class="home-actions">
                    <button
                        class="btn btn-primary"
                        on:click=move |_| board.update(TaskBoard::open_create)
                    >
                        "Add"
                    </button>
                    <button class="btn btn-danger" on:click=logout>
                        "Logout"
                    </button>
                </div>
            </div>

            {move || board.error().get().map(|message| view! {
                <div class="error-banner">
                    <span>{message}</span>
                    <button
                        class="dialog-close"
                        on:click=move |_| board.update(TaskBoard::dismiss_error)
                    >
                        "×"
                    </button>
                </div>
            })}

            {move || match list_view() {
                ListView::Loading => view! {
                    <div class="loading-pulse">"Loading todos..."</div>
                }.into_any(),
                ListView::Empty => view! {
                    <div class="empty-state">"No todos found"</div>
                }.into_any(),
                ListView::Populated => view! {
                    <For
                        each=move || board.tasks().get()
                        // Whole task as key so edited rows re-render after a refresh
                        key=|task: &Task| task.clone()
                        children=move |task: Task| {
                            let id = task.id.clone();
                            let deleting = Signal::derive(move || {
                                board.deleting().with(|ids| ids.contains(&id))
                            });
                            view! {
                                <TaskRow
                                    task=task
                                    deleting=deleting
                                    on_edit=on_edit
                                    on_delete=on_delete
                                />
                            }
                        }
                    />
                }.into_any(),
            }}

            <Show when=move || board.editor_open().get()>
                <TaskEditor board=board />
            </Show>
        </div>
    }
}
