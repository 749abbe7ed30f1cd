//! Task Actions
//!
//! Request side of the task list operations. Each reads the bearer token
//! from the session and fails with `NotAuthenticated` without touching the
//! network when there is none.

use super::editor::EditorRequest;
use crate::api::{ApiError, ApiResult, TodoApi};
use crate::models::{Task, TaskId};
use crate::session::SessionProvider;

fn token(session: &impl SessionProvider) -> ApiResult<String> {
    session.get().ok_or(ApiError::NotAuthenticated)
}

pub async fn fetch_tasks(
    api: &impl TodoApi,
    session: &impl SessionProvider,
) -> ApiResult<Vec<Task>> {
    let token = token(session)?;
    let tasks = api.list_tasks(&token).await?;
    log::debug!("fetched {} tasks", tasks.len());
    Ok(tasks)
}

pub async fn save_draft(
    api: &impl TodoApi,
    session: &impl SessionProvider,
    request: &EditorRequest,
) -> ApiResult<()> {
    let token = token(session)?;
    match request {
        EditorRequest::Create(task) => api.create_task(&token, task).await,
        EditorRequest::Update(id, task) => api.update_task(&token, id, task).await,
    }
}

pub async fn remove_task(
    api: &impl TodoApi,
    session: &impl SessionProvider,
    id: &TaskId,
) -> ApiResult<()> {
    let token = token(session)?;
    api.delete_task(&token, id).await
}
