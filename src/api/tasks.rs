//! Task Endpoints

use gloo_net::http::{Request, Response};

use super::{bearer, task_path, ApiError, ApiResult, HttpApi};
use crate::models::{ApiMessage, NewTask, Task, TaskId, TaskListResponse, TaskUpdate};

impl HttpApi {
    pub(super) async fn get_tasks(&self, token: &str) -> ApiResult<Vec<Task>> {
        log::debug!("GET /api/tasks");
        let response = Request::get(&self.url("/api/tasks"))
            .header("Authorization", &bearer(token))
            .send()
            .await?;
        let body = read_success(response).await?;
        decode_task_list(&body)
    }

    pub(super) async fn post_task(&self, token: &str, task: &NewTask) -> ApiResult<()> {
        log::debug!("POST /api/tasks");
        let response = Request::post(&self.url("/api/tasks"))
            .header("Authorization", &bearer(token))
            .json(task)?
            .send()
            .await?;
        read_success(response).await.map(|_| ())
    }

    pub(super) async fn put_task(
        &self,
        token: &str,
        id: &TaskId,
        task: &TaskUpdate,
    ) -> ApiResult<()> {
        let path = task_path(id);
        log::debug!("PUT {}", path);
        let response = Request::put(&self.url(&path))
            .header("Authorization", &bearer(token))
            .json(task)?
            .send()
            .await?;
        read_success(response).await.map(|_| ())
    }

    pub(super) async fn remove_task(&self, token: &str, id: &TaskId) -> ApiResult<()> {
        let path = task_path(id);
        log::debug!("DELETE {}", path);
        let response = Request::delete(&self.url(&path))
            .header("Authorization", &bearer(token))
            .send()
            .await?;
        read_success(response).await.map(|_| ())
    }
}

/// Body of an OK response, or the error the status maps to
async fn read_success(response: Response) -> ApiResult<String> {
    let status = response.status();
    let ok = response.ok();
    // Bodies of mutation responses are not needed; an unreadable one is not fatal
    let body = response.text().await.unwrap_or_default();
    check_status(ok, status, &body)?;
    Ok(body)
}

pub(crate) fn check_status(ok: bool, status: u16, body: &str) -> ApiResult<()> {
    if ok {
        return Ok(());
    }
    let message = serde_json::from_str::<ApiMessage>(body)
        .ok()
        .and_then(|m| m.message);
    match status {
        401 => Err(ApiError::Unauthorized { message }),
        _ => Err(ApiError::Rejected { status, message }),
    }
}

/// Parse `{data: Task[]}`; a missing or null `data` is the empty list
pub(crate) fn decode_task_list(body: &str) -> ApiResult<Vec<Task>> {
    let response: TaskListResponse =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(response.data.unwrap_or_default())
}
