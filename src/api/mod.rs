//! Task API Client
//!
//! Bindings to the remote REST API, organized by domain.

mod auth;
mod error;
mod tasks;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::models::{Credentials, NewTask, Task, TaskId, TaskUpdate};

pub use error::{ApiError, ApiResult};

/// Operations the views need from the backend
///
/// Task calls take the bearer token explicitly; reading it from the
/// session is the caller's job.
#[async_trait(?Send)]
pub trait TodoApi {
    /// Exchange credentials for a bearer token
    async fn login(&self, credentials: &Credentials) -> ApiResult<String>;

    async fn list_tasks(&self, token: &str) -> ApiResult<Vec<Task>>;

    async fn create_task(&self, token: &str, task: &NewTask) -> ApiResult<()>;

    async fn update_task(&self, token: &str, id: &TaskId, task: &TaskUpdate) -> ApiResult<()>;

    async fn delete_task(&self, token: &str, id: &TaskId) -> ApiResult<()>;
}

/// `fetch`-backed client for the remote host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpApi {
    base_url: &'static str,
}

impl HttpApi {
    pub fn new(base_url: &'static str) -> Self {
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Path of a single task, with the identifier percent-encoded
pub(crate) fn task_path(id: &TaskId) -> String {
    format!("/api/tasks/{}", utf8_percent_encode(&id.to_string(), NON_ALPHANUMERIC))
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

#[async_trait(?Send)]
impl TodoApi for HttpApi {
    async fn login(&self, credentials: &Credentials) -> ApiResult<String> {
        self.post_login(credentials).await
    }

    async fn list_tasks(&self, token: &str) -> ApiResult<Vec<Task>> {
        self.get_tasks(token).await
    }

    async fn create_task(&self, token: &str, task: &NewTask) -> ApiResult<()> {
        self.post_task(token, task).await
    }

    async fn update_task(&self, token: &str, id: &TaskId, task: &TaskUpdate) -> ApiResult<()> {
        self.put_task(token, id, task).await
    }

    async fn delete_task(&self, token: &str, id: &TaskId) -> ApiResult<()> {
        self.remove_task(token, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_path_numeric() {
        assert_eq!(task_path(&TaskId::Number(42)), "/api/tasks/42");
    }

    #[test]
    fn test_task_path_encodes_text() {
        assert_eq!(task_path(&TaskId::Text("a/b c".into())), "/api/tasks/a%2Fb%20c");
    }

    #[test]
    fn test_url_join() {
        let api = HttpApi::new("https://example.test");
        assert_eq!(api.url("/api/login"), "https://example.test/api/login");
    }
}
