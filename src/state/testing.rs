//! In-memory backend for state tests

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use crate::api::{ApiError, ApiResult, TodoApi};
use crate::models::{Credentials, NewTask, Task, TaskId, TaskUpdate};

pub const EMAIL: &str = "a@b.com";
pub const PASSWORD: &str = "x";
pub const TOKEN: &str = "abc";

/// Fake task API holding its tasks in memory
pub struct FakeTodoApi {
    pub tasks: RefCell<Vec<Task>>,
    next_id: Cell<i64>,
    /// Error returned by the next call, whatever it is
    fail_next: RefCell<Option<ApiError>>,
    /// `METHOD path` of every call received
    pub calls: RefCell<Vec<String>>,
}

impl FakeTodoApi {
    pub fn new() -> Self {
        Self {
            tasks: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            fail_next: RefCell::new(None),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_tasks(titles: &[&str]) -> Self {
        let api = Self::new();
        for title in titles {
            api.insert(title, &format!("{} details", title));
        }
        api
    }

    pub fn fail_next(&self, err: ApiError) {
        *self.fail_next.borrow_mut() = Some(err);
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn insert(&self, title: &str, description: &str) -> Task {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let task = Task {
            id: TaskId::Number(id),
            title: title.to_string(),
            description: description.to_string(),
            is_completed: false,
        };
        self.tasks.borrow_mut().push(task.clone());
        task
    }

    fn enter(&self, call: String, token: Option<&str>) -> ApiResult<()> {
        self.calls.borrow_mut().push(call);
        if let Some(err) = self.fail_next.borrow_mut().take() {
            return Err(err);
        }
        match token {
            Some(t) if t != TOKEN => Err(ApiError::Unauthorized { message: None }),
            _ => Ok(()),
        }
    }

    fn not_found() -> ApiError {
        ApiError::Rejected {
            status: 404,
            message: Some("Task not found".into()),
        }
    }
}

#[async_trait(?Send)]
impl TodoApi for FakeTodoApi {
    async fn login(&self, credentials: &Credentials) -> ApiResult<String> {
        self.enter("POST /api/login".into(), None)?;
        if credentials.email == EMAIL && credentials.password == PASSWORD {
            Ok(TOKEN.to_string())
        } else {
            Err(ApiError::Rejected {
                status: 401,
                message: Some("Invalid credentials".into()),
            })
        }
    }

    async fn list_tasks(&self, token: &str) -> ApiResult<Vec<Task>> {
        self.enter("GET /api/tasks".into(), Some(token))?;
        Ok(self.tasks.borrow().clone())
    }

    async fn create_task(&self, token: &str, task: &NewTask) -> ApiResult<()> {
        self.enter("POST /api/tasks".into(), Some(token))?;
        self.insert(&task.title, &task.description);
        Ok(())
    }

    async fn update_task(&self, token: &str, id: &TaskId, task: &TaskUpdate) -> ApiResult<()> {
        self.enter(format!("PUT /api/tasks/{}", id), Some(token))?;
        let mut tasks = self.tasks.borrow_mut();
        let stored = tasks.iter_mut().find(|t| &t.id == id).ok_or_else(Self::not_found)?;
        stored.title = task.title.clone();
        stored.description = task.description.clone();
        stored.is_completed = task.is_completed;
        Ok(())
    }

    async fn delete_task(&self, token: &str, id: &TaskId) -> ApiResult<()> {
        self.enter(format!("DELETE /api/tasks/{}", id), Some(token))?;
        let mut tasks = self.tasks.borrow_mut();
        let before = tasks.len();
        tasks.retain(|t| &t.id != id);
        if tasks.len() == before {
            return Err(Self::not_found());
        }
        Ok(())
    }
}
