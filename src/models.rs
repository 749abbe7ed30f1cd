//! Frontend Models
//!
//! Data structures matching the remote task API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Task identifier as issued by the API (numeric or string)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskId {
    Number(i64),
    Text(String),
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskId::Number(n) => write!(f, "{}", n),
            TaskId::Text(s) => f.write_str(s),
        }
    }
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_completed: bool,
}

/// Login request body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/tasks`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
}

/// Body of `PUT /api/tasks/{id}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskUpdate {
    pub title: String,
    pub description: String,
    pub is_completed: bool,
}

/// `POST /api/login` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// `GET /api/tasks` response; absent or null `data` means no tasks
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskListResponse {
    #[serde(default)]
    pub data: Option<Vec<Task>>,
}

/// Error body the API may attach to non-OK responses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_with_numeric_id() {
        let task: Task = serde_json::from_str(
            r#"{"id":7,"title":"Buy milk","description":"2L","is_completed":true}"#,
        )
        .unwrap();
        assert_eq!(task.id, TaskId::Number(7));
        assert!(task.is_completed);
        assert_eq!(task.id.to_string(), "7");
    }

    #[test]
    fn test_task_with_string_id_and_defaults() {
        let task: Task = serde_json::from_str(r#"{"id":"65a1f0","title":"Walk"}"#).unwrap();
        assert_eq!(task.id, TaskId::Text("65a1f0".to_string()));
        assert_eq!(task.description, "");
        assert!(!task.is_completed);
    }

    #[test]
    fn test_update_body_shape() {
        let body = TaskUpdate {
            title: "t".into(),
            description: "d".into(),
            is_completed: true,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"title": "t", "description": "d", "is_completed": true})
        );
    }
}
