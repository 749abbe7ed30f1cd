//! Editor Draft
//!
//! In-progress create/update form. `edit_id == None` means create mode.

use thiserror::Error;

use crate::models::{NewTask, Task, TaskId, TaskUpdate};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorDraft {
    pub title: String,
    pub description: String,
    pub is_completed: bool,
    pub edit_id: Option<TaskId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Title and description are required")]
    MissingFields,
}

/// What submitting the draft sends to the API
#[derive(Debug, Clone, PartialEq)]
pub enum EditorRequest {
    Create(NewTask),
    Update(TaskId, TaskUpdate),
}

impl EditorDraft {
    /// Draft seeded from an existing task (update mode)
    pub fn for_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            is_completed: task.is_completed,
            edit_id: Some(task.id.clone()),
        }
    }

    pub fn is_update(&self) -> bool {
        self.edit_id.is_some()
    }

    /// Validate and build the request. Create mode never sends a completion
    /// flag; new tasks always start incomplete.
    pub fn to_request(&self) -> Result<EditorRequest, DraftError> {
        if self.title.trim().is_empty() || self.description.trim().is_empty() {
            return Err(DraftError::MissingFields);
        }
        let title = self.title.clone();
        let description = self.description.clone();
        Ok(match &self.edit_id {
            None => EditorRequest::Create(NewTask { title, description }),
            Some(id) => EditorRequest::Update(
                id.clone(),
                TaskUpdate {
                    title,
                    description,
                    is_completed: self.is_completed,
                },
            ),
        })
    }
}
