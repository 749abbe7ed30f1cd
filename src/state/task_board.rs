//! Task Board State
//!
//! Local cache of the task list plus editor and busy flags. The cache is
//! only ever replaced wholesale by a fetch; mutations never patch it.

use reactive_stores::Store;

use super::editor::{EditorDraft, EditorRequest};
use crate::api::{ApiError, ApiResult};
use crate::models::{Task, TaskId};

/// Which of the three list states to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Empty,
    Populated,
}

impl ListView {
    pub fn of(loading: bool, task_count: usize) -> Self {
        match (loading, task_count) {
            (true, _) => ListView::Loading,
            (false, 0) => ListView::Empty,
            (false, _) => ListView::Populated,
        }
    }
}

#[derive(Clone, Debug, Store)]
pub struct TaskBoard {
    /// Last fetched task collection
    pub tasks: Vec<Task>,
    /// Show the loading placeholder
    pub loading: bool,
    /// A list fetch is in flight
    pub fetching: bool,
    /// Another fetch was requested while one was in flight
    pub reload_pending: bool,
    pub editor_open: bool,
    pub draft: EditorDraft,
    /// Editor submission in flight
    pub saving: bool,
    /// Tasks with a delete request in flight
    pub deleting: Vec<TaskId>,
    /// Banner message for the last failure
    pub error: Option<String>,
}

impl Default for TaskBoard {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            loading: true,
            fetching: false,
            reload_pending: false,
            editor_open: false,
            draft: EditorDraft::default(),
            saving: false,
            deleting: Vec::new(),
            error: None,
        }
    }
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Fetch
    // ========================

    /// Returns `false` if a fetch is already running; that fetch is then
    /// followed by one more when it finishes.
    pub fn begin_load(&mut self) -> bool {
        if self.fetching {
            self.reload_pending = true;
            return false;
        }
        self.fetching = true;
        self.loading = true;
        true
    }

    /// Apply a fetch result. Returns `true` when a reload was requested
    /// meanwhile: the board stays in the fetching state and the caller must
    /// fetch again.
    pub fn finish_load(&mut self, result: ApiResult<Vec<Task>>) -> bool {
        match result {
            Ok(tasks) => self.tasks = tasks,
            Err(e) => {
                self.tasks.clear();
                self.fail("Could not load tasks", &e);
            }
        }
        if std::mem::take(&mut self.reload_pending) {
            return true;
        }
        self.fetching = false;
        self.loading = false;
        false
    }

    // ========================
    // Editor
    // ========================

    // The dialog is locked while a save is in flight
    pub fn open_create(&mut self) {
        if self.saving {
            return;
        }
        self.draft = EditorDraft::default();
        self.editor_open = true;
    }

    pub fn open_edit(&mut self, task: &Task) {
        if self.saving {
            return;
        }
        self.draft = EditorDraft::for_task(task);
        self.editor_open = true;
    }

    /// Dismiss the dialog and drop the draft
    pub fn close_editor(&mut self) {
        if self.saving {
            return;
        }
        self.reset_editor();
    }

    fn reset_editor(&mut self) {
        self.draft = EditorDraft::default();
        self.editor_open = false;
    }

    /// Validate the draft and mark the editor busy
    pub fn begin_save(&mut self) -> Option<EditorRequest> {
        if self.saving {
            return None;
        }
        match self.draft.to_request() {
            Ok(request) => {
                self.saving = true;
                self.error = None;
                Some(request)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Returns `true` when the list should be refreshed. On failure the
    /// dialog stays open with the draft intact.
    pub fn finish_save(&mut self, result: ApiResult<()>) -> bool {
        self.saving = false;
        match result {
            Ok(()) => {
                self.reset_editor();
                true
            }
            Err(e) => {
                self.fail("Could not save task", &e);
                false
            }
        }
    }

    // ========================
    // Delete
    // ========================

    pub fn is_deleting(&self, id: &TaskId) -> bool {
        self.deleting.contains(id)
    }

    /// Returns `false` if this task is already being deleted
    pub fn begin_delete(&mut self, id: &TaskId) -> bool {
        if self.is_deleting(id) {
            return false;
        }
        self.deleting.push(id.clone());
        true
    }

    /// Returns `true` when the list should be refreshed
    pub fn finish_delete(&mut self, id: &TaskId, result: ApiResult<()>) -> bool {
        self.deleting.retain(|pending| pending != id);
        match result {
            Ok(()) => true,
            Err(e) => {
                self.fail("Could not delete task", &e);
                false
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    fn fail(&mut self, context: &str, err: &ApiError) {
        log::warn!("{}: {}", context, err);
        self.error = Some(format!("{}: {}", context, err.user_message()));
    }
}
