//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod login_page;
pub(crate) mod task_list;
mod task_editor;
mod task_row;

pub use delete_confirm_button::DeleteConfirmButton;
pub use login_page::LoginPage;
pub use task_editor::TaskEditor;
pub use task_list::TaskListPage;
pub use task_row::TaskRow;
