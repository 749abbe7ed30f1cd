//! View State
//!
//! Plain state machines behind the Leptos views, plus the async actions
//! that drive them against a [`TodoApi`](crate::api::TodoApi).

pub mod actions;
mod editor;
pub mod login;
mod task_board;

#[cfg(test)]
mod testing;

pub use task_board::{ListView, TaskBoard, TaskBoardStoreFields};
