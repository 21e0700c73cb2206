use leptos::prelude::*;
use mockable::DefaultClock;
use crate::core::models::{NewTask, TaskEdit};
use crate::core::services::BoardState;

// Append a new task to the board
pub fn create_task(new_task: NewTask, board: RwSignal<BoardState>) {
    let mut created_id = String::new();
    board.update(|state| {
        created_id = state.add_task(new_task, &DefaultClock);
    });
    web_sys::console::log_1(&format!("Task {} created", created_id).into());
}

// Replace title, description and assignees of an existing task
pub fn edit_task(task_id: String, edit: TaskEdit, board: RwSignal<BoardState>) {
    let found = board
        .try_update(|state| state.edit_task(&task_id, edit, &DefaultClock))
        .unwrap_or(false);

    if !found {
        web_sys::console::error_1(&format!("Task {} not found, edit dropped", task_id).into());
    }
}

// Delete a task; deleting a task that is already gone does nothing
pub fn delete_task(task_id: String, board: RwSignal<BoardState>) {
    let exists = board.with_untracked(|state| state.task(&task_id).is_some());
    if !exists {
        return;
    }

    board.update(|state| {
        state.delete_task(&task_id);
    });
    web_sys::console::log_1(&format!("Task {} deleted", task_id).into());
}
