use leptos::prelude::*;
use mockable::DefaultClock;
use crate::core::models::{Column, TaskStatus};
use crate::core::services::{BoardState, Session};

/// MIME type under which a card puts its task id on the drag payload.
pub const DRAG_MIME: &str = "text/plain";

pub fn begin_drag(task_id: String, board: RwSignal<BoardState>, session: RwSignal<Session>) {
    let recorded = board.with_untracked(|state| {
        session
            .try_update(|s| s.begin_drag(state, &task_id))
            .unwrap_or(false)
    });

    if !recorded {
        web_sys::console::error_1(&format!("Drag started on unknown task {}", task_id).into());
    }
}

// A drop landed on a column
pub fn drop_on_column(
    task_id: Option<String>,
    target: TaskStatus,
    board: RwSignal<BoardState>,
    session: RwSignal<Session>,
) {
    finish_drag(task_id, Some(target), board, session);
}

// The gesture ended; when a drop already handled it this is a no-op
pub fn end_drag(board: RwSignal<BoardState>, session: RwSignal<Session>) {
    if session.with_untracked(|s| s.dragging.is_none()) {
        return;
    }
    finish_drag(None, None, board, session);
}

fn finish_drag(
    task_id: Option<String>,
    target: Option<TaskStatus>,
    board: RwSignal<BoardState>,
    session: RwSignal<Session>,
) {
    let mut current = session.get_untracked();
    let moved = board
        .try_update(|state| current.end_drag(state, task_id.as_deref(), target, &DefaultClock))
        .unwrap_or(false);
    session.set(current);

    match target {
        Some(status) if moved => {
            web_sys::console::log_1(&format!("Task moved to {}", Column::for_status(status).title).into());
        }
        Some(status) => {
            web_sys::console::error_1(&format!("Drop on {} did not match a task", status).into());
        }
        None => {}
    }
}
