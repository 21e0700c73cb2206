//! Initial board contents, embedded at build time.

use mockable::Clock;
use serde::Deserialize;
use thiserror::Error;

use super::board_state::BoardState;
use crate::core::models::{NewTask, Task, TaskStatus, User};

pub const DEFAULT_SEED: &str = include_str!("../../../assets/seed.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("invalid seed document: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedTodo {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    status: TaskStatus,
    #[serde(default)]
    assigned_users: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SeedDocument {
    #[serde(default)]
    users: Vec<User>,
    #[serde(default)]
    todos: Vec<SeedTodo>,
}

/// Builds a board from a seed document. Seeded tasks are stamped with the
/// current time, as if created at page load.
pub fn load_seed(json: &str, clock: &impl Clock) -> Result<BoardState, SeedError> {
    let document: SeedDocument = serde_json::from_str(json)?;
    let tasks = document
        .todos
        .into_iter()
        .map(|todo| {
            Task::with_id(
                todo.id,
                NewTask {
                    title: todo.title,
                    description: todo.description,
                    status: todo.status,
                    assigned_users: todo.assigned_users,
                },
                clock,
            )
        })
        .collect();
    Ok(BoardState::new(tasks, document.users))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockable::DefaultClock;
    use rstest::rstest;

    #[rstest]
    fn default_seed_has_one_task_per_column() {
        let board = load_seed(DEFAULT_SEED, &DefaultClock).unwrap();
        assert_eq!(board.users.len(), 3);
        let statuses: Vec<TaskStatus> = board.tasks.iter().map(|t| t.status).collect();
        assert_eq!(statuses, TaskStatus::all().to_vec());
        assert_eq!(board.task("2").map(|t| t.assigned_users.len()), Some(2));
    }

    #[rstest]
    fn missing_optional_fields_fall_back_to_defaults() {
        let json = r#"{ "todos": [ { "id": "9", "title": "Bare" } ] }"#;
        let board = load_seed(json, &DefaultClock).unwrap();
        let task = board.task("9").unwrap();
        assert_eq!(task.status, TaskStatus::NotStarted);
        assert!(task.description.is_empty());
        assert!(board.users.is_empty());
    }

    #[rstest]
    fn unknown_status_is_a_parse_error() {
        let json = r#"{ "todos": [ { "id": "9", "title": "Bad", "status": "done" } ] }"#;
        assert!(matches!(load_seed(json, &DefaultClock), Err(SeedError::Parse(_))));
    }
}
