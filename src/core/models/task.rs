use std::fmt;

use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::ValidationError;
use super::user::User;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Stable identifier, also used as the drop target id of the matching column.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "not-started",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn all() -> [TaskStatus; 3] {
        [
            TaskStatus::NotStarted,
            TaskStatus::InProgress,
            TaskStatus::Completed,
        ]
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    /// User ids. Treated as a set: order carries no meaning and ids may dangle.
    pub assigned_users: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Everything needed to create a task; the board assigns id and timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub assigned_users: Vec<String>,
}

/// Validated replacement for the editable fields of an existing task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEdit {
    pub title: String,
    pub description: String,
    pub assigned_users: Vec<String>,
}

impl Task {
    pub fn new(new_task: NewTask, clock: &impl Clock) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), new_task, clock)
    }

    pub fn with_id(id: String, new_task: NewTask, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id,
            title: new_task.title,
            description: new_task.description,
            status: new_task.status,
            assigned_users: dedup_ids(new_task.assigned_users),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    pub fn update_status(&mut self, status: TaskStatus, clock: &impl Clock) {
        self.status = status;
        self.touch(clock);
    }

    /// Replaces title, description and assignees. Status and `created_at` are kept.
    pub fn apply_edit(&mut self, edit: TaskEdit, clock: &impl Clock) {
        self.title = edit.title;
        self.description = edit.description;
        self.assigned_users = dedup_ids(edit.assigned_users);
        self.touch(clock);
    }

    pub fn is_assigned(&self, user_id: &str) -> bool {
        self.assigned_users.iter().any(|id| id == user_id)
    }

    /// Entries of `users` assigned to this task; dangling ids are skipped.
    pub fn assignees<'a>(&self, users: &'a [User]) -> Vec<&'a User> {
        users.iter().filter(|u| self.is_assigned(&u.id)).collect()
    }

    /// Drops a user id from the assignment set without touching `updated_at`.
    /// Returns whether the id was present.
    pub(crate) fn unassign(&mut self, user_id: &str) -> bool {
        let before = self.assigned_users.len();
        self.assigned_users.retain(|id| id != user_id);
        before != self.assigned_users.len()
    }

    fn touch(&mut self, clock: &impl Clock) {
        // Never let a skewed clock move the timestamp backwards.
        self.updated_at = clock.utc().max(self.updated_at);
    }
}

/// Local edit buffer backing the add form and the inline card editor.
///
/// A draft is never an alias into the board: it is either committed through
/// [`TaskDraft::into_new_task`] / [`TaskDraft::into_edit`] or dropped on cancel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub assigned_users: Vec<String>,
}

impl TaskDraft {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            assigned_users: task.assigned_users.clone(),
        }
    }

    /// Assigns the user if absent, unassigns if present.
    pub fn toggle_user(&mut self, user_id: &str) {
        if self.assigned_users.iter().any(|id| id == user_id) {
            self.assigned_users.retain(|id| id != user_id);
        } else {
            self.assigned_users.push(user_id.to_string());
        }
    }

    pub fn is_assigned(&self, user_id: &str) -> bool {
        self.assigned_users.iter().any(|id| id == user_id)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(())
    }

    /// New tasks always start in the not-started column.
    pub fn into_new_task(self) -> Result<NewTask, ValidationError> {
        self.validate()?;
        Ok(NewTask {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            status: TaskStatus::NotStarted,
            assigned_users: self.assigned_users,
        })
    }

    pub fn into_edit(self) -> Result<TaskEdit, ValidationError> {
        self.validate()?;
        Ok(TaskEdit {
            title: self.title.trim().to_string(),
            description: self.description,
            assigned_users: self.assigned_users,
        })
    }
}

fn dedup_ids(ids: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use mockable::DefaultClock;
    use rstest::{fixture, rstest};

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn local(&self) -> DateTime<chrono::Local> {
            self.0.with_timezone(&chrono::Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[fixture]
    fn clock() -> DefaultClock {
        DefaultClock
    }

    #[fixture]
    fn task(clock: DefaultClock) -> Task {
        Task::new(
            NewTask {
                title: "Design Landing Page".into(),
                description: "Mockups".into(),
                assigned_users: vec!["1".into()],
                ..NewTask::default()
            },
            &clock,
        )
    }

    #[rstest]
    fn status_serializes_as_kebab_case() {
        let json = serde_json::to_string(&TaskStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }

    #[rstest]
    fn new_task_has_equal_timestamps(task: Task) {
        assert_eq!(task.created_at, task.updated_at);
        assert_eq!(task.status, TaskStatus::NotStarted);
    }

    #[rstest]
    fn new_task_collapses_duplicate_assignees(clock: DefaultClock) {
        let task = Task::new(
            NewTask {
                title: "Pair".into(),
                assigned_users: vec!["1".into(), "2".into(), "1".into()],
                ..NewTask::default()
            },
            &clock,
        );
        assert_eq!(task.assigned_users, vec!["1".to_string(), "2".to_string()]);
    }

    #[rstest]
    fn assignees_follow_user_order_and_skip_unknown_ids(clock: DefaultClock) {
        let task = Task::new(
            NewTask {
                title: "Pair".into(),
                assigned_users: vec!["2".into(), "ghost".into(), "1".into()],
                ..NewTask::default()
            },
            &clock,
        );
        let users: Vec<User> = ["1", "2", "3"]
            .into_iter()
            .map(|id| User {
                id: id.into(),
                name: format!("User {id}"),
                email: format!("{id}@example.com"),
                color: "#3b82f6".into(),
            })
            .collect();
        let ids: Vec<&str> = task.assignees(&users).iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[rstest]
    fn update_status_refreshes_updated_at_only(mut task: Task) {
        let created = task.created_at;
        let later = FixedClock(created + chrono::Duration::seconds(5));
        task.update_status(TaskStatus::Completed, &later);
        assert_eq!(task.status, TaskStatus::Completed);
        assert_eq!(task.created_at, created);
        assert_eq!(task.updated_at, later.0);
    }

    #[rstest]
    fn updated_at_never_moves_backwards(mut task: Task) {
        let before = task.updated_at;
        let earlier = FixedClock(Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap());
        task.update_status(TaskStatus::InProgress, &earlier);
        assert_eq!(task.updated_at, before);
    }

    #[rstest]
    fn apply_edit_keeps_status_and_created_at(mut task: Task, clock: DefaultClock) {
        task.status = TaskStatus::InProgress;
        let created = task.created_at;
        task.apply_edit(
            TaskEdit {
                title: "Renamed".into(),
                description: String::new(),
                assigned_users: vec![],
            },
            &clock,
        );
        assert_eq!(task.title, "Renamed");
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.created_at, created);
        assert!(task.assigned_users.is_empty());
    }

    #[rstest]
    fn draft_toggle_adds_then_removes() {
        let mut draft = TaskDraft::default();
        draft.toggle_user("2");
        assert!(draft.is_assigned("2"));
        draft.toggle_user("2");
        assert!(!draft.is_assigned("2"));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn blank_title_is_rejected(#[case] title: &str) {
        let draft = TaskDraft {
            title: title.into(),
            ..TaskDraft::default()
        };
        assert_eq!(draft.clone().into_new_task(), Err(ValidationError::EmptyTitle));
        assert_eq!(draft.into_edit(), Err(ValidationError::EmptyTitle));
    }

    #[rstest]
    fn new_task_from_draft_is_trimmed_and_not_started() {
        let draft = TaskDraft {
            title: "  Write tests  ".into(),
            description: " ".into(),
            assigned_users: vec!["3".into()],
        };
        let new_task = draft.into_new_task().unwrap();
        assert_eq!(new_task.title, "Write tests");
        assert_eq!(new_task.description, "");
        assert_eq!(new_task.status, TaskStatus::NotStarted);
        assert_eq!(new_task.assigned_users, vec!["3".to_string()]);
    }

    #[rstest]
    fn draft_from_task_copies_editable_fields(task: Task) {
        let draft = TaskDraft::from_task(&task);
        assert_eq!(draft.title, task.title);
        assert_eq!(draft.description, task.description);
        assert_eq!(draft.assigned_users, task.assigned_users);
    }
}
