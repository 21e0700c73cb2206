use super::task::{Task, TaskStatus};

/// A fixed board column. Columns are configuration, never user-editable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub id: &'static str,
    pub title: &'static str,
    pub status: TaskStatus,
}

impl Column {
    pub fn defaults() -> [Column; 3] {
        [
            Column {
                id: "not-started",
                title: "Not Started",
                status: TaskStatus::NotStarted,
            },
            Column {
                id: "in-progress",
                title: "Working On It",
                status: TaskStatus::InProgress,
            },
            Column {
                id: "completed",
                title: "Completed",
                status: TaskStatus::Completed,
            },
        ]
    }

    pub fn for_status(status: TaskStatus) -> Column {
        let [not_started, in_progress, completed] = Self::defaults();
        match status {
            TaskStatus::NotStarted => not_started,
            TaskStatus::InProgress => in_progress,
            TaskStatus::Completed => completed,
        }
    }

    /// Tasks of this column, in canonical order.
    pub fn tasks<'a>(&self, tasks: &'a [Task]) -> impl Iterator<Item = &'a Task> + 'a {
        let status = self.status;
        tasks.iter().filter(move |task| task.status == status)
    }

    pub fn glyph(&self) -> &'static str {
        match self.status {
            TaskStatus::NotStarted => "○",
            TaskStatus::InProgress => "◷",
            TaskStatus::Completed => "✔",
        }
    }
}

/// Groups `tasks` by column, one group per entry of `columns`, each group in
/// canonical order.
pub fn partition<'a>(tasks: &'a [Task], columns: &[Column]) -> Vec<Vec<&'a Task>> {
    columns
        .iter()
        .map(|column| column.tasks(tasks).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::NewTask;
    use mockable::DefaultClock;
    use rstest::rstest;

    fn task(id: &str, status: TaskStatus) -> Task {
        Task::with_id(
            id.into(),
            NewTask {
                title: format!("Task {id}"),
                status,
                ..NewTask::default()
            },
            &DefaultClock,
        )
    }

    fn ids(group: &[&Task]) -> Vec<String> {
        group.iter().map(|task| task.id.clone()).collect()
    }

    #[rstest]
    fn defaults_cover_every_status_once() {
        let statuses: Vec<TaskStatus> = Column::defaults().iter().map(|c| c.status).collect();
        assert_eq!(statuses, TaskStatus::all().to_vec());
        for column in Column::defaults() {
            assert_eq!(column.id, column.status.as_str());
        }
    }

    #[rstest]
    #[case(TaskStatus::NotStarted, "Not Started")]
    #[case(TaskStatus::InProgress, "Working On It")]
    #[case(TaskStatus::Completed, "Completed")]
    fn for_status_returns_configured_column(#[case] status: TaskStatus, #[case] title: &str) {
        assert_eq!(Column::for_status(status).title, title);
    }

    #[rstest]
    fn empty_list_yields_three_empty_groups() {
        let groups = partition(&[], &Column::defaults());
        assert_eq!(groups.len(), 3);
        assert!(groups.iter().all(Vec::is_empty));
    }

    #[rstest]
    fn partition_preserves_relative_order() {
        let tasks = vec![
            task("a", TaskStatus::Completed),
            task("b", TaskStatus::NotStarted),
            task("c", TaskStatus::InProgress),
            task("d", TaskStatus::NotStarted),
            task("e", TaskStatus::Completed),
            task("f", TaskStatus::InProgress),
        ];
        let groups = partition(&tasks, &Column::defaults());
        assert_eq!(ids(&groups[0]), vec!["b", "d"]);
        assert_eq!(ids(&groups[1]), vec!["c", "f"]);
        assert_eq!(ids(&groups[2]), vec!["a", "e"]);

        let mut flattened: Vec<String> = groups.iter().flat_map(|g| ids(g)).collect();
        let mut original: Vec<String> = tasks.iter().map(|t| t.id.clone()).collect();
        flattened.sort();
        original.sort();
        assert_eq!(flattened, original);
    }
}
