use mockable::Clock;

use crate::core::models::{partition, Column, NewTask, NewUser, Task, TaskEdit, TaskStatus, User};

/// Canonical board state: the only copy of the task and user lists.
///
/// Each method is one complete intent. The app holds this value in a single
/// signal and applies every intent inside one `update`, so observers never see
/// half of a mutation (a deleted user still assigned to a task, for example).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardState {
    pub tasks: Vec<Task>,
    pub users: Vec<User>,
}

impl BoardState {
    pub fn new(tasks: Vec<Task>, users: Vec<User>) -> Self {
        Self { tasks, users }
    }

    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    pub fn user(&self, user_id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == user_id)
    }

    /// Tasks grouped per column, in column order.
    pub fn columns(&self, columns: &[Column]) -> Vec<Vec<&Task>> {
        partition(&self.tasks, columns)
    }

    /// Users assigned to `task` that still exist, in user-list order.
    pub fn assignees(&self, task: &Task) -> Vec<&User> {
        task.assignees(&self.users)
    }

    // A draft may outlive a user it names; only ids of current users are committed
    fn known_users(&self, ids: Vec<String>) -> Vec<String> {
        ids.into_iter().filter(|id| self.user(id).is_some()).collect()
    }

    /// Appends a new task and returns its id. Unknown assignee ids are dropped.
    pub fn add_task(&mut self, mut new_task: NewTask, clock: &impl Clock) -> String {
        new_task.assigned_users = self.known_users(new_task.assigned_users);
        let task = Task::new(new_task, clock);
        let id = task.id.clone();
        self.tasks.push(task);
        id
    }

    /// Returns false when no task has `task_id`. Unknown assignee ids are dropped.
    pub fn edit_task(&mut self, task_id: &str, mut edit: TaskEdit, clock: &impl Clock) -> bool {
        edit.assigned_users = self.known_users(edit.assigned_users);
        match self.tasks.iter_mut().find(|t| t.id == task_id) {
            Some(task) => {
                task.apply_edit(edit, clock);
                true
            }
            None => false,
        }
    }

    /// Idempotent: removing an absent id leaves the list untouched.
    pub fn delete_task(&mut self, task_id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != task_id);
        before != self.tasks.len()
    }

    /// Completes a drag gesture. `target` is `None` when the drop landed outside
    /// every column, which leaves the board unchanged.
    pub fn move_task(
        &mut self,
        task_id: &str,
        target: Option<TaskStatus>,
        clock: &impl Clock,
    ) -> bool {
        let Some(status) = target else {
            return false;
        };
        match self.tasks.iter_mut().find(|t| t.id == task_id) {
            Some(task) => {
                task.update_status(status, clock);
                true
            }
            None => false,
        }
    }

    /// Appends a new user and returns its id.
    pub fn add_user(&mut self, new_user: NewUser) -> String {
        let user = User::new(new_user);
        let id = user.id.clone();
        self.users.push(user);
        id
    }

    /// Removes the user and strips its id from every task in the same step.
    pub fn delete_user(&mut self, user_id: &str) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u.id != user_id);
        for task in &mut self.tasks {
            task.unassign(user_id);
        }
        before != self.users.len()
    }
}
