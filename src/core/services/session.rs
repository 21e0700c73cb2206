use mockable::Clock;

use super::board_state::BoardState;
use crate::core::models::TaskStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveModal {
    AddTodo,
    ManageUsers,
}

/// View-scoped state owned by the root component next to [`BoardState`].
///
/// Reset rules: `modal` clears on close, `dragging` clears on every drag end,
/// whether or not the drop hit a column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub modal: Option<ActiveModal>,
    pub dragging: Option<String>,
}

impl Session {
    pub fn open_modal(&mut self, modal: ActiveModal) {
        self.modal = Some(modal);
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    pub fn is_open(&self, modal: ActiveModal) -> bool {
        self.modal == Some(modal)
    }

    /// Records the dragged task for the preview. Unknown ids are ignored.
    pub fn begin_drag(&mut self, board: &BoardState, task_id: &str) -> bool {
        if board.task(task_id).is_some() {
            self.dragging = Some(task_id.to_string());
            true
        } else {
            false
        }
    }

    /// Finishes the in-flight drag. The dragged id comes from the gesture when it
    /// carries one, otherwise from the id recorded on drag start.
    pub fn end_drag(
        &mut self,
        board: &mut BoardState,
        task_id: Option<&str>,
        target: Option<TaskStatus>,
        clock: &impl Clock,
    ) -> bool {
        let recorded = self.dragging.take();
        match task_id.map(str::to_string).or(recorded) {
            Some(id) => board.move_task(&id, target, clock),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{NewTask, Task};
    use mockable::DefaultClock;
    use rstest::{fixture, rstest};

    #[fixture]
    fn board() -> BoardState {
        let task = Task::with_id(
            "1".into(),
            NewTask {
                title: "Write Documentation".into(),
                ..NewTask::default()
            },
            &DefaultClock,
        );
        BoardState::new(vec![task], vec![])
    }

    #[rstest]
    fn modal_opens_and_closes() {
        let mut session = Session::default();
        session.open_modal(ActiveModal::ManageUsers);
        assert!(session.is_open(ActiveModal::ManageUsers));
        assert!(!session.is_open(ActiveModal::AddTodo));
        session.close_modal();
        assert_eq!(session.modal, None);
    }

    #[rstest]
    fn begin_drag_ignores_unknown_task(board: BoardState) {
        let mut session = Session::default();
        assert!(!session.begin_drag(&board, "404"));
        assert_eq!(session.dragging, None);
        assert!(session.begin_drag(&board, "1"));
        assert_eq!(session.dragging.as_deref(), Some("1"));
    }

    #[rstest]
    fn drop_outside_columns_only_clears_marker(mut board: BoardState) {
        let before = board.clone();
        let mut session = Session::default();
        session.begin_drag(&board, "1");
        assert!(!session.end_drag(&mut board, None, None, &DefaultClock));
        assert_eq!(session.dragging, None);
        assert_eq!(board, before);
    }

    #[rstest]
    fn drop_uses_recorded_id_when_gesture_has_none(mut board: BoardState) {
        let mut session = Session::default();
        session.begin_drag(&board, "1");
        assert!(session.end_drag(&mut board, None, Some(TaskStatus::Completed), &DefaultClock));
        assert_eq!(board.task("1").map(|t| t.status), Some(TaskStatus::Completed));
        assert_eq!(session.dragging, None);
    }

    #[rstest]
    fn drag_end_without_drag_is_noop(mut board: BoardState) {
        let before = board.clone();
        let mut session = Session::default();
        assert!(!session.end_drag(&mut board, None, Some(TaskStatus::InProgress), &DefaultClock));
        assert_eq!(board, before);
    }
}
