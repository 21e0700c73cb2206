use leptos::prelude::*;
use mockable::DefaultClock;
use crate::core::models::{NewTask, NewUser, TaskEdit, TaskStatus, User};
use crate::core::services::{load_seed, ActiveModal, BoardState, Session, DEFAULT_SEED};
use crate::features::board::services::{
    begin_drag, create_task, create_user, delete_task, delete_user, drop_on_column, edit_task,
    end_drag,
};

/// Root state of the page plus one callback per intent children may emit.
///
/// Children only get read-only signals; every mutation goes through these
/// callbacks.
#[derive(Clone, Copy)]
pub struct BoardHook {
    pub board: ReadSignal<BoardState>,
    pub session: ReadSignal<Session>,
    pub users: Memo<Vec<User>>,
    pub create_task: Callback<NewTask>,
    pub edit_task: Callback<(String, TaskEdit)>,
    pub delete_task: Callback<String>,
    pub create_user: Callback<NewUser>,
    pub delete_user: Callback<String>,
    pub open_modal: Callback<ActiveModal>,
    pub close_modal: Callback<()>,
    pub drag_start: Callback<String>,
    pub drop_on: Callback<(Option<String>, TaskStatus)>,
    pub drag_end: Callback<()>,
}

fn initial_board() -> BoardState {
    match load_seed(DEFAULT_SEED, &DefaultClock) {
        Ok(state) => {
            web_sys::console::log_1(
                &format!("Loaded {} tasks and {} users", state.tasks.len(), state.users.len()).into(),
            );
            state
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to load seed data: {}", e).into());
            BoardState::default()
        }
    }
}

pub fn use_board() -> BoardHook {
    let board = RwSignal::new(initial_board());
    let session = RwSignal::new(Session::default());

    let users = Memo::new(move |_| board.with(|state| state.users.clone()));

    let open_modal = Callback::new(move |modal: ActiveModal| {
        session.update(|s| s.open_modal(modal));
    });
    let close_modal = Callback::new(move |_: ()| {
        session.update(|s| s.close_modal());
    });

    BoardHook {
        board: board.read_only(),
        session: session.read_only(),
        users,
        create_task: Callback::new(move |new_task: NewTask| create_task(new_task, board)),
        edit_task: Callback::new(move |(task_id, edit): (String, TaskEdit)| {
            edit_task(task_id, edit, board)
        }),
        delete_task: Callback::new(move |task_id: String| delete_task(task_id, board)),
        create_user: Callback::new(move |new_user: NewUser| create_user(new_user, board)),
        delete_user: Callback::new(move |user_id: String| delete_user(user_id, board)),
        open_modal,
        close_modal,
        drag_start: Callback::new(move |task_id: String| begin_drag(task_id, board, session)),
        drop_on: Callback::new(move |(task_id, status): (Option<String>, TaskStatus)| {
            drop_on_column(task_id, status, board, session)
        }),
        drag_end: Callback::new(move |_: ()| end_drag(board, session)),
    }
}
