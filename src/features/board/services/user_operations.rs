use leptos::prelude::*;
use crate::core::models::NewUser;
use crate::core::services::BoardState;

pub fn create_user(new_user: NewUser, board: RwSignal<BoardState>) {
    let name = new_user.name.clone();
    board.update(|state| {
        state.add_user(new_user);
    });
    web_sys::console::log_1(&format!("User {} added", name).into());
}

// Remove a user and unassign it from every task in a single update
pub fn delete_user(user_id: String, board: RwSignal<BoardState>) {
    let exists = board.with_untracked(|state| state.user(&user_id).is_some());
    if !exists {
        return;
    }

    board.update(|state| {
        state.delete_user(&user_id);
    });
    web_sys::console::log_1(&format!("User {} deleted", user_id).into());
}
