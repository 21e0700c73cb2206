use leptos::ev::DragEvent;
use leptos::prelude::*;
use crate::core::services::ActiveModal;
use crate::features::board::{
    use_board, AddTodoModal, BoardHeader, CardActions, DragPreview, KanbanBoard, ManageUsersModal,
};

#[component]
pub fn App() -> impl IntoView {
    // The hook owns the canonical task and user lists; nothing below mutates them directly
    let hook = use_board();
    let session = hook.session;

    // Last pointer position reported during a drag, for placing the preview
    let (pointer, set_pointer) = signal((0, 0));

    let actions = CardActions {
        on_edit: hook.edit_task,
        on_delete: hook.delete_task,
        on_drag_start: hook.drag_start,
        on_drag_end: hook.drag_end,
    };

    let open_add = Callback::new(move |_: ()| hook.open_modal.run(ActiveModal::AddTodo));
    let open_users = Callback::new(move |_: ()| hook.open_modal.run(ActiveModal::ManageUsers));

    view! {
        <main
            class="app"
            on:dragover=move |ev: DragEvent| set_pointer.set((ev.client_x(), ev.client_y()))
        >
            <BoardHeader on_add_todo=open_add on_manage_users=open_users />

            <KanbanBoard
                board=hook.board
                users=hook.users
                actions=actions
                on_drop=hook.drop_on
            />

            <DragPreview board=hook.board session=session pointer=pointer />

            <Show when=move || session.with(|s| s.is_open(ActiveModal::AddTodo))>
                <AddTodoModal
                    users=hook.users
                    on_add=hook.create_task
                    on_close=hook.close_modal
                />
            </Show>

            <Show when=move || session.with(|s| s.is_open(ActiveModal::ManageUsers))>
                <ManageUsersModal
                    users=hook.users
                    on_add_user=hook.create_user
                    on_delete_user=hook.delete_user
                    on_close=hook.close_modal
                />
            </Show>
        </main>
    }
}
