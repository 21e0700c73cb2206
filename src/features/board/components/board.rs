use leptos::prelude::*;
use crate::core::models::{Column, Task, TaskStatus, User};
use crate::core::services::BoardState;
use super::{BoardColumn, CardActions};

#[component]
pub fn KanbanBoard(
    #[prop(into)] board: Signal<BoardState>,
    #[prop(into)] users: Signal<Vec<User>>,
    actions: CardActions,
    on_drop: Callback<(Option<String>, TaskStatus)>,
) -> impl IntoView {
    let columns = Column::defaults();

    // One group per column, recomputed whenever the task list changes
    let groups = Memo::new(move |_| {
        board.with(|state| {
            state.columns(&columns)
                .into_iter()
                .map(|group| group.into_iter().cloned().collect::<Vec<Task>>())
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="kanban-board">
            {columns.into_iter().enumerate().map(|(index, column)| {
                let tasks = Signal::derive(move || {
                    groups.with(|groups| groups.get(index).cloned().unwrap_or_default())
                });
                view! {
                    <BoardColumn
                        column=column
                        tasks=tasks
                        users=users
                        actions=actions
                        on_drop=on_drop
                    />
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
