use chrono::{DateTime, Utc};
use leptos::ev::DragEvent;
use leptos::prelude::*;
use crate::core::models::{Column, Task, TaskStatus, User};
use crate::features::board::services::DRAG_MIME;
use super::{CardActions, TodoCard};

/// Identity of a rendered card. Any displayed field changing rebuilds the card,
/// even when two edits land in the same clock tick.
pub(crate) fn card_key(task: &Task) -> (String, String, String, Vec<String>, DateTime<Utc>) {
    (
        task.id.clone(),
        task.title.clone(),
        task.description.clone(),
        task.assigned_users.clone(),
        task.updated_at,
    )
}

#[component]
pub fn BoardColumn(
    column: Column,
    #[prop(into)] tasks: Signal<Vec<Task>>,
    #[prop(into)] users: Signal<Vec<User>>,
    actions: CardActions,
    on_drop: Callback<(Option<String>, TaskStatus)>,
) -> impl IntoView {
    let (is_over, set_is_over) = signal(false);
    let status = column.status;

    // Accepting dragover is what makes the column a valid drop target
    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        if let Some(data) = ev.data_transfer() {
            data.set_drop_effect("move");
        }
        set_is_over.set(true);
    };

    let handle_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_over.set(false);
        let task_id = ev
            .data_transfer()
            .and_then(|data| data.get_data(DRAG_MIME).ok())
            .filter(|id| !id.is_empty());
        on_drop.run((task_id, status));
    };

    view! {
        <div
            class=format!("kanban-column column-{}", column.id)
            class:is-over=move || is_over.get()
            on:dragover=on_drag_over
            on:dragleave=move |_| set_is_over.set(false)
            on:drop=handle_drop
        >
            <div class="column-header">
                <div class="column-title">
                    <span class="column-icon">{column.glyph()}</span>
                    <h2>{column.title}</h2>
                </div>
                <span class="task-count">{move || tasks.with(Vec::len)}</span>
            </div>
            <div class="column-content">
                <Show
                    when=move || tasks.with(|tasks| !tasks.is_empty())
                    fallback=|| view! {
                        <div class="column-empty">
                            <p>"No tasks yet"</p>
                            <p class="column-empty-hint">"Drag tasks here or create a new one"</p>
                        </div>
                    }
                >
                    <For
                        each=move || tasks.get()
                        key=card_key
                        children=move |task| view! {
                            <TodoCard task=task users=users actions=actions />
                        }
                    />
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::NewTask;
    use mockable::DefaultClock;
    use rstest::rstest;

    #[rstest]
    fn card_key_changes_with_content_in_the_same_tick() {
        let task = Task::new(
            NewTask {
                title: "Design Landing Page".into(),
                ..NewTask::default()
            },
            &DefaultClock,
        );
        let mut edited = task.clone();
        edited.description = "Mockups".into();

        assert_eq!(edited.updated_at, task.updated_at);
        assert_ne!(card_key(&edited), card_key(&task));

        let mut retitled = task.clone();
        retitled.title = "Landing Page v2".into();
        assert_ne!(card_key(&retitled), card_key(&task));
    }
}
