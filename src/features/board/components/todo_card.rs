use leptos::ev::{DragEvent, MouseEvent};
use leptos::prelude::*;
use crate::core::models::{assignee_summary, Task, TaskDraft, TaskEdit, User};
use crate::features::board::services::DRAG_MIME;
use super::{AssigneeToggles, UserAvatar};

/// Intents a card reports to the root component.
#[derive(Clone, Copy)]
pub struct CardActions {
    pub on_edit: Callback<(String, TaskEdit)>,
    pub on_delete: Callback<String>,
    pub on_drag_start: Callback<String>,
    pub on_drag_end: Callback<()>,
}

#[component]
pub fn TodoCard(
    #[prop(into)] task: Task,
    #[prop(into)] users: Signal<Vec<User>>,
    actions: CardActions,
) -> impl IntoView {
    let (is_editing, set_is_editing) = signal(false);
    let draft = RwSignal::new(TaskDraft::from_task(&task));
    let (error, set_error) = signal::<Option<String>>(None);

    let assigned = {
        let task = task.clone();
        Memo::new(move |_| {
            users.with(|users| task.assignees(users).into_iter().cloned().collect::<Vec<User>>())
        })
    };

    let save = {
        let task_id = task.id.clone();
        move |_: MouseEvent| {
            match draft.get_untracked().into_edit() {
                Ok(edit) => {
                    actions.on_edit.run((task_id.clone(), edit));
                    set_error.set(None);
                    set_is_editing.set(false);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Edit of task {} rejected: {}", task_id, e).into());
                    set_error.set(Some(e.to_string()));
                }
            }
        }
    };

    // Throw the draft away and start the next edit from the canonical task
    let cancel = {
        let task = task.clone();
        move |_: MouseEvent| {
            draft.set(TaskDraft::from_task(&task));
            set_error.set(None);
            set_is_editing.set(false);
        }
    };

    let on_drag_start = {
        let task_id = task.id.clone();
        move |ev: DragEvent| {
            if let Some(data) = ev.data_transfer() {
                if data.set_data(DRAG_MIME, &task_id).is_err() {
                    web_sys::console::error_1(&format!("Could not attach task {} to the drag payload", task_id).into());
                }
                data.set_effect_allowed("move");
            }
            actions.on_drag_start.run(task_id.clone());
        }
    };

    let body = move || {
        if is_editing.get() {
            let save = save.clone();
            let cancel = cancel.clone();
            view! {
                <div class="todo-card-editor">
                    <input
                        type="text"
                        placeholder="Task title"
                        prop:value=move || draft.with(|d| d.title.clone())
                        on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                    />
                    <textarea
                        rows="3"
                        placeholder="Task description"
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                    <div class="form-group">
                        <label>"Assign Users"</label>
                        <AssigneeToggles users=users draft=draft />
                    </div>
                    {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                    <div class="todo-card-editor-actions">
                        <button type="button" class="btn-save" on:click=save>"✓ Save"</button>
                        <button type="button" class="btn-secondary" on:click=cancel>"✕ Cancel"</button>
                    </div>
                </div>
            }.into_any()
        } else {
            let delete_id = task.id.clone();
            view! {
                <div class="todo-card-body">
                    <div class="drag-handle" title="Drag to move">"⠿"</div>
                    <div class="todo-card-content">
                        <h3>{task.title.clone()}</h3>
                        <p>{task.description.clone()}</p>
                        {move || {
                            let list = assigned.get();
                            assignee_summary(&list).map(|summary| view! {
                                <div class="todo-assignees">
                                    <div class="avatar-stack">
                                        {list.into_iter()
                                            .map(|user| view! { <UserAvatar user=user /> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                    <span class="assignee-summary">{summary}</span>
                                </div>
                            })
                        }}
                    </div>
                    <div class="todo-card-actions">
                        <button class="task-action-btn edit-btn" title="Edit task" on:click=move |_| set_is_editing.set(true)>"✎"</button>
                        <button class="task-action-btn delete-btn" title="Delete task" on:click=move |_| {
                            actions.on_delete.run(delete_id.clone());
                        }>"🗑"</button>
                    </div>
                </div>
            }.into_any()
        }
    };

    view! {
        <div
            class="todo-card"
            class:editing=move || is_editing.get()
            draggable=move || if is_editing.get() { "false" } else { "true" }
            on:dragstart=on_drag_start
            on:dragend=move |_| actions.on_drag_end.run(())
        >
            {body}
        </div>
    }
}

// Read-only rendering used for the floating drag preview
#[component]
pub fn TodoCardPreview(#[prop(into)] task: Task) -> impl IntoView {
    view! {
        <div class="todo-card todo-card-preview">
            <div class="todo-card-body">
                <div class="drag-handle">"⠿"</div>
                <div class="todo-card-content">
                    <h3>{task.title}</h3>
                    <p>{task.description}</p>
                </div>
            </div>
        </div>
    }
}
