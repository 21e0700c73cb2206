use leptos::prelude::*;
use leptos::ev;
use crate::core::models::{NewTask, TaskDraft, User};
use super::AssigneeToggles;

#[component]
pub fn AddTodoModal(
    #[prop(into)] users: Signal<Vec<User>>,
    on_add: Callback<NewTask>,
    on_close: Callback<()>,
) -> impl IntoView {
    // The draft lives as long as the modal; closing drops it
    let draft = RwSignal::new(TaskDraft::default());
    let (error, set_error) = signal::<Option<String>>(None);

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        match draft.get_untracked().into_new_task() {
            Ok(new_task) => {
                on_add.run(new_task);
                on_close.run(());
            }
            Err(e) => {
                web_sys::console::log_1(&format!("Task not created: {}", e).into());
                set_error.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <dialog open class="task-modal" on:click=|e| e.stop_propagation()>
                <div class="modal-content">
                    <div class="modal-header">
                        <h3>"ADD TASK"</h3>
                        <button type="button" class="modal-close" on:click=move |_| on_close.run(())>"×"</button>
                    </div>
                    <form on:submit=handle_submit>
                        <div class="form-group">
                            <label>"TITLE"</label>
                            <input
                                type="text"
                                placeholder="Task title..."
                                on:input=move |ev| {
                                    set_error.set(None);
                                    draft.update(|d| d.title = event_target_value(&ev));
                                }
                                prop:value=move || draft.with(|d| d.title.clone())
                            />
                        </div>
                        <div class="form-group">
                            <label>"DESCRIPTION"</label>
                            <textarea
                                placeholder="Task description..."
                                rows="4"
                                on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                                prop:value=move || draft.with(|d| d.description.clone())
                            ></textarea>
                        </div>
                        <div class="form-group">
                            <label>"ASSIGN USERS"</label>
                            <AssigneeToggles users=users draft=draft />
                        </div>
                        {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                        <div class="modal-actions">
                            <button type="button" class="btn-secondary" on:click=move |_| on_close.run(())>"CANCEL"</button>
                            <button type="submit" class="btn-primary">"ADD TASK"</button>
                        </div>
                    </form>
                </div>
            </dialog>
        </div>
    }
}
