use leptos::prelude::*;
use crate::core::models::{TaskDraft, User};

// One chip per user; clicking a chip flips that user's assignment on the draft
#[component]
pub fn AssigneeToggles(
    #[prop(into)] users: Signal<Vec<User>>,
    draft: RwSignal<TaskDraft>,
) -> impl IntoView {
    view! {
        <div class="assignee-toggles">
            {move || {
                users.get().into_iter().map(|user| {
                    let id_for_class = user.id.clone();
                    let id_for_click = user.id.clone();
                    view! {
                        <button
                            type="button"
                            class="assignee-chip"
                            class:selected=move || draft.with(|d| d.is_assigned(&id_for_class))
                            on:click=move |_| draft.update(|d| d.toggle_user(&id_for_click))
                        >
                            {user.name}
                        </button>
                    }
                }).collect::<Vec<_>>()
            }}
        </div>
    }
}
