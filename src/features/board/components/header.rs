use leptos::prelude::*;

#[component]
pub fn BoardHeader(
    on_add_todo: Callback<()>,
    on_manage_users: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="board-header">
            <div class="board-header-left">
                <h1>"Collaborative Todo Board"</h1>
                <p class="board-subtitle">"Drag tasks between columns to update their status"</p>
            </div>
            <div class="board-actions">
                <button class="btn-secondary board-header-btn" on:click=move |_| on_manage_users.run(())>
                    <span class="btn-icon">"👥"</span>
                    "Manage Users"
                </button>
                <button class="btn-primary board-header-btn" on:click=move |_| on_add_todo.run(())>
                    <span class="btn-icon">"🞦"</span>
                    "Add Task"
                </button>
            </div>
        </header>
    }
}
