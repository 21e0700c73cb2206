use leptos::prelude::*;
use leptos::ev;
use crate::core::models::{AvatarSize, NewUser, NewUserDraft, User};
use super::UserAvatar;

#[component]
pub fn ManageUsersModal(
    #[prop(into)] users: Signal<Vec<User>>,
    on_add_user: Callback<NewUser>,
    on_delete_user: Callback<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    let draft = RwSignal::new(NewUserDraft::default());
    let (error, set_error) = signal::<Option<String>>(None);

    // Keep the modal open after adding so several users can be entered in a row
    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        match draft.get_untracked().into_new_user() {
            Ok(new_user) => {
                on_add_user.run(new_user);
                draft.set(NewUserDraft::default());
                set_error.set(None);
            }
            Err(e) => {
                set_error.set(Some(e.to_string()));
            }
        }
    };

    let user_list = move || {
        let users = users.get();
        if users.is_empty() {
            return view! {
                <div class="user-list-empty">
                    <p>"No users yet"</p>
                </div>
            }.into_any();
        }

        users.into_iter().map(|user| {
            let user_id = user.id.clone();
            view! {
                <div class="user-row">
                    <UserAvatar user=user.clone() size=AvatarSize::Medium />
                    <div class="user-info">
                        <span class="user-name">{user.name.clone()}</span>
                        <span class="user-email">{user.email.clone()}</span>
                    </div>
                    <button
                        type="button"
                        class="btn-danger user-delete-btn"
                        title="Delete user"
                        on:click=move |_| on_delete_user.run(user_id.clone())
                    >"Delete"</button>
                </div>
            }
        }).collect::<Vec<_>>().into_any()
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <dialog open class="task-modal users-modal" on:click=|e| e.stop_propagation()>
                <div class="modal-content">
                    <div class="modal-header">
                        <h3>"MANAGE USERS"</h3>
                        <button type="button" class="modal-close" on:click=move |_| on_close.run(())>"×"</button>
                    </div>
                    <form class="user-form" on:submit=handle_submit>
                        <div class="form-group">
                            <label>"NAME"</label>
                            <input
                                type="text"
                                placeholder="Full name..."
                                on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                                prop:value=move || draft.with(|d| d.name.clone())
                            />
                        </div>
                        <div class="form-group">
                            <label>"EMAIL"</label>
                            <input
                                type="email"
                                placeholder="name@example.com"
                                on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                                prop:value=move || draft.with(|d| d.email.clone())
                            />
                        </div>
                        <div class="form-group">
                            <label>"COLOR"</label>
                            <input
                                type="color"
                                on:input=move |ev| draft.update(|d| d.color = event_target_value(&ev))
                                prop:value=move || draft.with(|d| d.color.clone())
                            />
                        </div>
                        {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                        <div class="modal-actions">
                            <button type="submit" class="btn-primary">"ADD USER"</button>
                        </div>
                    </form>
                    <div class="user-list">{user_list}</div>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| on_close.run(())>"CLOSE"</button>
                    </div>
                </div>
            </dialog>
        </div>
    }
}
