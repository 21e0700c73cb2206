use leptos::prelude::*;
use crate::core::models::{AvatarSize, User};

#[component]
pub fn UserAvatar(
    #[prop(into)] user: User,
    #[prop(optional)] size: AvatarSize,
) -> impl IntoView {
    view! {
        <div
            class=format!("user-avatar {}", size.class())
            style=format!("background-color: {}", user.color)
            title=user.name.clone()
        >
            {user.initials()}
        </div>
    }
}
