use leptos::prelude::*;
use crate::core::services::{BoardState, Session};
use super::TodoCardPreview;

// Floating copy of the dragged card, pinned next to the pointer
#[component]
pub fn DragPreview(
    #[prop(into)] board: Signal<BoardState>,
    #[prop(into)] session: Signal<Session>,
    #[prop(into)] pointer: Signal<(i32, i32)>,
) -> impl IntoView {
    let dragged = Memo::new(move |_| {
        session.with(|s| {
            s.dragging.as_deref().and_then(|id| board.with(|state| state.task(id).cloned()))
        })
    });

    move || {
        dragged.get().map(|task| {
            let (x, y) = pointer.get();
            view! {
                <div
                    class="drag-overlay"
                    style=format!("left: {}px; top: {}px;", x + 12, y + 12)
                >
                    <TodoCardPreview task=task />
                </div>
            }
        })
    }
}
