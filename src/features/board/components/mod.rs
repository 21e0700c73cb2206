pub mod add_todo_modal;
pub mod assignee_toggles;
pub mod board;
pub mod column;
pub mod drag_preview;
pub mod header;
pub mod manage_users_modal;
pub mod todo_card;
pub mod user_avatar;

pub use add_todo_modal::AddTodoModal;
pub use assignee_toggles::AssigneeToggles;
pub use board::KanbanBoard;
pub use column::BoardColumn;
pub use drag_preview::DragPreview;
pub use header::BoardHeader;
pub use manage_users_modal::ManageUsersModal;
pub use todo_card::{CardActions, TodoCard, TodoCardPreview};
pub use user_avatar::UserAvatar;
