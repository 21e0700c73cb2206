pub mod column;
pub mod error;
pub mod task;
pub mod user;

pub use column::{partition, Column};
pub use error::ValidationError;
pub use task::{NewTask, Task, TaskDraft, TaskEdit, TaskStatus};
pub use user::{assignee_summary, AvatarSize, NewUser, NewUserDraft, User, DEFAULT_USER_COLOR};
