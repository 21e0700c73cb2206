pub mod drag_operations;
pub mod task_operations;
pub mod user_operations;

pub use drag_operations::*;
pub use task_operations::*;
pub use user_operations::*;
