pub mod board_state;
pub mod seed;
pub mod session;

pub use board_state::*;
pub use seed::*;
pub use session::*;
