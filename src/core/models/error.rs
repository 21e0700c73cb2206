//! Error types for form validation.

use thiserror::Error;

/// Reasons a draft cannot be committed to the board.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The task title is empty after trimming.
    #[error("Title is required")]
    EmptyTitle,

    /// The user name is empty after trimming.
    #[error("Name is required")]
    EmptyName,

    /// The user email is empty after trimming.
    #[error("Email is required")]
    EmptyEmail,

    /// The user color is empty after trimming.
    #[error("Color is required")]
    EmptyColor,
}
