use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::ValidationError;

pub const DEFAULT_USER_COLOR: &str = "#3b82f6";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Any CSS color value; used as the avatar background.
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub color: String,
}

impl User {
    pub fn new(new_user: NewUser) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: new_user.name,
            email: new_user.email,
            color: new_user.color,
        }
    }

    /// First letter of each word, uppercased, at most two characters.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

/// Caption next to a card's avatars: the name for a single assignee, a count
/// otherwise. `None` when nobody is assigned.
pub fn assignee_summary(users: &[User]) -> Option<String> {
    match users {
        [] => None,
        [user] => Some(user.name.clone()),
        many => Some(format!("{} users", many.len())),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AvatarSize {
    #[default]
    Small,
    Medium,
    Large,
}

impl AvatarSize {
    pub fn class(&self) -> &'static str {
        match self {
            AvatarSize::Small => "avatar-sm",
            AvatarSize::Medium => "avatar-md",
            AvatarSize::Large => "avatar-lg",
        }
    }
}

/// Form buffer for the user management modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserDraft {
    pub name: String,
    pub email: String,
    pub color: String,
}

impl Default for NewUserDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            color: DEFAULT_USER_COLOR.to_string(),
        }
    }
}

impl NewUserDraft {
    pub fn into_new_user(self) -> Result<NewUser, ValidationError> {
        let name = self.name.trim();
        let email = self.email.trim();
        let color = self.color.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if email.is_empty() {
            return Err(ValidationError::EmptyEmail);
        }
        if color.is_empty() {
            return Err(ValidationError::EmptyColor);
        }
        Ok(NewUser {
            name: name.to_string(),
            email: email.to_string(),
            color: color.to_string(),
        })
    }
}
