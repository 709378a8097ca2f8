//! User domain models and parameters.

use chrono::{DateTime, Utc};

/// A competing team's account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `User` - The converted user domain model
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
}
