#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Full user row, including the password hash. Never serialized to clients;
/// responses go through [`PublicUser`].
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

/// Client-safe projection of a user row.
#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
}

impl From<&UserRow> for PublicUser {
    fn from(user: &UserRow) -> Self {
        // Fall back to the email local part when no name was captured.
        let name = if user.name.trim().is_empty() {
            user.email.split('@').next().unwrap_or_default().to_string()
        } else {
            user.name.clone()
        };
        Self {
            id: user.id,
            email: user.email.clone(),
            name,
        }
    }
}
