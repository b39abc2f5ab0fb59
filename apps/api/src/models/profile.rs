use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Per-user profile row, created lazily on first access.
///
/// The optional fields are genuinely nullable in the schema: `None` means
/// "never set or explicitly cleared", and the scorer treats it as neutral.
/// Serializes in the camelCase shape the frontend consumes; `user_id` stays
/// server-side.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRow {
    #[serde(skip_serializing)]
    pub user_id: Uuid,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub education_level: Option<String>,
    pub years_experience: Option<String>,
    pub current_role: Option<String>,
    pub updated_at: DateTime<Utc>,
}
