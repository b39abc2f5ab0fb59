//! Profile persistence.
//!
//! Profiles are upserted lazily: the first session, profile, or
//! recommendations call for a user creates an empty row. Updates merge over
//! the stored row, so a client can PATCH-style send only the fields it wants
//! to change.

use serde::{Deserialize, Deserializer};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::ProfileRow;

/// Fields of a profile update request.
///
/// An absent field keeps its stored value. For the optional text fields the
/// outer `Option` is presence and the inner one the value, so an explicit
/// JSON `null` (`Some(None)`) clears the stored value, which a plain
/// `Option<String>` could not express.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub interests: Option<Vec<String>>,
    #[serde(default, deserialize_with = "present")]
    pub education_level: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub years_experience: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub current_role: Option<Option<String>>,
}

/// Marks a field as present: runs only when the key appears in the JSON, so
/// `"field": null` becomes `Some(None)` instead of collapsing into the
/// absent-field `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

pub async fn get_or_create_profile(pool: &PgPool, user_id: Uuid) -> Result<ProfileRow, AppError> {
    let existing =
        sqlx::query_as::<_, ProfileRow>("SELECT * FROM user_profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
    if let Some(profile) = existing {
        return Ok(profile);
    }

    // ON CONFLICT covers two first-access requests racing the insert.
    let created = sqlx::query_as::<_, ProfileRow>(
        r#"
        INSERT INTO user_profiles (user_id)
        VALUES ($1)
        ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
        RETURNING *
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;
    info!("Created empty profile for user {user_id}");
    Ok(created)
}

/// Merges the update over the stored profile and persists the result,
/// bumping `updated_at`.
pub async fn update_profile(
    pool: &PgPool,
    user_id: Uuid,
    update: &ProfileUpdate,
) -> Result<ProfileRow, AppError> {
    let current = get_or_create_profile(pool, user_id).await?;
    let merged = merge_profile(current, update);

    let saved = sqlx::query_as::<_, ProfileRow>(
        r#"
        UPDATE user_profiles
        SET skills = $2,
            interests = $3,
            education_level = $4,
            years_experience = $5,
            "current_role" = $6,
            updated_at = now()
        WHERE user_id = $1
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(&merged.skills)
    .bind(&merged.interests)
    .bind(&merged.education_level)
    .bind(&merged.years_experience)
    .bind(&merged.current_role)
    .fetch_one(pool)
    .await?;
    info!("Updated profile for user {user_id}");
    Ok(saved)
}

fn merge_profile(mut profile: ProfileRow, update: &ProfileUpdate) -> ProfileRow {
    if let Some(skills) = &update.skills {
        profile.skills = skills.clone();
    }
    if let Some(interests) = &update.interests {
        profile.interests = interests.clone();
    }
    if let Some(level) = &update.education_level {
        profile.education_level = level.clone();
    }
    if let Some(years) = &update.years_experience {
        profile.years_experience = years.clone();
    }
    if let Some(role) = &update.current_role {
        profile.current_role = role.clone();
    }
    profile
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn stored_profile() -> ProfileRow {
        ProfileRow {
            user_id: Uuid::new_v4(),
            skills: vec!["python".to_string()],
            interests: vec!["data".to_string()],
            education_level: Some("bachelors".to_string()),
            years_experience: Some("3".to_string()),
            current_role: Some("Business Analyst".to_string()),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_absent_fields_keep_stored_values() {
        let merged = merge_profile(stored_profile(), &ProfileUpdate::default());
        assert_eq!(merged.skills, vec!["python"]);
        assert_eq!(merged.education_level.as_deref(), Some("bachelors"));
        assert_eq!(merged.current_role.as_deref(), Some("Business Analyst"));
    }

    #[test]
    fn test_present_fields_replace_stored_values() {
        let update = ProfileUpdate {
            skills: Some(vec!["sql".to_string(), "analytics".to_string()]),
            years_experience: Some(Some("6".to_string())),
            ..Default::default()
        };
        let merged = merge_profile(stored_profile(), &update);
        assert_eq!(merged.skills, vec!["sql", "analytics"]);
        assert_eq!(merged.years_experience.as_deref(), Some("6"));
        // untouched fields survive
        assert_eq!(merged.interests, vec!["data"]);
    }

    #[test]
    fn test_explicit_null_clears_optional_field() {
        let update: ProfileUpdate =
            serde_json::from_str(r#"{"currentRole": null, "educationLevel": "masters"}"#).unwrap();
        let merged = merge_profile(stored_profile(), &update);
        assert_eq!(merged.current_role, None);
        assert_eq!(merged.education_level.as_deref(), Some("masters"));
    }

    #[test]
    fn test_update_request_uses_camel_case_keys() {
        let update: ProfileUpdate = serde_json::from_str(
            r#"{"skills": ["rust"], "yearsExperience": "11", "currentRole": "SRE"}"#,
        )
        .unwrap();
        assert_eq!(update.skills.as_deref(), Some(&["rust".to_string()][..]));
        assert_eq!(update.years_experience, Some(Some("11".to_string())));
        assert_eq!(update.current_role, Some(Some("SRE".to_string())));
    }
}
