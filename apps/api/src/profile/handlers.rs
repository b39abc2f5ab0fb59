use axum::{extract::State, Json};
use serde::Serialize;

use crate::auth::tokens::AuthUser;
use crate::errors::AppError;
use crate::models::profile::ProfileRow;
use crate::profile::store::{get_or_create_profile, update_profile, ProfileUpdate};
use crate::state::AppState;

#[derive(Serialize)]
pub struct ProfileResponse {
    pub profile: ProfileRow,
}

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile = get_or_create_profile(&state.db, user.id).await?;
    Ok(Json(ProfileResponse { profile }))
}

/// POST /api/v1/profile
pub async fn handle_update_profile(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile = update_profile(&state.db, user.id, &update).await?;
    Ok(Json(ProfileResponse { profile }))
}
