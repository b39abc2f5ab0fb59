use axum::{extract::State, Json};
use serde::Serialize;

use crate::advisor::scoring::{generate_recommendations, CareerRecommendation};
use crate::auth::tokens::AuthUser;
use crate::errors::AppError;
use crate::profile::store::get_or_create_profile;
use crate::state::AppState;

#[derive(Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<CareerRecommendation>,
}

/// GET /api/v1/recommendations
pub async fn handle_get_recommendations(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let profile = get_or_create_profile(&state.db, user.id).await?;
    let recommendations = generate_recommendations(&profile);
    Ok(Json(RecommendationsResponse { recommendations }))
}
