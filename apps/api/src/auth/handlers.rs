use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::auth::passwords::{hash_password, verify_password};
use crate::auth::store::{create_user, find_user_by_email, touch_last_login};
use crate::auth::tokens::{get_or_issue_token, revoke_tokens, AuthUser};
use crate::errors::AppError;
use crate::models::profile::ProfileRow;
use crate::models::user::PublicUser;
use crate::profile::store::get_or_create_profile;
use crate::state::AppState;

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
pub struct SignupResponse {
    pub token: String,
    pub user: PublicUser,
    pub profile: ProfileRow,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: PublicUser,
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub user: PublicUser,
    pub profile: ProfileRow,
}

/// POST /api/v1/auth/signup
pub async fn handle_signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), AppError> {
    let name = req.name.trim();
    let email = normalize_email(&req.email);
    let password = req.password.trim();

    validate_signup(name, &email, password)?;

    if find_user_by_email(&state.db, &email).await?.is_some() {
        return Err(AppError::Validation(
            "An account with this email already exists.".to_string(),
        ));
    }

    let password_hash = hash_password(password)?;
    let user = create_user(&state.db, &email, name, &password_hash).await?;
    let profile = get_or_create_profile(&state.db, user.id).await?;
    let token = get_or_issue_token(&state.db, user.id).await?;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            token,
            user: PublicUser::from(&user),
            profile,
        }),
    ))
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let email = normalize_email(&req.email);
    let user = find_user_by_email(&state.db, &email)
        .await?
        .filter(|user| verify_password(&req.password, &user.password_hash))
        .ok_or_else(|| AppError::Validation("Invalid email or password.".to_string()))?;

    touch_last_login(&state.db, user.id).await?;
    let token = get_or_issue_token(&state.db, user.id).await?;

    Ok(Json(LoginResponse {
        token,
        user: PublicUser::from(&user),
    }))
}

/// POST /api/v1/auth/logout
pub async fn handle_logout(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<StatusCode, AppError> {
    revoke_tokens(&state.db, user.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/session
pub async fn handle_session(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<SessionResponse>, AppError> {
    let profile = get_or_create_profile(&state.db, user.id).await?;
    Ok(Json(SessionResponse {
        user: PublicUser::from(&user),
        profile,
    }))
}

fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn validate_signup(name: &str, email: &str, password: &str) -> Result<(), AppError> {
    let mut problems = Vec::new();
    if name.is_empty() {
        problems.push("Name is required.");
    }
    if email.is_empty() {
        problems.push("Email is required.");
    }
    if password.len() < MIN_PASSWORD_LEN {
        problems.push("Password must be at least 6 characters.");
    }
    if problems.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(problems.join(" ")))
    }
}
