//! Opaque bearer tokens backed by the auth_tokens table.
//!
//! A token row is the session: login hands out the user's existing token or
//! mints one, and logout deletes every row for the user, revoking all clients
//! at once. The extractor accepts both `Token <key>` (what the web client
//! sends) and the conventional `Bearer <key>`.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use rand::RngCore;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::UserRow;
use crate::state::AppState;

const TOKEN_BYTES: usize = 20;

/// Returns the user's existing token, or mints and stores a fresh one.
pub async fn get_or_issue_token(pool: &PgPool, user_id: Uuid) -> Result<String, AppError> {
    let existing: Option<String> =
        sqlx::query_scalar("SELECT token FROM auth_tokens WHERE user_id = $1 LIMIT 1")
            .bind(user_id)
            .fetch_optional(pool)
            .await?;
    if let Some(token) = existing {
        return Ok(token);
    }

    let token = generate_token();
    sqlx::query("INSERT INTO auth_tokens (token, user_id) VALUES ($1, $2)")
        .bind(&token)
        .bind(user_id)
        .execute(pool)
        .await?;
    info!("Issued auth token for user {user_id}");
    Ok(token)
}

/// Deletes every token belonging to the user.
pub async fn revoke_tokens(pool: &PgPool, user_id: Uuid) -> Result<(), AppError> {
    sqlx::query("DELETE FROM auth_tokens WHERE user_id = $1")
        .bind(user_id)
        .execute(pool)
        .await?;
    info!("Revoked auth tokens for user {user_id}");
    Ok(())
}

async fn find_user_by_token(pool: &PgPool, token: &str) -> Result<Option<UserRow>, AppError> {
    Ok(sqlx::query_as::<_, UserRow>(
        r#"
        SELECT u.*
        FROM users u
        JOIN auth_tokens t ON t.user_id = u.id
        WHERE t.token = $1
        "#,
    )
    .bind(token)
    .fetch_optional(pool)
    .await?)
}

fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Strips the auth scheme from an Authorization header value.
fn parse_auth_header(value: &str) -> Option<&str> {
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    match scheme {
        "Token" | "Bearer" => Some(token),
        _ => None,
    }
}

/// The authenticated caller, resolved from the Authorization header.
pub struct AuthUser(pub UserRow);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AppError::Unauthorized)?;
        let token = parse_auth_header(header).ok_or(AppError::Unauthorized)?;
        let user = find_user_by_token(&state.db, token)
            .await?
            .ok_or(AppError::Unauthorized)?;
        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_tokens_are_40_hex_chars() {
        let token = generate_token();
        assert_eq!(token.len(), 40);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(token, generate_token());
    }

    #[test]
    fn test_parse_auth_header_accepts_both_schemes() {
        assert_eq!(parse_auth_header("Token abc123"), Some("abc123"));
        assert_eq!(parse_auth_header("Bearer abc123"), Some("abc123"));
    }

    #[test]
    fn test_parse_auth_header_rejects_garbage() {
        assert_eq!(parse_auth_header("Basic abc123"), None);
        assert_eq!(parse_auth_header("Token"), None);
        assert_eq!(parse_auth_header("Token   "), None);
        assert_eq!(parse_auth_header(""), None);
    }
}
