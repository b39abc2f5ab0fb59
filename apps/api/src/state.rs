use sqlx::PgPool;

/// Shared application state injected into all route handlers via Axum
/// extractors. The career catalog itself is static data and needs no slot
/// here; handlers reach it through `advisor::catalog`.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
}
