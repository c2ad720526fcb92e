use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use tower_sessions::Session;

use crate::{
    error::{AppError, AppResult},
    extract::ValidatedJson,
    middleware::auth::{sign_in, sign_out, CurrentUser},
    models::{Credentials, User},
    routes::AppState,
    services::auth,
};

/// Handler for account registration; logs the new user in
pub async fn register(
    State(state): State<Arc<AppState>>,
    session: Session,
    ValidatedJson(credentials): ValidatedJson<Credentials>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = auth::register(state.storage.as_ref(), credentials).await?;
    sign_in(&session, user.id).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Handler for login
pub async fn login(
    State(state): State<Arc<AppState>>,
    session: Session,
    ValidatedJson(credentials): ValidatedJson<Credentials>,
) -> AppResult<Json<User>> {
    let user = auth::authenticate(state.storage.as_ref(), &credentials).await?;
    sign_in(&session, user.id).await?;
    tracing::info!(user_id = user.id, "User logged in");
    Ok(Json(user))
}

/// Handler for logout
pub async fn logout(current: CurrentUser) -> AppResult<StatusCode> {
    sign_out(&current.session).await?;
    tracing::info!(user_id = current.user_id, "User logged out");
    Ok(StatusCode::OK)
}

/// Handler returning the logged-in user
pub async fn me(
    State(state): State<Arc<AppState>>,
    current: CurrentUser,
) -> AppResult<Json<User>> {
    // The session may outlive the account it points to
    let user = state
        .storage
        .get_user(current.user_id)
        .await?
        .ok_or(AppError::Unauthenticated)?;
    Ok(Json(user))
}
