//! Session-backed authentication gate.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::error::{AppError, AppResult};

/// Session key holding the authenticated user's id
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// The authenticated caller
///
/// Use as a handler argument to require a logged-in session. Extraction fails
/// with `AppError::Unauthenticated` before the handler body runs, so no
/// storage call happens for anonymous requests.
#[derive(Clone)]
pub struct CurrentUser {
    pub user_id: i32,
    pub session: Session,
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| AppError::Internal(msg.to_string()))?;

        let user_id = session
            .get::<i32>(SESSION_USER_ID_KEY)
            .await?
            .ok_or(AppError::Unauthenticated)?;

        Ok(CurrentUser { user_id, session })
    }
}

/// Binds the session to a user, issuing a fresh session id
pub async fn sign_in(session: &Session, user_id: i32) -> AppResult<()> {
    session.cycle_id().await?;
    session.insert(SESSION_USER_ID_KEY, user_id).await?;
    Ok(())
}

/// Drops all session data and invalidates the cookie
pub async fn sign_out(session: &Session) -> AppResult<()> {
    session.flush().await?;
    Ok(())
}
