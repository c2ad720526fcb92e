use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use std::sync::Arc;

use crate::{
    contract::FavoriteStatus,
    error::AppResult,
    middleware::auth::CurrentUser,
    models::Movie,
    routes::AppState,
    services::favorites,
};

/// Handler listing the caller's favorite movies
pub async fn list(
    State(state): State<Arc<AppState>>,
    current: CurrentUser,
) -> AppResult<Json<Vec<Movie>>> {
    let movies = favorites::list(state.storage.as_ref(), current.user_id).await?;
    Ok(Json(movies))
}

/// Handler flipping a movie in or out of the caller's favorites
pub async fn toggle(
    State(state): State<Arc<AppState>>,
    current: CurrentUser,
    movie_id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<FavoriteStatus>> {
    let Path(movie_id) = movie_id?;
    let is_favorite = favorites::toggle(state.storage.as_ref(), current.user_id, movie_id).await?;
    Ok(Json(FavoriteStatus { is_favorite }))
}
