use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::Movie,
    routes::AppState,
};

/// Handler listing the whole catalog
pub async fn list(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Movie>>> {
    let movies = state.storage.list_movies().await?;
    Ok(Json(movies))
}

/// Handler for a single movie
pub async fn get(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<Movie>> {
    let Path(id) = id?;
    let movie = state
        .storage
        .get_movie(id)
        .await?
        .ok_or_else(AppError::movie_not_found)?;
    Ok(Json(movie))
}
