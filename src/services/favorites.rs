use crate::{
    db::Storage,
    error::{AppError, AppResult},
    models::Movie,
};

/// Toggles a movie in the user's favorites
///
/// Fails with `NotFound` when the movie does not exist, without touching the
/// favorites table.
pub async fn toggle(storage: &dyn Storage, user_id: i32, movie_id: i32) -> AppResult<bool> {
    if storage.get_movie(movie_id).await?.is_none() {
        return Err(AppError::movie_not_found());
    }

    let is_favorite = storage.toggle_favorite(user_id, movie_id).await?;

    tracing::info!(user_id, movie_id, is_favorite, "Favorite toggled");

    Ok(is_favorite)
}

pub async fn list(storage: &dyn Storage, user_id: i32) -> AppResult<Vec<Movie>> {
    storage.list_favorites(user_id).await
}
