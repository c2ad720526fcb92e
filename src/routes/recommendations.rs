use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{error::AppResult, models::Movie, routes::AppState, services::recommendations};

/// Handler for recommendations endpoint
pub async fn recommend(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Movie>>> {
    let catalog = state.storage.list_movies().await?;
    let picked = recommendations::recommend(&catalog, &mut rand::thread_rng());
    Ok(Json(picked))
}
