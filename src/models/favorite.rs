use serde::Serialize;

/// Join row marking a user's interest in a movie.
///
/// At most one row exists per `(user_id, movie_id)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: i32,
    pub user_id: i32,
    pub movie_id: i32,
}
