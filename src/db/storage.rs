use crate::{
    error::AppResult,
    models::{Movie, NewMovie, NewUser, User},
};

use super::seed::seed_movies;

/// Storage abstraction over users, the movie catalog and favorites
///
/// Implementations must guarantee that `toggle_favorite` never leaves more than
/// one favorite row for a `(user_id, movie_id)` pair, even when called
/// concurrently for the same pair.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    async fn get_user(&self, id: i32) -> AppResult<Option<User>>;

    async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Inserts a user, failing with `AppError::Conflict` if the username is taken
    async fn create_user(&self, user: NewUser) -> AppResult<User>;

    /// Full catalog scan, ordered by id
    async fn list_movies(&self) -> AppResult<Vec<Movie>>;

    async fn get_movie(&self, id: i32) -> AppResult<Option<Movie>>;

    async fn create_movie(&self, movie: NewMovie) -> AppResult<Movie>;

    /// Movies the user has favorited, in the order they were favorited
    async fn list_favorites(&self, user_id: i32) -> AppResult<Vec<Movie>>;

    /// Flips the favorite state of a movie for a user
    ///
    /// Returns `true` if the movie is now a favorite, `false` if it was removed.
    async fn toggle_favorite(&self, user_id: i32, movie_id: i32) -> AppResult<bool>;

    /// Populates the catalog with the seed movies if it is empty
    ///
    /// Safe to call on every start; a non-empty catalog is left untouched.
    async fn seed_catalog(&self) -> AppResult<()> {
        if !self.list_movies().await?.is_empty() {
            tracing::debug!("Catalog already populated, skipping seed");
            return Ok(());
        }

        let movies = seed_movies();
        let count = movies.len();
        for movie in movies {
            self.create_movie(movie).await?;
        }

        tracing::info!(count, "Seeded movie catalog");
        Ok(())
    }
}
