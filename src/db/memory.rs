use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::{Favorite, Movie, NewMovie, NewUser, User},
};

use super::Storage;

/// In-process store with the same semantics as the Postgres store
///
/// Used by tests and when no `DATABASE_URL` is configured. Every mutation runs
/// under a single write lock, so a toggle's lookup and write are atomic.
#[derive(Default)]
pub struct MemoryStorage {
    inner: RwLock<MemoryStorageInner>,
}

#[derive(Default)]
struct MemoryStorageInner {
    users: Vec<User>,
    movies: Vec<Movie>,
    favorites: Vec<Favorite>,
    next_user_id: i32,
    next_movie_id: i32,
    next_favorite_id: i32,
}

/// Serial ids start at 1, like a Postgres `SERIAL` column
fn next_id(counter: &mut i32) -> i32 {
    *counter += 1;
    *counter
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of favorite rows stored for a `(user_id, movie_id)` pair
    pub async fn favorite_rows(&self, user_id: i32, movie_id: i32) -> usize {
        let inner = self.inner.read().await;
        inner
            .favorites
            .iter()
            .filter(|f| f.user_id == user_id && f.movie_id == movie_id)
            .count()
    }
}

#[async_trait::async_trait]
impl Storage for MemoryStorage {
    async fn get_user(&self, id: i32) -> AppResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.id == id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.username == username).cloned())
    }

    async fn create_user(&self, user: NewUser) -> AppResult<User> {
        let mut inner = self.inner.write().await;
        if inner.users.iter().any(|u| u.username == user.username) {
            return Err(AppError::Conflict);
        }

        let user = User {
            id: next_id(&mut inner.next_user_id),
            username: user.username,
            password: user.password_hash,
        };
        inner.users.push(user.clone());
        Ok(user)
    }

    async fn list_movies(&self) -> AppResult<Vec<Movie>> {
        let inner = self.inner.read().await;
        Ok(inner.movies.clone())
    }

    async fn get_movie(&self, id: i32) -> AppResult<Option<Movie>> {
        let inner = self.inner.read().await;
        Ok(inner.movies.iter().find(|m| m.id == id).cloned())
    }

    async fn create_movie(&self, movie: NewMovie) -> AppResult<Movie> {
        let mut inner = self.inner.write().await;
        let movie = movie.into_movie(next_id(&mut inner.next_movie_id));
        inner.movies.push(movie.clone());
        Ok(movie)
    }

    async fn list_favorites(&self, user_id: i32) -> AppResult<Vec<Movie>> {
        let inner = self.inner.read().await;
        let movies = inner
            .favorites
            .iter()
            .filter(|f| f.user_id == user_id)
            .filter_map(|f| inner.movies.iter().find(|m| m.id == f.movie_id))
            .cloned()
            .collect();
        Ok(movies)
    }

    async fn toggle_favorite(&self, user_id: i32, movie_id: i32) -> AppResult<bool> {
        let mut inner = self.inner.write().await;

        let existing = inner
            .favorites
            .iter()
            .position(|f| f.user_id == user_id && f.movie_id == movie_id);

        match existing {
            Some(index) => {
                inner.favorites.remove(index);
                Ok(false)
            }
            None => {
                let id = next_id(&mut inner.next_favorite_id);
                inner.favorites.push(Favorite {
                    id,
                    user_id,
                    movie_id,
                });
                Ok(true)
            }
        }
    }
}
