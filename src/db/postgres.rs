use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    error::{AppError, AppResult},
    models::{Favorite, Movie, NewMovie, NewUser, User},
};

use super::{seed::seed_movies, Storage};

/// Creates a PostgreSQL connection pool
///
/// Establishes a pool of database connections for efficient reuse.
/// The pool automatically manages connection lifecycle and limits.
pub async fn create_pool(database_url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    Ok(pool)
}

/// Advisory lock key held while seeding, so concurrent starts seed once
const SEED_LOCK_KEY: i64 = 0x6d6f_7669_6573;

async fn insert_movie<'e, E>(executor: E, movie: &NewMovie) -> AppResult<Movie>
where
    E: sqlx::PgExecutor<'e>,
{
    let movie = sqlx::query_as::<_, Movie>(
        r#"
        INSERT INTO movies (title, description, poster_url, genre, rating, release_year)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, title, description, poster_url, genre, rating, release_year
        "#,
    )
    .bind(&movie.title)
    .bind(&movie.description)
    .bind(&movie.poster_url)
    .bind(&movie.genre)
    .bind(movie.rating)
    .bind(movie.release_year)
    .fetch_one(executor)
    .await?;
    Ok(movie)
}

/// Postgres-backed storage
#[derive(Clone)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies the embedded migrations in `migrations/`
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl Storage for PgStorage {
    async fn get_user(&self, id: i32) -> AppResult<Option<User>> {
        let user =
            sqlx::query_as::<_, User>("SELECT id, username, password FROM users WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(user)
    }

    async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn create_user(&self, user: NewUser) -> AppResult<User> {
        let result = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password)
            VALUES ($1, $2)
            RETURNING id, username, password
            "#,
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(AppError::Conflict),
            Err(e) => Err(e.into()),
        }
    }

    async fn list_movies(&self) -> AppResult<Vec<Movie>> {
        let movies = sqlx::query_as::<_, Movie>(
            r#"
            SELECT id, title, description, poster_url, genre, rating, release_year
            FROM movies
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(movies)
    }

    async fn get_movie(&self, id: i32) -> AppResult<Option<Movie>> {
        let movie = sqlx::query_as::<_, Movie>(
            r#"
            SELECT id, title, description, poster_url, genre, rating, release_year
            FROM movies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(movie)
    }

    async fn create_movie(&self, movie: NewMovie) -> AppResult<Movie> {
        insert_movie(&self.pool, &movie).await
    }

    async fn list_favorites(&self, user_id: i32) -> AppResult<Vec<Movie>> {
        let movies = sqlx::query_as::<_, Movie>(
            r#"
            SELECT m.id, m.title, m.description, m.poster_url, m.genre, m.rating, m.release_year
            FROM favorites f
            INNER JOIN movies m ON m.id = f.movie_id
            WHERE f.user_id = $1
            ORDER BY f.id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(movies)
    }

    async fn toggle_favorite(&self, user_id: i32, movie_id: i32) -> AppResult<bool> {
        let mut tx = self.pool.begin().await?;

        // Serializes toggles of the same pair until the transaction ends
        sqlx::query("SELECT pg_advisory_xact_lock($1, $2)")
            .bind(user_id)
            .bind(movie_id)
            .execute(&mut *tx)
            .await?;

        let existing = sqlx::query_as::<_, Favorite>(
            "SELECT id, user_id, movie_id FROM favorites WHERE user_id = $1 AND movie_id = $2",
        )
        .bind(user_id)
        .bind(movie_id)
        .fetch_optional(&mut *tx)
        .await?;

        let is_favorite = match existing {
            Some(favorite) => {
                sqlx::query("DELETE FROM favorites WHERE id = $1")
                    .bind(favorite.id)
                    .execute(&mut *tx)
                    .await?;
                false
            }
            None => {
                sqlx::query("INSERT INTO favorites (user_id, movie_id) VALUES ($1, $2)")
                    .bind(user_id)
                    .bind(movie_id)
                    .execute(&mut *tx)
                    .await?;
                true
            }
        };

        tx.commit().await?;

        tracing::debug!(user_id, movie_id, is_favorite, "Toggled favorite");
        Ok(is_favorite)
    }

    async fn seed_catalog(&self) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(SEED_LOCK_KEY)
            .execute(&mut *tx)
            .await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movies")
            .fetch_one(&mut *tx)
            .await?;

        if count > 0 {
            tracing::debug!(count, "Catalog already populated, skipping seed");
            tx.commit().await?;
            return Ok(());
        }

        let movies = seed_movies();
        for movie in &movies {
            insert_movie(&mut *tx, movie).await?;
        }
        tx.commit().await?;

        tracing::info!(count = movies.len(), "Seeded movie catalog");
        Ok(())
    }
}
