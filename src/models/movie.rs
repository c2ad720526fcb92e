use serde::{Deserialize, Serialize};

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub poster_url: String,
    /// Comma separated genre tags, e.g. "Action, Sci-Fi"
    pub genre: String,
    /// 0-100 scale
    pub rating: i32,
    pub release_year: i32,
}

/// A movie that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMovie {
    pub title: String,
    pub description: String,
    pub poster_url: String,
    pub genre: String,
    pub rating: i32,
    pub release_year: i32,
}

impl NewMovie {
    pub fn into_movie(self, id: i32) -> Movie {
        Movie {
            id,
            title: self.title,
            description: self.description,
            poster_url: self.poster_url,
            genre: self.genre,
            rating: self.rating,
            release_year: self.release_year,
        }
    }
}
