//! Route paths and wire shapes shared by the router, handlers and clients.
//!
//! Every path the server mounts is declared here once. Handlers serialize the
//! response types below, and integration tests build their URLs from the same
//! constants via [`build_url`].

use serde::{Deserialize, Serialize};

pub const HEALTH: &str = "/health";

pub const REGISTER: &str = "/api/register";
pub const LOGIN: &str = "/api/login";
pub const LOGOUT: &str = "/api/logout";
pub const CURRENT_USER: &str = "/api/user";

pub const MOVIES: &str = "/api/movies";
pub const MOVIE: &str = "/api/movies/:id";
pub const RECOMMENDATIONS: &str = "/api/recommendations";

pub const FAVORITES: &str = "/api/favorites";
pub const TOGGLE_FAVORITE: &str = "/api/favorites/:movieId";

/// Substitutes `:name` segments of a route path with concrete values.
///
/// Parameters that do not appear in the path are ignored.
pub fn build_url(path: &str, params: &[(&str, String)]) -> String {
    let mut url = path.to_string();
    for (key, value) in params {
        let placeholder = format!(":{}", key);
        if url.contains(&placeholder) {
            url = url.replace(&placeholder, value);
        }
    }
    url
}

/// JSON body of every error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field: None,
        }
    }
}

/// Response of the favorite toggle endpoint
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteStatus {
    pub is_favorite: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_substitutes_params() {
        let url = build_url(TOGGLE_FAVORITE, &[("movieId", 42.to_string())]);
        assert_eq!(url, "/api/favorites/42");
    }

    #[test]
    fn test_build_url_ignores_unknown_params() {
        let url = build_url(MOVIE, &[("movieId", "1".to_string())]);
        assert_eq!(url, "/api/movies/:id");
    }

    #[test]
    fn test_favorite_status_uses_camel_case() {
        let json = serde_json::to_string(&FavoriteStatus { is_favorite: true }).unwrap();
        assert_eq!(json, r#"{"isFavorite":true}"#);
    }

    #[test]
    fn test_error_body_omits_missing_field() {
        let json = serde_json::to_value(ErrorBody::new("Movie not found")).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "Movie not found" }));
    }
}
