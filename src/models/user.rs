use serde::{Deserialize, Serialize};
use validator::Validate;

/// A registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    /// Argon2 PHC string; never sent to clients
    #[serde(skip_serializing)]
    pub password: String,
}

/// A user row about to be inserted, with the password already hashed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

/// Register and login payload
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Credentials {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_never_serializes_password() {
        let user = User {
            id: 7,
            username: "alice".to_string(),
            password: "$argon2id$v=19$...".to_string(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 7, "username": "alice" }));
    }

    #[test]
    fn test_credentials_reject_empty_fields() {
        let credentials = Credentials {
            username: String::new(),
            password: "pw123".to_string(),
        };
        let errors = credentials.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));

        let credentials = Credentials {
            username: "alice".to_string(),
            password: "pw123".to_string(),
        };
        assert!(credentials.validate().is_ok());
    }
}
