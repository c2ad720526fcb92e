//! Account registration and credential checks.
//!
//! Passwords are stored as Argon2id PHC strings, so the salt and parameters
//! travel with the hash.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use crate::{
    db::Storage,
    error::{AppError, AppResult},
    models::{Credentials, NewUser, User},
};

/// Hash a plaintext password using Argon2id with a random salt.
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC string.
pub fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let parsed_hash = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Creates a new account
///
/// Fails with `Conflict` if the username is already taken.
pub async fn register(storage: &dyn Storage, credentials: Credentials) -> AppResult<User> {
    if storage
        .get_user_by_username(&credentials.username)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict);
    }

    let password_hash = hash_password(&credentials.password)?;
    let user = storage
        .create_user(NewUser {
            username: credentials.username,
            password_hash,
        })
        .await?;

    tracing::info!(user_id = user.id, username = %user.username, "User registered");
    Ok(user)
}

/// Checks a username/password pair
///
/// Unknown usernames and wrong passwords both yield `InvalidCredentials`.
pub async fn authenticate(storage: &dyn Storage, credentials: &Credentials) -> AppResult<User> {
    let user = storage
        .get_user_by_username(&credentials.username)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !verify_password(&credentials.password, &user.password)? {
        tracing::debug!(username = %credentials.username, "Password mismatch");
        return Err(AppError::InvalidCredentials);
    }

    Ok(user)
}
