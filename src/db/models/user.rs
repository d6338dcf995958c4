//! User Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use crate::utils::AppError;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN,
    validate_optional_text, validate_required_text,
};

/// Customer account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phonenumber: String,
    #[serde(default)]
    pub address: String,
    /// Argon2 hash. Stored with the record; API responses use
    /// [`UserResponse`], which omits it.
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// User response (without password)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(serialize_with = "serde_helpers::option_record_id::serialize")]
    pub id: Option<RecordId>,
    pub username: String,
    pub email: String,
    pub phonenumber: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Minimal projection joined into order payloads in place of the bare
/// userId reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(with = "serde_helpers::record_id")]
    pub id: RecordId,
    pub username: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            phonenumber: user.phonenumber,
            address: user.address,
            avatar: user.avatar,
        }
    }
}

impl User {
    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}

/// Create user payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreate {
    pub username: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub phonenumber: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub password: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl UserCreate {
    /// Validate required fields, hash the password, assemble the record.
    pub fn into_user(self) -> Result<User, AppError> {
        let mut missing = Vec::new();
        if self.username.is_none() {
            missing.push("username");
        }
        if self.email.is_none() {
            missing.push("email");
        }
        if self.password.is_none() {
            missing.push("password");
        }
        if !missing.is_empty() {
            return Err(AppError::validation(format!(
                "All required fields must be provided (missing: {})",
                missing.join(", ")
            )));
        }

        let username = self.username.unwrap_or_default();
        let email = self.email.unwrap_or_default();
        let password = self.password.unwrap_or_default();

        validate_required_text(&username, "username", MAX_NAME_LEN)?;
        validate_required_text(&email, "email", MAX_EMAIL_LEN)?;
        validate_required_text(&password, "password", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&self.phonenumber, "phonenumber", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(&self.address, "address", MAX_ADDRESS_LEN)?;
        validate_optional_text(&self.avatar, "avatar", MAX_URL_LEN)?;

        let password = User::hash_password(&password)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok(User {
            id: None,
            username,
            email,
            phonenumber: self.phonenumber.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            password,
            avatar: self.avatar,
        })
    }
}

/// Update user payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phonenumber: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}
