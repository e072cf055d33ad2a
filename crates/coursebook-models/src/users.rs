//! User data models and DTOs.
//!
//! - [`User`] - Row from the `users` table, including the password hash
//! - [`UserSummary`] - Public view of a user (never includes the password)
//! - [`CreateUserDto`] - Registration payload

use std::fmt;

use chrono::{DateTime, Utc};
use coursebook_core::serde::deserialize_null_as_empty;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::validate_email_address;

/// A registered user.
///
/// Deliberately not `Serialize`: responses go through [`UserSummary`] so
/// the password hash cannot end up in a body.
#[derive(FromRow, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email_address: user.email_address.clone(),
        }
    }
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email_address: user.email_address,
        }
    }
}

/// Registration payload for `POST /api/users`.
///
/// Missing and `null` fields deserialize to empty strings so that every
/// problem is reported by validation in one response.
#[derive(Deserialize, Clone, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    #[validate(length(min = 1, message = "No value was found for first name."))]
    pub first_name: String,

    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    #[validate(length(min = 1, message = "No value was found for last name."))]
    pub last_name: String,

    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    #[validate(
        length(min = 1, message = "No value was found for e-mail address."),
        custom(function = "validate_email_address")
    )]
    pub email_address: String,

    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    #[validate(length(min = 1, message = "No value was found for password."))]
    pub password: String,
}

impl fmt::Debug for CreateUserDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateUserDto")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email_address", &self.email_address)
            .field("password", &"<redacted>")
            .finish()
    }
}
