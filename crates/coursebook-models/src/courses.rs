//! Course data models and DTOs.

use chrono::{DateTime, Utc};
use coursebook_core::serde::deserialize_null_as_empty;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::users::UserSummary;

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    /// Owner; the only user allowed to update or delete the course.
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A course with its owner embedded, as returned by the read endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct CourseWithOwner {
    #[serde(flatten)]
    pub course: Course,
    pub user: UserSummary,
}

/// Flat row produced by joining `courses` with `users`.
#[derive(FromRow, Debug, Clone)]
pub struct CourseWithOwnerRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub owner_first_name: String,
    pub owner_last_name: String,
    pub owner_email_address: String,
}

impl From<CourseWithOwnerRow> for CourseWithOwner {
    fn from(row: CourseWithOwnerRow) -> Self {
        Self {
            user: UserSummary {
                id: row.user_id,
                first_name: row.owner_first_name,
                last_name: row.owner_last_name,
                email_address: row.owner_email_address,
            },
            course: Course {
                id: row.id,
                title: row.title,
                description: row.description,
                estimated_time: row.estimated_time,
                materials_needed: row.materials_needed,
                user_id: row.user_id,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
        }
    }
}

/// Payload for creating (`POST`) and replacing (`PUT`) a course.
///
/// The owner always comes from the authenticated user; a `userId` in the
/// body is ignored.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    #[validate(length(min = 1, message = "No value was found for title."))]
    pub title: String,

    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    #[validate(length(min = 1, message = "No value was found for description."))]
    pub description: String,

    #[serde(default)]
    pub estimated_time: Option<String>,

    #[serde(default)]
    pub materials_needed: Option<String>,
}
