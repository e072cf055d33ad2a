use anyhow::anyhow;
use coursebook_core::AppError;
use coursebook_models::Course;

use crate::middleware::auth::AuthUser;

pub const NOT_COURSE_OWNER: &str = "Only the owner of this course may modify it.";

/// Fails with 403 unless `auth_user` owns `course`.
pub fn assert_owner(course: &Course, auth_user: &AuthUser) -> Result<(), AppError> {
    if course.user_id == auth_user.user_id() {
        Ok(())
    } else {
        Err(AppError::forbidden(anyhow!(NOT_COURSE_OWNER)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use chrono::Utc;
    use coursebook_models::User;

    fn auth_user(id: i64) -> AuthUser {
        AuthUser(User {
            id,
            first_name: "Joe".to_string(),
            last_name: "Smith".to_string(),
            email_address: "joe@smith.com".to_string(),
            password: "$2b$04$hash".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
    }

    fn course(user_id: i64) -> Course {
        Course {
            id: 1,
            title: "Build a Basic Bookcase".to_string(),
            description: "Woodworking for beginners.".to_string(),
            estimated_time: None,
            materials_needed: None,
            user_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_owner_passes() {
        assert!(assert_owner(&course(1), &auth_user(1)).is_ok());
    }

    #[test]
    fn test_other_user_is_forbidden() {
        let error = assert_owner(&course(1), &auth_user(2)).unwrap_err();
        assert_eq!(error.status, StatusCode::FORBIDDEN);
        assert_eq!(error.error.to_string(), NOT_COURSE_OWNER);
    }
}
