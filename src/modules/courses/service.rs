use anyhow::{Context, anyhow};
use coursebook_core::AppError;
use coursebook_models::{Course, CourseDto, CourseWithOwner, CourseWithOwnerRow};
use sqlx::SqlitePool;

pub const COURSE_NOT_FOUND: &str = "Could not find the specified course by ID.";

const COURSE_WITH_OWNER_SELECT: &str = r#"
    SELECT c.id, c.title, c.description, c.estimated_time, c.materials_needed,
           c.user_id, c.created_at, c.updated_at,
           u.first_name AS owner_first_name,
           u.last_name AS owner_last_name,
           u.email_address AS owner_email_address
    FROM courses c
    INNER JOIN users u ON u.id = c.user_id
"#;

pub struct CourseService;

impl CourseService {
    pub async fn get_courses(db: &SqlitePool) -> Result<Vec<CourseWithOwner>, AppError> {
        let rows = sqlx::query_as::<_, CourseWithOwnerRow>(&format!(
            "{COURSE_WITH_OWNER_SELECT} ORDER BY c.id"
        ))
        .fetch_all(db)
        .await
        .context("Failed to fetch courses")
        .map_err(AppError::database)?;

        Ok(rows.into_iter().map(CourseWithOwner::from).collect())
    }

    pub async fn get_course(db: &SqlitePool, id: i64) -> Result<CourseWithOwner, AppError> {
        let row = sqlx::query_as::<_, CourseWithOwnerRow>(&format!(
            "{COURSE_WITH_OWNER_SELECT} WHERE c.id = ?"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch course")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow!(COURSE_NOT_FOUND)))?;

        Ok(row.into())
    }

    /// Loads the bare course row, for ownership checks before a write.
    pub async fn find_course(db: &SqlitePool, id: i64) -> Result<Course, AppError> {
        sqlx::query_as::<_, Course>(
            r#"
            SELECT id, title, description, estimated_time, materials_needed,
                   user_id, created_at, updated_at
            FROM courses
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch course")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow!(COURSE_NOT_FOUND)))
    }

    pub async fn create_course(
        db: &SqlitePool,
        user_id: i64,
        dto: CourseDto,
    ) -> Result<Course, AppError> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            INSERT INTO courses (title, description, estimated_time, materials_needed, user_id)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, title, description, estimated_time, materials_needed,
                      user_id, created_at, updated_at
            "#,
        )
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(&dto.estimated_time)
        .bind(&dto.materials_needed)
        .bind(user_id)
        .fetch_one(db)
        .await
        .context("Failed to insert course")
        .map_err(AppError::database)?;

        Ok(course)
    }

    /// Replaces the editable fields of course `id`. The owner never changes.
    pub async fn update_course(db: &SqlitePool, id: i64, dto: CourseDto) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE courses
            SET title = ?, description = ?, estimated_time = ?, materials_needed = ?,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = ?
            "#,
        )
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(&dto.estimated_time)
        .bind(&dto.materials_needed)
        .bind(id)
        .execute(db)
        .await
        .context("Failed to update course")
        .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!(COURSE_NOT_FOUND)));
        }

        Ok(())
    }

    pub async fn delete_course(db: &SqlitePool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM courses WHERE id = ?")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete course")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!(COURSE_NOT_FOUND)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    async fn setup() -> (SqlitePool, i64) {
        let db = coursebook_db::init_memory_pool().await.unwrap();
        let user_id: i64 = sqlx::query_scalar(
            "INSERT INTO users (first_name, last_name, email_address, password)
             VALUES ('Joe', 'Smith', 'joe@smith.com', 'hash') RETURNING id",
        )
        .fetch_one(&db)
        .await
        .unwrap();
        (db, user_id)
    }

    fn dto(title: &str) -> CourseDto {
        CourseDto {
            title: title.to_string(),
            description: "A course.".to_string(),
            estimated_time: Some("4 hours".to_string()),
            materials_needed: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_course_with_owner() {
        let (db, user_id) = setup().await;

        let course = CourseService::create_course(&db, user_id, dto("Rust"))
            .await
            .unwrap();
        let fetched = CourseService::get_course(&db, course.id).await.unwrap();

        assert_eq!(fetched.course, course);
        assert_eq!(fetched.user.id, user_id);
        assert_eq!(fetched.user.email_address, "joe@smith.com");
    }

    #[tokio::test]
    async fn test_get_courses_lists_every_course() {
        let (db, user_id) = setup().await;
        CourseService::create_course(&db, user_id, dto("One"))
            .await
            .unwrap();
        CourseService::create_course(&db, user_id, dto("Two"))
            .await
            .unwrap();

        let courses = CourseService::get_courses(&db).await.unwrap();
        let titles: Vec<_> = courses.iter().map(|c| c.course.title.as_str()).collect();
        assert_eq!(titles, vec!["One", "Two"]);
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let (db, user_id) = setup().await;
        let course = CourseService::create_course(&db, user_id, dto("Old"))
            .await
            .unwrap();

        let mut update = dto("New");
        update.estimated_time = None;
        CourseService::update_course(&db, course.id, update)
            .await
            .unwrap();

        let updated = CourseService::find_course(&db, course.id).await.unwrap();
        assert_eq!(updated.title, "New");
        assert_eq!(updated.estimated_time, None);
        assert_eq!(updated.user_id, user_id);
    }

    #[tokio::test]
    async fn test_update_refreshes_updated_at_only() {
        let (db, user_id) = setup().await;
        let course = CourseService::create_course(&db, user_id, dto("Old"))
            .await
            .unwrap();
        sqlx::query(
            "UPDATE courses SET created_at = '2000-01-01 00:00:00', updated_at = '2000-01-01 00:00:00' WHERE id = ?",
        )
        .bind(course.id)
        .execute(&db)
        .await
        .unwrap();

        CourseService::update_course(&db, course.id, dto("New"))
            .await
            .unwrap();

        let updated = CourseService::find_course(&db, course.id).await.unwrap();
        assert_eq!(updated.created_at.format("%Y-%m-%d").to_string(), "2000-01-01");
        assert!(updated.updated_at > updated.created_at);
    }

    #[tokio::test]
    async fn test_missing_course_is_not_found() {
        let (db, _) = setup().await;

        for error in [
            CourseService::get_course(&db, 99).await.unwrap_err(),
            CourseService::find_course(&db, 99).await.unwrap_err(),
            CourseService::update_course(&db, 99, dto("x"))
                .await
                .unwrap_err(),
            CourseService::delete_course(&db, 99).await.unwrap_err(),
        ] {
            assert_eq!(error.status, StatusCode::NOT_FOUND);
        }
    }

    #[tokio::test]
    async fn test_delete_removes_course() {
        let (db, user_id) = setup().await;
        let course = CourseService::create_course(&db, user_id, dto("Gone"))
            .await
            .unwrap();

        CourseService::delete_course(&db, course.id).await.unwrap();

        assert!(CourseService::find_course(&db, course.id).await.is_err());
    }
}
