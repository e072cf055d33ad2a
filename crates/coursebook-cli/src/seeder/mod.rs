//! Fake data for development databases.
//!
//! Users are inserted first, then each user receives the configured number
//! of courses. All seeded users share one password so any of them can be
//! used to try the authenticated endpoints.

pub mod courses;
pub mod models;
pub mod users;

use std::time::Instant;

use coursebook_core::hash_password_with_cost;
use sqlx::SqlitePool;

pub use models::{CourseSeed, SeedConfig, UserSeed};

/// Summary of a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub users: usize,
    pub courses: usize,
}

pub async fn seed_all(
    db: &SqlitePool,
    config: SeedConfig,
) -> Result<SeedReport, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🌱 Seeding database...");

    let password_hash = hash_password_with_cost(&config.password, config.bcrypt_cost)
        .map_err(|e| format!("Failed to hash password: {}", e.error))?;

    let user_ids = users::seed_users(db, config.users, &password_hash).await?;
    let course_ids = courses::seed_courses(db, &user_ids, config.courses_per_user).await?;

    println!("\n✅ Seeding complete in {:?}", start_time.elapsed());
    println!("   Every seeded user signs in with password '{}'", config.password);

    Ok(SeedReport {
        users: user_ids.len(),
        courses: course_ids.len(),
    })
}

/// Removes every course and user.
pub async fn clear_all(db: &SqlitePool) -> Result<(), Box<dyn std::error::Error>> {
    courses::clear_courses(db).await?;
    users::clear_users(db).await?;
    println!("\n✅ Database cleared");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn count(db: &SqlitePool, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(db)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_seed_and_clear() {
        let db = coursebook_db::init_memory_pool().await.unwrap();
        let config = SeedConfig::new(4)
            .with_courses_per_user(2)
            .with_bcrypt_cost(4);

        let report = seed_all(&db, config).await.unwrap();

        assert_eq!(report, SeedReport { users: 4, courses: 8 });
        assert_eq!(count(&db, "users").await, 4);
        assert_eq!(count(&db, "courses").await, 8);

        clear_all(&db).await.unwrap();

        assert_eq!(count(&db, "users").await, 0);
        assert_eq!(count(&db, "courses").await, 0);
    }

    #[tokio::test]
    async fn test_seeded_password_verifies() {
        let db = coursebook_db::init_memory_pool().await.unwrap();
        seed_all(&db, SeedConfig::new(1).with_bcrypt_cost(4))
            .await
            .unwrap();

        let hash: String = sqlx::query_scalar("SELECT password FROM users")
            .fetch_one(&db)
            .await
            .unwrap();

        assert!(coursebook_core::verify_password("password", &hash).unwrap());
    }
}
