//! Course seeding functionality.

use fake::Fake;
use fake::faker::company::en::CatchPhrase;
use fake::faker::lorem::en::{Paragraph, Words};
use sqlx::{Sqlite, SqlitePool, Transaction};
use std::time::Instant;

use super::models::CourseSeed;

/// Generates `per_user` courses for each of `user_ids`.
pub fn generate_courses(user_ids: &[i64], per_user: usize) -> Vec<CourseSeed> {
    user_ids
        .iter()
        .flat_map(|&user_id| {
            (0..per_user).map(move |_| {
                let hours: u32 = (1..40).fake();
                let materials: Vec<String> = Words(2..6).fake();

                CourseSeed {
                    title: CatchPhrase().fake(),
                    description: Paragraph(2..5).fake(),
                    estimated_time: Some(format!("{} hours", hours)),
                    materials_needed: Some(format!("* {}", materials.join("\n* "))),
                    user_id,
                }
            })
        })
        .collect()
}

/// Seeds courses for the given owners, returning the new ids.
pub async fn seed_courses(
    db: &SqlitePool,
    user_ids: &[i64],
    per_user: usize,
) -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!(
        "📚 Seeding {} courses ({} per user)...",
        user_ids.len() * per_user,
        per_user
    );

    let courses = generate_courses(user_ids, per_user);
    let course_ids = insert_courses_batch(db, &courses).await?;

    println!(
        "   ✓ Inserted {} courses in {:?}",
        course_ids.len(),
        start_time.elapsed()
    );

    Ok(course_ids)
}

pub async fn insert_courses_batch(
    db: &SqlitePool,
    courses: &[CourseSeed],
) -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    let mut tx = db.begin().await?;

    // 5 params per course
    const BATCH_SIZE: usize = 400;

    let mut all_ids = Vec::with_capacity(courses.len());
    for chunk in courses.chunks(BATCH_SIZE) {
        all_ids.extend(insert_courses_chunk(&mut tx, chunk).await?);
    }

    tx.commit().await?;
    Ok(all_ids)
}

async fn insert_courses_chunk(
    tx: &mut Transaction<'_, Sqlite>,
    courses: &[CourseSeed],
) -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    if courses.is_empty() {
        return Ok(Vec::new());
    }

    let placeholders = vec!["(?, ?, ?, ?, ?)"; courses.len()].join(", ");
    let query = format!(
        "INSERT INTO courses (title, description, estimated_time, materials_needed, user_id) \
         VALUES {} RETURNING id",
        placeholders
    );

    let mut q = sqlx::query_scalar(&query);
    for course in courses {
        q = q
            .bind(&course.title)
            .bind(&course.description)
            .bind(&course.estimated_time)
            .bind(&course.materials_needed)
            .bind(course.user_id);
    }

    let ids: Vec<i64> = q.fetch_all(&mut **tx).await?;
    Ok(ids)
}

pub async fn clear_courses(db: &SqlitePool) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🗑️  Clearing courses...");

    let result = sqlx::query("DELETE FROM courses")
        .execute(db)
        .await?
        .rows_affected();

    println!(
        "   ✓ Deleted {} courses in {:?}",
        result,
        start_time.elapsed()
    );

    Ok(result)
}
