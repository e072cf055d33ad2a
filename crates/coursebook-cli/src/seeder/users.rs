//! User seeding functionality.

use fake::Fake;
use fake::faker::name::en::*;
use sqlx::{Sqlite, SqlitePool, Transaction};
use std::time::Instant;

use super::models::UserSeed;

/// Lowercase ASCII letters and digits of `name`, so generated addresses
/// pass the API's e-mail rule.
fn email_part(name: &str) -> String {
    let part: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if part.is_empty() {
        "user".to_string()
    } else {
        part
    }
}

/// Generates `count` users sharing one password hash. Addresses are numbered
/// from `first_index` so repeated runs do not collide.
pub fn generate_users(count: usize, first_index: i64, password_hash: &str) -> Vec<UserSeed> {
    (first_index..first_index + count as i64)
        .map(|idx| {
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();

            let email_address = format!(
                "{}.{}{}@example.com",
                email_part(&first_name),
                email_part(&last_name),
                idx
            );

            UserSeed {
                first_name,
                last_name,
                email_address,
                password_hash: password_hash.to_string(),
            }
        })
        .collect()
}

/// Seeds users into the database, returning their ids.
pub async fn seed_users(
    db: &SqlitePool,
    count: usize,
    password_hash: &str,
) -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("👥 Seeding {} users...", count);

    let next_id: i64 = sqlx::query_scalar("SELECT COALESCE(MAX(id), 0) + 1 FROM users")
        .fetch_one(db)
        .await?;

    let users = generate_users(count, next_id, password_hash);
    let user_ids = insert_users_batch(db, &users).await?;

    println!(
        "   ✓ Inserted {} users in {:?}",
        user_ids.len(),
        start_time.elapsed()
    );

    Ok(user_ids)
}

/// Inserts users in one transaction using multi-row INSERT statements.
pub async fn insert_users_batch(
    db: &SqlitePool,
    users: &[UserSeed],
) -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    let mut tx = db.begin().await?;

    // 4 params per user
    const BATCH_SIZE: usize = 500;

    let mut all_ids = Vec::with_capacity(users.len());
    for chunk in users.chunks(BATCH_SIZE) {
        all_ids.extend(insert_users_chunk(&mut tx, chunk).await?);
    }

    tx.commit().await?;
    Ok(all_ids)
}

async fn insert_users_chunk(
    tx: &mut Transaction<'_, Sqlite>,
    users: &[UserSeed],
) -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    if users.is_empty() {
        return Ok(Vec::new());
    }

    let placeholders = vec!["(?, ?, ?, ?)"; users.len()].join(", ");
    let query = format!(
        "INSERT INTO users (first_name, last_name, email_address, password) VALUES {} RETURNING id",
        placeholders
    );

    let mut q = sqlx::query_scalar(&query);
    for user in users {
        q = q
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(&user.email_address)
            .bind(&user.password_hash);
    }

    let ids: Vec<i64> = q.fetch_all(&mut **tx).await?;
    Ok(ids)
}

/// Creates a single user from already validated input.
pub async fn create_user(
    db: &SqlitePool,
    first_name: &str,
    last_name: &str,
    email_address: &str,
    password_hash: &str,
) -> Result<i64, Box<dyn std::error::Error>> {
    let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE email_address = ?")
        .bind(email_address)
        .fetch_optional(db)
        .await?;

    if existing.is_some() {
        return Err(coursebook_models::validation::EMAIL_EXISTS.into());
    }

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO users (first_name, last_name, email_address, password)
         VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(first_name)
    .bind(last_name)
    .bind(email_address)
    .bind(password_hash)
    .fetch_one(db)
    .await?;

    Ok(id)
}

/// Deletes every user. Courses must be cleared first.
pub async fn clear_users(db: &SqlitePool) -> Result<u64, Box<dyn std::error::Error>> {
    let start_time = Instant::now();
    println!("🗑️  Clearing users...");

    let result = sqlx::query("DELETE FROM users")
        .execute(db)
        .await?
        .rows_affected();

    println!(
        "   ✓ Deleted {} users in {:?}",
        result,
        start_time.elapsed()
    );

    Ok(result)
}
