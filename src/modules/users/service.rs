use anyhow::Context;
use coursebook_core::{errors::AppError, password::hash_password_blocking};
use coursebook_models::{CreateUserDto, User, validation::EMAIL_EXISTS};
use sqlx::SqlitePool;

pub struct UserService;

impl UserService {
    pub async fn find_by_email(db: &SqlitePool, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, email_address, password, created_at, updated_at
            FROM users
            WHERE email_address = ?
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
        .context("Failed to fetch user by email")
        .map_err(AppError::database)?;

        Ok(user)
    }

    pub async fn email_exists(db: &SqlitePool, email: &str) -> Result<bool, AppError> {
        let existing: Option<i64> =
            sqlx::query_scalar("SELECT id FROM users WHERE email_address = ?")
                .bind(email)
                .fetch_optional(db)
                .await
                .context("Failed to check email")
                .map_err(AppError::database)?;

        Ok(existing.is_some())
    }

    /// Registers a user, storing only the bcrypt hash of the password.
    pub async fn create_user(
        db: &SqlitePool,
        bcrypt_cost: u32,
        dto: CreateUserDto,
    ) -> Result<User, AppError> {
        if Self::email_exists(db, &dto.email_address).await? {
            return Err(AppError::validation(vec![EMAIL_EXISTS.to_string()]));
        }

        let password_hash = hash_password_blocking(dto.password.clone(), bcrypt_cost).await?;

        Self::insert_user(db, &dto, &password_hash).await
    }

    /// Inserts the row. The UNIQUE constraint still decides when two
    /// registrations race past the pre-check.
    pub async fn insert_user(
        db: &SqlitePool,
        dto: &CreateUserDto,
        password_hash: &str,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (first_name, last_name, email_address, password)
            VALUES (?, ?, ?, ?)
            RETURNING id, first_name, last_name, email_address, password, created_at, updated_at
            "#,
        )
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.email_address)
        .bind(password_hash)
        .fetch_one(db)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::validation(vec![EMAIL_EXISTS.to_string()])
            }
            e => AppError::database(anyhow::Error::new(e).context("Failed to insert user")),
        })?;

        Ok(user)
    }
}
